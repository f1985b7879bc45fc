//! Mapping a velocity model's layer names onto catalog interfaces.
//!
//! Layers are given deepest first. Each name must resolve to an interface
//! through the catalog (canonical or alias) or through an explicit
//! per-model remap such as `"LAYER_A CMB; LAYER_B MOHO"`.

use std::collections::HashMap;

use crate::catalog;
use crate::catalog::DefinedInterfaces;
use crate::error::InterfaceError;
use crate::error::Result;
use crate::interface::EarthInterface;
use crate::interface::InterfaceGroup;

/// Model layer name → interface overrides for names the catalog does not
/// know.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerRemap {
    entries: HashMap<String, EarthInterface>,
}

impl LayerRemap {
    /// Parses `"layer iface; layer iface"`. Within an entry the two names may
    /// be separated by spaces, tabs or commas. Layer names must not already
    /// resolve through the catalog and targets must.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        for entry in text.split(';') {
            if entry.trim().is_empty() {
                continue;
            }
            let names: Vec<&str> = entry
                .split(|c: char| c == ' ' || c == '\t' || c == ',')
                .filter(|s| !s.is_empty())
                .collect();
            let [layer, target] = names.as_slice() else {
                return Err(InterfaceError::invalid_remap(
                    entry.trim(),
                    "expected a model layer name and an EarthInterface name",
                ));
            };
            if catalog::is_valid_mapped_name(layer) {
                return Err(InterfaceError::invalid_remap(
                    entry.trim(),
                    format!("{layer} is already a valid EarthInterface name"),
                ));
            }
            let Some(iface) = catalog::resolve(target) else {
                return Err(InterfaceError::invalid_remap(
                    entry.trim(),
                    format!("{target} is not a defined EarthInterface"),
                ));
            };
            entries.insert(layer.to_ascii_uppercase(), iface);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, layer: &str) -> Option<EarthInterface> {
        self.entries.get(&layer.to_ascii_uppercase()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The validated interfaces of one velocity model, deepest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInterfaces {
    interfaces: Vec<EarthInterface>,
    layer_names: Vec<String>,
    index_by_name: HashMap<String, usize>,
}

impl ModelInterfaces {
    /// Maps every layer to an interface, then checks for duplicates, order,
    /// and that the model has at least one CRUST and one MANTLE interface.
    pub fn from_layer_names<S: AsRef<str>>(layers: &[S], remap: &LayerRemap) -> Result<Self> {
        for layer in remap.entries.keys() {
            if !layers
                .iter()
                .any(|l| l.as_ref().eq_ignore_ascii_case(layer))
            {
                return Err(InterfaceError::invalid_remap(
                    layer.clone(),
                    "layer is not defined by the model",
                ));
            }
        }

        let mut interfaces = Vec::with_capacity(layers.len());
        let mut layer_names = Vec::with_capacity(layers.len());
        let mut index_by_name: HashMap<String, usize> = HashMap::new();
        for (index, layer) in layers.iter().enumerate() {
            let layer = layer.as_ref();
            let iface = catalog::resolve(layer)
                .or_else(|| remap.get(layer))
                .ok_or_else(|| InterfaceError::UnmappedLayer {
                    layer: layer.to_string(),
                    index,
                })?;
            if let Some(first) = index_by_name.insert(iface.name().to_string(), index) {
                return Err(InterfaceError::DuplicateInterface {
                    interface: iface,
                    first,
                    second: index,
                });
            }
            interfaces.push(iface);
            layer_names.push(layer.to_string());
        }

        catalog::validate_order(&interfaces)
            .map_err(|err| InterfaceError::ModelOrder(Box::new(err)))?;

        let model = Self {
            interfaces,
            layer_names,
            index_by_name,
        };
        for group in [InterfaceGroup::Crust, InterfaceGroup::Mantle] {
            if model.top_most(group).is_none() {
                return Err(InterfaceError::MissingGroup(group));
            }
        }
        tracing::debug!(
            layers = model.interfaces.len(),
            remapped = remap.len(),
            "validated model interfaces"
        );
        Ok(model)
    }

    pub fn interfaces(&self) -> &[EarthInterface] {
        &self.interfaces
    }

    /// Layer names as supplied by the model.
    pub fn layer_names(&self) -> &[String] {
        &self.layer_names
    }

    pub fn layer_index(&self, iface: EarthInterface) -> Option<usize> {
        self.index_by_name.get(iface.name()).copied()
    }

    pub fn contains(&self, iface: EarthInterface) -> bool {
        self.index_by_name.contains_key(iface.name())
    }

    /// Shallowest interface the model defines in `group`.
    pub fn top_most(&self, group: InterfaceGroup) -> Option<EarthInterface> {
        self.interfaces
            .iter()
            .rev()
            .copied()
            .find(|iface| iface.group() == group)
    }

    /// Deepest interface the model defines in `group`.
    pub fn bottom_most(&self, group: InterfaceGroup) -> Option<EarthInterface> {
        self.interfaces
            .iter()
            .copied()
            .find(|iface| iface.group() == group)
    }
}

impl DefinedInterfaces for ModelInterfaces {
    fn is_defined(&self, name: &str) -> bool {
        self.index_by_name.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const AK135: &[&str] = &[
        "INNER_CORE",
        "OUTER_CORE",
        "LOWER_MANTLE",
        "TRANSITION_ZONE",
        "UPPER_MANTLE",
        "LOWER_CRUST",
        "UPPER_CRUST",
    ];

    fn ak135_remap() -> LayerRemap {
        LayerRemap::parse("lower_mantle M660; transition_zone,M410;\tupper_mantle\tMOHO")
            .unwrap_or_default()
    }

    #[test]
    fn remap_parses_mixed_separators() {
        let remap = ak135_remap();
        assert_eq!(remap.len(), 3);
        assert_eq!(remap.get("Transition_Zone"), Some(EarthInterface::M410));
        assert_eq!(remap.get("UPPER_MANTLE"), Some(EarthInterface::Moho));
    }

    #[test]
    fn remap_rejects_malformed_entries() {
        assert!(matches!(
            LayerRemap::parse("ONLY_ONE_NAME"),
            Err(InterfaceError::InvalidRemap { .. })
        ));
        assert!(matches!(
            LayerRemap::parse("CRUST MOHO"),
            Err(InterfaceError::InvalidRemap { .. })
        ));
        assert!(matches!(
            LayerRemap::parse("LID NOT_AN_INTERFACE"),
            Err(InterfaceError::InvalidRemap { .. })
        ));
        assert_eq!(LayerRemap::parse(" ; "), Ok(LayerRemap::default()));
    }

    #[test]
    fn maps_aliases_and_remapped_layers() {
        let model = ModelInterfaces::from_layer_names(AK135, &ak135_remap());
        let Ok(model) = model else {
            panic!("model should validate: {model:?}");
        };
        assert_eq!(
            model.interfaces(),
            &[
                EarthInterface::Icb,
                EarthInterface::Cmb,
                EarthInterface::M660,
                EarthInterface::M410,
                EarthInterface::Moho,
                EarthInterface::LowerCrustTop,
                EarthInterface::UpperCrustTop,
            ]
        );
        assert_eq!(model.layer_index(EarthInterface::Moho), Some(4));
        assert!(!model.contains(EarthInterface::M210));
        assert_eq!(
            model.top_most(InterfaceGroup::Crust),
            Some(EarthInterface::UpperCrustTop)
        );
        assert_eq!(
            model.bottom_most(InterfaceGroup::Mantle),
            Some(EarthInterface::M660)
        );
        assert_eq!(
            catalog::find_lowest_defined_above_in_group(EarthInterface::M210, &model),
            Some(EarthInterface::Moho)
        );
    }

    #[test]
    fn unmapped_layer_is_reported_with_index() {
        let err = ModelInterfaces::from_layer_names(AK135, &LayerRemap::default());
        assert_eq!(
            err,
            Err(InterfaceError::UnmappedLayer {
                layer: "LOWER_MANTLE".to_string(),
                index: 2
            })
        );
    }

    #[test]
    fn duplicate_interfaces_are_rejected() {
        let err = ModelInterfaces::from_layer_names(
            &["CMB", "MANTLE", "MOHO", "CRUST"],
            &LayerRemap::default(),
        );
        assert_eq!(
            err,
            Err(InterfaceError::DuplicateInterface {
                interface: EarthInterface::Moho,
                first: 1,
                second: 2
            })
        );
    }

    #[test]
    fn out_of_order_layers_are_rejected() {
        let err = ModelInterfaces::from_layer_names(&["CRUST", "MANTLE"], &LayerRemap::default());
        assert_eq!(
            err,
            Err(InterfaceError::ModelOrder(Box::new(
                InterfaceError::OutOfOrder {
                    later: EarthInterface::Moho,
                    earlier: EarthInterface::UpperCrustTop
                }
            )))
        );
    }

    #[test]
    fn crust_and_mantle_groups_are_required() {
        let err = ModelInterfaces::from_layer_names(&["CMB", "MOHO"], &LayerRemap::default());
        assert_eq!(err, Err(InterfaceError::MissingGroup(InterfaceGroup::Crust)));
        let err = ModelInterfaces::from_layer_names(&["CMB", "SURFACE"], &LayerRemap::default());
        assert_eq!(err, Err(InterfaceError::MissingGroup(InterfaceGroup::Mantle)));
    }

    #[test]
    fn remap_layer_must_exist_in_model() {
        let remap = LayerRemap::parse("LID MOHO").unwrap_or_default();
        let err = ModelInterfaces::from_layer_names(&["CMB", "MANTLE", "CRUST"], &remap);
        assert!(matches!(err, Err(InterfaceError::InvalidRemap { .. })));
    }
}
