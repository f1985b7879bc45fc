//! Catalog operations over the static interface table.
//!
//! Name resolution checks canonical names first and then the alias table of
//! commonly used model layer names. Neighbor searches walk ordinals one step
//! at a time and never leave the start interface's group.

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::InterfaceError;
use crate::error::Result;
use crate::interface::EarthInterface;

/// Alias → canonical interface, as `(alias, target)` pairs.
const ALIASES: &[(&str, EarthInterface)] = &[
    ("INNER_CORE", EarthInterface::Icb),
    ("OUTER_CORE", EarthInterface::Cmb),
    ("CORE", EarthInterface::Cmb),
    ("MANTLE_TOP", EarthInterface::Moho),
    ("MANTLE", EarthInterface::Moho),
    ("LOWER_CRUST", EarthInterface::LowerCrustTop),
    ("MIDDLE_CRUST", EarthInterface::MiddleCrustTop),
    ("UPPER_CRUST", EarthInterface::UpperCrustTop),
    ("CRUST_TOP", EarthInterface::UpperCrustTop),
    ("CRUST", EarthInterface::UpperCrustTop),
    ("SEDIMENTARY_LAYER_1", EarthInterface::SedimentaryLayer1Top),
    ("SEDIMENTARY_LAYER_TOP", EarthInterface::SedimentaryLayer1Top),
    ("SEDIMENTARY_LAYER", EarthInterface::SedimentaryLayer1Top),
    ("SEDIMENTS", EarthInterface::SedimentaryLayer1Top),
    ("SEDIMENTARY_LAYER_2", EarthInterface::SedimentaryLayer2Top),
    ("SEDIMENTARY_LAYER_3", EarthInterface::SedimentaryLayer3Top),
    ("SEDIMENTARY_LAYER_4", EarthInterface::SedimentaryLayer4Top),
    ("SEDIMENTARY_LAYER_5", EarthInterface::SedimentaryLayer5Top),
    ("ICE", EarthInterface::IceTop),
    ("WATER", EarthInterface::WaterTop),
];

static ALIAS_MAP: OnceLock<HashMap<&'static str, EarthInterface>> = OnceLock::new();

fn alias_map() -> &'static HashMap<&'static str, EarthInterface> {
    ALIAS_MAP.get_or_init(|| ALIASES.iter().copied().collect())
}

/// Direction of an ordinal walk. `Upward` increases the ordinal (toward
/// shallower interfaces), `Downward` decreases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    Upward,
    Downward,
}

/// Set of interface names a model defines.
pub trait DefinedInterfaces {
    /// `name` is always a canonical interface name.
    fn is_defined(&self, name: &str) -> bool;
}

impl DefinedInterfaces for HashSet<String> {
    fn is_defined(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl DefinedInterfaces for BTreeSet<String> {
    fn is_defined(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Name → model layer index.
impl DefinedInterfaces for HashMap<String, usize> {
    fn is_defined(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<T: DefinedInterfaces + ?Sized> DefinedInterfaces for &T {
    fn is_defined(&self, name: &str) -> bool {
        (**self).is_defined(name)
    }
}

/// Fails if any entry's ordinal is not strictly greater than its
/// predecessor's. The error names the offending adjacent pair.
pub fn validate_order(interfaces: &[EarthInterface]) -> Result<()> {
    for pair in interfaces.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);
        if later.ordinal() <= earlier.ordinal() {
            return Err(InterfaceError::OutOfOrder { later, earlier });
        }
    }
    Ok(())
}

/// Resolves a canonical name or alias, ignoring ASCII case.
pub fn resolve(name: &str) -> Option<EarthInterface> {
    if let Ok(iface) = name.parse::<EarthInterface>() {
        return Some(iface);
    }
    let upper = name.to_ascii_uppercase();
    let found = alias_map().get(upper.as_str()).copied();
    if found.is_none() {
        tracing::debug!(name, "no EarthInterface or alias matches name");
    }
    found
}

/// Canonical name for `name`, which may itself be canonical or an alias.
pub fn resolve_name(name: &str) -> Option<&'static str> {
    resolve(name).map(EarthInterface::name)
}

/// True when `name` is a canonical interface name (any case).
pub fn is_valid_name(name: &str) -> bool {
    name.parse::<EarthInterface>().is_ok()
}

/// True when `name` is a canonical interface name or a known alias.
pub fn is_valid_mapped_name(name: &str) -> bool {
    resolve(name).is_some()
}

/// Alias table entries in declaration order.
pub fn aliases() -> impl Iterator<Item = (&'static str, EarthInterface)> {
    ALIASES.iter().copied()
}

/// Walks ordinals from `start` in `direction`, confined to `start`'s group
/// and the catalog bounds, returning the first interface `model` defines.
/// `start` itself is checked first.
pub fn find_defined_neighbor_in_group<M>(
    start: EarthInterface,
    model: &M,
    direction: SearchDirection,
) -> Option<EarthInterface>
where
    M: DefinedInterfaces + ?Sized,
{
    let group = start.group();
    let mut ordinal = Some(start.ordinal());
    while let Some(current) = ordinal.and_then(EarthInterface::from_ordinal) {
        if current.group() != group {
            break;
        }
        if model.is_defined(current.name()) {
            tracing::debug!(
                start = %start,
                found = %current,
                ?direction,
                "found defined interface in group"
            );
            return Some(current);
        }
        ordinal = match direction {
            SearchDirection::Upward => Some(current.ordinal() + 1),
            SearchDirection::Downward => current.ordinal().checked_sub(1),
        };
    }
    None
}

/// Upward (increasing ordinal) walk from `start` within its group.
pub fn find_lowest_defined_above_in_group<M>(
    start: EarthInterface,
    model: &M,
) -> Option<EarthInterface>
where
    M: DefinedInterfaces + ?Sized,
{
    find_defined_neighbor_in_group(start, model, SearchDirection::Upward)
}

/// Downward (decreasing ordinal) walk from `start` within its group.
pub fn find_highest_defined_below_in_group<M>(
    start: EarthInterface,
    model: &M,
) -> Option<EarthInterface>
where
    M: DefinedInterfaces + ?Sized,
{
    find_defined_neighbor_in_group(start, model, SearchDirection::Downward)
}

/// String entry point for [`find_lowest_defined_above_in_group`]. The start
/// name must be canonical; aliases are not accepted here.
pub fn find_lowest_defined_above_in_group_named<M>(
    start: &str,
    model: &M,
) -> Result<Option<EarthInterface>>
where
    M: DefinedInterfaces + ?Sized,
{
    Ok(find_lowest_defined_above_in_group(
        parse_start(start)?,
        model,
    ))
}

/// String entry point for [`find_highest_defined_below_in_group`].
pub fn find_highest_defined_below_in_group_named<M>(
    start: &str,
    model: &M,
) -> Result<Option<EarthInterface>>
where
    M: DefinedInterfaces + ?Sized,
{
    Ok(find_highest_defined_below_in_group(
        parse_start(start)?,
        model,
    ))
}

fn parse_start(start: &str) -> Result<EarthInterface> {
    start
        .parse::<EarthInterface>()
        .map_err(|_| InterfaceError::UnknownName(start.to_string()))
}

/// Table of every interface except the NONE sentinel.
pub fn definitions_table() -> String {
    let mut out = String::from("                                Earth Interface Entries\n\n");
    out.push_str(
        " Index    Name                        LayerName                 Group     Description\n\n",
    );
    for iface in EarthInterface::all().filter(|i| *i != EarthInterface::NoInterface) {
        let group: &'static str = iface.group().into();
        out.push_str(&format!(
            "  {:<2}      {:<23}     {:<22}    {:<6}    {}\n",
            iface.ordinal(),
            iface.name(),
            iface.default_layer_name(),
            group,
            iface.description()
        ));
    }
    out
}

/// Alias table, sorted by alias.
pub fn alias_table() -> String {
    let mut entries: Vec<(&str, EarthInterface)> = aliases().collect();
    entries.sort_unstable_by_key(|(alias, _)| *alias);

    let mut out = String::from("  Common Interface   -->    EarthInterface\n\n");
    for (alias, iface) in entries {
        out.push_str(&format!("  {alias:<20}      {}\n", iface.name()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn model(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn every_alias_targets_a_catalog_entry() {
        for (alias, target) in aliases() {
            assert_eq!(resolve(alias), Some(target), "alias {alias}");
            assert!(!is_valid_name(alias), "alias {alias} shadows a canonical name");
        }
    }

    #[test]
    fn canonical_names_win_over_aliases() {
        assert_eq!(resolve("cmb"), Some(EarthInterface::Cmb));
        assert_eq!(resolve("Mantle"), Some(EarthInterface::Moho));
        assert_eq!(resolve("sediments"), Some(EarthInterface::SedimentaryLayer1Top));
        assert_eq!(resolve("asthenosphere"), None);
    }

    #[test]
    fn resolve_name_returns_canonical_spelling() {
        assert_eq!(resolve_name("outer_core"), Some("CMB"));
        assert_eq!(resolve_name("water_top"), Some("WATER_TOP"));
        assert_eq!(resolve_name(""), None);
    }

    #[test]
    fn validity_predicates() {
        assert!(is_valid_name("icb"));
        assert!(!is_valid_name("INNER_CORE"));
        assert!(is_valid_mapped_name("INNER_CORE"));
        assert!(!is_valid_mapped_name("D_DOUBLE_PRIME"));
    }

    #[test]
    fn surrounding_whitespace_is_not_ignored() {
        assert_eq!(resolve(" moho "), None);
        assert_eq!(resolve("mantle\t"), None);
        assert!(!is_valid_name(" ICB"));
        assert_eq!(
            find_lowest_defined_above_in_group_named(" MOHO ", &model(&["MOHO"])),
            Err(InterfaceError::UnknownName(" MOHO ".to_string()))
        );
    }

    #[test]
    fn validate_order_accepts_sparse_deepest_first_lists() {
        let layers = [
            EarthInterface::Cmb,
            EarthInterface::M410,
            EarthInterface::Moho,
            EarthInterface::Surface,
        ];
        assert_eq!(validate_order(&layers), Ok(()));
        assert_eq!(validate_order(&[]), Ok(()));
    }

    #[test]
    fn validate_order_rejects_duplicates() {
        let layers = [EarthInterface::Moho, EarthInterface::Moho];
        assert_eq!(
            validate_order(&layers),
            Err(InterfaceError::OutOfOrder {
                later: EarthInterface::Moho,
                earlier: EarthInterface::Moho
            })
        );
    }

    #[test]
    fn downward_walk_stops_at_catalog_start() {
        let empty = model(&[]);
        assert_eq!(
            find_highest_defined_below_in_group(EarthInterface::Icb, &empty),
            None
        );
        let core = model(&["ICB"]);
        assert_eq!(
            find_highest_defined_below_in_group(EarthInterface::Cmb, &core),
            Some(EarthInterface::Icb)
        );
    }

    #[test]
    fn upward_walk_skips_undefined_crust_layers() {
        let crust = model(&["MOHO", "UPPER_CRUST_TOP", "SURFACE"]);
        assert_eq!(
            find_lowest_defined_above_in_group(EarthInterface::LowerCrustTop, &crust),
            Some(EarthInterface::UpperCrustTop)
        );
    }

    #[test]
    fn named_entry_points_reject_unknown_start() {
        let crust = model(&["SURFACE"]);
        assert_eq!(
            find_lowest_defined_above_in_group_named("CRUST", &crust),
            Err(InterfaceError::UnknownName("CRUST".to_string()))
        );
        assert_eq!(
            find_lowest_defined_above_in_group_named("sedimentary_layer_3_top", &crust),
            Ok(Some(EarthInterface::Surface))
        );
    }

    #[test]
    fn definitions_table_omits_sentinel() {
        let table = definitions_table();
        assert!(table.contains("SEDIMENTARY_LAYER_5_TOP"));
        assert!(table.contains("Core-Mantle Boundary"));
        assert!(!table.contains("Not an Interface"));
    }

    #[test]
    fn alias_table_is_sorted() {
        let table = alias_table();
        let core = table.find("  CORE ").unwrap_or(usize::MAX);
        let water = table.find("  WATER ").unwrap_or(0);
        assert!(core < water);
    }
}
