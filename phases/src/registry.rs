//! The phase descriptor registry.
//!
//! Built once from the compiled-in table and immutable afterward, so
//! lookups need no synchronization.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::descriptor::PhaseDefinition;
use crate::descriptor::SeismicPhaseDescriptor;
use crate::error::PhaseError;
use crate::error::Result;
use crate::table::PHASES;
use crate::wave::WaveType;

static GLOBAL: OnceLock<PhaseRegistry> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct PhaseRegistry {
    phases: Vec<SeismicPhaseDescriptor>,
    by_name: HashMap<&'static str, usize>,
    by_file_name: HashMap<&'static str, usize>,
}

impl PhaseRegistry {
    /// Builds every descriptor of the compiled-in table.
    pub fn build_all() -> Result<Self> {
        Self::from_definitions(PHASES)
    }

    /// Builds descriptors from `definitions`, stopping at the first invalid
    /// one. Nothing is returned unless every definition validates.
    pub fn from_definitions(definitions: &[PhaseDefinition]) -> Result<Self> {
        let mut phases = Vec::with_capacity(definitions.len());
        let mut by_name = HashMap::with_capacity(definitions.len());
        let mut by_file_name = HashMap::with_capacity(definitions.len());
        for (index, def) in definitions.iter().enumerate() {
            let descriptor = SeismicPhaseDescriptor::from_definition(def)?;
            if by_name.insert(descriptor.name, index).is_some() {
                return Err(PhaseError::DuplicatePhase(descriptor.name.to_string()));
            }
            if by_file_name.insert(descriptor.file_name, index).is_some() {
                return Err(PhaseError::DuplicatePhase(descriptor.file_name.to_string()));
            }
            phases.push(descriptor);
        }
        tracing::info!(phases = phases.len(), "built seismic phase registry");
        Ok(Self {
            phases,
            by_name,
            by_file_name,
        })
    }

    /// Process-wide registry over the compiled-in table.
    ///
    /// # Panics
    ///
    /// On first use, if the compiled-in table fails validation.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| match Self::build_all() {
            Ok(registry) => registry,
            Err(err) => panic!("compiled-in seismic phase table is invalid: {err}"),
        })
    }

    /// Exact, case-sensitive name match.
    pub fn lookup(&self, name: &str) -> Option<&SeismicPhaseDescriptor> {
        self.by_name.get(name).map(|&index| &self.phases[index])
    }

    pub fn require(&self, name: &str) -> Result<&SeismicPhaseDescriptor> {
        self.lookup(name)
            .ok_or_else(|| PhaseError::UnknownPhaseName(name.to_string()))
    }

    /// Phase whose file name is `file_name` (e.g. `littlep_bigP` → pP).
    pub fn phase_for_file_name(&self, file_name: &str) -> Option<&SeismicPhaseDescriptor> {
        self.by_file_name
            .get(file_name)
            .map(|&index| &self.phases[index])
    }

    /// Descriptors in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, SeismicPhaseDescriptor> {
        self.phases.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.phases.iter().map(|phase| phase.name)
    }

    pub fn with_primary_wave_type(
        &self,
        wave_type: WaveType,
    ) -> impl Iterator<Item = &SeismicPhaseDescriptor> + '_ {
        self.phases
            .iter()
            .filter(move |phase| phase.primary_wave_type == Some(wave_type))
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

impl<'a> IntoIterator for &'a PhaseRegistry {
    type Item = &'a SeismicPhaseDescriptor;
    type IntoIter = std::slice::Iter<'a, SeismicPhaseDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compiled_table_builds() {
        let registry = PhaseRegistry::global();
        assert_eq!(registry.len(), PHASES.len());
        assert!(registry.lookup("PKiKP").is_some());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = PhaseRegistry::global();
        assert_eq!(registry.lookup("pP").map(|p| p.name), Some("pP"));
        assert_eq!(registry.lookup("PP").map(|p| p.name), Some("PP"));
        assert!(registry.lookup("pp").is_none());
        assert!(registry.lookup("NULL").is_none());
    }

    #[test]
    fn require_reports_unknown_names() {
        let err = PhaseRegistry::global().require("PKJKP");
        assert!(matches!(err, Err(PhaseError::UnknownPhaseName(name)) if name == "PKJKP"));
    }

    #[test]
    fn file_names_disambiguate_case_collisions() {
        let registry = PhaseRegistry::global();
        let pairs = [
            ("PP", "bigP_bigP"),
            ("PS", "bigP_bigS"),
            ("SP", "bigS_bigP"),
            ("SS", "bigS_bigS"),
            ("pP", "littlep_bigP"),
            ("pS", "littlep_bigS"),
            ("sP", "littles_bigP"),
            ("sS", "littles_bigS"),
        ];
        for (name, file_name) in pairs {
            assert_eq!(registry.lookup(name).map(|p| p.file_name), Some(file_name));
            assert_eq!(
                registry.phase_for_file_name(file_name).map(|p| p.name),
                Some(name)
            );
        }
        assert_eq!(registry.lookup("Pn").map(|p| p.file_name), Some("Pn"));
    }

    #[test]
    fn duplicate_definitions_are_rejected() {
        let defs = [
            PhaseDefinition::new("Pn", Some(WaveType::P), "one"),
            PhaseDefinition::new("Pn", Some(WaveType::P), "two"),
        ];
        assert!(matches!(
            PhaseRegistry::from_definitions(&defs),
            Err(PhaseError::DuplicatePhase(name)) if name == "Pn"
        ));
    }

    #[test]
    fn bad_reference_aborts_the_whole_build() {
        let defs = [
            PhaseDefinition::new("Pn", Some(WaveType::P), "ok").events("BOTTOM, M410"),
            PhaseDefinition::new("Px", Some(WaveType::P), "bad").events("BOTTOM, M520"),
        ];
        assert!(matches!(
            PhaseRegistry::from_definitions(&defs),
            Err(PhaseError::UnknownInterfaceReference { phase, token })
                if phase == "Px" && token == "M520"
        ));
    }

    #[test]
    fn primary_wave_type_filter() {
        let registry = PhaseRegistry::global();
        let s_names: Vec<&str> = registry
            .with_primary_wave_type(WaveType::S)
            .map(|p| p.name)
            .collect();
        assert!(s_names.contains(&"Sn"));
        assert!(s_names.contains(&"SKS"));
        assert!(!s_names.contains(&"ScP"));
        assert!(!s_names.contains(&"Pn"));
    }
}
