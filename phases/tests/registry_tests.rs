//! Whole-table checks over the compiled-in phase registry.

use geophase_interfaces::catalog;
use geophase_phases::InterfaceToken;
use geophase_phases::PhaseRegistry;
use geophase_phases::WaveType;
use geophase_phases::classifier::classifier_outputs;
use geophase_phases::deduce_wave_types;
use pretty_assertions::assert_eq;

#[test]
fn every_referenced_interface_resolves() {
    let registry = PhaseRegistry::build_all().expect("compiled-in table should build");
    for phase in &registry {
        let wave_tokens = phase
            .wave_types
            .iter()
            .flat_map(|seq| seq.interfaces().collect::<Vec<_>>());
        let event_tokens = phase
            .ray_events
            .iter()
            .flat_map(|seq| seq.iter().map(|event| event.at).collect::<Vec<_>>());
        for token in wave_tokens.chain(event_tokens) {
            if let InterfaceToken::Interface(iface) = token {
                assert_eq!(
                    catalog::resolve(iface.name()),
                    Some(iface),
                    "phase {}",
                    phase.name
                );
            }
        }
    }
}

#[test]
fn every_classifier_output_is_registered() {
    let registry = PhaseRegistry::global();
    for name in classifier_outputs() {
        assert!(registry.lookup(name).is_some(), "{name} missing from registry");
    }
}

#[test]
fn names_are_unique_and_null_is_not_a_phase() {
    let registry = PhaseRegistry::global();
    let mut names: Vec<&str> = registry.names().collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
    assert!(registry.lookup("NULL").is_none());
}

#[test]
fn deduced_wave_types_match_the_name_rule() {
    let p = Some(WaveType::P);
    let s = Some(WaveType::S);
    assert_eq!(deduce_wave_types("PcS"), (p, s));
    assert_eq!(deduce_wave_types("Lg"), (s, s));
    assert_eq!(deduce_wave_types("nP"), (p, p));
    assert_eq!(deduce_wave_types("SKS"), (s, s));

    for phase in PhaseRegistry::global() {
        assert_eq!(
            (phase.source_wave_type, phase.receiver_wave_type),
            deduce_wave_types(phase.name),
            "phase {}",
            phase.name
        );
    }
}

#[test]
fn wave_type_lists_agree_with_deduced_end_points() {
    for phase in PhaseRegistry::global() {
        let Some(seq) = &phase.wave_types else {
            continue;
        };
        assert_eq!(Some(seq.initial), phase.source_wave_type, "phase {}", phase.name);
        assert_eq!(
            Some(seq.final_wave_type()),
            phase.receiver_wave_type,
            "phase {}",
            phase.name
        );
    }
}

#[test]
fn primary_wave_type_means_no_conversion() {
    for phase in PhaseRegistry::global() {
        if let (Some(primary), Some(seq)) = (phase.primary_wave_type, &phase.wave_types) {
            assert_eq!(seq.initial, primary, "phase {}", phase.name);
            assert!(
                seq.changes.iter().all(|change| change.wave_type == primary)
                    || phase.name.contains('K'),
                "phase {} converts but claims a primary wave type",
                phase.name
            );
        }
    }
}

#[test]
fn distance_ranges_are_sane() {
    for phase in PhaseRegistry::global() {
        assert!(
            0.0 <= phase.distance.min
                && phase.distance.min < phase.distance.max
                && phase.distance.max <= 180.0,
            "phase {}",
            phase.name
        );
    }
}

#[test]
fn descriptors_serialize_with_canonical_tokens() {
    let pcs = PhaseRegistry::global().require("PcS").expect("PcS is registered");
    let json = serde_json::to_value(pcs).expect("serialize");
    assert_eq!(json["source_wave_type"], "P");
    assert_eq!(json["receiver_wave_type"], "S");
    assert_eq!(json["wave_types"]["changes"][0]["at"], "CMB");
    assert_eq!(json["ray_events"][0]["kind"], "TOP_SIDE_REFLECTION");
}
