//! The fixed set of named Earth-model interfaces.
//!
//! Variants are declared deepest first, so the derived `Ord` and
//! [`EarthInterface::ordinal`] both follow the catalog order. Per-interface
//! attributes live in a parallel record table indexed by ordinal.

use serde_with::DeserializeFromStr;
use serde_with::SerializeDisplay;
use strum::EnumCount;
use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumCount as EnumCountMacro;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

/// Coarse band an interface belongs to. Neighbor searches never cross a
/// group boundary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum InterfaceGroup {
    Core,
    Mantle,
    Crust,
    Water,
    NotDefined,
}

/// Named depth discontinuity, ordered deepest (ICB) to shallowest.
///
/// DO NOT REORDER: the declaration order is the ordinal order that
/// [`crate::catalog::validate_order`] and the neighbor searches walk.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCountMacro,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[strum(ascii_case_insensitive)]
pub enum EarthInterface {
    #[strum(serialize = "ICB")]
    Icb,
    #[strum(serialize = "CMB")]
    Cmb,
    #[strum(serialize = "M660")]
    M660,
    #[strum(serialize = "M410")]
    M410,
    #[strum(serialize = "M210")]
    M210,
    #[strum(serialize = "MOHO")]
    Moho,
    #[strum(serialize = "LOWER_CRUST_TOP")]
    LowerCrustTop,
    #[strum(serialize = "MIDDLE_CRUST_TOP")]
    MiddleCrustTop,
    #[strum(serialize = "UPPER_CRUST_TOP")]
    UpperCrustTop,
    #[strum(serialize = "SEDIMENTARY_LAYER_5_TOP")]
    SedimentaryLayer5Top,
    #[strum(serialize = "SEDIMENTARY_LAYER_4_TOP")]
    SedimentaryLayer4Top,
    #[strum(serialize = "SEDIMENTARY_LAYER_3_TOP")]
    SedimentaryLayer3Top,
    #[strum(serialize = "SEDIMENTARY_LAYER_2_TOP")]
    SedimentaryLayer2Top,
    #[strum(serialize = "SEDIMENTARY_LAYER_1_TOP")]
    SedimentaryLayer1Top,
    #[strum(serialize = "SURFACE")]
    Surface,
    #[strum(serialize = "ICE_TOP")]
    IceTop,
    #[strum(serialize = "WATER_TOP")]
    WaterTop,
    /// Sentinel: not an interface.
    #[strum(serialize = "NONE")]
    NoInterface,
}

/// Static attributes of one interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub interface: EarthInterface,
    /// Name of the layer that sits on top of this interface.
    pub default_layer_name: &'static str,
    pub description: &'static str,
    pub group: InterfaceGroup,
    /// True for ice, water and the NONE sentinel.
    pub homogeneous_constant_velocity: bool,
}

const fn record(
    interface: EarthInterface,
    default_layer_name: &'static str,
    description: &'static str,
    group: InterfaceGroup,
) -> InterfaceRecord {
    InterfaceRecord {
        interface,
        default_layer_name,
        description,
        group,
        homogeneous_constant_velocity: false,
    }
}

const fn constant_velocity(
    interface: EarthInterface,
    default_layer_name: &'static str,
    description: &'static str,
    group: InterfaceGroup,
) -> InterfaceRecord {
    InterfaceRecord {
        homogeneous_constant_velocity: true,
        ..record(interface, default_layer_name, description, group)
    }
}

// Indexed by ordinal; `records_follow_declaration_order` guards the pairing.
const RECORDS: [InterfaceRecord; EarthInterface::COUNT] = [
    record(
        EarthInterface::Icb,
        "Inner Core",
        "Inner Core Boundary",
        InterfaceGroup::Core,
    ),
    record(
        EarthInterface::Cmb,
        "Outer Core",
        "Core-Mantle Boundary",
        InterfaceGroup::Core,
    ),
    record(
        EarthInterface::M660,
        "Lower Mantle",
        "Lower mantle boundary generally located at approximately 660 km depth.",
        InterfaceGroup::Mantle,
    ),
    record(
        EarthInterface::M410,
        "Mantle Transition Zone",
        "Middle mantle boundary generally located at approximately 410 km depth.",
        InterfaceGroup::Mantle,
    ),
    record(
        EarthInterface::M210,
        "Athenosphere",
        "Upper mantle boundary generally located at approximately 210 km depth.",
        InterfaceGroup::Mantle,
    ),
    record(
        EarthInterface::Moho,
        "Lower Lithosphere",
        "Mohorovicic discontinuity or the boundary between the Earth's crust and mantle.",
        InterfaceGroup::Mantle,
    ),
    record(
        EarthInterface::LowerCrustTop,
        "Lower Crust",
        "Lower Crust Top boundary.",
        InterfaceGroup::Crust,
    ),
    record(
        EarthInterface::MiddleCrustTop,
        "Middle Crust",
        "Middle Crust Top boundary.",
        InterfaceGroup::Crust,
    ),
    record(
        EarthInterface::UpperCrustTop,
        "Upper Crust",
        "Upper Crust Top boundary.",
        InterfaceGroup::Crust,
    ),
    record(
        EarthInterface::SedimentaryLayer5Top,
        "Sedimentary Layer 5",
        "Sedimentary Layer 5 Top Boundary.",
        InterfaceGroup::Crust,
    ),
    record(
        EarthInterface::SedimentaryLayer4Top,
        "Sedimentary Layer 4",
        "Sedimentary Layer 4 Top Boundary.",
        InterfaceGroup::Crust,
    ),
    record(
        EarthInterface::SedimentaryLayer3Top,
        "Sedimentary Layer 3",
        "Sedimentary Layer 3 Top Boundary.",
        InterfaceGroup::Crust,
    ),
    record(
        EarthInterface::SedimentaryLayer2Top,
        "Sedimentary Layer 2",
        "Sedimentary Layer 2 Top Boundary.",
        InterfaceGroup::Crust,
    ),
    record(
        EarthInterface::SedimentaryLayer1Top,
        "Sedimentary Layer 1",
        "Sedimentary Layer 1 Top Boundary.",
        InterfaceGroup::Crust,
    ),
    record(
        EarthInterface::Surface,
        "Surface",
        "Top Layer of Earth (Topography)",
        InterfaceGroup::Crust,
    ),
    constant_velocity(
        EarthInterface::IceTop,
        "Ice",
        "Ice Surface",
        InterfaceGroup::Water,
    ),
    constant_velocity(
        EarthInterface::WaterTop,
        "Water",
        "Water Surface",
        InterfaceGroup::Water,
    ),
    constant_velocity(
        EarthInterface::NoInterface,
        "None",
        "Not an Interface",
        InterfaceGroup::NotDefined,
    ),
];

impl EarthInterface {
    /// Position in the deepest-first catalog order.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::iter().nth(ordinal)
    }

    /// Canonical upper-case name (e.g. `"MOHO"`).
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn record(self) -> &'static InterfaceRecord {
        &RECORDS[self.ordinal()]
    }

    pub fn group(self) -> InterfaceGroup {
        self.record().group
    }

    pub fn default_layer_name(self) -> &'static str {
        self.record().default_layer_name
    }

    pub fn description(self) -> &'static str {
        self.record().description
    }

    pub fn is_homogeneous_constant_velocity_layer(self) -> bool {
        self.record().homogeneous_constant_velocity
    }

    /// All interfaces, deepest first.
    pub fn all() -> impl DoubleEndedIterator<Item = EarthInterface> {
        Self::iter()
    }
}
