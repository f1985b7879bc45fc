//! Ordered catalog of named Earth-model interfaces.
//!
//! The catalog lists every depth discontinuity a layered Earth model may
//! define, deepest first, with its group, default layer name and a flag for
//! homogeneous constant-velocity layers. On top of the catalog sit alias
//! resolution for commonly used layer names, order validation, group-bounded
//! neighbor searches, and validation of a model's layer names.

pub mod catalog;
pub mod error;
pub mod interface;
pub mod model;

pub use catalog::DefinedInterfaces;
pub use catalog::SearchDirection;
pub use catalog::find_defined_neighbor_in_group;
pub use catalog::find_highest_defined_below_in_group;
pub use catalog::find_lowest_defined_above_in_group;
pub use catalog::resolve;
pub use catalog::validate_order;
pub use error::InterfaceError;
pub use error::Result;
pub use interface::EarthInterface;
pub use interface::InterfaceGroup;
pub use interface::InterfaceRecord;
pub use model::LayerRemap;
pub use model::ModelInterfaces;
