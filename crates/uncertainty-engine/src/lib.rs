//! Measurement uncertainty following the GUM convention
//!
//! Type A uncertainty comes from the scatter of repeated readings, Type B from
//! the instrument's accuracy specification. Both are combined in quadrature and
//! scaled by a coverage factor `k` to give the expanded uncertainty.

pub mod accuracy;
pub mod budget;
pub mod gum;


pub use accuracy::AccuracySpec;
pub use budget::{UncertaintyBands, UncertaintyBudget};
pub use gum::*;
