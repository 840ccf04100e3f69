//! Depth/magnitude driven marker styling and the matching legend table.

pub mod color;
pub mod legend;
pub mod marker;
