//! Utility functions for link-budget arithmetic

mod math;

pub use math::*;
