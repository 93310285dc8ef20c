//! Utility helpers shared across client UI modules.

pub mod roster_data;
