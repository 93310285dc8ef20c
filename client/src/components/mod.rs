//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the field and its panels from `FieldProps` and report
//! position clicks through callbacks; they hold no selection state.

pub mod depth_chart_field;
pub mod position_cards;
pub mod section_list;
