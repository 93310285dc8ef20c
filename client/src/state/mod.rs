//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State lives in a `RwSignal` provided by `App`; components read it and
//! report clicks back through callbacks.

pub mod depth_chart;
