//! Context-provided stores shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each store is a plain struct held in an `RwSignal` provided at the app
//! root, so consumers subscribe through the reactive graph and the struct
//! logic stays unit-testable without a browser.

pub mod session;
pub mod ui;
