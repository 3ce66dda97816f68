//! erratic server library entry.
//!
//! An HTTP fixture that fails its greeting endpoint at a configurable rate.
//! Used by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
