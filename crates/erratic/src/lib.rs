//! Top-level facade crate for erratic.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use erratic_core::*;
}

pub mod server {
    pub use erratic_server::*;
}
