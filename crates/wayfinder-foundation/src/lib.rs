//! Shared foundation for Wayfinder
//!
//! Error taxonomy, the cross-cycle search-session slot, and shutdown
//! handling used by the pipeline runtime.

pub mod error;
pub mod session;
pub mod shutdown;

pub use error::*;
pub use session::*;
pub use shutdown::*;
