//! Application-level configuration.
//!
//! - [`SessionParams`] - defaults and rules the session use cases apply

pub mod session_params;

pub use session_params::{PresetSize, SessionParams};
