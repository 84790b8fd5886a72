//! Shared types and advisory logic for the Farm Advisory Platform
//!
//! This crate contains the heuristic advisory engine, input validation,
//! and domain models shared between the backend and the browser (via WASM).
//! Keeping the engine here means the server endpoint and the client-side
//! fallback path run the exact same rules.

pub mod advisory;
pub mod models;
pub mod validation;

pub use advisory::*;
pub use models::*;
pub use validation::*;
