//! HTTP handlers for the Farm Advisory Platform

pub mod advisory;
pub mod chat;
pub mod health;
pub mod irrigation;
pub mod weather;

pub use advisory::*;
pub use chat::*;
pub use health::*;
pub use irrigation::*;
pub use weather::*;
