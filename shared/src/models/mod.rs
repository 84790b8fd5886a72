//! Domain models for the Farm Advisory Platform

pub mod chat;
pub mod irrigation;
pub mod soil;

pub use chat::*;
pub use irrigation::*;
pub use soil::*;
