//! Business logic services for the Farm Advisory Platform

pub mod advisory;
pub mod chat;
pub mod session;
pub mod weather;

pub use advisory::AdvisoryService;
pub use chat::ChatService;
pub use session::SessionStore;
pub use weather::WeatherService;
