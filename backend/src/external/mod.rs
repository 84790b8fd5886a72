//! External API integrations

pub mod crop_model;
pub mod generative_ai;
pub mod weather;

pub use crop_model::CropModelClient;
pub use generative_ai::GenerativeAiClient;
pub use weather::WeatherClient;
