// PlantUML Preview - Core Library

pub mod config;
pub mod controller;
pub mod errors;
pub mod examples;
pub mod models;
pub mod validation;

pub use config::*;
pub use controller::*;
pub use errors::*;
pub use examples::*;
pub use models::*;
pub use validation::*;
