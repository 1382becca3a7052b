// PlantUML Client Library
//
// This crate provides HTTP client functionality for the PlantUML
// cloud service (or any PlantUML server addressed by encoded URL).

mod client;
mod errors;

pub use client::{diagram_url, PlantUmlClient};
pub use errors::ClientError;
