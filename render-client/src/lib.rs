// Render client library for PlantUML Preview
//
// This crate provides HTTP client functionality for posting diagram
// source to a user-configured local rendering server.

pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use errors::ApiError;
pub use http_client::render_diagram;
