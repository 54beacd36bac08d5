//! Image generation: prompt construction and the external collaborator
//! client.

pub mod client;
pub mod error;
pub mod prompt;

pub use client::{ImageGenerator, MockImageGenerator, RoomImageClient};
pub use error::GenerateError;
pub use prompt::build_prompt;
