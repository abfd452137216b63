//! Renderer boundary module - collaborator traits the pipeline layer is
//! driven through. Backends (GPU, headless) implement these.

pub mod world_renderer;
pub mod frame_renderer;

pub use world_renderer::*;
pub use frame_renderer::*;

#[cfg(test)]
pub mod mock_renderer;
