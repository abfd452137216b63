//! Render pipeline construction module
//!
//! Provides the declarative layer that assembles a directed graph of render
//! passes (nodes), each producing and consuming named texture resources,
//! into an executable per-frame pipeline. Pipelines are produced by
//! activating a named graphics mode at a concrete output size.

pub mod texture;
pub mod node;
pub mod node_builder;
pub mod settings;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod pipeline_builder;
pub mod mode;
pub mod mode_manager;

pub use texture::*;
pub use node::*;
pub use node_builder::*;
pub use settings::*;
pub use pipeline::*;
pub use pipeline_builder::*;
pub use mode::*;
pub use mode_manager::*;
