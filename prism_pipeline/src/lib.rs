/*!
# Prism Render Pipeline

Declarative render-pipeline layer for the Prism voxel client.

This crate assembles directed graphs of render passes ("nodes"), each
producing and consuming named texture resources, into executable per-frame
pipelines. A named [`GraphicsMode`](pipeline::GraphicsMode) binds a deferred
factory that builds the pipeline once the concrete output size is known, so
one mode serves every window size and render scale.

The GPU itself stays behind two collaborator traits:

- **WorldRenderer**: produces the canonical world-geometry node
- **FrameRenderer**: the active drawing context handed to node hooks

Backend implementations (GPU, headless) provide concrete types that
implement these traits.
*/

// Internal modules
pub mod error;
pub mod log;
pub mod renderer;
pub mod pipeline;

// Main prism namespace module
pub mod prism {
    // Error types
    pub use crate::error::{Error, Result};

    // Renderer boundary traits
    pub use crate::renderer::{FrameRenderer, WorldRenderer};

    // Logging sub-module (macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            dispatch, dispatch_detailed, reset_logger, set_logger, DefaultLogger, LogEntry,
            LogSeverity, Logger,
        };
    }

    // Render sub-module with all pipeline types
    pub mod render {
        pub use crate::pipeline::*;
    }
}

// Re-export math library at crate root
pub use glam;
