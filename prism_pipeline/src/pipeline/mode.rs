//! Graphics mode — a named, deferred pipeline factory
//!
//! A mode is declared once, at authoring time, as a pure value holding a
//! factory closure. Output resolution is not known at declaration time
//! (window resizes, render-scale settings), so the factory only runs when
//! the mode is activated with a concrete size. Every activation produces an
//! independent pipeline; a mode may be re-activated any number of times.

use crate::error::Result;
use crate::render_info;
use crate::renderer::{FrameRenderer, WorldRenderer};
use super::pipeline::RenderPipeline;
use super::pipeline_builder::RenderPipelineBuilder;

/// Deferred pipeline factory stored inside a graphics mode
pub type PipelineFactory = Box<
    dyn Fn(&mut dyn WorldRenderer, &mut dyn FrameRenderer, u32, u32) -> Result<RenderPipeline>
        + Send
        + Sync,
>;

/// A named, deferred factory that yields a render pipeline once concrete
/// render dimensions are known
pub struct GraphicsMode {
    name: String,
    factory: PipelineFactory,
}

impl GraphicsMode {
    /// Start declaring a mode
    pub fn builder() -> GraphicsModeBuilder {
        GraphicsModeBuilder::new()
    }

    /// Declare a mode from a name and a pipeline block in one step
    ///
    /// Equivalent to `builder().name(name).pipeline(block).build()`, which
    /// cannot fail for this form.
    pub fn new<F>(name: &str, block: F) -> Self
    where
        F: Fn(&mut RenderPipelineBuilder<'_>) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            factory: wrap_pipeline_block(block),
        }
    }

    /// Display name of the mode
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activate the mode: run the factory against concrete collaborators
    /// and size, producing a fresh independent pipeline
    pub fn create_pipeline(
        &self,
        world_renderer: &mut dyn WorldRenderer,
        frame_renderer: &mut dyn FrameRenderer,
        width: u32,
        height: u32,
    ) -> Result<RenderPipeline> {
        render_info!(
            "prism::GraphicsMode",
            "activating mode '{}' at {}x{}",
            self.name,
            width,
            height
        );
        (self.factory)(world_renderer, frame_renderer, width, height)
    }
}

impl std::fmt::Debug for GraphicsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsMode").field("name", &self.name).finish()
    }
}

fn wrap_pipeline_block<F>(block: F) -> PipelineFactory
where
    F: Fn(&mut RenderPipelineBuilder<'_>) -> Result<()> + Send + Sync + 'static,
{
    Box::new(move |world_renderer, frame_renderer, width, height| {
        let mut builder =
            RenderPipelineBuilder::new(world_renderer, frame_renderer, width, height);
        block(&mut builder)?;
        Ok(builder.build())
    })
}

/// Builder for a graphics mode
///
/// `name` and `pipeline` are single-valued slots: setting either twice
/// overwrites the previous value. `build` rejects a mode missing either.
pub struct GraphicsModeBuilder {
    name: Option<String>,
    factory: Option<PipelineFactory>,
}

impl GraphicsModeBuilder {
    pub fn new() -> Self {
        Self { name: None, factory: None }
    }

    /// Set the mode's display name (last write wins)
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Store the deferred pipeline factory (last write wins)
    ///
    /// The block performs no work until the mode is activated with a
    /// concrete size.
    pub fn pipeline<F>(mut self, block: F) -> Self
    where
        F: Fn(&mut RenderPipelineBuilder<'_>) -> Result<()> + Send + Sync + 'static,
    {
        self.factory = Some(wrap_pipeline_block(block));
        self
    }

    /// Finalize the mode
    ///
    /// # Errors
    ///
    /// A mode must have both a name and a pipeline factory.
    pub fn build(self) -> Result<GraphicsMode> {
        let name = match self.name {
            Some(name) => name,
            None => crate::render_bail!("prism::GraphicsModeBuilder", "mode has no name"),
        };
        let factory = match self.factory {
            Some(factory) => factory,
            None => crate::render_bail!(
                "prism::GraphicsModeBuilder",
                "mode '{}' has no pipeline factory",
                name
            ),
        };
        Ok(GraphicsMode { name, factory })
    }
}

impl Default for GraphicsModeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
