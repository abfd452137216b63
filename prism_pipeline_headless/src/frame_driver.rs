//! Frame driver for headless pipelines
//!
//! Owns the renderer pair and one active pipeline, and brackets each
//! pipeline walk inside a begin/end frame. This is the headless equivalent
//! of a client's render loop.

use prism_pipeline::prism::render::{GraphicsMode, RenderPipeline};
use prism_pipeline::prism::Result;
use prism_pipeline::renderer::FrameRenderer;
use prism_pipeline::render_debug;

use crate::headless_renderer::{FrameStats, HeadlessFrameRenderer, HeadlessWorldRenderer};

/// Drives one activated pipeline frame by frame
pub struct FrameDriver {
    world: HeadlessWorldRenderer,
    frame: HeadlessFrameRenderer,
    pipeline: RenderPipeline,
}

impl FrameDriver {
    /// Activate `mode` at a concrete size against fresh headless renderers
    pub fn activate(mode: &GraphicsMode, width: u32, height: u32) -> Result<Self> {
        let mut world = HeadlessWorldRenderer::new();
        let mut frame = HeadlessFrameRenderer::new();
        let pipeline = mode.create_pipeline(&mut world, &mut frame, width, height)?;
        pipeline.verify()?;

        Ok(Self { world, frame, pipeline })
    }

    /// Render one frame: begin, walk the pipeline, end
    pub fn frame(&mut self) -> Result<()> {
        self.frame.begin()?;
        self.pipeline.render(&mut self.frame)?;
        self.frame.end()
    }

    /// Propagate a surface resize to the active pipeline
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pipeline.resize(width, height);
    }

    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut RenderPipeline {
        &mut self.pipeline
    }

    pub fn world_renderer(&self) -> &HeadlessWorldRenderer {
        &self.world
    }

    pub fn stats(&self) -> &FrameStats {
        self.frame.stats()
    }

    /// Tear the active pipeline down and consume the driver
    pub fn teardown(mut self) {
        render_debug!(
            "prism::FrameDriver",
            "tearing down after {} frame(s)",
            self.frame.stats().frames
        );
        self.pipeline.destroy();
    }
}

#[cfg(test)]
#[path = "frame_driver_tests.rs"]
mod tests;
