//! Declarative builder for a render pipeline
//!
//! Runs entirely on the calling thread when a graphics mode is activated:
//! the mode's factory gets a builder scoped to the concrete output size and
//! the renderer collaborators, registers nodes through it, and hands the
//! accumulated pipeline back.

use crate::error::Result;
use crate::render_trace;
use crate::renderer::{FrameRenderer, WorldRenderer};
use super::node_builder::RenderNodeBuilder;
use super::pipeline::{NodeKey, RenderPipeline};

/// Reserved registration name for the singleton world-geometry node
pub const WORLD_NODE_NAME: &str = "world";

/// Accumulates named nodes and their wiring into a single pipeline
pub struct RenderPipelineBuilder<'a> {
    world_renderer: &'a mut dyn WorldRenderer,
    frame_renderer: &'a mut dyn FrameRenderer,
    pipeline: RenderPipeline,
    world_node: Option<NodeKey>,
}

impl<'a> RenderPipelineBuilder<'a> {
    pub fn new(
        world_renderer: &'a mut dyn WorldRenderer,
        frame_renderer: &'a mut dyn FrameRenderer,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            world_renderer,
            frame_renderer,
            pipeline: RenderPipeline::new(width, height),
            world_node: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.pipeline.width()
    }

    pub fn height(&self) -> u32 {
        self.pipeline.height()
    }

    /// The pipeline's singleton world-rendering node
    ///
    /// The first call obtains the canonical node from the world renderer
    /// and registers it under the reserved name `"world"`; subsequent calls
    /// within the same build return the same node.
    pub fn world(&mut self) -> Result<NodeKey> {
        if let Some(key) = self.world_node {
            return Ok(key);
        }

        let mut node = self
            .world_renderer
            .create_node(self.pipeline.width(), self.pipeline.height())?;
        node.set_name(WORLD_NODE_NAME);
        let key = self.pipeline.insert(node)?;
        self.world_node = Some(key);

        render_trace!(
            "prism::RenderPipelineBuilder",
            "registered world node at {}x{}",
            self.pipeline.width(),
            self.pipeline.height()
        );
        Ok(key)
    }

    /// Register a node under `name`, configured by `block`
    ///
    /// The block runs against a fresh node builder scoped to `name` and the
    /// pipeline's extent. After the block returns, the node's construct hook
    /// fires (if one was registered) and the node is inserted in render
    /// order.
    ///
    /// # Errors
    ///
    /// Rejects a name colliding with an already-registered node, and
    /// propagates configuration errors raised by the block (duplicate
    /// outputs, unresolvable dependencies) and construct hook failures.
    pub fn node<F>(&mut self, name: &str, depth: bool, block: F) -> Result<NodeKey>
    where
        F: FnOnce(&mut RenderNodeBuilder<'_>) -> Result<()>,
    {
        if self.pipeline.contains(name) {
            crate::render_bail!(
                "prism::RenderPipelineBuilder",
                "node '{}' already registered in this pipeline",
                name
            );
        }

        let mut builder = RenderNodeBuilder::new(
            name,
            self.pipeline.width(),
            self.pipeline.height(),
            depth,
            &self.pipeline,
        );
        block(&mut builder)?;
        let (node, construct_hook) = builder.finish();

        if let Some(hook) = construct_hook {
            hook(&node, &mut *self.world_renderer, &mut *self.frame_renderer)?;
        }

        self.pipeline.insert(node)
    }

    /// Name the node output presented at the end of each frame
    pub fn output(&mut self, key: NodeKey, output_name: &str) -> Result<()> {
        self.pipeline.set_output(key, output_name)
    }

    /// Register a boolean pipeline setting with its default
    pub fn register_bool(&mut self, key: &str, default: bool) {
        self.pipeline.settings_mut().register_bool(key, default);
    }

    /// Register an integer pipeline setting with its default and range
    pub fn register_int(&mut self, key: &str, default: i32, min: i32, max: i32) {
        self.pipeline.settings_mut().register_int(key, default, min, max);
    }

    /// Hand over the accumulated pipeline
    ///
    /// Side-effect free: everything already happened during the `node`
    /// calls.
    pub fn build(self) -> RenderPipeline {
        self.pipeline
    }
}

#[cfg(test)]
#[path = "pipeline_builder_tests.rs"]
mod tests;
