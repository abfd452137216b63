//! Declarative builder for a single render node
//!
//! A node builder lives for the duration of one `node(name, depth, block)`
//! call on the pipeline builder. Inside the block the pass author declares
//! outputs, wires dependencies against already-built producers, attaches
//! shader inputs and registers life-cycle hooks.
//!
//! Dependency edges resolve eagerly: wiring against a node or output that
//! has not been built yet is a configuration error at declaration time, not
//! a dangling reference at frame time. This is what forces pass declaration
//! into topological order.

use crate::error::Result;
use crate::renderer::{FrameRenderer, WorldRenderer};
use super::node::{ConstructHook, NodeFlags, RenderNode, UniformValue};
use super::pipeline::RenderPipeline;
use super::texture::{DepthTextureFormat, TextureFormat, TextureHandle, TextureKind};

/// Builder for one render node, scoped to a pipeline under construction
pub struct RenderNodeBuilder<'p> {
    node: RenderNode,
    pipeline: &'p RenderPipeline,
    construct_hook: Option<ConstructHook>,
}

impl std::fmt::Debug for RenderNodeBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderNodeBuilder").finish_non_exhaustive()
    }
}

impl<'p> RenderNodeBuilder<'p> {
    pub(crate) fn new(
        name: &str,
        width: u32,
        height: u32,
        depth: bool,
        pipeline: &'p RenderPipeline,
    ) -> Self {
        let flags = if depth { NodeFlags::HAS_DEPTH } else { NodeFlags::empty() };
        Self {
            node: RenderNode::new(name, width, height, flags),
            pipeline,
            construct_hook: None,
        }
    }

    /// Declare a color output under `name`
    ///
    /// The returned handle is immediately usable as a dependency source for
    /// later-declared nodes.
    ///
    /// # Errors
    ///
    /// Rejects a duplicate output name on this node.
    pub fn framebuffer_texture(
        &mut self,
        name: &str,
        format: TextureFormat,
    ) -> Result<TextureHandle> {
        self.node.declare_output(name, TextureKind::Color(format))
    }

    /// Declare a depth output under `name`
    ///
    /// # Errors
    ///
    /// Rejects a duplicate output name on this node.
    pub fn framebuffer_depth_texture(
        &mut self,
        name: &str,
        format: DepthTextureFormat,
    ) -> Result<TextureHandle> {
        self.node.declare_output(name, TextureKind::Depth(format))
    }

    /// Wire an input from a producer's output handle
    ///
    /// The input is bound under the name the producer declared the output
    /// with.
    pub fn dependency(&mut self, source: &TextureHandle) -> &mut Self {
        self.node.bind_input(source.name(), source.downgrade());
        self
    }

    /// Wire an input from a named output of an already-built node
    ///
    /// Dereferences the producer's output table immediately, so the
    /// producer must have been registered before this call.
    ///
    /// # Errors
    ///
    /// Unknown producer node or unknown output name.
    pub fn dependency_on(&mut self, source_node: &str, output_name: &str) -> Result<&mut Self> {
        let producer = match self.pipeline.node(source_node) {
            Some(node) => node,
            None => crate::render_bail!(
                "prism::RenderNodeBuilder",
                "node '{}' depends on '{}', which has not been built yet",
                self.node.name(),
                source_node
            ),
        };
        let resource = match producer.output(output_name) {
            Some(resource) => resource,
            None => crate::render_bail!(
                "prism::RenderNodeBuilder",
                "node '{}' depends on '{}.{}', but '{}' declares no such output",
                self.node.name(),
                source_node,
                output_name,
                source_node
            ),
        };

        let weak = std::sync::Arc::downgrade(resource);
        self.node.bind_input(output_name, weak);
        Ok(self)
    }

    /// Register the construct hook (last write wins)
    ///
    /// Fires once, synchronously, during the build, after outputs are
    /// registered and before the node enters the pipeline.
    pub fn on_construct<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnOnce(&RenderNode, &mut dyn WorldRenderer, &mut dyn FrameRenderer) -> Result<()>
            + 'static,
    {
        self.construct_hook = Some(Box::new(hook));
        self
    }

    /// Register the per-frame render hook (last write wins)
    pub fn on_render<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&RenderNode, &mut dyn FrameRenderer) -> Result<()> + 'static,
    {
        self.node.set_render_hook(Box::new(hook));
        self
    }

    /// Register the teardown hook (last write wins)
    pub fn on_delete<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnOnce(&RenderNode) -> Result<()> + 'static,
    {
        self.node.set_destroy_hook(Box::new(hook));
        self
    }

    /// Attach a plain shader-input value (last write wins)
    pub fn shader_input(&mut self, name: &str, value: UniformValue) -> &mut Self {
        self.node.set_uniform(name, value);
        self
    }

    /// Enable or disable alpha blending for this node
    pub fn blending(&mut self, enabled: bool) -> &mut Self {
        let mut flags = self.node.flags();
        flags.set(NodeFlags::BLENDING, enabled);
        self.node.set_flags(flags);
        self
    }

    pub(crate) fn finish(self) -> (RenderNode, Option<ConstructHook>) {
        (self.node, self.construct_hook)
    }
}

#[cfg(test)]
#[path = "node_builder_tests.rs"]
mod tests;
