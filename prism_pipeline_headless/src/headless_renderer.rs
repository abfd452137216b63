//! Headless renderer collaborators
//!
//! The world renderer produces the canonical world node with the outputs
//! the stock modes wire against. The frame renderer enforces the
//! begin/render/end frame protocol and tallies what each frame did instead
//! of touching a GPU.

use rustc_hash::FxHashMap;

use prism_pipeline::prism::render::{
    DepthTextureFormat, NodeFlags, RenderNode, TextureFormat, TextureKind, TextureResource,
};
use prism_pipeline::prism::{Error, FrameRenderer, Result, WorldRenderer};
use prism_pipeline::render_trace;

/// World renderer with no GPU behind it
///
/// Hands out world nodes carrying an HDR `color` output and a depth buffer,
/// the same surface the real backends expose to the pipeline layer.
pub struct HeadlessWorldRenderer {
    nodes_created: usize,
}

impl HeadlessWorldRenderer {
    pub fn new() -> Self {
        Self { nodes_created: 0 }
    }

    /// Number of world nodes handed out so far
    pub fn nodes_created(&self) -> usize {
        self.nodes_created
    }
}

impl WorldRenderer for HeadlessWorldRenderer {
    fn create_node(&mut self, width: u32, height: u32) -> Result<RenderNode> {
        self.nodes_created += 1;
        render_trace!(
            "prism::HeadlessWorldRenderer",
            "creating world node #{} at {}x{}",
            self.nodes_created,
            width,
            height
        );

        let mut node = RenderNode::new("world", width, height, NodeFlags::HAS_DEPTH);
        node.declare_output("color", TextureKind::Color(TextureFormat::Rgba32F))?;
        node.declare_output("depth", TextureKind::Depth(DepthTextureFormat::Depth24))?;
        Ok(node)
    }
}

impl Default for HeadlessWorldRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-run tallies kept by the headless frame renderer
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    /// Completed begin/end frames
    pub frames: usize,
    /// Presented frames (at most one present per frame)
    pub presents: usize,
    /// Default fullscreen draws per node name, across all frames
    pub fullscreen_draws: FxHashMap<String, usize>,
}

/// Frame renderer that enforces the frame protocol and records tallies
///
/// `begin` and `end` must pair up; drawing or presenting outside an open
/// frame is a lifecycle error. This catches drivers that forget to bracket
/// the pipeline walk.
pub struct HeadlessFrameRenderer {
    stats: FrameStats,
    in_frame: bool,
}

impl HeadlessFrameRenderer {
    pub fn new() -> Self {
        Self {
            stats: FrameStats::default(),
            in_frame: false,
        }
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Whether a frame is currently open
    pub fn in_frame(&self) -> bool {
        self.in_frame
    }
}

impl FrameRenderer for HeadlessFrameRenderer {
    fn begin(&mut self) -> Result<()> {
        if self.in_frame {
            return Err(Error::Lifecycle(
                "begin called while a frame is already open".to_string(),
            ));
        }
        self.in_frame = true;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        if !self.in_frame {
            return Err(Error::Lifecycle("end called outside a frame".to_string()));
        }
        self.in_frame = false;
        self.stats.frames += 1;
        Ok(())
    }

    fn draw_fullscreen(&mut self, node: &RenderNode) -> Result<()> {
        if !self.in_frame {
            return Err(Error::Lifecycle(format!(
                "fullscreen draw for node '{}' outside a frame",
                node.name()
            )));
        }
        *self
            .stats
            .fullscreen_draws
            .entry(node.name().to_string())
            .or_insert(0) += 1;
        Ok(())
    }

    fn present(&mut self, _source: &TextureResource) -> Result<()> {
        if !self.in_frame {
            return Err(Error::Lifecycle("present outside a frame".to_string()));
        }
        self.stats.presents += 1;
        Ok(())
    }
}

impl Default for HeadlessFrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "headless_renderer_tests.rs"]
mod tests;
