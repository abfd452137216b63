//! Mock renderer collaborators for unit tests (no GPU required)
//!
//! These mocks allow testing the pipeline builders and life-cycle without a
//! real backend. The frame renderer records every call it receives so tests
//! can assert on the exact frame walk.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::pipeline::{NodeFlags, RenderNode, TextureFormat, TextureKind, TextureResource};
use crate::renderer::{FrameRenderer, WorldRenderer};

// ============================================================================
// Mock World Renderer
// ============================================================================

/// World renderer producing a bare world node with a single `color` output
pub struct MockWorldRenderer {
    /// Number of nodes handed out so far
    pub nodes_created: usize,
}

impl MockWorldRenderer {
    pub fn new() -> Self {
        Self { nodes_created: 0 }
    }
}

impl WorldRenderer for MockWorldRenderer {
    fn create_node(&mut self, width: u32, height: u32) -> Result<RenderNode> {
        self.nodes_created += 1;
        let mut node = RenderNode::new("world", width, height, NodeFlags::HAS_DEPTH);
        node.declare_output("color", TextureKind::Color(TextureFormat::Rgba32F))?;
        Ok(node)
    }
}

// ============================================================================
// Mock Frame Renderer
// ============================================================================

/// Recorded frame renderer operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOp {
    Begin,
    End,
    /// Default fullscreen draw for the named node
    DrawFullscreen(String),
    Present,
}

/// Frame renderer that records every operation for later assertions
pub struct MockFrameRenderer {
    pub ops: Vec<MockOp>,
    /// Default fullscreen draws per node name
    pub fullscreen_draws: FxHashMap<String, u32>,
}

impl MockFrameRenderer {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fullscreen_draws: FxHashMap::default(),
        }
    }

    pub fn present_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == MockOp::Present).count()
    }
}

impl FrameRenderer for MockFrameRenderer {
    fn begin(&mut self) -> Result<()> {
        self.ops.push(MockOp::Begin);
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.ops.push(MockOp::End);
        Ok(())
    }

    fn draw_fullscreen(&mut self, node: &RenderNode) -> Result<()> {
        self.ops.push(MockOp::DrawFullscreen(node.name().to_string()));
        *self
            .fullscreen_draws
            .entry(node.name().to_string())
            .or_insert(0) += 1;
        Ok(())
    }

    fn present(&mut self, _source: &TextureResource) -> Result<()> {
        self.ops.push(MockOp::Present);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
