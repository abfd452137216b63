//! Frame renderer boundary trait

use crate::error::Result;
use crate::pipeline::{RenderNode, TextureResource};

/// The active drawing context for one frame
///
/// Handed into every node's construct and render hooks. The pipeline layer
/// itself only touches the small surface below; everything else a backend
/// offers is between the backend and the hooks.
pub trait FrameRenderer {
    /// Begin recording a frame
    fn begin(&mut self) -> Result<()>;

    /// Finish recording and submit/present the frame
    fn end(&mut self) -> Result<()>;

    /// Default render path for a node without a render hook
    ///
    /// Backends draw the node's bound inputs as a fullscreen pass into its
    /// outputs. Must not fail just because the node has no inputs.
    fn draw_fullscreen(&mut self, node: &RenderNode) -> Result<()>;

    /// Blit a pipeline's output resource to the frame's final surface
    fn present(&mut self, source: &TextureResource) -> Result<()>;
}
