//! World renderer boundary trait

use crate::error::Result;
use crate::pipeline::RenderNode;

/// Produces the canonical world-geometry render node on demand
///
/// The world renderer is an opaque collaborator: the pipeline layer asks it
/// for a node sized to the pipeline being built and takes whatever outputs
/// and hooks the implementation pre-declared on it. The pipeline builder
/// registers the node under the reserved name `"world"` and memoizes it,
/// so one build only ever obtains one world node.
pub trait WorldRenderer {
    /// Create the world-geometry node at the given extent
    fn create_node(&mut self, width: u32, height: u32) -> Result<RenderNode>;
}
