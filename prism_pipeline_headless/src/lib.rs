/*!
# Prism Pipeline - Headless Backend

CPU-only implementation of the prism_pipeline renderer traits.

This crate provides a backend with no GPU or window dependency: the world
renderer hands out a bare world node and the frame renderer records the
frame walk instead of issuing draw calls. It backs the pipeline layer's
integration tests and any tool that needs to build and drive pipelines
off-screen (asset bakers, CI, benchmarks).

Also included are the two stock graphics modes ("default" and "vibrant")
and a frame driver that owns a pipeline's begin/render/end cycle.
*/

mod headless_renderer;
mod frame_driver;
mod modes;

pub use headless_renderer::{FrameStats, HeadlessFrameRenderer, HeadlessWorldRenderer};
pub use frame_driver::FrameDriver;
pub use modes::{default_mode, stock_modes, vibrant_mode};
