//! Integration tests for the headless backend
//!
//! Exercises the backend purely through its public API, the way a tool
//! embedding it would. No GPU required.
//!
//! Run with: cargo test --test headless_backend_tests

use prism_pipeline::prism::render::GraphicsModeManager;
use prism_pipeline::prism::FrameRenderer;
use prism_pipeline_headless::{
    default_mode, stock_modes, vibrant_mode, FrameDriver, HeadlessFrameRenderer,
    HeadlessWorldRenderer,
};

// ============================================================================
// STOCK MODE TESTS
// ============================================================================

#[test]
fn test_stock_modes_activate_through_manager() {
    let manager = stock_modes().unwrap();

    for name in ["default", "vibrant"] {
        let mut world = HeadlessWorldRenderer::new();
        let mut frame = HeadlessFrameRenderer::new();
        let pipeline = manager
            .activate(name, &mut world, &mut frame, 1920, 1080)
            .unwrap();
        assert!(pipeline.verify().is_ok());
        assert_eq!(world.nodes_created(), 1);
    }
}

#[test]
fn test_mode_switch_with_teardown_between() {
    let mut driver = FrameDriver::activate(&default_mode(), 1280, 720).unwrap();
    driver.frame().unwrap();
    driver.teardown();

    let mut driver = FrameDriver::activate(&vibrant_mode(), 1280, 720).unwrap();
    driver.frame().unwrap();
    assert_eq!(driver.stats().frames, 1);
    driver.teardown();
}

// ============================================================================
// FRAME LOOP TESTS
// ============================================================================

#[test]
fn test_vibrant_frame_walks_every_pass() {
    let mut driver = FrameDriver::activate(&vibrant_mode(), 1280, 720).unwrap();
    driver.frame().unwrap();

    let stats = driver.stats();
    for pass in ["world", "bright_pass", "bloom_blur", "composite"] {
        assert_eq!(stats.fullscreen_draws.get(pass), Some(&1), "pass {}", pass);
    }
    assert_eq!(stats.presents, 1);
}

#[test]
fn test_resize_mid_loop_keeps_rendering() {
    let mut driver = FrameDriver::activate(&default_mode(), 1280, 720).unwrap();

    driver.frame().unwrap();
    driver.resize(1920, 1080);
    driver.frame().unwrap();

    assert_eq!(driver.stats().frames, 2);
    assert_eq!(driver.pipeline().node("tonemap").unwrap().width(), 1920);
}

// ============================================================================
// PROTOCOL ENFORCEMENT TESTS
// ============================================================================

#[test]
fn test_unbracketed_pipeline_walk_is_rejected() {
    let mut world = HeadlessWorldRenderer::new();
    let mut frame = HeadlessFrameRenderer::new();
    let mut pipeline = default_mode()
        .create_pipeline(&mut world, &mut frame, 1280, 720)
        .unwrap();

    // Walking the pipeline without an open frame trips the protocol check.
    assert!(pipeline.render(&mut frame).is_err());

    frame.begin().unwrap();
    pipeline.render(&mut frame).unwrap();
    frame.end().unwrap();
}

#[test]
fn test_manager_rejects_unknown_mode() {
    let manager = GraphicsModeManager::new();
    let mut world = HeadlessWorldRenderer::new();
    let mut frame = HeadlessFrameRenderer::new();
    assert!(manager.activate("default", &mut world, &mut frame, 640, 480).is_err());
}
