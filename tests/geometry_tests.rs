// Host-side tests for the tunnel wireframe, starfield and camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sequence {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use glam::{Vec3, Vec4};
use sequence::camera::Camera;
use sequence::constants::*;
use sequence::geometry::*;
use sequence::viewport::visible_size_at_depth;

#[test]
fn visible_size_follows_the_frustum() {
    let size = visible_size_at_depth(90.0, 2.0, 1.0);
    assert!((size.y - 2.0).abs() < 1e-5);
    assert!((size.x - 4.0).abs() < 1e-5);
    assert_eq!(visible_size_at_depth(75.0, 1.5, -3.0), glam::Vec2::ZERO);
}

#[test]
fn tunnel_has_a_rectangle_per_frame_and_rails_between() {
    let shape = TunnelShape::new(75.0, 16.0 / 9.0);
    let lines = tunnel_lines(&shape);
    assert_eq!(lines.len(), TUNNEL_SEGMENTS * 8 + (TUNNEL_SEGMENTS - 1) * 8);
    assert_eq!(lines.len() % 2, 0);
    let deepest = lines.iter().map(|v| v.z).fold(0.0_f32, f32::min);
    assert_eq!(deepest, -((TUNNEL_SEGMENTS - 1) as f32) * TUNNEL_SEGMENT_SPACING);
}

#[test]
fn deeper_frames_look_smaller() {
    let shape = TunnelShape::new(75.0, 16.0 / 9.0);
    let mut prev = f32::INFINITY;
    for i in 1..shape.segments {
        let (hw, hh, z) = shape.frame(i);
        assert!((z + i as f32 * TUNNEL_SEGMENT_SPACING).abs() < 1e-5);
        assert!((hw / hh - 16.0 / 9.0).abs() < 1e-4);
        let apparent = hw / -z;
        assert!(apparent < prev, "frame {i} does not recede");
        prev = apparent;
    }
}

#[test]
fn starfield_is_deterministic_per_seed() {
    let a = starfield(256, 7);
    let b = starfield(256, 7);
    let c = starfield(256, 8);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn stars_stay_inside_the_cube_with_sane_attributes() {
    let half = STAR_CUBE_SIZE * 0.5;
    for star in starfield(2000, 42) {
        assert!(star.position.iter().all(|p| p.abs() <= half));
        assert!(star.size >= STAR_SIZE_MIN && star.size <= STAR_SIZE_MIN + STAR_SIZE_SPAN);
        assert!(star.base_alpha >= STAR_ALPHA_MIN && star.base_alpha <= 1.0);
        assert!(star.twinkle_seed >= 0.0 && star.twinkle_seed <= std::f32::consts::TAU);
    }
}

#[test]
fn star_instances_pack_tightly() {
    assert_eq!(std::mem::size_of::<StarInstance>(), 24);
    let stars = starfield(3, 1);
    assert_eq!(bytemuck::cast_slice::<StarInstance, u8>(&stars).len(), 72);
}

#[test]
fn camera_looks_down_negative_z_from_its_position() {
    let mut cam = Camera::new(75.0, 1.0, 0.1, 1000.0);
    cam.z = -10.0;
    let view = cam.view_matrix();
    let eye = view * Vec4::new(0.0, 0.0, -10.0, 1.0);
    assert!(eye.truncate().length() < 1e-5);
    let ahead = view * Vec4::new(0.0, 0.0, -11.0, 1.0);
    assert!((ahead.z + 1.0).abs() < 1e-5);
    assert_eq!(cam.eye(), Vec3::new(0.0, 0.0, -10.0));
}

#[test]
fn camera_aspect_ignores_empty_sizes() {
    let mut cam = Camera::new(75.0, 1.0, 0.1, 1000.0);
    cam.set_aspect_from_size(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    cam.set_aspect_from_size(0, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    assert!(cam.projection_matrix().is_finite());
}
