use super::constants::*;
use super::viewport::visible_size_at_depth;
use glam::Vec3;
use rand::prelude::*;

/// Shape of the forced-perspective tunnel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunnelShape {
    pub segments: usize,
    pub spacing: f32,
    pub shrink_per_segment: f32,
    pub fov_y_degrees: f32,
    pub aspect: f32,
}

impl TunnelShape {
    pub fn new(fov_y_degrees: f32, aspect: f32) -> Self {
        Self {
            segments: TUNNEL_SEGMENTS,
            spacing: TUNNEL_SEGMENT_SPACING,
            shrink_per_segment: TUNNEL_SHRINK_PER_SEGMENT,
            fov_y_degrees,
            aspect,
        }
    }

    /// Half extents and depth of frame `i`.
    pub fn frame(&self, i: usize) -> (f32, f32, f32) {
        let z = -(i as f32) * self.spacing;
        let size = visible_size_at_depth(self.fov_y_degrees, self.aspect, z.abs() + TUNNEL_DEPTH_EPSILON);
        let scale = 1.0 + i as f32 * self.shrink_per_segment;
        (size.x / scale * 0.5, size.y / scale * 0.5, z)
    }
}

/// Line-list vertices for the tunnel: a closed rectangle per frame plus four
/// corner rails running through consecutive frames.
pub fn tunnel_lines(shape: &TunnelShape) -> Vec<Vec3> {
    let corners = |i: usize| {
        let (hw, hh, z) = shape.frame(i);
        [
            Vec3::new(-hw, -hh, z),
            Vec3::new(hw, -hh, z),
            Vec3::new(hw, hh, z),
            Vec3::new(-hw, hh, z),
        ]
    };
    let rails = shape.segments.saturating_sub(1);
    let mut out = Vec::with_capacity(shape.segments * 8 + rails * 8);
    for i in 0..shape.segments {
        let c = corners(i);
        for k in 0..4 {
            out.push(c[k]);
            out.push(c[(k + 1) % 4]);
        }
    }
    for i in 0..rails {
        let (a, b) = (corners(i), corners(i + 1));
        for k in 0..4 {
            out.push(a[k]);
            out.push(b[k]);
        }
    }
    out
}

/// Per-star instance data uploaded as-is to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub twinkle_seed: f32,
    pub base_alpha: f32,
}

/// Uniformly scattered stars in a cube centred on the origin.
pub fn starfield(count: usize, seed: u64) -> Vec<StarInstance> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut axis = || (rng.gen::<f32>() - 0.5) * STAR_CUBE_SIZE;
            let position = [axis(), axis(), axis()];
            StarInstance {
                position,
                size: STAR_SIZE_MIN + rng.gen::<f32>() * STAR_SIZE_SPAN,
                twinkle_seed: rng.gen::<f32>() * std::f32::consts::TAU,
                base_alpha: STAR_ALPHA_MIN + rng.gen::<f32>() * (1.0 - STAR_ALPHA_MIN),
            }
        })
        .collect()
}
