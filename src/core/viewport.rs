use glam::Vec2;

/// Visible width/height of the view frustum at `depth` units from the eye.
///
/// `fov_y_degrees` is the vertical field of view. Non-positive depths yield a
/// zero-sized viewport rather than a mirrored one.
#[inline]
pub fn visible_size_at_depth(fov_y_degrees: f32, aspect: f32, depth: f32) -> Vec2 {
    let depth = depth.max(0.0);
    let height = 2.0 * (fov_y_degrees.to_radians() * 0.5).tan() * depth;
    Vec2::new(height * aspect, height)
}
