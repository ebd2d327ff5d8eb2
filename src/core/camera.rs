use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking down -Z from `(0, 0, z)`.
///
/// The scene never rotates the camera; scrolling only moves it along Z.
#[derive(Clone, Debug)]
pub struct Camera {
    pub z: f32,
    pub aspect: f32,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            z: 0.0,
            aspect,
            fovy_degrees,
            znear,
            zfar,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.z)
    }

    /// Clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy_degrees.to_radians(),
            self.aspect.max(1e-4),
            self.znear,
            self.zfar,
        )
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y)
    }

    pub fn set_aspect_from_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}
