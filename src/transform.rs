use cgmath::{Deg, InnerSpace, Matrix4, PerspectiveFov, Rad, SquareMatrix, Vector3};

use crate::input::{ActiveKeys, Key};

pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 100.0;

pub fn perspective(fov_deg: f32, aspect: f32) -> Matrix4<f32> {
    PerspectiveFov {
        fovy: Rad::from(Deg(fov_deg)),
        aspect,
        near: NEAR,
        far: FAR,
    }
    .into()
}

/// View matrix that moves the world by `offset`, i.e. a camera at `-offset`.
pub fn view_translation(offset: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from_translation(offset)
}

pub fn cube_axis() -> Vector3<f32> {
    Vector3::new(1.0, 0.3, 0.5).normalize()
}

/// Model matrix of the `index`-th cube: every cube is tilted by `20° * index`,
/// every third one keeps spinning at that many degrees per second.
pub fn cube_model(index: usize, position: Vector3<f32>, time: f32) -> Matrix4<f32> {
    let mut angle = 20.0 * index as f32;
    if index % 3 == 0 {
        angle *= time;
    }

    Matrix4::from_translation(position) * Matrix4::from_axis_angle(cube_axis(), Deg(angle))
}

/// Keyboard driven translation of a model matrix.
///
/// Without shift, A/D move along x and W/S along y. With shift held W/S move
/// along z instead, W going away from the viewer.
#[derive(Debug, Copy, Clone)]
pub struct ModelMover {
    pub step: f32,
}

impl ModelMover {
    pub fn delta(&self, keys: &ActiveKeys) -> Vector3<f32> {
        if keys.shift() {
            Vector3::new(0.0, 0.0, -keys.axis(Key::S, Key::W) * self.step)
        } else {
            Vector3::new(
                keys.axis(Key::A, Key::D) * self.step,
                keys.axis(Key::S, Key::W) * self.step,
                0.0,
            )
        }
    }

    /// Applies one frame of movement in the model's own space.
    pub fn apply(&self, model: &mut Matrix4<f32>, keys: &ActiveKeys) {
        let delta = self.delta(keys);

        if delta.magnitude2() != 0.0 {
            *model = *model * Matrix4::from_translation(delta);
        }
    }
}

impl Default for ModelMover {
    fn default() -> Self {
        Self { step: 0.05 }
    }
}

pub fn identity() -> Matrix4<f32> {
    Matrix4::identity()
}
