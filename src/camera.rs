use cgmath::{EuclideanSpace, Matrix4, Point3, Vector3, Zero};

/// Camera circling a pivot point on the xz-plane at a fixed height, always
/// looking at the pivot.
#[derive(Debug, Copy, Clone)]
pub struct OrbitCamera {
    pub radius: f32,
    pub height: f32,
    pub pivot: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl OrbitCamera {
    pub fn new(pivot: Vector3<f32>) -> Self {
        Self {
            pivot,
            ..Default::default()
        }
    }

    /// Eye position after `time` seconds; one radian per second.
    pub fn eye(&self, time: f32) -> Vector3<f32> {
        let offset = Vector3::new(time.sin() * self.radius, self.height, time.cos() * self.radius);

        self.pivot + offset
    }

    pub fn view(&self, time: f32) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.eye(time)),
            Point3::from_vec(self.pivot),
            self.up,
        )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 10.0,
            height: 3.0,
            pivot: Vector3::zero(),
            up: Vector3::new(0.0, 1.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Transform, Vector4};

    const EPS: f32 = 1e-4;

    #[test]
    fn eye_starts_behind_pivot() {
        let cam = OrbitCamera::new(Vector3::new(1.3, -2.0, -2.5));
        let eye = cam.eye(0.0);

        assert!((eye - Vector3::new(1.3, 1.0, 7.5)).magnitude() < EPS);
    }

    #[test]
    fn eye_keeps_radius() {
        let cam = OrbitCamera::default();

        for i in 0..16 {
            let eye = cam.eye(i as f32 * 0.4);
            let flat = Vector3::new(eye.x, 0.0, eye.z);

            assert!((flat.magnitude() - 10.0).abs() < EPS);
            assert!((eye.y - 3.0).abs() < EPS);
        }
    }

    #[test]
    fn view_maps_pivot_onto_negative_z() {
        let cam = OrbitCamera::new(Vector3::new(2.0, 0.0, -1.0));
        let view = cam.view(1.7);

        let p = view * Vector4::new(2.0, 0.0, -1.0, 1.0);
        let dist = (10.0_f32.powi(2) + 3.0_f32.powi(2)).sqrt();

        assert!(p.x.abs() < EPS);
        assert!(p.y.abs() < EPS);
        assert!((p.z + dist).abs() < EPS);

        let eye = view.transform_point(Point3::from_vec(cam.eye(1.7)));
        assert!(eye.to_vec().magnitude() < EPS);
    }
}
