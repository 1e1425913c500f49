/// Per-frame values handed to a [`Scene`](crate::scene::Scene).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInfo {
    /// Seconds since the render loop started.
    pub time: f32,
    pub width: u32,
    pub height: u32,
}

impl FrameInfo {
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }

        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_is_float_division() {
        let frame = FrameInfo {
            time: 0.0,
            width: 800,
            height: 600,
        };

        assert!((frame.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_does_not_divide() {
        let frame = FrameInfo {
            time: 0.0,
            width: 800,
            height: 0,
        };

        assert_eq!(frame.aspect_ratio(), 1.0);
    }
}
