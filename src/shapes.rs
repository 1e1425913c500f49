//! Vertex data of the tutorial programs. Positions are in normalized device
//! coordinates for the 2D shapes and in model space for the cube.

use cgmath::Vector3;

/// Rectangle as four corners, drawn with [`RECTANGLE_INDICES`].
#[rustfmt::skip]
pub const RECTANGLE: [f32; 12] = [
    0.5, 0.5, 0.0,
    0.5, -0.5, 0.0,
    -0.5, -0.5, 0.0,
    -0.5, 0.5, 0.0,
];

#[rustfmt::skip]
pub const RECTANGLE_INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

/// Two triangles meeting at the origin, back to back in one buffer.
#[rustfmt::skip]
pub const TWO_TRIANGLES: [f32; 18] = [
    0.5, 0.5, 0.0,
    0.5, -0.5, 0.0,
    0.0, 0.0, 0.0,
    -0.5, 0.5, 0.0,
    -0.5, -0.5, 0.0,
    0.0, 0.0, 0.0,
];

#[rustfmt::skip]
pub const RIGHT_TRIANGLE: [f32; 9] = [
    0.5, 0.5, 0.0,
    0.5, -0.5, 0.0,
    0.0, 0.0, 0.0,
];

#[rustfmt::skip]
pub const LEFT_TRIANGLE: [f32; 9] = [
    -0.5, 0.5, 0.0,
    -0.5, -0.5, 0.0,
    0.0, 0.0, 0.0,
];

/// Position and RGB colour per vertex.
#[rustfmt::skip]
pub const COLORED_TRIANGLE: [f32; 18] = [
    0.0, 0.5, 0.0, 1.0, 0.0, 0.0,
    0.5, -0.5, 0.0, 0.0, 1.0, 0.0,
    -0.5, -0.5, 0.0, 0.0, 0.0, 1.0,
];

/// Position, colour and texture coordinates per vertex.
#[rustfmt::skip]
pub const TEXTURED_QUAD: [f32; 32] = [
    0.5, 0.5, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0,
    -0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0,
    0.5, -0.5, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0,
    -0.5, -0.5, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0,
];

#[rustfmt::skip]
pub const TEXTURED_QUAD_INDICES: [u32; 6] = [
    0, 2, 3,
    3, 1, 0,
];

/// Unit cube as 36 unindexed vertices, position and texture coordinates.
#[rustfmt::skip]
pub const CUBE: [f32; 180] = [
    -0.5, -0.5, -0.5, 0.0, 0.0,
    0.5, -0.5, -0.5, 1.0, 0.0,
    0.5, 0.5, -0.5, 1.0, 1.0,
    0.5, 0.5, -0.5, 1.0, 1.0,
    -0.5, 0.5, -0.5, 0.0, 1.0,
    -0.5, -0.5, -0.5, 0.0, 0.0,

    -0.5, -0.5, 0.5, 0.0, 0.0,
    0.5, -0.5, 0.5, 1.0, 0.0,
    0.5, 0.5, 0.5, 1.0, 1.0,
    0.5, 0.5, 0.5, 1.0, 1.0,
    -0.5, 0.5, 0.5, 0.0, 1.0,
    -0.5, -0.5, 0.5, 0.0, 0.0,

    -0.5, 0.5, 0.5, 1.0, 0.0,
    -0.5, 0.5, -0.5, 1.0, 1.0,
    -0.5, -0.5, -0.5, 0.0, 1.0,
    -0.5, -0.5, -0.5, 0.0, 1.0,
    -0.5, -0.5, 0.5, 0.0, 0.0,
    -0.5, 0.5, 0.5, 1.0, 0.0,

    0.5, 0.5, 0.5, 1.0, 0.0,
    0.5, 0.5, -0.5, 1.0, 1.0,
    0.5, -0.5, -0.5, 0.0, 1.0,
    0.5, -0.5, -0.5, 0.0, 1.0,
    0.5, -0.5, 0.5, 0.0, 0.0,
    0.5, 0.5, 0.5, 1.0, 0.0,

    -0.5, -0.5, -0.5, 0.0, 1.0,
    0.5, -0.5, -0.5, 1.0, 1.0,
    0.5, -0.5, 0.5, 1.0, 0.0,
    0.5, -0.5, 0.5, 1.0, 0.0,
    -0.5, -0.5, 0.5, 0.0, 0.0,
    -0.5, -0.5, -0.5, 0.0, 1.0,

    -0.5, 0.5, -0.5, 0.0, 1.0,
    0.5, 0.5, -0.5, 1.0, 1.0,
    0.5, 0.5, 0.5, 1.0, 0.0,
    0.5, 0.5, 0.5, 1.0, 0.0,
    -0.5, 0.5, 0.5, 0.0, 0.0,
    -0.5, 0.5, -0.5, 0.0, 1.0,
];

pub fn cube_positions() -> [Vector3<f32>; 10] {
    [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(2.0, 5.0, -15.0),
        Vector3::new(-1.5, -2.2, -2.5),
        Vector3::new(-3.8, -2.0, -12.3),
        Vector3::new(2.4, -0.4, -3.5),
        Vector3::new(-1.7, 3.0, -7.5),
        Vector3::new(1.3, -2.0, -2.5),
        Vector3::new(1.5, 2.0, -2.5),
        Vector3::new(1.5, 0.2, -1.5),
        Vector3::new(-1.3, 1.0, -1.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_stays_inside_unit_box() {
        for vertex in CUBE.chunks_exact(5) {
            assert!(vertex[..3].iter().all(|c| c.abs() == 0.5));
            assert!(vertex[3..].iter().all(|&c| c == 0.0 || c == 1.0));
        }
    }

    #[test]
    fn indices_reference_existing_vertices() {
        assert!(RECTANGLE_INDICES.iter().all(|&i| (i as usize) < RECTANGLE.len() / 3));
        assert!(TEXTURED_QUAD_INDICES
            .iter()
            .all(|&i| (i as usize) < TEXTURED_QUAD.len() / 8));
    }

    #[test]
    fn split_halves_match_separate_triangles() {
        assert_eq!(TWO_TRIANGLES[..9], RIGHT_TRIANGLE);
        assert_eq!(TWO_TRIANGLES[9..], LEFT_TRIANGLE);
    }
}
