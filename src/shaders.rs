//! GLSL shared by the 3D programs.

/// Transforms by `model`, `view` and `projection`, passes texture coordinates on.
pub const CUBE_VERTEX: &str = include_str!("gl_shaders/cube.glsl");

/// Blends `texture1` and `texture2` by `mixFactor`.
pub const CUBE_FRAGMENT: &str = include_str!("gl_shaders/cube_texture.glsl");
