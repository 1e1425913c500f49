use std::path::PathBuf;

use cgmath::Vector4;
use clap::{Parser, ValueEnum};
use log::info;

use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

use learngl::app::{launch, LaunchError};
use learngl::args::CommonArgs;
use learngl::frame::FrameInfo;
use learngl::logging::init_logging;
use learngl::scene::Scene;
use learngl::shapes;

/// Uniforms driven by time
#[derive(Debug, Parser)]
struct Args {
    #[arg(value_enum, default_value_t = Mode::Offset)]
    mode: Mode,
    /// Vertex shader source, replaces the built-in one
    #[arg(long, requires = "fragment")]
    vertex: Option<PathBuf>,
    /// Fragment shader source, replaces the built-in one
    #[arg(long, requires = "vertex")]
    fragment: Option<PathBuf>,
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// Single colour whose green channel pulses
    Pulse,
    /// Vertex coloured triangle sliding left and right
    Offset,
}

struct Uniforms {
    program: Program,
    triangle: Geometry,
}

/// Green channel of the pulsing colour, always inside 0..=1.
fn pulse_green(time: f32) -> f32 {
    time.sin() / 2.0 + 0.5
}

fn x_offset(time: f32) -> f32 {
    0.33 * (time / 0.1).sin()
}

impl Uniforms {
    fn new(args: &Args) -> Result<Self, LaunchError> {
        let builder = match (&args.vertex, &args.fragment) {
            (Some(vert), Some(frag)) => {
                info!("Loading shaders from {vert:?} and {frag:?}");
                ProgramBuilder::from_paths(vert, frag)?
            }
            _ => match args.mode {
                Mode::Pulse => ProgramBuilder::new(
                    include_str!("gl_shaders/position.glsl"),
                    include_str!("gl_shaders/uniform_color.glsl"),
                ),
                Mode::Offset => ProgramBuilder::new(
                    include_str!("gl_shaders/offset.glsl"),
                    include_str!("gl_shaders/vertex_color.glsl"),
                ),
            },
        };

        let triangle = GeometryBuilder::new(&shapes::COLORED_TRIANGLE)
            .with_attribute(VertexAttribute::Vec3)
            .with_attribute(VertexAttribute::Vec3)
            .build()?;

        info!(
            "Maximum number of vertex attributes: {}",
            GlRenderer::new().max_vertex_attribs()
        );

        Ok(Self {
            program: builder.build()?,
            triangle,
        })
    }
}

impl Scene for Uniforms {
    fn draw(&self, renderer: &mut GlRenderer, frame: &FrameInfo) {
        renderer.use_program(&self.program);

        // inactive uniforms are skipped, so custom shaders may use either
        self.program.set_vec4(
            "ourColor",
            Vector4::new(0.0, pulse_green(frame.time), 0.0, 1.0),
        );
        self.program.set_float("x_offset", x_offset(frame.time));

        renderer.draw(&self.triangle, &self.program);
    }
}

fn main() {
    init_logging();

    let args = Args::parse();

    launch(&args.common, "Shaders", || Uniforms::new(&args));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_stays_in_range() {
        for i in 0..100 {
            let g = pulse_green(i as f32 * 0.37);
            assert!((0.0..=1.0).contains(&g));
        }
        assert_eq!(pulse_green(0.0), 0.5);
    }

    #[test]
    fn offset_amplitude() {
        let peak = x_offset(std::f32::consts::FRAC_PI_2 * 0.1);
        assert!((peak - 0.33).abs() < 1e-5);
        assert_eq!(x_offset(0.0), 0.0);
    }

    #[test]
    fn shader_files_come_in_pairs() {
        let res = Args::try_parse_from(["shaders", "--vertex", "a.vert"]);
        assert!(res.is_err());

        let args = Args::try_parse_from(["shaders", "pulse", "--vertex", "a", "--fragment", "b"])
            .unwrap();
        assert!(matches!(args.mode, Mode::Pulse));
        assert_eq!(args.fragment, Some(PathBuf::from("b")));
    }
}
