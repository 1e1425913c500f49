use clap::{Parser, ValueEnum};

use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;

use learngl::app::{launch, LaunchError};
use learngl::args::CommonArgs;
use learngl::frame::FrameInfo;
use learngl::logging::init_logging;
use learngl::scene::Scene;
use learngl::shapes;

/// Flat coloured triangles
#[derive(Debug, Parser)]
struct Args {
    #[arg(value_enum, default_value_t = Variant::Indexed)]
    variant: Variant,
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Variant {
    /// Rectangle from four vertices and an element buffer
    Indexed,
    /// Two triangles in one buffer, drawn with two calls
    Split,
    /// Two triangles in two buffers, drawn with two programs
    TwoPrograms,
}

enum Triangles {
    Indexed {
        program: Program,
        rectangle: Geometry,
    },
    Split {
        program: Program,
        triangles: Geometry,
    },
    TwoPrograms {
        orange: Program,
        yellow: Program,
        right: Geometry,
        left: Geometry,
    },
}

fn position_geometry(data: &[f32]) -> GeometryBuilder<'_> {
    GeometryBuilder::new(data).with_attribute(VertexAttribute::Vec3)
}

impl Triangles {
    fn new(variant: Variant) -> Result<Self, LaunchError> {
        let vert = include_str!("gl_shaders/position.glsl");
        let orange = ProgramBuilder::new(vert, include_str!("gl_shaders/orange.glsl")).build()?;

        let scene = match variant {
            Variant::Indexed => Triangles::Indexed {
                program: orange,
                rectangle: position_geometry(&shapes::RECTANGLE)
                    .with_indices(&shapes::RECTANGLE_INDICES)
                    .build()?,
            },
            Variant::Split => Triangles::Split {
                program: orange,
                triangles: position_geometry(&shapes::TWO_TRIANGLES).build()?,
            },
            Variant::TwoPrograms => Triangles::TwoPrograms {
                orange,
                yellow: ProgramBuilder::new(vert, include_str!("gl_shaders/yellow.glsl"))
                    .build()?,
                right: position_geometry(&shapes::RIGHT_TRIANGLE).build()?,
                left: position_geometry(&shapes::LEFT_TRIANGLE).build()?,
            },
        };

        Ok(scene)
    }
}

impl Scene for Triangles {
    fn draw(&self, renderer: &mut GlRenderer, _frame: &FrameInfo) {
        match self {
            Triangles::Indexed { program, rectangle } => renderer.draw(rectangle, program),
            Triangles::Split { program, triangles } => {
                renderer.draw_range(triangles, program, 0, 3);
                renderer.draw_range(triangles, program, 3, 3);
            }
            Triangles::TwoPrograms {
                orange,
                yellow,
                right,
                left,
            } => {
                renderer.draw(right, orange);
                renderer.draw(left, yellow);
            }
        }
    }
}

fn main() {
    init_logging();

    let args = Args::parse();

    launch(&args.common, "Triangles", || Triangles::new(args.variant));
}
