use std::path::PathBuf;

use clap::Parser;

use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::texture::Texture2D;

use learngl::app::{launch, LaunchError};
use learngl::args::CommonArgs;
use learngl::frame::FrameInfo;
use learngl::load_texture;
use learngl::logging::init_logging;
use learngl::scene::Scene;
use learngl::shapes;

/// Quad blending two textures
#[derive(Debug, Parser)]
struct Args {
    /// Base texture, PNG or JPEG
    #[arg(long, default_value = "assets/container.png")]
    container: PathBuf,
    /// Texture blended on top, flipped vertically on load
    #[arg(long, default_value = "assets/awesomeface.png")]
    face: PathBuf,
    /// Weight of the second texture
    #[arg(long, default_value_t = 0.2)]
    mix: f32,
    #[command(flatten)]
    common: CommonArgs,
}

struct TexturedQuad {
    program: Program,
    quad: Geometry,
    container: Texture2D,
    face: Texture2D,
    mix: f32,
}

impl TexturedQuad {
    fn new(args: &Args) -> Result<Self, LaunchError> {
        let program = ProgramBuilder::new(
            include_str!("gl_shaders/textured.glsl"),
            include_str!("gl_shaders/mix.glsl"),
        )
        .build()?;

        let quad = GeometryBuilder::new(&shapes::TEXTURED_QUAD)
            .with_attribute(VertexAttribute::Vec3)
            .with_attribute(VertexAttribute::Vec3)
            .with_attribute(VertexAttribute::Vec2)
            .with_indices(&shapes::TEXTURED_QUAD_INDICES)
            .build()?;

        Ok(Self {
            program,
            quad,
            container: load_texture(&args.container, false)?,
            face: load_texture(&args.face, true)?,
            mix: args.mix.clamp(0.0, 1.0),
        })
    }
}

impl Scene for TexturedQuad {
    fn draw(&self, renderer: &mut GlRenderer, _frame: &FrameInfo) {
        renderer.use_program(&self.program);
        self.program.set_int("texture1", 0);
        self.program.set_int("texture2", 1);
        self.program.set_float("mixFactor", self.mix);

        self.container.bind(0);
        self.face.bind(1);

        renderer.draw(&self.quad, &self.program);
    }
}

fn main() {
    init_logging();

    let args = Args::parse();

    launch(&args.common, "Textures", || TexturedQuad::new(&args));
}
