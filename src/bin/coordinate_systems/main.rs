use std::path::PathBuf;

use cgmath::{Matrix4, Vector3};
use clap::Parser;

use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::texture::Texture2D;

use learngl::app::{launch, LaunchError};
use learngl::args::CommonArgs;
use learngl::frame::FrameInfo;
use learngl::input::ActiveKeys;
use learngl::load_texture;
use learngl::logging::init_logging;
use learngl::scene::Scene;
use learngl::shaders::{CUBE_FRAGMENT, CUBE_VERTEX};
use learngl::shapes;
use learngl::transform::{identity, perspective, view_translation, ModelMover};

/// Textured cube moved with WASD, shift+W/S for depth
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value = "assets/container.png")]
    container: PathBuf,
    #[arg(long, default_value = "assets/awesomeface.png")]
    face: PathBuf,
    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 55.0)]
    fov: f32,
    #[command(flatten)]
    common: CommonArgs,
}

struct MovableCube {
    program: Program,
    cube: Geometry,
    container: Texture2D,
    face: Texture2D,
    fov: f32,
    mover: ModelMover,
    model: Matrix4<f32>,
}

impl MovableCube {
    fn new(args: &Args) -> Result<Self, LaunchError> {
        let program = ProgramBuilder::new(CUBE_VERTEX, CUBE_FRAGMENT).build()?;

        let cube = GeometryBuilder::new(&shapes::CUBE)
            .with_attribute(VertexAttribute::Vec3)
            .with_attribute(VertexAttribute::Vec2)
            .build()?;

        Ok(Self {
            program,
            cube,
            container: load_texture(&args.container, false)?,
            face: load_texture(&args.face, true)?,
            fov: args.fov,
            mover: ModelMover::default(),
            model: identity(),
        })
    }
}

impl Scene for MovableCube {
    fn depth_test(&self) -> bool {
        true
    }

    fn update(&mut self, _frame: &FrameInfo, keys: &ActiveKeys) {
        self.mover.apply(&mut self.model, keys);
    }

    fn draw(&self, renderer: &mut GlRenderer, frame: &FrameInfo) {
        renderer.use_program(&self.program);
        self.program.set_int("texture1", 0);
        self.program.set_int("texture2", 1);
        self.program.set_float("mixFactor", 0.2);

        self.container.bind(0);
        self.face.bind(1);

        let view = view_translation(Vector3::new(0.0, 0.0, -3.0));
        let projection = perspective(self.fov, frame.aspect_ratio());

        self.program.set_mat4("view", &view);
        self.program.set_mat4("projection", &projection);
        self.program.set_mat4("model", &self.model);

        renderer.draw(&self.cube, &self.program);
    }
}

fn main() {
    init_logging();

    let args = Args::parse();

    launch(&args.common, "CoordinateSystems", || MovableCube::new(&args));
}
