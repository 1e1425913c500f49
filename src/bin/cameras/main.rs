use std::path::PathBuf;

use clap::Parser;

use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::{Program, ProgramBuilder};
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::texture::Texture2D;

use learngl::app::{launch, LaunchError};
use learngl::args::CommonArgs;
use learngl::camera::OrbitCamera;
use learngl::frame::FrameInfo;
use learngl::load_texture;
use learngl::logging::init_logging;
use learngl::scene::Scene;
use learngl::shaders::{CUBE_FRAGMENT, CUBE_VERTEX};
use learngl::shapes;
use learngl::transform::{cube_model, perspective};

/// Ten cubes seen from a camera circling one of them
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value = "assets/container.png")]
    container: PathBuf,
    /// Cube the camera circles around
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(0..10))]
    pivot: u8,
    /// Orbit radius
    #[arg(long, default_value_t = 10.0)]
    radius: f32,
    #[command(flatten)]
    common: CommonArgs,
}

struct CubeField {
    program: Program,
    cube: Geometry,
    texture: Texture2D,
    camera: OrbitCamera,
}

impl CubeField {
    fn new(args: &Args) -> Result<Self, LaunchError> {
        let program = ProgramBuilder::new(CUBE_VERTEX, CUBE_FRAGMENT).build()?;

        let cube = GeometryBuilder::new(&shapes::CUBE)
            .with_attribute(VertexAttribute::Vec3)
            .with_attribute(VertexAttribute::Vec2)
            .build()?;

        let camera = OrbitCamera {
            radius: args.radius,
            ..OrbitCamera::new(shapes::cube_positions()[args.pivot as usize])
        };

        Ok(Self {
            program,
            cube,
            texture: load_texture(&args.container, false)?,
            camera,
        })
    }
}

impl Scene for CubeField {
    fn depth_test(&self) -> bool {
        true
    }

    fn draw(&self, renderer: &mut GlRenderer, frame: &FrameInfo) {
        renderer.use_program(&self.program);
        self.program.set_int("texture1", 0);
        self.program.set_float("mixFactor", 0.0);
        self.texture.bind(0);

        let view = self.camera.view(frame.time);
        let projection = perspective(55.0, frame.aspect_ratio());

        self.program.set_mat4("view", &view);
        self.program.set_mat4("projection", &projection);

        for (i, position) in shapes::cube_positions().into_iter().enumerate() {
            let model = cube_model(i, position, frame.time);
            self.program.set_mat4("model", &model);

            renderer.draw(&self.cube, &self.program);
        }
    }
}

fn main() {
    init_logging();

    let args = Args::parse();

    launch(&args.common, "Cameras", || CubeField::new(&args));
}
