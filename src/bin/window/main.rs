use clap::Parser;

use gl_wrapper::renderer::GlRenderer;

use learngl::app::launch;
use learngl::args::CommonArgs;
use learngl::frame::FrameInfo;
use learngl::logging::init_logging;
use learngl::scene::Scene;

/// Opens a window and clears it every frame
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

struct Empty;

impl Scene for Empty {
    fn draw(&self, _renderer: &mut GlRenderer, _frame: &FrameInfo) {}
}

fn main() {
    init_logging();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    launch(&args.common, "CreatingAWindow", || Ok(Empty));
}
