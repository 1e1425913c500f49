use gl_wrapper::renderer::GlRenderer;

use crate::frame::FrameInfo;
use crate::input::ActiveKeys;

/// The part of a tutorial program that varies: what gets drawn and how it
/// reacts to time and input. Everything else lives in [`App`](crate::app::App).
///
/// GPU objects owned by a scene are released when it is dropped, which the
/// render loop does while the GL context is still current.
pub trait Scene {
    fn depth_test(&self) -> bool {
        false
    }

    fn update(&mut self, _frame: &FrameInfo, _keys: &ActiveKeys) {}

    fn draw(&self, renderer: &mut GlRenderer, frame: &FrameInfo);
}
