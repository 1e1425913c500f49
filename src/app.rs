use std::ffi::CString;
use std::num::NonZeroU32;
use std::time::Instant;

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use log::{debug, error, info, warn};

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use gl_wrapper::geometry::GBError;
use gl_wrapper::program::PBError;
use gl_wrapper::renderer::{GlRenderer, PolygonMode};
use gl_wrapper::texture::TextureError;

use crate::args::CommonArgs;
use crate::config::{ConfigError, WindowConfig};
use crate::frame::FrameInfo;
use crate::input::{ActiveKeys, Key};
use crate::scene::Scene;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    config: WindowConfig,
}

impl App {
    /// Opens the window and makes an OpenGL context current on it. GL
    /// functions can be called once this returns.
    pub fn new(config: &WindowConfig) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(
                config.width,
                config.height,
            )))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title(config.title());
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new().with_depth_size(24);

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |configs| {
                configs
                    .reduce(|best, c| {
                        if c.num_samples() > best.num_samples() {
                            c
                        } else {
                            best
                        }
                    })
                    // glutin never calls the picker with an empty iterator
                    .expect("no GL config offered")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::NoWindow)?;
        let handle = window.raw_window_handle();
        let gl_display = gl_config.display();

        let [major, minor] = config.gl_version;
        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .build(Some(handle));

        let gl_window = GlWindow::new(window, &gl_config)?;

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attr)? }
            .make_current(&gl_window.surface)?;

        gl::load_with(|s| {
            let symbol = CString::new(s).unwrap_or_default();
            gl_display.get_proc_address(symbol.as_c_str()).cast()
        });

        if config.vsync {
            let interval = SwapInterval::Wait(NonZeroU32::MIN);
            if let Err(e) = gl_window.surface.set_swap_interval(&gl_context, interval) {
                warn!("Could not enable vsync: {e}");
            }
        }

        info!(
            "Created {}x{} window with OpenGL {major}.{minor} core context",
            config.width, config.height
        );

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            config: config.clone(),
        })
    }

    /// Runs the render loop until the window is closed or Escape is pressed.
    pub fn run<S: Scene + 'static>(self, scene: S) -> ! {
        let Self {
            event_loop,
            gl_context,
            gl_window,
            config,
        } = self;

        let mut gl_renderer = GlRenderer::new();
        gl_renderer.set_depth_test(scene.depth_test());

        let size = gl_window.window.inner_size();
        gl_renderer.resize(size.width, size.height);

        let mut frame = FrameInfo {
            time: 0.0,
            width: size.width,
            height: size.height,
        };

        let mut keys = ActiveKeys::default();
        let mut scene = Some(scene);
        let [r, g, b] = config.clear_color;
        let start = Instant::now();

        event_loop.run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Poll;
            match event {
                Event::MainEventsCleared => {
                    frame.time = start.elapsed().as_secs_f32();

                    if let Some(scene) = &mut scene {
                        scene.update(&frame, &keys);
                    }

                    gl_window.window.request_redraw();
                }
                Event::RedrawRequested(_) => {
                    gl_renderer.clear_color(r, g, b);

                    if let Some(scene) = &scene {
                        scene.draw(&mut gl_renderer, &frame);
                    }

                    if let Err(e) = gl_window.surface.swap_buffers(&gl_context) {
                        error!("Could not present frame: {e}");
                    }
                }
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::Resized(size) => {
                        if let (Some(width), Some(height)) =
                            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                        {
                            gl_window.surface.resize(&gl_context, width, height);
                            gl_renderer.resize(size.width, size.height);
                            frame.width = size.width;
                            frame.height = size.height;
                            info!("Window resized to ({}, {})", size.width, size.height);
                        }
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        let pressed = input.state == ElementState::Pressed;

                        if let Some(key) = input.virtual_keycode.and_then(Key::from_virtual) {
                            keys.set(key, pressed);

                            match key {
                                Key::Escape if pressed => control_flow.set_exit(),
                                Key::L if pressed => gl_renderer.set_polygon_mode(PolygonMode::Line),
                                Key::F if pressed => gl_renderer.set_polygon_mode(PolygonMode::Fill),
                                _ => {}
                            }
                        }
                    }
                    WindowEvent::CloseRequested => {
                        control_flow.set_exit();
                    }
                    _ => (),
                },
                Event::LoopDestroyed => {
                    // GPU objects go while the context is still current
                    drop(scene.take());
                    debug!("Released scene resources");
                    info!("Shutting down after {:.1}s", start.elapsed().as_secs_f32());
                }
                _ => (),
            }
        })
    }
}

/// Creates the window, lets `build` set up the GPU side of a scene, then runs
/// it. Any failure on the way is logged and ends the process.
pub fn launch<S, F>(common: &CommonArgs, title: &str, build: F) -> !
where
    S: Scene + 'static,
    F: FnOnce() -> Result<S, LaunchError>,
{
    let started = common
        .window_config(title)
        .map_err(LaunchError::from)
        .and_then(|config| Ok(App::new(&config)?))
        .and_then(|app| Ok((app, build()?)));

    match started {
        Ok((app, scene)) => app.run(scene),
        Err(e) => {
            error!("{title}: {e}");
            std::process::exit(1);
        }
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Result<Self, AppError> {
        let size = window.inner_size();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN),
        );

        let surface = unsafe { config.display().create_window_surface(config, &attrs)? };

        Ok(Self { window, surface })
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not open a display: {0}")]
    Display(String),
    #[error("{0}")]
    Context(#[from] glutin::error::Error),
    #[error("no window was created")]
    NoWindow,
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Program(#[from] PBError),
    #[error(transparent)]
    Geometry(#[from] GBError),
    #[error(transparent)]
    Texture(#[from] TextureError),
}
