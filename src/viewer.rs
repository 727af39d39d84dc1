//! Standalone animation window backed by winit.
//!
//! The window acts as the host for the animation core: it delivers
//! redraw callbacks, which the engine gates down to the fixed logical
//! rate, and it always re-requests the next redraw whether or not a
//! logical frame fired. Closing the window runs the teardown contract
//! (clear the surface, exit the event loop).
//!
//! ```no_run
//! # use helyx::Viewer;
//! Viewer::builder().with_title("Helix").build().run().unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::HelixEngine, error::HelyxError, model::params, options::Options,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Helyx", default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Helyx".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs the helix animation.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    ///
    /// # Errors
    ///
    /// Returns [`HelyxError::Viewer`] when the event loop cannot be
    /// created or fails while running.
    pub fn run(self) -> Result<(), HelyxError> {
        let event_loop =
            EventLoop::new().map_err(|e| HelyxError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| HelyxError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<HelixEngine>,
    options: Options,
    title: String,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                params::SURFACE_WIDTH,
                params::SURFACE_HEIGHT,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let engine_result = pollster::block_on(HelixEngine::new(
            window.clone(),
            (inner.width.max(1), inner.height.max(1)),
            self.options.clone(),
        ));

        let engine = match engine_result {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                // Teardown contract: wipe the surface, then stop. The
                // exited event loop schedules no further callbacks.
                if let Some(engine) = &mut self.engine {
                    if let Err(e) = engine.clear() {
                        log::debug!("surface clear on teardown: {e:?}");
                    }
                }
                log::info!("viewer closing");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.engine {
                    if engine.advance(Instant::now()) {
                        match engine.render() {
                            Ok(()) => {}
                            Err(
                                wgpu::SurfaceError::Outdated
                                | wgpu::SurfaceError::Lost,
                            ) => {
                                if let Some(w) = &self.window {
                                    let inner = w.inner_size();
                                    engine.resize(inner.width, inner.height);
                                }
                            }
                            Err(e) => {
                                log::error!("render error: {e:?}");
                            }
                        }
                    }
                }
                // Always re-register for the next host callback, whether
                // or not a logical frame fired.
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            _ => (),
        }
    }
}
