//! The animation engine.
//!
//! [`HelixEngine`] owns the GPU context, the helix model, the canvas
//! renderer, the frame clock, and the injected random generator. The
//! host calls [`advance`](HelixEngine::advance) on every callback and
//! [`render`](HelixEngine::render) whenever a logical frame fired;
//! [`clear`](HelixEngine::clear) implements the teardown contract by
//! repainting the surface with the background color only.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_time::Instant;

use crate::error::HelyxError;
use crate::gpu::render_context::RenderContext;
use crate::model::HelixModel;
use crate::options::Options;
use crate::render::passes;
use crate::render::pipeline::CanvasRenderer;
use crate::render::tessellator::MeshCanvas;
use crate::util::frame_clock::FrameClock;

/// Everything needed to animate one helix on one surface.
pub struct HelixEngine {
    context: RenderContext,
    canvas_renderer: CanvasRenderer,
    mesh: MeshCanvas,
    model: HelixModel,
    options: Options,
    rng: SmallRng,
    clock: FrameClock,
}

impl HelixEngine {
    /// Initialize against a window surface of the given physical size.
    ///
    /// The generator is seeded from `options.animation.seed` when set,
    /// otherwise from OS entropy; a fixed seed replays the identical
    /// animation.
    ///
    /// # Errors
    ///
    /// Returns [`HelyxError::Gpu`] when the GPU context cannot be
    /// created.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, HelyxError> {
        let context = RenderContext::new(window, size).await?;
        let canvas_renderer = CanvasRenderer::new(&context);

        let mut rng = match options.animation.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let model = HelixModel::new(&mut rng);
        let clock = FrameClock::new(options.animation.tick_rate, Instant::now());

        log::info!(
            "engine up: {} backbone particles, {} base pairs, {} Hz",
            model.backbone.len(),
            model.pairs.len(),
            options.animation.tick_rate,
        );

        Ok(Self {
            context,
            canvas_renderer,
            mesh: MeshCanvas::default(),
            model,
            options,
            rng,
            clock,
        })
    }

    /// Gate the callback at `now` through the frame clock and, when a
    /// logical frame fires, advance the model. Returns whether it fired.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.clock.should_tick(now) {
            return false;
        }
        self.model.advance(&mut self.rng);
        true
    }

    /// Draw the current frame: rebuild the mesh through the scene
    /// passes, upload it, and submit one render pass.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the surface is lost, outdated,
    /// or absent; the caller decides whether to resize or bail.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;

        self.mesh.clear();
        passes::draw_scene(
            &mut self.mesh,
            &self.model,
            &self.options,
            &mut self.rng,
        );
        self.canvas_renderer.upload(&self.context, &self.mesh);

        self.submit_pass(&frame);
        frame.present();
        Ok(())
    }

    /// Teardown contract: repaint the surface with the background color
    /// only, leaving no scene content behind.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when no drawable surface is
    /// available; callers tearing down treat that as already-clean.
    pub fn clear(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        self.mesh.clear();
        self.canvas_renderer.upload(&self.context, &self.mesh);
        self.submit_pass(&frame);
        frame.present();
        Ok(())
    }

    /// Record and submit the canvas pass against `frame`, clearing to
    /// the background color first.
    fn submit_pass(&mut self, frame: &wgpu::SurfaceTexture) {
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let [r, g, b] = self.options.colors.background;

        let mut encoder = self.context.create_encoder();
        {
            let mut render_pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Canvas Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            self.canvas_renderer.draw(&mut render_pass);
        }
        self.context.submit(encoder);
    }

    /// Reconfigure the surface for a new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options; a changed tick rate re-anchors the clock.
    pub fn set_options(&mut self, options: Options) {
        if options.animation.tick_rate != self.options.animation.tick_rate {
            self.clock =
                FrameClock::new(options.animation.tick_rate, Instant::now());
        }
        self.options = options;
    }

    /// Smoothed logical frame rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}
