//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The scene pipeline and its vertex buffers
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use cmy4d_core::SceneState;
use cmy4d_render::{
    camera_uniforms,
    context::RenderContext,
    pipeline::ScenePipeline,
    RenderError, RenderableScene, Renderer,
};
use crate::config::RenderingConfig;

/// Draws the scene into the window with wgpu
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ScenePipeline,
    geometry: RenderableScene,
    uploaded: bool,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = ScenePipeline::new(&context.device, context.config.format);

        Ok(Self {
            context,
            pipeline,
            geometry: RenderableScene::new(),
            uploaded: false,
            clear_color: clear_color(config.background_color),
        })
    }

    /// Configure the surface again after it was lost
    pub fn reconfigure(&self) {
        self.context.reconfigure();
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    /// Rebuild and upload vertex data if the scene changed since the last upload
    fn sync_geometry(&mut self, scene: &SceneState) {
        if self.uploaded && !scene.is_dirty() {
            return;
        }
        self.geometry = RenderableScene::from_scene(scene);
        self.pipeline.upload(&self.context.device, &self.context.queue, &self.geometry);
        if !self.uploaded {
            log::info!(
                "Uploaded {} triangles and {} lines",
                self.geometry.triangle_count(),
                self.geometry.line_count()
            );
        }
        self.uploaded = true;
    }
}

impl Renderer for RenderSystem {
    fn draw(&mut self, scene: &SceneState) -> Result<(), RenderError> {
        self.sync_geometry(scene);
        self.pipeline
            .update_uniforms(&self.context.queue, &camera_uniforms(scene.camera()));

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }
}

/// Convert a config color to a wgpu clear color
fn clear_color(rgba: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: rgba[0] as f64,
        g: rgba[1] as f64,
        b: rgba[2] as f64,
        a: rgba[3] as f64,
    }
}
