use crate::controllers::frame::FrameData;
use crate::core::data::frame_size::FrameSize;
use egui::Context as EguiContext;
use egui_wgpu::{Renderer as EguiRenderer, ScreenDescriptor};
use log::warn;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Presents finished frames through a `pixels` surface with an egui overlay
/// drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    /// The backing buffer has the frame's logical size and is scaled to the
    /// window surface.
    pub fn new(window: &'static Window, frame_size: FrameSize) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(frame_size.width(), frame_size.height(), surface_texture)?;

        // No depth buffer, single sample.
        let egui_renderer =
            EguiRenderer::new(pixels.device(), pixels.render_texture_format(), None, 1);

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
        })
    }

    /// Copies the frame's RGBA bytes into the pixels frame. Both use the same
    /// layout, so this is a straight copy.
    pub fn present(&mut self, frame: &FrameData<'_>) {
        let src = frame.pixel_buffer.buffer();
        let dest = self.pixels.frame_mut();

        if src.len() != dest.len() {
            warn!(
                "skipping frame {}: buffer length {} does not match surface buffer {}",
                frame.tick,
                src.len(),
                dest.len()
            );
            return;
        }

        dest.copy_from_slice(src);
    }

    /// Scales the pixels frame onto the surface, then paints the egui shapes
    /// over it.
    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let pixels_per_point = egui_ctx.pixels_per_point();
        let primitives = egui_ctx.tessellate(egui_output.shapes, pixels_per_point);
        let screen = ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point,
        };
        let textures = egui_output.textures_delta;
        let overlay = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, target, context| {
            context.scaling_renderer.render(encoder, target);

            for (id, delta) in &textures.set {
                overlay.update_texture(&context.device, &context.queue, *id, delta);
            }
            overlay.update_buffers(&context.device, &context.queue, encoder, &primitives, &screen);

            paint_overlay(overlay, encoder, target, &primitives, &screen);

            for id in &textures.free {
                overlay.free_texture(id);
            }

            Ok(())
        })
    }

    /// Resizes the window surface only. The backing buffer keeps the logical
    /// frame size.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

/// Draws the overlay in a pass that loads the existing target, leaving the
/// scaled fractal visible underneath.
fn paint_overlay(
    renderer: &EguiRenderer,
    encoder: &mut wgpu::CommandEncoder,
    target: &wgpu::TextureView,
    primitives: &[egui::ClippedPrimitive],
    screen: &ScreenDescriptor,
) {
    let attachment = wgpu::RenderPassColorAttachment {
        view: target,
        resolve_target: None,
        ops: wgpu::Operations {
            load: wgpu::LoadOp::Load,
            store: wgpu::StoreOp::Store,
        },
    };
    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("gofrac overlay"),
        color_attachments: &[Some(attachment)],
        ..Default::default()
    });

    renderer.render(&mut pass, primitives, screen);
}
