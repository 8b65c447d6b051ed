//! Main GUI event loop.

use crate::controllers::frame::FrameController;
use crate::core::data::frame_size::FrameSize;
use crate::core::fractals::escape_time::escape_time_config::EscapeTimeConfig;
use crate::input::gui::config::{
    KEY_HELP, SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH, WINDOW_TITLE,
};
use crate::input::gui::keys::view_command_for_key;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info};
use std::error::Error;
use std::time::Duration;
use winit::{
    dpi::LogicalSize,
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

struct GuiApp {
    presenter: PixelsPresenter,
    controller: FrameController,
    last_render_duration: Option<Duration>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: PixelsPresenter,
        controller: FrameController,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            last_render_duration: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs one tick: applies queued input, renders the fractal and draws the
    /// overlay on top.
    fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        let frame = self.controller.tick();
        self.presenter.present(&frame);
        self.last_render_duration = Some(frame.render_duration);

        let mut egui_output = self.update_ui(window);
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state.handle_platform_output(window, platform_output);

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let view = self.controller.view();
        let palette_kind = self.controller.palette_kind();
        let max_iterations = self.controller.max_iterations();
        let last_render_duration = self.last_render_duration;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new(WINDOW_TITLE)
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("Zoom: {}x", view.zoom()));
                    ui.label(format!(
                        "Focus: {:+.4} {:+.4}i",
                        view.focus().real,
                        view.focus().imag
                    ));
                    ui.label(format!("Palette: {}", palette_kind));
                    ui.label(format!("Max iterations: {}", max_iterations));

                    if let Some(duration) = last_render_duration {
                        ui.label(format!("Frame: {:.1} ms", duration.as_secs_f64() * 1000.0));
                    }

                    ui.separator();
                    ui.small(KEY_HELP);
                });
        })
    }

    fn handle_key_event(&mut self, event: &KeyEvent) {
        if self.egui_ctx.wants_keyboard_input() {
            return;
        }

        if let PhysicalKey::Code(key_code) = event.physical_key {
            if let Some(command) = view_command_for_key(key_code, event.state) {
                self.controller.queue(command);
            }
        }
    }
}

/// Opens the window and runs the render loop until it is closed.
pub fn run_gui() -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                SCREEN_WIDTH * SCREEN_SCALE,
                SCREEN_HEIGHT * SCREEN_SCALE,
            ))
            .with_min_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .build(&event_loop)?,
    ));

    let frame_size = FrameSize::new(SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let config = EscapeTimeConfig::default();
    let controller = FrameController::new(frame_size, config)?;
    let presenter = PixelsPresenter::new(window, frame_size)?;
    let mut app = GuiApp::new(window, &event_loop, presenter, controller);

    info!(
        "rendering {}x{} at {} max iterations",
        SCREEN_WIDTH, SCREEN_HEIGHT, config.max_iterations
    );

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            let response = app.egui_state.on_window_event(window, event);

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if let Err(e) = app.redraw(window) {
                        error!("render error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    debug!("resizing surface to {}x{}", size.width, size.height);
                    if let Err(e) = app.presenter.resize_surface(size.width, size.height) {
                        error!("resize error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                }
                WindowEvent::KeyboardInput { event, .. } if !response.consumed => {
                    app.handle_key_event(event);
                }
                _ => {}
            }
        }
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
