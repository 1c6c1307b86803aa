//! CMY Cube & Tesseract
//!
//! Shows a translucent CMY cube and a perspective-projected tesseract whose
//! inner cube cycles through a simulated rotation in W.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use cmy4d::config::AppConfig;
use cmy4d::input::{InputMapper, UiAction};
use cmy4d::systems::{ActionEffect, ActionSystem, AnimationSystem, RenderSystem, WindowSystem};
use cmy4d_core::{CoreError, SceneSettings, SceneState};
use cmy4d_input::OrbitController;
use cmy4d_render::{RenderError, Renderer};

/// Main application state
struct App {
    config: AppConfig,
    scene: SceneState,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    animation: AnimationSystem,
    actions: ActionSystem,
    mapper: InputMapper,
    controller: OrbitController,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, CoreError> {
        let scene = SceneState::new(config.to_scene_settings()).or_else(|e| {
            log::warn!("Invalid scene settings: {}. Using defaults.", e);
            SceneState::new(SceneSettings::default())
        })?;

        let controller = OrbitController::new()
            .with_rotate_sensitivity(config.input.rotate_sensitivity)
            .with_zoom_sensitivity(config.input.zoom_sensitivity);

        Ok(Self {
            actions: ActionSystem::new(config.input.max_rotation_speed),
            mapper: InputMapper::new(config.input.speed_step),
            config,
            scene,
            window_system: None,
            render_system: None,
            animation: AnimationSystem::new(),
            controller,
        })
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        if event.repeat {
            return;
        }
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        let Some(action) = self.mapper.map_keyboard(key, event.state) else {
            return;
        };

        if matches!(action, UiAction::ResetView | UiAction::SelectView(_)) {
            self.controller.clear();
        }

        match self.actions.apply(&mut self.scene, action) {
            ActionEffect::None => {}
            ActionEffect::ViewChanged(changed) => {
                log::debug!(
                    "Tesseract controls {}",
                    if changed.show_tesseract_controls { "shown" } else { "hidden" }
                );
            }
            ActionEffect::ToggleFullscreen => {
                if let Some(window_system) = &self.window_system {
                    window_system.toggle_fullscreen();
                }
            }
            ActionEffect::Exit => {
                event_loop.exit();
                return;
            }
        }

        if let Some(window_system) = &self.window_system {
            window_system.update_title(&self.scene);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.controller.update(self.scene.camera_mut());
        let report = self.animation.update(&mut self.scene);

        if report.w_step.is_some() {
            if let Some(window_system) = &self.window_system {
                window_system.update_title(&self.scene);
            }
        }

        if let Some(render_system) = &mut self.render_system {
            match render_system.draw(&self.scene) {
                Ok(()) => self.scene.clear_dirty(),
                Err(RenderError::SurfaceLost) => render_system.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window_system) = &self.window_system {
            window_system.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match RenderSystem::new(
            window_system.window().clone(),
            &self.config.rendering,
            self.config.window.vsync,
        ) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render_system.size();
        self.scene.on_resize(width, height);
        self.controller.set_viewport_height(height);

        window_system.update_title(&self.scene);
        window_system.request_redraw();

        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size.width, physical_size.height);
                }
                self.scene.on_resize(physical_size.width, physical_size.height);
                self.controller.set_viewport_height(physical_size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, event),

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.controller.process_scroll(scroll);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting {}", config.window.title);

    let mut app = App::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;
    Ok(())
}
