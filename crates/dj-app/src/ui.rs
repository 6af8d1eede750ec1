mod top_panel;
mod form_panel;
mod notice_overlay;

pub use top_panel::TopPanel;
pub use form_panel::FormPanel;
pub use notice_overlay::NoticeOverlay;

use std::sync::Arc;
use egui::Context;
use log::error;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use dj_core::{GenerationRequest, TextModel};
use crate::clipboard::SystemClipboard;
use crate::error::AppError;
use crate::events::DjEvent;
use crate::form::FormController;
use crate::gfx::GfxState;

#[derive(Debug, Clone)]
pub enum UiEvent {
    Generate(GenerationRequest),
}

/// State shared by every component for the duration of a frame.
pub struct UiContext {
    pub form: FormController,
    pub clipboard: SystemClipboard,
    pub model: TextModel,
    pub event_loop_proxy: Arc<EventLoopProxy<DjEvent>>,
}

impl UiContext {
    pub fn new(model: TextModel, event_loop_proxy: Arc<EventLoopProxy<DjEvent>>) -> Self {
        Self {
            form: FormController::new(),
            clipboard: SystemClipboard::new(),
            model,
            event_loop_proxy,
        }
    }

    pub fn send_event(&self, event: UiEvent) {
        if self.event_loop_proxy.send_event(DjEvent::Ui(event)).is_err() {
            error!("{}", AppError::EventLoopClosed("ui event"));
        }
    }
}

pub struct UiState {
    pub(crate) egui_state: egui_winit::State,
    pub(crate) egui_ctx: egui::Context,
    pub(crate) egui_renderer: egui_wgpu::Renderer,

    components: Vec<Box<dyn UiComponent>>,
    pub(crate) ui_ctx: UiContext,
}

impl UiState {
    pub fn new(gfx: &GfxState, window: Arc<Window>, ui_ctx: UiContext) -> Self {
        let egui_ctx = egui::Context::default();

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &gfx.device, gfx.config.format, egui_wgpu::RendererOptions::default());

        Self {
            egui_ctx,
            egui_state,
            egui_renderer,
            components: Vec::new(),
            ui_ctx,
        }
    }

    pub fn draw(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        self.egui_ctx.run(raw_input, |ctx| {
            for component in self.components.iter_mut() {
                component.show(ctx, &mut self.ui_ctx);
            }
        })
    }

    /// Components are drawn in insertion order; panels must precede the central panel.
    pub fn add_component(&mut self, component: Box<dyn UiComponent>) {
        self.components.push(component);
    }
}

pub trait UiComponent {
    fn show(&mut self, ctx: &Context, ui_ctx: &mut UiContext);
}
