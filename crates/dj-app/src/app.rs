use std::sync::Arc;
use std::time::Instant;
use log::error;
use tokio::runtime::Handle;
use winit::{
    event::*,
    event_loop::ActiveEventLoop,
};
use winit::application::ApplicationHandler;
use winit::event_loop::{ControlFlow, EventLoop, EventLoopProxy};
use winit::window::{WindowAttributes, WindowId};
use dj_core::{GenerationClient, TextModel};
use crate::events::DjEvent;
use crate::state::AppState;

pub struct App {
    event_loop_proxy: Arc<EventLoopProxy<DjEvent>>,
    runtime: Handle,
    client: Arc<dyn GenerationClient>,
    model: TextModel,
    state: Option<AppState>,
    needs_redraw: bool,
    next_frame: Option<Instant>,
}

impl App {
    pub fn new(
        event_loop: &EventLoop<DjEvent>,
        runtime: Handle,
        client: Arc<dyn GenerationClient>,
        model: TextModel,
    ) -> Self {
        let event_loop_proxy = Arc::new(event_loop.create_proxy());

        Self {
            event_loop_proxy,
            runtime,
            client,
            model,
            state: None,
            needs_redraw: false,
            next_frame: None,
        }
    }

    fn init_state(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<AppState> {
        let window_attributes = WindowAttributes::default()
            .with_title("AI-Powered Dummy JSON Generator")
            .with_inner_size(winit::dpi::LogicalSize::new(900.0, 860.0));

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        pollster::block_on(AppState::new(
            window,
            self.event_loop_proxy.clone(),
            self.runtime.clone(),
            self.client.clone(),
            self.model,
        ))
    }
}

impl ApplicationHandler<DjEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.init_state(event_loop) {
            Ok(state) => {
                self.state = Some(state);
                self.needs_redraw = true;
            }
            Err(e) => {
                error!("Failed to initialise window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: DjEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            DjEvent::Ui(e) => state.on_ui_event(e),
            DjEvent::Gen(e) => state.on_gen_event(e),
        }
        self.needs_redraw = true;
        state.window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        if state.window.id() != window_id {
            return;
        }

        // Let egui handle the event first
        let response = state.ui.egui_state.on_window_event(&state.window, &event);

        if response.repaint {
            self.needs_redraw = true;
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                state.resize(physical_size);
                self.needs_redraw = true;
            }
            WindowEvent::RedrawRequested => {
                self.needs_redraw = false;
                match state.render() {
                    Ok(next_frame) => self.next_frame = next_frame,
                    Err(e) => {
                        error!("Render failed: {:#}", e);
                        self.next_frame = None;
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = &self.state else {
            return;
        };

        // Keep the spinner and elapsed time moving while a call is in flight
        if self.needs_redraw || state.is_busy() {
            state.window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        match self.next_frame {
            Some(deadline) if deadline <= Instant::now() => {
                self.next_frame = None;
                state.window.request_redraw();
                event_loop.set_control_flow(ControlFlow::Wait);
            }
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
