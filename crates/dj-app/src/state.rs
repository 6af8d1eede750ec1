use std::sync::Arc;
use std::time::{Duration, Instant};
use egui_wgpu::wgpu;
use egui_wgpu::wgpu::StoreOp;
use log::{info, warn};
use tokio::runtime::Handle;
use uuid::Uuid;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use dj_core::{GenerationClient, GenerationRequest, TextModel};
use crate::error::AppError;
use crate::events::{DjEvent, GenEvent};
use crate::gfx::GfxState;
use crate::ui;
use crate::ui::{UiContext, UiEvent, UiState};

pub struct AppState {
    pub(crate) window: Arc<Window>,
    event_loop_proxy: Arc<EventLoopProxy<DjEvent>>,
    runtime: Handle,
    client: Arc<dyn GenerationClient>,

    pub gfx: GfxState,
    pub ui: UiState,
}

impl AppState {
    pub async fn new(
        window: Arc<Window>,
        event_loop_proxy: Arc<EventLoopProxy<DjEvent>>,
        runtime: Handle,
        client: Arc<dyn GenerationClient>,
        model: TextModel,
    ) -> anyhow::Result<Self> {
        let gfx = GfxState::new(window.clone()).await?;

        let ui_ctx = UiContext::new(model, event_loop_proxy.clone());
        let mut ui_state = UiState::new(&gfx, window.clone(), ui_ctx);

        ui_state.add_component(Box::new(ui::TopPanel::default()));
        ui_state.add_component(Box::new(ui::FormPanel::default()));
        ui_state.add_component(Box::new(ui::NoticeOverlay::default()));

        Ok(Self {
            window,
            event_loop_proxy,
            runtime,
            client,
            gfx,
            ui: ui_state,
        })
    }

    pub fn is_busy(&self) -> bool {
        self.ui.ui_ctx.form.is_loading()
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.gfx.resize(new_size);
        }
    }

    /// Draw one frame. Returns when egui wants the next one, if at all.
    pub fn render(&mut self) -> anyhow::Result<Option<Instant>> {
        let size = self.window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(None);
        }

        let output = match self.gfx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gfx.reconfigure();
                return Ok(Some(Instant::now()));
            }
            Err(e) => return Err(e.into()),
        };
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.gfx.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder")
        });

        let full_output = self.ui.draw(&self.window);

        let platform_output = full_output.platform_output.clone();
        self.ui.egui_state.handle_platform_output(&self.window, platform_output);

        let next_frame = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .and_then(|v| repaint_deadline(Instant::now(), v.repaint_delay));

        let paint_jobs = self.ui.egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_desc = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        for (id, delta) in &full_output.textures_delta.set {
            self.ui.egui_renderer.update_texture(&self.gfx.device, &self.gfx.queue, *id, delta);
        }

        self.ui.egui_renderer.update_buffers(
            &self.gfx.device,
            &self.gfx.queue,
            &mut encoder,
            &paint_jobs,
            &screen_desc,
        );

        {
            let rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r: 0.1, g: 0.1, b: 0.1, a: 1.0 }),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            self.ui.egui_renderer.render(&mut rpass.forget_lifetime(), &paint_jobs, &screen_desc);
        }

        for id in &full_output.textures_delta.free {
            self.ui.egui_renderer.free_texture(id);
        }

        self.gfx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(next_frame)
    }

    pub fn on_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Generate(request) => self.dispatch_generation(request),
        }
    }

    /// Run the call on the tokio runtime; the result comes back as a `GenEvent`.
    fn dispatch_generation(&self, request: GenerationRequest) {
        let id = Uuid::new_v4();
        let client = self.client.clone();
        let proxy = self.event_loop_proxy.clone();

        info!("Generation {} started: {} records", id, request.count());

        self.runtime.spawn(async move {
            let result = client.generate(&request).await;
            match &result {
                Ok(text) => tracing::info!(%id, bytes = text.len(), "Generation settled"),
                Err(e) => tracing::error!(%id, kind = ?e.kind(), "Generation error: {}", e),
            }

            if proxy.send_event(DjEvent::Gen(GenEvent::Settled { id, result })).is_err() {
                tracing::warn!("{}", AppError::EventLoopClosed("generation result"));
            }
        });
    }

    pub fn on_gen_event(&mut self, event: GenEvent) {
        match event {
            GenEvent::Settled { id, result } => {
                if !self.is_busy() {
                    warn!("Generation {} settled after the form left loading; applying anyway", id);
                }
                self.ui.ui_ctx.form.on_generation_settled(result);
            }
        }
    }
}

/// egui reports "no repaint needed" as `Duration::MAX`, which does not fit
/// in an `Instant`.
pub fn repaint_deadline(now: Instant, delay: Duration) -> Option<Instant> {
    now.checked_add(delay)
}
