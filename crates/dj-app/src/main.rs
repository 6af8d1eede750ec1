mod app;
mod clipboard;
mod error;
mod events;
mod form;
mod gfx;
mod state;
mod ui;

use std::sync::Arc;
use winit::event_loop::{ControlFlow, EventLoop};
use dj_core::{GeminiClient, GeminiConfig, GenerationClient};
use crate::events::DjEvent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = GeminiConfig::load()?;
    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail until it is");
    }
    let gemini = GeminiClient::new(config);
    let model = gemini.config().model;
    let client: Arc<dyn GenerationClient> = Arc::new(gemini);

    let event_loop: EventLoop<DjEvent> = EventLoop::with_user_event().build()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = app::App::new(&event_loop, tokio::runtime::Handle::current(), client, model);
    event_loop.run_app(&mut app)?;

    Ok(())
}
