use egui::{Color32, Context, RichText};
use crate::ui::{UiComponent, UiContext};

#[derive(Default)]
pub struct TopPanel {}

impl UiComponent for TopPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &mut UiContext) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🧪 Dummy JSON");
                ui.separator();
                ui.label(RichText::new(ui_ctx.model.name()).color(Color32::LIGHT_BLUE));
                ui.separator();

                let (status, color) = if ui_ctx.form.is_loading() {
                    ("Generating...", Color32::YELLOW)
                } else {
                    ("Ready", Color32::GREEN)
                };
                ui.label(RichText::new("Status:").color(Color32::LIGHT_BLUE));
                ui.label(RichText::new(status).color(color));
            });
        });
    }
}
