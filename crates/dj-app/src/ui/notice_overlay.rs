use egui::{Color32, Context, Id, RichText};
use crate::form::{FormState, NoticeKind};
use crate::ui::{UiComponent, UiContext};

/// Modal message box for the current notice, and the loading overlay.
#[derive(Default)]
pub struct NoticeOverlay {}

impl UiComponent for NoticeOverlay {
    fn show(&mut self, ctx: &Context, ui_ctx: &mut UiContext) {
        if let FormState::Loading { since } = ui_ctx.form.state() {
            let elapsed = since.elapsed().as_secs();
            egui::Modal::new(Id::new("loading_overlay")).show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Generating data with AI...").size(16.0));
                    ui.label(RichText::new(format!("{elapsed}s")).small().color(Color32::GRAY));
                });
            });
            return;
        }

        let Some(notice) = ui_ctx.form.notice() else {
            return;
        };

        let color = match notice.kind {
            NoticeKind::Info => Color32::LIGHT_BLUE,
            NoticeKind::Success => Color32::from_rgb(100, 255, 100),
            NoticeKind::Error => Color32::from_rgb(255, 100, 100),
        };
        let text = notice.text.clone();
        let kind = ui_ctx.form.last_error().map(|e| format!("{:?} error", e.kind()));

        let modal = egui::Modal::new(Id::new("notice")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(text).size(16.0).color(color));
                if let Some(kind) = kind {
                    ui.label(RichText::new(kind).small().color(Color32::GRAY));
                }
                ui.add_space(10.0);
                ui.button("OK").clicked()
            })
            .inner
        });

        if modal.inner || modal.should_close() {
            ui_ctx.form.on_dismiss_notice();
        }
    }
}
