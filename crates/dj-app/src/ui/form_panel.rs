use egui::{Context, RichText, TextEdit, TextStyle};
use crate::ui::{UiComponent, UiContext, UiEvent};

const EXAMPLE_DESCRIPTIONS: [&str; 5] = [
    "id: integer, name: string, email: email, isActive: boolean",
    "id: integer, name: string, rollNum: number",
    "products with sku, title, price in USD, tags: array of strings",
    "blog posts with uuid, title, author object with name and url, publishedAt date",
    "address: object with street and city, phone, createdAt",
];

#[derive(Default)]
pub struct FormPanel {}

impl UiComponent for FormPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &mut UiContext) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("AI-Powered Dummy JSON Generator").size(24.0).strong());
                });
                ui.add_space(12.0);

                let loading = ui_ctx.form.is_loading();

                // === Description ===
                ui.label(
                    RichText::new("Describe the JSON Data You Need (e.g., \"id: integer, name: string, rollNum: number\")")
                        .size(15.0)
                );
                let mut description = ui_ctx.form.description().to_owned();
                let edit = TextEdit::multiline(&mut description)
                    .desired_width(f32::INFINITY)
                    .desired_rows(10)
                    .font(TextStyle::Monospace)
                    .hint_text(
                        "Example: \"id: integer, name: string, email: email, isActive: boolean, \
                         address: object with street and city, tags: array of strings and numbers.\"",
                    );
                if ui.add(edit).changed() {
                    ui_ctx.form.on_description_change(description);
                }

                ui.collapsing("💡 Example Descriptions", |ui| {
                    for example in EXAMPLE_DESCRIPTIONS {
                        if ui.button(example).clicked() {
                            ui_ctx.form.on_description_change(example);
                        }
                    }
                });
                ui.add_space(8.0);

                // === Record count ===
                ui.label(RichText::new("Number of Records (default: 10)").size(15.0));
                let mut count = ui_ctx.form.count_input().to_owned();
                if ui.add(TextEdit::singleline(&mut count).desired_width(120.0)).changed() {
                    ui_ctx.form.on_count_change(count);
                }
                ui.add_space(8.0);

                let label = if loading { "Generating..." } else { "Generate Dummy JSON with AI" };
                let generate_button = ui.add_enabled(
                    !loading,
                    egui::Button::new(RichText::new(label).size(15.0))
                        .min_size(egui::vec2(ui.available_width(), 34.0)),
                );
                if generate_button.clicked() {
                    if let Some(request) = ui_ctx.form.on_generate_clicked() {
                        ui_ctx.send_event(UiEvent::Generate(request));
                    }
                }

                ui.separator();

                // === Output ===
                ui.label(RichText::new("Generated JSON Data").size(15.0));
                let mut output = ui_ctx.form.result();
                ui.add(
                    TextEdit::multiline(&mut output)
                        .desired_width(f32::INFINITY)
                        .desired_rows(10)
                        .font(TextStyle::Monospace),
                );
                let has_result = !output.is_empty();
                ui.add_space(8.0);

                let copy_button = ui.add_enabled(
                    has_result,
                    egui::Button::new(RichText::new("📋 Copy to Clipboard").size(15.0))
                        .min_size(egui::vec2(ui.available_width(), 34.0)),
                );
                if copy_button.clicked() {
                    ui_ctx.form.on_copy_clicked(&mut ui_ctx.clipboard);
                }
            });
        });
    }
}
