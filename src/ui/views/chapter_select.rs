use crate::app::Event;
use crate::ui::helpers::{big_button, error_label};
use crate::ui::state::ViewState;
use egui::{Align, CentralPanel, Context, ScrollArea};

pub fn ui_chapter_select(view: &ViewState, ctx: &Context, events: &mut Vec<Event>) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 480.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 36.0;

        let estimated_h = 140.0 + 24.0 * view.chapters.len() as f32;
        let vertical_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vertical_space / 2.0);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                        ui.set_width(content_width);
                        ui.heading("Kies de hoofdstukken");
                        ui.add_space(12.0);

                        ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                            for entry in &view.chapters {
                                let mut checked = entry.selected;
                                if ui.checkbox(&mut checked, entry.label()).changed() {
                                    events.push(Event::ChapterToggled {
                                        index: entry.index,
                                        checked,
                                    });
                                }
                            }
                        });

                        ui.add_space(16.0);
                        if big_button(ui, "▶ Start", content_width, button_h, view.start_enabled) {
                            events.push(Event::StartPressed);
                        }

                        if let Some(message) = &view.validation_error {
                            ui.add_space(8.0);
                            error_label(ui, message);
                        }
                    });
                });
        });

        ui.add_space(vertical_space / 2.0);
    });
}
