use crate::app::{Event, Key};
use crate::answer::CORRECT_MESSAGE;
use crate::ui::state::ViewState;
use egui::{Align, Button, CentralPanel, Color32, Context, RichText, ScrollArea, TextEdit};

pub fn ui_learning(view: &mut ViewState, ctx: &Context, events: &mut Vec<Event>) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 150.0 + 36.0 + 48.0 + 24.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 2.0);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);
            ui.label(RichText::new(view.progress.label()).weak());
            ui.add_space(10.0);

            // prompt in a fixed-height scroll area
            ui.allocate_ui_with_layout(
                egui::vec2(panel_width, 150.0),
                egui::Layout::top_down(Align::Center),
                |ui| {
                    ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                        ui.label(RichText::new(&view.prompt).heading());
                    });
                },
            );

            ui.add_space(5.0);
            let response = ui.add(
                TextEdit::singleline(&mut view.answer_input)
                    .desired_width(panel_width)
                    .hint_text("Antwoord, Enter om te controleren"),
            );

            if view.focus_answer {
                response.request_focus();
                view.focus_answer = false;
            }

            // singleline loses focus on Enter
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                events.push(Event::KeyPressed(Key::Enter));
                view.focus_answer = true;
            }

            ui.add_space(8.0);
            if let Some(message) = &view.correctness {
                let color = if message == CORRECT_MESSAGE {
                    Color32::from_rgb(60, 170, 90)
                } else {
                    ui.visuals().error_fg_color
                };
                ui.label(RichText::new(message).color(color).strong());
            }

            ui.add_space(16.0);
            if ui.add_sized([panel_width / 2.0, 36.0], Button::new("⬅ Terug naar hoofdstukken")).clicked() {
                events.push(Event::BackPressed);
            }
        });

        ui.add_space(extra_space);
    });
}
