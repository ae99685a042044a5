// src/ui/helpers.rs
use egui::{Button, RichText, Ui, Vec2};

/// Full-width button. `highlighted` only changes the fill; it stays clickable
/// so a press can still be answered with a validation message.
pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, highlighted: bool) -> bool {
    let mut button = Button::new(label).min_size(Vec2::new(width, height));
    if highlighted {
        button = button.fill(ui.visuals().selection.bg_fill);
    }
    ui.add(button).clicked()
}

pub fn error_label(ui: &mut Ui, message: &str) {
    let color = ui.visuals().error_fg_color;
    ui.label(RichText::new(message).color(color));
}
