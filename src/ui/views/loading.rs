use crate::ui::helpers::error_label;
use crate::ui::layout::centered_panel;
use crate::ui::state::ViewState;
use crate::view_models::LoadStatus;
use egui::{Button, Context, RichText, Spinner};

/// Shown until the chapters are in. Returns `true` when the user asks to retry.
pub fn ui_loading(view: &ViewState, ctx: &Context) -> bool {
    let mut retry = false;

    centered_panel(ctx, 200.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            match &view.load_status {
                LoadStatus::Failed(reason) => {
                    ui.label(RichText::new("⚠ Hoofdstukken konden niet geladen worden").heading());
                    ui.add_space(10.0);
                    error_label(ui, reason);
                    ui.add_space(16.0);
                    retry = ui
                        .add_sized([200.0, 36.0], Button::new("🔄 Opnieuw proberen"))
                        .clicked();
                }
                _ => {
                    ui.label(RichText::new("Hoofdstukken laden…").heading());
                    ui.add_space(20.0);
                    ui.add(Spinner::new());
                }
            }
        });
    });

    retry
}
