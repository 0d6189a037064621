use eframe::egui;

/// Shown in place of the list while the first page loads
pub struct LoadingCard;

impl LoadingCard {
    pub fn show(ui: &mut egui::Ui, size: f32) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.add(egui::Spinner::new().size(size));
            ui.add_space(8.0);
            ui.label("Loading...");
        });
    }
}

/// Shown in place of the list when the last fetch failed. Returns `true` when Retry was clicked.
pub struct ErrorCard;

impl ErrorCard {
    pub fn show(ui: &mut egui::Ui, message: &str) -> bool {
        let mut retry = false;
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.colored_label(egui::Color32::RED, "Something went wrong");
            ui.add_space(4.0);
            ui.small(message);
            ui.add_space(8.0);
            retry = ui.button("Retry").clicked();
        });
        retry
    }
}
