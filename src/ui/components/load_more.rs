use eframe::egui;

/// Label for the button below a listing
pub fn load_more_label(is_fetching: bool, has_more: bool) -> &'static str {
    if is_fetching {
        "Loading more..."
    } else if has_more {
        "Load More"
    } else {
        "Nothing more to load"
    }
}

/// "Load More" button that also serves as the infinite-scroll sentinel
pub struct LoadMoreButton {
    pub is_fetching: bool,
    pub has_more: bool,
}

/// What happened to the button this frame
pub struct LoadMoreResponse {
    pub clicked: bool,
    /// Whether the button is inside the visible part of the scroll area
    pub visible: bool,
}

impl LoadMoreButton {
    pub fn show(&self, ui: &mut egui::Ui) -> LoadMoreResponse {
        let enabled = self.has_more && !self.is_fetching;
        let label = load_more_label(self.is_fetching, self.has_more);

        let response = ui
            .vertical_centered(|ui| ui.add_enabled(enabled, egui::Button::new(label)))
            .inner;

        LoadMoreResponse {
            clicked: response.clicked(),
            visible: ui.is_rect_visible(response.rect),
        }
    }
}
