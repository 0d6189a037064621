use crate::models::{CatalogEntry, Game, Keyed};
use crate::ui::images::ImageLoader;
use eframe::egui;

pub const CARD_WIDTH: f32 = 240.0;
const IMAGE_HEIGHT: f32 = 135.0;

/// Text shown on a listing card
pub trait CardContent: Keyed {
    fn title(&self) -> &str;
    fn subtitle(&self) -> String;
}

impl CardContent for Game {
    fn title(&self) -> &str {
        &self.name
    }

    fn subtitle(&self) -> String {
        let mut parts = Vec::new();
        if let Some(released) = &self.released {
            parts.push(released.clone());
        }
        if self.rating > 0.0 {
            parts.push(format!("★ {:.1}", self.rating));
        }
        if let Some(score) = self.metacritic {
            parts.push(format!("Metacritic {}", score));
        }
        let genres = self.genre_names();
        if !genres.is_empty() {
            parts.push(genres);
        }
        parts.join(" · ")
    }
}

impl CardContent for CatalogEntry {
    fn title(&self) -> &str {
        &self.name
    }

    fn subtitle(&self) -> String {
        match self.games_count {
            1 => "1 game".to_string(),
            n => format!("{} games", n),
        }
    }
}

pub struct ItemCard;

impl ItemCard {
    pub fn show<T: CardContent>(ui: &mut egui::Ui, images: &mut ImageLoader, item: &T) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                let size = egui::vec2(CARD_WIDTH, IMAGE_HEIGHT);
                let texture = item.image_url().and_then(|url| images.texture(ui.ctx(), url));
                match texture {
                    Some(texture) => {
                        ui.add(egui::Image::new(texture).fit_to_exact_size(size));
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                        ui.painter()
                            .rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
                    }
                }
                ui.add_space(4.0);
                ui.strong(item.title());
                ui.small(item.subtitle());
            });
        });
    }
}
