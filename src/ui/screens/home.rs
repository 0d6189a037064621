//! Home screen: a strip of trending games above the full games listing

use crate::loader::FetchState;
use crate::models::Game;
use crate::ui::components::{ErrorCard, ItemCard, LoadingCard};
use crate::ui::driver::LoaderDriver;
use crate::ui::images::ImageLoader;
use crate::ui::screens::ListingScreen;
use eframe::egui;

pub struct HomeScreen;

impl HomeScreen {
    pub fn show(
        ui: &mut egui::Ui,
        trending: &mut LoaderDriver<Game>,
        games: &mut LoaderDriver<Game>,
        images: &mut ImageLoader,
    ) {
        Self::show_trending(ui, trending, images);
        ui.add_space(16.0);
        ListingScreen::show(ui, games, images, "All Games");
    }

    fn show_trending(ui: &mut egui::Ui, driver: &mut LoaderDriver<Game>, images: &mut ImageLoader) {
        let ctx = ui.ctx().clone();
        driver.poll();
        driver.ensure_started(&ctx);

        ui.heading("Trending");
        ui.separator();

        let failure = match driver.loader().state() {
            FetchState::Idle | FetchState::Loading => {
                LoadingCard::show(ui, 16.0);
                return;
            }
            FetchState::Error(e) => Some(e.to_string()),
            _ => None,
        };

        if let Some(message) = failure {
            if ErrorCard::show(ui, &message) {
                driver.retry(&ctx);
            }
            return;
        }

        egui::ScrollArea::horizontal()
            .id_salt("trending_strip")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for game in driver.loader().items() {
                        ui.push_id(&game.slug, |ui| ItemCard::show(ui, images, game));
                    }
                });
            });
    }
}
