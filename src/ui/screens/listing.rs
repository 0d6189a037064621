//! Infinite-scroll card grid shared by every listing screen

use crate::error::ApiError;
use crate::loader::FetchState;
use crate::ui::components::{CardContent, ErrorCard, ItemCard, LoadMoreButton, LoadingCard};
use crate::ui::driver::LoaderDriver;
use crate::ui::images::ImageLoader;
use eframe::egui;
use serde::de::DeserializeOwned;

pub struct ListingScreen;

impl ListingScreen {
    /// Heading, grid of cards and the Load More sentinel for one listing
    pub fn show<T>(
        ui: &mut egui::Ui,
        driver: &mut LoaderDriver<T>,
        images: &mut ImageLoader,
        heading: &str,
    ) where
        T: CardContent + DeserializeOwned + Send + 'static,
    {
        let ctx = ui.ctx().clone();
        driver.poll();
        driver.ensure_started(&ctx);

        ui.heading(heading);
        ui.separator();

        if !Self::show_body(ui, driver, images) {
            return;
        }

        ui.add_space(12.0);
        let button = LoadMoreButton {
            is_fetching: driver.loader().is_fetching(),
            has_more: driver.loader().has_more(),
        };
        let response = button.show(ui);
        if response.clicked {
            driver.fetch_next(&ctx);
        }
        driver.observe_sentinel(response.visible, &ctx);
        ui.add_space(24.0);
    }

    /// Returns `false` when a placeholder replaced the list
    fn show_body<T>(
        ui: &mut egui::Ui,
        driver: &mut LoaderDriver<T>,
        images: &mut ImageLoader,
    ) -> bool
    where
        T: CardContent + DeserializeOwned + Send + 'static,
    {
        let ctx = ui.ctx().clone();
        let failure = match driver.loader().state() {
            FetchState::Idle | FetchState::Loading => {
                LoadingCard::show(ui, 20.0);
                return false;
            }
            FetchState::Error(e) => Some(Self::describe(e)),
            _ => None,
        };

        if let Some(message) = failure {
            if ErrorCard::show(ui, &message) {
                driver.retry(&ctx);
            }
            return false;
        }

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
            for item in driver.loader().items() {
                ui.push_id(item.key(), |ui| ItemCard::show(ui, images, item));
            }
        });
        true
    }

    fn describe(error: &ApiError) -> String {
        match error {
            ApiError::ApiResponse { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}
