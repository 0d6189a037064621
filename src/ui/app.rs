use eframe::{self, egui};
use egui::ViewportBuilder;
use tokio::runtime::Handle;

use super::{
    driver::LoaderDriver,
    images::ImageLoader,
    screens::{HomeScreen, ListingScreen},
    state::Screen,
};
use crate::api::RawgClient;
use crate::cache::ImageCache;
use crate::listing::{Hydration, Listing};
use crate::loader::TriggerMode;
use crate::models::{CatalogEntry, Game};

/// Everything the window needs from `main`
pub struct LaunchOptions {
    pub client: RawgClient,
    pub runtime: Handle,
    pub hydration: Hydration,
    pub trigger_mode: TriggerMode,
}

pub struct CatalogApp {
    current_screen: Screen,
    shown_title: Option<Screen>,
    trending: LoaderDriver<Game>,
    games: LoaderDriver<Game>,
    developers: LoaderDriver<CatalogEntry>,
    tags: LoaderDriver<CatalogEntry>,
    images: ImageLoader,
}

impl CatalogApp {
    pub fn new(options: LaunchOptions) -> Self {
        let LaunchOptions {
            client,
            runtime,
            hydration,
            trigger_mode,
        } = options;

        Self {
            current_screen: Screen::default(),
            shown_title: None,
            trending: LoaderDriver::new(
                Listing::Trending,
                client.clone(),
                runtime.clone(),
                trigger_mode,
                hydration.trending,
            ),
            games: LoaderDriver::new(
                Listing::Games,
                client.clone(),
                runtime.clone(),
                trigger_mode,
                hydration.games,
            ),
            developers: LoaderDriver::new(
                Listing::Developers,
                client.clone(),
                runtime.clone(),
                trigger_mode,
                hydration.developers,
            ),
            tags: LoaderDriver::new(
                Listing::Tags,
                client.clone(),
                runtime.clone(),
                trigger_mode,
                hydration.tags,
            ),
            images: ImageLoader::new(client, ImageCache::new(), runtime),
        }
    }

    fn show_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Gamers Era");
            ui.separator();
            for screen in Screen::ALL {
                ui.selectable_value(&mut self.current_screen, screen, screen.title());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟳ Refresh").clicked() {
                    self.refresh_current();
                }
            });
        });
    }

    fn refresh_current(&mut self) {
        match self.current_screen {
            Screen::Home => {
                self.trending.reset();
                self.games.reset();
            }
            Screen::Developers => self.developers.reset(),
            Screen::Tags => self.tags.reset(),
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.images.poll(ctx);

        if self.shown_title != Some(self.current_screen) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                self.current_screen.window_title(),
            ));
            self.shown_title = Some(self.current_screen);
        }

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_nav(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt(self.current_screen.title())
                .auto_shrink([false, false])
                .show(ui, |ui| match self.current_screen {
                    Screen::Home => {
                        HomeScreen::show(ui, &mut self.trending, &mut self.games, &mut self.images);
                    }
                    Screen::Developers => {
                        ListingScreen::show(ui, &mut self.developers, &mut self.images, "Developers");
                    }
                    Screen::Tags => {
                        ListingScreen::show(ui, &mut self.tags, &mut self.images, "Tags");
                    }
                });
        });
    }
}

pub fn launch_gui(options: LaunchOptions) -> Result<(), eframe::Error> {
    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Gamers Era")
            .with_inner_size([1100.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gamers Era",
        native_options,
        Box::new(|_cc| Ok(Box::new(CatalogApp::new(options)))),
    )
}
