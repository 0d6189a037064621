mod app;
mod components;
mod driver;
mod images;
mod screens;
mod state;

pub use app::{launch_gui, CatalogApp, LaunchOptions};
pub use components::load_more_label;
pub use driver::LoaderDriver;
pub use images::ImageLoader;
pub use state::Screen;
