mod home;
mod listing;

pub use home::HomeScreen;
pub use listing::ListingScreen;
