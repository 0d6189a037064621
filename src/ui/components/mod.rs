mod card;
mod load_more;
mod placeholders;

pub use card::{CardContent, ItemCard};
pub use load_more::{load_more_label, LoadMoreButton};
pub use placeholders::{ErrorCard, LoadingCard};
