mod defaults;
mod manager;
mod persistence;

pub use defaults::default_catalog;
pub use manager::{FoodCatalog, BROWSE_LIMIT, SEARCH_LIMIT};
pub use persistence::load_catalog;
