mod item;

pub use item::{CatalogItem, ItemId};
