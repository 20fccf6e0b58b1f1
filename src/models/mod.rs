pub mod media;

pub use media::{
    poster_url, CatalogItem, Industry, MediaKind, Mood, PickResult, QueryFilters, TitleCard,
};
