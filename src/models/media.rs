use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which side of the catalog a request targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

/// User-facing mood labels
///
/// The serde names are the exact strings shown in the UI dropdown; the
/// concrete genre/runtime directives each mood maps to live in
/// `services::filters`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mood {
    #[serde(rename = "Anything")]
    Anything,
    #[serde(rename = "Cozy")]
    Cozy,
    #[serde(rename = "Feel-Good")]
    FeelGood,
    #[serde(rename = "Adrenaline")]
    Adrenaline,
    #[serde(rename = "Spooky")]
    Spooky,
    #[serde(rename = "Brainy")]
    Brainy,
    #[serde(rename = "Silly")]
    Silly,
    #[serde(rename = "Rom-Com")]
    RomCom,
    #[serde(rename = "Family Night")]
    FamilyNight,
    #[serde(rename = "Short & Sweet (≤100 min)")]
    ShortAndSweet,
}

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Anything,
        Mood::Cozy,
        Mood::FeelGood,
        Mood::Adrenaline,
        Mood::Spooky,
        Mood::Brainy,
        Mood::Silly,
        Mood::RomCom,
        Mood::FamilyNight,
        Mood::ShortAndSweet,
    ];
}

/// Production-industry labels, mapped to origin-country filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Industry {
    #[serde(rename = "Any")]
    Any,
    #[serde(rename = "Hollywood")]
    Hollywood,
    #[serde(rename = "Bollywood")]
    Bollywood,
    #[serde(rename = "Nollywood")]
    Nollywood,
    #[serde(rename = "Korean")]
    Korean,
    #[serde(rename = "Japanese")]
    Japanese,
    #[serde(rename = "French")]
    French,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::Any,
        Industry::Hollywood,
        Industry::Bollywood,
        Industry::Nollywood,
        Industry::Korean,
        Industry::Japanese,
        Industry::French,
    ];
}

/// Resolved discover-endpoint filter directives
///
/// Backed by an ordered map so a resolved filter set iterates (and logs)
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilters(BTreeMap<&'static str, String>);

impl QueryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, directive: &'static str, value: impl Into<String>) {
        self.0.insert(directive, value.into());
    }

    pub fn remove(&mut self, directive: &str) {
        self.0.remove(directive);
    }

    pub fn get(&self, directive: &str) -> Option<&str> {
        self.0.get(directive).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Borrowed (name, value) pairs, suitable for `reqwest` query encoding
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }
}

/// One result record from the catalog's discover endpoint
///
/// Movies carry `title`/`release_date`, series carry `name`/`first_air_date`;
/// everything except `id` is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Display-ready projection of a catalog item
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleCard {
    pub title: String,
    pub year: String,
    pub rating: Option<f32>,
    pub overview: String,
}

impl CatalogItem {
    /// Builds the display card, applying the per-kind field-preference and
    /// fallback rules.
    ///
    /// Title prefers the kind-appropriate field, then the alternate field,
    /// then a literal placeholder. The year fragment is the leading 4
    /// characters of the kind-appropriate date, or empty when the date is
    /// absent or too short.
    pub fn describe(&self, kind: MediaKind) -> TitleCard {
        let (primary_title, fallback_title, date) = match kind {
            MediaKind::Movie => (&self.title, &self.name, &self.release_date),
            MediaKind::Series => (&self.name, &self.title, &self.first_air_date),
        };

        let title = primary_title
            .as_deref()
            .or(fallback_title.as_deref())
            .unwrap_or("Unknown Title")
            .to_string();

        let year = date
            .as_deref()
            .and_then(|d| d.get(0..4))
            .unwrap_or("")
            .to_string();

        let overview = self
            .overview
            .as_deref()
            .unwrap_or("No description available.")
            .to_string();

        TitleCard {
            title,
            year,
            rating: self.vote_average,
            overview,
        }
    }
}

/// Full poster URL for a catalog item, or `None` when it has no poster
pub fn poster_url(image_base: &str, size: &str, path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{}/{}{}", image_base, size, p))
}

/// Primary pick plus its alternates
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PickResult {
    pub primary: CatalogItem,
    pub alternates: Vec<CatalogItem>,
}
