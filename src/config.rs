use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// `TMDB_API_KEY` is the one required value; a missing credential is a
/// startup failure, never a per-request error.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API credential
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_base")]
    pub tmdb_api_base: String,

    /// TMDB image host base URL
    #[serde(default = "default_tmdb_image_base")]
    pub tmdb_image_base: String,

    /// Locale passed to the discover endpoint
    #[serde(default = "default_language")]
    pub language: String,

    /// How many alternates to return alongside the primary pick
    #[serde(default = "default_alternate_count")]
    pub alternate_count: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_base() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_alternate_count() -> usize {
    3
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
