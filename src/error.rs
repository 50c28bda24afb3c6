use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] rquest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Unusable upstream response: {0}")]
    UpstreamSchema(String),

    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    #[error("Search for cuisine '{cuisine}' failed: {source}")]
    Cuisine {
        cuisine: String,
        #[source]
        source: Box<Error>,
    },

    #[error("No restaurants found for the given criteria")]
    NoRestaurants,

    #[error("Invalid search criteria: {0}")]
    InvalidCriteria(String),
}

impl Error {
    /// Tags a failure with the cuisine whose fetch produced it, so callers
    /// can report partial success per cuisine.
    pub fn for_cuisine(cuisine: &str, source: Error) -> Self {
        Error::Cuisine {
            cuisine: cuisine.to_string(),
            source: Box::new(source),
        }
    }

    pub fn cuisine(&self) -> Option<&str> {
        match self {
            Error::Cuisine { cuisine, .. } => Some(cuisine),
            _ => None,
        }
    }
}
