//! Sample images returned for a breed

use serde::Serialize;
use tracing::debug;
use url::Url;
use uuid::Uuid;

/// One image URL with an opaque id for list diffing in the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DogImage {
    id: Uuid,
    url: Url,
}

impl DogImage {
    pub fn new(url: Url) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Parse a list of URL strings, skipping any that are malformed
    ///
    /// One bad entry never fails the whole list.
    pub fn from_urls<I, S>(urls: I) -> Vec<DogImage>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        urls.into_iter()
            .filter_map(|raw| match Url::parse(raw.as_ref()) {
                Ok(url) => Some(DogImage::new(url)),
                Err(e) => {
                    debug!("Dropping malformed image URL '{}': {}", raw.as_ref(), e);
                    None
                }
            })
            .collect()
    }
}
