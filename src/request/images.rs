//! `GET /breed/{breed}[/{sub_breed}]/images/random/{count}`

use serde::Deserialize;
use url::Url;

use super::ApiRequest;
use crate::error::ApiError;
use crate::images::DogImage;

/// Random sample images for a breed or sub-breed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListImages {
    breed: String,
    sub_breed: Option<String>,
    count: u32,
}

/// Wire shape of the image list response
#[derive(Debug, Deserialize)]
struct ImageListResponse {
    message: Vec<String>,
}

impl ListImages {
    /// Path segments are lower-cased; the API is case-sensitive
    pub fn new(breed: &str, sub_breed: Option<&str>, count: u32) -> Self {
        Self {
            breed: breed.to_lowercase(),
            sub_breed: sub_breed.map(str::to_lowercase),
            count,
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn sub_breed(&self) -> Option<&str> {
        self.sub_breed.as_deref()
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl ApiRequest for ListImages {
    type Response = Vec<DogImage>;

    fn path(&self) -> String {
        match &self.sub_breed {
            Some(sub_breed) => format!(
                "/breed/{}/{}/images/random/{}",
                self.breed, sub_breed, self.count
            ),
            None => format!("/breed/{}/images/random/{}", self.breed, self.count),
        }
    }

    // Breed names go in as single percent-encoded segments, so a `/` or `?`
    // in a name cannot change the path or add a query.
    fn build_url(&self, base_url: &str) -> Result<Url, ApiError> {
        let invalid = |source| ApiError::InvalidUrl {
            url: base_url.to_string(),
            source,
        };
        let mut url = Url::parse(base_url).map_err(invalid)?;
        let count = self.count.to_string();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            segments.pop_if_empty().push("breed").push(&self.breed);
            if let Some(sub_breed) = &self.sub_breed {
                segments.push(sub_breed);
            }
            segments.extend(["images", "random", count.as_str()]);
        }
        Ok(url)
    }

    fn decode(&self, body: &[u8]) -> Result<Vec<DogImage>, serde_json::Error> {
        let response: ImageListResponse = serde_json::from_slice(body)?;
        Ok(DogImage::from_urls(response.message))
    }
}
