//! Breed list decoding
//!
//! The API returns a flat dictionary of breed name to sub-breed names:
//!
//! ```json
//! {"message": {"akita": [], "hound": ["afghan", "basset"]}, "status": "success"}
//! ```
//!
//! which becomes a sorted two-level tree of sentence-cased [`Breed`]s.

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::breed::{sentence_case, Breed};
use super::sections::{split_into_sections, AlphabeticSection};

/// Wire shape of `/breeds/list/all`
#[derive(Debug, Deserialize)]
struct BreedListResponse {
    message: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    status: String,
}

/// A decoded breed taxonomy snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreedCatalog {
    breeds: Vec<Breed>,
    status: String,
}

impl BreedCatalog {
    /// Decode a `/breeds/list/all` response body
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let response: BreedListResponse = serde_json::from_slice(body)?;
        Ok(Self::from_breed_map(response.message, response.status))
    }

    /// Build the sorted tree from breed name -> sub-breed names
    pub fn from_breed_map<I, S>(map: I, status: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (String, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut breeds: Vec<Breed> = map
            .into_iter()
            .filter(|(name, _)| {
                let keep = !name.is_empty();
                if !keep {
                    debug!("Skipping breed with empty name");
                }
                keep
            })
            .map(|(name, subs)| {
                let name = sentence_case(&name);
                if subs.is_empty() {
                    return Breed::leaf(name);
                }

                let mut sub_breeds: Vec<Breed> = subs
                    .iter()
                    .map(|sub| Breed::sub_breed(sentence_case(sub.as_ref()), name.clone()))
                    .collect();
                sub_breeds.sort_by(|a, b| a.name().cmp(b.name()));
                Breed::group(name, sub_breeds)
            })
            .collect();

        breeds.sort_by(|a, b| a.name().cmp(b.name()));

        Self {
            breeds,
            status: status.into(),
        }
    }

    /// Top-level breeds, sorted by display name
    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    /// Status string reported by the API
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// Number of top-level breeds
    pub fn breed_count(&self) -> usize {
        self.breeds.len()
    }

    /// Number of fetchable nodes (top-level leaves plus sub-breeds)
    pub fn leaf_count(&self) -> usize {
        self.breeds
            .iter()
            .map(|breed| breed.sub_breeds().map_or(1, |subs| subs.len()))
            .sum()
    }

    /// Alphabetic sections of the top-level list
    pub fn sections(&self) -> Vec<AlphabeticSection> {
        split_into_sections(&self.breeds)
    }
}
