//! Per-screen snapshot state
//!
//! A screen owns one of these and feeds it outcomes from its own
//! completion handlers. Each successful load replaces the snapshot
//! wholesale; the visible sections are recomputed from the full snapshot
//! whenever the search term changes.

use tracing::{debug, warn};

use crate::catalog::{filter_sections, AlphabeticSection, Breed, BreedCatalog};
use crate::error::ApiError;
use crate::images::DogImage;
use crate::request::{ListImages, Outcome};

/// Number of images a detail screen asks for
pub const DEFAULT_IMAGE_COUNT: u32 = 10;

/// State behind a searchable breed list
#[derive(Debug, Default)]
pub struct BreedBrowser {
    sections: Vec<AlphabeticSection>,
    visible: Vec<AlphabeticSection>,
    search_term: String,
    error: Option<ApiError>,
}

impl BreedBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of a breed list request
    ///
    /// A failure keeps the previous snapshot on screen and records the error.
    pub fn load(&mut self, outcome: Outcome<BreedCatalog>) {
        match outcome {
            Outcome::Success(catalog) => {
                debug!("Loaded {} breeds", catalog.breed_count());
                self.sections = catalog.sections();
                self.error = None;
            }
            Outcome::Empty => {
                self.sections = Vec::new();
                self.error = None;
            }
            Outcome::Failure(err) => {
                warn!("Breed list request failed: {}", err);
                self.error = Some(err);
            }
        }
        self.refilter();
    }

    pub fn set_search_term(&mut self, term: &str) {
        if self.search_term == term {
            return;
        }
        self.search_term = term.to_string();
        self.refilter();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Sections after filtering by the current term
    pub fn visible_sections(&self) -> &[AlphabeticSection] {
        &self.visible
    }

    /// Unfiltered sections of the last successful load
    pub fn all_sections(&self) -> &[AlphabeticSection] {
        &self.sections
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Hand the pending error to the UI for display, clearing it
    pub fn take_error(&mut self) -> Option<ApiError> {
        self.error.take()
    }

    fn refilter(&mut self) {
        self.visible = filter_sections(&self.sections, &self.search_term);
    }
}

/// State behind an image grid for one breed or sub-breed
#[derive(Debug)]
pub struct ImageGallery {
    breed: Breed,
    images: Vec<DogImage>,
    error: Option<ApiError>,
}

impl ImageGallery {
    pub fn new(breed: Breed) -> Self {
        Self {
            breed,
            images: Vec::new(),
            error: None,
        }
    }

    pub fn breed(&self) -> &Breed {
        &self.breed
    }

    pub fn title(&self) -> String {
        self.breed.display_name()
    }

    /// Request for this gallery's images; `None` for group nodes
    pub fn request(&self, count: u32) -> Option<ListImages> {
        self.breed.image_request(count)
    }

    pub fn load(&mut self, outcome: Outcome<Vec<DogImage>>) {
        match outcome {
            Outcome::Success(images) => {
                self.images = images;
                self.error = None;
            }
            Outcome::Empty => {
                self.images = Vec::new();
                self.error = None;
            }
            Outcome::Failure(err) => {
                warn!("Image request for {} failed: {}", self.breed.name(), err);
                self.error = Some(err);
            }
        }
    }

    pub fn images(&self) -> &[DogImage] {
        &self.images
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<ApiError> {
        self.error.take()
    }
}
