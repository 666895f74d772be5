//! Breed catalog model
//!
//! Pure transformations over the breed taxonomy:
//!
//! ```text
//! {"hound": ["afghan", ...], ...}     <- /breeds/list/all
//!        │  BreedCatalog::from_json
//!        ▼
//! [Akita, Hound[Afghan, Basset]]      <- sorted, sentence-cased tree
//!        │  split_into_sections
//!        ▼
//! A: [Akita]   H: [Hound]             <- alphabetic sections
//!        │  filter_sections(term)
//!        ▼
//! H: [Hound[Basset]]                  <- recomputed per search term
//! ```
//!
//! Every step returns a new snapshot; nothing is mutated in place.

mod breed;
mod decode;
mod filter;
mod sections;

pub use breed::{sentence_case, Breed};
pub use decode::BreedCatalog;
pub use filter::{filter_sections, matches};
pub use sections::{split_into_sections, AlphabeticSection, UNKNOWN_LETTER};
