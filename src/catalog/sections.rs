//! Alphabetic sectioning of a sorted breed list

use serde::Serialize;

use super::breed::Breed;

/// Letter used for a breed whose name is empty
pub const UNKNOWN_LETTER: char = '#';

/// Consecutive breeds sharing a first letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphabeticSection {
    letter: char,
    breeds: Vec<Breed>,
}

impl AlphabeticSection {
    pub fn new(letter: char, breeds: Vec<Breed>) -> Self {
        Self { letter, breeds }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

/// Group an already-sorted list into one section per run of equal first letters
///
/// Sections come out in encounter order, so a sorted input gives
/// alphabetical sections. An empty input gives no sections.
pub fn split_into_sections(breeds: &[Breed]) -> Vec<AlphabeticSection> {
    let mut sections = Vec::new();
    let mut current: Option<(char, Vec<Breed>)> = None;

    for breed in breeds {
        let letter = breed.first_letter().unwrap_or(UNKNOWN_LETTER);
        if let Some((run_letter, run)) = current.as_mut() {
            if *run_letter == letter {
                run.push(breed.clone());
                continue;
            }
        }

        if let Some((run_letter, run)) = current.take() {
            sections.push(AlphabeticSection::new(run_letter, run));
        }
        current = Some((letter, vec![breed.clone()]));
    }

    if let Some((run_letter, run)) = current {
        sections.push(AlphabeticSection::new(run_letter, run));
    }

    sections
}
