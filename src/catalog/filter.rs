//! Case-insensitive substring search over sectioned breeds
//!
//! A match on a parent keeps the whole parent. A match on a sub-breed
//! keeps the parent too, but only with the matching sub-breeds, so the
//! hierarchy stays intact.

use super::breed::Breed;
use super::sections::AlphabeticSection;

/// Filter one breed against a lower-case, non-empty term
pub fn matches(breed: &Breed, term: &str) -> Option<Breed> {
    if breed.name().to_lowercase().contains(term) {
        return Some(breed.clone());
    }

    let sub_breeds = breed.sub_breeds()?;
    let matching: Vec<Breed> = sub_breeds
        .iter()
        .filter_map(|sub| matches(sub, term))
        .collect();

    if matching.is_empty() {
        None
    } else {
        Some(breed.with_sub_breeds(matching))
    }
}

/// Filter every section, dropping sections left empty
///
/// The term is trimmed and lower-cased first; a blank term means no
/// filtering and the sections come back unchanged.
pub fn filter_sections(sections: &[AlphabeticSection], term: &str) -> Vec<AlphabeticSection> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return sections.to_vec();
    }

    sections
        .iter()
        .filter_map(|section| {
            let breeds: Vec<Breed> = section
                .breeds()
                .iter()
                .filter_map(|breed| matches(breed, &term))
                .collect();

            if breeds.is_empty() {
                None
            } else {
                Some(AlphabeticSection::new(section.letter(), breeds))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hound() -> Breed {
        Breed::group(
            "Hound",
            vec![
                Breed::sub_breed("Afghan", "Hound"),
                Breed::sub_breed("Basset", "Hound"),
            ],
        )
    }

    fn sample_sections() -> Vec<AlphabeticSection> {
        vec![
            AlphabeticSection::new('A', vec![Breed::leaf("Akita")]),
            AlphabeticSection::new('H', vec![hound()]),
        ]
    }

    #[test]
    fn test_name_match_returns_breed_unchanged() {
        assert_eq!(matches(&hound(), "hou"), Some(hound()));
        assert_eq!(matches(&hound(), "ound"), Some(hound()));
    }

    #[test]
    fn test_sub_breed_match_keeps_parent() {
        let filtered = matches(&hound(), "bas").unwrap();
        assert_eq!(
            filtered,
            Breed::group("Hound", vec![Breed::sub_breed("Basset", "Hound")])
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(matches(&hound(), "xyz"), None);
        assert_eq!(matches(&Breed::leaf("Akita"), "hound"), None);
    }

    #[test]
    fn test_filter_drops_empty_sections() {
        let filtered = filter_sections(&sample_sections(), "bas");
        assert_eq!(
            filtered,
            vec![AlphabeticSection::new(
                'H',
                vec![Breed::group(
                    "Hound",
                    vec![Breed::sub_breed("Basset", "Hound")]
                )]
            )]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filtered = filter_sections(&sample_sections(), "AKI");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].letter(), 'A');
    }

    #[test]
    fn test_blank_term_means_no_filtering() {
        assert_eq!(filter_sections(&sample_sections(), ""), sample_sections());
        assert_eq!(filter_sections(&sample_sections(), "   "), sample_sections());
    }

    #[test]
    fn test_filter_is_idempotent() {
        for term in ["a", "bas", "hound", "af", "zzz"] {
            let once = filter_sections(&sample_sections(), term);
            let twice = filter_sections(&once, term);
            assert_eq!(once, twice, "term {term:?}");
        }
    }

    #[test]
    fn test_common_substring_keeps_order() {
        // "a" hits Akita by name, Hound only through its sub-breeds
        let filtered = filter_sections(&sample_sections(), "a");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].breeds()[0].name(), "Akita");
        assert_eq!(filtered[1].breeds()[0], hound());
    }
}
