//! Breed tree nodes

use serde::Serialize;

use crate::request::ListImages;

/// A node of the two-level breed tree
///
/// Three shapes exist:
/// - top-level leaf: no parent, no sub-breeds
/// - group: no parent, non-empty sub-breeds (not fetchable on its own)
/// - sub-breed: has a parent, never has sub-breeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    name: String,
    parent_name: Option<String>,
    sub_breeds: Option<Vec<Breed>>,
}

impl Breed {
    /// Top-level breed without sub-breeds
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_name: None,
            sub_breeds: None,
        }
    }

    /// Sub-breed of `parent`
    pub fn sub_breed(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_name: Some(parent.into()),
            sub_breeds: None,
        }
    }

    /// Top-level breed grouping `sub_breeds`
    pub fn group(name: impl Into<String>, sub_breeds: Vec<Breed>) -> Self {
        Self {
            name: name.into(),
            parent_name: None,
            sub_breeds: Some(sub_breeds),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    pub fn sub_breeds(&self) -> Option<&[Breed]> {
        self.sub_breeds.as_deref()
    }

    pub fn is_group(&self) -> bool {
        self.sub_breeds.as_ref().is_some_and(|subs| !subs.is_empty())
    }

    pub fn is_sub_breed(&self) -> bool {
        self.parent_name.is_some()
    }

    pub fn first_letter(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// Same node with its sub-breeds replaced
    pub(crate) fn with_sub_breeds(&self, sub_breeds: Vec<Breed>) -> Self {
        Self {
            name: self.name.clone(),
            parent_name: self.parent_name.clone(),
            sub_breeds: Some(sub_breeds),
        }
    }

    /// Title for a detail screen, e.g. "Afghan Hound" for a sub-breed
    pub fn display_name(&self) -> String {
        match &self.parent_name {
            Some(parent) => format!("{} {}", self.name, parent),
            None => self.name.clone(),
        }
    }

    /// Image request for this node, `None` for group nodes
    pub fn image_request(&self, count: u32) -> Option<ListImages> {
        if self.is_group() {
            return None;
        }
        let request = match &self.parent_name {
            Some(parent) => ListImages::new(parent, Some(self.name.as_str()), count),
            None => ListImages::new(&self.name, None, count),
        };
        Some(request)
    }
}

/// First character upper-cased, the rest lower-cased
pub fn sentence_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_case() {
        assert_eq!(sentence_case("akita"), "Akita");
        assert_eq!(sentence_case("GERMAN"), "German");
        assert_eq!(sentence_case("sT. bernard"), "St. bernard");
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn test_shapes() {
        let akita = Breed::leaf("Akita");
        assert!(!akita.is_group() && !akita.is_sub_breed());

        let afghan = Breed::sub_breed("Afghan", "Hound");
        assert!(afghan.is_sub_breed());
        assert!(afghan.sub_breeds().is_none());

        let hound = Breed::group("Hound", vec![afghan]);
        assert!(hound.is_group());
        assert_eq!(hound.parent_name(), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Breed::leaf("Akita").display_name(), "Akita");
        assert_eq!(
            Breed::sub_breed("Afghan", "Hound").display_name(),
            "Afghan Hound"
        );
    }

    #[test]
    fn test_image_request() {
        let request = Breed::sub_breed("Afghan", "Hound").image_request(10).unwrap();
        assert_eq!(request.breed(), "hound");
        assert_eq!(request.sub_breed(), Some("afghan"));

        let request = Breed::leaf("Akita").image_request(4).unwrap();
        assert_eq!(request.breed(), "akita");
        assert_eq!(request.sub_breed(), None);

        let group = Breed::group("Hound", vec![Breed::sub_breed("Afghan", "Hound")]);
        assert!(group.image_request(10).is_none());
    }
}
