//! `GET /breeds/list/all`

use super::ApiRequest;
use crate::catalog::BreedCatalog;

/// The full breed taxonomy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListBreeds;

impl ApiRequest for ListBreeds {
    type Response = BreedCatalog;

    fn path(&self) -> String {
        "/breeds/list/all".to_string()
    }

    fn decode(&self, body: &[u8]) -> Result<BreedCatalog, serde_json::Error> {
        BreedCatalog::from_json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_url() {
        let prepared = ListBreeds.prepare(&ClientConfig::default()).unwrap();
        assert_eq!(prepared.url.as_str(), "https://dog.ceo/api/breeds/list/all");
        assert_eq!(prepared.header("isREST"), Some("true"));
    }

    #[test]
    fn test_decode() {
        let body = br#"{"message": {"akita": [], "hound": ["afghan"]}, "status": "success"}"#;
        let catalog = ListBreeds.decode(body).unwrap();
        assert_eq!(catalog.breeds().len(), 2);
        assert_eq!(catalog.status(), "success");
    }
}
