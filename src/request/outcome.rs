use crate::error::ApiError;

/// Tri-state result of a request
///
/// `Empty` is a successful exchange whose body had zero length; it is
/// distinct from a failure and from a decoded value.
#[derive(Debug)]
pub enum Outcome<R> {
    Empty,
    Success(R),
    Failure(ApiError),
}

impl<R> Outcome<R> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Decoded value, if any
    pub fn success(self) -> Option<R> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Outcome::Failure(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> Outcome<T> {
        match self {
            Outcome::Empty => Outcome::Empty,
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Collapse into a `Result`, with `Empty` as `Ok(None)`
    pub fn into_result(self) -> Result<Option<R>, ApiError> {
        match self {
            Outcome::Empty => Ok(None),
            Outcome::Success(value) => Ok(Some(value)),
            Outcome::Failure(err) => Err(err),
        }
    }
}

impl<R> From<ApiError> for Outcome<R> {
    fn from(err: ApiError) -> Self {
        Outcome::Failure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_state() {
        let empty: Outcome<u32> = Outcome::Empty;
        assert!(empty.is_empty() && !empty.is_success() && !empty.is_failure());

        let ok = Outcome::Success(3);
        assert!(ok.is_success() && ok.error().is_none());

        let failed: Outcome<u32> = ApiError::NoDataReturned.into();
        assert!(failed.is_failure());
        assert!(failed.success().is_none());
    }

    #[test]
    fn test_map_and_into_result() {
        let doubled = Outcome::Success(21).map(|v| v * 2);
        assert_eq!(doubled.into_result().unwrap(), Some(42));

        let empty: Outcome<u32> = Outcome::Empty;
        assert_eq!(empty.map(|v| v + 1).into_result().unwrap(), None);

        let failed: Outcome<u32> = Outcome::Failure(ApiError::HttpStatus(500));
        assert_eq!(failed.into_result().unwrap_err().status_code(), Some(500));
    }
}
