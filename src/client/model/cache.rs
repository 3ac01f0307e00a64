use crate::client::model::error::ApiError;

/// State of a value fetched from the API.
#[derive(Clone, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_fetched(&self) -> bool {
        !matches!(self, Cache::NotFetched)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Map the inner data to another value, returning None if not fetched successfully
    pub fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.data().map(f)
    }
}

impl<T> From<Result<T, ApiError>> for Cache<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(error) => Cache::Error(error),
        }
    }
}
