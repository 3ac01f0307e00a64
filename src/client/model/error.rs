#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    /// Error raised in the browser before any request is made.
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            status: 400,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
