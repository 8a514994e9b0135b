use thiserror::Error;

#[derive(Error, Debug)]
pub enum EligibilityError {
    #[error("Please enter a product URL")]
    EmptyInput,

    #[error("No product information returned")]
    EmptyResponse,

    #[error("API error: {status}")]
    Api { status: u16 },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EligibilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status() {
        let err = EligibilityError::Api { status: 502 };
        assert_eq!(err.to_string(), "API error: 502");
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            EligibilityError::EmptyInput.to_string(),
            "Please enter a product URL"
        );
    }
}
