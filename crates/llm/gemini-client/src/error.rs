use thiserror::Error;

/// Failure of one generateContent call.
#[derive(Error, Debug)]
pub enum GeminiError {
    /// Network failure, timeout, or a body that could not be read.
    #[error("{0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    /// Success status but no candidate text in the body.
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),
}

impl GeminiError {
    /// Text delivered to the chat in place of a reply.
    ///
    /// `"Error <status>: <body>"` for a non-success status, `"Error: <message>"` otherwise.
    pub fn to_reply(&self) -> String {
        match self {
            GeminiError::Status { status, body } => format!("Error {}: {}", status, body),
            GeminiError::Request(msg) => format!("Error: {}", msg),
            GeminiError::MalformedResponse(_) => format!("Error: {}", self),
        }
    }
}

impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        GeminiError::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reply_format() {
        let e = GeminiError::Status {
            status: 500,
            body: "oops".to_string(),
        };
        assert_eq!(e.to_reply(), "Error 500: oops");
    }

    #[test]
    fn test_request_reply_format() {
        assert_eq!(
            GeminiError::Request("operation timed out".to_string()).to_reply(),
            "Error: operation timed out"
        );
    }

    #[test]
    fn test_malformed_reply_format() {
        assert_eq!(
            GeminiError::MalformedResponse("no candidates".to_string()).to_reply(),
            "Error: unexpected response shape: no candidates"
        );
    }
}
