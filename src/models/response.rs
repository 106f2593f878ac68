use serde::{Deserialize, Serialize};

/// JSON body for every error response: a single `error` string, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
