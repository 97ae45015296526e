use serde::{Deserialize, Serialize};

/// Body of `POST /checkin`. `name` is optional so `{}` reaches validation
/// instead of failing deserialization.
#[derive(Deserialize, Debug, Default)]
pub struct CheckInRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CheckInResponse {
    pub success: bool,
}

/// API error response.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub error: String,
}
