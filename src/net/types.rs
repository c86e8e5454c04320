#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

/// A server-tracked action item waiting on user-supplied field values.
///
/// Wire names follow the API schema: the identifier field is `activity_id`
/// (not `id`), and `required_fields` may be absent on inconsistent records.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PendingInput {
    pub activity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<Vec<String>>,
}

/// Response body of `GET /api/inputs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InputsResponse {
    #[serde(default)]
    pub inputs: Vec<PendingInput>,
}

/// Request body of `POST /api/inputs`.
///
/// `input_data` maps field names to whatever the controls currently hold,
/// empty strings included.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResolveRequest {
    pub activity_id: String,
    pub input_data: BTreeMap<String, String>,
}

/// Request body of `POST /api/waitlist`. `website_url` is the honeypot and
/// is expected to stay empty for human submissions.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WaitlistRequest {
    pub email: String,
    pub website_url: String,
}

/// Optional JSON error body returned with non-2xx waitlist responses.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
