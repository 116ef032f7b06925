//! Trial request body.

use serde::{Deserialize, Serialize};

/// Body of a request for a trial license key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrialLicenseKeyRequest {
    pub email: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub number_of_employees: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
}
