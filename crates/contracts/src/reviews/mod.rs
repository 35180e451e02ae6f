//! Wire types and validation for the review form and the master-info card.

use serde::{Deserialize, Serialize};

pub mod validation;

/// Envelope of the master-info AJAX endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterInfoResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<MasterInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Профиль мастера для карточки на странице отзывов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterInfo {
    pub id: i64,
    pub name: String,
    /// Years of experience.
    pub experience: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub services: Vec<PricedService>,
}

/// Service line of the master card, price in rubles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedService {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Draft of a review as collected by the form, before submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub master_id: String,
    pub client_name: String,
    pub text: String,
    pub rating: u8,
}
