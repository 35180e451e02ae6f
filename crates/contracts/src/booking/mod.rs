//! Wire types for the order form: masters and the services they offer.

use serde::{Deserialize, Serialize};

pub mod validation;

/// One entry of the master `<select>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterOption {
    pub id: i64,
    pub name: String,
}

/// Услуга мастера, как её отдаёт AJAX-эндпоинт списка услуг.
///
/// The services-lookup response carries only `{id, name}`; `price` shows up
/// in the master-info payload and stays off the wire when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// POST body of the services lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesRequest {
    pub master_id: String,
}

/// Draft of an order as collected by the form, before submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    pub master_id: String,
    /// Ids of the chosen services, as `<option>` values.
    pub services: Vec<String>,
    /// Appointment moment in `YYYY-MM-DDTHH:MM` format.
    pub appointment_date: String,
    pub client_name: String,
    pub phone: String,
}
