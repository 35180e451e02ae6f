use contracts::booking::{OrderDraft, ServiceOption, ServicesRequest};
use gloo_net::http::Request;

use crate::shared::config::FormConfig;

const ORDER_CREATE_URL: &str = "/barbershop/order_create/";

/// Fetch the services offered by a master.
///
/// POST with a JSON body and the CSRF token the host page issued; any
/// non-2xx status is an error.
pub async fn fetch_master_services(
    config: &FormConfig,
    master_id: &str,
) -> Result<Vec<ServiceOption>, String> {
    let body = ServicesRequest {
        master_id: master_id.to_string(),
    };

    let response = Request::post(&config.services_url)
        .header("X-CSRFToken", &config.csrf_token)
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<ServiceOption>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Submit a validated order draft.
pub async fn submit_order(config: &FormConfig, draft: &OrderDraft) -> Result<(), String> {
    let response = Request::post(ORDER_CREATE_URL)
        .header("X-CSRFToken", &config.csrf_token)
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
