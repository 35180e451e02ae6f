use contracts::reviews::{MasterInfo, MasterInfoResponse, ReviewDraft};
use gloo_net::http::Request;

use crate::shared::config::FormConfig;

const MASTER_INFO_URL: &str = "/barbershop/api/master-info/";
const REVIEW_CREATE_URL: &str = "/barbershop/review/create/";

/// Why a master-info load failed. The card shows a server-sent message as
/// is, while transport failures degrade to a generic localized text.
#[derive(Debug, Clone, PartialEq)]
pub enum MasterInfoError {
    /// Network failure, non-2xx status or an unreadable body.
    Transport(String),
    /// The endpoint answered `success: false` with its own message.
    Server(String),
}

/// Fetch a master's profile for the info card.
///
/// The endpoint only answers programmatic requests, hence the
/// `X-Requested-With` header.
pub async fn fetch_master_info(master_id: &str) -> Result<MasterInfo, MasterInfoError> {
    let url = format!(
        "{}?master_id={}",
        MASTER_INFO_URL,
        urlencoding::encode(master_id)
    );

    let response = Request::get(&url)
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await
        .map_err(|e| MasterInfoError::Transport(format!("Request failed: {}", e)))?;

    if !response.ok() {
        return Err(MasterInfoError::Transport(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    let data: MasterInfoResponse = response
        .json()
        .await
        .map_err(|e| MasterInfoError::Transport(format!("Failed to parse response: {}", e)))?;

    if !data.success {
        return Err(MasterInfoError::Server(
            data.error
                .unwrap_or_else(|| "Неизвестная ошибка".to_string()),
        ));
    }

    data.master
        .ok_or_else(|| MasterInfoError::Transport("Empty master payload".to_string()))
}

/// Submit a validated review draft.
pub async fn submit_review(config: &FormConfig, draft: &ReviewDraft) -> Result<(), String> {
    let response = Request::post(REVIEW_CREATE_URL)
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
