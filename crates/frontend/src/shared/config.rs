//! Page configuration read from the `#order-form-data` data-carrier.
//!
//! The hosting template serializes everything the scripts need into data
//! attributes of a single container; it is read once at mount and never
//! changes during the page's lifetime.

use contracts::booking::MasterOption;
use web_sys::Element;

/// Id of the data-carrier element rendered by the host page.
pub const DATA_CARRIER_ID: &str = "order-form-data";

/// Fallback lookup URL when the carrier is missing (same as the host route).
const DEFAULT_SERVICES_URL: &str = "/barbershop/masters_services/";

/// Transport parameters of the services lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    pub services_url: String,
    pub csrf_token: String,
}

fn carrier() -> Option<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(DATA_CARRIER_ID))
}

impl FormConfig {
    /// Reads `data-services-url` and `data-csrf-token` from the carrier.
    ///
    /// A missing carrier is logged and degrades to the default URL with an
    /// empty token; the page stays usable.
    pub fn from_dom() -> Self {
        let Some(carrier) = carrier() else {
            log::error!("#{} не найден на странице", DATA_CARRIER_ID);
            return Self {
                services_url: DEFAULT_SERVICES_URL.to_string(),
                csrf_token: String::new(),
            };
        };

        Self {
            services_url: carrier
                .get_attribute("data-services-url")
                .unwrap_or_else(|| DEFAULT_SERVICES_URL.to_string()),
            csrf_token: carrier
                .get_attribute("data-csrf-token")
                .unwrap_or_default(),
        }
    }
}

/// Master list serialized by the host into `data-masters` as a JSON array.
pub fn master_options() -> Vec<MasterOption> {
    let Some(raw) = carrier().and_then(|c| c.get_attribute("data-masters")) else {
        log::warn!("data-masters отсутствует, список мастеров пуст");
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(masters) => masters,
        Err(e) => {
            log::error!("Не удалось разобрать data-masters: {}", e);
            Vec::new()
        }
    }
}

/// Pre-selected master id (edit forms), if the host rendered one.
pub fn preselected_master() -> Option<String> {
    carrier()
        .and_then(|c| c.get_attribute("data-selected-master"))
        .filter(|v| !v.is_empty())
}
