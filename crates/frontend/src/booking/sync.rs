//! Синхронизация списка услуг с выбранным мастером.
//!
//! The services `<select>` must always show the result of the *latest*
//! master selection. A user can change masters faster than lookups resolve,
//! so every lookup carries a ticket; a response is applied only while its
//! ticket is still the newest one issued. Late responses are discarded by
//! comparison, never by cancelling the request.

use contracts::booking::ServiceOption;

/// Placeholder while no master is selected.
pub const NO_MASTER_PLACEHOLDER: &str = "Сначала выберите мастера";
/// Placeholder while a lookup is in flight.
pub const LOADING_PLACEHOLDER: &str = "Загрузка услуг...";
/// Placeholder for a master with an empty service list.
pub const NO_SERVICES_PLACEHOLDER: &str = "У этого мастера нет услуг";

/// What the services control shows. Only `Loaded` enables it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ServicesState {
    #[default]
    NoMaster,
    Loading,
    Loaded(Vec<ServiceOption>),
    NoServices,
    Failed,
}

impl ServicesState {
    pub fn is_disabled(&self) -> bool {
        !matches!(self, Self::Loaded(_))
    }

    /// Single disabled option to show instead of services, when any.
    /// `Failed` deliberately has none: the control stays empty and disabled.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::NoMaster => Some(NO_MASTER_PLACEHOLDER),
            Self::Loading => Some(LOADING_PLACEHOLDER),
            Self::NoServices => Some(NO_SERVICES_PLACEHOLDER),
            Self::Loaded(_) | Self::Failed => None,
        }
    }

    pub fn options(&self) -> &[ServiceOption] {
        match self {
            Self::Loaded(services) => services,
            _ => &[],
        }
    }
}

/// Identifies one in-flight services lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTicket {
    master_id: String,
    generation: u64,
}

impl LookupTicket {
    pub fn master_id(&self) -> &str {
        &self.master_id
    }
}

/// Sequences master-change lookups for the services control.
#[derive(Debug, Default)]
pub struct ServiceSync {
    generation: u64,
}

impl ServiceSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a master selection. Returns the state the control must show
    /// immediately, plus a ticket when a network lookup is required.
    ///
    /// An empty id needs no lookup but still advances the generation, so an
    /// in-flight response for a previous master cannot land afterwards.
    pub fn select(&mut self, master_id: &str) -> (ServicesState, Option<LookupTicket>) {
        self.generation += 1;

        if master_id.trim().is_empty() {
            return (ServicesState::NoMaster, None);
        }

        let ticket = LookupTicket {
            master_id: master_id.to_string(),
            generation: self.generation,
        };
        (ServicesState::Loading, Some(ticket))
    }

    /// Applies a resolved lookup. A stale ticket (superseded by a newer
    /// `select`) yields `None` and the response must be dropped.
    pub fn resolve(
        &self,
        ticket: &LookupTicket,
        result: Result<Vec<ServiceOption>, String>,
    ) -> Option<ServicesState> {
        if ticket.generation != self.generation {
            log::debug!(
                "Отбрасываем устаревший ответ для мастера id={}",
                ticket.master_id
            );
            return None;
        }

        Some(match result {
            Ok(services) if services.is_empty() => ServicesState::NoServices,
            Ok(services) => ServicesState::Loaded(services),
            Err(e) => {
                log::error!("Ошибка при получении услуг: {}", e);
                ServicesState::Failed
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: i64, name: &str) -> ServiceOption {
        ServiceOption {
            id,
            name: name.to_string(),
            price: None,
        }
    }

    #[test]
    fn empty_selection_disables_without_lookup() {
        let mut sync = ServiceSync::new();
        let (state, ticket) = sync.select("");
        assert!(ticket.is_none());
        assert_eq!(state, ServicesState::NoMaster);
        assert!(state.is_disabled());
        assert_eq!(state.placeholder(), Some(NO_MASTER_PLACEHOLDER));
        assert!(state.options().is_empty());
    }

    #[test]
    fn loaded_services_keep_server_order() {
        let mut sync = ServiceSync::new();
        let (_, ticket) = sync.select("1");
        let ticket = ticket.unwrap();
        assert_eq!(ticket.master_id(), "1");

        let state = sync
            .resolve(
                &ticket,
                Ok(vec![service(1, "Haircut"), service(2, "Shave")]),
            )
            .unwrap();

        assert!(!state.is_disabled());
        let options = state.options();
        assert_eq!(options.len(), 2);
        assert_eq!((options[0].id, options[0].name.as_str()), (1, "Haircut"));
        assert_eq!((options[1].id, options[1].name.as_str()), (2, "Shave"));
    }

    #[test]
    fn empty_result_shows_no_services_placeholder() {
        let mut sync = ServiceSync::new();
        let (_, ticket) = sync.select("7");
        let state = sync.resolve(&ticket.unwrap(), Ok(vec![])).unwrap();
        assert_eq!(state, ServicesState::NoServices);
        assert!(state.is_disabled());
        assert_eq!(state.placeholder(), Some(NO_SERVICES_PLACEHOLDER));
    }

    #[test]
    fn failed_lookup_leaves_control_empty_and_disabled() {
        let mut sync = ServiceSync::new();
        let (_, ticket) = sync.select("7");
        let state = sync
            .resolve(&ticket.unwrap(), Err("HTTP error: 500".to_string()))
            .unwrap();
        assert_eq!(state, ServicesState::Failed);
        assert!(state.is_disabled());
        assert!(state.placeholder().is_none());
        assert!(state.options().is_empty());
    }

    #[test]
    fn late_response_for_superseded_master_is_dropped() {
        let mut sync = ServiceSync::new();
        let (_, ticket_a) = sync.select("1");
        let ticket_a = ticket_a.unwrap();
        let (_, ticket_b) = sync.select("2");
        let ticket_b = ticket_b.unwrap();

        // B's response lands first and wins
        let state = sync
            .resolve(&ticket_b, Ok(vec![service(20, "Укладка")]))
            .unwrap();
        assert_eq!(state.options()[0].id, 20);

        // A's slow response arrives afterwards and must be ignored
        assert!(sync
            .resolve(&ticket_a, Ok(vec![service(10, "Стрижка")]))
            .is_none());
    }

    #[test]
    fn clearing_selection_supersedes_in_flight_lookup() {
        let mut sync = ServiceSync::new();
        let (_, ticket) = sync.select("1");
        let ticket = ticket.unwrap();

        let (state, none) = sync.select("");
        assert!(none.is_none());
        assert_eq!(state, ServicesState::NoMaster);

        // the lookup issued before the reset resolves late
        assert!(sync.resolve(&ticket, Ok(vec![service(1, "x")])).is_none());
    }

    #[test]
    fn reselecting_same_master_honours_only_newest_ticket() {
        let mut sync = ServiceSync::new();
        let (_, first) = sync.select("5");
        let first = first.unwrap();
        let (_, second) = sync.select("5");
        let second = second.unwrap();

        assert!(sync.resolve(&first, Ok(vec![service(1, "a")])).is_none());
        let state = sync.resolve(&second, Ok(vec![service(1, "a")])).unwrap();
        assert_eq!(state.options().len(), 1);
    }
}
