//! Карточка мастера на странице отзывов.
//!
//! Loads run through the same ticket/generation sequencing as the services
//! lookup: a response is applied only while its ticket is still the newest
//! one, so a slow load for a superseded master never overwrites the card.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::reviews::MasterInfo;
use leptos::prelude::*;

use crate::reviews::api::{self, MasterInfoError};

/// Generic message for transport failures; server-sent messages are shown
/// verbatim instead.
pub const LOAD_ERROR_MESSAGE: &str = "Ошибка загрузки данных о мастере";

/// What the card area shows. Each load fully replaces the previous content.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CardState {
    #[default]
    Empty,
    Loading,
    Loaded(MasterInfo),
    Failed(String),
}

/// Identifies one in-flight master-info load.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTicket {
    master_id: String,
    generation: u64,
}

impl CardTicket {
    pub fn master_id(&self) -> &str {
        &self.master_id
    }
}

/// Sequences master-info loads for the card.
#[derive(Debug, Default)]
pub struct CardSync {
    generation: u64,
}

impl CardSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a master selection. Clearing the selection empties the card
    /// without a lookup, but still advances the generation so an in-flight
    /// load cannot land afterwards.
    pub fn select(&mut self, master_id: &str) -> (CardState, Option<CardTicket>) {
        self.generation += 1;

        if master_id.trim().is_empty() {
            return (CardState::Empty, None);
        }

        let ticket = CardTicket {
            master_id: master_id.to_string(),
            generation: self.generation,
        };
        (CardState::Loading, Some(ticket))
    }

    /// Applies a resolved load. A stale ticket yields `None` and the
    /// response must be dropped.
    pub fn resolve(
        &self,
        ticket: &CardTicket,
        result: Result<MasterInfo, MasterInfoError>,
    ) -> Option<CardState> {
        if ticket.generation != self.generation {
            log::debug!(
                "Отбрасываем устаревшую карточку мастера id={}",
                ticket.master_id
            );
            return None;
        }

        Some(match result {
            Ok(info) => CardState::Loaded(info),
            Err(MasterInfoError::Server(message)) => CardState::Failed(message),
            Err(MasterInfoError::Transport(e)) => {
                log::error!("{}: {}", LOAD_ERROR_MESSAGE, e);
                CardState::Failed(LOAD_ERROR_MESSAGE.to_string())
            }
        })
    }
}

/// Drives a card load for `master_id` through the sequencer.
pub fn load_master_card(state: RwSignal<CardState>, sync: Rc<RefCell<CardSync>>, master_id: String) {
    let (immediate, ticket) = sync.borrow_mut().select(&master_id);
    state.set(immediate);

    let Some(ticket) = ticket else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = api::fetch_master_info(ticket.master_id()).await;
        if let Some(new_state) = sync.borrow().resolve(&ticket, result) {
            state.set(new_state);
        }
    });
}

#[component]
pub fn MasterInfoCard(state: RwSignal<CardState>) -> impl IntoView {
    view! {
        <div id="master-info">
            {move || match state.get() {
                CardState::Empty | CardState::Loading => ().into_any(),
                CardState::Failed(message) => {
                    view! { <div class="alert alert-danger">{message}</div> }.into_any()
                }
                CardState::Loaded(master) => {
                    view! {
                        <div class="card mt-3">
                            {master
                                .photo
                                .as_ref()
                                .map(|photo| {
                                    view! {
                                        <img
                                            src=photo.clone()
                                            class="card-img-top"
                                            alt=master.name.clone()
                                        />
                                    }
                                })}
                            <div class="card-body">
                                <h5 class="card-title">{master.name.clone()}</h5>
                                <p class="card-text">
                                    {format!("Опыт работы: {} лет", master.experience)}
                                </p>
                                {(!master.services.is_empty())
                                    .then(|| {
                                        view! {
                                            <h6 class="card-subtitle mb-2 mt-3">
                                                {"Предоставляемые услуги:"}
                                            </h6>
                                            <ul class="list-group list-group-flush">
                                                {master
                                                    .services
                                                    .iter()
                                                    .map(|service| {
                                                        view! {
                                                            <li class="list-group-item d-flex justify-content-between align-items-center">
                                                                {service.name.clone()}
                                                                <span class="badge bg-primary rounded-pill">
                                                                    {format!("{} руб.", service.price)}
                                                                </span>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        }
                                    })}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master(id: i64, name: &str) -> MasterInfo {
        MasterInfo {
            id,
            name: name.to_string(),
            experience: 5,
            photo: None,
            services: Vec::new(),
        }
    }

    #[test]
    fn empty_selection_clears_card_without_lookup() {
        let mut sync = CardSync::new();
        let (state, ticket) = sync.select("  ");
        assert_eq!(state, CardState::Empty);
        assert!(ticket.is_none());
    }

    #[test]
    fn successful_load_replaces_card_content() {
        let mut sync = CardSync::new();
        let (state, ticket) = sync.select("3");
        assert_eq!(state, CardState::Loading);
        let ticket = ticket.unwrap();
        assert_eq!(ticket.master_id(), "3");

        let state = sync.resolve(&ticket, Ok(master(3, "Иван"))).unwrap();
        assert_eq!(state, CardState::Loaded(master(3, "Иван")));
    }

    #[test]
    fn late_load_for_superseded_master_is_dropped() {
        let mut sync = CardSync::new();
        let (_, ticket_a) = sync.select("1");
        let ticket_a = ticket_a.unwrap();
        let (_, ticket_b) = sync.select("2");
        let ticket_b = ticket_b.unwrap();

        let state = sync.resolve(&ticket_b, Ok(master(2, "Пётр"))).unwrap();
        assert_eq!(state, CardState::Loaded(master(2, "Пётр")));

        // A's slow load arrives afterwards and must be ignored
        assert!(sync.resolve(&ticket_a, Ok(master(1, "Иван"))).is_none());
    }

    #[test]
    fn clearing_selection_supersedes_in_flight_load() {
        let mut sync = CardSync::new();
        let (_, ticket) = sync.select("1");
        let ticket = ticket.unwrap();

        let (state, none) = sync.select("");
        assert_eq!(state, CardState::Empty);
        assert!(none.is_none());

        assert!(sync.resolve(&ticket, Ok(master(1, "Иван"))).is_none());
    }

    #[test]
    fn transport_failure_shows_generic_localized_message() {
        let mut sync = CardSync::new();
        let (_, ticket) = sync.select("1");
        let state = sync
            .resolve(
                &ticket.unwrap(),
                Err(MasterInfoError::Transport(
                    "Request failed: network".to_string(),
                )),
            )
            .unwrap();
        assert_eq!(state, CardState::Failed(LOAD_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn server_error_message_is_shown_verbatim() {
        let mut sync = CardSync::new();
        let (_, ticket) = sync.select("99");
        let state = sync
            .resolve(
                &ticket.unwrap(),
                Err(MasterInfoError::Server("Мастер не найден".to_string())),
            )
            .unwrap();
        assert_eq!(state, CardState::Failed("Мастер не найден".to_string()));
    }
}
