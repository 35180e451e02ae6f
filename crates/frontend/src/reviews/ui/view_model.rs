use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use contracts::booking::MasterOption;
use contracts::reviews::validation::{self, FieldError, ReviewField};
use contracts::reviews::ReviewDraft;

use crate::reviews::api;
use crate::reviews::master_card::{self, CardState, CardSync};
use crate::reviews::rating::RatingState;
use crate::shared::config::{self, FormConfig};

/// ViewModel for the review form and the master card next to it.
#[derive(Clone)]
pub struct ReviewFormViewModel {
    config: SendWrapper<Rc<FormConfig>>,
    card_sync: SendWrapper<Rc<RefCell<CardSync>>>,
    pub masters: Vec<MasterOption>,
    pub master_id: RwSignal<String>,
    pub client_name: RwSignal<String>,
    pub text: RwSignal<String>,
    pub rating: RwSignal<RatingState>,
    pub errors: RwSignal<Vec<FieldError>>,
    pub card: RwSignal<CardState>,
    pub submit_error: RwSignal<Option<String>>,
    pub submitted: RwSignal<bool>,
}

impl ReviewFormViewModel {
    pub fn new() -> Self {
        Self {
            config: SendWrapper::new(Rc::new(FormConfig::from_dom())),
            card_sync: SendWrapper::new(Rc::new(RefCell::new(CardSync::new()))),
            masters: config::master_options(),
            master_id: RwSignal::new(String::new()),
            client_name: RwSignal::new(String::new()),
            text: RwSignal::new(String::new()),
            rating: RwSignal::new(RatingState::new()),
            errors: RwSignal::new(Vec::new()),
            card: RwSignal::new(CardState::Empty),
            submit_error: RwSignal::new(None),
            submitted: RwSignal::new(false),
        }
    }

    /// Loads the card for a pre-selected master (edit forms).
    pub fn init(&self) {
        if let Some(master_id) = config::preselected_master() {
            self.on_master_changed(master_id);
        }
    }

    pub fn on_master_changed(&self, master_id: String) {
        self.master_id.set(master_id.clone());
        master_card::load_master_card(self.card, Rc::clone(&self.card_sync), master_id);
    }

    /// Inline message for `field` from the last submit attempt.
    pub fn error_for(&self, field: ReviewField) -> Option<String> {
        self.errors
            .get()
            .into_iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    fn draft(&self) -> ReviewDraft {
        ReviewDraft {
            master_id: self.master_id.get(),
            client_name: self.client_name.get(),
            text: self.text.get(),
            rating: self.rating.get().value(),
        }
    }

    /// Submit attempt: full re-validation; a failing draft never leaves the
    /// page, a passing one is posted for moderation.
    pub fn submit(&self) {
        self.submit_error.set(None);

        let draft = self.draft();
        let errors = validation::validate(&draft);
        if !errors.is_empty() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(Vec::new());

        let config = Rc::clone(&self.config);
        let client_name = self.client_name;
        let text = self.text;
        let rating = self.rating;
        let submit_error = self.submit_error;
        let submitted = self.submitted;
        wasm_bindgen_futures::spawn_local(async move {
            match api::submit_review(&config, &draft).await {
                Ok(()) => {
                    client_name.set(String::new());
                    text.set(String::new());
                    rating.set(RatingState::new());
                    submitted.set(true);
                }
                Err(e) => {
                    log::error!("Не удалось отправить отзыв: {}", e);
                    submit_error.set(Some(
                        "Не удалось отправить отзыв, попробуйте ещё раз".to_string(),
                    ));
                }
            }
        });
    }
}
