use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use contracts::booking::validation::{self, FieldError, OrderField};
use contracts::booking::{MasterOption, OrderDraft};

use crate::booking::api;
use crate::booking::sync::{ServiceSync, ServicesState};
use crate::shared::config::{self, FormConfig};

/// ViewModel for the order form: master select, dependent services select,
/// appointment moment and contact fields.
#[derive(Clone)]
pub struct OrderFormViewModel {
    config: SendWrapper<Rc<FormConfig>>,
    sync: SendWrapper<Rc<RefCell<ServiceSync>>>,
    pub masters: Vec<MasterOption>,
    pub master_id: RwSignal<String>,
    pub services: RwSignal<ServicesState>,
    pub selected_services: RwSignal<Vec<String>>,
    pub client_name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub appointment: RwSignal<String>,
    pub errors: RwSignal<Vec<FieldError>>,
    pub submit_error: RwSignal<Option<String>>,
    pub submitted: RwSignal<bool>,
}

impl OrderFormViewModel {
    pub fn new() -> Self {
        Self {
            config: SendWrapper::new(Rc::new(FormConfig::from_dom())),
            sync: SendWrapper::new(Rc::new(RefCell::new(ServiceSync::new()))),
            masters: config::master_options(),
            master_id: RwSignal::new(String::new()),
            services: RwSignal::new(ServicesState::NoMaster),
            selected_services: RwSignal::new(Vec::new()),
            client_name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            appointment: RwSignal::new(String::new()),
            errors: RwSignal::new(Vec::new()),
            submit_error: RwSignal::new(None),
            submitted: RwSignal::new(false),
        }
    }

    /// Runs the master-change handler once with the control's initial value,
    /// so pre-filled edit forms load their services right away.
    pub fn init(&self) {
        let initial = config::preselected_master().unwrap_or_default();
        self.on_master_changed(initial);
    }

    /// Master changed. Updates the services control immediately and, when a
    /// master is selected, spawns the lookup; its response is applied only
    /// if no newer selection has superseded it by then.
    pub fn on_master_changed(&self, master_id: String) {
        self.master_id.set(master_id.clone());
        self.selected_services.set(Vec::new());

        let (state, ticket) = self.sync.borrow_mut().select(&master_id);
        self.services.set(state);

        let Some(ticket) = ticket else {
            return;
        };

        let config = Rc::clone(&self.config);
        let sync = Rc::clone(&self.sync);
        let services = self.services;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_master_services(&config, ticket.master_id()).await;
            if let Some(state) = sync.borrow().resolve(&ticket, result) {
                services.set(state);
            }
        });
    }

    /// Inline message for `field` from the last submit attempt.
    pub fn error_for(&self, field: OrderField) -> Option<String> {
        self.errors
            .get()
            .into_iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    fn draft(&self) -> OrderDraft {
        OrderDraft {
            master_id: self.master_id.get(),
            services: self.selected_services.get(),
            appointment_date: self.appointment.get(),
            client_name: self.client_name.get(),
            phone: self.phone.get(),
        }
    }

    /// Submit attempt: full re-validation; a failing draft never leaves the
    /// page, a passing one is posted to the order endpoint.
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
        let phone = self.phone;
        let appointment = self.appointment;
        let submit_error = self.submit_error;
        let submitted = self.submitted;
        wasm_bindgen_futures::spawn_local(async move {
            match api::submit_order(&config, &draft).await {
                Ok(()) => {
                    client_name.set(String::new());
                    phone.set(String::new());
                    appointment.set(String::new());
                    submitted.set(true);
                }
                Err(e) => {
                    log::error!("Не удалось создать заказ: {}", e);
                    submit_error.set(Some(
                        "Не удалось отправить заявку, попробуйте ещё раз".to_string(),
                    ));
                }
            }
        });
    }
}
