use leptos::prelude::*;
use web_sys::HtmlSelectElement;

use super::view_model::OrderFormViewModel;
use crate::shared::components::DateTimeInput;
use contracts::booking::validation::OrderField;

fn control_class(base: &'static str, invalid: bool) -> String {
    if invalid {
        format!("{} is-invalid", base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn OrderForm() -> impl IntoView {
    let vm = OrderFormViewModel::new();
    vm.init();

    let vm_clone = vm.clone();

    let feedback = |vm: &OrderFormViewModel, field: OrderField| {
        let vm = vm.clone();
        move || {
            vm.error_for(field)
                .map(|message| view! { <div class="invalid-feedback">{message}</div> })
        }
    };

    view! {
        <form
            id="order-form"
            on:submit={
                let vm = vm_clone.clone();
                move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            }
        >
            {
                let vm = vm_clone.clone();
                move || {
                    vm.submitted.get().then(|| view! {
                        <div class="alert alert-success">
                            {"Ваша заявка принята! Мы свяжемся с вами для подтверждения записи."}
                        </div>
                    })
                }
            }
            {
                let vm = vm_clone.clone();
                move || {
                    vm.submit_error.get().map(|message| view! {
                        <div class="alert alert-danger">{message}</div>
                    })
                }
            }

            <div class="mb-3">
                <label class="form-label" for="id_master">{"Мастер"}</label>
                <select
                    id="id_master"
                    class={
                        let vm = vm_clone.clone();
                        move || control_class(
                            "form-select",
                            vm.error_for(OrderField::Master).is_some(),
                        )
                    }
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let master_id = event_target_value(&ev);
                            log::debug!("Изменён мастер: {}", master_id);
                            vm.on_master_changed(master_id);
                        }
                    }
                >
                    <option value="">{"Выберите мастера"}</option>
                    {vm_clone
                        .masters
                        .iter()
                        .map(|m| {
                            let value = m.id.to_string();
                            let selected = {
                                let vm = vm_clone.clone();
                                let value = value.clone();
                                move || vm.master_id.get() == value
                            };
                            view! {
                                <option value=value selected=selected>{m.name.clone()}</option>
                            }
                        })
                        .collect_view()}
                </select>
                {feedback(&vm_clone, OrderField::Master)}
            </div>

            <div class="mb-3">
                <label class="form-label" for="id_services">{"Услуги"}</label>
                <select
                    id="id_services"
                    class={
                        let vm = vm_clone.clone();
                        move || control_class(
                            "form-select",
                            vm.error_for(OrderField::Services).is_some(),
                        )
                    }
                    multiple=true
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.services.get().is_disabled()
                    }
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| {
                            let select: HtmlSelectElement = event_target(&ev);
                            let chosen = select.selected_options();
                            let mut ids = Vec::new();
                            for i in 0..chosen.length() {
                                if let Some(value) =
                                    chosen.item(i).and_then(|o| o.get_attribute("value"))
                                {
                                    ids.push(value);
                                }
                            }
                            vm.selected_services.set(ids);
                        }
                    }
                >
                    {
                        let vm = vm_clone.clone();
                        move || {
                            let state = vm.services.get();
                            if let Some(text) = state.placeholder() {
                                view! {
                                    <option disabled=true selected=true>{text}</option>
                                }
                                .into_any()
                            } else {
                                state
                                    .options()
                                    .iter()
                                    .map(|s| {
                                        view! {
                                            <option value=s.id.to_string()>{s.name.clone()}</option>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }
                    }
                </select>
                {feedback(&vm_clone, OrderField::Services)}
            </div>

            <div class="mb-3">
                <label class="form-label" for="id_appointment_date">{"Дата и время записи"}</label>
                <DateTimeInput
                    id="id_appointment_date"
                    class={
                        let vm = vm_clone.clone();
                        Signal::derive(move || {
                            if vm.error_for(OrderField::AppointmentDate).is_some() {
                                "is-invalid".to_string()
                            } else {
                                String::new()
                            }
                        })
                    }
                    value=vm_clone.appointment
                    on_change={
                        let vm = vm_clone.clone();
                        move |value| vm.appointment.set(value)
                    }
                />
                {feedback(&vm_clone, OrderField::AppointmentDate)}
            </div>

            <div class="mb-3">
                <label class="form-label" for="id_client_name">{"Ваше имя"}</label>
                <input
                    type="text"
                    id="id_client_name"
                    class={
                        let vm = vm_clone.clone();
                        move || control_class(
                            "form-control",
                            vm.error_for(OrderField::ClientName).is_some(),
                        )
                    }
                    placeholder="Введите ваше имя"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.client_name.get()
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.client_name.set(event_target_value(&ev))
                    }
                />
                {feedback(&vm_clone, OrderField::ClientName)}
            </div>

            <div class="mb-3">
                <label class="form-label" for="id_phone">{"Телефон"}</label>
                <input
                    type="tel"
                    id="id_phone"
                    class={
                        let vm = vm_clone.clone();
                        move || control_class(
                            "form-control",
                            vm.error_for(OrderField::Phone).is_some(),
                        )
                    }
                    placeholder="+7 (___) ___-__-__"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.phone.get()
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.phone.set(event_target_value(&ev))
                    }
                />
                {feedback(&vm_clone, OrderField::Phone)}
            </div>

            <button type="submit" class="btn btn-primary">{"Записаться"}</button>
        </form>
    }
}
