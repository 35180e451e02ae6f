use leptos::prelude::*;

use super::view_model::ReviewFormViewModel;
use crate::reviews::master_card::MasterInfoCard;
use crate::reviews::rating::RatingStars;
use contracts::reviews::validation::ReviewField;

fn control_class(base: &'static str, invalid: bool) -> String {
    if invalid {
        format!("{} is-invalid", base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn ReviewForm() -> impl IntoView {
    let vm = ReviewFormViewModel::new();
    vm.init();

    let vm_clone = vm.clone();

    let feedback = |vm: &ReviewFormViewModel, field: ReviewField| {
        let vm = vm.clone();
        move || {
            vm.error_for(field)
                .map(|message| view! { <div class="invalid-feedback">{message}</div> })
        }
    };

    view! {
        <form
            id="review-form"
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
                            {"Ваш отзыв успешно добавлен! Он будет опубликован после проверки модератором."}
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
                            vm.error_for(ReviewField::Master).is_some(),
                        )
                    }
                    on:change={
                        let vm = vm_clone.clone();
                        move |ev| vm.on_master_changed(event_target_value(&ev))
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
                {feedback(&vm_clone, ReviewField::Master)}
                <MasterInfoCard state=vm_clone.card />
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
                            vm.error_for(ReviewField::ClientName).is_some(),
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
                {feedback(&vm_clone, ReviewField::ClientName)}
            </div>

            <div class="mb-3">
                <label class="form-label" for="id_text">{"Текст отзыва"}</label>
                <textarea
                    id="id_text"
                    rows="4"
                    class={
                        let vm = vm_clone.clone();
                        move || control_class(
                            "form-control",
                            vm.error_for(ReviewField::Text).is_some(),
                        )
                    }
                    placeholder="Расскажите о вашем визите"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.text.get()
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.text.set(event_target_value(&ev))
                    }
                ></textarea>
                {feedback(&vm_clone, ReviewField::Text)}
            </div>

            <div class="mb-3">
                <label class="form-label">{"Оценка"}</label>
                <RatingStars rating=vm_clone.rating />
                {
                    let vm = vm_clone.clone();
                    move || {
                        vm.error_for(ReviewField::Rating).map(|message| view! {
                            <div class="text-danger mt-2 rating-error">{message}</div>
                        })
                    }
                }
            </div>

            <button type="submit" class="btn btn-primary">{"Отправить отзыв"}</button>
        </form>
    }
}
