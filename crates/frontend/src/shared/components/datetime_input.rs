use crate::shared::date_utils::min_appointment_datetime;
use leptos::prelude::*;

/// Date-and-time input whose minimum is the moment it is rendered, so past
/// appointments cannot be picked.
#[component]
pub fn DateTimeInput(
    /// Value in `YYYY-MM-DDTHH:MM` format
    #[prop(into)]
    value: Signal<String>,
    /// Change handler (receives `YYYY-MM-DDTHH:MM`)
    on_change: impl Fn(String) + 'static,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_class = move || format!("form-control {}", class.get().unwrap_or_default());
    let min = min_appointment_datetime();

    view! {
        <input
            type="datetime-local"
            class=input_class
            id=input_id
            min=min
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
