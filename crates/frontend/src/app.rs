use crate::booking::ui::OrderForm;
use crate::reviews::ui::ReviewForm;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Order,
    Reviews,
}

#[component]
pub fn App() -> impl IntoView {
    let page = RwSignal::new(Page::Order);

    let tab_class = move |tab: Page| {
        if page.get() == tab {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <div class="container mt-4">
            <ul class="nav nav-tabs mb-4">
                <li class="nav-item">
                    <a
                        href="#"
                        class=move || tab_class(Page::Order)
                        on:click=move |ev| {
                            ev.prevent_default();
                            page.set(Page::Order);
                        }
                    >
                        {"Запись на услугу"}
                    </a>
                </li>
                <li class="nav-item">
                    <a
                        href="#"
                        class=move || tab_class(Page::Reviews)
                        on:click=move |ev| {
                            ev.prevent_default();
                            page.set(Page::Reviews);
                        }
                    >
                        {"Оставить отзыв"}
                    </a>
                </li>
            </ul>
            {move || match page.get() {
                Page::Order => view! { <OrderForm /> }.into_any(),
                Page::Reviews => view! { <ReviewForm /> }.into_any(),
            }}
        </div>
    }
}
