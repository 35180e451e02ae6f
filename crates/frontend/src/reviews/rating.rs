//! Звёздный рейтинг: пять кликабельных звёзд и скрытое поле со значением.

use leptos::prelude::*;

pub const MAX_RATING: u8 = 5;

/// Committed rating plus an uncommitted hover preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingState {
    committed: u8,
    hover: Option<u8>,
}

impl RatingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed value, 0 while nothing has been chosen.
    pub fn value(&self) -> u8 {
        self.committed
    }

    /// A click on star `star` commits the rating.
    pub fn set(&mut self, star: u8) {
        self.committed = star.min(MAX_RATING);
    }

    /// Hovering star `star` previews that value without committing it.
    pub fn hover(&mut self, star: u8) {
        self.hover = Some(star.min(MAX_RATING));
    }

    /// Leaving the stars restores the committed rendering.
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Whether star `star` currently renders filled.
    pub fn is_filled(&self, star: u8) -> bool {
        star >= 1 && star <= self.hover.unwrap_or(self.committed)
    }
}

#[component]
pub fn RatingStars(rating: RwSignal<RatingState>) -> impl IntoView {
    view! {
        <div class="rating-stars">
            {(1..=MAX_RATING)
                .map(|star| {
                    view! {
                        <i
                            class=move || {
                                if rating.get().is_filled(star) {
                                    "bi bi-star-fill"
                                } else {
                                    "bi bi-star"
                                }
                            }
                            data-rating=star.to_string()
                            on:click=move |_| rating.update(|r| r.set(star))
                            on:mouseover=move |_| rating.update(|r| r.hover(star))
                            on:mouseout=move |_| rating.update(|r| r.clear_hover())
                        ></i>
                    }
                })
                .collect_view()}
            <input
                type="hidden"
                id="id_rating"
                prop:value=move || rating.get().value().to_string()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = RatingState::new();
        assert_eq!(state.value(), 0);
        assert!((1..=MAX_RATING).all(|star| !state.is_filled(star)));
    }

    #[test]
    fn click_fills_up_to_chosen_star() {
        let mut state = RatingState::new();
        state.set(3);
        assert_eq!(state.value(), 3);
        assert!(state.is_filled(1));
        assert!(state.is_filled(3));
        assert!(!state.is_filled(4));
    }

    #[test]
    fn hover_previews_without_committing() {
        let mut state = RatingState::new();
        state.set(2);
        state.hover(5);
        assert!(state.is_filled(5));
        assert_eq!(state.value(), 2);
    }

    #[test]
    fn leaving_restores_committed_value() {
        let mut state = RatingState::new();
        state.set(2);
        state.hover(5);
        state.clear_hover();
        assert!(state.is_filled(2));
        assert!(!state.is_filled(3));
    }

    #[test]
    fn hover_out_with_no_committed_value_empties_all_stars() {
        let mut state = RatingState::new();
        state.hover(4);
        state.clear_hover();
        assert!((1..=MAX_RATING).all(|star| !state.is_filled(star)));
    }

    #[test]
    fn values_are_clamped_to_five() {
        let mut state = RatingState::new();
        state.set(9);
        assert_eq!(state.value(), MAX_RATING);
    }
}
