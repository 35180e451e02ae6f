//! Client-side validation of the review form.
//!
//! Pure and synchronous: the form runs the full rule set on every submit
//! attempt and renders one inline message per failing field.

use super::ReviewDraft;

/// Минимальная длина текста отзыва (в символах, после trim).
pub const MIN_TEXT_LENGTH: usize = 10;

/// Fields of the review form that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    ClientName,
    Text,
    Rating,
    Master,
}

/// One failing field with its user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: ReviewField,
    pub message: String,
}

impl FieldError {
    fn new(field: ReviewField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validates the whole draft and returns every failing field, at most one
/// error per field, in the order the form renders them.
pub fn validate(draft: &ReviewDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.client_name.trim().is_empty() {
        errors.push(FieldError::new(
            ReviewField::ClientName,
            "Пожалуйста, укажите ваше имя",
        ));
    }

    let text = draft.text.trim();
    if text.is_empty() {
        errors.push(FieldError::new(
            ReviewField::Text,
            "Пожалуйста, напишите текст отзыва",
        ));
    } else if text.chars().count() < MIN_TEXT_LENGTH {
        errors.push(FieldError::new(
            ReviewField::Text,
            "Текст отзыва должен содержать не менее 10 символов",
        ));
    }

    if draft.rating < 1 {
        errors.push(FieldError::new(
            ReviewField::Rating,
            "Пожалуйста, выберите оценку",
        ));
    }

    if draft.master_id.trim().is_empty() {
        errors.push(FieldError::new(
            ReviewField::Master,
            "Пожалуйста, выберите мастера",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ReviewDraft {
        ReviewDraft {
            master_id: "3".to_string(),
            client_name: "Анна".to_string(),
            text: "Отличная стрижка, приду ещё".to_string(),
            rating: 5,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_form_reports_all_four_fields() {
        let errors = validate(&ReviewDraft::default());
        assert_eq!(errors.len(), 4);
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                ReviewField::ClientName,
                ReviewField::Text,
                ReviewField::Rating,
                ReviewField::Master,
            ]
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut draft = valid_draft();
        draft.client_name = "   ".to_string();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ReviewField::ClientName);
        assert_eq!(errors[0].message, "Пожалуйста, укажите ваше имя");
    }

    #[test]
    fn empty_and_short_text_get_distinct_messages() {
        let mut draft = valid_draft();
        draft.text = "  ".to_string();
        assert_eq!(
            validate(&draft)[0].message,
            "Пожалуйста, напишите текст отзыва"
        );

        draft.text = "коротко".to_string();
        assert_eq!(
            validate(&draft)[0].message,
            "Текст отзыва должен содержать не менее 10 символов"
        );
    }

    #[test]
    fn text_length_counts_characters_after_trim() {
        let mut draft = valid_draft();
        // ровно 10 кириллических символов, плюс пробелы по краям
        draft.text = "  прекрасная  ".to_string();
        assert!(validate(&draft).is_empty());

        draft.text = "безупречн".to_string(); // 9 символов
        assert_eq!(validate(&draft).len(), 1);
    }

    #[test]
    fn zero_rating_is_rejected() {
        let mut draft = valid_draft();
        draft.rating = 0;
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ReviewField::Rating);
    }

    #[test]
    fn missing_master_is_rejected() {
        let mut draft = valid_draft();
        draft.master_id = String::new();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, ReviewField::Master);
    }
}
