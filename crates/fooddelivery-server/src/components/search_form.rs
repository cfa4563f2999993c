// File: src/components/search_form.rs
// Purpose: PLZ search form markup

use maud::{html, Markup};
use plz_forms::{PlzField, ValidationFailure, PLZ_MAX_LENGTH, PLZ_MIN_LENGTH};

/// What the form shows: the field as it is now, and the failure of the
/// last submit if there was one
#[derive(Debug, Clone, Copy)]
pub struct SearchFormView<'a> {
    pub field: &'a PlzField,
    pub error: Option<ValidationFailure>,
}

impl<'a> SearchFormView<'a> {
    pub fn new(field: &'a PlzField) -> Self {
        Self { field, error: None }
    }

    pub fn with_error(mut self, error: Option<ValidationFailure>) -> Self {
        self.error = error;
        self
    }
}

pub fn search_form(view: SearchFormView<'_>) -> Markup {
    html! {
        form class="search-restaurant" method="post" action="/search" novalidate {
            label for="plz" { "PLZ" }
            input
                id="plz"
                name="plz"
                type="text"
                inputmode="numeric"
                autocomplete="postal-code"
                required
                minlength=(PLZ_MIN_LENGTH)
                maxlength=(PLZ_MAX_LENGTH)
                value=(view.field.value())
                aria-invalid=[view.error.map(|_| "true")];
            @if let Some(error) = view.error {
                p class="error" role="alert" data-rule=(error.rule().key()) { (error.message()) }
            }
            button type="submit" { "Search" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plz_forms::{rules::TOO_LONG_MESSAGE, PlzRule};

    #[test]
    fn test_pristine_form_has_no_error() {
        let field = PlzField::new();
        let html = search_form(SearchFormView::new(&field)).into_string();

        assert!(html.contains(r#"name="plz""#));
        assert!(html.contains(r#"maxlength="23""#));
        assert!(html.contains(r#"value="""#));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_error_is_rendered_inline() {
        let field = PlzField::new();
        let view = SearchFormView::new(&field)
            .with_error(Some(ValidationFailure::new(PlzRule::TooLong)));
        let html = search_form(view).into_string();

        assert!(html.contains(r#"data-rule="max_length""#));
        assert!(html.contains(TOO_LONG_MESSAGE));
        assert!(html.contains(r#"aria-invalid="true""#));
    }

    #[test]
    fn test_value_is_escaped() {
        let field = PlzField::with_value("\"><script>");
        let html = search_form(SearchFormView::new(&field)).into_string();
        assert!(!html.contains("<script>"));
    }
}
