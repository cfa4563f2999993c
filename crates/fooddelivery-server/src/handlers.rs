// File: src/handlers.rs
// Purpose: Page and API handlers

use axum::{
    extract::{Form, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use maud::html;
use plz_forms::{validate_plz, PlzField, SearchSubmission, SubmitOutcome, ValidationFailure};
use restaurant_store::Restaurant;
use serde::Deserialize;

use crate::app::AppState;
use crate::components::{
    restaurant_list, search_form, shell, RestaurantListView, SearchFormView,
};
use crate::response::ErrorResponse;

/// Body of the search form
#[derive(Debug, Deserialize)]
pub struct SearchInput {
    #[serde(default)]
    pub plz: String,
}

/// Query of the lookup API
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub plz: String,
}

fn search_page(
    state: &AppState,
    field: &PlzField,
    error: Option<ValidationFailure>,
    listing: &RestaurantListView,
) -> Html<String> {
    let content = html! {
        (search_form(SearchFormView::new(field).with_error(error)))
        (restaurant_list(listing))
    };
    Html(shell(&state.app_name, "/", content).into_string())
}

/// GET / - empty search form
pub async fn index(State(state): State<AppState>) -> Html<String> {
    search_page(&state, &PlzField::new(), None, &RestaurantListView::Placeholder)
}

/// POST /search - run the submit handler against the posted PLZ
pub async fn search(State(state): State<AppState>, Form(input): Form<SearchInput>) -> Response {
    // One field per request, as if the form was freshly mounted and typed into.
    let mut field = PlzField::new();
    field.set_value(input.plz);

    let outcome = SearchSubmission::new().submit(&mut field);

    match outcome {
        SubmitOutcome::Rejected(failure) => {
            let page = search_page(&state, &field, Some(failure), &RestaurantListView::Placeholder);
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
        SubmitOutcome::Accepted(plz) if state.forward_to_lookup => {
            let (status, listing) = match state.catalog.lookup(&plz).await {
                Ok(restaurants) => {
                    tracing::debug!(%plz, found = restaurants.len(), "restaurant lookup");
                    (StatusCode::OK, RestaurantListView::Results { plz, restaurants })
                }
                Err(err) => {
                    tracing::warn!(%plz, error = %err, backend = state.catalog.name(), "restaurant lookup failed");
                    (StatusCode::SERVICE_UNAVAILABLE, RestaurantListView::Unavailable)
                }
            };
            (status, search_page(&state, &field, None, &listing)).into_response()
        }
        SubmitOutcome::Accepted(_) => {
            search_page(&state, &field, None, &RestaurantListView::Placeholder).into_response()
        }
    }
}

/// GET /restaurants - every restaurant in the catalog
pub async fn restaurants_page(State(state): State<AppState>) -> Response {
    let (status, listing) = match state.catalog.all().await {
        Ok(restaurants) => (StatusCode::OK, RestaurantListView::All(restaurants)),
        Err(err) => {
            tracing::warn!(error = %err, "listing restaurants failed");
            (StatusCode::SERVICE_UNAVAILABLE, RestaurantListView::Unavailable)
        }
    };

    let page = shell(&state.app_name, "/restaurants", restaurant_list(&listing));
    (status, Html(page.into_string())).into_response()
}

/// GET /api/restaurants?plz=..
pub async fn api_lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<Vec<Restaurant>>, ErrorResponse> {
    let plz = validate_plz(query.plz)?;
    let restaurants = state.catalog.lookup(&plz).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/images - every restaurant
pub async fn api_all(State(state): State<AppState>) -> Result<Json<Vec<Restaurant>>, ErrorResponse> {
    let restaurants = state.catalog.all().await?;
    Ok(Json(restaurants))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let content = html! {
        h1 { "404 Page Not Found" }
        p { "Route '" (uri.path()) "' not found" }
        a href="/" { "Go Home" }
    };
    (
        StatusCode::NOT_FOUND,
        Html(shell(&state.app_name, uri.path(), content).into_string()),
    )
        .into_response()
}
