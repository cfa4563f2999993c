// File: src/components/restaurant_list.rs
// Purpose: Restaurant listing under the search form

use maud::{html, Markup};
use plz_forms::Plz;
use restaurant_store::Restaurant;

/// What the listing shows
#[derive(Debug, Clone)]
pub enum RestaurantListView {
    /// Nothing searched yet, or the search is not forwarded
    Placeholder,
    /// Result of forwarding an accepted PLZ to the catalog
    Results {
        plz: Plz,
        restaurants: Vec<Restaurant>,
    },
    /// Every restaurant in the catalog
    All(Vec<Restaurant>),
    /// The catalog could not answer
    Unavailable,
}

pub fn restaurant_list(view: &RestaurantListView) -> Markup {
    html! {
        section class="restaurant-list" {
            @match view {
                RestaurantListView::Placeholder => {
                    p class="placeholder" { "Enter a PLZ to find restaurants near you." }
                }
                RestaurantListView::Results { plz, restaurants } => {
                    h2 { "Restaurants in " (plz.as_str()) }
                    (entries(restaurants))
                }
                RestaurantListView::All(restaurants) => {
                    h2 { "All restaurants" }
                    (entries(restaurants))
                }
                RestaurantListView::Unavailable => {
                    p class="error" { "Restaurants could not be loaded. Please try again later." }
                }
            }
        }
    }
}

fn entries(restaurants: &[Restaurant]) -> Markup {
    html! {
        @if restaurants.is_empty() {
            p class="empty" { "No restaurants found." }
        } @else {
            ul {
                @for restaurant in restaurants {
                    li data-id=(restaurant.id) {
                        span class="name" { (restaurant.name) }
                        " "
                        span class="plz" { (restaurant.plz) }
                    }
                }
            }
        }
    }
}
