//! Page components rendered with maud
//!
//! Each component is a plain function returning `Markup`. None of them hold
//! state; the search form is fed from a `PlzField` owned by the request.

pub mod navbar;
pub mod restaurant_list;
pub mod search_form;
pub mod shell;

pub use navbar::navbar;
pub use restaurant_list::{restaurant_list, RestaurantListView};
pub use search_form::{search_form, SearchFormView};
pub use shell::shell;
