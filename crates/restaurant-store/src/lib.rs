//! Restaurant catalog
//!
//! Restaurant records and the [`RestaurantLookup`] interface the search
//! form forwards a validated PLZ to.

pub mod error;
pub mod lookup;
pub mod memory;
pub mod restaurant;

pub use error::{LoadError, LookupError, SeedError};
pub use lookup::RestaurantLookup;
pub use memory::MemoryCatalog;
pub use restaurant::Restaurant;
