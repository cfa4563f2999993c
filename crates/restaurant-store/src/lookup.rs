//! Lookup interface for restaurant backends

use async_trait::async_trait;
use plz_forms::Plz;

use crate::error::LookupError;
use crate::restaurant::Restaurant;

/// A source of restaurants, keyed by postal code
#[async_trait]
pub trait RestaurantLookup: Send + Sync {
    /// Restaurants registered under `plz`, ordered by id
    async fn lookup(&self, plz: &Plz) -> Result<Vec<Restaurant>, LookupError>;

    /// Every restaurant, ordered by id
    async fn all(&self) -> Result<Vec<Restaurant>, LookupError>;

    /// Backend name, for logs
    fn name(&self) -> &'static str;
}
