//! In-memory restaurant catalog

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use plz_forms::Plz;
use tokio::sync::RwLock;

use crate::error::{LoadError, LookupError, SeedError};
use crate::lookup::RestaurantLookup;
use crate::restaurant::Restaurant;

/// In-memory catalog
///
/// Restaurants live in a map keyed by id. Nothing is persisted; a catalog
/// can be seeded from a JSON array of restaurants at startup.
#[derive(Clone, Default)]
pub struct MemoryCatalog {
    restaurants: Arc<RwLock<BTreeMap<i64, Restaurant>>>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of restaurants. Later entries with an
    /// id already present replace earlier ones.
    pub fn from_restaurants(restaurants: impl IntoIterator<Item = Restaurant>) -> Self {
        let map = restaurants.into_iter().map(|r| (r.id, r)).collect();
        Self {
            restaurants: Arc::new(RwLock::new(map)),
        }
    }

    /// Load a catalog from a JSON file holding `[{"id", "name", "plz"}, ..]`
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let seed_err = |source: SeedError| LoadError {
            path: path.to_path_buf(),
            source,
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| seed_err(e.into()))?;
        let restaurants = parse_seed(&content).map_err(seed_err)?;

        tracing::info!(count = restaurants.len(), ?path, "loaded restaurant seed");
        Ok(Self::from_restaurants(restaurants))
    }

    /// Add or replace a restaurant
    pub async fn insert(&self, restaurant: Restaurant) {
        self.restaurants
            .write()
            .await
            .insert(restaurant.id, restaurant);
    }

    /// Remove a restaurant by id
    pub async fn remove(&self, id: i64) -> Option<Restaurant> {
        self.restaurants.write().await.remove(&id)
    }

    /// Number of restaurants
    pub async fn len(&self) -> usize {
        self.restaurants.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.restaurants.read().await.is_empty()
    }
}

fn parse_seed(content: &str) -> Result<Vec<Restaurant>, SeedError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let restaurants: Vec<Restaurant> = serde_json::from_str(content)?;

    let mut seen = std::collections::HashSet::new();
    for restaurant in &restaurants {
        if !seen.insert(restaurant.id) {
            return Err(SeedError::DuplicateId(restaurant.id));
        }
    }

    Ok(restaurants)
}

#[async_trait]
impl RestaurantLookup for MemoryCatalog {
    async fn lookup(&self, plz: &Plz) -> Result<Vec<Restaurant>, LookupError> {
        let restaurants = self.restaurants.read().await;
        Ok(restaurants
            .values()
            .filter(|r| r.plz == plz.as_str())
            .cloned()
            .collect())
    }

    async fn all(&self) -> Result<Vec<Restaurant>, LookupError> {
        let restaurants = self.restaurants.read().await;
        Ok(restaurants.values().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plz_forms::validate_plz;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn sample() -> MemoryCatalog {
        MemoryCatalog::from_restaurants([
            Restaurant::new(2, "Curry 36", "10961"),
            Restaurant::new(1, "Mustafa's", "10961"),
            Restaurant::new(3, "Schneider Weisse", "80331"),
        ])
    }

    #[tokio::test]
    async fn test_lookup_filters_by_plz() {
        let catalog = sample();
        let plz = validate_plz("10961").unwrap();

        let found = catalog.lookup(&plz).await.unwrap();
        let ids: Vec<i64> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_lookup_unknown_plz_is_empty() {
        let catalog = sample();
        let plz = validate_plz("99999").unwrap();
        assert!(catalog.lookup(&plz).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_all_is_ordered_by_id() {
        let catalog = sample();
        let all = catalog.all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Mustafa's");
        assert_eq!(catalog.name(), "memory");
    }

    #[tokio::test]
    async fn test_insert_and_remove() {
        let catalog = MemoryCatalog::new();
        assert!(catalog.is_empty().await);

        catalog.insert(Restaurant::new(7, "Pho", "20095")).await;
        assert_eq!(catalog.len().await, 1);

        let removed = catalog.remove(7).await;
        assert_eq!(removed.map(|r| r.name), Some("Pho".to_string()));
        assert!(catalog.is_empty().await);
    }

    #[tokio::test]
    async fn test_load_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Pizzeria", "plz": "50667"}}]"#
        )
        .unwrap();

        let catalog = MemoryCatalog::load_json(file.path()).await.unwrap();
        assert_eq!(catalog.len().await, 1);
    }

    #[tokio::test]
    async fn test_load_json_missing_file() {
        let err = MemoryCatalog::load_json("does/not/exist.json")
            .await
            .err()
            .unwrap();
        assert!(matches!(err.source, SeedError::Io(_)));
        assert_eq!(err.path, Path::new("does/not/exist.json"));
    }

    #[tokio::test]
    async fn test_load_json_reports_bad_json_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = MemoryCatalog::load_json(file.path()).await.err().unwrap();
        assert!(matches!(err.source, SeedError::Json(_)));
        assert_eq!(err.path, file.path());
    }

    #[test]
    fn test_parse_seed_rejects_duplicate_ids() {
        let content = r#"[
            {"id": 1, "name": "A", "plz": "1"},
            {"id": 1, "name": "B", "plz": "2"}
        ]"#;
        assert!(matches!(parse_seed(content), Err(SeedError::DuplicateId(1))));
    }

    #[test]
    fn test_parse_seed_empty_file() {
        assert!(parse_seed("  \n").unwrap().is_empty());
    }
}
