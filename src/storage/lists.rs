use crate::models::{Property, PropertyType};
use crate::storage::store::LocalStore;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const FAVORITES_KEY: &str = "favoriteProperties";
pub const CART_KEY: &str = "cartProperties";

/// A list of properties kept under one store key (favorites, cart)
pub struct SavedList<'a> {
    store: &'a mut LocalStore,
    key: String,
    items: Vec<Property>,
}

impl<'a> SavedList<'a> {
    pub fn load(store: &'a mut LocalStore, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let items = store.get_json(&key)?.unwrap_or_default();
        Ok(Self { store, key, items })
    }

    pub fn favorites(store: &'a mut LocalStore) -> Result<Self> {
        Self::load(store, FAVORITES_KEY)
    }

    pub fn cart(store: &'a mut LocalStore) -> Result<Self> {
        Self::load(store, CART_KEY)
    }

    pub fn items(&self) -> &[Property] {
        &self.items
    }

    pub fn contains(&self, property_id: &str) -> bool {
        self.items.iter().any(|p| p.id == property_id)
    }

    /// Append a property; callers check `contains` first to avoid duplicates
    pub async fn add(&mut self, property: Property) -> Result<()> {
        info!("Adding {} to {}", property.id, self.key);
        self.items.push(property);
        self.persist().await
    }

    /// Remove every entry with this id; returns whether anything was removed
    pub async fn remove(&mut self, property_id: &str) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|p| p.id != property_id);
        let removed = self.items.len() != before;
        if removed {
            info!("Removed {} from {}", property_id, self.key);
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn persist(&mut self) -> Result<()> {
        self.store.set_json(&self.key, &self.items).await
    }
}

/// Details entered when posting a new listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub name: String,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub total_area: f64,
    pub property_type: PropertyType,
}

impl NewListing {
    pub fn into_property(self, now: DateTime<Utc>) -> Property {
        let stamp = now.timestamp_millis();
        Property {
            id: format!("userprop_{}", stamp),
            description: format!(
                "A lovely {} bed, {} bath {} located in {}.",
                self.bedrooms,
                self.bathrooms,
                self.property_type.as_str().to_lowercase(),
                self.city
            ),
            title: self.name,
            address: format!("{}, {}", self.address, self.city),
            city: Some(self.city),
            area_name: None,
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.total_area,
            image_url: format!("https://picsum.photos/seed/{}/800/600", stamp),
            property_type: self.property_type,
            tags: None,
            price_suffix: None,
            latitude: None,
            longitude: None,
        }
    }
}

/// Listings a user has posted, stored per owner email
pub struct MyListings<'a> {
    inner: SavedList<'a>,
}

impl<'a> MyListings<'a> {
    pub fn key_for(owner_email: &str) -> String {
        format!("my_properties_{}", owner_email)
    }

    pub fn load(store: &'a mut LocalStore, owner_email: &str) -> Result<Self> {
        Ok(Self {
            inner: SavedList::load(store, Self::key_for(owner_email))?,
        })
    }

    pub fn items(&self) -> &[Property] {
        self.inner.items()
    }

    /// Store a new listing, returning the created property
    pub async fn submit(&mut self, listing: NewListing) -> Result<Property> {
        self.submit_at(listing, Utc::now()).await
    }

    pub async fn submit_at(&mut self, listing: NewListing, now: DateTime<Utc>) -> Result<Property> {
        let property = listing.into_property(now);
        self.inner.add(property.clone()).await?;
        Ok(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn listing() -> NewListing {
        NewListing {
            name: "Sunny Flat".to_string(),
            address: "Hodan Road".to_string(),
            city: "Mogadishu".to_string(),
            price: 900.0,
            bedrooms: 2,
            bathrooms: 1,
            total_area: 750.0,
            property_type: PropertyType::Apartment,
        }
    }

    #[tokio::test]
    async fn favorites_add_contains_remove() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let props = mock::properties();

        {
            let mut store = LocalStore::open(&path).await.unwrap();
            let mut favorites = SavedList::favorites(&mut store).unwrap();
            favorites.add(props[0].clone()).await.unwrap();
            favorites.add(props[2].clone()).await.unwrap();
            assert!(favorites.contains("prop003"));
            assert!(favorites.remove("prop001").await.unwrap());
            assert!(!favorites.remove("prop001").await.unwrap());
        }

        let mut store = LocalStore::open(&path).await.unwrap();
        let favorites = SavedList::favorites(&mut store).unwrap();
        assert_eq!(favorites.items(), &props[2..3]);
    }

    #[tokio::test]
    async fn cart_and_favorites_are_separate() {
        let dir = tempdir().unwrap();
        let mut store = LocalStore::open(dir.path().join("store.json")).await.unwrap();
        let props = mock::properties();

        SavedList::cart(&mut store)
            .unwrap()
            .add(props[1].clone())
            .await
            .unwrap();

        assert!(SavedList::favorites(&mut store).unwrap().items().is_empty());
        assert!(SavedList::cart(&mut store).unwrap().contains("prop002"));
    }

    #[test]
    fn new_listing_becomes_property() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let property = listing().into_property(now);

        assert_eq!(property.id, "userprop_1700000000123");
        assert_eq!(property.address, "Hodan Road, Mogadishu");
        assert_eq!(
            property.image_url,
            "https://picsum.photos/seed/1700000000123/800/600"
        );
        assert_eq!(
            property.description,
            "A lovely 2 bed, 1 bath apartment located in Mogadishu."
        );
        assert_eq!(property.city.as_deref(), Some("Mogadishu"));
    }

    #[tokio::test]
    async fn listings_are_kept_per_owner() {
        let dir = tempdir().unwrap();
        let mut store = LocalStore::open(dir.path().join("store.json")).await.unwrap();
        let now = Utc.timestamp_millis_opt(1_000).unwrap();

        MyListings::load(&mut store, "a@example.com")
            .unwrap()
            .submit_at(listing(), now)
            .await
            .unwrap();

        assert_eq!(
            MyListings::load(&mut store, "a@example.com")
                .unwrap()
                .items()
                .len(),
            1
        );
        assert!(MyListings::load(&mut store, "b@example.com")
            .unwrap()
            .items()
            .is_empty());
        assert!(store.get("my_properties_a@example.com").is_some());
    }
}
