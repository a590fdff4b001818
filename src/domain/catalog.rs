//! Read-only restaurant catalog.

use serde::Serialize;
use utoipa::ToSchema;

/// A restaurant that can be starred.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
}

/// The full set of restaurants, loaded once at startup.
///
/// Never mutated after construction; share it behind an `Arc` and hand out
/// references to the lookup paths that need it.
pub struct RestaurantCatalog {
    restaurants: Vec<Restaurant>,
}

impl RestaurantCatalog {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// The dataset the app ships with.
    pub fn builtin() -> Self {
        fn restaurant(id: &str, name: &str) -> Restaurant {
            Restaurant {
                id: id.to_string(),
                name: name.to_string(),
            }
        }

        Self::new(vec![
            restaurant("869c848c-7a58-4ed6-ab88-72ee2e8e677c", "Pho Bar"),
            restaurant("e8036613-4b72-46f6-ab5e-edd2fc7c4fe4", "Salt + Charcoal"),
            restaurant("f6f1f2c9-8e39-4d2b-9d12-6c31ef0159a9", "Taqueria Diana"),
            restaurant("05305d6a-d447-4f80-91f5-7cf4ca2cd708", "Jajaja Plantas Mexicana"),
            restaurant("8f1e7a5e-63a9-4bde-97a5-41e7f1d2a0c3", "Levain Bakery"),
            restaurant("4c1d4f7b-2a57-4f0d-8e44-0b1b6dc2a9ab", "Joe's Pizza"),
            restaurant("d7cda9d3-1f83-44a1-8a14-57b0bfed6ba0", "Russ & Daughters"),
            restaurant("2e2d5b1e-8c07-4f3a-a6a7-c9f02d5c0a41", "Mamoun's Falafel"),
        ])
    }

    /// Looks a restaurant up by its id.
    pub fn find_by_id(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|restaurant| restaurant.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter()
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
