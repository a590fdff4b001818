//! The store of starred restaurants and its join against the catalog.

use crate::domain::catalog::RestaurantCatalog;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// A saved reference to a restaurant plus a free-text comment.
#[derive(Debug, Clone)]
pub struct StarredRestaurant {
    pub id: String,
    pub restaurant_id: String,
    pub comment: String,
}

/// A starred record's id and comment combined with the referenced
/// restaurant's name. This is the shape every read path returns.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JoinedStarredRestaurant {
    pub id: String,
    pub comment: String,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Starred restaurant {id} not found")]
    StarredNotFound { id: String },
    #[error("Restaurant {id} not found in the list of all restaurants")]
    RestaurantNotFound { id: String },
    #[error("Restaurant {id} is already starred")]
    AlreadyStarred { id: String },
    #[error("Starred restaurant {id} references restaurant {restaurant_id}, which is missing from the catalog")]
    CatalogInconsistent { id: String, restaurant_id: String },
}

/// The list of starred restaurants for the running process.
///
/// Owns its backing list exclusively; every read and mutation goes through
/// the methods below. The catalog is passed into the join paths by the
/// caller rather than held here, since the store has no say over it.
#[derive(Debug, Default)]
pub struct StarredStore {
    records: Vec<StarredRestaurant>,
}

impl StarredStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Store pre-populated with the records the app ships with. Both
    /// referenced restaurants exist in [`RestaurantCatalog::builtin`].
    pub fn seeded() -> Self {
        Self {
            records: vec![
                StarredRestaurant {
                    id: "a7272cd9-26fb-44b5-8d53-9781f55175a1".to_string(),
                    restaurant_id: "869c848c-7a58-4ed6-ab88-72ee2e8e677c".to_string(),
                    comment: "Best pho in NYC".to_string(),
                },
                StarredRestaurant {
                    id: "8df59b21-2152-4f9b-9200-95c19aa88226".to_string(),
                    restaurant_id: "e8036613-4b72-46f6-ab5e-edd2fc7c4fe4".to_string(),
                    comment: "Their lunch special is the best!".to_string(),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn join(
        record: &StarredRestaurant,
        catalog: &RestaurantCatalog,
    ) -> Result<JoinedStarredRestaurant, StoreError> {
        let restaurant = catalog.find_by_id(&record.restaurant_id).ok_or_else(|| {
            StoreError::CatalogInconsistent {
                id: record.id.clone(),
                restaurant_id: record.restaurant_id.clone(),
            }
        })?;
        Ok(JoinedStarredRestaurant {
            id: record.id.clone(),
            comment: record.comment.clone(),
            name: restaurant.name.clone(),
        })
    }

    /// Every starred restaurant joined with its catalog name, in insertion
    /// order.
    ///
    /// Errors if any record references a restaurant the catalog does not
    /// have; the whole listing fails rather than silently dropping entries.
    pub fn list_joined(
        &self,
        catalog: &RestaurantCatalog,
    ) -> Result<Vec<JoinedStarredRestaurant>, StoreError> {
        self.records
            .iter()
            .map(|record| Self::join(record, catalog))
            .collect()
    }

    /// The joined view of a single starred restaurant.
    pub fn get_joined_by_id(
        &self,
        catalog: &RestaurantCatalog,
        id: &str,
    ) -> Result<JoinedStarredRestaurant, StoreError> {
        let record = self
            .records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::StarredNotFound { id: id.to_string() })?;
        Self::join(record, catalog)
    }

    /// Stars a restaurant: rejects a duplicate star, verifies the restaurant
    /// exists in the catalog, then appends a fresh record with an empty
    /// comment and returns its joined view.
    pub fn create(
        &mut self,
        catalog: &RestaurantCatalog,
        restaurant_id: &str,
    ) -> Result<JoinedStarredRestaurant, StoreError> {
        if self
            .records
            .iter()
            .any(|record| record.restaurant_id == restaurant_id)
        {
            return Err(StoreError::AlreadyStarred {
                id: restaurant_id.to_string(),
            });
        }
        let restaurant = catalog.find_by_id(restaurant_id).ok_or_else(|| {
            StoreError::RestaurantNotFound {
                id: restaurant_id.to_string(),
            }
        })?;

        let record = StarredRestaurant {
            id: Uuid::new_v4().to_string(),
            restaurant_id: restaurant_id.to_string(),
            comment: String::new(),
        };
        let joined = JoinedStarredRestaurant {
            id: record.id.clone(),
            comment: record.comment.clone(),
            name: restaurant.name.clone(),
        };
        self.records.push(record);
        Ok(joined)
    }

    /// Removes a starred restaurant.
    pub fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::StarredNotFound { id: id.to_string() })?;
        self.records.remove(index);
        Ok(())
    }

    /// Replaces the comment of a starred restaurant in place.
    pub fn update_comment(&mut self, id: &str, new_comment: String) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::StarredNotFound { id: id.to_string() })?;
        record.comment = new_comment;
        Ok(())
    }
}
