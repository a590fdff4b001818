//! Starred-restaurant records and the store that owns them.

pub mod store;

pub use store::{JoinedStarredRestaurant, StarredRestaurant, StarredStore, StoreError};
