pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::catalog::{Restaurant, RestaurantCatalog};
pub use domain::starred::{JoinedStarredRestaurant, StarredRestaurant, StarredStore, StoreError};
