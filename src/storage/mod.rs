pub mod lists;
pub mod store;

pub use lists::{MyListings, NewListing, SavedList, CART_KEY, FAVORITES_KEY};
pub use store::LocalStore;
