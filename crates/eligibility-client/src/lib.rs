pub mod client;
pub mod store;

pub use client::EligibilityClient;
pub use store::{HistoryStore, HistoryStoreError};
