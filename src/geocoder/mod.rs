mod client;
mod geocode;
mod search_result;

pub use client::new_client;
pub use geocode::geocode;
