mod feature;
mod geo_location;
mod studio;

pub use feature::{Feature, FeatureCollection};
#[cfg(test)]
pub use feature::Geometry;
pub use geo_location::{GeoLocation, GeoLocationError};
pub use studio::Studio;
