use crate::domain::{GeoLocation, Studio};
use serde::Serialize;

// Format: https://datatracker.ietf.org/doc/html/rfc7946
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: StudioProperties,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Coordinates are ordered longitude first.
    Point { coordinates: [f64; 2] },
}

#[derive(Debug, PartialEq, Serialize)]
pub struct StudioProperties {
    pub name: String,
    pub address: String,
    pub website: String,
    pub phone: String,
    pub classes: bool,
    pub open_studio: bool,
    pub member_studios: bool,
    pub notes: String,
}

impl Feature {
    pub fn new(studio: &Studio, location: GeoLocation) -> Self {
        Feature {
            geometry: Geometry::Point {
                coordinates: [location.longitude, location.latitude],
            },
            properties: StudioProperties::from(studio),
        }
    }
}

impl From<&Studio> for StudioProperties {
    fn from(studio: &Studio) -> Self {
        StudioProperties {
            name: studio.name.to_string(),
            address: studio.address.to_string(),
            website: studio.website.to_string(),
            phone: studio.phone.to_string(),
            classes: studio.classes,
            open_studio: studio.open_studio,
            member_studios: studio.member_studios,
            notes: studio.notes.to_string(),
        }
    }
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }
}
