use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoLocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoLocationError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoLocationError::InvalidLongitude(longitude));
        }

        Ok(GeoLocation { latitude, longitude })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoLocationError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(42.3876, -71.0995)]
    #[case(-90.0, 180.0)]
    #[case(90.0, -180.0)]
    fn new_accepts_coordinates_in_range(#[case] latitude: f64, #[case] longitude: f64) {
        assert_eq!(GeoLocation::new(latitude, longitude), Ok(GeoLocation { latitude, longitude }));
    }

    #[rstest]
    #[case(90.1, 0.0, GeoLocationError::InvalidLatitude(90.1))]
    #[case(-91.0, 0.0, GeoLocationError::InvalidLatitude(-91.0))]
    #[case(0.0, 180.5, GeoLocationError::InvalidLongitude(180.5))]
    #[case(f64::NAN, 0.0, GeoLocationError::InvalidLatitude(f64::NAN))]
    fn new_rejects_coordinates_out_of_range(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: GeoLocationError) {
        let err = GeoLocation::new(latitude, longitude).unwrap_err();
        assert_eq!(err.to_string(), expected.to_string());
    }
}
