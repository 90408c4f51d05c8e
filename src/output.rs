use crate::domain::FeatureCollection;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, instrument};

/// Writes the collection as pretty-printed JSON, replacing any existing file at `path`.
#[instrument(skip(collection), fields(features = collection.len()))]
pub async fn write_feature_collection(path: &Path, collection: &FeatureCollection) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(collection)?;
    fs::write(path, json).await.map_err(|source| OutputError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    debug!("Wrote {} feature(s) to '{}'", collection.len(), path.display());
    Ok(())
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("unable to serialize feature collection: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unable to write '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Feature, GeoLocation, Studio};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::env::temp_dir;
    use std::process;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("pottery_map_{}_{}.json", name, process::id()))
    }

    const STUDIO: Studio = Studio {
        name: "The Pottery Studio",
        address: "84 Thoreau St, Concord, MA",
        website: "",
        phone: "",
        classes: true,
        open_studio: true,
        member_studios: false,
        notes: "Community pottery studio in Concord.",
    };

    #[tokio::test]
    async fn writes_an_indented_feature_collection() -> Result<(), Box<dyn std::error::Error>> {
        let path = temp_path("output");
        let collection = FeatureCollection {
            features: vec![Feature::new(
                &STUDIO,
                GeoLocation {
                    latitude: 42.4571,
                    longitude: -71.3589,
                },
            )],
        };

        write_feature_collection(&path, &collection).await?;

        let text = fs::read_to_string(&path).await?;
        assert!(text.starts_with("{\n  \"type\": \"FeatureCollection\",\n  \"features\": ["), "unexpected layout:\n{}", text);

        let value: Value = serde_json::from_str(&text)?;
        let features = value["features"].as_array().expect("features should be an array");
        assert_eq!(features.len(), 1);
        assert_eq!(features[0]["geometry"]["type"], "Point");

        let coordinates = features[0]["geometry"]["coordinates"].as_array().expect("coordinates should be an array");
        assert_eq!(coordinates.len(), 2);
        assert!(coordinates.iter().all(Value::is_f64));
        assert_eq!(features[0]["properties"]["website"], "");

        Ok(())
    }

    #[tokio::test]
    async fn overwrites_an_existing_file() -> Result<(), Box<dyn std::error::Error>> {
        let path = temp_path("overwrite");
        fs::write(&path, "stale content that is longer than the new collection").await?;

        write_feature_collection(&path, &FeatureCollection::default()).await?;

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).await?)?;
        assert_eq!(value, serde_json::json!({ "type": "FeatureCollection", "features": [] }));

        Ok(())
    }

    #[tokio::test]
    async fn reports_the_path_when_the_file_cannot_be_written() {
        let path = temp_dir()
            .join(format!("pottery_map_missing_dir_{}", process::id()))
            .join("studios.json");

        let result = write_feature_collection(&path, &FeatureCollection::default()).await;

        match result {
            Err(OutputError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected an I/O error, found {:?}", other),
        }
    }
}
