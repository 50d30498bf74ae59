use anyhow::{Context, Result, bail};
use geojson::{FeatureCollection, GeoJson};
use std::path::Path;

use super::decode_geometry;
use crate::domain::{BoundaryFeature, FeatureKind};

/// Why a feature was left out of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    /// Position of the feature in the source collection
    pub index: usize,
    pub reason: String,
}

/// Outcome of turning a collection into boundary features
#[derive(Debug, Default)]
pub struct LoadReport {
    pub features: Vec<BoundaryFeature>,
    pub skipped: Vec<Skipped>,
}

/// Read a GeoJSON FeatureCollection (or a single Feature) from disk
pub fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    parse_collection(&contents)
        .with_context(|| format!("Failed to parse GeoJSON file: {}", path.display()))
}

/// Parse GeoJSON text; a lone Feature is wrapped in a one-element collection
pub fn parse_collection(contents: &str) -> Result<FeatureCollection> {
    match contents.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(feature) => Ok(FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        }),
        GeoJson::Geometry(_) => bail!("expected a FeatureCollection, found a bare geometry"),
    }
}

/// Convert a collection into named boundary features
///
/// # Algorithm
/// 1. Read the display name from the kind's name property
/// 2. Decode the geometry, accepting only Polygon and MultiPolygon
/// 3. Anything that fails either step is recorded in `skipped`
pub fn parse_boundaries(collection: &FeatureCollection, kind: FeatureKind) -> LoadReport {
    let mut report = LoadReport::default();

    for (index, feature) in collection.features.iter().enumerate() {
        let properties = feature.properties.clone().unwrap_or_default();

        let name = match properties
            .get(kind.name_property())
            .and_then(|v| v.as_str())
        {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => {
                report.skipped.push(Skipped {
                    index,
                    reason: format!("missing \"{}\" property", kind.name_property()),
                });
                continue;
            }
        };

        let geometry = match &feature.geometry {
            Some(g) => g,
            None => {
                report.skipped.push(Skipped {
                    index,
                    reason: format!("{}: no geometry", name),
                });
                continue;
            }
        };

        match decode_geometry(&geometry.value) {
            Ok(geometry) => report
                .features
                .push(BoundaryFeature::new(name, kind, geometry).with_properties(properties)),
            Err(e) => report.skipped.push(Skipped {
                index,
                reason: format!("{}: {}", name, e),
            }),
        }
    }

    report
}
