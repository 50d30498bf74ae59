use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection};
use serde_json::{Value, json};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::encode_geometry;
use crate::domain::{DragFrame, DraggableClone};
use crate::geometry::{Geometry, LatLng};

/// Build an output feature for a clone placed at `center`.
///
/// Source properties are kept. `name` and `kind` are only filled in when the
/// source does not carry them; centre, rotation and style always use the
/// keys Leaflet path options expect.
pub fn clone_to_feature(clone: &DraggableClone, geometry: &Geometry, center: LatLng) -> Feature {
    let source = clone.source();
    let style = clone.style();

    let mut properties = source.properties.clone();
    properties
        .entry("name")
        .or_insert_with(|| json!(source.name));
    properties
        .entry("kind")
        .or_insert_with(|| json!(source.kind.label()));

    let extra = [
        ("center", json!([center.lng, center.lat])),
        ("rotation", json!(clone.rotation())),
        ("color", json!(style.color)),
        ("weight", json!(style.weight)),
        ("fillColor", json!(style.fill_color)),
        ("fillOpacity", json!(style.fill_opacity)),
    ];
    for (key, value) in extra {
        properties.insert(key.to_string(), value);
    }

    Feature {
        bbox: None,
        geometry: Some(encode_geometry(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// One feature per drag frame, tagged with its frame number
pub fn frames_to_collection(clone: &DraggableClone, frames: &[DragFrame]) -> FeatureCollection {
    let features = frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let mut feature = clone_to_feature(clone, &frame.geometry, frame.center);
            if let Some(props) = feature.properties.as_mut() {
                props.insert("frame".to_string(), Value::from(i));
            }
            feature
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Write a collection as pretty-printed JSON; `None` writes to stdout
pub fn write_collection(path: Option<&Path>, collection: &FeatureCollection) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, collection)
                .context("Failed to serialize GeoJSON")?;
            writer.flush().context("Failed to flush output file")?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, collection)
                .context("Failed to serialize GeoJSON")?;
            writeln!(lock).context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
