use serde_json::{Map, Value};

use crate::geometry::Geometry;

/// Which boundary collection a feature came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FeatureKind {
    Country,
    State,
}

impl FeatureKind {
    /// Property holding the display name in the Natural Earth style files
    pub fn name_property(&self) -> &'static str {
        match self {
            FeatureKind::Country => "ADMIN",
            FeatureKind::State => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeatureKind::Country => "Country",
            FeatureKind::State => "State",
        }
    }
}

/// A named country or state outline
#[derive(Debug, Clone)]
pub struct BoundaryFeature {
    pub name: String,
    pub kind: FeatureKind,
    pub geometry: Geometry,
    /// Properties from the source file, passed through on output
    pub properties: Map<String, Value>,
}

impl BoundaryFeature {
    pub fn new(name: impl Into<String>, kind: FeatureKind, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            kind,
            geometry,
            properties: Map::new(),
        }
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// `Name (Kind)` as shown in search results
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.kind.label())
    }
}
