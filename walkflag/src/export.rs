//! GeoJSON export of a map session.
//!
//! Markers and flags become `Point` features, routes become `LineString`
//! features. Styling properties follow the simplestyle conventions honoured
//! by GitHub's GeoJSON renderer and most web map widgets.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::coord::Coordinate;
use crate::discovery::Flag;
use crate::geocode::Geocoder;
use crate::routing::WalkingRouter;
use crate::session::{MapSession, Marker, RouteOverlay};

const MARKER_COLOR: &str = "#d62728";
const FLAG_COLOR: &str = "#2ca02c";
const ROUTE_COLOR: &str = "#1f77b4";

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize GeoJSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// GeoJSON geometry, restricted to what a session contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub id: String,
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

impl Feature {
    fn new(id: String, geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            kind: "Feature",
            id,
            geometry,
            properties,
        }
    }

    fn point(id: String, position: Coordinate, properties: Map<String, Value>) -> Self {
        Self::new(
            id,
            Geometry::Point {
                coordinates: position.to_lon_lat(),
            },
            properties,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Builds a collection: markers first, then flags, then routes.
    pub fn from_parts(markers: &[Marker], flags: &[Flag], routes: &[RouteOverlay]) -> Self {
        let mut features = Vec::with_capacity(markers.len() + flags.len() + routes.len());

        for marker in markers {
            let mut props = Map::new();
            props.insert("kind".into(), "marker".into());
            props.insert("name".into(), marker.name.clone().into());
            props.insert("marker-color".into(), MARKER_COLOR.into());
            features.push(Feature::point(marker.id.clone(), marker.position, props));
        }

        for flag in flags {
            let mut props = Map::new();
            props.insert("kind".into(), "flag".into());
            props.insert("name".into(), flag.place_name.clone().into());
            props.insert("direction".into(), flag.direction.as_str().into());
            props.insert("distance_km".into(), flag.distance_km.into());
            props.insert("marker-color".into(), FLAG_COLOR.into());
            props.insert("marker-symbol".into(), "embassy".into());
            features.push(Feature::point(flag.id.clone(), flag.position, props));
        }

        for overlay in routes {
            let mut props = Map::new();
            props.insert("kind".into(), "route".into());
            props.insert("flag_id".into(), overlay.flag_id.clone().into());
            props.insert("direction".into(), overlay.direction.as_str().into());
            props.insert("distance_km".into(), overlay.route.distance_km().into());
            props.insert("stroke".into(), ROUTE_COLOR.into());
            props.insert("stroke-width".into(), 3.into());
            props.insert("stroke-opacity".into(), 0.8.into());

            let coordinates = overlay
                .route
                .polyline()
                .iter()
                .map(Coordinate::to_lon_lat)
                .collect();
            features.push(Feature::new(
                overlay.id.clone(),
                Geometry::LineString { coordinates },
                props,
            ));
        }

        Self {
            kind: "FeatureCollection",
            features,
        }
    }

    /// Snapshots everything a session currently displays.
    pub fn from_session<R: WalkingRouter, G: Geocoder>(session: &MapSession<R, G>) -> Self {
        Self::from_parts(&session.markers(), &session.flags(), &session.routes())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the collection to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| ExportError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
