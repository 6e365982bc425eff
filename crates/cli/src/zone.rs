use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use visnav::geo::{signed_area, FlatEarth, GeoPoint, ZonePolygon};
use visnav::nav::{NavConfig, ZoneDefinition};

/// Planar and geodetic view of one normalized zone polygon.
#[derive(Debug, Serialize)]
pub struct ZoneSummary {
    pub zone_id: i64,
    pub kind: &'static str,
    pub origin: GeoPoint,
    /// Counter-clockwise `[east, north]` vertices [m].
    pub vertices: Vec<[f64; 2]>,
    pub signed_area_m2: f64,
    pub geodetic: Vec<GeoPoint>,
}

pub fn load(path: &Path) -> Result<ZoneDefinition> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading zone {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing zone {}", path.display()))
}

/// Linearize and normalize `def` exactly as the navigation core would.
pub fn inspect(def: &ZoneDefinition, cfg: &NavConfig) -> Result<ZoneSummary> {
    let projector = match cfg.origin {
        Some(origin) => FlatEarth::with_origin(origin),
        None => FlatEarth::new(),
    };
    let polygon = ZonePolygon::from_shape(&def.boundary, &projector, &cfg.geom())
        .with_context(|| format!("zone {} ({})", def.zone_id, def.boundary.kind()))?;
    let origin = projector
        .origin()
        .context("projector origin was never pinned")?;
    let geodetic = polygon
        .vertices()
        .iter()
        .map(|&v| projector.unproject(v).context("unprojecting zone vertex"))
        .collect::<Result<Vec<_>>>()?;
    Ok(ZoneSummary {
        zone_id: def.zone_id,
        kind: def.boundary.kind(),
        origin,
        vertices: polygon.vertices().iter().map(|v| [v.x, v.y]).collect(),
        signed_area_m2: signed_area(polygon.vertices()),
        geodetic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use visnav::geo::Shape;

    fn rect(center: GeoPoint) -> ZoneDefinition {
        ZoneDefinition::new(
            3,
            Shape::Rectangle {
                center,
                width: 200.0,
                height: 100.0,
                rotation: 30.0,
            },
        )
    }

    #[test]
    fn rectangle_summary_pins_origin_at_center() {
        let center = GeoPoint::new(45.0, 7.0);
        let summary = inspect(&rect(center), &NavConfig::default()).unwrap();
        assert_eq!(summary.kind, "rectangle");
        assert_eq!(summary.origin, center);
        assert_eq!(summary.vertices.len(), 4);
        assert!((summary.signed_area_m2 - 20_000.0).abs() < 1e-6);
        for g in &summary.geodetic {
            assert!((g.latitude - 45.0).abs() < 0.001);
            assert!((g.longitude - 7.0).abs() < 0.002);
        }
    }

    #[test]
    fn configured_origin_is_kept() {
        let origin = GeoPoint::new(44.99, 7.01);
        let cfg = NavConfig {
            origin: Some(origin),
            ..NavConfig::default()
        };
        let summary = inspect(&rect(GeoPoint::new(45.0, 7.0)), &cfg).unwrap();
        assert_eq!(summary.origin, origin);
        assert!(summary.signed_area_m2 > 0.0);
    }

    #[test]
    fn unsupported_zone_is_an_error() {
        let def = ZoneDefinition::new(9, Shape::Unsupported);
        let err = inspect(&def, &NavConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported"));
    }

    #[test]
    fn load_reads_json_definition() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zone.json");
        fs::write(
            &path,
            r#"{"zone_id":2,"label":"quarry","boundary":{"type":"circle","center":{"latitude":10.0,"longitude":20.0},"radius":250.0}}"#,
        )
        .unwrap();
        let def = load(&path).unwrap();
        assert_eq!(def.label.as_deref(), Some("quarry"));
        let summary = inspect(&def, &NavConfig::default()).unwrap();
        assert_eq!(summary.vertices.len(), 18);
    }
}
