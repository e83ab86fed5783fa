//! Roof topology descriptors for the four supported roof styles.

use serde::Serialize;

use crate::config::GenerationConfig;
use crate::geometry::{Point3, Rect};
use crate::model::RoofType;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofFace {
    Triangle([Point3; 3]),
    Quad([Point3; 4]),
}

impl RoofFace {
    pub fn vertices(&self) -> &[Point3] {
        match self {
            RoofFace::Triangle(vertices) => vertices.as_slice(),
            RoofFace::Quad(vertices) => vertices.as_slice(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoofGeometry {
    pub roof_type: RoofType,
    pub faces: Vec<RoofFace>,
}

pub fn build_roof(
    footprint: &Rect,
    base_z: f64,
    roof_type: RoofType,
    config: &GenerationConfig,
) -> RoofGeometry {
    let top_z = base_z + config.roof_height;
    let (mid_x, mid_y) = footprint.center();
    // Counter-clockwise from the min corner.
    let corners = [
        Point3::new(footprint.min_x, footprint.min_y, base_z),
        Point3::new(footprint.max_x, footprint.min_y, base_z),
        Point3::new(footprint.max_x, footprint.max_y, base_z),
        Point3::new(footprint.min_x, footprint.max_y, base_z),
    ];

    let faces = match roof_type {
        RoofType::Flat => {
            let [c0, c1, c2, c3] = corners;
            vec![RoofFace::Quad([c0, c1, c2, c3]), RoofFace::Quad([c3, c2, c1, c0])]
        }
        RoofType::Hip => {
            let apex = Point3::new(mid_x, mid_y, top_z);
            (0..4).map(|i| RoofFace::Triangle([corners[i], corners[(i + 1) % 4], apex])).collect()
        }
        RoofType::Gabled if footprint.width() < footprint.height() => {
            let ridge_a = Point3::new(footprint.min_x, mid_y, top_z);
            let ridge_b = Point3::new(footprint.max_x, mid_y, top_z);
            vec![
                RoofFace::Quad([corners[0], corners[1], ridge_b, ridge_a]),
                RoofFace::Quad([corners[3], corners[2], ridge_b, ridge_a]),
            ]
        }
        RoofType::Gabled => {
            let ridge_a = Point3::new(mid_x, footprint.min_y, top_z);
            let ridge_b = Point3::new(mid_x, footprint.max_y, top_z);
            vec![
                RoofFace::Quad([corners[0], corners[3], ridge_b, ridge_a]),
                RoofFace::Quad([corners[1], corners[2], ridge_b, ridge_a]),
            ]
        }
        RoofType::Shed => vec![RoofFace::Quad([
            corners[0],
            Point3::new(footprint.max_x, footprint.min_y, top_z),
            Point3::new(footprint.max_x, footprint.max_y, top_z),
            corners[3],
        ])],
    };

    RoofGeometry { roof_type, faces }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn flat_roof_is_two_coincident_quads_at_base_height() {
        let roof = build_roof(&square(), 3.0, RoofType::Flat, &GenerationConfig::default());
        assert_eq!(roof.roof_type, RoofType::Flat);
        assert_eq!(roof.faces.len(), 2);
        for face in &roof.faces {
            assert!(matches!(face, RoofFace::Quad(_)));
            assert!(face.vertices().iter().all(|v| v.z == 3.0));
        }
        let mut top: Vec<_> = roof.faces[0].vertices().iter().map(|v| (v.x, v.y)).collect();
        let mut bottom: Vec<_> = roof.faces[1].vertices().iter().map(|v| (v.x, v.y)).collect();
        top.sort_by(|a, b| a.partial_cmp(b).expect("finite"));
        bottom.sort_by(|a, b| a.partial_cmp(b).expect("finite"));
        assert_eq!(top, bottom);
    }

    #[test]
    fn hip_roof_meets_at_a_centered_apex() {
        let config = GenerationConfig::default();
        let roof = build_roof(&Rect::new(0.0, 0.0, 12.0, 8.0), 6.4, RoofType::Hip, &config);
        assert_eq!(roof.faces.len(), 4);
        let apex = Point3::new(6.0, 4.0, 6.4 + config.roof_height);
        for face in &roof.faces {
            let RoofFace::Triangle([a, b, top]) = face else {
                panic!("hip faces are triangles: {face:?}");
            };
            assert_eq!(*top, apex);
            assert_eq!((a.z, b.z), (6.4, 6.4));
        }
    }

    #[test]
    fn gable_ridge_runs_along_the_shorter_axis() {
        let config = GenerationConfig::default();
        let ridge_points = |roof: &RoofGeometry| -> Vec<(f64, f64)> {
            roof.faces
                .iter()
                .flat_map(|face| face.vertices().iter())
                .filter(|v| v.z > 3.0)
                .map(|v| (v.x, v.y))
                .collect()
        };

        let deep = build_roof(&Rect::new(0.0, 0.0, 6.0, 14.0), 3.0, RoofType::Gabled, &config);
        assert_eq!(deep.faces.len(), 2);
        assert!(ridge_points(&deep).iter().all(|&(_, y)| y == 7.0));

        let wide = build_roof(&Rect::new(0.0, 0.0, 14.0, 6.0), 3.0, RoofType::Gabled, &config);
        assert!(ridge_points(&wide).iter().all(|&(x, _)| x == 7.0));

        let even = build_roof(&square(), 3.0, RoofType::Gabled, &config);
        assert!(ridge_points(&even).iter().all(|&(x, _)| x == 5.0));
    }

    #[test]
    fn shed_roof_raises_only_the_max_x_edge() {
        let config = GenerationConfig::default();
        let roof = build_roof(&square(), 3.0, RoofType::Shed, &config);
        assert_eq!(roof.faces.len(), 1);
        for v in roof.faces[0].vertices() {
            let expected = if v.x == 10.0 { 3.0 + config.roof_height } else { 3.0 };
            assert_eq!(v.z, expected);
        }
    }
}
