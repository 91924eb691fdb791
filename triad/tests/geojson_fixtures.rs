use assert_matches::assert_matches;
use geojson::{Feature, FeatureCollection, GeoJson, Value};
use proptest::prelude::*;
use serde_json::json;
use triad::geojson::{
    bounding_box, convex_hull_feature, envelope_feature, is_homogeneous_collection,
    line_string_feature, point_in_polygon, polygon_feature, positions,
};
use triad::{Point2d, Rect, TriadError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parse(value: serde_json::Value) -> GeoJson {
    GeoJson::from_json_value(value).expect("valid GeoJSON")
}

fn collection(value: serde_json::Value) -> FeatureCollection {
    FeatureCollection::try_from(parse(value)).expect("feature collection")
}

fn feature(value: serde_json::Value) -> Feature {
    Feature::try_from(parse(value)).expect("feature")
}

fn point_feature(coordinates: [f64; 2]) -> Feature {
    feature(json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": coordinates },
        "properties": {}
    }))
}

fn polygon_feature_of(coordinates: serde_json::Value) -> Feature {
    feature(json!({
        "type": "Feature",
        "geometry": { "type": "Polygon", "coordinates": coordinates },
        "properties": {}
    }))
}

fn points() -> FeatureCollection {
    collection(json!({
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "id": 1, "geometry": { "type": "Point", "coordinates": [0, 0] }, "properties": {} },
            { "type": "Feature", "id": 2, "geometry": { "type": "Point", "coordinates": [1, 1] }, "properties": {} },
            { "type": "Feature", "id": 4, "geometry": { "type": "Point", "coordinates": [0.5, 0.5] }, "properties": {} },
            { "type": "Feature", "id": 3, "geometry": { "type": "Point", "coordinates": [1, 0] }, "properties": {} }
        ]
    }))
}

fn mixed() -> FeatureCollection {
    collection(json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [102.0, 0.5] },
                "properties": { "prop0": "value0" }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[102.0, 0.0], [103.0, 1.0], [104.0, 0.0], [105.0, 1.0]]
                },
                "properties": { "prop0": "value0", "prop1": 0.0 }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]]]
                },
                "properties": { "prop0": "value0", "prop1": { "this": "that" } }
            }
        ]
    }))
}

fn rectangle() -> Feature {
    polygon_feature_of(json!([[
        [-107.81168943812605, 38.314288624068524],
        [-103.67142728798137, 38.314288624068524],
        [-103.67142728798137, 36.72956759418554],
        [-107.81168943812605, 36.72956759418554],
        [-107.81168943812605, 38.314288624068524]
    ]]))
}

fn polygon_with_hole() -> Feature {
    polygon_feature_of(json!([
        [
            [-105.09562443633479, 35.22116878921736],
            [-104.6958749873553, 34.70720521195801],
            [-104.31802087586152, 35.02122213904124],
            [-103.70601920892989, 34.23131301079195],
            [-105.61867453538082, 33.75314917917933],
            [-106.00057959849119, 33.65767291340177],
            [-106.25680140717998, 33.59361746122943],
            [-107.22762149755852, 34.82141934023787],
            [-105.34308838094114, 36.344274383969264],
            [-104.89166346395427, 35.76162129343993],
            [-105.09562443633479, 35.22116878921736]
        ],
        [
            [-106.33294415936655, 34.888044248400945],
            [-105.78713867291168, 34.02081997547839],
            [-105.46682035324432, 34.13613457055857],
            [-105.71428429785067, 34.94515131254087],
            [-106.33294415936655, 34.888044248400945]
        ]
    ]))
}

fn ring_of(feature: &Feature) -> &Vec<Vec<f64>> {
    match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Polygon(rings)) => &rings[0],
        other => panic!("polygon expected, got {other:?}"),
    }
}

#[test]
fn convex_hull_of_points() {
    init_logger();
    let hull = convex_hull_feature(&points()).expect("points collection");
    assert_eq!(
        ring_of(&hull),
        &vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![1.0, 1.0], vec![0.0, 0.0]]
    );
    assert_eq!(hull.properties, Some(serde_json::Map::new()));
}

#[test]
fn convex_hull_does_not_modify_input() {
    init_logger();
    let input = points();
    let copy = input.clone();
    let _ = convex_hull_feature(&input).expect("points collection");
    assert_eq!(input, copy);
}

#[test]
fn convex_hull_of_mixed_collection_fails() {
    init_logger();
    assert_matches!(
        convex_hull_feature(&mixed()),
        Err(TriadError::UnexpectedGeometry { .. })
    );
}

#[test]
fn bounding_box_of_mixed_collection() {
    init_logger();
    let rect = bounding_box(&GeoJson::FeatureCollection(mixed())).expect("valid collection");
    assert_eq!(rect.to_bbox(), [100.0, 0.0, 105.0, 1.0]);

    let envelope =
        envelope_feature(&GeoJson::FeatureCollection(mixed())).expect("valid collection");
    assert_eq!(envelope.bbox, Some(vec![100.0, 0.0, 105.0, 1.0]));
    assert_eq!(ring_of(&envelope).len(), 5);
}

#[test]
fn bounding_box_ignores_holes() {
    init_logger();
    let polygon = polygon_feature_of(json!([
        [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
        [[100.2, 0.2], [100.8, 0.2], [100.8, 0.8], [100.2, 0.8], [100.2, 0.2]]
    ]));

    let rect = bounding_box(&GeoJson::Feature(polygon)).expect("valid feature");
    assert_eq!(rect.to_bbox(), [100.0, 0.0, 101.0, 1.0]);
}

#[test]
fn bounding_box_of_polygon_with_hole() {
    init_logger();
    let rect = bounding_box(&GeoJson::Feature(polygon_with_hole())).expect("valid feature");
    assert_eq!(rect.x_min, -107.22762149755852);
    assert_eq!(rect.y_min, 33.59361746122943);
    assert_eq!(rect.x_max, -103.70601920892989);
    assert_eq!(rect.y_max, 36.344274383969264);
}

#[test]
fn homogeneity() {
    init_logger();
    assert_matches!(is_homogeneous_collection(&points()), Ok(true));
    assert_matches!(is_homogeneous_collection(&mixed()), Ok(false));
}

#[test]
fn point_in_rectangle() {
    init_logger();
    let inside = point_feature([-105.82721895926359, 37.614727088354385]);
    let outside = point_feature([-102.24027122933843, 39.589859195921484]);

    assert_matches!(point_in_polygon(&inside, &rectangle()), Ok(true));
    assert_matches!(point_in_polygon(&outside, &rectangle()), Ok(false));
}

#[test]
fn point_in_polygon_with_hole() {
    init_logger();
    let in_hole = point_feature([-105.67208852268062, 34.465451973765404]);
    let in_polygon = point_feature([-105.59055232554748, 35.51622195394005]);
    let outside = point_feature([-102.24027122933843, 39.589859195921484]);

    assert_matches!(point_in_polygon(&in_hole, &polygon_with_hole()), Ok(false));
    assert_matches!(point_in_polygon(&in_polygon, &polygon_with_hole()), Ok(true));
    assert_matches!(point_in_polygon(&outside, &polygon_with_hole()), Ok(false));
}

#[test]
fn point_in_multi_polygon() {
    init_logger();
    let multi = feature(json!({
        "type": "Feature",
        "geometry": {
            "type": "MultiPolygon",
            "coordinates": [
                [[
                    [-107.81168943812605, 38.314288624068524],
                    [-103.67142728798137, 38.314288624068524],
                    [-103.67142728798137, 36.72956759418554],
                    [-107.81168943812605, 36.72956759418554],
                    [-107.81168943812605, 38.314288624068524]
                ]],
                [[
                    [-100.0, 30.0],
                    [-99.0, 30.0],
                    [-99.0, 31.0],
                    [-100.0, 31.0],
                    [-100.0, 30.0]
                ]]
            ]
        },
        "properties": {}
    }));

    let in_first = point_feature([-105.82721895926359, 37.614727088354385]);
    let in_second = point_feature([-99.5, 30.5]);
    let outside = point_feature([-102.24027122933843, 39.589859195921484]);

    assert_matches!(point_in_polygon(&in_first, &multi), Ok(true));
    assert_matches!(point_in_polygon(&in_second, &multi), Ok(true));
    assert_matches!(point_in_polygon(&outside, &multi), Ok(false));
}

#[test]
fn bbox_member_rejects_before_ring_test() {
    init_logger();
    let mut polygon = rectangle();
    polygon.bbox = Some(vec![-107.0, 37.0, -106.0, 38.0]);

    let inside_ring = point_feature([-105.82721895926359, 37.614727088354385]);
    assert_matches!(point_in_polygon(&inside_ring, &polygon), Ok(false));
}

#[test]
fn line_and_polygon_from_points() {
    init_logger();
    let line = line_string_feature(&points()).expect("points collection");
    let Some(geometry) = line.geometry.as_ref() else {
        panic!("line has geometry");
    };
    assert_eq!(
        positions(geometry).ok(),
        Some(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(0.5, 0.5),
            Point2d::new(1.0, 0.0),
        ])
    );

    let polygon = polygon_feature(&GeoJson::Feature(line)).expect("line string feature");
    let ring = ring_of(&polygon);
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn documents_parsed_from_text() {
    init_logger();
    let geojson: GeoJson = r#"{
        "type": "GeometryCollection",
        "geometries": [
            { "type": "Point", "coordinates": [100.0, 0.0] },
            { "type": "LineString", "coordinates": [[101.0, 0.0], [102.0, 1.0]] }
        ]
    }"#
    .parse()
    .expect("valid GeoJSON");

    assert_eq!(
        bounding_box(&geojson).ok(),
        Some(Rect::new(100.0, 0.0, 102.0, 1.0))
    );
}

fn point_collection(coords: &[(f64, f64)]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: coords.iter().map(|&(x, y)| point_feature([x, y])).collect(),
        foreign_members: None,
    }
}

proptest! {
    #[test]
    fn hull_lies_inside_bounding_box(
        coords in prop::collection::vec((-180i32..180, -90i32..90), 3..40)
    ) {
        let coords: Vec<(f64, f64)> = coords.into_iter().map(|(x, y)| (x as f64, y as f64)).collect();
        let fc = point_collection(&coords);

        let rect = bounding_box(&GeoJson::FeatureCollection(fc.clone())).expect("points collection");
        let hull = convex_hull_feature(&fc).expect("points collection");

        for position in ring_of(&hull) {
            prop_assert!(rect.contains(&Point2d::new(position[0], position[1])));
        }
        for &(x, y) in &coords {
            prop_assert!(rect.contains(&Point2d::new(x, y)));
        }
    }
}
