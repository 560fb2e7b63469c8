//! Unit tests for pp-input.

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use pp_core::{Bounds, FacilityId, Point, PpError};

    use crate::{InputError, load_config, load_config_reader};

    const FULL_DOC: &str = r#"{
        "districts": [ { "name": "North" }, { "name": "South" } ],
        "historical_orders": [
            { "order_id": "ORD_1", "delivery_point": [10, 20], "weight": 1.5 },
            { "order_id": "ORD_2", "delivery_point": [250.5, 40], "weight": 3 }
        ],
        "existing_pickup_points": [
            { "dp_id": "PP_001", "location": [50, 50] }
        ],
        "task_parameters": {
            "new_pp_count": 2,
            "max_delivery_radius": 40,
            "interpolation_resolution": 15,
            "optimizer_iterations": 25,
            "seed": 7,
            "grid_bounds": { "x_min": 0, "x_max": 150, "y_min": 0, "y_max": 90 }
        }
    }"#;

    const MINIMAL_DOC: &str = r#"{
        "historical_orders": [
            { "order_id": "A", "delivery_point": [1, 1], "weight": 1 }
        ],
        "task_parameters": {
            "new_pp_count": 1,
            "max_delivery_radius": 50,
            "interpolation_resolution": 10
        }
    }"#;

    #[test]
    fn full_document() {
        let cfg = load_config_reader(Cursor::new(FULL_DOC)).unwrap();
        assert_eq!(cfg.district_count(), 2);
        assert_eq!(cfg.historical_orders.len(), 2);
        assert_eq!(cfg.historical_orders[1].delivery_point, Point::new(250.5, 40.0));
        assert_eq!(cfg.historical_orders[1].weight, 3.0);
        assert_eq!(cfg.existing_pickup_points[0].dp_id, FacilityId::from("PP_001"));

        let plan = cfg.plan_config().unwrap();
        assert_eq!(plan.new_facility_count, 2);
        assert_eq!(plan.max_radius, 40.0);
        assert_eq!(plan.resolution, 15.0);
        assert_eq!(plan.iterations, 25);
        assert_eq!(plan.seed, Some(7));
        assert_eq!(plan.bounds, Bounds::new(0.0, 150.0, 0.0, 90.0));
    }

    #[test]
    fn minimal_document_uses_defaults() {
        let cfg = load_config_reader(Cursor::new(MINIMAL_DOC)).unwrap();
        assert_eq!(cfg.district_count(), 0);
        assert!(cfg.existing_pickup_points.is_empty());

        let plan = cfg.plan_config().unwrap();
        assert_eq!(plan.iterations, 10);
        assert_eq!(plan.seed, None);
        assert_eq!(plan.bounds, Bounds::new(0.0, 300.0, 0.0, 300.0));
    }

    #[test]
    fn missing_task_parameters_is_parse_error() {
        let doc = r#"{ "historical_orders": [] }"#;
        let err = load_config_reader(Cursor::new(doc)).unwrap_err();
        assert!(matches!(err, InputError::Parse(_)), "got {err}");
    }

    #[test]
    fn malformed_point_is_parse_error() {
        let doc = MINIMAL_DOC.replace("[1, 1]", "[1]");
        assert!(matches!(load_config_reader(Cursor::new(doc)), Err(InputError::Parse(_))));
    }

    #[test]
    fn non_positive_resolution_is_config_error() {
        let doc = MINIMAL_DOC.replace("\"interpolation_resolution\": 10", "\"interpolation_resolution\": 0");
        let cfg = load_config_reader(Cursor::new(doc)).unwrap();
        match cfg.plan_config() {
            Err(InputError::Config(PpError::InvalidResolution(r))) => assert_eq!(r, 0.0),
            other => panic!("expected InvalidResolution, got {other:?}"),
        }
    }

    #[test]
    fn inverted_bounds_is_config_error() {
        let doc = FULL_DOC.replace("\"x_max\": 150", "\"x_max\": -5");
        let cfg = load_config_reader(Cursor::new(doc)).unwrap();
        assert!(matches!(cfg.plan_config(), Err(InputError::Config(PpError::InvalidBounds { .. }))));
    }

    #[test]
    fn negative_weight_is_config_error() {
        let doc = FULL_DOC.replace("\"weight\": 3", "\"weight\": -3");
        let cfg = load_config_reader(Cursor::new(doc)).unwrap();
        match cfg.plan_config() {
            Err(InputError::Config(PpError::InvalidWeight { order_id, weight })) => {
                assert_eq!(order_id, "ORD_2");
                assert_eq!(weight, -3.0);
            }
            other => panic!("expected InvalidWeight, got {other:?}"),
        }
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, FULL_DOC).unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.historical_orders.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_config(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
