//! Integration tests for pp-output.

#[cfg(test)]
mod helpers {
    use pp_core::{Bounds, Facility, Order, PlacementRng, PlanConfig, Point};
    use pp_plan::{NoopObserver, PlanOutcome, PlannerBuilder};

    /// A small seeded run: 12 orders in three clumps, one existing point,
    /// two new points.
    pub fn outcome() -> PlanOutcome {
        let clumps = [(10.0, 10.0), (80.0, 20.0), (50.0, 90.0)];
        let mut orders = Vec::new();
        for (cx, cy) in clumps {
            for d in [0.0, 1.0, 2.0, 3.0] {
                let id = format!("ORD_{}", orders.len() + 1);
                orders.push(Order::new(id, Point::new(cx + d, cy - d), 1.0 + d));
            }
        }
        let config = PlanConfig {
            bounds:             Bounds::new(0.0, 100.0, 0.0, 100.0),
            resolution:         20.0,
            new_facility_count: 2,
            max_radius:         15.0,
            iterations:         10,
            seed:               None,
        };
        PlannerBuilder::new(config, orders)
            .existing_facilities(vec![Facility::new("PP_001", Point::new(12.0, 9.0))])
            .rng(PlacementRng::new(5))
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap()
    }

    pub fn tmp() -> tempfile::TempDir {
        tempfile::tempdir().expect("create temp dir")
    }
}

#[cfg(test)]
mod json_tests {
    use serde_json::Value;

    use super::helpers::{outcome, tmp};
    use crate::json::RESULT_FILE;
    use crate::{JsonWriter, OutputWriter};

    fn written_document() -> Value {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_outcome(&outcome()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let text = std::fs::read_to_string(dir.path().join(RESULT_FILE)).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn top_level_keys() {
        let doc = written_document();
        for key in ["demand_density_map", "new_delivery_points", "delivery_zones", "metrics"] {
            assert!(doc.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn density_map_section() {
        let doc = written_document();
        let map = &doc["demand_density_map"];
        assert_eq!(map["resolution"], 20.0);
        assert_eq!(map["grid_bounds"]["x_max"], 100.0);
        let matrix = map["density_matrix"].as_array().unwrap();
        assert_eq!(matrix.len(), 5);
        assert!(matrix.iter().all(|row| row.as_array().unwrap().len() == 5));
    }

    #[test]
    fn new_points_are_rounded_and_numbered() {
        let doc = written_document();
        let points = doc["new_delivery_points"].as_array().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0]["dp_id"], "PP_NEW_1");
        assert_eq!(points[1]["dp_id"], "PP_NEW_2");
        for p in points {
            for c in p["location"].as_array().unwrap() {
                let v = c.as_f64().unwrap();
                assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-9, "{v} not rounded to 0.1");
            }
        }
    }

    #[test]
    fn zones_cover_every_facility_and_every_order() {
        let doc = written_document();
        let zones = doc["delivery_zones"].as_array().unwrap();
        assert_eq!(zones.len(), 3);
        assert_eq!(zones[0]["dp_id"], "PP_001");
        assert_eq!(zones[0]["location"][0], 12.0);
        let total: u64 = zones.iter().map(|z| z["estimated_orders"].as_u64().unwrap()).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn metrics_section_is_rounded() {
        let doc = written_document();
        let m = &doc["metrics"];
        let cov = m["coverage_efficiency"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&cov));
        assert!(((cov * 1000.0).round() - cov * 1000.0).abs() < 1e-9);
        assert!(m["load_imbalance"].as_f64().unwrap() >= 0.0);
    }
}

#[cfg(test)]
mod csv_tests {
    use super::helpers::{outcome, tmp};
    use crate::{CsvWriter, OutputWriter, ZoneRow};

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("assignments.csv").exists());
        assert!(dir.path().join("delivery_zones.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("assignments.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["order_id", "assigned_to", "distance"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("delivery_zones.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["dp_id", "x", "y", "estimated_orders", "is_new"]);
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let out = outcome();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_outcome(&out).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("assignments.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12);
        assert_eq!(&rows[0][0], "ORD_1");

        let mut rdr = csv::Reader::from_path(dir.path().join("delivery_zones.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "PP_001");
        assert_eq!(&rows[0][4], "0");
        assert_eq!(&rows[2][0], "PP_NEW_2");
        assert_eq!(&rows[2][4], "1");
    }

    #[test]
    fn zone_rows_match_load_table() {
        let out = outcome();
        let rows = ZoneRow::from_outcome(&out);
        for (row, load) in rows.iter().zip(out.assignment.loads.iter()) {
            assert_eq!(row.dp_id, load.dp_id.as_str());
            assert_eq!(row.estimated_orders, load.orders);
        }
        assert_eq!(rows.iter().filter(|r| r.is_new).count(), 2);
    }
}
