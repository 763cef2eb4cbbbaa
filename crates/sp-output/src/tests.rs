//! Integration tests for sp-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{RoomRow, SnapshotRow, TraceRow};
    use crate::writer::LayoutWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn room_row(agent_id: u32, name: &str) -> RoomRow {
        RoomRow {
            agent_id,
            name:   name.to_string(),
            shape:  "circle".to_string(),
            floor:  0,
            x:      1.5,
            y:      -2.0,
            width:  3.0,
            height: 3.0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("layout.csv").exists());
        assert!(dir.path().join("trace.csv").exists());
        assert!(dir.path().join("snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("layout.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "name", "shape", "floor", "x", "y", "width", "height"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("trace.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["iteration", "moved"]);

        let mut rdr3 = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let headers3: Vec<_> = rdr3.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers3, ["iteration", "agent_id", "x", "y"]);
    }

    #[test]
    fn csv_layout_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_layout(&[room_row(0, "hall"), room_row(1, "studio")]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("layout.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "hall");
        assert_eq!(&rows[0][2], "circle");
        assert_eq!(&rows[0][4], "1.5"); // x
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "studio");
    }

    #[test]
    fn csv_trace_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trace(&TraceRow { iteration: 3, moved: 0.5 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trace.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "0.5");
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![
            SnapshotRow { iteration: 2, agent_id: 0, x: 1.0, y: 0.0 },
            SnapshotRow { iteration: 2, agent_id: 1, x: 9.0, y: 0.0 },
        ];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "2"); // iteration
        assert_eq!(&read_rows[0][1], "0"); // agent_id
        assert_eq!(&read_rows[1][2], "9");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_layout(&[]).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        use sp_agent::AgentStoreBuilder;
        use sp_core::{RelaxConfig, Vec2};
        use sp_program::{RoomShape, RoomSpec};
        use sp_relax::RelaxBuilder;

        use crate::observer::RelaxOutputObserver;

        // Two unit circles 10 apart: displacement halves every sweep and the
        // run converges after exactly 9 sweeps.
        let (store, _rngs) = AgentStoreBuilder::new(42)
            .room(
                RoomSpec::new("a", RoomShape::Circle { radius: 1.0 })
                    .at(Vec2::new(0.0, 0.0))
                    .adjacent_to("b"),
            )
            .room(RoomSpec::new("b", RoomShape::Circle { radius: 1.0 }).at(Vec2::new(10.0, 0.0)))
            .build()
            .unwrap();
        let config = RelaxConfig { snapshot_interval: 2, ..RelaxConfig::default() };
        let mut engine = RelaxBuilder::new(config, store).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = RelaxOutputObserver::new(writer);
        let outcome = engine.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(outcome.iterations, 9);

        // One trace row per sweep.
        let mut rdr = csv::Reader::from_path(dir.path().join("trace.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "2"); // first sweep moves 0.5 * 8 / 2

        // snapshot_interval = 2 → snapshots at sweeps 2, 4, 6, 8 (4 × 2 agents).
        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 8, "expected 4 snapshots × 2 agents, got {}", rows.len());

        // Final layout: both rooms, settled just short of contact.
        let mut rdr = csv::Reader::from_path(dir.path().join("layout.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "a");
        assert_eq!(&rows[0][2], "circle");
        let x: f64 = rows[0][4].parse().unwrap();
        assert!(x > 3.9 && x < 4.0, "x = {x}");
    }
}

// ── SVG rendering ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod svg_tests {
    use sp_agent::{AgentStore, AgentStoreBuilder};
    use sp_core::{FloorId, Rect, Vec2};
    use sp_geom::Polygon;
    use sp_program::{RoomShape, RoomSpec};

    use crate::svg::SvgRenderer;

    fn two_floor_store() -> AgentStore {
        let (store, _rngs) = AgentStoreBuilder::new(7)
            .room(
                RoomSpec::new("hall", RoomShape::Circle { radius: 2.0 }).at(Vec2::new(0.0, 0.0)),
            )
            .room(
                RoomSpec::new("studio", RoomShape::RectArea { area: 16.0, aspect: Some(1.0) })
                    .at(Vec2::new(6.0, 0.0))
                    .on_floor(FloorId(1)),
            )
            .build()
            .unwrap();
        store
    }

    #[test]
    fn layout_svg_is_well_formed() {
        let store = two_floor_store();
        let svg = SvgRenderer::default().render_layout(&store, None);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("hall"));
        assert!(svg.contains("studio"));
    }

    #[test]
    fn boundary_is_drawn_once_per_floor_band() {
        let store = two_floor_store();
        let site = Polygon::rectangle(Rect::new(Vec2::new(-5.0, -5.0), Vec2::new(10.0, 5.0)));
        let svg = SvgRenderer::default().render_layout(&store, Some(&site));
        assert_eq!(svg.matches("<polygon").count(), 2);
    }

    #[test]
    fn stairs_draw_as_lines_between_bands() {
        let store = two_floor_store();
        let svg = SvgRenderer::default().render_layout(&store, None);
        assert!(svg.contains("<line"), "two floors need a stair connector");

        let (single, _rngs) = AgentStoreBuilder::new(7)
            .room(RoomSpec::new("hall", RoomShape::Circle { radius: 2.0 }).at(Vec2::ZERO))
            .build()
            .unwrap();
        let svg = SvgRenderer::default().render_layout(&single, None);
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn markup_in_names_is_escaped() {
        let (store, _rngs) = AgentStoreBuilder::new(7)
            .room(RoomSpec::new("r&d <lab>", RoomShape::Circle { radius: 1.0 }).at(Vec2::ZERO))
            .build()
            .unwrap();
        let svg = SvgRenderer::default().render_layout(&store, None);
        assert!(svg.contains("r&amp;d &lt;lab&gt;"));
        assert!(!svg.contains("<lab>"));
    }

    #[test]
    fn pieces_svg_draws_each_piece() {
        use sp_subdiv::{Axis, SplitStep, subdivide};

        let site = Polygon::rectangle(Rect::new(Vec2::new(0.0, 0.0), Vec2::new(8.0, 8.0)));
        let pieces = subdivide(
            &site,
            &[SplitStep::new(Axis::X, 0.5), SplitStep::new(Axis::Y, 0.5)],
        )
        .unwrap();
        let svg = SvgRenderer::default().render_pieces(&pieces);
        assert_eq!(svg.matches("<polygon").count(), 3);
        assert!(svg.contains(">2</text>"));
    }

    #[test]
    fn empty_piece_list_renders_a_placeholder() {
        let svg = SvgRenderer::default().render_pieces(&[]);
        assert!(svg.contains("no pieces"));
        assert!(svg.ends_with("</svg>\n"));
    }
}
