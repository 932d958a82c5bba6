//! Unit tests for tn-spatial.
//!
//! All tests use hand-built node and link tables.

#[cfg(test)]
mod helpers {
    use tn_core::{GeoNode, LinkId, LinkRecord, NodeId};

    use crate::NodeTable;

    pub fn link(id: u32, tail: u32, head: u32) -> LinkRecord {
        LinkRecord {
            id:             LinkId(id),
            tail:           NodeId(tail),
            head:           NodeId(head),
            capacity:       1000.0 + id as f64,
            length:         2.0,
            free_flow_time: 3.0,
            b:              0.15,
        }
    }

    /// Nodes 1..=4 on a unit square (lat, lon):
    ///
    ///   4:(1,0)   3:(1,1)
    ///   1:(0,0)   2:(0,1)
    pub fn dense_square() -> NodeTable {
        NodeTable::new(vec![
            GeoNode::new(NodeId(1), 0.0, 0.0),
            GeoNode::new(NodeId(2), 0.0, 1.0),
            GeoNode::new(NodeId(3), 1.0, 1.0),
            GeoNode::new(NodeId(4), 1.0, 0.0),
        ])
    }

    pub fn ring_links() -> Vec<LinkRecord> {
        vec![link(0, 1, 2), link(1, 2, 3), link(2, 3, 4), link(3, 4, 1)]
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod projection {
    use tn_core::{NodeId, NodeRecord};

    use crate::{project_nodes, Axis, GeoBounds, PlanarExtent, SpatialError};

    const UNIT: GeoBounds = GeoBounds { min_lon: -1.0, max_lon: 1.0, min_lat: -1.0, max_lat: 1.0 };

    #[test]
    fn scenario_three_nodes_to_unit_box() {
        let nodes = vec![
            NodeRecord::new(NodeId(1), 0.0, 0.0),
            NodeRecord::new(NodeId(2), 10.0, 0.0),
            NodeRecord::new(NodeId(3), 0.0, 10.0),
        ];
        let geo = project_nodes(&nodes, UNIT).unwrap();
        assert_eq!((geo[0].pos.lat, geo[0].pos.lon), (-1.0, -1.0));
        assert_eq!((geo[1].pos.lat, geo[1].pos.lon), (-1.0, 1.0));
        assert_eq!((geo[2].pos.lat, geo[2].pos.lon), (1.0, -1.0));
        assert_eq!(geo[2].id, NodeId(3));
    }

    #[test]
    fn extrema_are_independent() {
        let nodes = vec![
            NodeRecord::new(NodeId(1), 5.0, -3.0),
            NodeRecord::new(NodeId(2), -2.0, 7.0),
            NodeRecord::new(NodeId(3), 9.0, 1.0),
        ];
        let e = PlanarExtent::scan(&nodes).unwrap();
        assert_eq!(e, PlanarExtent { min_x: -2.0, max_x: 9.0, min_y: -3.0, max_y: 7.0 });
    }

    #[test]
    fn longitude_strictly_increases_with_x() {
        let xs = [3.0, 3.5, 10.0, 11.25, 40.0];
        let nodes: Vec<_> = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| NodeRecord::new(NodeId(i as u32 + 1), x, (i * i) as f64))
            .collect();
        let bounds = GeoBounds { min_lon: -122.5, max_lon: -121.75, min_lat: 37.25, max_lat: 37.75 };
        let geo = project_nodes(&nodes, bounds).unwrap();
        for w in geo.windows(2) {
            assert!(w[0].pos.lon < w[1].pos.lon, "{} !< {}", w[0].pos.lon, w[1].pos.lon);
        }
        assert_eq!(geo[0].pos.lon, bounds.min_lon);
        assert_eq!(geo[4].pos.lon, bounds.max_lon);
        assert_eq!(geo[0].pos.lat, bounds.min_lat);
        assert_eq!(geo[4].pos.lat, bounds.max_lat);
    }

    #[test]
    fn degenerate_x_axis_errors() {
        let nodes = vec![NodeRecord::new(NodeId(1), 4.0, 0.0), NodeRecord::new(NodeId(2), 4.0, 1.0)];
        let err = project_nodes(&nodes, UNIT).unwrap_err();
        assert!(
            matches!(err, SpatialError::DegenerateProjection { axis: Axis::X, value } if value == 4.0),
            "got {err:?}"
        );
    }

    #[test]
    fn degenerate_y_axis_errors() {
        let nodes = vec![NodeRecord::new(NodeId(1), 0.0, 2.0), NodeRecord::new(NodeId(2), 1.0, 2.0)];
        let err = project_nodes(&nodes, UNIT).unwrap_err();
        assert!(matches!(err, SpatialError::DegenerateProjection { axis: Axis::Y, .. }), "got {err:?}");
    }

    #[test]
    fn single_node_is_degenerate() {
        let err = project_nodes(&[NodeRecord::new(NodeId(1), 0.0, 0.0)], UNIT).unwrap_err();
        assert!(matches!(err, SpatialError::DegenerateProjection { .. }));
    }

    #[test]
    fn empty_table_errors() {
        let err = project_nodes(&[], UNIT).unwrap_err();
        assert!(matches!(err, SpatialError::EmptyNodeTable));
    }
}

// ── Node table ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod nodes {
    use tn_core::{GeoNode, NodeId};

    use crate::{NodeTable, SpatialError};

    #[test]
    fn dense_detection() {
        assert!(super::helpers::dense_square().is_dense());
        assert!(NodeTable::default().is_dense());

        let gap = NodeTable::new(vec![GeoNode::new(NodeId(1), 0.0, 0.0), GeoNode::new(NodeId(3), 0.0, 0.0)]);
        let err = gap.check_dense().unwrap_err();
        assert!(
            matches!(err, SpatialError::NotDense { row: 1, expected: 2, found: NodeId(3) }),
            "got {err:?}"
        );

        let zero_based = NodeTable::new(vec![GeoNode::new(NodeId(0), 0.0, 0.0)]);
        assert!(!zero_based.is_dense());
    }

    #[test]
    fn lookups() {
        let t = super::helpers::dense_square();
        assert_eq!(t.find(NodeId(3)), t.by_ordinal(NodeId(3)));
        assert_eq!(t.find(NodeId(9)), None);
        assert_eq!(t.by_ordinal(NodeId(9)), None);
        assert_eq!(t.by_ordinal(NodeId(0)), None);
    }
}

// ── Joins ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod join {
    use tn_core::{DemandRow, GeoNode, GeoPoint, NodeId};

    use super::helpers::{dense_square, link, ring_links};
    use crate::{join_demand, join_links, JoinStrategy, JoinedLinkFeature, NodeTable, SpatialError};

    fn attrs(n: usize) -> Vec<Vec<f64>> {
        (0..n).map(|i| vec![i as f64, 10.0 * i as f64]).collect()
    }

    #[test]
    fn ordered_and_scanning_agree_on_dense_table() {
        let nodes = dense_square();
        let links = ring_links();
        let a = attrs(links.len());
        let ordered = join_links(&links, &nodes, &a, JoinStrategy::Ordered).unwrap();
        let scanning = join_links(&links, &nodes, &a, JoinStrategy::Scanning).unwrap();
        assert_eq!(ordered, scanning);
        assert_eq!(ordered[1].from, GeoPoint::new(0.0, 1.0));
        assert_eq!(ordered[1].to, GeoPoint::new(1.0, 1.0));
        assert_eq!(ordered[1].attributes, vec![1.0, 10.0]);
    }

    #[test]
    fn link_features_from_record_attributes() {
        let links = ring_links();
        let a: Vec<[f64; 3]> = links.iter().map(|l| l.attributes()).collect();
        let joined = join_links(&links, &dense_square(), &a, JoinStrategy::Auto).unwrap();
        assert_eq!(joined[2].attributes, vec![1002.0, 2.0, 3.0]);
    }

    #[test]
    fn scanning_handles_unordered_sparse_table() {
        let nodes = NodeTable::new(vec![
            GeoNode::new(NodeId(40), 4.0, 4.0),
            GeoNode::new(NodeId(10), 1.0, 1.0),
        ]);
        let links = vec![link(0, 10, 40)];
        let joined = join_links(&links, &nodes, &attrs(1), JoinStrategy::Scanning).unwrap();
        assert_eq!(joined[0].from, GeoPoint::new(1.0, 1.0));
        assert_eq!(joined[0].to, GeoPoint::new(4.0, 4.0));

        // Auto falls back to scanning on the same table.
        let auto = join_links(&links, &nodes, &attrs(1), JoinStrategy::Auto).unwrap();
        assert_eq!(auto, joined);
    }

    #[test]
    fn ordered_rejects_sparse_table() {
        let nodes = NodeTable::new(vec![
            GeoNode::new(NodeId(2), 0.0, 0.0),
            GeoNode::new(NodeId(1), 1.0, 1.0),
        ]);
        let err = join_links(&[link(0, 1, 2)], &nodes, &attrs(1), JoinStrategy::Ordered).unwrap_err();
        assert!(matches!(err, SpatialError::NotDense { row: 0, .. }), "got {err:?}");
    }

    #[test]
    fn missing_endpoint_is_join_error() {
        let links = vec![link(0, 1, 2), link(1, 2, 7)];
        let err = join_links(&links, &dense_square(), &attrs(2), JoinStrategy::Scanning).unwrap_err();
        assert!(matches!(err, SpatialError::Join { row: 1, node: NodeId(7) }), "got {err:?}");

        let err = join_links(&links, &dense_square(), &attrs(2), JoinStrategy::Ordered).unwrap_err();
        assert!(matches!(err, SpatialError::Join { row: 1, node: NodeId(7) }), "got {err:?}");
    }

    #[test]
    fn attribute_rows_must_match_links() {
        let err = join_links(&ring_links(), &dense_square(), &attrs(3), JoinStrategy::Auto).unwrap_err();
        assert!(matches!(err, SpatialError::AttributeMismatch { expected: 4, got: 3 }), "got {err:?}");
    }

    #[test]
    fn demand_join() {
        let rows = vec![DemandRow::new(1, 3, 12.0), DemandRow::new(4, 2, 0.5)];
        let joined = join_demand(&dense_square(), &rows).unwrap();
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].from, GeoPoint::new(0.0, 0.0));
        assert_eq!(joined[0].to, GeoPoint::new(1.0, 1.0));
        assert_eq!(joined[1].demand, 0.5);

        let line: JoinedLinkFeature = joined[0].into();
        assert_eq!(line.attributes, vec![12.0]);
    }

    #[test]
    fn demand_join_errors() {
        let err = join_demand(&dense_square(), &[DemandRow::new(1, 5, 1.0)]).unwrap_err();
        assert!(matches!(err, SpatialError::Join { row: 0, node: NodeId(5) }), "got {err:?}");

        let sparse = NodeTable::new(vec![GeoNode::new(NodeId(3), 0.0, 0.0)]);
        let err = join_demand(&sparse, &[DemandRow::new(3, 3, 1.0)]).unwrap_err();
        assert!(matches!(err, SpatialError::NotDense { .. }), "got {err:?}");
    }
}

// ── Result remapping ──────────────────────────────────────────────────────────

#[cfg(test)]
mod results {
    use tn_core::NodeId;

    use crate::remap_results;

    #[test]
    fn values_follow_link_order() {
        let links = vec![(NodeId(1), NodeId(2)), (NodeId(2), NodeId(3)), (NodeId(3), NodeId(1))];
        let raw = vec![[3.0, 1.0, 30.0], [1.0, 2.0, 10.0], [2.0, 3.0, 20.0]];
        assert_eq!(remap_results(&links, &raw), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn missing_link_is_zero_and_last_duplicate_wins() {
        let links = vec![(NodeId(1), NodeId(2)), (NodeId(5), NodeId(6))];
        let raw = vec![[1.0, 2.0, 1.0], [1.0, 2.0, 2.0], [1.5, 2.0, 9.0]];
        assert_eq!(remap_results(&links, &raw), vec![2.0, 0.0]);
    }
}
