//! Unit tests for tn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{id_from_f64, parse_id, LinkId, NodeId, TnError, ZoneId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordinal_is_one_based() {
        assert_eq!(NodeId(1).ordinal(), Some(0));
        assert_eq!(NodeId(24).ordinal(), Some(23));
        assert_eq!(NodeId(0).ordinal(), None);
    }

    #[test]
    fn display() {
        assert_eq!(LinkId(7).to_string(), "LinkId(7)");
        assert_eq!(ZoneId(3).to_string(), "ZoneId(3)");
    }

    #[test]
    fn zone_node_conversion() {
        let n: NodeId = ZoneId(5).into();
        assert_eq!(n, NodeId(5));
        let z: ZoneId = NodeId(9).into();
        assert_eq!(z, ZoneId(9));
    }

    #[test]
    fn parse_accepts_integral_floats() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
        assert_eq!(parse_id("3.0").unwrap(), 3);
        assert_eq!("8".parse::<NodeId>().unwrap(), NodeId(8));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("2.5").is_err());
        assert!(parse_id("-1").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn non_numeric_text_is_a_parse_error() {
        assert!(matches!(parse_id("abc"), Err(TnError::Parse(_))));
        assert!(matches!(parse_id(""), Err(TnError::Parse(_))));
        assert!(matches!(parse_id("2.5"), Err(TnError::InvalidId(_))));
        assert!(matches!(parse_id("-1"), Err(TnError::InvalidId(_))));
    }

    #[test]
    fn from_f64_validation() {
        assert_eq!(id_from_f64(4.0).unwrap(), 4);
        assert!(id_from_f64(f64::NAN).is_err());
        assert!(id_from_f64(-3.0).is_err());
        assert!(id_from_f64(1.5).is_err());
        assert!(id_from_f64(1e12).is_err());
    }
}

#[cfg(test)]
mod record {
    use crate::{DemandRow, LinkId, LinkRecord, NodeId, ZoneId};

    fn link() -> LinkRecord {
        LinkRecord {
            id:             LinkId(0),
            tail:           NodeId(1),
            head:           NodeId(2),
            capacity:       100.0,
            length:         1.0,
            free_flow_time: 2.0,
            b:              0.15,
        }
    }

    #[test]
    fn bpr_coefficient_formula() {
        let expected = 2.0 * 0.15 / (100.0f64 / 4000.0).powi(4);
        let got = link().bpr_coefficient();
        assert!((got - expected).abs() / expected < 1e-12, "got {got}");
    }

    #[test]
    fn coefficients_layout() {
        let a = link().coefficients();
        assert_eq!(a[0], 2.0);
        assert_eq!(&a[1..4], &[0.0, 0.0, 0.0]);
        assert_eq!(a[4], link().bpr_coefficient());
    }

    #[test]
    fn attributes_row() {
        assert_eq!(link().attributes(), [100.0, 1.0, 2.0]);
    }

    #[test]
    fn zero_capacity_is_infinite() {
        let mut l = link();
        l.capacity = 0.0;
        assert!(l.bpr_coefficient().is_infinite());
    }

    #[test]
    fn demand_row_from_array() {
        let r = DemandRow::from_array([3.0, 7.0, 12.5]).unwrap();
        assert_eq!(r.origin, ZoneId(3));
        assert_eq!(r.destination, ZoneId(7));
        assert_eq!(r.demand, 12.5);
        assert!(DemandRow::from_array([0.5, 7.0, 1.0]).is_err());
    }
}

#[cfg(test)]
mod demand {
    use crate::{DemandMap, DemandRow, TripEntry, ZoneId};

    fn rows() -> Vec<DemandRow> {
        vec![
            DemandRow::new(2, 1, 4.0),
            DemandRow::new(1, 3, 10.0),
            DemandRow::new(1, 2, 5.0),
            DemandRow::new(2, 3, 1.5),
        ]
    }

    #[test]
    fn origins_ascending_destinations_in_insertion_order() {
        let map = DemandMap::from_rows(&rows());
        let origins: Vec<_> = map.origins().collect();
        assert_eq!(origins, vec![ZoneId(1), ZoneId(2)]);
        assert_eq!(map.destinations(ZoneId(1)), &[(ZoneId(3), 10.0), (ZoneId(2), 5.0)]);
    }

    #[test]
    fn totals() {
        let map = DemandMap::from_rows(&rows());
        assert_eq!(map.origin_total(ZoneId(1)), 15.0);
        assert_eq!(map.origin_total(ZoneId(2)), 5.5);
        assert_eq!(map.total(), 20.5);
        assert_eq!(map.pair_count(), 4);
    }

    #[test]
    fn entries_and_rows_constructors_agree() {
        let from_rows = DemandMap::from_rows(&rows());
        let entries: Vec<TripEntry> = from_rows.entries().collect();
        let from_entries = DemandMap::from_entries(entries);
        assert_eq!(from_rows, from_entries);
    }

    #[test]
    fn entries_flatten_in_canonical_order() {
        let map = DemandMap::from_rows(&rows());
        let flat: Vec<(u32, u32)> = map
            .entries()
            .map(|e| (e.origin.0, e.destination.0))
            .collect();
        assert_eq!(flat, vec![(1, 3), (1, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn empty_origin_is_kept() {
        let mut map = DemandMap::new();
        assert!(map.ensure_origin(ZoneId(4)));
        assert!(!map.ensure_origin(ZoneId(4)));
        assert!(map.contains_origin(ZoneId(4)));
        assert!(map.destinations(ZoneId(4)).is_empty());
        assert_eq!(map.origin_count(), 1);
        assert_eq!(map.pair_count(), 0);
    }

    #[test]
    fn unknown_origin_is_empty() {
        let map = DemandMap::new();
        assert!(map.destinations(ZoneId(1)).is_empty());
        assert_eq!(map.origin_total(ZoneId(1)), 0.0);
        assert!(map.is_empty());
    }
}

#[cfg(test)]
mod metadata {
    use crate::Metadata;

    #[test]
    fn parse_line() {
        assert_eq!(
            Metadata::parse_line("<NUMBER OF ZONES> 24"),
            Some(("NUMBER OF ZONES".to_owned(), "24".to_owned()))
        );
        assert_eq!(Metadata::parse_line("Origin 1"), None);
        assert_eq!(Metadata::parse_line("~ tail head"), None);
    }

    #[test]
    fn absorb_and_typed_getters() {
        let mut m = Metadata::new();
        assert!(m.absorb_line("<NUMBER OF ZONES> 24"));
        assert!(m.absorb_line("<NUMBER OF NODES> 24"));
        assert!(m.absorb_line("<FIRST THRU NODE> 1"));
        assert!(m.absorb_line("<NUMBER OF LINKS> 76"));
        assert!(m.absorb_line("<TOTAL OD FLOW> 360600.0"));
        assert!(m.absorb_line("<END OF METADATA>"));
        assert!(!m.absorb_line("  "));

        assert_eq!(m.len(), 5); // END OF METADATA is not stored
        assert_eq!(m.number_of_zones(), Some(24));
        assert_eq!(m.number_of_nodes(), Some(24));
        assert_eq!(m.first_thru_node(), Some(1));
        assert_eq!(m.number_of_links(), Some(76));
        assert_eq!(m.total_od_flow(), Some(360600.0));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut m = Metadata::new();
        m.insert("A", "1");
        m.insert("B", "2");
        m.insert("A", "3");
        let pairs: Vec<_> = m.iter().collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
    }
}
