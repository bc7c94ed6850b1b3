//! Unit tests for cr-network.
//!
//! All tests use hand-crafted networks.

#[cfg(test)]
mod helpers {
    use cr_core::GeoPoint;

    use crate::{NodeKind, RoadNetwork, RoadNetworkBuilder};

    /// Small triangle plus a spur:
    ///
    /// ```text
    ///   X --5-- Y --5-- Z        P --4-- Q   (separate component)
    ///    \_____20______/
    /// ```
    pub fn triangle() -> RoadNetwork {
        let mut b = RoadNetworkBuilder::new();
        b.add_node("X", Some(GeoPoint::new(0.0, 0.0)));
        b.add_node("Y", Some(GeoPoint::new(0.0, 1.0)));
        b.add_node("Z", Some(GeoPoint::new(1.0, 1.0)));
        b.add_edge("X", "Y", 5.0).unwrap();
        b.add_edge("Y", "Z", 5.0).unwrap();
        b.add_edge("X", "Z", 20.0).unwrap();
        b.add_edge("P", "Q", 4.0).unwrap();
        b.set_node_kind("Q", NodeKind::Residential);
        b.build()
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use cr_core::{TimeOfDay, TimeWeights};

    use crate::{NetworkError, NodeKind, RoadNetwork, RoadNetworkBuilder};

    #[test]
    fn empty_build() {
        let net = RoadNetwork::empty();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
        assert!(net.center().is_none());
    }

    #[test]
    fn edges_create_nodes() {
        let net = super::helpers::triangle();
        assert_eq!(net.node_count(), 5);
        assert_eq!(net.edge_count(), 4);
        assert!(net.node_id("P").is_some());
        assert!(net.node_id("Nowhere").is_none());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let net = super::helpers::triangle();
        let x = net.node_id("X").unwrap();
        let y = net.node_id("Y").unwrap();
        let z = net.node_id("Z").unwrap();

        let mut nx: Vec<_> = net.neighbors(x).collect();
        nx.sort();
        assert_eq!(nx, vec![y, z]);
        assert_eq!(net.degree(y), 2);

        let xy = net.find_arc(x, y).unwrap();
        let yx = net.find_arc(y, x).unwrap();
        assert_eq!(xy.reverse(), yx);
        assert_eq!(net.arc_from(xy), x);
        assert_eq!(net.arc_to(xy), y);
        assert_eq!(net.base_weight(xy), 5.0);
        assert_eq!(net.base_weight(yx), 5.0);
    }

    #[test]
    fn out_arcs_leave_their_node() {
        let net = super::helpers::triangle();
        for node in (0..net.node_count()).map(|i| cr_core::NodeId(i as u32)) {
            for arc in net.out_arcs(node) {
                assert_eq!(net.arc_from(arc), node);
            }
        }
    }

    #[test]
    fn negative_weight_rejected() {
        let mut b = RoadNetworkBuilder::new();
        let err = b.add_edge("A", "B", -1.0).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidEdge { .. }));
        assert!(b.add_edge("A", "B", f64::NAN).is_err());
        assert_eq!(b.edge_count(), 0);
    }

    #[test]
    fn self_loop_rejected() {
        let mut b = RoadNetworkBuilder::new();
        assert!(matches!(b.add_edge("A", "A", 1.0), Err(NetworkError::InvalidEdge { .. })));
    }

    #[test]
    fn duplicate_edge_replaces_weight() {
        let mut b = RoadNetworkBuilder::new();
        let first = b.add_edge("A", "B", 3.0).unwrap();
        let again = b.add_edge("B", "A", 7.0).unwrap();
        assert_eq!(first, again);
        let net = b.build();
        assert_eq!(net.edge_count(), 1);
        let arc = net.arc_between("A", "B").unwrap();
        assert_eq!(net.base_weight(arc), 7.0);
    }

    #[test]
    fn zero_weight_allowed() {
        let mut b = RoadNetworkBuilder::new();
        assert!(b.add_edge("A", "B", 0.0).is_ok());
    }

    #[test]
    fn time_weights_shared_by_both_directions() {
        let mut b = RoadNetworkBuilder::new();
        b.add_edge("A", "B", 10.0).unwrap();
        let tw = TimeWeights::new(15.0, 12.0, 18.0, 9.0).unwrap();
        b.set_time_weights("A", "B", tw.iter()).unwrap();
        let net = b.build();

        assert_eq!(net.time_weights_between("A", "B"), Some(&tw));
        assert_eq!(net.time_weights_between("B", "A"), Some(&tw));
        assert_eq!(net.time_weight_tables().len(), 1);
    }

    #[test]
    fn incomplete_time_table_is_invalid_edge() {
        let mut b = RoadNetworkBuilder::new();
        b.add_edge("A", "B", 10.0).unwrap();
        let err = b
            .set_time_weights("A", "B", [(TimeOfDay::Morning, 1.0)])
            .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidEdge { .. }));
        assert!(b.build().time_weights_between("A", "B").is_none());
    }

    #[test]
    fn time_table_on_missing_edge() {
        let mut b = RoadNetworkBuilder::new();
        b.add_edge("A", "B", 10.0).unwrap();
        b.add_node("C", None);
        let tw = TimeWeights::new(1.0, 1.0, 1.0, 1.0).unwrap();
        let err = b.set_time_weights("A", "C", tw.iter()).unwrap_err();
        assert_eq!(err, NetworkError::NoSuchEdge { from: "A".into(), to: "C".into() });
    }

    #[test]
    fn node_kinds() {
        let net = super::helpers::triangle();
        assert_eq!(net.node_kind(net.node_id("Q").unwrap()), NodeKind::Residential);
        assert_eq!(net.node_kind(net.node_id("X").unwrap()), NodeKind::General);
    }

    #[test]
    fn require_node_reports_name() {
        let net = super::helpers::triangle();
        assert_eq!(
            net.require_node("Nowhere").unwrap_err(),
            NetworkError::NodeNotFound("Nowhere".into())
        );
    }
}

// ── Overlays ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod overlays {
    use crate::NetworkError;

    #[test]
    fn congestion_zone_is_symmetric() {
        let mut net = super::helpers::triangle();
        net.mark_congestion_zone("X", "Y").unwrap();
        assert!(net.has_congestion_zone("X", "Y"));
        assert!(net.has_congestion_zone("Y", "X"));
        assert_eq!(net.congestion_zones().len(), 2);

        assert!(net.clear_congestion_zone("Y", "X").unwrap());
        assert!(!net.has_congestion_zone("X", "Y"));
        assert!(!net.has_congestion_zone("Y", "X"));
        assert!(!net.clear_congestion_zone("X", "Y").unwrap());
    }

    #[test]
    fn congestion_on_missing_edge_mutates_nothing() {
        let mut net = super::helpers::triangle();
        let err = net.mark_congestion_zone("X", "P").unwrap_err();
        assert!(matches!(err, NetworkError::NoSuchEdge { .. }));
        assert!(net.mark_congestion_zone("X", "Nowhere").is_err());
        assert!(net.clear_congestion_zone("X", "P").is_err());
        assert!(net.congestion_zones().is_empty());
    }

    #[test]
    fn report_above_threshold_raises_alert_both_ways() {
        let mut b = crate::RoadNetworkBuilder::new();
        b.add_edge("X", "Y", 10.0).unwrap();
        let mut net = b.build();

        // 6 > 10 * 0.5
        assert!(net.report_delay("X", "Y", 6.0).unwrap());
        assert_eq!(net.user_report("X", "Y"), Some(6.0));
        assert_eq!(net.user_report("Y", "X"), Some(6.0));
        assert!(net.has_traffic_alert("X", "Y"));
        assert!(net.has_traffic_alert("Y", "X"));
        assert_eq!(net.traffic_alerts().len(), 2);
    }

    #[test]
    fn report_at_threshold_does_not_alert() {
        let mut b = crate::RoadNetworkBuilder::new();
        b.add_edge("X", "Y", 10.0).unwrap();
        let mut net = b.build();

        assert!(!net.report_delay("X", "Y", 5.0).unwrap());
        assert_eq!(net.user_report("X", "Y"), Some(5.0));
        assert!(!net.has_traffic_alert("X", "Y"));
        assert!(net.traffic_alerts().is_empty());
    }

    #[test]
    fn later_report_replaces_earlier() {
        let mut net = super::helpers::triangle();
        net.report_delay("X", "Y", 2.0).unwrap();
        net.report_delay("Y", "X", 1.0).unwrap();
        assert_eq!(net.user_report("X", "Y"), Some(1.0));
        assert_eq!(net.user_reports().len(), 2);
    }

    #[test]
    fn alert_survives_smaller_report() {
        let mut net = super::helpers::triangle();
        net.report_delay("X", "Y", 10.0).unwrap();
        net.report_delay("X", "Y", 0.5).unwrap();
        assert!(net.has_traffic_alert("X", "Y"));
    }

    #[test]
    fn threshold_uses_base_weight_not_time_weight() {
        let mut b = crate::RoadNetworkBuilder::new();
        b.add_edge("A", "B", 10.0).unwrap();
        let tw = cr_core::TimeWeights::new(100.0, 100.0, 100.0, 100.0).unwrap();
        b.set_time_weights("A", "B", tw.iter()).unwrap();
        let mut net = b.build();
        // Against the time weight (100) a 6-minute delay would not alert.
        assert!(net.report_delay("A", "B", 6.0).unwrap());
    }

    #[test]
    fn report_on_missing_edge_mutates_nothing() {
        let mut net = super::helpers::triangle();
        let err = net.report_delay("X", "Q", 30.0).unwrap_err();
        assert_eq!(err, NetworkError::NoSuchEdge { from: "X".into(), to: "Q".into() });
        assert!(net.user_reports().is_empty());
        assert!(net.traffic_alerts().is_empty());
    }

    #[test]
    fn negative_delay_rejected() {
        let mut net = super::helpers::triangle();
        assert!(matches!(
            net.report_delay("X", "Y", -3.0),
            Err(NetworkError::InvalidDelay { .. })
        ));
        assert!(net.user_report("X", "Y").is_none());
    }

    #[test]
    fn clear_reports_keeps_congestion() {
        let mut net = super::helpers::triangle();
        net.mark_congestion_zone("Y", "Z").unwrap();
        net.report_delay("X", "Y", 50.0).unwrap();
        net.flag_traffic_alert("P", "Q").unwrap();
        assert_eq!(net.traffic_alerts().len(), 4);

        net.clear_reports();
        assert!(net.user_reports().is_empty());
        assert!(net.traffic_alerts().is_empty());
        assert!(net.has_congestion_zone("Y", "Z"));
        assert!(net.has_congestion_zone("Z", "Y"));
    }

    #[test]
    fn custom_alert_threshold() {
        let cfg = cr_core::RoutingConfig { alert_threshold_factor: 2.0, ..Default::default() };
        let mut b = crate::RoadNetworkBuilder::with_config(cfg).unwrap();
        b.add_edge("A", "B", 10.0).unwrap();
        let mut net = b.build();
        assert!(!net.report_delay("A", "B", 6.0).unwrap());
        assert!(net.report_delay("A", "B", 10.5).unwrap());
    }
}

// ── Spatial helpers ───────────────────────────────────────────────────────────

#[cfg(test)]
mod spatial {
    use cr_core::GeoPoint;

    #[test]
    fn snap_nearest() {
        let net = super::helpers::triangle();
        let x = net.node_id("X").unwrap();
        let y = net.node_id("Y").unwrap();
        assert_eq!(net.snap_to_node(GeoPoint::new(0.0, 0.4)), Some(x));
        assert_eq!(net.snap_to_node(GeoPoint::new(0.0, 0.6)), Some(y));
    }

    #[test]
    fn snap_skips_nodes_without_coordinates() {
        let net = super::helpers::triangle();
        // P and Q have no position, so only X, Y, Z are candidates.
        let snapped = net.snap_to_node(GeoPoint::new(50.0, 50.0)).unwrap();
        assert_eq!(net.node_name(snapped), "Z");
    }

    #[test]
    fn center_of_positioned_nodes() {
        let net = super::helpers::triangle();
        let c = net.center().unwrap();
        assert!((c.lat - 1.0 / 3.0).abs() < 1e-6);
        assert!((c.lon - 2.0 / 3.0).abs() < 1e-6);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use cr_core::{CoreError, GeoPoint, RoutingConfig, WeightRules};

    use crate::{NetworkError, RoadNetworkBuilder};

    #[test]
    fn nan_multiplier_rejected_at_construction() {
        let cfg = RoutingConfig {
            rules: WeightRules { truck_congestion: f64::NAN, ..Default::default() },
            ..Default::default()
        };
        let err = RoadNetworkBuilder::with_config(cfg).err();
        assert!(matches!(
            err,
            Some(NetworkError::Config(CoreError::InvalidConfig { field: "truck_congestion", .. }))
        ));
    }

    #[test]
    fn infinite_alert_factor_rejected() {
        let cfg = RoutingConfig { alert_threshold_factor: f64::INFINITY, ..Default::default() };
        assert!(RoadNetworkBuilder::with_config(cfg).is_err());
    }

    #[test]
    fn reserve_keeps_custom_config() {
        let cfg = RoutingConfig { alert_threshold_factor: 3.0, ..Default::default() };
        let mut b = RoadNetworkBuilder::with_config(cfg.clone()).unwrap();
        b.reserve(2, 1);
        b.add_node("A", Some(GeoPoint::new(1.0, 2.0)));
        b.add_edge("A", "B", 4.0).unwrap();
        let net = b.build();
        assert_eq!(net.config(), &cfg);

        let a = net.node_id("A").unwrap();
        let bn = net.node_id("B").unwrap();
        assert_eq!(net.node_pos(a), Some(GeoPoint::new(1.0, 2.0)));
        assert_eq!(net.node_pos(bn), None);

        let arc = net.find_arc(a, bn).unwrap();
        assert_eq!(net.edge_ends(arc.edge()), (a, bn));
    }
}
