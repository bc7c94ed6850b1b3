//! Unit tests for cr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ArcId, EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::default(), EdgeId::INVALID);
    }

    #[test]
    fn arcs_pair_up_with_their_edge() {
        let e = EdgeId(7);
        assert_eq!(e.forward(), ArcId(14));
        assert_eq!(e.backward(), ArcId(15));
        assert_eq!(e.forward().edge(), e);
        assert_eq!(e.backward().edge(), e);
        assert_eq!(e.forward().reverse(), e.backward());
        assert!(e.forward().is_forward());
        assert!(!e.backward().is_forward());
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(40.7128, -74.0060);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(40.0, -74.0);
        let b = GeoPoint::new(41.0, -74.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn centroid_is_mean() {
        let c = GeoPoint::centroid([GeoPoint::new(0.0, 0.0), GeoPoint::new(2.0, 4.0)]).unwrap();
        assert_eq!(c, GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn centroid_of_nothing() {
        assert!(GeoPoint::centroid(std::iter::empty()).is_none());
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, TimeOfDay, TimeWeights};

    #[test]
    fn parse_labels() {
        assert_eq!("morning".parse::<TimeOfDay>().unwrap(), TimeOfDay::Morning);
        assert_eq!(" Evening ".parse::<TimeOfDay>().unwrap(), TimeOfDay::Evening);
        assert_eq!(
            "noon".parse::<TimeOfDay>(),
            Err(CoreError::UnknownTimeOfDay("noon".into()))
        );
    }

    #[test]
    fn display_matches_parse() {
        for t in TimeOfDay::ALL {
            assert_eq!(t.to_string().parse::<TimeOfDay>().unwrap(), t);
        }
    }

    #[test]
    fn table_lookup() {
        let tw = TimeWeights::new(7.5, 6.0, 9.0, 4.5).unwrap();
        assert_eq!(tw.get(TimeOfDay::Morning), 7.5);
        assert_eq!(tw.get(TimeOfDay::Night), 4.5);
        let collected: Vec<_> = tw.iter().map(|(_, w)| w).collect();
        assert_eq!(collected, vec![7.5, 6.0, 9.0, 4.5]);
    }

    #[test]
    fn from_fn_scales_base() {
        let tw = TimeWeights::from_fn(|t| match t {
            TimeOfDay::Morning => 5.0 * 1.5,
            _ => 5.0,
        })
        .unwrap();
        assert_eq!(tw.get(TimeOfDay::Morning), 7.5);
        assert_eq!(tw.get(TimeOfDay::Afternoon), 5.0);
    }

    #[test]
    fn from_pairs_requires_every_period() {
        let err = TimeWeights::from_pairs([
            (TimeOfDay::Morning, 1.0),
            (TimeOfDay::Afternoon, 1.0),
            (TimeOfDay::Evening, 1.0),
        ])
        .unwrap_err();
        assert_eq!(err, CoreError::MissingTimeSlot(TimeOfDay::Night));
    }

    #[test]
    fn from_pairs_rejects_duplicates() {
        let err = TimeWeights::from_pairs([
            (TimeOfDay::Morning, 1.0),
            (TimeOfDay::Morning, 2.0),
        ])
        .unwrap_err();
        assert_eq!(err, CoreError::DuplicateTimeSlot(TimeOfDay::Morning));
    }

    #[test]
    fn from_pairs_any_order() {
        let tw = TimeWeights::from_pairs([
            (TimeOfDay::Night, 4.0),
            (TimeOfDay::Evening, 3.0),
            (TimeOfDay::Afternoon, 2.0),
            (TimeOfDay::Morning, 1.0),
        ])
        .unwrap();
        assert_eq!(tw, TimeWeights::new(1.0, 2.0, 3.0, 4.0).unwrap());
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(matches!(
            TimeWeights::new(1.0, -2.0, 3.0, 4.0),
            Err(CoreError::InvalidWeight(_))
        ));
        assert!(TimeWeights::from_fn(|_| f64::NAN).is_err());
    }
}

#[cfg(test)]
mod use_case {
    use crate::{CoreError, UseCase};

    #[test]
    fn default_is_none() {
        assert_eq!(UseCase::default(), UseCase::None);
    }

    #[test]
    fn parse_labels() {
        assert_eq!("Ambulance".parse::<UseCase>().unwrap(), UseCase::Ambulance);
        assert_eq!("delivery truck".parse::<UseCase>().unwrap(), UseCase::DeliveryTruck);
        assert_eq!("".parse::<UseCase>().unwrap(), UseCase::None);
        assert!(matches!("Tank".parse::<UseCase>(), Err(CoreError::UnknownUseCase(_))));
    }

    #[test]
    fn display() {
        assert_eq!(UseCase::DeliveryTruck.to_string(), "Delivery Truck");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, RoutingConfig, WeightRules};

    #[test]
    fn alert_threshold_is_strict() {
        let cfg = RoutingConfig::default();
        // 10-minute road: threshold is 15 minutes total.
        assert!(cfg.crosses_alert_threshold(10.0, 6.0));
        assert!(!cfg.crosses_alert_threshold(10.0, 5.0));
        assert!(!cfg.crosses_alert_threshold(10.0, 0.0));
    }

    #[test]
    fn zero_weight_road_alerts_on_any_delay() {
        let cfg = RoutingConfig::default();
        assert!(cfg.crosses_alert_threshold(0.0, 0.1));
        assert!(!cfg.crosses_alert_threshold(0.0, 0.0));
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(RoutingConfig::default().validate(), Ok(()));
    }

    #[test]
    fn non_finite_multiplier_rejected() {
        let cfg = RoutingConfig {
            rules: WeightRules { truck_congestion: f64::NAN, ..Default::default() },
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::InvalidConfig { field: "truck_congestion", .. })
        ));

        let cfg = RoutingConfig {
            rules: WeightRules { cyclist_long_edge: f64::INFINITY, ..Default::default() },
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::InvalidConfig { field: "cyclist_long_edge", .. })
        ));
    }

    #[test]
    fn negative_values_rejected() {
        let rules = WeightRules { cyclist_long_edge_minutes: -1.0, ..Default::default() };
        assert_eq!(
            rules.validate(),
            Err(CoreError::InvalidConfig { field: "cyclist_long_edge_minutes", value: -1.0 })
        );

        let cfg = RoutingConfig { alert_threshold_factor: -0.5, ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::InvalidConfig { field: "alert_threshold_factor", .. })
        ));
    }

    #[test]
    fn zero_multiplier_allowed() {
        let rules = WeightRules { ambulance_alert: 0.0, ..Default::default() };
        assert_eq!(rules.validate(), Ok(()));
    }
}
