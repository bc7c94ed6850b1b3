//! Traffic overlays: congestion zones, user delay reports, traffic alerts.
//!
//! All mutators address a road by its two endpoint names and act on both
//! directions at once.  A name pair that is not a road fails with
//! [`NetworkError::NoSuchEdge`] before any state is touched.
//!
//! # Alert promotion
//!
//! A report of `delay` minutes on a road of base weight `base` raises a
//! traffic alert (both directions) when
//!
//! ```text
//! base + delay > base * config.alert_threshold_factor
//! ```
//!
//! The test always uses the base weight, never a time-of-day weight.  Alerts
//! persist until [`RoadNetwork::clear_reports`], even if a later, smaller
//! report replaces the one that raised them.

use tracing::{debug, info};

use cr_core::{ArcId, TimeWeights};

use crate::{NetworkError, NetworkResult, RoadNetwork};

impl RoadNetwork {
    // ── Congestion zones ──────────────────────────────────────────────────

    /// Flag the road between `u` and `v` as congested.
    pub fn mark_congestion_zone(&mut self, u: &str, v: &str) -> NetworkResult<()> {
        let arc = self.arc_between(u, v)?;
        self.set_both(arc, |net, a| net.congestion[a.index()] = true);
        debug!(u, v, "congestion zone marked");
        Ok(())
    }

    /// Remove the congestion flag.  Returns whether the road was flagged.
    pub fn clear_congestion_zone(&mut self, u: &str, v: &str) -> NetworkResult<bool> {
        let arc = self.arc_between(u, v)?;
        let was = self.congestion[arc.index()];
        self.set_both(arc, |net, a| net.congestion[a.index()] = false);
        Ok(was)
    }

    // ── User reports ──────────────────────────────────────────────────────

    /// Record a user-reported delay of `minutes` on the road between `u` and
    /// `v`, replacing any earlier report.
    ///
    /// Returns `true` if the report crossed the alert threshold.
    pub fn report_delay(&mut self, u: &str, v: &str, minutes: f64) -> NetworkResult<bool> {
        let arc = self.arc_between(u, v)?;
        if !(minutes.is_finite() && minutes >= 0.0) {
            return Err(NetworkError::InvalidDelay {
                from:  u.to_owned(),
                to:    v.to_owned(),
                delay: minutes,
            });
        }

        self.set_both(arc, |net, a| net.reports[a.index()] = Some(minutes));

        let base = self.base_weight(arc);
        let alert = self.config.crosses_alert_threshold(base, minutes);
        if alert {
            self.set_both(arc, |net, a| net.alerts[a.index()] = true);
            info!(u, v, base, delay = minutes, "traffic alert raised");
        } else {
            debug!(u, v, base, delay = minutes, "delay reported");
        }
        Ok(alert)
    }

    /// Flag the road as a traffic alert directly, without a report.
    pub fn flag_traffic_alert(&mut self, u: &str, v: &str) -> NetworkResult<()> {
        let arc = self.arc_between(u, v)?;
        self.set_both(arc, |net, a| net.alerts[a.index()] = true);
        Ok(())
    }

    /// Drop every user report and traffic alert.  Congestion zones and time
    /// tables are kept.
    pub fn clear_reports(&mut self) {
        self.reports.fill(None);
        self.alerts.fill(false);
        debug!("user reports and traffic alerts cleared");
    }

    // ── Name-based membership tests ───────────────────────────────────────

    pub fn has_congestion_zone(&self, u: &str, v: &str) -> bool {
        self.arc_between(u, v).is_ok_and(|a| self.is_congested(a))
    }

    pub fn has_traffic_alert(&self, u: &str, v: &str) -> bool {
        self.arc_between(u, v).is_ok_and(|a| self.is_alerted(a))
    }

    pub fn user_report(&self, u: &str, v: &str) -> Option<f64> {
        self.arc_between(u, v).ok().and_then(|a| self.report(a))
    }

    pub fn time_weights_between(&self, u: &str, v: &str) -> Option<&TimeWeights> {
        self.arc_between(u, v).ok().and_then(|a| self.time_weights(a))
    }

    // ── Listings for display ──────────────────────────────────────────────

    /// Every congested `(from, to)` pair.  Both directions are listed.
    pub fn congestion_zones(&self) -> Vec<(&str, &str)> {
        self.flagged_pairs(&self.congestion)
    }

    /// Every alerted `(from, to)` pair.  Both directions are listed.
    pub fn traffic_alerts(&self) -> Vec<(&str, &str)> {
        self.flagged_pairs(&self.alerts)
    }

    /// Every `(from, to, delay)` report.  Both directions are listed.
    pub fn user_reports(&self) -> Vec<(&str, &str, f64)> {
        self.reports
            .iter()
            .enumerate()
            .filter_map(|(i, r)| {
                r.map(|d| {
                    let (from, to) = self.arc_names(ArcId(i as u32));
                    (from, to, d)
                })
            })
            .collect()
    }

    /// Every road with a time table, once per road in insertion orientation.
    pub fn time_weight_tables(&self) -> Vec<(&str, &str, &TimeWeights)> {
        self.time_weights
            .iter()
            .zip(&self.edge_ends)
            .filter_map(|(tw, &(a, b))| {
                tw.as_ref().map(|tw| (self.node_name(a), self.node_name(b), tw))
            })
            .collect()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn set_both(&mut self, arc: ArcId, mut f: impl FnMut(&mut Self, ArcId)) {
        f(self, arc);
        f(self, arc.reverse());
    }

    fn flagged_pairs(&self, flags: &[bool]) -> Vec<(&str, &str)> {
        flags
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(i, _)| self.arc_names(ArcId(i as u32)))
            .collect()
    }

    fn arc_names(&self, arc: ArcId) -> (&str, &str) {
        (self.node_name(self.arc_from(arc)), self.node_name(self.arc_to(arc)))
    }
}
