//! sample_city — runs the routing engine against the dashboard's sample city.
//!
//! Usage: `sample_city [START] [END] [K]` (defaults: Downtown, Airport, 3).
//!
//! Prints, for every use case, the `K` best morning routes as text summaries,
//! then repeats one query after a congestion zone and a delay report are
//! applied, and finally dumps all routes as JSON.

mod city;

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{Level, info};

use cr_core::{TimeOfDay, UseCase};
use cr_routing::{QueryParams, RouteRequest, RouteSummary, query, query_many};

use city::build_sample_city;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut args = std::env::args().skip(1);
    let start = args.next().unwrap_or_else(|| "Downtown".to_owned());
    let end   = args.next().unwrap_or_else(|| "Airport".to_owned());
    let k: usize = match args.next() {
        Some(s) => s.parse().with_context(|| format!("K must be a positive integer, got {s:?}"))?,
        None => 3,
    };

    let mut network = build_sample_city()?;
    info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        center = ?network.center(),
        "sample city loaded"
    );

    // ── Every use case, morning traffic ──────────────────────────────────
    let requests: Vec<RouteRequest> = UseCase::ALL
        .into_iter()
        .map(|use_case| RouteRequest {
            start:  start.clone(),
            end:    end.clone(),
            params: QueryParams::new(Some(TimeOfDay::Morning), use_case),
            k:      Some(k),
        })
        .collect();

    let t0 = Instant::now();
    let results = query_many(&network, &requests);
    info!(queries = requests.len(), elapsed_us = t0.elapsed().as_micros() as u64, "batch done");

    let mut dump = Vec::new();
    for (req, result) in requests.iter().zip(results) {
        let routes = result?;
        println!("=== {} ({} routes) ===", req.params.use_case, routes.len());
        for route in &routes {
            println!("{}\n", RouteSummary::new(&network, route, &req.params)?);
        }
        dump.push(serde_json::json!({ "request": req, "routes": routes }));
    }

    // ── Live traffic ─────────────────────────────────────────────────────
    network.mark_congestion_zone("Downtown", "Central Park")?;
    if network.report_delay("Stadium", "Airport", 10.0)? {
        info!("Stadium - Airport promoted to traffic alert");
    }

    let params = QueryParams::default().for_use_case(UseCase::Ambulance);
    let routes = query(&network, &start, &end, &params, Some(k))?;
    println!("=== Ambulance with live traffic ===");
    for route in &routes {
        println!("{}\n", RouteSummary::new(&network, route, &params)?);
    }
    if let Some(best) = routes.first() {
        let stops: Vec<String> = best
            .path
            .iter()
            .filter_map(|name| network.node_id(name))
            .filter_map(|id| network.node_pos(id))
            .map(|p| p.to_string())
            .collect();
        println!("Best route waypoints: {}\n", stops.join(" → "));
    }
    dump.push(serde_json::json!({
        "request": { "start": start, "end": end, "params": params, "k": k },
        "congestion_zones": network.congestion_zones(),
        "traffic_alerts": network.traffic_alerts(),
        "routes": routes,
    }));

    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}
