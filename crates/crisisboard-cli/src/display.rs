//! Text rendering for engine projections.
//!
//! One function per dashboard section. Degenerate states (empty filter
//! result, missing coordinates, too little data for a heatmap) each get
//! their own message rather than an empty table.

use crisisboard_core::projection::{
    DistrictTable, HeatmapProjection, MapProjection, PriorityTable, UrgencyChart,
};
use crisisboard_logic::requests::AidRequest;
use serde::Serialize;

/// Dump any projection as pretty JSON, for piping into other tools.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("serialization failed: {e}"),
    }
}

const BAR_WIDTH: usize = 40;

pub fn print_table(table: &DistrictTable) {
    println!(
        "District data for {} — filter: {} — last updated {}",
        table.region,
        table.filter.label(),
        table.last_updated
    );
    println!("Filtered districts: {}", table.total_districts);
    if table.rows.is_empty() {
        println!("No districts match the selected urgency level. Try 'filter all'.");
        return;
    }
    println!(
        "{:<18} {:>8} {:>9} {:>8} {:>10} {:>5} {:>8} {:>7} {:>10}  {}",
        "District",
        "Lat",
        "Lon",
        "Severity",
        "Disruption",
        "Flood",
        "Road",
        "Urgency",
        "Population",
        "Recommendation"
    );
    for r in &table.rows {
        println!(
            "{:<18} {:>8} {:>9} {:>8.2} {:>10.2} {:>5} {:>8} {:>7.2} {:>10}  {}",
            r.district,
            r.latitude.map_or("-".to_string(), |v| format!("{v:.4}")),
            r.longitude.map_or("-".to_string(), |v| format!("{v:.4}")),
            r.weather_severity,
            r.disruption_index,
            r.flood_index,
            r.road_access.as_str(),
            r.urgency_score,
            r.population,
            r.recommendation.label()
        );
    }
}

pub fn print_priority(table: &PriorityTable) {
    if table.rows.is_empty() {
        println!("No districts in the current view.");
        return;
    }
    println!(
        "{:<18} {:>7} {:>10} {:>6} {:>8} {:>8}",
        "District", "Urgency", "Population", "Food", "Shelter", "Medical"
    );
    for row in &table.rows {
        println!(
            "{:<18} {:>7.2} {:>10} {:>6} {:>8} {:>8}",
            row.district,
            row.urgency_score,
            row.population,
            row.needs.food,
            row.needs.shelter,
            row.needs.medical
        );
    }
    println!(
        "{:<18} {:>7} {:>10} {:>6} {:>8} {:>8}",
        "Total demand",
        "",
        "",
        table.total_demand.food,
        table.total_demand.shelter,
        table.total_demand.medical
    );
    println!(
        "Configured capacity: {} food units, {} shelter units, {} medical kits",
        table.capacities.total_food_units,
        table.capacities.total_shelter_units,
        table.capacities.total_medical_kits
    );
}

pub fn print_chart(chart: &UrgencyChart) {
    if chart.bars.is_empty() {
        println!("No districts in the current view.");
        return;
    }
    for bar in &chart.bars {
        let filled = (bar.urgency_score * BAR_WIDTH as f64).round() as usize;
        println!(
            "{:<18} {:>4.2} |{}",
            bar.district,
            bar.urgency_score,
            "#".repeat(filled.min(BAR_WIDTH))
        );
    }
    println!(
        "Tiers: {} immediate, {} urgent, {} monitor",
        chart.tier_counts.immediate, chart.tier_counts.urgent, chart.tier_counts.monitor
    );
}

pub fn print_map(map: &MapProjection) {
    match map {
        MapProjection::Points {
            center_latitude,
            center_longitude,
            zoom,
            radius_m,
            points,
        } => {
            println!(
                "{} points, centered {:.4}, {:.4} (zoom {zoom}, radius {radius_m} m)",
                points.len(),
                center_latitude,
                center_longitude
            );
            for p in points {
                println!(
                    "  {:<18} {:>8.4} {:>9.4}  rgba{:?}  {:.2} {}",
                    p.district,
                    p.latitude,
                    p.longitude,
                    p.color,
                    p.urgency_score,
                    p.recommendation.label()
                );
            }
        }
        MapProjection::Empty => println!("No districts in the current view."),
        MapProjection::NoCoordinates => {
            println!("No coordinates available for districts in this view.")
        }
    }
}

pub fn print_heatmap(heatmap: &HeatmapProjection) {
    match heatmap {
        HeatmapProjection::Ready { rows } => {
            for row in rows {
                let shade = match row.urgency_score {
                    s if s > 0.7 => "███",
                    s if s > 0.5 => "▓▓▓",
                    _ => "░░░",
                };
                println!("{:<18} {shade} {:.2}", row.district, row.urgency_score);
            }
        }
        HeatmapProjection::NoMatches => {
            println!("No districts match the selected urgency level. Try 'filter all'.")
        }
        HeatmapProjection::InsufficientData => {
            println!("Not enough data for a heatmap. At least two districts are needed.")
        }
    }
}

pub fn print_requests(requests: &[AidRequest], pending: &[(usize, &AidRequest)]) {
    if requests.is_empty() {
        println!("No aid requests submitted yet.");
        return;
    }
    println!("{:<4} {:<18} {:<12} {}", "#", "Region", "Aid", "Status");
    for (i, r) in requests.iter().enumerate() {
        println!(
            "{:<4} {:<18} {:<12} {}",
            i,
            r.region,
            r.aid_type,
            r.status.as_str()
        );
    }
    if pending.is_empty() {
        println!("Nothing pending approval.");
    } else {
        let indices: Vec<String> = pending.iter().map(|(i, _)| i.to_string()).collect();
        println!("Pending approval: #{}", indices.join(", #"));
    }
}
