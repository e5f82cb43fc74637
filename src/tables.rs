use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::core::{
    forecast::Forecast,
    notice::{Notice, NoticeLevel},
    reroute::RerouteResult,
    scenario::ScenarioKind,
    shipment::{Shipment, ShipmentId},
    weights::PriorityWeights,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_scenarios_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Key", "Scenario", "Weather", "Infrastructure"]);
    for kind in ScenarioKind::ALL {
        let conditions = kind.conditions();
        table.add_row(vec![
            Cell::new(kind.key()).add_attribute(Attribute::Bold),
            Cell::new(kind.label()),
            Cell::new(conditions.weather).add_attribute(Attribute::Dim),
            Cell::new(conditions.infrastructure_health).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_shipments_table<'a>(
    shipments: impl IntoIterator<Item = &'a Shipment>,
    selected: Option<&ShipmentId>,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "ID", "Origin", "Destination", "Contents", "Status"]);
    for shipment in shipments {
        let is_selected = selected == Some(&shipment.id);
        table.add_row(vec![
            Cell::new(if is_selected { "▶" } else { "" }).fg(Color::Cyan),
            Cell::new(shipment.id.as_str()).add_attribute(Attribute::Bold),
            Cell::new(&shipment.origin.name),
            Cell::new(&shipment.destination.name),
            Cell::new(&shipment.contents).add_attribute(Attribute::Dim),
            Cell::new(shipment.status).fg(shipment.status.color()),
        ]);
    }
    table
}

fn severity_color(severity: &str) -> Color {
    match severity.to_lowercase().as_str() {
        "high" | "severe" | "critical" => Color::Red,
        "medium" | "moderate" => Color::DarkYellow,
        _ => Color::Green,
    }
}

pub fn build_disruptions_table(forecast: &Forecast) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Type", "Location", "Start", "End", "Severity", "Affected"]);
    for disruption in &forecast.disruptions {
        table.add_row(vec![
            Cell::new(&disruption.kind).add_attribute(Attribute::Bold),
            Cell::new(&disruption.location),
            Cell::new(&disruption.start_time).add_attribute(Attribute::Dim),
            Cell::new(&disruption.end_time).add_attribute(Attribute::Dim),
            Cell::new(&disruption.severity).fg(severity_color(&disruption.severity)),
            Cell::new(
                disruption
                    .affected_shipments
                    .iter()
                    .map(|affected| format!("{} @ {}", affected.shipment_id, affected.location))
                    .join("\n"),
            ),
        ]);
    }
    table
}

pub fn build_alternative_routes_table(forecast: &Forecast) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Route", "Time saved", "Cost saved", "CO₂ reduced"]);
    let routes = forecast.disruptions.iter().flat_map(|disruption| &disruption.alternative_routes);
    for route in routes {
        table.add_row(vec![
            Cell::new(&route.route),
            Cell::new(format!("{:.1} h", route.estimated_time_savings))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("${:.2}", route.estimated_cost_savings))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1} kg", route.estimated_co2_reduction))
                .set_alignment(CellAlignment::Right)
                .fg(Color::Green),
        ]);
    }
    table
}

pub fn build_reroute_table(result: &RerouteResult, weights: PriorityWeights) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Optimal route", "Cost", "Time", "CO₂"]);
    table.add_row(vec![
        Cell::new(&result.optimal_route).add_attribute(Attribute::Bold),
        Cell::new(format!("${:.2}", result.estimated_cost)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1} h", result.estimated_time)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1} kg", result.estimated_co2_emissions))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(result.alternatives.iter().map(|it| format!("• {it}")).join("\n"))
            .add_attribute(Attribute::Dim),
        Cell::new(weights.cost).add_attribute(Attribute::Dim),
        Cell::new(weights.time).add_attribute(Attribute::Dim),
        Cell::new(weights.sustainability).add_attribute(Attribute::Dim),
    ]);
    table
}

pub fn build_notices_table(notices: &[Notice]) -> Table {
    let mut table = new_table();
    for notice in notices {
        let color = match notice.level {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        table.add_row(vec![
            Cell::new(notice.title).fg(color).add_attribute(Attribute::Bold),
            Cell::new(&notice.description),
        ]);
    }
    table
}
