//! HTML fragment rendering for the shell.
//!
//! The core writes back two surfaces: the directory list and the ROI
//! results panel. Markup and class names match what the page's stylesheet
//! expects. All interpolated text is escaped; action buttons carry the
//! station id as a data attribute for the shell to wire up.

use crate::models::Station;
use crate::roi::{Payback, RoiEstimate};

/// Render the directory list for a filtered sequence. An empty sequence
/// renders the distinct no-results state, never an empty container.
pub fn render_station_list(stations: &[Station]) -> String {
    if stations.is_empty() {
        return r#"<p class="no-results">No stations found matching your criteria.</p>"#
            .to_string();
    }
    stations.iter().map(render_station_item).collect()
}

fn render_station_item(station: &Station) -> String {
    format!(
        r#"<div class="station-item">
  <div class="station-name">{name}</div>
  <div class="station-address">{address}</div>
  <div class="station-details">
    <div class="station-specs">
      <span class="spec-item"><i class="fas fa-bolt"></i> {power}kW</span>
      <span class="spec-item"><i class="fas fa-plug"></i> {connectors} connectors</span>
      <span class="spec-item"><i class="fas fa-map-marker-alt"></i> {distance}</span>
    </div>
    <div class="station-info">
      <span class="station-price">{price}</span>
      <span class="station-status status-{status}">{status_label}</span>
    </div>
  </div>
  <div class="station-actions">
    <button class="btn btn-outline btn-sm" data-action="directions" data-station-id="{id}"><i class="fas fa-directions"></i> Directions</button>
    <button class="btn btn-primary btn-sm" data-action="reserve" data-station-id="{id}"><i class="fas fa-calendar"></i> Reserve</button>
  </div>
</div>"#,
        name = escape_html(&station.name),
        address = escape_html(&station.address),
        power = station.power_kw,
        connectors = station.connectors,
        distance = station.distance,
        price = escape_html(&station.price.to_string()),
        status = station.availability.as_str(),
        status_label = station.availability.label(),
        id = station.id,
    )
}

/// Info popup content for a station's map marker.
pub fn render_marker_info(station: &Station) -> String {
    format!(
        "<strong>{}</strong><br>{}",
        escape_html(&station.name),
        escape_html(&station.address)
    )
}

/// Render the five-row ROI results panel. `annual_revenue` is deliberately
/// not shown.
pub fn render_roi_results(estimate: &RoiEstimate) -> String {
    let payback = match estimate.payback {
        Payback::Months(months) => format!("{months} months"),
        Payback::NotReachable => "Payback period not reachable".to_string(),
    };
    [
        ("Monthly Revenue", format_usd(estimate.monthly_revenue)),
        ("Monthly Profit", format_usd(estimate.net_monthly_profit)),
        ("Annual ROI", format!("{:.1}%", estimate.roi_percent)),
        ("Payback Period", payback),
        ("Initial Investment", format_usd(estimate.investment)),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            r#"<div class="result-item">
  <div class="result-label">{label}</div>
  <div class="result-value">{value}</div>
</div>"#
        )
    })
    .collect()
}

/// en-US currency formatting: dollar sign, thousands grouping, two
/// decimals. The only localization this crate does.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(total_cents / 100);
    let cents = total_cents % 100;
    if negative {
        format!("-${whole}.{cents:02}")
    } else {
        format!("${whole}.{cents:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
