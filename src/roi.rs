//! Partner ROI estimation.
//!
//! Pure functions over a fixed per-category financial model - no state, no
//! collaborators. All inputs are validated before anything is computed; a
//! rejected input produces no partial result.

use serde::{Deserialize, Serialize};

use crate::error::RoiError;

// ============================================================================
// Financial Model Constants
// ============================================================================

/// Operating costs as a fixed share of monthly revenue.
const OPERATING_COST_RATIO: f64 = 0.30;

const DAYS_PER_MONTH: f64 = 30.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Revenue per station per day (currency units) used for an unknown
/// location category.
const DEFAULT_DAILY_REVENUE: f64 = 100.0;

/// Investment per station (currency units) used for an unknown location
/// category.
const DEFAULT_INVESTMENT: f64 = 150_000.0;

/// Site category for a partner installation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteCategory {
    Retail,
    Highway,
    Workplace,
    Residential,
}

impl SiteCategory {
    /// Parse a form-control token. Unknown tokens yield `None`, which maps
    /// to the default constants rather than a failure.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "retail" => Some(SiteCategory::Retail),
            "highway" => Some(SiteCategory::Highway),
            "workplace" => Some(SiteCategory::Workplace),
            "residential" => Some(SiteCategory::Residential),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SiteCategory::Retail => "Retail Location",
            SiteCategory::Highway => "Highway Corridor",
            SiteCategory::Workplace => "Workplace",
            SiteCategory::Residential => "Residential Complex",
        }
    }
}

fn daily_revenue_per_station(category: Option<SiteCategory>) -> f64 {
    match category {
        Some(SiteCategory::Retail) => 150.0,
        Some(SiteCategory::Highway) => 200.0,
        Some(SiteCategory::Workplace) => 100.0,
        Some(SiteCategory::Residential) => 80.0,
        None => DEFAULT_DAILY_REVENUE,
    }
}

fn investment_per_station(category: Option<SiteCategory>) -> f64 {
    match category {
        Some(SiteCategory::Retail) => 200_000.0,
        Some(SiteCategory::Highway) => 300_000.0,
        Some(SiteCategory::Workplace) => 150_000.0,
        Some(SiteCategory::Residential) => 100_000.0,
        None => DEFAULT_INVESTMENT,
    }
}

/// Payback horizon for the initial investment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Payback {
    Months(u32),
    /// Net monthly profit is zero or negative; the investment is never
    /// recovered. Reported as such, never as a nonsensical number.
    NotReachable,
}

/// Derived metrics for a partner installation. Recomputed on every request
/// and discarded after rendering; nothing here is stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    pub monthly_revenue: f64,
    /// Computed and carried but not rendered anywhere today.
    pub annual_revenue: f64,
    pub investment: f64,
    pub operating_costs: f64,
    pub net_monthly_profit: f64,
    pub annual_profit: f64,
    /// Annualized profit over investment, rounded to one decimal.
    pub roi_percent: f64,
    pub payback: Payback,
}

/// Estimate ROI for `stations` chargers at a `location` category running at
/// `utilization_pct` percent.
///
/// `location` is the raw form token: empty is a validation error, while an
/// unknown non-empty token falls back to the default model constants.
///
/// ```
/// use chargegrid_compute::roi::{estimate, Payback};
///
/// let est = estimate("retail", Some(5), Some(50)).unwrap();
/// assert_eq!(est.monthly_revenue, 11_250.0);
/// assert_eq!(est.investment, 1_000_000.0);
/// assert_eq!(est.roi_percent, 9.5);
/// assert_eq!(est.payback, Payback::Months(127));
/// ```
pub fn estimate(
    location: &str,
    stations: Option<u32>,
    utilization_pct: Option<u32>,
) -> Result<RoiEstimate, RoiError> {
    if location.trim().is_empty() {
        return Err(RoiError::MissingLocation);
    }
    let stations = match stations {
        Some(n) if n > 0 => f64::from(n),
        _ => return Err(RoiError::InvalidStationCount),
    };
    let utilization = match utilization_pct {
        Some(pct) if (1..=100).contains(&pct) => f64::from(pct) / 100.0,
        _ => return Err(RoiError::InvalidUtilization),
    };

    let category = SiteCategory::parse(location.trim());

    let daily_revenue = daily_revenue_per_station(category) * stations * utilization;
    let monthly_revenue = daily_revenue * DAYS_PER_MONTH;
    let annual_revenue = monthly_revenue * MONTHS_PER_YEAR;

    let investment = investment_per_station(category) * stations;
    let operating_costs = monthly_revenue * OPERATING_COST_RATIO;
    let net_monthly_profit = monthly_revenue - operating_costs;
    let annual_profit = net_monthly_profit * MONTHS_PER_YEAR;

    let roi_percent = round1(annual_profit / investment * 100.0);
    let payback = if net_monthly_profit > 0.0 {
        Payback::Months((investment / net_monthly_profit).ceil() as u32)
    } else {
        Payback::NotReachable
    };

    Ok(RoiEstimate {
        monthly_revenue,
        annual_revenue,
        investment,
        operating_costs,
        net_monthly_profit,
        annual_profit,
        roi_percent,
        payback,
    })
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_retail_reference_vector() {
        let est = estimate("retail", Some(5), Some(50)).unwrap();

        assert_eq!(est.monthly_revenue, 11_250.0);
        assert_eq!(est.annual_revenue, 135_000.0);
        assert_eq!(est.investment, 1_000_000.0);
        assert!(close(est.operating_costs, 3_375.0));
        assert!(close(est.net_monthly_profit, 7_875.0));
        assert!(close(est.annual_profit, 94_500.0));
        assert_eq!(est.roi_percent, 9.5);
        // ceil(1_000_000 / 7_875) = ceil(126.98...)
        assert_eq!(est.payback, Payback::Months(127));
    }

    #[test]
    fn test_each_category_constants() {
        let daily = |loc: &str| estimate(loc, Some(1), Some(100)).unwrap();

        assert!(close(daily("retail").monthly_revenue, 150.0 * 30.0));
        assert!(close(daily("highway").monthly_revenue, 200.0 * 30.0));
        assert!(close(daily("workplace").monthly_revenue, 100.0 * 30.0));
        assert!(close(daily("residential").monthly_revenue, 80.0 * 30.0));

        assert_eq!(daily("retail").investment, 200_000.0);
        assert_eq!(daily("highway").investment, 300_000.0);
        assert_eq!(daily("workplace").investment, 150_000.0);
        assert_eq!(daily("residential").investment, 100_000.0);
    }

    #[test]
    fn test_unknown_category_uses_defaults() {
        let est = estimate("airport", Some(2), Some(100)).unwrap();
        assert!(close(est.monthly_revenue, 100.0 * 2.0 * 30.0));
        assert_eq!(est.investment, 300_000.0);
    }

    #[test]
    fn test_empty_location_rejected() {
        assert_eq!(
            estimate("", Some(3), Some(50)).unwrap_err(),
            RoiError::MissingLocation
        );
        assert_eq!(
            estimate("   ", Some(3), Some(50)).unwrap_err(),
            RoiError::MissingLocation
        );
    }

    #[test]
    fn test_invalid_station_count_rejected() {
        assert_eq!(
            estimate("retail", None, Some(50)).unwrap_err(),
            RoiError::InvalidStationCount
        );
        assert_eq!(
            estimate("retail", Some(0), Some(50)).unwrap_err(),
            RoiError::InvalidStationCount
        );
    }

    #[test]
    fn test_invalid_utilization_rejected() {
        assert_eq!(
            estimate("retail", Some(3), None).unwrap_err(),
            RoiError::InvalidUtilization
        );
        assert_eq!(
            estimate("retail", Some(3), Some(0)).unwrap_err(),
            RoiError::InvalidUtilization
        );
        assert_eq!(
            estimate("retail", Some(3), Some(101)).unwrap_err(),
            RoiError::InvalidUtilization
        );
    }

    #[test]
    fn test_utilization_bounds_accepted() {
        assert!(estimate("retail", Some(1), Some(1)).is_ok());
        assert!(estimate("retail", Some(1), Some(100)).is_ok());
    }

    #[test]
    fn test_annual_revenue_carried() {
        let est = estimate("highway", Some(2), Some(75)).unwrap();
        assert!(close(est.annual_revenue, est.monthly_revenue * 12.0));
    }

    #[test]
    fn test_site_category_parse() {
        assert_eq!(SiteCategory::parse("retail"), Some(SiteCategory::Retail));
        assert_eq!(SiteCategory::parse("highway"), Some(SiteCategory::Highway));
        assert_eq!(SiteCategory::parse(""), None);
        assert_eq!(SiteCategory::parse("airport"), None);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(9.44), 9.4);
        assert_eq!(round1(9.46), 9.5);
        assert_eq!(round1(10.0), 10.0);
    }
}
