use serde::{Deserialize, Serialize};

/// Session-stable identifier for a station. Join key between directory list
/// entries, map markers, and the directions/reserve actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationId(pub u32);

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargerType {
    DcFast,
    Level2,
}

impl ChargerType {
    /// Parse a filter-control token. Empty means "no constraint".
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "dcfast" => Some(ChargerType::DcFast),
            "level2" => Some(ChargerType::Level2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChargerType::DcFast => "dcfast",
            ChargerType::Level2 => "level2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChargerType::DcFast => "DC Fast",
            ChargerType::Level2 => "Level 2",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
}

impl Availability {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "available" => Some(Availability::Available),
            "busy" => Some(Availability::Busy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pricing {
    Paid,
    Free,
}

impl Pricing {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "paid" => Some(Pricing::Paid),
            "free" => Some(Pricing::Free),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pricing::Paid => "paid",
            Pricing::Free => "free",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

impl DistanceUnit {
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Distance with an explicit unit tag. The legacy feed carried this as a
/// display string ("0.2 miles"); the magnitude is the sort key for the
/// nearest-first ordering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub magnitude: f64,
    pub unit: DistanceUnit,
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.label())
    }
}

/// Charging price. The legacy feed mixed a currency symbol and the literal
/// "Free" in one display string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Price {
    Free,
    PerUnit { amount: f64, currency: String },
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Free => write!(f, "Free"),
            Price::PerUnit { amount, currency } => write!(f, "{currency}{amount}/unit"),
        }
    }
}

/// A single charging-point listing. Immutable for the session; the set is
/// seeded once and never added to or removed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub charger_type: ChargerType,
    pub availability: Availability,
    pub pricing: Pricing,
    pub distance: Distance,
    pub connectors: u32,
    pub power_kw: f64,
    pub price: Price,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}
