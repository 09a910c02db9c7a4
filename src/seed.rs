//! Built-in sample station feed.
//!
//! The feed arrives in the legacy shape: categorical tokens and
//! display-string numerics. [`decode_record`] is the single ingestion point
//! that turns a raw record into a structured [`Station`].

use std::collections::HashSet;

use crate::error::FeedError;
use crate::models::{Availability, ChargerType, Pricing, Station, StationId};
use crate::parse::{parse_distance, parse_power, parse_price};

/// A station record as the legacy feed encodes it.
#[derive(Clone, Copy, Debug)]
pub struct RawStationRecord {
    pub id: u32,
    pub name: &'static str,
    pub address: &'static str,
    pub charger_type: &'static str,
    pub availability: &'static str,
    pub pricing: &'static str,
    pub distance: &'static str,
    pub connectors: u32,
    pub power: &'static str,
    pub price: &'static str,
}

/// The five sample stations shipped with the directory page.
pub const SAMPLE_FEED: [RawStationRecord; 5] = [
    RawStationRecord {
        id: 1,
        name: "Master Canteen Charging Hub",
        address: "Master Canteen, Bhubaneswar, Odisha 751001",
        charger_type: "dcfast",
        availability: "available",
        pricing: "paid",
        distance: "0.2 miles",
        connectors: 8,
        power: "150kW",
        price: "₹8/unit",
    },
    RawStationRecord {
        id: 2,
        name: "Esplanade Mall Station",
        address: "Esplanade One Mall, Rasulgarh, Bhubaneswar, Odisha 751010",
        charger_type: "level2",
        availability: "busy",
        pricing: "free",
        distance: "0.5 miles",
        connectors: 4,
        power: "22kW",
        price: "Free",
    },
    RawStationRecord {
        id: 3,
        name: "Baramunda Bus Stand Station",
        address: "Baramunda Bus Terminal, Bhubaneswar, Odisha 751003",
        charger_type: "dcfast",
        availability: "available",
        pricing: "paid",
        distance: "1.2 miles",
        connectors: 12,
        power: "350kW",
        price: "₹10/unit",
    },
    RawStationRecord {
        id: 4,
        name: "KIIT University Campus Charger",
        address: "KIIT Campus, Patia, Bhubaneswar, Odisha 751024",
        charger_type: "level2",
        availability: "available",
        pricing: "paid",
        distance: "0.8 miles",
        connectors: 6,
        power: "11kW",
        price: "₹6/unit",
    },
    RawStationRecord {
        id: 5,
        name: "Biju Patnaik Airport Station",
        address: "Biju Patnaik International Airport, Bhubaneswar, Odisha 751020",
        charger_type: "dcfast",
        availability: "busy",
        pricing: "paid",
        distance: "12.5 miles",
        connectors: 16,
        power: "250kW",
        price: "₹9/unit",
    },
];

/// Decode one raw feed record into a structured station.
pub fn decode_record(raw: &RawStationRecord) -> Result<Station, FeedError> {
    let charger_type = ChargerType::parse(raw.charger_type)
        .ok_or_else(|| FeedError::malformed("chargerType", raw.charger_type))?;
    let availability = Availability::parse(raw.availability)
        .ok_or_else(|| FeedError::malformed("availability", raw.availability))?;
    let pricing = Pricing::parse(raw.pricing)
        .ok_or_else(|| FeedError::malformed("pricing", raw.pricing))?;

    if raw.connectors == 0 {
        return Err(FeedError::malformed("connectors", "0"));
    }

    Ok(Station {
        id: StationId(raw.id),
        name: raw.name.to_string(),
        address: raw.address.to_string(),
        charger_type,
        availability,
        pricing,
        distance: parse_distance(raw.distance)?,
        connectors: raw.connectors,
        power_kw: parse_power(raw.power)?,
        price: parse_price(raw.price)?,
    })
}

/// Decode a whole feed, enforcing id uniqueness across the set.
pub fn decode_feed(feed: &[RawStationRecord]) -> Result<Vec<Station>, FeedError> {
    let mut seen = HashSet::new();
    let mut stations = Vec::with_capacity(feed.len());
    for raw in feed {
        let station = decode_record(raw)?;
        if !seen.insert(station.id) {
            return Err(FeedError::DuplicateId(station.id));
        }
        stations.push(station);
    }
    Ok(stations)
}

/// The built-in sample stations, decoded.
pub fn sample_stations() -> Result<Vec<Station>, FeedError> {
    decode_feed(&SAMPLE_FEED)
}
