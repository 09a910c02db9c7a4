//! Decoders for the legacy string-encoded feed fields.
//!
//! The legacy station feed carries numeric values embedded in display
//! strings ("0.2 miles", "150kW", "₹8/unit"). These are parsed exactly once
//! at the ingestion boundary into the structured fields in [`crate::models`];
//! nothing downstream parses display strings again.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::multispace0,
    combinator::{all_consuming, map, value},
    number::complete::double,
    IResult, Parser,
};

use crate::error::FeedError;
use crate::models::{Distance, DistanceUnit, Price};

/// Parse a distance display string, e.g. "0.2 miles" or "3 km".
pub fn parse_distance(input: &str) -> Result<Distance, FeedError> {
    let parsed = all_consuming((double, multispace0, distance_unit))
        .parse(input.trim())
        .map(|(_, (magnitude, _, unit))| Distance { magnitude, unit });

    match parsed {
        Ok(distance) if distance.magnitude.is_finite() && distance.magnitude >= 0.0 => {
            Ok(distance)
        }
        _ => Err(FeedError::malformed("distance", input)),
    }
}

fn distance_unit(input: &str) -> IResult<&str, DistanceUnit> {
    alt((
        value(DistanceUnit::Miles, tag_no_case("miles")),
        value(DistanceUnit::Miles, tag_no_case("mi")),
        value(DistanceUnit::Kilometers, tag_no_case("km")),
    ))
    .parse(input)
}

/// Parse a charger power display string, e.g. "150kW", into kilowatts.
pub fn parse_power(input: &str) -> Result<f64, FeedError> {
    let parsed = all_consuming((
        double::<_, nom::error::Error<&str>>,
        multispace0,
        tag_no_case("kw"),
    ))
        .parse(input.trim())
        .map(|(_, (kw, _, _))| kw);

    match parsed {
        Ok(kw) if kw.is_finite() && kw > 0.0 => Ok(kw),
        _ => Err(FeedError::malformed("power", input)),
    }
}

/// Parse a price display string: either the literal "Free" or a
/// currency-symbol-prefixed per-unit rate such as "₹8/unit".
pub fn parse_price(input: &str) -> Result<Price, FeedError> {
    all_consuming(alt((
        value(Price::Free, tag_no_case("free")),
        price_per_unit,
    )))
    .parse(input.trim())
    .map(|(_, price)| price)
    .map_err(|_| FeedError::malformed("price", input))
}

fn price_per_unit(input: &str) -> IResult<&str, Price> {
    map(
        (currency_symbol, double, tag_no_case("/unit")),
        |(currency, amount, _)| Price::PerUnit {
            amount,
            currency: currency.to_string(),
        },
    )
    .parse(input)
}

fn currency_symbol(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_ascii_digit() && !c.is_whitespace() && c != '/').parse(input)
}
