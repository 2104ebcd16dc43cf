//! Browse filtering and sorting for the inventory page.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::vehicle::{Condition, Vehicle};

/// Sort orders offered on the inventory page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    MileageAsc,
    YearDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Newest,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::MileageAsc,
        SortOrder::YearDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
            SortOrder::MileageAsc => "mileage_asc",
            SortOrder::YearDesc => "year_desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest arrivals",
            SortOrder::PriceAsc => "Price: low to high",
            SortOrder::PriceDesc => "Price: high to low",
            SortOrder::MileageAsc => "Lowest mileage",
            SortOrder::YearDesc => "Newest model year",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

/// Treat a missing or blank query value as `None`, otherwise parse it.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Browse filter; every field is optional and `None` means "any".
///
/// Deserialized straight from the inventory page query string. Empty select
/// values (`?make=&max_price=`) are ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InventoryFilter {
    pub make: Option<String>,
    pub body_type: Option<String>,
    pub condition: Option<String>,
    pub fuel_type: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub max_price: Option<i64>,
    #[serde(deserialize_with = "blank_as_none")]
    pub min_year: Option<i32>,
    #[serde(deserialize_with = "blank_as_none")]
    pub max_mileage: Option<i64>,
    /// Free text matched against title, make, model, and trim.
    pub q: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub sort: Option<SortOrder>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn eq_ignore_case(wanted: Option<&str>, actual: &str) -> bool {
    wanted.map_or(true, |w| w.eq_ignore_ascii_case(actual.trim()))
}

impl InventoryFilter {
    /// Whether any narrowing criterion is set (sort alone does not count).
    pub fn is_active(&self) -> bool {
        active(&self.make).is_some()
            || active(&self.body_type).is_some()
            || active(&self.condition).is_some()
            || active(&self.fuel_type).is_some()
            || active(&self.q).is_some()
            || self.max_price.is_some()
            || self.min_year.is_some()
            || self.max_mileage.is_some()
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if !eq_ignore_case(active(&self.make), &vehicle.make)
            || !eq_ignore_case(active(&self.body_type), &vehicle.body_type)
            || !eq_ignore_case(active(&self.fuel_type), &vehicle.fuel_type)
        {
            return false;
        }

        if let Some(raw) = active(&self.condition) {
            if Condition::parse(raw) != Some(vehicle.condition) {
                return false;
            }
        }

        if self.max_price.is_some_and(|max| vehicle.price > max)
            || self.min_year.is_some_and(|min| vehicle.year < min)
            || self.max_mileage.is_some_and(|max| vehicle.mileage > max)
        {
            return false;
        }

        match active(&self.q) {
            Some(q) => {
                let haystack = format!(
                    "{} {} {} {}",
                    vehicle.display_title(),
                    vehicle.make,
                    vehicle.model,
                    vehicle.trim
                )
                .to_lowercase();
                q.to_lowercase()
                    .split_whitespace()
                    .all(|term| haystack.contains(term))
            }
            None => true,
        }
    }

    /// Filter and sort a copy of `vehicles`.
    pub fn apply(&self, vehicles: &[Vehicle]) -> Vec<Vehicle> {
        let mut out: Vec<Vehicle> = vehicles
            .iter()
            .filter(|v| self.matches(v))
            .cloned()
            .collect();
        sort_vehicles(&mut out, self.sort.unwrap_or_default());
        out
    }
}

/// Sort in place; all orders are stable.
pub fn sort_vehicles(vehicles: &mut [Vehicle], order: SortOrder) {
    match order {
        SortOrder::Newest => vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::PriceAsc => vehicles.sort_by_key(|v| v.price),
        SortOrder::PriceDesc => vehicles.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::MileageAsc => vehicles.sort_by_key(|v| v.mileage),
        SortOrder::YearDesc => vehicles.sort_by(|a, b| b.year.cmp(&a.year)),
    }
}

/// Featured vehicles in collection order, topped up with the newest
/// arrivals when fewer than `limit` are flagged.
pub fn featured(vehicles: &[Vehicle], limit: usize) -> Vec<Vehicle> {
    let mut picks: Vec<Vehicle> = vehicles
        .iter()
        .filter(|v| v.featured)
        .take(limit)
        .cloned()
        .collect();

    if picks.len() < limit {
        let mut rest: Vec<Vehicle> = vehicles.iter().filter(|v| !v.featured).cloned().collect();
        sort_vehicles(&mut rest, SortOrder::Newest);
        picks.extend(rest.into_iter().take(limit - picks.len()));
    }

    picks
}

/// Distinct makes present in the inventory, sorted, for the filter select.
pub fn distinct_makes(vehicles: &[Vehicle]) -> Vec<String> {
    vehicles
        .iter()
        .map(|v| v.make.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
