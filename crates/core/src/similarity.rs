//! "Similar vehicles" ranking.
//!
//! A candidate qualifies if it matches at least one supplied criterion
//! (case-insensitive equality on make, model, or body type). Qualifying
//! candidates are ordered by a weighted score; ties keep collection order.

use crate::vehicle::Vehicle;

/// Score contributed by a make match.
pub const WEIGHT_MAKE: u32 = 3;

/// Score contributed by a model match.
pub const WEIGHT_MODEL: u32 = 2;

/// Score contributed by a body type match.
pub const WEIGHT_BODY_TYPE: u32 = 1;

/// Number of suggestions returned when no limit is given.
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;

/// Upper bound on requested suggestions.
pub const MAX_SIMILAR_LIMIT: usize = 50;

/// Clamp a requested limit to `0..=MAX_SIMILAR_LIMIT`, defaulting when absent.
pub fn clamp_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(DEFAULT_SIMILAR_LIMIT).min(MAX_SIMILAR_LIMIT)
}

/// What to compare candidates against. Empty strings are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct SimilarCriteria {
    pub make: Option<String>,
    pub model: Option<String>,
    pub body_type: Option<String>,
    /// Id to leave out, usually the vehicle currently being viewed.
    pub exclude: Option<String>,
    pub limit: usize,
}

impl SimilarCriteria {
    /// Criteria derived from a vehicle, excluding the vehicle itself.
    pub fn like(vehicle: &Vehicle, limit: usize) -> Self {
        Self {
            make: Some(vehicle.make.clone()),
            model: Some(vehicle.model.clone()),
            body_type: Some(vehicle.body_type.clone()),
            exclude: Some(vehicle.id.clone()),
            limit,
        }
    }
}

fn criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn matches(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_some_and(|w| w.to_lowercase() == actual.trim().to_lowercase())
}

/// Weighted match score of one vehicle; zero means it does not qualify.
pub fn similarity_score(vehicle: &Vehicle, criteria: &SimilarCriteria) -> u32 {
    let mut score = 0;
    if matches(criterion(&criteria.make), &vehicle.make) {
        score += WEIGHT_MAKE;
    }
    if matches(criterion(&criteria.model), &vehicle.model) {
        score += WEIGHT_MODEL;
    }
    if matches(criterion(&criteria.body_type), &vehicle.body_type) {
        score += WEIGHT_BODY_TYPE;
    }
    score
}

/// Rank `vehicles` against `criteria` and return at most `criteria.limit`.
///
/// When nothing qualifies, the first `limit` vehicles (minus the excluded
/// one) are returned in collection order so callers always have something
/// to show.
pub fn rank_similar(vehicles: &[Vehicle], criteria: &SimilarCriteria) -> Vec<Vehicle> {
    let excluded = |v: &Vehicle| criteria.exclude.as_deref() == Some(v.id.as_str());

    let mut scored: Vec<(u32, &Vehicle)> = vehicles
        .iter()
        .filter(|v| !excluded(*v))
        .map(|v| (similarity_score(v, criteria), v))
        .filter(|(score, _)| *score > 0)
        .collect();

    if scored.is_empty() {
        return vehicles
            .iter()
            .filter(|v| !excluded(*v))
            .take(criteria.limit)
            .cloned()
            .collect();
    }

    // `sort_by` is stable, so equal scores keep collection order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(criteria.limit)
        .map(|(_, v)| v.clone())
        .collect()
}
