use crate::core::filters::{location_score, matches_intent_price_band, matches_property_type};
use crate::models::{Intent, Property, Requirement, ScoringWeights};

/// Reason tags, in the order the criteria are evaluated.
pub const REASON_TYPE_INTENT: &str = "Type & Intent";
pub const REASON_BUDGET: &str = "Budget";
pub const REASON_LOCATION: &str = "Location";
pub const REASON_CONFIGURATION: &str = "Configuration";
pub const REASON_SIZE: &str = "Size";

/// Score a listing against a client requirement (0-100).
///
/// Scoring breakdown with the default weights:
///     base match      +40   # type and intent hard filters passed
///     budget fit      +25   # price within budget, widened 15% (rent) / 10% (buy)
///     location fit    +20   # exact sub-location; 15 for main location only
///     configuration   +10   # listing BHK among wanted configurations
///     size fit         +5   # size within range, widened 15%
///
/// A property-type or intent/price-band mismatch disqualifies outright:
/// score 0 with no reasons. Otherwise each contributing criterion appends
/// its reason tag, in evaluation order.
///
/// The same function serves both query directions, so a (client, property)
/// pair scores identically no matter which side asks.
pub fn calculate_match_score(
    requirement: &Requirement,
    property: &Property,
    weights: &ScoringWeights,
) -> (u32, Vec<String>) {
    if !matches_property_type(requirement, property) {
        return (0, Vec::new());
    }
    if !matches_intent_price_band(requirement, property) {
        return (0, Vec::new());
    }

    let mut score = weights.base;
    let mut reasons = vec![REASON_TYPE_INTENT.to_string()];

    // Budget fit, with a wider tolerance for rentals
    let budget_tolerance = if requirement.intent == Intent::Rent {
        weights.rent_budget_tolerance
    } else {
        weights.buy_budget_tolerance
    };
    if property.price >= requirement.min_budget
        && property.price <= requirement.max_budget * budget_tolerance
    {
        score += weights.budget;
        reasons.push(REASON_BUDGET.to_string());
    }

    // Location fit
    let location = location_score(requirement, property, weights);
    if location > 0 {
        score += location;
        reasons.push(REASON_LOCATION.to_string());
    }

    // Configuration fit (exact BHK label)
    if requirement
        .configurations
        .iter()
        .any(|config| config == &property.bhk)
    {
        score += weights.configuration;
        reasons.push(REASON_CONFIGURATION.to_string());
    }

    // Size fit
    if property.size_sqft >= requirement.min_size
        && property.size_sqft <= requirement.max_size * weights.size_tolerance
    {
        score += weights.size;
        reasons.push(REASON_SIZE.to_string());
    }

    (score, reasons)
}
