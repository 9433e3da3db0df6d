use crate::models::{Intent, Property, Requirement, ScoringWeights};

/// Price above which a listing is treated as being for sale rather than
/// for rent.
///
/// Listings carry no explicit transaction mode, so the price band is the
/// only signal. Known limitation: a low-priced sale or a premium rental is
/// misclassified. Changing this needs an explicit mode field on
/// [`Property`] and a data migration, so the threshold stays for now.
pub const SALE_PRICE_THRESHOLD: f64 = 100_000.0;

/// Whether a listing's price puts it in the sale band.
#[inline]
pub fn is_sale_listing(price: f64) -> bool {
    price > SALE_PRICE_THRESHOLD
}

/// Hard filter: requirement and listing must be the same property type.
#[inline]
pub fn matches_property_type(requirement: &Requirement, property: &Property) -> bool {
    requirement.property_type == property.property_type
}

/// Hard filter: the client's intent must agree with the listing's inferred
/// price band. Rent seekers are not shown sale-priced stock and vice versa.
#[inline]
pub fn matches_intent_price_band(requirement: &Requirement, property: &Property) -> bool {
    match requirement.intent {
        Intent::Rent => !is_sale_listing(property.price),
        Intent::Buy => is_sale_listing(property.price),
    }
}

/// Location sub-score for a listing against the client's preferences.
///
/// Preferences are scanned in the client's order. A main-location match is
/// worth `location_main`; a sub-location hit inside it is worth
/// `location_exact` and ends the scan, since no later preference can beat
/// it. The best sub-score seen wins; no matching main location means 0.
#[inline]
pub fn location_score(
    requirement: &Requirement,
    property: &Property,
    weights: &ScoringWeights,
) -> u32 {
    let mut best = 0;
    for preference in &requirement.locations {
        if preference.main_location == property.main_location {
            if preference
                .sub_locations
                .iter()
                .any(|sub| sub == &property.sub_location)
            {
                best = best.max(weights.location_exact);
                break;
            }
            best = best.max(weights.location_main);
        }
    }
    best
}
