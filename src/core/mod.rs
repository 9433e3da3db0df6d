// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{
    is_sale_listing, location_score, matches_intent_price_band, matches_property_type,
    SALE_PRICE_THRESHOLD,
};
pub use matcher::{Matcher, DEFAULT_SCORE_THRESHOLD};
pub use scoring::calculate_match_score;
