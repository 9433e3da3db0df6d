// Unit tests for the Propmatch scoring engine

use propmatch::core::{
    calculate_match_score, is_sale_listing, location_score, matches_intent_price_band,
    matches_property_type, SALE_PRICE_THRESHOLD,
};
use propmatch::models::{
    Furnishing, Intent, LocationPreference, Property, PropertyCategory, PropertyType, Requirement,
    ScoringWeights,
};

fn requirement(property_type: PropertyType, intent: Intent) -> Requirement {
    Requirement {
        id: "req-1".to_string(),
        property_type,
        intent,
        configurations: vec!["3 BHK".to_string()],
        min_budget: 8_000_000.0,
        max_budget: 12_000_000.0,
        min_size: 1400.0,
        max_size: 2000.0,
        locations: vec![LocationPreference {
            id: "loc-1".to_string(),
            main_location: "New Town".to_string(),
            sub_locations: vec!["Action Area 1".to_string()],
        }],
    }
}

fn listing(property_type: PropertyType, price: f64, sub_location: &str) -> Property {
    let now = chrono::Utc::now();
    Property {
        id: "prop-1".to_string(),
        agent_id: "agent-1".to_string(),
        category: PropertyCategory::Resale,
        property_type,
        project_name: "Green Acres".to_string(),
        city: "Kolkata".to_string(),
        main_location: "New Town".to_string(),
        sub_location: sub_location.to_string(),
        address_text: None,
        bhk: "3 BHK".to_string(),
        size_sqft: 1800.0,
        floor: "7".to_string(),
        furnishing: Furnishing::SemiFurnished,
        parking_count: 1,
        price,
        brokerage_percent: 1.0,
        google_map_link: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_perfect_match_scores_100_with_all_reasons() {
    let req = requirement(PropertyType::Residential, Intent::Buy);
    let prop = listing(PropertyType::Residential, 11_000_000.0, "Action Area 1");
    let weights = ScoringWeights::default();

    let (score, reasons) = calculate_match_score(&req, &prop, &weights);

    assert_eq!(score, 100);
    assert_eq!(
        reasons,
        vec!["Type & Intent", "Budget", "Location", "Configuration", "Size"]
    );
}

#[test]
fn test_main_location_only_scores_95() {
    let req = requirement(PropertyType::Residential, Intent::Buy);
    let prop = listing(PropertyType::Residential, 11_000_000.0, "Action Area 3");
    let weights = ScoringWeights::default();

    let (score, reasons) = calculate_match_score(&req, &prop, &weights);

    assert_eq!(score, 95);
    assert!(reasons.iter().any(|r| r == "Location"));
}

#[test]
fn test_type_mismatch_disqualifies_regardless_of_rest() {
    let req = requirement(PropertyType::Commercial, Intent::Buy);
    let prop = listing(PropertyType::Residential, 11_000_000.0, "Action Area 1");
    let weights = ScoringWeights::default();

    let (score, reasons) = calculate_match_score(&req, &prop, &weights);

    assert_eq!(score, 0);
    assert!(reasons.is_empty());
}

#[test]
fn test_rent_intent_vs_sale_priced_listing_disqualifies() {
    let req = requirement(PropertyType::Residential, Intent::Rent);
    let prop = listing(PropertyType::Residential, 6_800_000.0, "Action Area 1");
    let weights = ScoringWeights::default();

    let (score, reasons) = calculate_match_score(&req, &prop, &weights);

    assert_eq!(score, 0);
    assert!(reasons.is_empty());
}

#[test]
fn test_rent_tolerance_widens_budget() {
    let mut req = requirement(PropertyType::Residential, Intent::Rent);
    req.min_budget = 20_000.0;
    req.max_budget = 30_000.0;
    // 25_000 is within 30_000 * 1.15 = 34_500
    let prop = listing(PropertyType::Residential, 25_000.0, "Action Area 1");
    let weights = ScoringWeights::default();

    let (_, reasons) = calculate_match_score(&req, &prop, &weights);
    assert!(reasons.iter().any(|r| r == "Budget"));
}

#[test]
fn test_score_never_exceeds_100() {
    let weights = ScoringWeights::default();
    let req = requirement(PropertyType::Residential, Intent::Buy);

    for price in [100_001.0, 8_000_000.0, 11_000_000.0, 50_000_000.0] {
        for sub in ["Action Area 1", "Action Area 3", "Ghuni"] {
            let prop = listing(PropertyType::Residential, price, sub);
            let (score, _) = calculate_match_score(&req, &prop, &weights);
            assert!(score <= 100, "score {} out of range", score);
        }
    }
}

#[test]
fn test_repeated_calls_identical() {
    let req = requirement(PropertyType::Residential, Intent::Buy);
    let prop = listing(PropertyType::Residential, 11_000_000.0, "Action Area 3");
    let weights = ScoringWeights::default();

    let first = calculate_match_score(&req, &prop, &weights);
    for _ in 0..10 {
        assert_eq!(calculate_match_score(&req, &prop, &weights), first);
    }
}

#[test]
fn test_empty_locations_not_disqualifying() {
    let mut req = requirement(PropertyType::Residential, Intent::Buy);
    req.locations.clear();
    let prop = listing(PropertyType::Residential, 11_000_000.0, "Action Area 1");
    let weights = ScoringWeights::default();

    let (score, reasons) = calculate_match_score(&req, &prop, &weights);

    // Everything but location: 40 + 25 + 10 + 5
    assert_eq!(score, 80);
    assert!(!reasons.iter().any(|r| r == "Location"));
}

#[test]
fn test_sale_band_boundary() {
    assert!(!is_sale_listing(SALE_PRICE_THRESHOLD));
    assert!(is_sale_listing(SALE_PRICE_THRESHOLD + 1.0));
}

#[test]
fn test_hard_filter_predicates() {
    let req = requirement(PropertyType::Residential, Intent::Buy);
    let sale = listing(PropertyType::Residential, 11_000_000.0, "Ghuni");
    let rental = listing(PropertyType::Residential, 25_000.0, "Ghuni");
    let commercial = listing(PropertyType::Commercial, 11_000_000.0, "Ghuni");

    assert!(matches_property_type(&req, &sale));
    assert!(!matches_property_type(&req, &commercial));
    assert!(matches_intent_price_band(&req, &sale));
    assert!(!matches_intent_price_band(&req, &rental));
}

#[test]
fn test_location_scan_finds_maximum_after_partial_match() {
    let mut req = requirement(PropertyType::Residential, Intent::Buy);
    // First preference matches only the main location, a later one has the
    // exact sub-location; the maximum (20) must be used.
    req.locations = vec![
        LocationPreference {
            id: "loc-1".to_string(),
            main_location: "New Town".to_string(),
            sub_locations: vec!["Ghuni".to_string()],
        },
        LocationPreference {
            id: "loc-2".to_string(),
            main_location: "New Town".to_string(),
            sub_locations: vec!["Action Area 1".to_string()],
        },
    ];
    let prop = listing(PropertyType::Residential, 11_000_000.0, "Action Area 1");
    let weights = ScoringWeights::default();

    assert_eq!(location_score(&req, &prop, &weights), 20);
}
