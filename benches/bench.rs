// Criterion benchmarks for Propmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use propmatch::core::{calculate_match_score, Matcher};
use propmatch::models::{
    Client, ClientStatus, Furnishing, Intent, LocationPreference, Property, PropertyCategory,
    PropertyType, Requirement, ScoringWeights,
};

fn create_property(id: usize) -> Property {
    let now = chrono::Utc::now();
    Property {
        id: id.to_string(),
        agent_id: "agent-1".to_string(),
        category: PropertyCategory::Resale,
        property_type: PropertyType::Residential,
        project_name: format!("Project {}", id),
        city: "Kolkata".to_string(),
        main_location: if id % 2 == 0 { "New Town" } else { "Salt Lake" }.to_string(),
        sub_location: if id % 3 == 0 {
            "Action Area 1"
        } else {
            "Action Area 3"
        }
        .to_string(),
        address_text: None,
        bhk: if id % 4 == 0 { "2 BHK" } else { "3 BHK" }.to_string(),
        size_sqft: 1200.0 + (id % 10) as f64 * 100.0,
        floor: "4".to_string(),
        furnishing: Furnishing::Unfurnished,
        parking_count: 1,
        price: 8_000_000.0 + (id % 20) as f64 * 250_000.0,
        brokerage_percent: 1.0,
        google_map_link: None,
        created_at: now,
        updated_at: now,
    }
}

fn create_client() -> Client {
    let now = chrono::Utc::now();
    Client {
        id: "client-1".to_string(),
        agent_id: "agent-1".to_string(),
        name: "Bench Client".to_string(),
        phone: "9830000000".to_string(),
        email: None,
        source: None,
        status: ClientStatus::Warm,
        cancel_reason: None,
        notes: None,
        created_at: now,
        updated_at: now,
        requirement: Requirement {
            id: "req-1".to_string(),
            property_type: PropertyType::Residential,
            intent: Intent::Buy,
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
        },
    }
}

fn bench_score_pair(c: &mut Criterion) {
    let client = create_client();
    let property = create_property(0);
    let weights = ScoringWeights::default();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(
                black_box(&client.requirement),
                black_box(&property),
                black_box(&weights),
            )
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let client = create_client();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let properties: Vec<Property> = (0..*candidate_count).map(create_property).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matching_properties", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_matching_properties(black_box(&client), black_box(&properties))
                });
            },
        );
    }

    group.finish();
}

fn bench_reverse_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let property = create_property(0);
    let clients: Vec<Client> = (0..100).map(|_| create_client()).collect();

    c.bench_function("find_matching_clients_100", |b| {
        b.iter(|| matcher.find_matching_clients(black_box(&property), black_box(&clients)));
    });
}

criterion_group!(benches, bench_score_pair, bench_matching, bench_reverse_matching);

criterion_main!(benches);
