// Criterion benchmarks for Amora Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use amora_match::core::heuristic_score;
use amora_match::models::{HeuristicWeights, Location, Preferences, Profile};
use amora_match::{haversine_distance, Matcher, UserRecord};

const INTERESTS: [&str; 6] = ["music", "travel", "food", "art", "fitness", "movies"];

fn candidate_profile(id: usize) -> Profile {
    Profile {
        user_id: format!("c{:04}", id),
        age: 22 + (id % 15) as u8,
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        location: Some(Location {
            latitude: 40.7128 + (id as f64 * 0.001) % 0.5,
            longitude: -74.0060 + (id as f64 * 0.001) % 0.5,
        }),
        interests: INTERESTS[..(id % INTERESTS.len())]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        relationship_goals: None,
        lifestyle: None,
        bio: None,
        education: None,
        occupation: None,
        profile_image: None,
        created_at: None,
    }
}

fn candidate_record(id: usize) -> UserRecord {
    UserRecord {
        user_id: format!("c{:04}", id),
        name: Some(format!("User {}", id)),
        profile: Some(candidate_profile(id)),
        preferences: None,
    }
}

fn viewer_profile() -> Profile {
    Profile {
        user_id: "viewer".to_string(),
        age: 28,
        gender: "male".to_string(),
        location: Some(Location { latitude: 40.7128, longitude: -74.0060 }),
        interests: vec!["music".to_string(), "travel".to_string(), "food".to_string()],
        relationship_goals: None,
        lifestyle: None,
        bio: None,
        education: None,
        occupation: None,
        profile_image: None,
        created_at: None,
    }
}

fn viewer_preferences() -> Preferences {
    Preferences {
        user_id: "viewer".to_string(),
        min_age: 21,
        max_age: 35,
        genders: vec!["female".to_string()],
        location: Some(Location { latitude: 40.7128, longitude: -74.0060 }),
        interests: vec![],
        relationship_goals: None,
        lifestyle: None,
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(40.7128),
                black_box(-74.0060),
                black_box(40.72),
                black_box(-74.01),
            )
        });
    });
}

fn bench_pair_scoring(c: &mut Criterion) {
    let weights = HeuristicWeights::default();
    let viewer = viewer_profile();
    let candidate = candidate_profile(2);
    let preferences = viewer_preferences();

    c.bench_function("heuristic_score_pair", |b| {
        b.iter(|| {
            heuristic_score(
                black_box(&viewer),
                black_box(&candidate),
                black_box(&preferences),
                black_box(&weights),
            )
        });
    });
}

fn bench_batch_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let viewer = UserRecord {
        user_id: "viewer".to_string(),
        name: Some("Viewer".to_string()),
        profile: Some(viewer_profile()),
        preferences: Some(viewer_preferences()),
    };

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<UserRecord> =
            (0..*candidate_count).map(candidate_record).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_matches(
                        black_box(&viewer),
                        black_box(candidates.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_pair_scoring,
    bench_batch_ranking
);

criterion_main!(benches);
