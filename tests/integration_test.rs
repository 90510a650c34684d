// Integration tests for artrec
use artrec::prelude::*;
use artrec_storage::StorageManager;

fn catalog(dim: usize) -> Catalog {
    Catalog::new(CatalogConfig { vector_dim: dim })
}

fn artwork(id: &str, name: &str, embedding: Option<Vec<f32>>) -> Artwork {
    let art = Artwork::new(id, name, "m1", "Fukuoka Art Museum");
    match embedding {
        Some(data) => art.with_embedding(Vector::new(data)),
        None => art,
    }
}

#[test]
fn test_profile_and_similarity_worked_example() {
    // Ratings {A,90},{B,10} with A=[1,0], B=[0,1] give weights [0.8,-0.8],
    // profile [0.5,-0.5]; candidate C=[1,0] scores cos ~ 0.7071.
    let catalog = catalog(2);
    catalog
        .upsert(artwork("A", "a", Some(vec![1.0, 0.0])))
        .unwrap();
    catalog
        .upsert(artwork("B", "b", Some(vec![0.0, 1.0])))
        .unwrap();
    catalog
        .upsert(artwork("C", "c", Some(vec![1.0, 0.0])))
        .unwrap();

    let recommender = Recommender::new(RecommendConfig {
        candidate_ids: vec!["C".to_string()],
        ..RecommendConfig::default()
    });
    let ratings = vec![Rating::new("A", 90), Rating::new("B", 10)];

    let outcome = recommender.curated(&ratings, &catalog, &ExplanationIndex::new());
    let rows = outcome.recommendations();

    assert_eq!(rows.len(), 1);
    let similarity = rows[0].similarity.unwrap();
    assert!(
        (similarity - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-4,
        "similarity = {}",
        similarity
    );
}

#[test]
fn test_cancelling_weights_leave_all_similarities_null() {
    let catalog = catalog(2);
    catalog
        .upsert(artwork("A", "a", Some(vec![1.0, 0.0])))
        .unwrap();
    catalog
        .upsert(artwork("B", "b", Some(vec![0.0, 1.0])))
        .unwrap();

    let recommender = Recommender::new(RecommendConfig {
        candidate_ids: vec!["A".to_string(), "B".to_string()],
        ..RecommendConfig::default()
    });
    // Both scores sit at the neutral midpoint: |weight| sums to zero.
    let ratings = vec![Rating::new("A", 50), Rating::new("B", 50)];

    let outcome = recommender.curated(&ratings, &catalog, &ExplanationIndex::new());
    let rows = outcome.recommendations();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.similarity.is_none()));

    // Discovery has nothing defined to return.
    let discovery = recommender.discovery(&ratings, &catalog, None);
    assert!(!discovery.is_no_preferences());
    assert!(discovery.recommendations().is_empty());
}

#[test]
fn test_curated_ten_slots_two_unresolved() {
    let catalog = catalog(2);
    let mut candidate_ids = Vec::new();

    // Eight resolving artworks with distinct angles to [1,0].
    for i in 0..8 {
        let id = format!("art-{}", i);
        let angle = 0.1 + 0.15 * i as f32;
        catalog
            .upsert(artwork(
                &id,
                &format!("artwork {}", i),
                Some(vec![angle.cos(), angle.sin()]),
            ))
            .unwrap();
        candidate_ids.push(id);
    }
    candidate_ids.push("ghost-1".to_string());
    candidate_ids.push("ghost-2".to_string());

    catalog
        .upsert(artwork("seed", "seed", Some(vec![1.0, 0.0])))
        .unwrap();

    let recommender = Recommender::new(RecommendConfig {
        candidate_ids,
        ..RecommendConfig::default()
    });
    let ratings = vec![Rating::new("seed", 100)];

    let outcome = recommender.curated(&ratings, &catalog, &ExplanationIndex::new());
    let rows = outcome.recommendations();

    // Exactly N rows regardless of resolution.
    assert_eq!(rows.len(), 10);

    // Dense 1-based rank permutation.
    let mut ranks: Vec<usize> = rows.iter().map(|row| row.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=10).collect::<Vec<_>>());

    // Output arrives in rank order.
    assert!(rows.windows(2).all(|pair| pair[0].rank < pair[1].rank));

    // The two unresolved slots rank last and land in the bottom band.
    for row in rows {
        if row.artwork_id.starts_with("ghost") {
            assert!(row.similarity.is_none());
            assert!(row.rank >= 9, "null similarity must sort last");
            assert_eq!(row.level, Level::Low);
            assert!(row.name.is_none());
        } else {
            assert!(row.similarity.is_some());
        }
    }
}

#[test]
fn test_level_bands_for_ten_rows() {
    let catalog = catalog(2);
    let mut candidate_ids = Vec::new();
    for i in 0..10 {
        let id = format!("art-{}", i);
        let angle = 0.1 + 0.12 * i as f32;
        catalog
            .upsert(artwork(&id, "x", Some(vec![angle.cos(), angle.sin()])))
            .unwrap();
        candidate_ids.push(id);
    }
    catalog
        .upsert(artwork("seed", "seed", Some(vec![1.0, 0.0])))
        .unwrap();

    let recommender = Recommender::new(RecommendConfig {
        candidate_ids,
        ..RecommendConfig::default()
    });
    let ratings = vec![Rating::new("seed", 100)];

    let outcome = recommender.curated(&ratings, &catalog, &ExplanationIndex::new());
    for row in outcome.recommendations() {
        let expected = match row.rank {
            1..=3 => Level::High,
            8..=10 => Level::Low,
            _ => Level::Mid,
        };
        assert_eq!(row.level, expected, "rank {}", row.rank);
    }
}

#[test]
fn test_embedding_scale_does_not_change_rank() {
    let build = |scale: f32| {
        let catalog = catalog(2);
        catalog
            .upsert(artwork("seed", "seed", Some(vec![1.0, 0.0])))
            .unwrap();
        catalog
            .upsert(artwork(
                "near",
                "near",
                Some(vec![0.9 * scale, 0.1 * scale]),
            ))
            .unwrap();
        catalog
            .upsert(artwork("far", "far", Some(vec![0.1, 0.9])))
            .unwrap();

        let recommender = Recommender::new(RecommendConfig {
            discovery_limit: 2,
            ..RecommendConfig::default()
        });
        let ratings = vec![Rating::new("seed", 100)];
        let outcome = recommender.discovery(&ratings, &catalog, None);
        outcome
            .recommendations()
            .iter()
            .map(|row| (row.rank, row.artwork_id.clone(), row.similarity))
            .collect::<Vec<_>>()
    };

    let unscaled = build(1.0);
    let scaled = build(250.0);

    assert_eq!(unscaled.len(), 2);
    for ((rank_a, id_a, sim_a), (rank_b, id_b, sim_b)) in unscaled.iter().zip(scaled.iter()) {
        assert_eq!(rank_a, rank_b);
        assert_eq!(id_a, id_b);
        assert!((sim_a.unwrap() - sim_b.unwrap()).abs() < 1e-5);
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let catalog = catalog(2);
    for i in 0..20 {
        let angle = 0.05 * i as f32;
        catalog
            .upsert(artwork(
                &format!("art-{}", i),
                "x",
                Some(vec![angle.cos(), angle.sin()]),
            ))
            .unwrap();
    }

    let recommender = Recommender::new(RecommendConfig {
        candidate_ids: (0..10).map(|i| format!("art-{}", i)).collect(),
        discovery_limit: 5,
        ..RecommendConfig::default()
    });
    let ratings = vec![
        Rating::new("art-12", 95),
        Rating::new("art-15", 20),
        Rating::new("art-19", 70),
    ];

    let run = || {
        let curated = recommender.curated(&ratings, &catalog, &ExplanationIndex::new());
        let discovery = recommender.discovery(&ratings, &catalog, None);
        (
            serde_json::to_string(curated.recommendations()).unwrap(),
            serde_json::to_string(discovery.recommendations()).unwrap(),
        )
    };

    assert_eq!(run(), run());
}

#[test]
fn test_no_preferences_variant() {
    let catalog = catalog(2);
    catalog
        .upsert(artwork("A", "a", Some(vec![1.0, 0.0])))
        .unwrap();

    let recommender = Recommender::new(RecommendConfig {
        candidate_ids: vec!["A".to_string()],
        ..RecommendConfig::default()
    });

    assert!(recommender
        .curated(&[], &catalog, &ExplanationIndex::new())
        .is_no_preferences());
    assert!(recommender.discovery(&[], &catalog, None).is_no_preferences());
}

#[test]
fn test_discovery_through_storage_manager() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageManager::new(dir.path(), 2).unwrap();

    storage
        .catalog()
        .upsert(artwork("rated", "rated", Some(vec![1.0, 0.0])))
        .unwrap();
    storage
        .catalog()
        .upsert(artwork("fresh", "fresh", Some(vec![0.9, 0.1])))
        .unwrap();
    storage
        .catalog()
        .upsert(
            Artwork::new("banned", "banned", "m-ex", "Excluded Museum")
                .with_embedding(Vector::new(vec![1.0, 0.0])),
        )
        .unwrap();
    storage.preferences().rate("u1", "rated", 90).unwrap();

    let recommender = Recommender::new(RecommendConfig {
        excluded_museum_id: Some("m-ex".to_string()),
        ..RecommendConfig::default()
    });

    let ratings = storage.preferences().ratings("u1");
    let outcome = recommender.discovery(&ratings, storage.catalog(), None);
    let rows = outcome.recommendations();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].artwork_id, "fresh");
    assert_eq!(rows[0].museum_name.as_deref(), Some("Fukuoka Art Museum"));
}

#[test]
fn test_explanation_join_and_misses() {
    let catalog = catalog(2);
    catalog
        .upsert(artwork("A", "a", Some(vec![1.0, 0.0])))
        .unwrap();
    catalog
        .upsert(artwork("B", "b", Some(vec![0.0, 1.0])))
        .unwrap();

    let mut explanations = ExplanationIndex::new();
    explanations.insert("A", Level::High, "exp-A-3");
    // B gets an entry only for a level it will not land in.
    explanations.insert("B", Level::Mid, "exp-B-2");

    let recommender = Recommender::new(RecommendConfig {
        candidate_ids: vec!["A".to_string(), "B".to_string()],
        ..RecommendConfig::default()
    });
    let ratings = vec![Rating::new("A", 95)];

    let outcome = recommender.curated(&ratings, &catalog, &explanations);
    let rows = outcome.recommendations();

    assert_eq!(rows[0].artwork_id, "A");
    assert_eq!(rows[0].explanation_id.as_deref(), Some("exp-A-3"));
    // No fallback to adjacent levels: a miss is just null.
    assert_eq!(rows[1].artwork_id, "B");
    assert_eq!(rows[1].explanation_id, None);
}
