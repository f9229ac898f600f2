//! Tests for weighted tile selection

#[cfg(test)]
mod tests {
    use dungeontiles::GenerationError;
    use dungeontiles::algorithm::selection::{PoolSource, select, total_weight};
    use dungeontiles::spatial::tiles::{Category, Tile};
    use rand::{SeedableRng, rngs::StdRng};

    fn tile(name: &str, weight: u32) -> Tile {
        Tile::new(name, format!("{name}.png"), Category::Upper).with_weight(weight)
    }

    const SOURCE: PoolSource = PoolSource::new(Category::Upper, false);

    // Tests a single tile is returned for every seed
    // Verified by always drawing from the RNG and returning the last tile
    #[test]
    fn test_select_singleton_pool() {
        let only = tile("only", 7);
        let pool = vec![&only];

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = select(&pool, SOURCE, &mut rng).unwrap();
            assert_eq!(chosen, &only);
        }
    }

    // Tests an empty pool reports the category and blank state it came from
    // Verified by returning a generic error without context
    #[test]
    fn test_select_empty_pool_names_source() {
        let pool: Vec<&Tile> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let err = select(&pool, PoolSource::new(Category::Side, true), &mut rng).unwrap_err();
        match err {
            GenerationError::EmptyCandidatePool { category, blank } => {
                assert_eq!(category, Category::Side);
                assert!(blank);
            }
            other => unreachable!("Expected EmptyCandidatePool, got {other}"),
        }
    }

    // Tests zero-weight tiles are never chosen
    // Verified by treating weight 0 as weight 1
    #[test]
    fn test_select_skips_zero_weight() {
        let dead = tile("dead", 0);
        let live = tile("live", 1);
        let pool = vec![&dead, &live, &dead];
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..500 {
            assert_eq!(select(&pool, SOURCE, &mut rng).unwrap().name, "live");
        }
    }

    // Tests pools with only zero weights count as empty
    // Verified by removing the total weight check
    #[test]
    fn test_select_all_zero_weight_is_empty() {
        let dead = tile("dead", 0);
        let mut rng = StdRng::seed_from_u64(3);

        assert!(matches!(
            select(&[&dead], SOURCE, &mut rng),
            Err(GenerationError::EmptyCandidatePool { .. })
        ));
        assert!(matches!(
            select(&[&dead, &dead], SOURCE, &mut rng),
            Err(GenerationError::EmptyCandidatePool { .. })
        ));
    }

    // Tests frequencies converge to weight ratios
    // Verified by selecting uniformly instead of by weight
    #[test]
    fn test_select_frequency_matches_weights() {
        let light = tile("light", 1);
        let heavy = tile("heavy", 3);
        let pool = vec![&light, &heavy];
        let mut rng = StdRng::seed_from_u64(2024);

        let trials = 20_000;
        let light_hits = (0..trials)
            .filter(|_| select(&pool, SOURCE, &mut rng).unwrap().name == "light")
            .count();

        let frequency = light_hits as f64 / f64::from(trials);
        assert!(
            (frequency - 0.25).abs() < 0.02,
            "Expected frequency near 0.25, got {frequency}"
        );
    }

    // Tests identical seeds give identical draws
    // Verified by seeding from entropy inside select
    #[test]
    fn test_select_is_reproducible() {
        let tiles: Vec<Tile> = (1..=5).map(|w| tile(&format!("t{w}"), w)).collect();
        let pool: Vec<&Tile> = tiles.iter().collect();

        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            assert_eq!(
                select(&pool, SOURCE, &mut first).unwrap(),
                select(&pool, SOURCE, &mut second).unwrap()
            );
        }
    }

    // Tests total weight sums every tile
    // Verified by ignoring the last tile
    #[test]
    fn test_total_weight() {
        let a = tile("a", 2);
        let b = tile("b", 0);
        let c = tile("c", 40);

        assert_eq!(total_weight(&[&a, &b, &c]), 42);
        assert_eq!(total_weight(&[]), 0);
    }
}
