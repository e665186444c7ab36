//! Tests for generator name resolution and dispatch

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use stratagen::generators::dispatch::{REGISTRY, Registry};
    use stratagen::{GenerationConfig, GenerationError, GeneratorKind, RangeKey, generate_data};

    // Tests every kind resolves under its registry name
    // Verified by swapping the two registry names
    #[test]
    fn test_names_resolve_to_their_kind() {
        for kind in GeneratorKind::ALL {
            let (resolved, _) = REGISTRY
                .resolve(kind.name())
                .expect("Built-in name should resolve");
            assert_eq!(resolved, kind);
            assert_eq!(kind.name().parse::<GeneratorKind>().ok(), Some(kind));
        }
        assert_eq!(
            REGISTRY.names(),
            vec!["random_distribution", "midpoint_displacement"]
        );
    }

    // Tests unknown names fail before the random source is touched
    // Verified by drawing parameters before resolving the name
    #[test]
    fn test_unknown_name_fails_without_drawing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut untouched = StdRng::seed_from_u64(1);

        let result = generate_data("histogram", None, &mut rng);

        match result {
            Err(GenerationError::NotFound { name, available }) => {
                assert_eq!(name, "histogram");
                assert_eq!(available, GeneratorKind::names());
            }
            other => unreachable!("Expected NotFound, got {other:?}"),
        }
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    // Tests name matching is exact
    // Verified by lowercasing the requested name
    #[test]
    fn test_name_matching_is_case_sensitive() {
        assert!("Random_Distribution".parse::<GeneratorKind>().is_err());
        assert!(REGISTRY.resolve("midpoint-displacement").is_err());
    }

    // Tests a caller config only needs the ranges it changes
    // Verified by replacing defaults wholesale with the caller config
    #[test]
    fn test_caller_config_layers_over_defaults() {
        let overrides = GenerationConfig::new().with_range(RangeKey::Layers, 5.0, 5.0);
        let mut rng = StdRng::seed_from_u64(2);

        for kind in GeneratorKind::ALL {
            let dataset = generate_data(kind.name(), Some(&overrides), &mut rng)
                .expect("Generation should succeed");
            assert_eq!(dataset.num_layers(), 5);
        }
    }

    // Tests generator errors propagate through dispatch unchanged
    // Verified by mapping generator errors to NotFound
    #[test]
    fn test_generator_errors_propagate() {
        let overrides = GenerationConfig::new().with_range(RangeKey::Rough, 2.0, 1.0);
        let mut rng = StdRng::seed_from_u64(3);

        let result = generate_data("midpoint_displacement", Some(&overrides), &mut rng);

        assert!(matches!(
            result,
            Err(GenerationError::Range {
                key: "rough_range",
                ..
            })
        ));
    }

    // Tests a restricted registry rejects generators it does not hold
    // Verified by resolving against GeneratorKind::ALL instead of entries
    #[test]
    fn test_restricted_registry() {
        let registry = Registry::with_kinds(&[GeneratorKind::RandomDistribution]);
        let mut rng = StdRng::seed_from_u64(4);

        assert!(registry.generate("random_distribution", None, &mut rng).is_ok());
        assert!(matches!(
            registry.generate("midpoint_displacement", None, &mut rng),
            Err(GenerationError::NotFound { .. })
        ));
    }

    // Tests identical seeds reproduce identical datasets
    // Verified by seeding from entropy inside dispatch
    #[test]
    fn test_seeded_dispatch_is_reproducible() {
        for kind in GeneratorKind::ALL {
            let first = generate_data(kind.name(), None, &mut StdRng::seed_from_u64(5))
                .expect("Generation should succeed");
            let second = generate_data(kind.name(), None, &mut StdRng::seed_from_u64(5))
                .expect("Generation should succeed");
            assert_eq!(first, second);
        }
    }
}
