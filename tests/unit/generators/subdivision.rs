//! Tests for breadth-first midpoint subdivision and point ordering

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use stratagen::GenerationError;
    use stratagen::generators::subdivision::{Point, midpoint_displacement, point_count};
    use stratagen::io::configuration::MAX_ITERATIONS;

    // Tests zero passes leave the anchors untouched
    // Verified by always running one pass
    #[test]
    fn test_zero_iterations_returns_anchors() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Point::new(0.0, 4.0);
        let end = Point::new(10.0, 7.0);

        let sequence = midpoint_displacement(start, end, 1.0, 50.0, 0, &mut rng)
            .expect("Zero iterations should succeed");

        assert_eq!(sequence.points(), &[start, end]);
    }

    // Tests zero passes keep descending anchors in the given order
    // Verified by ordering anchors by x before checking the depth
    #[test]
    fn test_zero_iterations_keeps_descending_anchors() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Point::new(10.0, 1.0);
        let end = Point::new(0.0, 2.0);

        let sequence = midpoint_displacement(start, end, 1.0, 5.0, 0, &mut rng)
            .expect("Zero iterations should succeed");

        assert_eq!(sequence.points(), &[start, end]);
        assert_eq!(sequence.xs().to_vec(), vec![10.0, 0.0]);
    }

    // Tests zero displacement gives a flat line with evenly halved x spacing
    // Verified by inserting midpoints at the left neighbour's x
    #[test]
    fn test_zero_displacement_is_flat_with_even_spacing() {
        let mut rng = StdRng::seed_from_u64(2);

        let sequence = midpoint_displacement(
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            1.0,
            0.0,
            3,
            &mut rng,
        )
        .expect("Subdivision should succeed");

        assert_eq!(sequence.len(), 9);
        for (i, point) in sequence.points().iter().enumerate() {
            let expected_x = 1.25 * i as f64;
            assert!(
                (point.x() - expected_x).abs() < 1e-12,
                "Point {i} has x {} but expected {expected_x}",
                point.x()
            );
            assert!((point.y() - 10.0).abs() < 1e-12, "Point {i} is not flat");
        }
    }

    // Tests every pass doubles the segment count
    // Verified by skipping the last segment in each pass
    #[test]
    fn test_point_count_per_iteration() {
        let mut rng = StdRng::seed_from_u64(3);

        for iterations in 0..8_u32 {
            let sequence = midpoint_displacement(
                Point::new(0.0, 20.0),
                Point::new(100.0, 20.0),
                0.8,
                5.0,
                i64::from(iterations),
                &mut rng,
            )
            .expect("Subdivision should succeed");

            assert_eq!(sequence.len(), point_count(iterations));
            assert_eq!(sequence.len(), 2 + (1 << iterations) - 1);
        }
    }

    // Tests large displacements never push y below zero
    // Verified by removing the clamp in Point::new
    #[test]
    fn test_y_values_never_negative() {
        let mut rng = StdRng::seed_from_u64(4);

        let sequence = midpoint_displacement(
            Point::new(0.0, 0.0),
            Point::new(10.0, 1.0),
            0.0,
            100.0,
            8,
            &mut rng,
        )
        .expect("Subdivision should succeed");

        assert!(sequence.points().iter().all(|p| p.y() >= 0.0));
        assert!(
            sequence.points().iter().any(|p| p.y() > 0.0),
            "Positive displacements should survive clamping"
        );
    }

    // Tests negative anchor values are clamped on creation
    // Verified by storing y unchanged
    #[test]
    fn test_point_clamps_negative_y() {
        let point = Point::new(-3.0, -8.5);

        assert!((point.x() + 3.0).abs() < f64::EPSILON, "x must not be clamped");
        assert!(point.y().abs() < f64::EPSILON);
    }

    // Tests x stays non-decreasing, even for descending anchors
    // Verified by keeping anchors in the given order
    #[test]
    fn test_x_sorted_for_descending_anchors() {
        let mut rng = StdRng::seed_from_u64(5);

        let sequence = midpoint_displacement(
            Point::new(40.0, 5.0),
            Point::new(0.0, 5.0),
            1.0,
            3.0,
            5,
            &mut rng,
        )
        .expect("Subdivision should succeed");

        let xs = sequence.xs();
        assert!(xs.windows(2).into_iter().all(|w| w[0] <= w[1]));
        assert!((xs[0]).abs() < f64::EPSILON);
        assert!((xs[xs.len() - 1] - 40.0).abs() < f64::EPSILON);
    }

    // Tests each new midpoint is displaced by exactly the current magnitude
    // Verified by displacing before averaging
    #[test]
    fn test_midpoint_displaced_by_current_magnitude() {
        let mut rng = StdRng::seed_from_u64(6);

        let sequence = midpoint_displacement(
            Point::new(0.0, 100.0),
            Point::new(4.0, 100.0),
            0.0,
            1.0,
            2,
            &mut rng,
        )
        .expect("Subdivision should succeed");

        let ys = sequence.ys();
        assert!(((ys[2] - 100.0).abs() - 1.0).abs() < 1e-12);
        assert!(((ys[1] - (ys[0] + ys[2]) / 2.0).abs() - 1.0).abs() < 1e-12);
        assert!(((ys[3] - (ys[2] + ys[4]) / 2.0).abs() - 1.0).abs() < 1e-12);
    }

    // Tests high roughness decays displacement to almost nothing after one pass
    // Verified by decaying with 2^roughness instead of 2^-roughness
    #[test]
    fn test_roughness_decays_displacement() {
        let mut rng = StdRng::seed_from_u64(7);

        let sequence = midpoint_displacement(
            Point::new(0.0, 10.0),
            Point::new(4.0, 10.0),
            50.0,
            4.0,
            2,
            &mut rng,
        )
        .expect("Subdivision should succeed");

        let ys = sequence.ys();
        assert!(((ys[2] - 10.0).abs() - 4.0).abs() < 1e-12);
        assert!((ys[1] - (ys[0] + ys[2]) / 2.0).abs() < 1e-9);
        assert!((ys[3] - (ys[2] + ys[4]) / 2.0).abs() < 1e-9);
    }

    // Tests equal-x midpoints are merged after existing points
    // Verified by merging new points first on ties
    #[test]
    fn test_equal_x_ties_keep_existing_points_first() {
        let mut rng = StdRng::seed_from_u64(8);

        let sequence = midpoint_displacement(
            Point::new(5.0, 1.0),
            Point::new(5.0, 3.0),
            1.0,
            0.0,
            1,
            &mut rng,
        )
        .expect("Subdivision should succeed");

        let ys: Vec<f64> = sequence.ys().to_vec();
        assert_eq!(ys, vec![1.0, 3.0, 2.0]);
    }

    // Tests negative depth is rejected
    // Verified by treating negative depth as zero
    #[test]
    fn test_negative_iterations_rejected() {
        let mut rng = StdRng::seed_from_u64(9);

        let result = midpoint_displacement(
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            1.0,
            1.0,
            -1,
            &mut rng,
        );

        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter {
                parameter: "num_iterations",
                ..
            })
        ));
    }

    // Tests depth above the allocation limit is rejected
    // Verified by removing the upper bound check
    #[test]
    fn test_excessive_iterations_rejected() {
        let mut rng = StdRng::seed_from_u64(10);

        let result = midpoint_displacement(
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            1.0,
            1.0,
            MAX_ITERATIONS + 1,
            &mut rng,
        );

        assert!(result.is_err());
    }

    // Tests identical seeds reproduce identical curves
    // Verified by drawing displacement signs from thread_rng
    #[test]
    fn test_seeded_subdivision_is_reproducible() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            midpoint_displacement(
                Point::new(0.0, 30.0),
                Point::new(64.0, 12.0),
                0.7,
                15.0,
                6,
                &mut rng,
            )
            .expect("Subdivision should succeed")
        };

        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }
}
