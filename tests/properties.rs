//! Property tests for tire generation bounds and wheel formatting.
//!
//! Run with:
//!   cargo test --test properties

use proptest::prelude::*;
use tire_kit::GeneratorConfig;
use tire_kit::Material;
use tire_kit::RandomSource;
use tire_kit::RngSource;
use tire_kit::SequenceSource;
use tire_kit::TireGenerator;
use tire_kit::format_size_of_wheels;
use tire_kit::format_wheel_identifier;

proptest! {
    #[test]
    fn generated_tires_stay_in_bounds(seed in any::<u64>()) {
        let config = GeneratorConfig::default();
        let mut generator = TireGenerator::new(config.clone(), RngSource::seeded(seed)).unwrap();
        for _ in 0..8 {
            let tire = generator.generate();
            prop_assert!(tire.pressure >= 0.0);
            prop_assert!(tire.size.width >= 0.0);
            prop_assert!(tire.size.height >= 0.0);
            prop_assert!(config.pressure.contains(tire.pressure));
            prop_assert!(Material::ALL.contains(&tire.material));
        }
    }

    #[test]
    fn sequence_source_respects_ranges(units in proptest::collection::vec(0.0f64..1.0, 1..16)) {
        let config = GeneratorConfig::default();
        let mut generator = TireGenerator::new(config.clone(), SequenceSource::new(units)).unwrap();
        for _ in 0..8 {
            let tire = generator.generate();
            prop_assert!(config.pressure.contains(tire.pressure));
            prop_assert!(config.width.contains(tire.size.width));
            prop_assert!(config.height.contains(tire.size.height));
        }
    }

    #[test]
    fn large_bounds_stay_half_open(
        min in 1e12f64..1e18,
        span_ulps in 1u32..8,
        units in proptest::collection::vec(0.0f64..1.0, 1..16),
    ) {
        let ulp = f64::from_bits(min.to_bits() + 1) - min;
        let max = min + ulp * span_ulps as f64;
        let config = GeneratorConfig::default().with_pressure(min, max);
        let mut generator = TireGenerator::new(config.clone(), SequenceSource::new(units)).unwrap();
        for _ in 0..8 {
            let tire = generator.generate();
            prop_assert!(config.pressure.contains(tire.pressure));
        }
    }

    #[test]
    fn rng_source_never_panics(low in any::<f64>(), high in any::<f64>(), seed in any::<u64>()) {
        let mut source = RngSource::seeded(seed);
        let value = source.next_in_range(low, high);
        if low.is_finite() && high.is_finite() && low < high {
            prop_assert!(value >= low && value < high);
        }
    }

    #[test]
    fn formatting_is_pure(ids in proptest::collection::vec(any::<i64>(), 0..12)) {
        prop_assert_eq!(format_wheel_identifier(&ids), format_wheel_identifier(&ids));
        prop_assert_eq!(format_size_of_wheels(&ids), format_size_of_wheels(&ids));
    }

    #[test]
    fn identifiers_appear_in_order(ids in proptest::collection::vec(any::<i64>(), 1..12)) {
        let out = format_wheel_identifier(&ids);
        let joined = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ");
        prop_assert!(out.contains(&joined));
    }

    #[test]
    fn wheel_count_is_reported(ids in proptest::collection::vec(any::<i64>(), 2..40)) {
        let out = format_size_of_wheels(&ids);
        let expected = format!("({} wheels, ", ids.len());
        prop_assert!(out.contains(&expected));
    }
}
