//! Ordering and invariant properties that must hold across the input
//! space, checked on coarse grids rather than single points.

use abtest_engine::{
    calculate, ConfidenceEvolutionCalculator, EngineConfig, Method, TestParameters,
};

fn baseline_params() -> TestParameters {
    TestParameters {
        visits: 1000,
        conversions: 100,
        traffic: 500.0,
        variations: 2,
        improvement: 0.10,
        confidence: 0.95,
    }
}

#[test]
fn larger_improvements_never_need_more_samples() {
    let config = EngineConfig::quick();
    for method in [Method::Frequentist, Method::Bayesian] {
        let mut last = u64::MAX;
        for improvement in [0.05, 0.10, 0.20, 0.40] {
            let params = TestParameters {
                improvement,
                ..baseline_params()
            };
            let n = calculate(method, &params, &config)
                .unwrap()
                .required_sample_size_per_variation;
            assert!(
                n <= last,
                "{}: improvement {} needed {} samples, more than {} at the smaller lift",
                method,
                improvement,
                n,
                last
            );
            last = n;
        }
    }
}

#[test]
fn higher_confidence_never_needs_fewer_samples() {
    let config = EngineConfig::quick();
    for method in [Method::Frequentist, Method::Bayesian] {
        let mut last = 0u64;
        for confidence in [0.80, 0.90, 0.95, 0.99] {
            let params = TestParameters {
                confidence,
                ..baseline_params()
            };
            let n = calculate(method, &params, &config)
                .unwrap()
                .required_sample_size_per_variation;
            assert!(
                n >= last,
                "{}: confidence {} needed {} samples, fewer than {} at the lower level",
                method,
                confidence,
                n,
                last
            );
            last = n;
        }
    }
}

#[test]
fn totals_are_exact_multiples_of_variations() {
    let config = EngineConfig::quick();
    for variations in [2u32, 3, 5, 8] {
        let params = TestParameters {
            variations,
            ..baseline_params()
        };
        for method in [Method::Frequentist, Method::Bayesian] {
            let result = calculate(method, &params, &config).unwrap();
            assert!(result.required_sample_size_per_variation >= 1);
            assert_eq!(
                result.total_required_visits,
                result.required_sample_size_per_variation * u64::from(variations),
                "{} with {} variations",
                method,
                variations
            );
            assert_eq!(
                result.estimated_days,
                (result.total_required_visits as f64 / params.traffic).ceil() as u64
            );
        }
    }
}

#[test]
fn evolution_invariants_hold_across_inputs() {
    let calc = ConfidenceEvolutionCalculator::new(EngineConfig::default());

    for (visits, conversions, traffic, improvement) in [
        (1000, 100, 500.0, 0.10),
        (5000, 250, 1200.0, 0.15),
        (2000, 40, 300.0, 0.25),
    ] {
        let params = TestParameters {
            visits,
            conversions,
            traffic,
            improvement,
            variations: 2,
            confidence: 0.95,
        };
        let series = calc.calculate(&params).unwrap();
        assert!(!series.is_empty());

        for pair in series.points.windows(2) {
            assert!(pair[1].confidence_value >= pair[0].confidence_value);
            assert!(pair[1].interval_half_width <= pair[0].interval_half_width);
            assert!(pair[1].cumulative_sample_size >= pair[0].cumulative_sample_size);
        }
        for point in &series.points {
            assert!(point.cumulative_sample_size >= 1);
            assert!((0.0..1.0).contains(&point.confidence_value));
            assert!(point.interval_half_width > 0.0);
        }
    }
}

#[test]
fn evolution_is_independent_of_primary_method_settings() {
    // The projection must not move when Bayesian search knobs change.
    let params = baseline_params();
    let a = ConfidenceEvolutionCalculator::new(EngineConfig::default())
        .calculate(&params)
        .unwrap();
    let b = ConfidenceEvolutionCalculator::new(
        EngineConfig::default().seed(7).monte_carlo_draws(123).bayes_growth(2.0),
    )
    .calculate(&params)
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn parameters_round_trip_through_json() {
    let params = baseline_params();
    let json = serde_json::to_string(&params).unwrap();
    let back: TestParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(params, back);

    let config = EngineConfig::default();
    let a = calculate(Method::Frequentist, &params, &config).unwrap();
    let b = calculate(Method::Frequentist, &back, &config).unwrap();
    assert_eq!(a, b, "round-tripped parameters must compute identically");
}
