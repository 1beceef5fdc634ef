use proptest::prelude::*;
use skillcurve_core::{predict, project, SkillDefinition, SkillRegistry};
use std::collections::HashMap;

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy)]
struct Params {
    base: f64,
    ceiling: f64,
    rate: f64,
    shape: f64,
}

fn arb_params() -> impl Strategy<Value = Params> {
    (0.0f64..=100.0, 0.0f64..=1.0, 0.01f64..5.0, 0.1f64..4.0).prop_map(
        |(base, span, rate, shape)| Params {
            base,
            ceiling: (base + (100.0 - base) * span).min(100.0),
            rate,
            shape,
        },
    )
}

fn arb_tied_registry() -> impl Strategy<Value = Vec<SkillDefinition>> {
    // Few distinct parameter sets so equal predictions are common.
    let palette = [
        (30.0, 80.0, 0.6, 1.0),
        (30.0, 80.0, 0.6, 1.0),
        (50.0, 50.0, 0.5, 1.0),
        (10.0, 90.0, 0.45, 2.0),
    ];
    prop::collection::vec(0usize..palette.len(), 1..12).prop_map(move |picks| {
        picks
            .into_iter()
            .enumerate()
            .map(|(position, pick)| {
                let (base, ceiling, rate, shape) = palette[pick];
                SkillDefinition::new(format!("skill-{position}"), base, ceiling, rate, shape)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn zero_elapsed_returns_base(params in arb_params()) {
        let value = predict(params.base, params.ceiling, params.rate, params.shape, 0.0);
        prop_assert_eq!(value, params.base);
    }

    #[test]
    fn growth_is_monotonic_and_capped(
        params in arb_params(),
        t1 in 0.0f64..30.0,
        step in 0.0f64..30.0,
    ) {
        let t2 = t1 + step;
        let early = predict(params.base, params.ceiling, params.rate, params.shape, t1);
        let late = predict(params.base, params.ceiling, params.rate, params.shape, t2);
        prop_assert!(early <= late + TOLERANCE, "early={} late={}", early, late);
        prop_assert!(late <= params.ceiling + TOLERANCE, "late={} ceiling={}", late, params.ceiling);
    }

    #[test]
    fn output_stays_on_level_scale_for_any_finite_input(
        base in -1.0e9f64..1.0e9,
        ceiling in -1.0e9f64..1.0e9,
        rate in -1.0e3f64..1.0e3,
        shape in -10.0f64..10.0,
        elapsed in -1.0e6f64..1.0e6,
    ) {
        let value = predict(base, ceiling, rate, shape, elapsed);
        prop_assert!((0.0..=100.0).contains(&value), "value={}", value);
    }

    #[test]
    fn negative_elapsed_matches_zero(params in arb_params(), negative in -1.0e6f64..0.0) {
        prop_assert_eq!(
            predict(params.base, params.ceiling, params.rate, params.shape, negative),
            predict(params.base, params.ceiling, params.rate, params.shape, 0.0)
        );
    }

    #[test]
    fn ranking_is_descending_and_stable(
        definitions in arb_tied_registry(),
        elapsed in 0.0f64..10.0,
    ) {
        let registry = SkillRegistry::from_definitions(definitions).expect("registry");
        let insertion: HashMap<&str, usize> = registry
            .names()
            .into_iter()
            .enumerate()
            .map(|(position, name)| (name, position))
            .collect();

        let results = project(&registry, elapsed);
        prop_assert_eq!(results.len(), registry.len());
        for pair in results.windows(2) {
            prop_assert!(pair[0].predicted >= pair[1].predicted);
            if pair[0].predicted == pair[1].predicted {
                prop_assert!(insertion[pair[0].name.as_str()] < insertion[pair[1].name.as_str()]);
            }
        }
    }

    #[test]
    fn projection_is_idempotent(definitions in arb_tied_registry(), elapsed in -5.0f64..10.0) {
        let registry = SkillRegistry::from_definitions(definitions).expect("registry");
        prop_assert_eq!(project(&registry, elapsed), project(&registry, elapsed));
    }
}
