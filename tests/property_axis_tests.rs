use chart_layout::core::{Axis, MAX_TICK_COUNT, nice_ticks};
use proptest::prelude::*;

proptest! {
    #[test]
    fn widening_never_shrinks_the_domain(
        candidates in prop::collection::vec((-1_000.0f64..1_000.0, 0.0f64..1_000.0), 1..12),
        extra_space in 0.0f64..10.0
    ) {
        let mut axis = Axis::y("value", "").with_extra_space(extra_space);
        let mut previous = axis.domain();

        for (min_candidate, span) in candidates {
            let max_candidate = min_candidate + span;
            axis.widen_domain(min_candidate, max_candidate);
            let (min, max) = axis.domain();

            prop_assert!(min <= max);
            prop_assert!(min <= previous.0);
            prop_assert!(max >= previous.1);
            prop_assert!(min <= min_candidate);
            prop_assert!(max >= (max_candidate + extra_space + 0.5).floor());
            previous = (min, max);
        }
    }

    #[test]
    fn widening_order_does_not_matter(
        candidates in prop::collection::vec((-1_000.0f64..1_000.0, 0.0f64..1_000.0), 1..12),
        extra_space in 0.0f64..10.0
    ) {
        let mut forward = Axis::x("t", "").with_extra_space(extra_space);
        let mut backward = forward.clone();

        for &(min, span) in &candidates {
            forward.widen_domain(min, min + span);
        }
        for &(min, span) in candidates.iter().rev() {
            backward.widen_domain(min, min + span);
        }

        prop_assert_eq!(forward.domain(), backward.domain());
        prop_assert_eq!(forward.ticks(), backward.ticks());
    }

    #[test]
    fn interval_ticks_span_the_domain_in_order(
        min in -1_000.0f64..1_000.0,
        span in 1.0f64..1_000.0,
        interval in 0.5f64..100.0
    ) {
        let axis = Axis::x("t", "").with_tick_interval(interval).with_domain(min, min + span);
        let (domain_min, domain_max) = axis.domain();
        let ticks = axis.ticks();

        prop_assert!(ticks.len() >= 2);
        prop_assert!(ticks.len() <= MAX_TICK_COUNT + 1);
        prop_assert_eq!(ticks[0], domain_min);
        prop_assert_eq!(ticks[ticks.len() - 1], domain_max);
        for pair in ticks.windows(2) {
            prop_assert!(pair[1] > pair[0]);
            prop_assert!(pair[1] - pair[0] <= interval + 1e-9 * interval.max(1.0));
        }
    }

    #[test]
    fn nice_ticks_stay_inside_the_domain(
        start in -10_000.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        count in 1usize..20
    ) {
        let stop = start + span;
        let ticks = nice_ticks(start, stop, count);
        let tolerance = 1e-9 * start.abs().max(stop.abs()).max(1.0);

        for tick in &ticks {
            prop_assert!(*tick >= start - tolerance);
            prop_assert!(*tick <= stop + tolerance);
        }
        for pair in ticks.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }
}
