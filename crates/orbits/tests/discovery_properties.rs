//! Property-based tests for the discovery engine and analytics.
//!
//! Uses proptest over small moduli (m = n^k ≤ 27²) so that every generated
//! run finishes quickly while still covering all three domain kinds, negative
//! coefficients and the degenerate modulus 1.

use std::collections::HashMap;

use orbits::{
    inverse_pairs, Discovery, DiscoveryEngine, DomainKind, DomainSeries, ModulusContext,
};
use proptest::prelude::*;

fn domain_kind() -> impl Strategy<Value = DomainKind> {
    prop::sample::select(DomainKind::ALL.to_vec())
}

fn run(ctx: ModulusContext, kind: DomainKind) -> (DomainSeries, Discovery) {
    let series = DomainSeries::new(kind, ctx.modulus()).expect("small domain");
    let snapshot = series.clone();
    (snapshot, DiscoveryEngine::new(ctx, series).run())
}

prop_compose! {
    fn context()(a in -50i64..50, b in -50i64..50, c in -50i64..50, n in 1u64..28, k in 0u32..3)
        -> ModulusContext
    {
        ModulusContext::from_base(a, b, c, n, k).expect("non-zero modulus")
    }
}

// =============================================================================
// Partition
// =============================================================================

proptest! {
    /// Every domain residue is on exactly one orbit or is exactly one whisker
    /// root, never both.
    #[test]
    fn prop_domain_is_partitioned(ctx in context(), kind in domain_kind()) {
        let (domain, found) = run(ctx, kind);

        let mut on_orbit: HashMap<u64, usize> = HashMap::new();
        for orbit in &found.orbits {
            for &e in orbit.elements() {
                *on_orbit.entry(e).or_default() += 1;
            }
        }
        let mut as_root: HashMap<u64, usize> = HashMap::new();
        for w in &found.whiskers {
            *as_root.entry(w.root).or_default() += 1;
        }

        for x in domain.iter() {
            let o = on_orbit.get(&x).copied().unwrap_or(0);
            let r = as_root.get(&x).copied().unwrap_or(0);
            prop_assert_eq!(o + r, 1, "residue {} classified {} times", x, o + r);
        }
    }

    /// Running step-by-step empties the series and agrees with `run`.
    #[test]
    fn prop_stepping_matches_run(ctx in context(), kind in domain_kind()) {
        let series = DomainSeries::new(kind, ctx.modulus()).expect("small domain");
        let mut engine = DiscoveryEngine::new(ctx, series.clone());
        while engine.step().is_some() {}
        prop_assert!(engine.series().is_empty());
        prop_assert!(engine.path().is_empty());

        let stepped = engine.into_discovery();
        let ran = DiscoveryEngine::new(ctx, series).run();
        prop_assert_eq!(stepped.orbits.as_slice(), ran.orbits.as_slice());
        prop_assert_eq!(stepped.whiskers.as_slice(), ran.whiskers.as_slice());
    }
}

// =============================================================================
// Orbit and whisker validity
// =============================================================================

proptest! {
    /// Read cyclically, each orbit follows f and holds distinct residues.
    #[test]
    fn prop_orbits_follow_f(ctx in context(), kind in domain_kind()) {
        let (_, found) = run(ctx, kind);
        for orbit in &found.orbits {
            let e = orbit.elements();
            prop_assert_eq!(orbit.cycle_length(), e.len());
            for i in 0..e.len() {
                prop_assert_eq!(ctx.apply(e[i]), e[(i + 1) % e.len()]);
            }
            let mut distinct = e.to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(distinct.len(), e.len());
        }
    }

    /// f(root) = target, and the flag says whether target is on an orbit.
    #[test]
    fn prop_whiskers_follow_f(ctx in context(), kind in domain_kind()) {
        let (_, found) = run(ctx, kind);
        for w in &found.whiskers {
            prop_assert_eq!(ctx.apply(w.root), w.target);
            prop_assert_eq!(found.orbits.contains(w.target), w.attaches_to_orbit);
            if !w.attaches_to_orbit {
                prop_assert!(found.whiskers.is_root(w.target));
            }
        }
    }

    /// An orbit's whisker count equals the whiskers that target it.
    #[test]
    fn prop_whisker_counts_match(ctx in context(), kind in domain_kind()) {
        let (_, found) = run(ctx, kind);
        let mut expected = vec![0usize; found.orbits.len()];
        for w in found.whiskers.iter().filter(|w| w.attaches_to_orbit) {
            if let Some(id) = found.orbits.orbit_of(w.target) {
                expected[id] += 1;
            }
        }
        let actual: Vec<_> = found.orbits.iter().map(|o| o.whisker_count()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// The histogram accounts for every orbit, in ascending length.
    #[test]
    fn prop_histogram_totals(ctx in context(), kind in domain_kind()) {
        let (_, found) = run(ctx, kind);
        let histogram = found.histogram();
        let total: usize = histogram.iter().map(|c| c.count).sum();
        prop_assert_eq!(total, found.orbits.len());
        for pair in histogram.windows(2) {
            prop_assert!(pair[0].cycle_length < pair[1].cycle_length);
        }
    }
}

// =============================================================================
// The map and its inverses
// =============================================================================

proptest! {
    /// f is pure and lands in [0, m).
    #[test]
    fn prop_apply_is_pure(ctx in context(), x in 0u64..20_000) {
        let y = ctx.apply(x);
        prop_assert_eq!(y, ctx.apply(x));
        prop_assert!(y < ctx.modulus());
    }

    /// f agrees with direct evaluation in i128.
    #[test]
    fn prop_apply_matches_reference(
        a in -1000i64..1000,
        b in -1000i64..1000,
        c in -1000i64..1000,
        m in 1u64..10_000,
        x in 0u64..10_000,
    ) {
        let ctx = ModulusContext::new(a, b, c, m).expect("non-zero modulus");
        let x = x % m;
        let xi = i128::from(x);
        let expected = (i128::from(a) * xi * xi + i128::from(b) * xi + i128::from(c))
            .rem_euclid(i128::from(m));
        prop_assert_eq!(i128::from(ctx.apply(x)), expected);
    }

    /// Inverse pairs are genuine and symmetric.
    #[test]
    fn prop_inverse_pairs_symmetric(ctx in context(), kind in domain_kind()) {
        let domain = DomainSeries::new(kind, ctx.modulus()).expect("small domain");
        let pairs = inverse_pairs(&ctx, &domain);
        for p in &pairs {
            prop_assert_eq!(ctx.mul(p.x, p.y), 1);
            prop_assert!(pairs.iter().any(|q| q.x == p.y && q.y == p.x));
        }
    }
}
