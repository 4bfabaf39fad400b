//! Worked examples: small maps whose orbit/whisker structure is known by hand.

use orbits::{
    inverse_pairs, DiscoveryEngine, DomainKind, DomainSeries, ModulusContext, Orbit, OrbitConfig,
    RunReport, Whisker,
};

fn discover(a: i64, b: i64, c: i64, n: u64, k: u32, kind: DomainKind) -> orbits::Discovery {
    let ctx = ModulusContext::from_base(a, b, c, n, k).expect("valid modulus");
    let series = DomainSeries::new(kind, ctx.modulus()).expect("domain fits");
    DiscoveryEngine::new(ctx, series).run()
}

/// f(x) = x² mod 5: fixed points 0 and 1, 4 hangs off 1, 2 and 3 off 4.
#[test]
fn squares_mod_5() {
    let found = discover(1, 0, 0, 5, 1, DomainKind::All);

    let orbits: Vec<&[u64]> = found.orbits.iter().map(Orbit::elements).collect();
    assert_eq!(orbits, vec![&[0u64][..], &[1u64][..]]);
    assert_eq!(found.orbits.as_slice()[0].whisker_count(), 0);
    assert_eq!(found.orbits.as_slice()[1].whisker_count(), 1);

    assert_eq!(
        found.whiskers.as_slice(),
        &[
            Whisker {
                root: 4,
                target: 1,
                attaches_to_orbit: true
            },
            Whisker {
                root: 2,
                target: 4,
                attaches_to_orbit: false
            },
            Whisker {
                root: 3,
                target: 4,
                attaches_to_orbit: false
            },
        ]
    );
}

/// f(x) = x + 1 mod 3: one 3-cycle, no whiskers.
#[test]
fn successor_mod_3() {
    let found = discover(0, 1, 1, 3, 1, DomainKind::All);
    assert_eq!(found.orbits.len(), 1);
    let orbit = &found.orbits.as_slice()[0];
    assert_eq!(orbit.elements(), &[0, 1, 2]);
    assert_eq!(orbit.cycle_length(), 3);
    assert_eq!(orbit.whisker_count(), 0);
    assert!(found.whiskers.is_empty());

    let histogram = found.histogram();
    assert_eq!(histogram.len(), 1);
    assert_eq!(histogram[0].to_string(), "3-Cycle Orbits: 1");
}

/// Inverses mod 5 over all residues: 0 has none.
#[test]
fn inverses_mod_5() {
    let ctx = ModulusContext::from_base(1, 0, 0, 5, 1).expect("valid modulus");
    let series = DomainSeries::new(DomainKind::All, 5).expect("domain fits");
    let pairs: Vec<_> = inverse_pairs(&ctx, &series)
        .iter()
        .map(|p| (p.x, p.y))
        .collect();
    assert_eq!(pairs, vec![(1, 1), (2, 3), (3, 2), (4, 4)]);
}

/// f(x) = x² + 1 mod 10 is one 6-cycle 0 → 1 → 2 → 5 → 6 → 7 with four
/// whiskers feeding it.
#[test]
fn squares_plus_one_mod_10() {
    let found = discover(1, 0, 1, 10, 1, DomainKind::All);
    assert_eq!(found.orbits.len(), 1);
    let orbit = &found.orbits.as_slice()[0];
    assert_eq!(orbit.elements(), &[0, 1, 2, 5, 6, 7]);
    assert_eq!(orbit.whisker_count(), 4);

    let mut roots: Vec<_> = found.whiskers.iter().map(|w| w.root).collect();
    roots.sort_unstable();
    assert_eq!(roots, vec![3, 4, 8, 9]);
    assert!(found.whiskers.iter().all(|w| w.attaches_to_orbit));
}

/// A prefix dropped in front of a cycle is reclassified on a later path.
#[test]
fn rho_prefix_becomes_whiskers() {
    // f(x) = x² + 2 mod 7: 0 → 2 → 6 → 3 → 4 → 4, so the path from 0 closes
    // the fixed point 4 behind a four-residue prefix.
    let found = discover(1, 0, 2, 7, 1, DomainKind::All);
    assert_eq!(found.orbits.as_slice()[0].elements(), &[4]);

    let roots: Vec<_> = found.whiskers.iter().map(|w| w.root).collect();
    for prefix in [0, 2, 6, 3] {
        assert!(roots.contains(&prefix), "{prefix} should be a whisker root");
    }
}

/// Odd-only domain whose images land on even residues.
#[test]
fn odd_domain_with_even_images() {
    // f(x) = x² + 1 mod 8 sends every odd residue to 2, and 2 → 5 → 2.
    let found = discover(1, 0, 1, 2, 3, DomainKind::Odd);
    let cycle: Vec<&[u64]> = found.orbits.iter().map(Orbit::elements).collect();
    assert_eq!(cycle, vec![&[2u64, 5][..]]);

    let mut roots: Vec<_> = found.whiskers.iter().map(|w| w.root).collect();
    roots.sort_unstable();
    assert_eq!(roots, vec![1, 3, 7]);
}

/// n = 0, k = 0 gives the degenerate modulus 1: a single fixed point.
#[test]
fn unit_modulus() {
    let found = discover(5, 5, 5, 0, 0, DomainKind::All);
    assert_eq!(found.orbits.len(), 1);
    assert_eq!(found.orbits.as_slice()[0].elements(), &[0]);
}

#[test]
fn report_text_rendering() {
    let config = OrbitConfig {
        a: 1,
        b: 0,
        c: 0,
        n: 5,
        k: 1,
        domain: DomainKind::All,
        print_inverses: true,
    };
    let report = RunReport::generate(&config).expect("valid config");
    let text = orbits::render_report(&report);

    assert!(text.contains("Inverses:\n1 <-> 1\n2 <-> 3\n3 <-> 2\n4 <-> 4\n"));
    assert!(text.contains("\nOrbit:\n0\nOrbit Size: 1 fixed point\nWhiskers: 0\n"));
    assert!(text.contains("\nOrbit:\n1\nOrbit Size: 1 fixed point\nWhiskers: 1\n"));
    assert!(text.contains("Total Whiskers : 3"));
    assert!(text.contains("2 -> 4*\n3 -> 4*\n"));
    assert!(text.contains("Fixed Points: 2\n"));
}
