//! Properties shared by every discretized chain.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use arkov_markov::{
    Ar1Params, DiscretizeError, MarkovChain, Method, discretize_rouwenhorst, discretize_tauchen,
};

/// Parameter sweep covering small and large grids, both signs of `rho`
/// and narrow to wide Tauchen spans.
fn sweep() -> Vec<Ar1Params> {
    let mut out = Vec::new();
    for &n in &[2, 3, 4, 5, 7, 10, 25, 50] {
        for &rho in &[-0.9, -0.5, -0.3, 0.0, 0.5, 0.95, 0.99] {
            for &sigma_e in &[0.007, 1.0] {
                for &m in &[1.0, 2.5, 3.0] {
                    out.push(Ar1Params::new(n, rho, sigma_e).with_span(m));
                }
            }
        }
    }
    out
}

fn assert_row_stochastic(chain: &MarkovChain, label: &str) {
    for (i, row) in chain.matrix().rows().enumerate() {
        let sum: f64 = row.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "{label}: row {i} sums to {sum}");
        for (j, &p) in row.iter().enumerate() {
            assert!((0.0..=1.0).contains(&p), "{label}: P[{i}][{j}] = {p}");
        }
    }
}

fn assert_symmetric_grid(chain: &MarkovChain, label: &str) {
    let z = chain.grid().values();
    let n = z.len();
    for w in z.windows(2) {
        assert!(w[0] < w[1], "{label}: grid not increasing: {z:?}");
    }
    for i in 0..n {
        assert_eq!(z[i], -z[n - 1 - i], "{label}: grid not symmetric: {z:?}");
    }
}

#[test]
fn every_chain_is_row_stochastic() {
    for params in sweep() {
        for method in Method::ALL {
            let chain = method.discretize(&params).unwrap();
            let label = format!("{method} {params:?}");
            assert_row_stochastic(&chain, &label);
            assert!(chain.matrix().validate().is_ok(), "{label}");
        }
    }
}

#[test]
fn every_grid_is_symmetric_and_increasing() {
    for params in sweep() {
        for method in Method::ALL {
            let chain = method.discretize(&params).unwrap();
            assert_symmetric_grid(&chain, &format!("{method} {params:?}"));
        }
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    for params in sweep() {
        for method in Method::ALL {
            let a = method.discretize(&params).unwrap();
            let b = method.discretize(&params).unwrap();
            assert_eq!(a, b);
        }
    }
}

#[test]
fn rouwenhorst_span_equals_tauchen_at_sqrt_n_minus_one() {
    let n = 5;
    let rouw = discretize_rouwenhorst(n, 0.95, 0.007).unwrap();
    let tauch = discretize_tauchen(n, 0.95, 0.007, ((n - 1) as f64).sqrt()).unwrap();
    for (r, t) in rouw.grid().values().iter().zip(tauch.grid().values()) {
        assert_relative_eq!(*r, *t, max_relative = 1e-12);
    }
}

#[test]
fn rouwenhorst_reference_calibration() {
    let chain = discretize_rouwenhorst(5, 0.95, 0.007).unwrap();
    let p: f64 = 0.975;
    let tm = chain.matrix();
    // Corner entries of the 5-state matrix are p^4 and (1-p)^4.
    assert_abs_diff_eq!(tm.prob(0, 0), p.powi(4), epsilon = 1e-12);
    assert_abs_diff_eq!(tm.prob(0, 4), (1.0 - p).powi(4), epsilon = 1e-12);
    assert_abs_diff_eq!(tm.prob(4, 4), p.powi(4), epsilon = 1e-12);
    // First row is Binomial(4, 1-p).
    assert_abs_diff_eq!(tm.prob(0, 1), 4.0 * p.powi(3) * (1.0 - p), epsilon = 1e-12);
    assert_abs_diff_eq!(tm.prob(0, 2), 6.0 * p.powi(2) * (1.0 - p).powi(2), epsilon = 1e-12);
    assert_row_stochastic(&chain, "rouwenhorst n=5");
}

#[test]
fn rouwenhorst_matches_process_moments() {
    for &(n, rho, sigma_e) in &[(3, 0.5, 1.0), (5, 0.95, 0.007), (15, -0.6, 0.2), (31, 0.99, 0.01)] {
        let params = Ar1Params::new(n, rho, sigma_e);
        let m = Method::Rouwenhorst.discretize(&params).unwrap().moments().unwrap();
        assert_abs_diff_eq!(m.mean, 0.0, epsilon = 1e-9 * params.sigma_z());
        assert_relative_eq!(m.sd, params.sigma_z(), max_relative = 1e-8);
        assert_abs_diff_eq!(m.autocorrelation.unwrap(), rho, epsilon = 1e-8);
    }
}

#[test]
fn tauchen_moments_on_fine_grid() {
    let params = Ar1Params::new(25, 0.5, 1.0);
    let m = Method::Tauchen.discretize(&params).unwrap().moments().unwrap();
    assert_abs_diff_eq!(m.mean, 0.0, epsilon = 1e-9);
    assert_relative_eq!(m.sd, params.sigma_z(), max_relative = 0.05);
    assert_abs_diff_eq!(m.autocorrelation.unwrap(), 0.5, epsilon = 0.03);
}

#[test]
fn domain_errors() {
    let cases: Vec<(Method, Ar1Params)> = vec![
        (Method::Tauchen, Ar1Params::new(5, 1.0, 0.007)),
        (Method::Tauchen, Ar1Params::new(5, -1.0, 0.007)),
        (Method::Tauchen, Ar1Params::new(0, 0.5, 0.007)),
        (Method::Tauchen, Ar1Params::new(1, 0.5, 0.007)),
        (Method::Tauchen, Ar1Params::new(5, 0.5, 0.0)),
        (Method::Tauchen, Ar1Params::new(5, 0.5, 0.007).with_span(-1.0)),
        (Method::Rouwenhorst, Ar1Params::new(5, 1.0, 0.007)),
        (Method::Rouwenhorst, Ar1Params::new(5, -1.0, 0.007)),
        (Method::Rouwenhorst, Ar1Params::new(0, 0.5, 0.007)),
        (Method::Rouwenhorst, Ar1Params::new(5, 0.5, 0.0)),
        (Method::Rouwenhorst, Ar1Params::new(5, 0.5, f64::NAN)),
        (Method::Tauchen, Ar1Params::new(5, 0.5, 1e308)),
        (Method::Tauchen, Ar1Params::new(50, 0.5, 5e-324)),
        (Method::Rouwenhorst, Ar1Params::new(5, 0.5, 1e308)),
        (Method::Rouwenhorst, Ar1Params::new(50, 0.5, 5e-324)),
    ];
    for (method, params) in cases {
        assert!(
            method.discretize(&params).is_err(),
            "{method} accepted invalid {params:?}"
        );
    }
}

#[test]
fn extreme_scales_never_yield_nan() {
    for &sigma_e in &[1e-320, 1e-300, 1e300, 1e307, 1e308] {
        for &n in &[2, 5, 50] {
            for method in Method::ALL {
                let params = Ar1Params::new(n, 0.9, sigma_e);
                match method.discretize(&params) {
                    Ok(chain) => {
                        let label = format!("{method} {params:?}");
                        assert_symmetric_grid(&chain, &label);
                        assert_row_stochastic(&chain, &label);
                    }
                    Err(e) => assert!(
                        matches!(
                            e,
                            DiscretizeError::DegenerateGrid { .. }
                                | DiscretizeError::NonFiniteParameter { .. }
                        ),
                        "{method} {params:?}: {e}"
                    ),
                }
            }
        }
    }
}

#[test]
fn rouwenhorst_ignores_span() {
    let base = Ar1Params::new(6, 0.7, 0.3);
    let a = Method::Rouwenhorst.discretize(&base).unwrap();
    let b = Method::Rouwenhorst.discretize(&base.with_span(-5.0)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_state_split() {
    let params = Ar1Params::new(1, 0.5, 1.0);
    assert_eq!(
        Method::Tauchen.discretize(&params).unwrap_err(),
        DiscretizeError::TooFewStates { n: 1, min: 2 }
    );
    let chain = Method::Rouwenhorst.discretize(&params).unwrap();
    assert_eq!(chain.n(), 1);
}
