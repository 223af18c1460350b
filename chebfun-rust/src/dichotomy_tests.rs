use crate::dichotomy::{
    cutoff, dichotomy, prune, sample_function, threshold, DichotomyConfig, CONVERGENCE_FACTOR,
    MAX_EXPONENT,
};
use crate::error::ChebfunError;
use ndarray::{arr1, arr2, Array1, Array2};

fn scalar<F: Fn(f64) -> f64>(f: F) -> impl FnMut(f64) -> Result<Array1<f64>, ChebfunError> {
    move |x| Ok(arr1(&[f(x)]))
}

#[test]
fn test_threshold() {
    assert_eq!(threshold(1.0), CONVERGENCE_FACTOR * f64::EPSILON);
    assert_eq!(threshold(0.0), 0.0);
}

#[test]
fn test_default_config() {
    let config = DichotomyConfig::default();
    assert_eq!(config.effective_range(), (2, 12, true));
    assert_eq!(config.best_effort().effective_range(), (2, 12, false));
    assert_eq!(
        DichotomyConfig::new(3, 5, true).with_bounds(4, 6).effective_range(),
        (4, 6, true)
    );
}

#[test]
fn test_degree_hint_narrows_search() {
    let config = DichotomyConfig::default();
    assert_eq!(config.with_degree_hint(8).effective_range(), (3, 5, false));
    assert_eq!(config.with_degree_hint(9).effective_range(), (4, 6, false));
    assert_eq!(config.with_degree_hint(1).effective_range(), (0, 2, false));
    assert_eq!(config.with_degree_hint(0).effective_range(), (0, 2, false));
}

#[test]
fn test_sample_function_at_chebyshev_points() {
    let mut f = scalar(|x| 2.0 * x);
    let samples: Array2<f64> = sample_function(&mut f, 2, 1).unwrap();
    assert_eq!(samples.dim(), (3, 1));
    assert_eq!(samples[[0, 0]], 2.0);
    assert!(samples[[1, 0]].abs() < 1e-15);
    assert_eq!(samples[[2, 0]], -2.0);
}

#[test]
fn test_sample_function_rejects_wrong_width() {
    let mut f = |x: f64| -> Result<Array1<f64>, ChebfunError> { Ok(arr1(&[x, x])) };
    let err = sample_function(&mut f, 4, 1).unwrap_err();
    assert!(matches!(err, ChebfunError::InvalidInput(_)));
}

#[derive(Debug, PartialEq)]
enum UserError {
    Domain(f64),
    Cheb(ChebfunError),
}

impl From<ChebfunError> for UserError {
    fn from(err: ChebfunError) -> Self {
        UserError::Cheb(err)
    }
}

#[test]
fn test_sampling_failure_propagates_unchanged() {
    let mut calls = 0;
    let mut f = |x: f64| -> Result<Array1<f64>, UserError> {
        calls += 1;
        if x < 0.0 {
            Err(UserError::Domain(x))
        } else {
            Ok(arr1(&[x.sqrt()]))
        }
    };
    let err = dichotomy::<f64, _, _>(&mut f, 1, &DichotomyConfig::default()).unwrap_err();
    assert!(matches!(err, UserError::Domain(x) if x < 0.0));
    // Failed on the first trial, no retry
    assert!(calls <= 5);
}

#[test]
fn test_polynomial_converges_at_first_trial() {
    let mut f = scalar(|x| x * x);
    let result = dichotomy(&mut f, 1, &DichotomyConfig::default()).unwrap();
    assert!(result.converged);
    assert_eq!(result.coeffs.nrows(), 5);
    assert!((result.coeffs[[0, 0]] - 0.5).abs() < 1e-15);
    assert!((result.coeffs[[2, 0]] - 0.5).abs() < 1e-15);
    assert_eq!(result.scale, 1.0);
}

#[test]
fn test_exp_converges_and_tighter_functions_need_more_points() {
    let mut smooth = scalar(|x| x.exp());
    let mut sharp = scalar(|x| (10.0 * x).exp());
    let a = dichotomy(&mut smooth, 1, &DichotomyConfig::default()).unwrap();
    let b = dichotomy(&mut sharp, 1, &DichotomyConfig::default()).unwrap();
    assert!(a.converged && b.converged);
    assert!(b.coeffs.nrows() > a.coeffs.nrows());
}

#[test]
fn test_no_convergence_is_raised() {
    // |x| needs far more than 2^4 points
    let mut f = scalar(|x| x.abs());
    let config = DichotomyConfig::new(2, 5, true);
    match dichotomy(&mut f, 1, &config) {
        Err(ChebfunError::NoConvergence { last, bound }) => {
            assert!(last[0] > bound || last[1] > bound);
        }
        other => panic!("expected NoConvergence, got {:?}", other),
    }
}

#[test]
fn test_best_effort_returns_last_trial() {
    let mut f = scalar(|x| x.abs());
    let config = DichotomyConfig::new(2, 5, true).best_effort();
    let result = dichotomy(&mut f, 1, &config).unwrap();
    assert!(!result.converged);
    assert_eq!(result.coeffs.nrows(), 17);
}

#[test]
fn test_empty_range_is_rejected() {
    let mut f = scalar(|x| x);
    let err = dichotomy(&mut f, 1, &DichotomyConfig::new(5, 5, true)).unwrap_err();
    assert!(matches!(err, ChebfunError::InvalidInput(_)));
}

#[test]
fn test_oversized_range_is_rejected() {
    let mut f = scalar(|x| x);
    let err = dichotomy(&mut f, 1, &DichotomyConfig::new(2, 70, true)).unwrap_err();
    assert!(matches!(err, ChebfunError::InvalidInput(_)));
    let err = dichotomy(&mut f, 1, &DichotomyConfig::new(2, MAX_EXPONENT + 1, true)).unwrap_err();
    assert!(matches!(err, ChebfunError::InvalidInput(_)));

    // A hint whose next power of two overflows resolves past the limit
    let huge = DichotomyConfig::default().with_degree_hint(usize::MAX);
    let (_, kmax, _) = huge.effective_range();
    assert!(kmax > MAX_EXPONENT);
    let err = dichotomy(&mut f, 1, &huge).unwrap_err();
    assert!(matches!(err, ChebfunError::InvalidInput(_)));
}

#[test]
fn test_cutoff_and_prune() {
    let coeffs = arr2(&[[1.0], [0.5], [1e-3], [1e-20], [0.0]]);
    assert_eq!(cutoff(&coeffs, 1.0), 3);
    assert_eq!(prune(&coeffs, 1.0).nrows(), 3);
    // A huge scale swallows everything but the first coefficient
    assert_eq!(cutoff(&coeffs, 1e20), 1);
}

#[test]
fn test_cutoff_all_zero_keeps_one() {
    let coeffs = Array2::<f64>::zeros((6, 2));
    assert_eq!(cutoff(&coeffs, 1.0), 1);
}

#[test]
fn test_cutoff_vector_uses_any_component() {
    let coeffs = arr2(&[[1.0, 1.0], [0.0, 0.5], [0.0, 1e-20]]);
    assert_eq!(cutoff(&coeffs, 1.0), 2);
}
