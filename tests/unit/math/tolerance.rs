//! Tests for approximate floating-point comparisons

#[cfg(test)]
mod tests {
    use maze_markov::math::tolerance::{approx_eq, is_close, sums_to_one};

    #[test]
    fn test_is_close_combines_relative_and_absolute_tolerance() {
        assert!(is_close(1.0, 1.0 + 1e-9, 1e-5, 1e-8));
        assert!(is_close(1000.0, 1000.005, 1e-5, 0.0));
        assert!(!is_close(1000.0, 1000.02, 1e-5, 0.0));
        assert!(is_close(0.0, 1e-9, 0.0, 1e-8));
        assert!(!is_close(0.0, 1e-7, 0.0, 1e-8));
    }

    #[test]
    fn test_is_close_is_generic_over_float_width() {
        assert!(is_close(1.0_f32, 1.000_001_f32, 1e-5, 1e-8));
        assert!(!is_close(1.0_f32, 1.1_f32, 1e-5, 1e-8));
    }

    #[test]
    fn test_nan_is_never_close() {
        assert!(!is_close(f64::NAN, f64::NAN, 1.0, 1.0));
        assert!(!approx_eq(f64::NAN, 1.0));
    }

    #[test]
    fn test_approx_eq_uses_default_tolerances() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(!approx_eq(0.99, 1.0));
    }

    #[test]
    fn test_sums_to_one() {
        let thirds = [1.0 / 3.0; 3];
        assert!(sums_to_one(&thirds, 1e-12));
        assert!(!sums_to_one(&[0.5, 0.4], 1e-12));
        assert!(!sums_to_one(&Vec::<f64>::new(), 1e-12));
    }
}
