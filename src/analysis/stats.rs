//! Small numeric helpers shared by the estimators.

use num_traits::ToPrimitive;

/// Arithmetic mean as `f64`; `None` for an empty slice.
pub fn mean<T: ToPrimitive + Copy>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().filter_map(|v| v.to_f64()).sum();
    Some(sum / values.len() as f64)
}

/// Discrete gradient with unit spacing: one-sided first differences at the two
/// ends, centered differences `(x[i+1] - x[i-1]) / 2` in the interior.
///
/// Returns an empty vector for fewer than two samples.
pub fn gradient(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    if n < 2 {
        return Vec::new();
    }
    let mut g = vec![0.0_f64; n];
    g[0] = x[1] - x[0];
    g[n - 1] = x[n - 1] - x[n - 2];
    for i in 1..n - 1 {
        g[i] = 0.5 * (x[i + 1] - x[i - 1]);
    }
    g
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_integers_and_empty() {
        assert_eq!(mean(&[1usize, 2, 3, 6]), Some(3.0));
        assert_eq!(mean::<usize>(&[]), None);
    }

    #[test]
    fn gradient_edges_and_interior() {
        assert_eq!(gradient(&[0.0, 1.0, 4.0, 9.0]), vec![1.0, 2.0, 4.0, 5.0]);
        assert_eq!(gradient(&[2.0, 5.0]), vec![3.0, 3.0]);
        assert!(gradient(&[1.0]).is_empty());
    }
}
