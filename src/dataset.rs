use crate::DataPoint;
use ndarray::array;

/// Number of features every reference sample and query vector carries.
pub const FEATURE_DIM: usize = 4;

/// The fixed reference dataset: one hand-picked sample per iris species.
///
/// Rebuilt on each call; three points are cheap and the library stays free of
/// shared state.
pub fn reference_samples() -> Vec<DataPoint<&'static str, f64>> {
    vec![
        DataPoint::new(array![5.1, 3.5, 1.4, 0.2], "setosa"),
        DataPoint::new(array![7.0, 3.2, 4.7, 1.4], "versicolor"),
        DataPoint::new(array![6.3, 3.3, 6.0, 2.5], "virginica"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_sample_carries_feature_dim_features() {
        for sample in reference_samples() {
            assert_eq!(sample.dim(), FEATURE_DIM);
        }
    }

    #[test]
    fn test_one_sample_per_species() {
        let labels: HashSet<&str> = reference_samples().iter().map(|dp| dp.label).collect();
        assert_eq!(labels.len(), 3);
        assert!(labels.contains("setosa"));
        assert!(labels.contains("versicolor"));
        assert!(labels.contains("virginica"));
    }
}
