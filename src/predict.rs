use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use decision_stump::{DecisionStump, DecisionStumpError};
use ndarray::ArrayView1;
use nearest_neighbor::{NearestNeighbor, NearestNeighborError};
use petal_helpers::L2Dist;

use crate::dataset::{reference_samples, FEATURE_DIM};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The closed set of algorithms the playground offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Algorithm {
    Knn,
    DecisionTree,
}

impl Algorithm {
    /// Every selectable algorithm, in menu order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Knn, Algorithm::DecisionTree];

    /// Stable tag used to select an algorithm by name.
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::Knn => "knn",
            Algorithm::DecisionTree => "decisionTree",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Knn => "K-Nearest Neighbors",
            Algorithm::DecisionTree => "Decision Tree",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.tag() == s)
            .ok_or_else(|| PredictError::UnknownAlgorithm(s.to_string()))
    }
}

/// Errors surfaced by [`predict`].
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The requested name matches no known algorithm
    UnknownAlgorithm(String),
    /// The query vector does not carry exactly [`FEATURE_DIM`] features
    DimensionMismatch { expected: usize, actual: usize },
    /// The nearest-neighbor classifier rejected the request
    NearestNeighbor(NearestNeighborError),
    /// The decision stump rejected the request
    DecisionStump(DecisionStumpError),
}

impl Display for PredictError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::UnknownAlgorithm(name) => {
                write!(
                    f,
                    "Unknown algorithm {:?}; expected one of: knn, decisionTree",
                    name
                )
            }
            PredictError::DimensionMismatch { expected, actual } => {
                write!(f, "Expected a vector of {} features, got {}", expected, actual)
            }
            PredictError::NearestNeighbor(e) => write!(f, "Nearest-neighbor: {}", e),
            PredictError::DecisionStump(e) => write!(f, "Decision stump: {}", e),
        }
    }
}

impl Error for PredictError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PredictError::NearestNeighbor(e) => Some(e),
            PredictError::DecisionStump(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NearestNeighborError> for PredictError {
    fn from(e: NearestNeighborError) -> Self {
        PredictError::NearestNeighbor(e)
    }
}

impl From<DecisionStumpError> for PredictError {
    fn from(e: DecisionStumpError) -> Self {
        PredictError::DecisionStump(e)
    }
}

// The stump splits on petal length (cm). Both boundaries are inclusive on
// the lower branch.
const PETAL_LENGTH: usize = 2;
const SETOSA_MAX_PETAL_LENGTH: f64 = 2.5;
const VERSICOLOR_MAX_PETAL_LENGTH: f64 = 4.8;

/// Classifies `features` with the selected algorithm.
///
/// Both classifiers are pure functions of the query and the fixed reference
/// data, so calling this twice with the same arguments returns the same
/// label.
///
/// # Errors
///
/// Returns `PredictError::DimensionMismatch` unless the query carries
/// exactly [`FEATURE_DIM`] features. Errors from the underlying classifiers
/// propagate, although the fixed reference data makes them unreachable
/// through this entry point.
pub fn predict(
    algorithm: Algorithm,
    features: ArrayView1<f64>,
) -> Result<&'static str, PredictError> {
    if features.len() != FEATURE_DIM {
        return Err(PredictError::DimensionMismatch {
            expected: FEATURE_DIM,
            actual: features.len(),
        });
    }

    match algorithm {
        Algorithm::Knn => {
            let model = NearestNeighbor::new(reference_samples(), L2Dist)?;
            Ok(model.predict(features)?)
        }
        Algorithm::DecisionTree => {
            let stump = DecisionStump::new(
                PETAL_LENGTH,
                vec![
                    (SETOSA_MAX_PETAL_LENGTH, "setosa"),
                    (VERSICOLOR_MAX_PETAL_LENGTH, "versicolor"),
                ],
                "virginica",
            )?;
            Ok(stump.predict(features)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_knn_returns_the_label_of_exact_dataset_points() {
        assert_eq!(
            predict(Algorithm::Knn, array![5.1, 3.5, 1.4, 0.2].view()),
            Ok("setosa")
        );
        assert_eq!(
            predict(Algorithm::Knn, array![7.0, 3.2, 4.7, 1.4].view()),
            Ok("versicolor")
        );
        assert_eq!(
            predict(Algorithm::Knn, array![6.3, 3.3, 6.0, 2.5].view()),
            Ok("virginica")
        );
    }

    #[test]
    fn test_decision_tree_boundaries() {
        assert_eq!(
            predict(Algorithm::DecisionTree, array![0.0, 0.0, 2.5, 0.0].view()),
            Ok("setosa")
        );
        assert_eq!(
            predict(Algorithm::DecisionTree, array![0.0, 0.0, 2.51, 0.0].view()),
            Ok("versicolor")
        );
        assert_eq!(
            predict(Algorithm::DecisionTree, array![0.0, 0.0, 4.8, 0.0].view()),
            Ok("versicolor")
        );
        assert_eq!(
            predict(Algorithm::DecisionTree, array![0.0, 0.0, 4.81, 0.0].view()),
            Ok("virginica")
        );
    }

    #[test]
    fn test_decision_tree_ignores_the_other_features() {
        let a = predict(Algorithm::DecisionTree, array![0.0, 0.0, 3.9, 0.0].view());
        let b = predict(
            Algorithm::DecisionTree,
            array![-7.5, 1e6, 3.9, 42.0].view(),
        );
        assert_eq!(a, b);
        assert_eq!(a, Ok("versicolor"));
    }

    #[test]
    fn test_predict_is_idempotent() {
        let query = array![6.1, 2.8, 4.7, 1.2];
        for algorithm in Algorithm::ALL {
            let first = predict(algorithm, query.view());
            let second = predict(algorithm, query.view());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_wrong_vector_length_is_rejected() {
        let short = array![1.0, 2.0, 3.0];
        for algorithm in Algorithm::ALL {
            assert_eq!(
                predict(algorithm, short.view()),
                Err(PredictError::DimensionMismatch {
                    expected: FEATURE_DIM,
                    actual: 3
                })
            );
        }
    }

    #[test]
    fn test_algorithm_tags_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.tag().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("knn".parse::<Algorithm>(), Ok(Algorithm::Knn));
        assert_eq!("decisionTree".parse::<Algorithm>(), Ok(Algorithm::DecisionTree));
    }

    #[test]
    fn test_unknown_algorithm_name_is_rejected() {
        let err = "randomForest".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            err,
            PredictError::UnknownAlgorithm("randomForest".to_string())
        );
        assert!(err.to_string().contains("randomForest"));
    }
}
