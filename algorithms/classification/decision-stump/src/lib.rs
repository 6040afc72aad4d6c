use ndarray::ArrayView1;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use petal_helpers::Float;

/// Errors that can occur when building or applying a decision stump.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionStumpError {
    /// Branch thresholds must be strictly increasing
    UnorderedThresholds,
    /// The split feature index lies outside the query vector
    FeatureIndexOutOfBounds { index: usize, dim: usize },
}

impl Display for DecisionStumpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionStumpError::UnorderedThresholds => {
                write!(f, "Branch thresholds must be strictly increasing")
            }
            DecisionStumpError::FeatureIndexOutOfBounds { index, dim } => {
                write!(
                    f,
                    "Split feature index {} lies outside a query vector with {} features",
                    index, dim
                )
            }
        }
    }
}

impl Error for DecisionStumpError {}

/// A depth-1 decision tree over a single feature.
///
/// Branches are `(threshold, label)` pairs tried in ascending order; the
/// first branch whose threshold the feature value is `<=` wins, and anything
/// larger than every threshold falls through to the fallback label. Every
/// comparison with a NaN feature value is false, so non-finite inputs always
/// land on the fallback.
///
/// # Type Parameters
///
/// * `L`: The type of the label (e.g., `String`, `i32`, or a custom `enum`).
/// * `F`: The float type for the features (e.g., `f32`, `f64`).
#[derive(Debug, Clone)]
pub struct DecisionStump<L, F>
where
    L: Clone + Debug,
    F: Float,
{
    feature_index: usize,
    branches: Vec<(F, L)>,
    fallback: L,
}

impl<L, F> DecisionStump<L, F>
where
    L: Clone + Debug,
    F: Float,
{
    /// Creates a new decision stump.
    ///
    /// # Arguments
    ///
    /// * `feature_index`: The single feature the stump consults.
    /// * `branches`: `(threshold, label)` pairs; a value `<=` the threshold
    ///   takes that branch.
    /// * `fallback`: The label for values above every threshold.
    ///
    /// # Errors
    ///
    /// Returns `DecisionStumpError::UnorderedThresholds` if the thresholds
    /// are not strictly increasing, since the branch order is the semantics.
    pub fn new(
        feature_index: usize,
        branches: Vec<(F, L)>,
        fallback: L,
    ) -> Result<Self, DecisionStumpError> {
        if branches.windows(2).any(|pair| pair[1].0 <= pair[0].0) {
            return Err(DecisionStumpError::UnorderedThresholds);
        }
        Ok(Self {
            feature_index,
            branches,
            fallback,
        })
    }

    /// The single feature index this stump consults.
    pub fn feature_index(&self) -> usize {
        self.feature_index
    }

    /// Predicts the label for a data point.
    ///
    /// Only `features[feature_index]` is consulted; every other element is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `DecisionStumpError::FeatureIndexOutOfBounds` if the query
    /// vector is too short to contain the split feature.
    pub fn predict(&self, features: ArrayView1<F>) -> Result<L, DecisionStumpError> {
        let value = *features.get(self.feature_index).ok_or(
            DecisionStumpError::FeatureIndexOutOfBounds {
                index: self.feature_index,
                dim: features.len(),
            },
        )?;

        for (threshold, label) in &self.branches {
            if value <= *threshold {
                return Ok(label.clone());
            }
        }
        Ok(self.fallback.clone())
    }
}
