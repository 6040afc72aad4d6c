use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
// These are the core components from our shared library.
use petal_helpers::{DataPoint, Distance};

// ndarray and petal_helpers are used in the public function signatures.
use ndarray::ArrayView1;
use petal_helpers::Float;

/// Errors that can occur when using the nearest-neighbor classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum NearestNeighborError {
    /// Cannot build a classifier without reference samples
    EmptyReferenceSet,
    /// Reference samples disagree on their number of features
    MismatchedDimensions,
    /// The query vector does not match the reference dimension
    DimensionMismatch { expected: usize, actual: usize },
    /// Invalid distance comparison (likely due to NaN values in data)
    InvalidDistance,
}

impl Display for NearestNeighborError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NearestNeighborError::EmptyReferenceSet => {
                write!(f, "Cannot build a classifier without reference samples")
            }
            NearestNeighborError::MismatchedDimensions => {
                write!(f, "Reference samples disagree on their number of features")
            }
            NearestNeighborError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Expected a query vector with {} features, got {}",
                    expected, actual
                )
            }
            NearestNeighborError::InvalidDistance => write!(
                f,
                "Invalid distance comparison (likely due to NaN values in data)"
            ),
        }
    }
}

impl Error for NearestNeighborError {}

/// A single-nearest-neighbor classifier.
///
/// This classifier predicts the label of a new data point by returning the
/// label of the reference sample closest to it under the distance metric `D`.
/// The scan replaces the current best only on a strictly smaller distance, so
/// when two samples are equally close the earlier one wins.
///
/// # Type Parameters
///
/// * `L`: The type of the label (e.g., `String`, `i32`, or a custom `enum`).
/// * `F`: The float type for the features (e.g., `f32`, `f64`).
/// * `D`: The distance metric, which must implement the `Distance` trait.
#[derive(Debug, Clone)]
pub struct NearestNeighbor<L, F, D>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
    D: Distance<F>,
{
    reference: Vec<DataPoint<L, F>>,
    distance: D,
    dim: usize,
}

impl<L, F, D> NearestNeighbor<L, F, D>
where
    L: Clone + Eq + std::hash::Hash + Debug,
    F: Float,
    D: Distance<F>,
{
    /// Creates a new nearest-neighbor classifier.
    ///
    /// # Arguments
    ///
    /// * `reference`: The labeled samples the classifier compares against.
    /// * `distance`: An instance of a struct that implements the `Distance` trait (e.g., `L2Dist`).
    ///
    /// # Errors
    ///
    /// Returns `NearestNeighborError::EmptyReferenceSet` if `reference` is empty.
    /// Returns `NearestNeighborError::MismatchedDimensions` if the samples do
    /// not all share the same number of features.
    pub fn new(
        reference: Vec<DataPoint<L, F>>,
        distance: D,
    ) -> Result<Self, NearestNeighborError> {
        let dim = reference
            .first()
            .map(|dp| dp.dim())
            .ok_or(NearestNeighborError::EmptyReferenceSet)?;
        if reference.iter().any(|dp| dp.dim() != dim) {
            return Err(NearestNeighborError::MismatchedDimensions);
        }
        Ok(Self {
            reference,
            distance,
            dim,
        })
    }

    /// The number of features every query vector must carry.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Predicts the label for a new, unseen data point.
    ///
    /// # Arguments
    ///
    /// * `features`: An `ArrayView1` containing the features of the point to classify.
    ///
    /// # Returns
    ///
    /// Returns the predicted label `L` on success. A query at distance zero
    /// from a reference sample always returns that sample's label.
    ///
    /// # Errors
    ///
    /// Returns `NearestNeighborError::DimensionMismatch` if the query length
    /// differs from the reference dimension.
    /// Returns `NearestNeighborError::InvalidDistance` if no neighbor could be
    /// chosen because every distance compared as NaN.
    pub fn predict(&self, features: ArrayView1<F>) -> Result<L, NearestNeighborError> {
        if features.len() != self.dim {
            return Err(NearestNeighborError::DimensionMismatch {
                expected: self.dim,
                actual: features.len(),
            });
        }

        // Compare with the "relative distance" (squared Euclidean for L2);
        // it is monotone in the true distance, so the winner is the same and
        // we skip the square root.
        let mut best_rdist = F::infinity();
        let mut best_label = None;
        for dp in &self.reference {
            let rdist = self.distance.rdistance(dp.features.view(), features);
            // Strict `<`: equal distances keep the earlier sample, and a NaN
            // distance can never displace the current best.
            if rdist < best_rdist {
                best_rdist = rdist;
                best_label = Some(&dp.label);
            }
        }

        best_label
            .cloned()
            .ok_or(NearestNeighborError::InvalidDistance)
    }
}
