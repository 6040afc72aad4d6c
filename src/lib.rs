//! Umbrella crate for the iris playground: the shared data types, the two
//! toy classifiers, and the fixed reference dataset wired together behind a
//! single [`predict`] operation.

mod dataset;
mod predict;

pub use dataset::{reference_samples, FEATURE_DIM};
pub use petal_helpers::{DataPoint, Distance, Float, L2Dist};
pub use predict::{predict, Algorithm, PredictError};
