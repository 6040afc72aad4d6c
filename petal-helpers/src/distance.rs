use crate::Float;
use ndarray::ArrayView1;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A distance metric between two feature vectors.
///
/// `rdistance` is a cheaper surrogate that preserves the ordering of the true
/// distance (for L2 this is the squared distance). Classifiers compare with
/// `rdistance` and only convert back when a true distance is needed.
pub trait Distance<F: Float>: Clone {
    /// The true distance between `a` and `b`.
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F;

    /// A monotone surrogate of `distance`, used for comparisons.
    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.distance(a, b)
    }

    fn rdist_to_dist(&self, rdist: F) -> F {
        rdist
    }

    fn dist_to_rdist(&self, dist: F) -> F {
        dist
    }
}

/// The standard Euclidean (L2) distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct L2Dist;

impl<F: Float> Distance<F> for L2Dist {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.rdistance(a, b).sqrt()
    }

    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        (&a - &b).mapv(|x| x * x).sum()
    }

    fn rdist_to_dist(&self, rdist: F) -> F {
        rdist.sqrt()
    }

    fn dist_to_rdist(&self, dist: F) -> F {
        dist * dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_l2_distance() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        assert_abs_diff_eq!(L2Dist.distance(a.view(), b.view()), 5.0);
        assert_abs_diff_eq!(L2Dist.rdistance(a.view(), b.view()), 25.0);
    }

    #[test]
    fn test_l2_distance_is_symmetric() {
        let a = array![5.1, 3.5, 1.4, 0.2];
        let b = array![6.3, 3.3, 6.0, 2.5];
        assert_abs_diff_eq!(
            L2Dist.distance(a.view(), b.view()),
            L2Dist.distance(b.view(), a.view())
        );
    }

    #[test]
    fn test_l2_rdist_conversions() {
        let dist = 2.5_f64;
        let rdist: f64 = L2Dist.dist_to_rdist(dist);
        assert_abs_diff_eq!(rdist, 6.25);
        assert_abs_diff_eq!(L2Dist.rdist_to_dist(rdist), dist);
    }
}
