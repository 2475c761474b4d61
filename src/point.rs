use crate::Primitive;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single sample (or centroid) on the 2-D plane.
///
/// Serializes as `{"x": .., "y": ..}`, which is the shape the rendering client expects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Primitive")]
pub struct Point<T: Primitive> {
    pub x: T,
    pub y: T,
}

impl<T: Primitive> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn squared_distance(&self, other: &Point<T>) -> T {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }

    /// Euclidean distance between `self` and `other`.
    #[inline(always)]
    pub fn distance(&self, other: &Point<T>) -> T {
        self.squared_distance(other).sqrt()
    }
}

/// Points grouped by cluster label. Label `i` belongs to centroid `i`; every label of
/// the current run is present, including those without any points.
pub type Clusters<T> = BTreeMap<usize, Vec<Point<T>>>;

/// Index and squared distance of the centroid closest to `point`.
/// Ties resolve to the lowest index. Returns `None` for an empty centroid list.
#[inline(always)]
pub(crate) fn nearest_centroid<T: Primitive>(point: &Point<T>, centroids: &[Point<T>]) -> Option<(usize, T)> {
    centroids.iter()
        .map(|c| point.squared_distance(c))
        .enumerate()
        .fold(None, |best, (ci, d)| match best {
            Some((_, best_d)) if !(d < best_d) => best,
            _ => Some((ci, d)),
        })
}

/// Draw `count` points, uniformly distributed over `[0, extent)` on both axes.
pub(crate) fn generate<T: Primitive, R: Rng + ?Sized>(count: usize, extent: T, rnd: &mut R) -> Vec<Point<T>> {
    (0..count)
        .map(|_| Point::new(rnd.gen_range(T::zero()..extent), rnd.gen_range(T::zero()..extent)))
        .collect()
}
