use crate::point::nearest_centroid;
use crate::{Point, Primitive};
use rand::prelude::*;
use tracing::trace;

#[inline(always)] pub fn calculate<T: Primitive>(points: &[Point<T>], k: usize, rnd: &mut dyn RngCore) -> Vec<Point<T>> {
	let mut centroids = Vec::with_capacity(k);
	// Randomly select first centroid
	centroids.push(points[rnd.gen_range(0..points.len())]);

	while centroids.len() < k {
		let farthest = farthest_point(points, &centroids);
		trace!(centroid = centroids.len(), sample = farthest, "farthest-first pick");
		centroids.push(points[farthest]);
	}
	centroids
}

/// Index of the sample whose distance to its nearest centroid is largest.
/// Only a strictly larger distance replaces the current best, so the first sample wins ties.
pub(crate) fn farthest_point<T: Primitive>(points: &[Point<T>], centroids: &[Point<T>]) -> usize {
	let (best_idx, _) = points.iter()
		.map(|p| nearest_centroid(p, centroids).map_or(T::infinity(), |(_, d)| d.sqrt()))
		.enumerate()
		.fold((0, -T::one()), |(best_idx, best_dist), (idx, dist)| {
			if dist > best_dist { (idx, dist) } else { (best_idx, best_dist) }
		});
	best_idx
}
