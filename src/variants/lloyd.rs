use crate::point::nearest_centroid;
use crate::{ClusterState, ConvergenceStatus, EngineConfig, Error, Point, Primitive, Result};
use rand::prelude::*;
use tracing::{debug, info, warn};

pub(crate) struct Lloyd<T: Primitive> {
	_p: std::marker::PhantomData<T>
}
impl<T: Primitive> Lloyd<T> {
    /// Rebuild `state.clusters` from scratch: every sample goes to its nearest centroid (lowest label on ties).
    /// Also refreshes `state.distsum`.
    pub(crate) fn update_cluster_assignments(points: &[Point<T>], state: &mut ClusterState<T>) -> Result<()> {
        if state.centroids.is_empty() {
            return Err(Error::invalid_state("no centroids to assign points to; initialize or place centroids first"));
        }
        let mut clusters: crate::Clusters<T> = (0..state.centroids.len()).map(|label| (label, Vec::new())).collect();
        let mut distsum = T::zero();
        for p in points {
            if let Some((label, dist)) = nearest_centroid(p, &state.centroids) {
                clusters.entry(label).or_default().push(*p);
                distsum += dist;
            }
        }
        state.clusters = clusters;
        state.distsum = distsum;
        Ok(())
    }

    /// Replace `state.centroids` with the means of the current clusters.
    /// A cluster without samples gets a uniformly random sample of the whole point set instead.
    pub(crate) fn update_centroids(points: &[Point<T>], state: &mut ClusterState<T>, rnd: &mut dyn RngCore) -> Result<()> {
        if state.centroids.is_empty() || state.clusters.len() != state.centroids.len() {
            return Err(Error::invalid_state("no cluster assignment for the current centroids; assign points first"));
        }
        let mut new_centroids = Vec::with_capacity(state.clusters.len());
        for (&label, members) in state.clusters.iter() {
            if members.is_empty() {
                let replacement = *points.choose(rnd)
                    .ok_or_else(|| Error::invalid_state("cannot re-seed an empty cluster from an empty point set"))?;
                warn!(label, x = %replacement.x, y = %replacement.y, "empty cluster, re-seeding centroid from a random point");
                new_centroids.push(replacement);
            } else {
                new_centroids.push(mean(members));
            }
        }
        state.centroids = new_centroids;
        Ok(())
    }

    /// One assign + recalculate round.
    /// ## Returns
    /// The largest distance any centroid moved.
    pub(crate) fn iterate(points: &[Point<T>], state: &mut ClusterState<T>, rnd: &mut dyn RngCore) -> Result<T> {
        let old_centroids = state.centroids.clone();
        Self::update_cluster_assignments(points, state)?;
        Self::update_centroids(points, state, rnd)?;
        debug_assert_eq!(old_centroids.len(), state.centroids.len());
        Ok(max_shift(&old_centroids, &state.centroids))
    }

    /// Iterate until the configured abort strategy reports convergence, or `max_iter` is reached.
    /// ## Returns
    /// The terminal status, and the number of iterations that ran.
    pub(crate) fn calculate(points: &[Point<T>], state: &mut ClusterState<T>, max_iter: usize, config: &mut EngineConfig<'_, T>)
                -> Result<(ConvergenceStatus, usize)> {
        let mut status = ConvergenceStatus::Running;
        let mut iterations = 0;
        let mut abort_strategy = config.abort_strategy.create_logic();

        for i in 1..=max_iter {
            let shift = Self::iterate(points, state, config.rnd.as_mut())?;
            iterations = i;
            debug!(iteration = i, max_shift = %shift, distsum = %state.distsum, "k-means iteration done");

            // Notify subscriber about finished iteration
            (config.iteration_done)(&*state, i, shift);
            if !abort_strategy.next(shift, state.distsum) {
                status = ConvergenceStatus::Converged;
                break;
            }
        }
        if status == ConvergenceStatus::Running {
            status = ConvergenceStatus::Exhausted;
        }
        info!(?status, iterations, max_iter, "k-means loop finished");
        Ok((status, iterations))
    }
}

fn mean<T: Primitive>(members: &[Point<T>]) -> Point<T> {
    let cnt = T::of(members.len() as f64);
    let (sx, sy) = members.iter().fold((T::zero(), T::zero()), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / cnt, sy / cnt)
}

fn max_shift<T: Primitive>(old: &[Point<T>], new: &[Point<T>]) -> T {
    old.iter().zip(new.iter())
        .map(|(o, n)| o.distance(n))
        .fold(T::zero(), |acc, d| if d > acc || d.is_nan() { d } else { acc })
}
