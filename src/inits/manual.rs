use crate::{Error, Point, Primitive, Result};

/// Append a user-placed centroid to `centroids`.
///
/// Placing more than `k` centroids is refused, so the list never outgrows the cluster count.
/// ## Returns
/// Whether `centroids` now holds exactly `k` centroids.
#[inline(always)]
pub fn calculate<T: Primitive>(centroids: &mut Vec<Point<T>>, k: usize, point: Point<T>) -> Result<bool> {
    if centroids.len() >= k {
        return Err(Error::invalid_state(format!(
            "all {} manual centroids are already placed; reset to start over", k
        )));
    }
    centroids.push(point);
    Ok(centroids.len() == k)
}
