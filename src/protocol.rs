//! Request bodies of the operations a rendering client sends, and the glue that validates them and
//! runs them on a [`KMeansEngine`].
//!
//! Field names follow the client (`numPoints`, `numCentroids`, `maxIterations`, `manualComplete`);
//! omitted fields fall back to the engine's [`EngineConfig`](crate::EngineConfig) defaults. Counts are
//! taken as signed integers, so that a negative count is reported as [`Error::InvalidArgument`]
//! instead of failing to deserialize.

use crate::{ConvergeResult, Error, InitMethod, KMeansEngine, ManualProgress, Point, Primitive, Result, StepResult};
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub num_points: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRequest {
    /// One of `"random"`, `"farthest"`, `"kmeans++"`
    pub method: String,
    #[serde(default)]
    pub num_centroids: Option<i64>,
}

/// Places one centroid. A request with `reset` but without `point` only clears the placed centroids,
/// which is how a client enters manual mode.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound = "T: Primitive")]
pub struct ManualCentroidRequest<T: Primitive> {
    #[serde(default)]
    pub point: Option<Point<T>>,
    #[serde(default)]
    pub reset: bool,
    /// Cluster count to collect centroids for; the current k when omitted
    #[serde(default)]
    pub num_centroids: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvergeRequest {
    #[serde(default)]
    pub max_iterations: Option<i64>,
}

fn count(name: &'static str, value: Option<i64>, default: usize) -> Result<usize> {
    match value {
        None => Ok(default),
        Some(v) if v < 0 => Err(Error::invalid_argument(name, format!("must not be negative, got {}", v))),
        Some(v) => usize::try_from(v).map_err(|_| Error::invalid_argument(name, format!("{} is too large", v))),
    }
}

impl<'a, T: Primitive> KMeansEngine<'a, T> {
    /// `generate`: replace the point set. Returns the new points.
    pub fn handle_generate(&mut self, req: &GenerateRequest) -> Result<Vec<Point<T>>> {
        let cnt = count("numPoints", req.num_points, self.config().default_point_count())?;
        Ok(self.generate(cnt)?.to_vec())
    }

    /// `initialize`: run an initialization strategy. Returns the new centroids.
    pub fn handle_initialize(&mut self, req: &InitializeRequest) -> Result<Vec<Point<T>>> {
        let method: InitMethod = req.method.parse()?;
        let k = count("numCentroids", req.num_centroids, self.config().default_cluster_count())?;
        Ok(self.initialize(method, k)?.to_vec())
    }

    /// `manual-centroid`: place (or reset) manual centroids.
    ///
    /// The request is validated as a whole before anything changes, a rejected one leaves k and the
    /// placed centroids as they were.
    pub fn handle_manual_centroid(&mut self, req: &ManualCentroidRequest<T>) -> Result<ManualProgress<T>> {
        let k = count("numCentroids", req.num_centroids, self.k())?;
        if k == 0 {
            return Err(Error::invalid_argument("numCentroids", "the cluster count must be at least 1"));
        }
        if req.point.is_none() && !req.reset {
            return Err(Error::invalid_argument("point", "required unless reset is set"));
        }
        if req.point.is_some() && !req.reset && self.centroids().len() >= k {
            return Err(Error::invalid_state(format!(
                "all {} manual centroids are already placed; reset to start over", k
            )));
        }
        self.set_cluster_count(k)?;
        match req.point {
            Some(point) => self.add_manual_centroid(point, req.reset),
            None if req.reset => {
                self.reset();
                Ok(self.manual_progress())
            }
            None => Err(Error::invalid_argument("point", "required unless reset is set")),
        }
    }

    /// `step`: one assign + recalculate iteration.
    pub fn handle_step(&mut self) -> Result<StepResult<T>> {
        self.step()
    }

    /// `converge`: iterate until converged or the iteration cap is hit.
    pub fn handle_converge(&mut self, req: &ConvergeRequest) -> Result<ConvergeResult<T>> {
        let max_iter = count("maxIterations", req.max_iterations, self.config().default_max_iterations())?;
        self.converge(max_iter)
    }
}
