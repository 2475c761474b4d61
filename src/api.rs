use crate::{inits, point, variants::Lloyd, AbortStrategy, Clusters, Error, InitMethod, Point, Primitive, Result};
use rand::prelude::*;
use serde::Serialize;
use tracing::debug;

pub type InitDoneCallbackFn<'a, T> = &'a (dyn Fn(&ClusterState<T>) + Sync);
pub type IterationDoneCallbackFn<'a, T> = &'a (dyn Fn(&ClusterState<T>, usize, T) + Sync);

/// This is a structure holding the configuration of a [`KMeansEngine`], such as the random number generator
/// to use, the defaults filled in for omitted request fields, or a couple of callbacks that can be set to get
/// status information from running calculations.
///
/// For a more detailed information about all possible options, have a look at [`EngineConfigBuilder`].
pub struct EngineConfig<'a, T: Primitive> {
    /// Callback that is called, when an initialization (strategy or manual) established all k centroids
    /// ## Arguments
    /// - **state**: Current [`ClusterState`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each iteration of the convergence loop
    /// ## Arguments
    /// - **state**: Current [`ClusterState`] after the iteration
    /// - **iteration_id**: Number of the current iteration
    /// - **max_shift**: Largest distance a centroid moved during the iteration
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<dyn RngCore + Send>,
    /// The abort-strategy deciding when the convergence loop converged
    pub(crate) abort_strategy: AbortStrategy<T>,
    /// Amount of points generated when a request does not specify one
    pub(crate) default_point_count: usize,
    /// Amount of clusters used when a request does not specify one
    pub(crate) default_cluster_count: usize,
    /// Iteration cap used when a converge request does not specify one
    pub(crate) default_max_iterations: usize,
    /// Generated points lie within `[0, extent)` on both axes
    pub(crate) extent: T,
}
impl<'a, T: Primitive> Default for EngineConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_, _, _| {},
            rnd: Box::new(StdRng::from_entropy()),
            abort_strategy: AbortStrategy::default(),
            default_point_count: 200,
            default_cluster_count: 3,
            default_max_iterations: 100,
            extent: T::of(500.0),
        }
    }
}
impl<'a, T: Primitive> EngineConfig<'a, T> {
    /// Use the [`EngineConfigBuilder`] to build an [`EngineConfig`] instance.
    pub fn build() -> EngineConfigBuilder<'a, T> {
        EngineConfigBuilder { config: EngineConfig::default() }
    }
    pub fn default_point_count(&self) -> usize { self.default_point_count }
    pub fn default_cluster_count(&self) -> usize { self.default_cluster_count }
    pub fn default_max_iterations(&self) -> usize { self.default_max_iterations }
    pub fn extent(&self) -> T { self.extent }
    pub fn abort_strategy(&self) -> AbortStrategy<T> { self.abort_strategy }
}
impl<'a, T: Primitive> std::fmt::Debug for EngineConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("abort_strategy", &self.abort_strategy)
            .field("default_point_count", &self.default_point_count)
            .field("default_cluster_count", &self.default_cluster_count)
            .field("default_max_iterations", &self.default_max_iterations)
            .field("extent", &self.extent)
            .finish_non_exhaustive()
    }
}

pub struct EngineConfigBuilder<'a, T: Primitive> {
    config: EngineConfig<'a, T>
}
impl<'a, T: Primitive> EngineConfigBuilder<'a, T> {
    /// Set the callback that should be called once all k centroids are established.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration of a running convergence loop.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator used for point generation, initialization and empty-cluster re-seeding.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + Send + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(rnd); self
    }
    /// Set the abort-strategy to use during a running convergence loop. For more information,
    /// see documentation of [`AbortStrategy`].
    /// ## Default
    /// [`AbortStrategy::CentroidShift`] `{ threshold: 0.01 }`
    pub fn abort_strategy(mut self, abort_strategy: AbortStrategy<T>) -> Self {
        self.config.abort_strategy = abort_strategy; self
    }
    /// ## Default
    /// 200
    pub fn default_point_count(mut self, cnt: usize) -> Self {
        self.config.default_point_count = cnt; self
    }
    /// ## Default
    /// 3
    pub fn default_cluster_count(mut self, k: usize) -> Self {
        self.config.default_cluster_count = k; self
    }
    /// ## Default
    /// 100
    pub fn default_max_iterations(mut self, max_iter: usize) -> Self {
        self.config.default_max_iterations = max_iter; self
    }
    /// Side length of the square generated points are drawn from.
    /// ## Default
    /// 500
    pub fn extent(mut self, extent: T) -> Self {
        self.config.extent = extent; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> EngineConfig<'a, T> { self.config }
}


/// The clustering state of a [`KMeansEngine`].
///
/// The cluster label of a centroid is its position in **centroids**, and the same label is the key
/// of its members in **clusters**. The two are only ever replaced as a whole.
///
/// ## Fields
/// - **k**: The amount of clusters requested for the current run
/// - **distsum**: The total sum of squared distances from all points to their assigned centroids,
///   as of the last assignment
/// - **centroids**: Current cluster centers, indexed by cluster label
/// - **clusters**: Points per cluster label, as of the last assignment (empty before the first one)
#[derive(Clone, Debug, Serialize)]
pub struct ClusterState<T: Primitive> {
    pub k: usize,
    pub distsum: T,
    pub centroids: Vec<Point<T>>,
    pub clusters: Clusters<T>,
}
impl<T: Primitive> ClusterState<T> {
    pub(crate) fn new(k: usize) -> Self {
        Self {
            k,
            distsum: T::zero(),
            centroids: Vec::with_capacity(k),
            clusters: Clusters::new(),
        }
    }

    /// Drop centroids and clusters, keeping k.
    pub(crate) fn clear(&mut self) {
        self.distsum = T::zero();
        self.centroids.clear();
        self.clusters.clear();
    }

    fn ensure_placed(&self) -> Result<()> {
        if self.centroids.is_empty() {
            return Err(Error::invalid_state("no centroids yet; initialize or place centroids first"));
        }
        if self.centroids.len() != self.k {
            return Err(Error::invalid_state(format!(
                "{} of {} centroids placed; place the remaining ones first", self.centroids.len(), self.k
            )));
        }
        Ok(())
    }

    /// Recalculation needs at least one point to re-seed empty clusters from.
    fn ensure_iterable(&self, points: &[Point<T>]) -> Result<()> {
        self.ensure_placed()?;
        if points.is_empty() {
            return Err(Error::invalid_state("the point set is empty; generate points first"));
        }
        Ok(())
    }
}

/// Phases of the convergence loop. Every loop starts in [`ConvergenceStatus::Running`] and ends in one
/// of the two terminal states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvergenceStatus {
    Running,
    /// The abort strategy was satisfied (by default: no centroid moved by 0.01 or more)
    Converged,
    /// The iteration cap was reached first
    Exhausted,
}

/// Progress of a manual centroid placement.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualProgress<T: Primitive> {
    pub centroids: Vec<Point<T>>,
    /// **true** once exactly k centroids are placed
    pub manual_complete: bool,
}

/// Result of a single assign + recalculate step.
///
/// **clusters** is the assignment the step made, **centroids** the centroids recalculated from it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepResult<T: Primitive> {
    pub centroids: Vec<Point<T>>,
    pub clusters: Clusters<T>,
    pub distsum: T,
}

/// Result of a convergence loop.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConvergeResult<T: Primitive> {
    pub converged: bool,
    pub status: ConvergenceStatus,
    pub iterations: usize,
    pub centroids: Vec<Point<T>>,
    pub clusters: Clusters<T>,
    pub distsum: T,
}


/// Entrypoint of this crate's API-Surface.
///
/// One engine owns everything an interactive k-means session works on: the point set, the cluster count k,
/// the centroids and the current cluster assignment. All operations are methods on it, so a caller always
/// knows which state an operation reads and mutates.
///
/// ## Typical flow
/// 1. [`KMeansEngine::generate`] (or [`KMeansEngine::set_points`]) a point set
/// 2. [`KMeansEngine::initialize`] centroids with one of the [`InitMethod`]s, or place them one by one with
///    [`KMeansEngine::add_manual_centroid`]
/// 3. [`KMeansEngine::step`] through the algorithm, or run it with [`KMeansEngine::converge`]
pub struct KMeansEngine<'a, T: Primitive> {
    config: EngineConfig<'a, T>,
    points: Vec<Point<T>>,
    state: ClusterState<T>,
}
impl<'a, T: Primitive> Default for KMeansEngine<'a, T> {
    fn default() -> Self { Self::new(EngineConfig::default()) }
}
impl<'a, T: Primitive> KMeansEngine<'a, T> {
    /// Create a new engine without points and centroids. k starts out as the configured default cluster count.
    pub fn new(config: EngineConfig<'a, T>) -> Self {
        let state = ClusterState::new(config.default_cluster_count);
        Self { config, points: Vec::new(), state }
    }

    pub fn config(&self) -> &EngineConfig<'a, T> { &self.config }
    pub fn points(&self) -> &[Point<T>] { &self.points }
    pub fn state(&self) -> &ClusterState<T> { &self.state }
    pub fn k(&self) -> usize { self.state.k }
    pub fn centroids(&self) -> &[Point<T>] { &self.state.centroids }
    pub fn clusters(&self) -> &Clusters<T> { &self.state.clusters }

    /// Replace the point set with `cnt` uniformly distributed random points.
    ///
    /// Centroids and clusters are left as they are; callers are expected to re-initialize.
    pub fn generate(&mut self, cnt: usize) -> Result<&[Point<T>]> {
        if !(self.config.extent > T::zero()) {
            return Err(Error::invalid_argument("extent", format!("must be positive, got {}", self.config.extent)));
        }
        self.points = point::generate(cnt, self.config.extent, self.config.rnd.as_mut());
        debug!(points = cnt, "generated point set");
        Ok(&self.points)
    }

    /// Replace the point set with caller-supplied points. Like [`KMeansEngine::generate`], this leaves
    /// centroids and clusters untouched.
    pub fn set_points(&mut self, points: Vec<Point<T>>) {
        self.points = points;
    }

    /// Set the cluster count for the following manual centroid placement.
    pub fn set_cluster_count(&mut self, k: usize) -> Result<()> {
        if k == 0 {
            return Err(Error::invalid_argument("numCentroids", "the cluster count must be at least 1"));
        }
        self.state.k = k;
        Ok(())
    }

    /// Drop centroids and clusters. The point set and k stay.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Run the initialization `method` for `k` clusters.
    ///
    /// k is taken over for the following iterations, and any existing centroids and clusters are dropped
    /// before the strategy runs, also when it fails.
    /// ## Errors
    /// [`Error::InvalidArgument`] for `k == 0`, [`Error::InvalidClusterCount`] for `k` exceeding the point set.
    pub fn initialize(&mut self, method: InitMethod, k: usize) -> Result<&[Point<T>]> {
        self.state.clear();
        self.set_cluster_count(k)?;
        if k > self.points.len() {
            return Err(Error::InvalidClusterCount { requested: k, n_points: self.points.len() });
        }
        self.state.centroids = method.calculate(&self.points, k, self.config.rnd.as_mut());
        debug!(%method, k, "initialized centroids");
        (self.config.init_done)(&self.state);
        Ok(&self.state.centroids)
    }

    /// Place one centroid by hand. With `reset`, previously placed centroids (and clusters) are dropped first.
    /// ## Errors
    /// [`Error::InvalidState`] when k centroids are already placed.
    pub fn add_manual_centroid(&mut self, point: Point<T>, reset: bool) -> Result<ManualProgress<T>> {
        if reset {
            self.state.clear();
        }
        let complete = inits::manual::calculate(&mut self.state.centroids, self.state.k, point)?;
        // placed centroids invalidate any earlier assignment
        self.state.clusters.clear();
        if complete {
            (self.config.init_done)(&self.state);
        }
        Ok(self.manual_progress())
    }

    pub fn manual_progress(&self) -> ManualProgress<T> {
        ManualProgress {
            centroids: self.state.centroids.clone(),
            manual_complete: self.state.centroids.len() == self.state.k,
        }
    }

    /// Assign every point to its nearest centroid, without moving the centroids.
    ///
    /// An empty point set yields every label with no members.
    pub fn assign(&mut self) -> Result<&Clusters<T>> {
        self.state.ensure_placed()?;
        Lloyd::update_cluster_assignments(&self.points, &mut self.state)?;
        Ok(&self.state.clusters)
    }

    /// Move every centroid to the mean of its cluster, as of the last [`KMeansEngine::assign`].
    pub fn recalculate(&mut self) -> Result<&[Point<T>]> {
        self.state.ensure_iterable(&self.points)?;
        Lloyd::update_centroids(&self.points, &mut self.state, self.config.rnd.as_mut())?;
        Ok(&self.state.centroids)
    }

    /// One iteration of k-means: assign, then recalculate.
    pub fn step(&mut self) -> Result<StepResult<T>> {
        self.state.ensure_iterable(&self.points)?;
        Lloyd::iterate(&self.points, &mut self.state, self.config.rnd.as_mut())?;
        Ok(StepResult {
            centroids: self.state.centroids.clone(),
            clusters: self.state.clusters.clone(),
            distsum: self.state.distsum,
        })
    }

    /// Iterate until converged, but at most `max_iter` times.
    ///
    /// With `max_iter == 0`, nothing is touched and the result reports `converged: false`.
    pub fn converge(&mut self, max_iter: usize) -> Result<ConvergeResult<T>> {
        self.state.ensure_iterable(&self.points)?;
        let (status, iterations) = Lloyd::calculate(&self.points, &mut self.state, max_iter, &mut self.config)?;
        Ok(ConvergeResult {
            converged: status == ConvergenceStatus::Converged,
            status,
            iterations,
            centroids: self.state.centroids.clone(),
            clusters: self.state.clusters.clone(),
            distsum: self.state.distsum,
        })
    }
}
