//! # kmeans_stepper - API documentation
//!
//! kmeans_stepper is the engine behind an interactive k-means visualization on the 2-D plane.
//!
//! ## Design target
//! Instead of computing a clustering in one go, it keeps a k-means run open and lets a client drive it:
//! generate a point set, initialize centroids, then advance the algorithm one step at a time (or until
//! convergence), rendering the state after every operation. All state lives in one [`KMeansEngine`]
//! instance; every operation is a method on it.
//!
//! ## Supported centroid initializations
//! The outcome of each K-Means run depends on the initialization of its clusters. For a list of
//! implemented initialization methods, see [`InitMethod`]. Centroids can also be placed by hand, see
//! [`KMeansEngine::add_manual_centroid`].
//!
//! ## Convergence
//! [`KMeansEngine::converge`] iterates until no centroid moves by 0.01 or more (or until the iteration
//! cap is hit). Other criteria can be configured with an [`AbortStrategy`].
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use kmeans_stepper::*;
//!
//! fn main() {
//!     let mut engine: KMeansEngine<f64> = KMeansEngine::default();
//!
//!     engine.generate(200).unwrap();
//!     engine.initialize(InitMethod::KMeanPlusPlus, 3).unwrap();
//!
//!     // Single steps, for rendering each intermediate state
//!     let step = engine.step().unwrap();
//!     println!("Centroids after one step: {:?}", step.centroids);
//!
//!     // ... or everything at once
//!     let result = engine.converge(100).unwrap();
//!     println!("Converged: {} after {} iterations", result.converged, result.iterations);
//!     println!("Error: {}", result.distsum);
//! }
//! ```
//!
//! ## Example (manually placed centroids)
//! ```rust
//! use kmeans_stepper::*;
//!
//! fn main() {
//!     let mut engine: KMeansEngine<f64> = KMeansEngine::default();
//!     engine.set_points(vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]);
//!     engine.set_cluster_count(2).unwrap();
//!
//!     engine.add_manual_centroid(Point::new(0.0, 0.0), true).unwrap();
//!     let progress = engine.add_manual_centroid(Point::new(10.0, 10.0), false).unwrap();
//!     assert!(progress.manual_complete);
//!
//!     let step = engine.step().unwrap();
//!     assert_eq!(step.clusters[&0].len(), 3);
//!     assert_eq!(step.clusters[&1], vec![Point::new(10.0, 10.0)]);
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeansEngine`] struct, generic over the primitive type used for
//! coordinates. Its behaviour (random number generator, defaults, abort strategy, status callbacks) is
//! set up through [`EngineConfig::build`].
//!
//! The [`protocol`] module holds the request types a rendering client sends (JSON field names included)
//! and the `handle_*` methods that validate and run them. All results are `serde`-serializable.
//! To share one engine between concurrent callers, wrap it into a [`SharedEngine`].

#[macro_use] mod helpers;
mod primitive;
mod error;
mod point;
mod api;
mod variants;
mod inits;
mod abort_strategy;
mod session;
pub mod protocol;

pub use abort_strategy::AbortStrategy;
pub use api::{
    ClusterState, ConvergeResult, ConvergenceStatus, EngineConfig, EngineConfigBuilder, InitDoneCallbackFn,
    IterationDoneCallbackFn, KMeansEngine, ManualProgress, StepResult,
};
pub use error::{Error, ErrorKind, Result};
pub use inits::InitMethod;
pub use point::{Clusters, Point};
pub use primitive::Primitive;
pub use session::SharedEngine;
