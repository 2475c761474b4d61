use crate::{EngineConfig, KMeansEngine, Primitive};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one [`KMeansEngine`], shared by concurrent callers (e.g. request handlers).
///
/// Every operation runs under a single lock, from the first read of the state to the last write.
/// A converge run therefore never sees a point set or centroids swapped out by another caller midway.
pub struct SharedEngine<T: Primitive> {
    inner: Arc<Mutex<KMeansEngine<'static, T>>>,
}

impl<T: Primitive> Clone for SharedEngine<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Primitive> Default for SharedEngine<T> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<T: Primitive> SharedEngine<T> {
    pub fn new(config: EngineConfig<'static, T>) -> Self {
        Self { inner: Arc::new(Mutex::new(KMeansEngine::new(config))) }
    }

    /// Run `op` with exclusive access to the engine.
    pub fn with<R>(&self, op: impl FnOnce(&mut KMeansEngine<'static, T>) -> R) -> R {
        let mut engine = self.inner.lock();
        op(&mut engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InitMethod;
    use rand::prelude::*;

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<SharedEngine<f32>>();
        assert_send_sync::<SharedEngine<f64>>();
    }

    #[test]
    fn operations_are_serialized() {
        let shared: SharedEngine<f64> = SharedEngine::new(EngineConfig::build().random_generator(StdRng::seed_from_u64(3)).build());
        let workers: Vec<_> = (0..8).map(|i| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for _ in 0..20 {
                    shared.with(|engine| {
                        // generate, initialize and converge must observe one consistent point set
                        let cnt = 40 + i;
                        engine.generate(cnt).unwrap();
                        engine.initialize(InitMethod::KMeanPlusPlus, 3).unwrap();
                        let result = engine.converge(50).unwrap();
                        let assigned: usize = result.clusters.values().map(|c| c.len()).sum();
                        assert_eq!(assigned, cnt);
                        assert_eq!(engine.points().len(), cnt);
                    });
                }
            })
        }).collect();
        for w in workers {
            w.join().unwrap();
        }
        assert_eq!(shared.with(|engine| engine.centroids().len()), 3);
    }
}
