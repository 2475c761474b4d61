use kmeans_stepper::*;

fn run(engine: &mut KMeansEngine<f64>, point_cnt: usize, k: usize, max_iter: usize) -> Result<ConvergeResult<f64>> {
    engine.generate(point_cnt)?;
    engine.initialize(InitMethod::KMeanPlusPlus, k)?;
    engine.converge(max_iter)
}

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
    let (point_cnt, k, max_iter) = (200, 4, 100);

    // Generate some random data, then cluster it using kmean++ as initialization-method
    let mut engine: KMeansEngine<f64> = KMeansEngine::default();
    match run(&mut engine, point_cnt, k, max_iter) {
        Ok(result) => {
            println!("Converged: {} ({} iterations)", result.converged, result.iterations);
            println!("Centroids: {:?}", result.centroids);
            for (label, members) in result.clusters.iter() {
                println!("Cluster {}: {} points", label, members.len());
            }
            println!("Error: {}", result.distsum);
        }
        Err(e) => eprintln!("k-means failed: {}", e),
    }
}
