use kmeans_stepper::*;

fn main() {
    let (point_cnt, k, max_iter) = (2000, 8, 2500);

    let conf = EngineConfig::build()
        .init_done(&|s| println!("Initialization completed: {} centroids.", s.centroids.len()))
        .iteration_done(&|s, nr, max_shift|
            println!("Iteration {} - Error: {:.2} | Max centroid shift: {:.4}", nr, s.distsum, max_shift))
        .build();

    // Generate some random data, then cluster it using farthest-first as initialization-method
    let mut engine: KMeansEngine<f32> = KMeansEngine::new(conf);
    let result = engine.generate(point_cnt).map(|_| ())
        .and_then(|_| engine.initialize(InitMethod::FarthestFirst, k).map(|_| ()))
        .and_then(|_| engine.converge(max_iter));

    match result {
        Ok(result) => {
            println!("Centroids: {:?}", result.centroids);
            println!("Error: {}", result.distsum);
        }
        Err(e) => eprintln!("k-means failed: {}", e),
    }
}
