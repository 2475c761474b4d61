use kmeans_stepper::protocol::*;
use kmeans_stepper::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    // Drive the engine the way a rendering client would: JSON in, JSON out
    let mut engine: KMeansEngine<f64> = KMeansEngine::default();
    engine.handle_generate(&serde_json::from_str(r#"{"numPoints": 60}"#)?)?;

    engine.handle_manual_centroid(&serde_json::from_str(r#"{"reset": true, "numCentroids": 3}"#)?)?;
    for body in [r#"{"point": {"x": 100, "y": 100}}"#, r#"{"point": {"x": 400, "y": 100}}"#, r#"{"point": {"x": 250, "y": 400}}"#].iter() {
        let req: ManualCentroidRequest<f64> = serde_json::from_str(body)?;
        println!("{}", serde_json::to_string(&engine.handle_manual_centroid(&req)?)?);
    }

    for nr in 1..=3 {
        let step = engine.handle_step()?;
        println!("Step {}: {}", nr, serde_json::to_string(&step.centroids)?);
    }
    let result = engine.handle_converge(&serde_json::from_str(r#"{"maxIterations": 50}"#)?)?;
    println!("Converged: {}", serde_json::to_string(&result.converged)?);
    Ok(())
}
