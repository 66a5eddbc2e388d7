//! Runtime wiring: pipeline plus shutdown handling

use tracing::info;

use wayfinder_foundation::ShutdownHandler;
use wayfinder_stt::SpeechRecognizer;
use wayfinder_telemetry::MetricsSnapshot;
use wayfinder_tts::SpeechSynthesizer;
use wayfinder_vision::{ImageClassifier, ObjectDetector};

use crate::config::AppConfig;
use crate::pipeline::Pipeline;

/// Run the pipeline with the given collaborators until the recognizer
/// finishes or ctrl-c arrives. Returns the final metrics.
pub async fn run<R, S, C, D>(
    config: AppConfig,
    recognizer: R,
    synthesizer: S,
    classifier: C,
    detector: D,
) -> MetricsSnapshot
where
    R: SpeechRecognizer,
    S: SpeechSynthesizer,
    C: ImageClassifier,
    D: ObjectDetector,
{
    let pipeline = Pipeline::new(
        recognizer,
        synthesizer,
        classifier,
        detector,
        config.pipeline_options(),
    );
    let metrics = pipeline.metrics();

    let mut shutdown = ShutdownHandler::new().install();
    tokio::select! {
        _ = shutdown.wait() => {
            info!("Shutdown signal received");
        }
        _ = pipeline.run() => {}
    }

    metrics.snapshot()
}
