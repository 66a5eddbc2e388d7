use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;

use wayfinder_app::{runtime, AppConfig};
use wayfinder_locate::BoundingBox;
use wayfinder_stt::ScriptedRecognizer;
use wayfinder_tts::ConsoleSynthesizer;
use wayfinder_vision::{Classification, Detection, ScriptedClassifier, ScriptedDetector};

fn init_logging(log_dir: &str) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "wayfinder.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout.and(non_blocking_file))
        .with_env_filter(log_level)
        .init();
    std::mem::forget(_guard);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os("WAYFINDER_CONFIG").map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    init_logging(&config.log_dir)?;
    tracing::info!("Starting Wayfinder");

    // Utterances come from the command line; real browser speech APIs are
    // outside this repo, so the demo replays them through the scripted
    // recognizer.
    let mut utterances: Vec<String> = std::env::args().skip(1).collect();
    if utterances.is_empty() {
        utterances = vec![
            "feature two".to_string(),
            "can you find the bottle".to_string(),
        ];
    }
    let recognizer = ScriptedRecognizer::with_utterances(utterances);
    let synthesizer = ConsoleSynthesizer::new();

    // Canned vision scene so the demo has something to find.
    let classifier = ScriptedClassifier::with_script(vec![vec![
        Classification::new("room-key", 0.91),
        Classification::new("bike-key", 0.05),
    ]]);
    let detector = ScriptedDetector::with_script(vec![vec![Detection::new(
        "bottle",
        0.82,
        BoundingBox::new(500.0, 380.0, 90.0, 80.0),
    )]]);

    let snapshot = runtime::run(config, recognizer, synthesizer, classifier, detector).await;
    tracing::info!(
        "Pipeline finished: {} utterances, {} intents, {} announcements",
        snapshot.utterances_received,
        snapshot.intents_navigate + snapshot.intents_find,
        snapshot.announcements_spoken
    );
    Ok(())
}
