//! The sequential recognition-to-announcement pipeline
//!
//! One iteration per recognition cycle: pull an utterance, interpret it,
//! update mode or session, and while a search is active trigger a capture
//! and report what the vision collaborator saw. Provider failures are
//! logged and skipped; the pipeline only stops when the recognizer reports
//! end of input.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use wayfinder_foundation::SearchSession;
use wayfinder_intent::{FeatureId, Intent, Interpreter};
use wayfinder_locate::{locate, FrameSize};
use wayfinder_stt::{RecognitionConfig, RecognitionEvent, SpeechRecognizer};
use wayfinder_telemetry::PipelineMetrics;
use wayfinder_tts::SpeechSynthesizer;
use wayfinder_vision::{confident_label, ImageClassifier, ObjectDetector};

use crate::announce;

/// Which vision feature is active, mirroring the two feature pages the
/// user can navigate between by voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureMode {
    /// Feature 1: whole-frame image classification, reports presence.
    Classify,
    /// Feature 2: object detection, reports on-screen position.
    Detect,
}

impl FeatureMode {
    fn for_feature(feature: FeatureId) -> Option<Self> {
        match feature.0 {
            1 => Some(FeatureMode::Classify),
            2 => Some(FeatureMode::Detect),
            _ => None,
        }
    }
}

/// Tunables for a pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub mode: FeatureMode,
    pub frame: FrameSize,
    pub min_classification_probability: f32,
    /// Pause between recognition cycles.
    pub restart_delay: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            mode: FeatureMode::Classify,
            frame: FrameSize::default(),
            min_classification_probability: wayfinder_vision::MIN_CLASSIFICATION_PROBABILITY,
            restart_delay: RecognitionConfig::default().restart_delay,
        }
    }
}

/// The assembled pipeline, generic over its collaborators.
pub struct Pipeline<R, S, C, D> {
    recognizer: R,
    synthesizer: S,
    classifier: C,
    detector: D,
    interpreter: Interpreter,
    session: SearchSession,
    metrics: PipelineMetrics,
    mode: FeatureMode,
    frame: FrameSize,
    min_classification_probability: f32,
    restart_delay: Duration,
}

impl<R, S, C, D> Pipeline<R, S, C, D>
where
    R: SpeechRecognizer,
    S: SpeechSynthesizer,
    C: ImageClassifier,
    D: ObjectDetector,
{
    pub fn new(
        recognizer: R,
        synthesizer: S,
        classifier: C,
        detector: D,
        options: PipelineOptions,
    ) -> Self {
        Self {
            recognizer,
            synthesizer,
            classifier,
            detector,
            interpreter: Interpreter::new(),
            session: SearchSession::new(),
            metrics: PipelineMetrics::new(),
            mode: options.mode,
            frame: options.frame,
            min_classification_probability: options.min_classification_probability,
            restart_delay: options.restart_delay,
        }
    }

    /// Shared metrics handle, valid after `run` consumes the pipeline.
    pub fn metrics(&self) -> PipelineMetrics {
        self.metrics.clone()
    }

    /// Shared session handle, valid after `run` consumes the pipeline.
    pub fn session(&self) -> SearchSession {
        self.session.clone()
    }

    /// Drive recognition cycles until the recognizer reports end of input.
    pub async fn run(mut self) {
        info!(
            target: "pipeline",
            "Pipeline starting ({:?} mode, {}x{} frame)",
            self.mode, self.frame.width, self.frame.height
        );
        self.speak(announce::READY).await;

        loop {
            match self.recognizer.next_utterance().await {
                Ok(Some(RecognitionEvent::Utterance { cycle_id, text })) => {
                    self.metrics.record_utterance();
                    self.handle_utterance(cycle_id, &text).await;
                }
                Ok(Some(RecognitionEvent::Error { code, message })) => {
                    self.metrics.record_recognition_error();
                    warn!(target: "pipeline", "Recognition error {}: {}", code, message);
                }
                Ok(None) => {
                    info!(target: "pipeline", "Recognizer finished, pipeline stopping");
                    break;
                }
                Err(e) => {
                    self.metrics.record_recognition_error();
                    warn!(target: "pipeline", "Recognition cycle failed: {}", e);
                }
            }

            if self.session.is_searching() {
                self.capture_and_report().await;
            }

            if !self.restart_delay.is_zero() {
                tokio::time::sleep(self.restart_delay).await;
            }
        }
    }

    async fn handle_utterance(&mut self, cycle_id: u64, text: &str) {
        debug!(target: "pipeline", "Cycle {}: {:?}", cycle_id, text);
        match self.interpreter.interpret(Some(text)) {
            Some(Intent::NavigateTo(feature)) => {
                self.metrics.record_navigate();
                match FeatureMode::for_feature(feature) {
                    Some(mode) => {
                        info!(target: "pipeline", "Navigating to {} ({:?} mode)", feature, mode);
                        self.mode = mode;
                    }
                    None => warn!(target: "pipeline", "No mode for {}, staying put", feature),
                }
            }
            Some(Intent::FindObject(object)) => {
                self.metrics.record_find();
                self.session.start_search(object.clone());
                self.speak(&announce::searching(&object)).await;
            }
            None => self.metrics.record_no_match(),
        }
    }

    /// Trigger one capture and report on the sought object, per the active
    /// feature mode. Clears the session slot once the object is found.
    async fn capture_and_report(&mut self) {
        let Some(sought) = self.session.sought() else {
            return;
        };
        self.metrics.record_capture();

        match self.mode {
            FeatureMode::Classify => {
                let classifications = match self.classifier.classify().await {
                    Ok(c) => c,
                    Err(e) => {
                        warn!(target: "pipeline", "Classifier failed: {}", e);
                        return;
                    }
                };
                let confident =
                    confident_label(&classifications, self.min_classification_probability)
                        .map(str::to_owned);
                if let Some(label) = confident {
                    if self.session.complete_if_found(&label) {
                        self.metrics.record_object_found();
                        self.speak(&announce::found(&sought)).await;
                    }
                }
            }
            FeatureMode::Detect => {
                let detections = match self.detector.detect().await {
                    Ok(d) => d,
                    Err(e) => {
                        warn!(target: "pipeline", "Detector failed: {}", e);
                        return;
                    }
                };
                self.metrics.record_detections(detections.len() as u64);

                let mut matched = false;
                for detection in detections.iter().filter(|d| d.label == sought.as_str()) {
                    let region = locate(detection.bounding_box, self.frame);
                    self.speak(&announce::located(&sought, region)).await;
                    matched = true;
                }
                if matched && self.session.complete_if_found(sought.as_str()) {
                    self.metrics.record_object_found();
                }
            }
        }
    }

    async fn speak(&mut self, text: &str) {
        match self.synthesizer.speak(text).await {
            Ok(()) => self.metrics.record_announcement(),
            Err(e) => warn!(target: "pipeline", "Synthesis failed: {}", e),
        }
    }
}
