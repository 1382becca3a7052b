// Behavior tests for PreviewController

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use plantuml_preview_core::*;
use tokio::sync::oneshot;

// ==================== Test doubles ====================

#[derive(Debug, Clone, PartialEq)]
enum ViewEvent {
    Mode(Mode),
    Source(String),
    Loading,
    Result(OutputFormat, Vec<u8>),
    Error(String),
    Placeholder,
    Busy(bool),
    Saved(String),
}

#[derive(Default)]
struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    fn last_error(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Error(msg) => Some(msg.clone()),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&ViewEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }
}

impl PreviewView for RecordingView {
    fn show_mode(&self, mode: Mode) {
        self.events.borrow_mut().push(ViewEvent::Mode(mode));
    }

    fn show_source(&self, source: &str) {
        self.events.borrow_mut().push(ViewEvent::Source(source.to_string()));
    }

    fn show_loading(&self) {
        self.events.borrow_mut().push(ViewEvent::Loading);
    }

    fn show_result(&self, artifact: &RenderedArtifact) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Result(artifact.format, artifact.data.clone()));
    }

    fn show_error(&self, message: &str) {
        self.events.borrow_mut().push(ViewEvent::Error(message.to_string()));
    }

    fn show_placeholder(&self) {
        self.events.borrow_mut().push(ViewEvent::Placeholder);
    }

    fn set_busy(&self, busy: bool) {
        self.events.borrow_mut().push(ViewEvent::Busy(busy));
    }

    fn save_file(&self, file: &DownloadFile) {
        self.events.borrow_mut().push(ViewEvent::Saved(file.file_name.clone()));
    }
}

/// Backend answering from a queue of canned results
#[derive(Default)]
struct FakeBackend {
    responses: RefCell<VecDeque<Result<Vec<u8>, RenderError>>>,
    pending: RefCell<VecDeque<oneshot::Receiver<Result<Vec<u8>, RenderError>>>>,
    cloud_calls: Cell<usize>,
    local_calls: RefCell<Vec<(String, String, OutputFormat)>>,
}

impl FakeBackend {
    fn answering(responses: Vec<Result<Vec<u8>, RenderError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            ..Default::default()
        }
    }

    fn calls(&self) -> usize {
        self.cloud_calls.get() + self.local_calls.borrow().len()
    }

    async fn next(&self) -> Result<Vec<u8>, RenderError> {
        let pending = self.pending.borrow_mut().pop_front();
        if let Some(rx) = pending {
            return rx.await.expect("sender dropped");
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("unexpected backend call")
    }
}

impl DiagramBackend for FakeBackend {
    async fn fetch_cloud(
        &self,
        _source: &str,
        _format: OutputFormat,
    ) -> Result<Vec<u8>, RenderError> {
        self.cloud_calls.set(self.cloud_calls.get() + 1);
        self.next().await
    }

    async fn post_local(
        &self,
        server_url: &str,
        source: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, RenderError> {
        self.local_calls
            .borrow_mut()
            .push((server_url.to_string(), source.to_string(), format));
        self.next().await
    }
}

const SOURCE: &str = "@startuml\nAlice -> Bob: Hello\n@enduml";
const SERVER_URL: &str = "http://localhost:5000/render";

fn controller(
    responses: Vec<Result<Vec<u8>, RenderError>>,
) -> PreviewController<RecordingView, FakeBackend> {
    let controller =
        PreviewController::new(RecordingView::default(), FakeBackend::answering(responses));
    controller.set_server_url(SERVER_URL);
    controller
}

// ==================== Validation ====================

#[tokio::test]
async fn test_empty_source_makes_no_call() {
    let controller = controller(vec![]);
    controller.set_source("   \n ");

    let result = controller.generate().await;

    assert_eq!(
        result,
        Err(PreviewError::Validation(ValidationError::EmptyContent))
    );
    assert_eq!(controller.backend().calls(), 0);
    assert_eq!(
        controller.view().last_error().as_deref(),
        Some("Please enter PlantUML code")
    );
    assert_eq!(controller.view().count(|e| *e == ViewEvent::Loading), 0);
}

#[tokio::test]
async fn test_local_mode_requires_server_url() {
    let controller = controller(vec![]);
    controller.set_server_url("");
    controller.set_source(SOURCE);

    let result = controller.generate().await;

    assert_eq!(
        result,
        Err(PreviewError::Validation(ValidationError::MissingServerUrl))
    );
    assert_eq!(controller.backend().calls(), 0);
    assert_eq!(
        controller.error().as_deref(),
        Some("Please set the backend server URL")
    );
    assert_eq!(controller.phase(), PreviewPhase::ShowingError);
}

// ==================== Local mode ====================

#[tokio::test]
async fn test_local_success_stores_artifact() {
    let controller = controller(vec![Ok(b"<svg/>".to_vec())]);
    controller.set_source(format!("\n{SOURCE}\n  "));

    controller.generate().await.unwrap();

    let calls = controller.backend().local_calls.borrow().clone();
    assert_eq!(
        calls,
        vec![(SERVER_URL.to_string(), SOURCE.to_string(), OutputFormat::Svg)]
    );
    assert_eq!(controller.phase(), PreviewPhase::ShowingResult);
    assert_eq!(controller.error(), None);
    assert_eq!(controller.artifact().unwrap().data, b"<svg/>".to_vec());
    assert_eq!(
        controller.view().events(),
        vec![
            ViewEvent::Loading,
            ViewEvent::Busy(true),
            ViewEvent::Result(OutputFormat::Svg, b"<svg/>".to_vec()),
            ViewEvent::Busy(false),
        ]
    );
}

#[tokio::test]
async fn test_local_server_message_surfaces_verbatim() {
    let controller = controller(vec![Err(RenderError::Server(
        "Missing 'code' in request".to_string(),
    ))]);
    controller.set_source(SOURCE);

    let result = controller.generate().await;

    assert!(result.is_err());
    assert_eq!(
        controller.view().last_error().as_deref(),
        Some("Missing 'code' in request")
    );
}

#[tokio::test]
async fn test_failure_discards_previous_artifact() {
    let controller = controller(vec![
        Ok(vec![1, 2, 3]),
        Err(RenderError::Server("HTTP 500: Internal Server Error".to_string())),
    ]);
    controller.set_source(SOURCE);

    controller.generate().await.unwrap();
    assert!(controller.has_artifact());

    controller.generate().await.unwrap_err();
    assert!(!controller.has_artifact());
    assert_eq!(
        controller.error().as_deref(),
        Some("HTTP 500: Internal Server Error")
    );
    assert_eq!(controller.download(), Err(PreviewError::NoArtifact));
}

#[tokio::test]
async fn test_new_attempt_clears_previous_error() {
    let controller = controller(vec![
        Err(RenderError::Network("connection refused".to_string())),
        Ok(vec![9]),
    ]);
    controller.set_source(SOURCE);

    controller.generate().await.unwrap_err();
    assert_eq!(
        controller.error().as_deref(),
        Some("Generation failed: connection refused")
    );

    controller.generate().await.unwrap();
    assert_eq!(controller.error(), None);
}

// ==================== Cloud mode ====================

#[tokio::test]
async fn test_cloud_mode_uses_cloud_backend() {
    let controller = controller(vec![Ok(vec![0x89, 0x50, 0x4E, 0x47])]);
    controller.switch_mode(Mode::Cloud);
    controller.set_format(OutputFormat::Png);
    controller.set_source(SOURCE);

    controller.generate().await.unwrap();

    assert_eq!(controller.backend().cloud_calls.get(), 1);
    assert!(controller.backend().local_calls.borrow().is_empty());
    assert_eq!(controller.artifact().unwrap().format, OutputFormat::Png);
}

#[tokio::test]
async fn test_cloud_failure_shows_generic_message() {
    let controller = controller(vec![Err(RenderError::CloudUnavailable)]);
    controller.switch_mode(Mode::Cloud);
    controller.set_source(SOURCE);

    controller.generate().await.unwrap_err();

    assert_eq!(
        controller.view().last_error().as_deref(),
        Some(CLOUD_FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn test_cloud_mode_ignores_missing_server_url() {
    let controller = controller(vec![Ok(vec![1])]);
    controller.set_server_url("");
    controller.switch_mode(Mode::Cloud);
    controller.set_source(SOURCE);

    assert!(controller.generate().await.is_ok());
}

// ==================== Mode switch ====================

#[tokio::test]
async fn test_switch_mode_keeps_artifact() {
    let controller = controller(vec![Ok(vec![7])]);
    controller.set_source(SOURCE);
    controller.generate().await.unwrap();

    controller.switch_mode(Mode::Cloud);

    assert_eq!(controller.mode(), Mode::Cloud);
    assert!(controller.has_artifact());
    assert_eq!(
        controller.view().events().last(),
        Some(&ViewEvent::Mode(Mode::Cloud))
    );
}

// ==================== Download ====================

#[tokio::test]
async fn test_download_uses_selected_extension() {
    let controller = controller(vec![Ok(b"<svg/>".to_vec()), Ok(vec![0x89, 0x50])]);
    controller.set_source(SOURCE);

    controller.generate().await.unwrap();
    controller.set_format(OutputFormat::Png);
    controller.generate().await.unwrap();

    let file = controller.download().unwrap();
    assert_eq!(file.file_name, "plantuml-diagram.png");
    assert_eq!(file.bytes, vec![0x89, 0x50]);
    assert_eq!(
        controller.view().events().last(),
        Some(&ViewEvent::Saved("plantuml-diagram.png".to_string()))
    );
}

#[tokio::test]
async fn test_download_without_artifact() {
    let controller = controller(vec![]);

    assert_eq!(controller.download(), Err(PreviewError::NoArtifact));
    assert_eq!(
        controller.view().last_error().as_deref(),
        Some("Please generate a diagram first")
    );
}

// ==================== Clear ====================

#[tokio::test]
async fn test_clear_after_success_blocks_download() {
    let controller = controller(vec![Ok(vec![1, 2])]);
    controller.set_source(SOURCE);
    controller.generate().await.unwrap();

    controller.clear();

    assert_eq!(controller.source(), "");
    assert_eq!(controller.phase(), PreviewPhase::Idle);
    assert!(controller
        .view()
        .events()
        .ends_with(&[
            ViewEvent::Source(String::new()),
            ViewEvent::Placeholder,
            ViewEvent::Busy(false)
        ]));
    assert_eq!(controller.download(), Err(PreviewError::NoArtifact));
}

// ==================== Examples ====================

#[tokio::test]
async fn test_each_example_triggers_one_generation() {
    for kind in ExampleKind::ALL {
        let controller = controller(vec![Ok(vec![1])]);

        controller.load_example(kind).await.unwrap();

        assert_eq!(controller.source(), kind.source());
        assert!(controller.source().starts_with("@startuml"));
        assert_eq!(controller.backend().calls(), 1, "{kind}");
        assert_eq!(
            controller.view().events().first(),
            Some(&ViewEvent::Source(kind.source().to_string()))
        );
    }
}

// ==================== Sequencing ====================

#[tokio::test]
async fn test_stale_result_does_not_overwrite_newer_one() {
    let controller = controller(vec![]);
    controller.set_source(SOURCE);

    let (old_tx, old_rx) = oneshot::channel();
    let (new_tx, new_rx) = oneshot::channel();
    controller.backend().pending.borrow_mut().extend([old_rx, new_rx]);

    let (first, second, _) = tokio::join!(controller.generate(), controller.generate(), async {
        new_tx.send(Ok(b"new".to_vec())).unwrap();
        old_tx.send(Ok(b"old".to_vec())).unwrap();
    });

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(controller.artifact().unwrap().data, b"new".to_vec());
    assert_eq!(
        controller
            .view()
            .count(|e| matches!(e, ViewEvent::Result(..))),
        1
    );
}

#[tokio::test]
async fn test_clear_invalidates_pending_generation() {
    let controller = controller(vec![]);
    controller.set_source(SOURCE);

    let (tx, rx) = oneshot::channel();
    controller.backend().pending.borrow_mut().push_back(rx);

    let (result, _) = tokio::join!(controller.generate(), async {
        controller.clear();
        tx.send(Ok(vec![1])).unwrap();
    });

    assert!(result.is_ok());
    assert!(!controller.has_artifact());
    assert_eq!(controller.phase(), PreviewPhase::Idle);
}

// ==================== Config ====================

#[tokio::test]
async fn test_with_config_applies_defaults() {
    let config = PreviewConfig {
        mode: Mode::Cloud,
        format: OutputFormat::Png,
        ..PreviewConfig::default()
    };
    let controller =
        PreviewController::with_config(RecordingView::default(), FakeBackend::default(), &config);

    assert_eq!(controller.mode(), Mode::Cloud);
    assert_eq!(controller.format(), OutputFormat::Png);
    assert_eq!(controller.server_url(), DEFAULT_LOCAL_SERVER_URL);
}
