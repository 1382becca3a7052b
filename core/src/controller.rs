// Diagram preview controller
//
// Holds the widget state (mode, inputs, current artifact) and runs the
// user actions. Rendering goes through `DiagramBackend`, display goes
// through `PreviewView`, so the controller itself never touches the DOM
// or the network.

use std::cell::RefCell;

use crate::config::PreviewConfig;
use crate::errors::{PreviewError, RenderError};
use crate::examples::ExampleKind;
use crate::models::{DownloadFile, Mode, OutputFormat, RenderedArtifact};
use crate::validation::{validate_plantuml_source, validate_server_url};

/// Display capabilities the controller needs from the UI
pub trait PreviewView {
    /// Show the controls and instructions of `mode`
    fn show_mode(&self, mode: Mode);

    /// Replace the text of the source editor
    fn show_source(&self, source: &str);

    /// Hide output, error and placeholder; show the progress indicator
    fn show_loading(&self);

    fn show_result(&self, artifact: &RenderedArtifact);

    fn show_error(&self, message: &str);

    /// Hide output and error; show the empty-preview placeholder
    fn show_placeholder(&self);

    fn set_busy(&self, busy: bool);

    /// Hand the file to the platform's download mechanism
    fn save_file(&self, file: &DownloadFile);
}

/// The two rendering collaborators
#[allow(async_fn_in_trait)]
pub trait DiagramBackend {
    /// Render through the public cloud service
    async fn fetch_cloud(&self, source: &str, format: OutputFormat)
        -> Result<Vec<u8>, RenderError>;

    /// Render through the user's local server at `server_url`
    async fn post_local(
        &self,
        server_url: &str,
        source: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, RenderError>;
}

/// Where the current generation cycle stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewPhase {
    #[default]
    Idle,
    Loading,
    ShowingResult,
    ShowingError,
}

#[derive(Debug, Default)]
struct PreviewState {
    mode: Mode,
    source: String,
    format: OutputFormat,
    server_url: String,
    artifact: Option<RenderedArtifact>,
    error: Option<String>,
    phase: PreviewPhase,
    /// Id of the latest generation attempt; older attempts are stale
    ticket: u64,
}

/// Inputs captured when an attempt starts
struct Attempt {
    ticket: u64,
    mode: Mode,
    format: OutputFormat,
    source: String,
    server_url: String,
}

/// Single-threaded controller; share it through `Rc`.
///
/// Every action takes `&self`. The state borrow is never held across an
/// await, so a second action may start while a generation is pending.
pub struct PreviewController<V, B> {
    view: V,
    backend: B,
    state: RefCell<PreviewState>,
}

impl<V: PreviewView, B: DiagramBackend> PreviewController<V, B> {
    pub fn new(view: V, backend: B) -> Self {
        Self {
            view,
            backend,
            state: RefCell::new(PreviewState::default()),
        }
    }

    pub fn with_config(view: V, backend: B, config: &PreviewConfig) -> Self {
        let controller = Self::new(view, backend);
        {
            let mut state = controller.state.borrow_mut();
            state.mode = config.mode;
            state.format = config.format;
            state.server_url = config.local_server_url.clone();
        }
        controller
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn mode(&self) -> Mode {
        self.state.borrow().mode
    }

    pub fn format(&self) -> OutputFormat {
        self.state.borrow().format
    }

    pub fn source(&self) -> String {
        self.state.borrow().source.clone()
    }

    pub fn server_url(&self) -> String {
        self.state.borrow().server_url.clone()
    }

    pub fn phase(&self) -> PreviewPhase {
        self.state.borrow().phase
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn artifact(&self) -> Option<RenderedArtifact> {
        self.state.borrow().artifact.clone()
    }

    pub fn has_artifact(&self) -> bool {
        self.state.borrow().artifact.is_some()
    }

    pub fn set_source(&self, source: impl Into<String>) {
        self.state.borrow_mut().source = source.into();
    }

    pub fn set_format(&self, format: OutputFormat) {
        self.state.borrow_mut().format = format;
    }

    pub fn set_server_url(&self, url: impl Into<String>) {
        self.state.borrow_mut().server_url = url.into();
    }

    /// Select the rendering backend. The stored artifact is left alone.
    pub fn switch_mode(&self, mode: Mode) {
        self.state.borrow_mut().mode = mode;
        tracing::debug!(%mode, "mode switched");
        self.view.show_mode(mode);
    }

    /// Render the current source with the backend of the current mode.
    ///
    /// Failures are shown through the view and also returned.
    pub async fn generate(&self) -> Result<(), PreviewError> {
        let attempt = match self.begin_attempt() {
            Ok(attempt) => attempt,
            Err(e) => {
                tracing::warn!("generation rejected: {}", e);
                self.record_error(&e);
                return Err(e);
            }
        };

        tracing::debug!(
            ticket = attempt.ticket,
            mode = %attempt.mode,
            format = %attempt.format,
            "dispatching generation"
        );

        let result = match attempt.mode {
            Mode::Cloud => self
                .backend
                .fetch_cloud(&attempt.source, attempt.format)
                .await
                .map_err(PreviewError::from),
            Mode::Local => match validate_server_url(&attempt.server_url) {
                Ok(url) => self
                    .backend
                    .post_local(url, &attempt.source, attempt.format)
                    .await
                    .map_err(PreviewError::from),
                Err(e) => Err(e.into()),
            },
        };

        self.finish_attempt(&attempt, result)
    }

    /// Replace the source with a built-in example and render it
    pub async fn load_example(&self, kind: ExampleKind) -> Result<(), PreviewError> {
        let source = kind.source();
        self.set_source(source);
        self.view.show_source(source);
        self.generate().await
    }

    /// Empty the editor and drop the artifact.
    ///
    /// A pending generation is invalidated, its outcome will not be shown.
    pub fn clear(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.source.clear();
            state.artifact = None;
            state.error = None;
            state.phase = PreviewPhase::Idle;
            state.ticket += 1;
        }
        self.view.show_source("");
        self.view.show_placeholder();
        self.view.set_busy(false);
    }

    /// Offer the stored artifact as a file named after the selected format
    pub fn download(&self) -> Result<DownloadFile, PreviewError> {
        let file = {
            let state = self.state.borrow();
            state
                .artifact
                .as_ref()
                .map(|artifact| DownloadFile::for_artifact(artifact, state.format))
        };

        match file {
            Some(file) => {
                tracing::debug!(file_name = %file.file_name, bytes = file.bytes.len(), "download");
                self.view.save_file(&file);
                Ok(file)
            }
            None => {
                let e = PreviewError::NoArtifact;
                self.record_error(&e);
                Err(e)
            }
        }
    }

    fn begin_attempt(&self) -> Result<Attempt, PreviewError> {
        let attempt = {
            let mut state = self.state.borrow_mut();
            let source = validate_plantuml_source(&state.source)?.to_string();

            state.ticket += 1;
            state.phase = PreviewPhase::Loading;
            state.error = None;

            Attempt {
                ticket: state.ticket,
                mode: state.mode,
                format: state.format,
                source,
                server_url: state.server_url.clone(),
            }
        };

        self.view.show_loading();
        self.view.set_busy(true);
        Ok(attempt)
    }

    fn finish_attempt(
        &self,
        attempt: &Attempt,
        result: Result<Vec<u8>, PreviewError>,
    ) -> Result<(), PreviewError> {
        if self.state.borrow().ticket != attempt.ticket {
            tracing::debug!(ticket = attempt.ticket, "discarding stale generation result");
            return result.map(|_| ());
        }

        match result {
            Ok(bytes) => {
                let artifact = RenderedArtifact::new(attempt.format, bytes);
                tracing::info!(
                    mode = %attempt.mode,
                    format = %attempt.format,
                    bytes = artifact.len(),
                    "diagram generated"
                );
                {
                    let mut state = self.state.borrow_mut();
                    state.artifact = Some(artifact.clone());
                    state.phase = PreviewPhase::ShowingResult;
                }
                self.view.show_result(&artifact);
                self.view.set_busy(false);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(mode = %attempt.mode, "generation failed: {}", e);
                self.state.borrow_mut().artifact = None;
                self.record_error(&e);
                self.view.set_busy(false);
                Err(e)
            }
        }
    }

    fn record_error(&self, error: &PreviewError) {
        let message = error.to_string();
        {
            let mut state = self.state.borrow_mut();
            state.error = Some(message.clone());
            state.phase = PreviewPhase::ShowingError;
        }
        self.view.show_error(&message);
    }
}
