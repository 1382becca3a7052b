// Runs plantuml.jar as a child process

use std::path::{Path, PathBuf};
use std::process::Stdio;

use plantuml_preview_core::OutputFormat;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Failures while running the renderer
#[derive(Debug, thiserror::Error)]
pub enum RenderFailure {
    #[error("failed to start {java}: {source}")]
    Spawn {
        java: String,
        source: std::io::Error,
    },

    #[error("renderer I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to generate output file")]
    NoOutput {
        exit_code: Option<i32>,
        stderr: String,
    },
}

/// Image plus what the process reported while producing it
#[derive(Debug)]
pub struct RenderOutput {
    pub bytes: Vec<u8>,
    pub exit_code: Option<i32>,
    pub stderr: String,
}

/// Output of a short diagnostic command
#[derive(Debug)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone)]
pub struct PlantUmlJar {
    java: PathBuf,
    jar: PathBuf,
}

impl PlantUmlJar {
    pub fn new(java: impl Into<PathBuf>, jar: impl Into<PathBuf>) -> Self {
        Self {
            java: java.into(),
            jar: jar.into(),
        }
    }

    pub fn jar_path(&self) -> &Path {
        &self.jar
    }

    /// Absolute jar path for diagnostics; falls back to the configured path
    pub fn absolute_jar_path(&self) -> PathBuf {
        std::env::current_dir()
            .map(|dir| dir.join(&self.jar))
            .unwrap_or_else(|_| self.jar.clone())
    }

    pub fn jar_exists(&self) -> bool {
        self.jar.is_file()
    }

    /// Render `code` through `java -jar plantuml.jar -pipe`.
    ///
    /// PlantUML may exit non-zero and still print an image (it draws syntax
    /// errors into the diagram), so any stdout output counts as success.
    pub async fn render(
        &self,
        code: &str,
        format: OutputFormat,
    ) -> Result<RenderOutput, RenderFailure> {
        let mut child = Command::new(&self.java)
            .arg("-Dfile.encoding=UTF-8")
            .arg("-jar")
            .arg(&self.jar)
            .arg(format!("-t{}", format.as_str()))
            .arg("-charset")
            .arg("UTF-8")
            .arg("-pipe")
            .env("JAVA_TOOL_OPTIONS", "-Dfile.encoding=UTF-8")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RenderFailure::Spawn {
                java: self.java.display().to_string(),
                source,
            })?;

        // Feed stdin concurrently so a large image cannot block on a full pipe
        let stdin = child.stdin.take();
        let input = code.as_bytes().to_vec();
        let writer = tokio::spawn(async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(&input).await?;
                stdin.shutdown().await?;
            }
            Ok::<(), std::io::Error>(())
        });

        let output = child.wait_with_output().await?;
        if let Ok(Err(e)) = writer.await {
            tracing::warn!("writing PlantUML source to renderer failed: {}", e);
        }

        let exit_code = output.status.code();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        tracing::debug!(?exit_code, bytes = output.stdout.len(), "renderer finished");

        if output.stdout.is_empty() {
            return Err(RenderFailure::NoOutput { exit_code, stderr });
        }

        Ok(RenderOutput {
            bytes: output.stdout,
            exit_code,
            stderr,
        })
    }

    /// `java -version` (the JVM prints it on stderr)
    pub async fn java_version(&self) -> Option<CommandOutput> {
        run(Command::new(&self.java).arg("-version")).await
    }

    /// `java -jar plantuml.jar -version`
    pub async fn plantuml_version(&self) -> Option<CommandOutput> {
        run(Command::new(&self.java)
            .arg("-jar")
            .arg(&self.jar)
            .arg("-version"))
        .await
    }
}

async fn run(command: &mut Command) -> Option<CommandOutput> {
    match command.kill_on_drop(true).output().await {
        Ok(output) => Some(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
        Err(e) => {
            tracing::warn!("diagnostic command failed to start: {}", e);
            None
        }
    }
}
