//! Run-spec interpretation.
//!
//! A run-spec is either a single segment (directory, URL or command line)
//! or `directory, command`, which opens a new terminal in `directory`
//! relative to the launcher's starting directory and runs `command` there.

pub mod launcher;
pub mod spec;
pub mod terminal;

pub use launcher::{Launcher, SystemLauncher};
pub use spec::RunSpec;
pub use terminal::{Platform, TerminalScript};

use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("invalid run spec: {0:?}")]
    InvalidFormat(String),

    #[error("initial working directory is unknown")]
    NoWorkDir,

    #[error("failed to start {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenUrl(String),
    OpenDirectory(PathBuf),
    Spawn { program: String, args: Vec<String> },
    Terminal(TerminalScript),
}

pub struct CommandInterpreter {
    launcher: Arc<dyn Launcher>,
    initial_work_dir: Option<PathBuf>,
    platform: Platform,
}

impl CommandInterpreter {
    /// `initial_work_dir` is `None` when the directory could not be read at
    /// startup; terminal run-specs fail in that case.
    pub fn new(launcher: Arc<dyn Launcher>, initial_work_dir: Option<PathBuf>) -> Self {
        Self {
            launcher,
            initial_work_dir,
            platform: Platform::current(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn launcher(&self) -> &Arc<dyn Launcher> {
        &self.launcher
    }

    pub fn initial_work_dir(&self) -> Option<&Path> {
        self.initial_work_dir.as_deref()
    }

    /// Decides what a run-spec does without starting anything.
    pub fn plan(&self, run_spec: &str) -> Result<Action, ExecError> {
        match RunSpec::parse(run_spec) {
            RunSpec::Single(segment) => plan_single(segment, run_spec),
            RunSpec::InTerminal { directory, command } => {
                let work_dir = self.initial_work_dir.as_ref().ok_or(ExecError::NoWorkDir)?;
                if directory.is_empty() || command.is_empty() {
                    return Err(ExecError::InvalidFormat(run_spec.to_string()));
                }
                // cmd has no escape for `"` inside a quoted path.
                if self.platform == Platform::Windows && directory.contains('"') {
                    return Err(ExecError::InvalidFormat(run_spec.to_string()));
                }
                Ok(Action::Terminal(TerminalScript {
                    work_dir: work_dir.clone(),
                    directory: directory.to_string(),
                    command: command.to_string(),
                }))
            }
        }
    }

    /// Starts the run-spec's action and returns as soon as the process is
    /// launched.
    pub fn execute(&self, run_spec: &str) -> Result<(), ExecError> {
        match self.plan(run_spec)? {
            Action::OpenUrl(url) => self.open(&url),
            Action::OpenDirectory(dir) => self.open(&dir.to_string_lossy()),
            Action::Spawn { program, args } => self.spawn(&program, &args),
            Action::Terminal(script) => {
                let invocation = script.invocation(self.platform);
                self.spawn(&invocation.program, &invocation.args)
            }
        }
    }

    fn open(&self, target: &str) -> Result<(), ExecError> {
        self.launcher
            .open(target)
            .map_err(|source| ExecError::SpawnFailed {
                program: self.launcher.opener().to_string(),
                source,
            })
    }

    fn spawn(&self, program: &str, args: &[String]) -> Result<(), ExecError> {
        self.launcher
            .spawn(program, args)
            .map_err(|source| ExecError::SpawnFailed {
                program: program.to_string(),
                source,
            })
    }
}

fn plan_single(segment: &str, run_spec: &str) -> Result<Action, ExecError> {
    let path = Path::new(segment);
    if path.is_dir() {
        return Ok(Action::OpenDirectory(path.to_path_buf()));
    }

    if is_url(segment) {
        return Ok(Action::OpenUrl(segment.to_string()));
    }

    let mut tokens = segment.split_whitespace();
    let program = tokens
        .next()
        .ok_or_else(|| ExecError::InvalidFormat(run_spec.to_string()))?;

    Ok(Action::Spawn {
        program: program.to_string(),
        args: tokens.map(String::from).collect(),
    })
}

fn is_url(segment: &str) -> bool {
    (segment.starts_with("https://") || segment.starts_with("http://"))
        && !segment.contains(char::is_whitespace)
}
