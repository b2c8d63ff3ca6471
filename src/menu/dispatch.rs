use super::router::EventRouter;
use super::sync::LeafRegistry;
use super::NodeId;
use crate::command::CommandInterpreter;
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

pub const UP_TO_DATE_LABEL: &str = "Up to date";

/// Fixed tray entries that are not part of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    About,
    Reload,
    Edit,
    CheckUpdate,
    Quit,
}

impl ControlAction {
    pub fn label(self) -> &'static str {
        match self {
            ControlAction::About => "About",
            ControlAction::Reload => "Reload Config",
            ControlAction::Edit => "Edit Options",
            ControlAction::CheckUpdate => "Check for Updates",
            ControlAction::Quit => "Quit",
        }
    }
}

/// Work that must happen on the thread owning the tray menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Reload,
    MarkUpToDate(NodeId),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// Launch this program with no arguments.
    Executable(PathBuf),
    /// Open this file with the desktop's default handler.
    OpenFile(PathBuf),
}

pub struct ControlContext {
    pub ui_tx: Sender<UiCommand>,
    pub about_url: String,
    pub edit: EditTarget,
}

/// Owns one listener task per clickable entry.
pub struct ClickDispatcher {
    router: EventRouter,
    interpreter: Arc<CommandInterpreter>,
    runtime: Handle,
    listeners: HashMap<NodeId, JoinHandle<()>>,
}

impl ClickDispatcher {
    pub fn new(router: EventRouter, interpreter: Arc<CommandInterpreter>, runtime: Handle) -> Self {
        Self {
            router,
            interpreter,
            runtime,
            listeners: HashMap::new(),
        }
    }

    pub fn router(&self) -> &EventRouter {
        &self.router
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn register_control(&mut self, id: &NodeId, action: ControlAction, ctx: Arc<ControlContext>) {
        let rx = self.router.register(id.clone());
        let interpreter = Arc::clone(&self.interpreter);
        let task = self
            .runtime
            .spawn(listen_control(id.clone(), action, rx, ctx, interpreter));
        self.listeners.insert(id.clone(), task);
    }
}

impl LeafRegistry for ClickDispatcher {
    fn register_leaf(&mut self, id: &NodeId, run_spec: &str) {
        let rx = self.router.register(id.clone());
        let interpreter = Arc::clone(&self.interpreter);
        let task = self
            .runtime
            .spawn(listen_leaf(id.clone(), run_spec.to_string(), rx, interpreter));
        self.listeners.insert(id.clone(), task);
    }

    /// Closing the route ends the listener once it drains pending clicks.
    fn retire_leaf(&mut self, id: &NodeId) {
        self.router.unregister(id);
        self.listeners.remove(id);
    }
}

async fn listen_leaf(
    id: NodeId,
    run_spec: String,
    mut rx: UnboundedReceiver<()>,
    interpreter: Arc<CommandInterpreter>,
) {
    while rx.recv().await.is_some() {
        log::info!("Executing command: {}", run_spec);
        // Planning stats the filesystem, which can hang on a dead mount.
        let interpreter = Arc::clone(&interpreter);
        let spec = run_spec.clone();
        match tokio::task::spawn_blocking(move || interpreter.execute(&spec)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::error!("Failed to execute {:?}: {}", run_spec, e),
            Err(e) => log::error!("Command task for {} failed: {}", id, e),
        }
    }
    log::debug!("Listener for {} stopped", id);
}

async fn listen_control(
    id: NodeId,
    action: ControlAction,
    mut rx: UnboundedReceiver<()>,
    ctx: Arc<ControlContext>,
    interpreter: Arc<CommandInterpreter>,
) {
    while rx.recv().await.is_some() {
        log::info!("{} requested", action.label());
        if let Err(e) = handle_control(action, &id, &ctx, &interpreter) {
            log::error!("{} failed: {:#}", action.label(), e);
        }
    }
}

fn handle_control(
    action: ControlAction,
    id: &NodeId,
    ctx: &ControlContext,
    interpreter: &CommandInterpreter,
) -> Result<()> {
    let launcher = interpreter.launcher();
    match action {
        ControlAction::About => launcher.open(&ctx.about_url)?,
        ControlAction::Edit => match &ctx.edit {
            EditTarget::Executable(program) => launcher.spawn(&program.to_string_lossy(), &[])?,
            EditTarget::OpenFile(path) => launcher.open(&path.to_string_lossy())?,
        },
        ControlAction::Reload => ctx.ui_tx.send(UiCommand::Reload)?,
        ControlAction::CheckUpdate => ctx.ui_tx.send(UiCommand::MarkUpToDate(id.clone()))?,
        ControlAction::Quit => ctx.ui_tx.send(UiCommand::Quit)?,
    }
    Ok(())
}
