use crate::config::ConfigStore;
use crate::menu::{
    ClickDispatcher, ControlAction, ControlContext, EventRouter, MenuHost, MenuSynchronizer, NodeId, NodeKind,
    RebuildSummary, UiCommand, UP_TO_DATE_LABEL,
};
use crate::settings::LauncherSettings;
use anyhow::Result;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

const CONTROLS_AFTER_ABOUT: [ControlAction; 4] = [
    ControlAction::Reload,
    ControlAction::Edit,
    ControlAction::CheckUpdate,
    ControlAction::Quit,
];

/// Everything the UI thread owns: the config store, the live menu and the
/// queue of commands coming back from listener tasks.
///
/// Rebuilds only run from [`LauncherApp::pump`], one at a time, so reload
/// requests that arrive mid-rebuild wait in the queue.
pub struct LauncherApp {
    settings: LauncherSettings,
    store: Arc<ConfigStore>,
    synchronizer: MenuSynchronizer<ClickDispatcher>,
    control: Arc<ControlContext>,
    controls: Vec<(ControlAction, NodeId)>,
    ui_rx: Receiver<UiCommand>,
}

impl LauncherApp {
    pub fn new(settings: LauncherSettings, store: Arc<ConfigStore>, dispatcher: ClickDispatcher) -> Self {
        let (ui_tx, ui_rx) = mpsc::channel();
        let control = Arc::new(ControlContext {
            ui_tx,
            about_url: settings.about_url.clone(),
            edit: settings.edit_target(),
        });

        Self {
            settings,
            store,
            synchronizer: MenuSynchronizer::new(dispatcher),
            control,
            controls: Vec::new(),
            ui_rx,
        }
    }

    pub fn settings(&self) -> &LauncherSettings {
        &self.settings
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    pub fn router(&self) -> &EventRouter {
        self.synchronizer.registry().router()
    }

    pub fn synchronizer(&self) -> &MenuSynchronizer<ClickDispatcher> {
        &self.synchronizer
    }

    pub fn control_id(&self, action: ControlAction) -> Option<&NodeId> {
        self.controls.iter().find(|(a, _)| *a == action).map(|(_, id)| id)
    }

    /// Adds the fixed entries, then builds the configured menu below them.
    pub fn install(&mut self, host: &mut dyn MenuHost) -> Result<()> {
        self.add_control(host, ControlAction::About)?;
        host.add_separator(None)?;
        for action in CONTROLS_AFTER_ABOUT {
            self.add_control(host, action)?;
        }
        host.add_separator(None)?;

        self.reload(host);
        Ok(())
    }

    fn add_control(&mut self, host: &mut dyn MenuHost, action: ControlAction) -> Result<()> {
        let id = host.add_node(None, NodeKind::Leaf, action.label(), "")?;
        self.synchronizer
            .registry_mut()
            .register_control(&id, action, Arc::clone(&self.control));
        self.controls.push((action, id));
        Ok(())
    }

    /// Loads the config file and rebuilds the menu. A failed load leaves
    /// both the stored config and the menu as they were.
    pub fn reload(&mut self, host: &mut dyn MenuHost) -> Option<RebuildSummary> {
        if let Err(e) = self.store.reload(&self.settings.config_file) {
            log::error!("Error loading config: {}", e);
            return None;
        }
        let config = self.store.snapshot();
        Some(self.synchronizer.rebuild(host, &config))
    }

    /// Routes pending tray clicks and runs queued UI commands. Returns false
    /// once quit was requested.
    pub fn pump(&mut self, host: &mut dyn MenuHost, events: impl IntoIterator<Item = String>) -> bool {
        for event_id in events {
            log::debug!("Menu event: {}", event_id);
            self.router().route(&event_id);
        }

        while let Ok(command) = self.ui_rx.try_recv() {
            if !self.handle(host, command) {
                return false;
            }
        }
        true
    }

    fn handle(&mut self, host: &mut dyn MenuHost, command: UiCommand) -> bool {
        match command {
            UiCommand::Reload => {
                log::info!("Reloading config from {}", self.settings.config_file.display());
                self.reload(host);
            }
            UiCommand::MarkUpToDate(id) => {
                host.set_label(&id, UP_TO_DATE_LABEL);
                host.set_enabled(&id, false);
            }
            UiCommand::Quit => {
                log::info!("Quit requested");
                self.synchronizer.retire_all(host);
                return false;
            }
        }
        true
    }
}
