use anyhow::{Context, Result};
use qol_launcher::app::LauncherApp;
use qol_launcher::command::{CommandInterpreter, Launcher, SystemLauncher};
use qol_launcher::config::ConfigStore;
use qol_launcher::menu::{ClickDispatcher, EventRouter};
use qol_launcher::settings::LauncherSettings;
use qol_launcher::tray;
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting QoL Launcher...");

    let initial_work_dir = match std::env::current_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            log::error!("Error getting initial working directory: {}", e);
            None
        }
    };

    let settings = LauncherSettings::load(initial_work_dir.as_deref());
    log::info!("Using config file {}", settings.config_file.display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let _guard = runtime.enter();

    let launcher: Arc<dyn Launcher> = Arc::new(SystemLauncher::new());
    let interpreter = Arc::new(CommandInterpreter::new(launcher, initial_work_dir));
    let dispatcher = ClickDispatcher::new(EventRouter::new(), interpreter, runtime.handle().clone());
    let app = LauncherApp::new(settings, Arc::new(ConfigStore::default()), dispatcher);

    tray::run(app)?;

    log::info!("Shutdown complete");
    Ok(())
}
