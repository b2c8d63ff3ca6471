mod host;
pub mod icon;
mod platform;

pub use host::TrayMenuHost;

use crate::app::LauncherApp;
use crate::settings::LauncherSettings;
use anyhow::Result;
use std::time::Duration;
use tray_icon::menu::{Menu, MenuEvent};
use tray_icon::{TrayIcon, TrayIconBuilder};

/// How often the UI thread drains menu events and queued commands.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shows the tray and runs its event loop on the calling thread until quit.
pub fn run(app: LauncherApp) -> Result<()> {
    platform::run(app)
}

fn build_tray(menu: &Menu, settings: &LauncherSettings) -> Result<TrayIcon> {
    let mut builder = TrayIconBuilder::new()
        .with_menu(Box::new(menu.clone()))
        .with_tooltip(&settings.tooltip);

    match icon::load_icon(&settings.icon) {
        Ok(icon) => builder = builder.with_icon(icon),
        Err(e) => {
            log::warn!("{:#}, showing title instead", e);
            builder = builder.with_title(&settings.title);
        }
    }

    Ok(builder.build()?)
}

fn pending_menu_events() -> impl Iterator<Item = String> {
    let receiver = MenuEvent::receiver();
    std::iter::from_fn(move || receiver.try_recv().ok().map(|event| event.id.0))
}
