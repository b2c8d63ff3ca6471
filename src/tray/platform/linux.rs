use crate::tray::{build_tray, pending_menu_events, TrayMenuHost, POLL_INTERVAL};
use crate::app::LauncherApp;
use anyhow::{Context, Result};
use gtk::{self, glib};

pub fn run(mut app: LauncherApp) -> Result<()> {
    gtk::init().context("Failed to initialize GTK")?;

    let mut host = TrayMenuHost::new();
    app.install(&mut host)?;
    let tray_icon = build_tray(host.menu(), app.settings())?;

    glib::timeout_add_local(POLL_INTERVAL, move || {
        if app.pump(&mut host, pending_menu_events()) {
            return glib::ControlFlow::Continue;
        }

        log::info!("Quitting application");
        gtk::main_quit();
        glib::ControlFlow::Break
    });

    gtk::main();
    drop(tray_icon);
    Ok(())
}
