use crate::tray::{build_tray, pending_menu_events, TrayMenuHost, POLL_INTERVAL};
use crate::app::LauncherApp;
use anyhow::Result;
use std::time::Instant;
use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoop};

/// Runs the tao event loop on the main thread. Does not return: the process
/// exits when the loop does.
pub fn run(mut app: LauncherApp) -> Result<()> {
    let event_loop = EventLoop::new();

    let mut host = TrayMenuHost::new();
    app.install(&mut host)?;
    let mut tray_icon = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL);

        // macOS only shows status items created after the loop has started.
        if let Event::NewEvents(StartCause::Init) = event {
            match build_tray(host.menu(), app.settings()) {
                Ok(icon) => tray_icon = Some(icon),
                Err(e) => log::error!("Failed to create tray icon: {:#}", e),
            }
        }

        if !app.pump(&mut host, pending_menu_events()) {
            log::info!("Quitting application");
            tray_icon.take();
            *control_flow = ControlFlow::Exit;
        }
    })
}
