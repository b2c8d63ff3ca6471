#[cfg(target_os = "linux")]
mod linux;

#[cfg(not(target_os = "linux"))]
mod standard;

use crate::app::LauncherApp;
use anyhow::Result;

#[cfg(target_os = "linux")]
pub fn run(app: LauncherApp) -> Result<()> {
    linux::run(app)
}

#[cfg(not(target_os = "linux"))]
pub fn run(app: LauncherApp) -> Result<()> {
    standard::run(app)
}
