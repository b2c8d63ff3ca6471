use super::terminal::Platform;
use std::io;
use std::process::Stdio;

/// Starts OS processes without waiting for them.
pub trait Launcher: Send + Sync {
    /// Opens a directory or URL with the desktop's default handler.
    fn open(&self, target: &str) -> io::Result<()>;

    fn spawn(&self, program: &str, args: &[String]) -> io::Result<()>;

    fn opener(&self) -> &str;
}

pub struct SystemLauncher {
    platform: Platform,
}

impl SystemLauncher {
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
        }
    }
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, target: &str) -> io::Result<()> {
        log::debug!("Opening {} with {}", target, self.opener());
        open::with_detached(target, self.opener())
    }

    /// Must run inside a tokio runtime; dropped children are reaped by it.
    fn spawn(&self, program: &str, args: &[String]) -> io::Result<()> {
        log::debug!("Spawning {} {:?}", program, args);
        tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;
        Ok(())
    }

    fn opener(&self) -> &str {
        self.platform.opener()
    }
}
