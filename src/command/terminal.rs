use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Program that opens a directory or URL with the desktop's default handler.
    pub fn opener(self) -> &'static str {
        match self {
            Platform::MacOs => "open",
            Platform::Windows => "explorer",
            Platform::Other => "xdg-open",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// A command to run in a fresh terminal window, starting from `work_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalScript {
    pub work_dir: PathBuf,
    pub directory: String,
    pub command: String,
}

impl TerminalScript {
    /// Every step is `&&`-chained so a failing `cd` stops the command.
    pub fn chain(&self, platform: Platform) -> String {
        let work_dir = self.work_dir.to_string_lossy();
        match platform {
            Platform::Windows => format!(
                "cd /d {} && cls && cd /d {} && {}",
                cmd_quote(&work_dir),
                cmd_quote(&self.directory),
                self.command
            ),
            Platform::MacOs | Platform::Other => format!(
                "cd {} && clear && cd {} && {}",
                shell_quote(&work_dir),
                shell_quote(&self.directory),
                self.command
            ),
        }
    }

    pub fn to_applescript(&self) -> String {
        format!(
            "tell application \"Terminal\"\n    do script \"{}\"\n    activate\nend tell",
            applescript_escape(&self.chain(Platform::MacOs))
        )
    }

    pub fn invocation(&self, platform: Platform) -> Invocation {
        match platform {
            Platform::MacOs => Invocation {
                program: "osascript".to_string(),
                args: vec!["-e".to_string(), self.to_applescript()],
            },
            Platform::Windows => Invocation {
                program: "cmd".to_string(),
                args: ["/C", "start", "cmd", "/K"]
                    .into_iter()
                    .map(String::from)
                    .chain(std::iter::once(self.chain(platform)))
                    .collect(),
            },
            Platform::Other => Invocation {
                program: "x-terminal-emulator".to_string(),
                args: vec![
                    "-e".to_string(),
                    "sh".to_string(),
                    "-c".to_string(),
                    format!("{}; exec \"${{SHELL:-sh}}\"", self.chain(platform)),
                ],
            },
        }
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_-./~:@%+=,".contains(c)
}

pub fn shell_quote(s: &str) -> String {
    if !s.is_empty() && s.chars().all(is_shell_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Callers must not pass `"`; cmd can't escape it inside quotes.
fn cmd_quote(s: &str) -> String {
    if !s.is_empty() && !s.contains(|c: char| " &()^|<>".contains(c)) {
        return s.to_string();
    }
    format!("\"{}\"", s)
}

fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
