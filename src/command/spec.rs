/// Separates the directory from the command in a terminal run-spec.
pub const SEGMENT_DELIMITER: &str = ", ";

/// A run-spec split into its segments.
///
/// Only the first delimiter splits; anything after it belongs to the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSpec<'a> {
    Single(&'a str),
    InTerminal { directory: &'a str, command: &'a str },
}

impl<'a> RunSpec<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(SEGMENT_DELIMITER) {
            None => RunSpec::Single(raw),
            Some((directory, command)) => RunSpec::InTerminal {
                directory: strip_quotes(directory),
                command: strip_quotes(command),
            },
        }
    }
}

fn strip_quotes(segment: &str) -> &str {
    segment.trim().trim_matches(|c| c == '"' || c == '\'')
}
