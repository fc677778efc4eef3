use anyhow::{Context, Result};
use clap::{arg, Arg, ArgMatches};

/// One operation, along with where it was read from, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedOperation {
    pub origin: String,
    pub text: String,
}

pub struct GlobalSettings {
    // Operations to replay, script first
    pub operations: Vec<SourcedOperation>,

    // Abort on the first rejected operation, instead of skipping it
    pub strict: bool,

    // Display segments rather than raw breakpoints
    pub segments: bool,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--script [FILE] "Read operations from FILE, one per line"),
            arg!(--strict "Stop at the first operation that is rejected"),
            arg!(--segments "Show one segment per line"),
        ]
    }

    /// Create the settings from the command line arguments.  This reads the
    /// script file, if any.
    pub fn new(args: &ArgMatches) -> Result<Self> {
        let mut operations = Vec::new();
        if let Some(path) = args.get_one::<String>("script") {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read script {path}"))?;
            operations.extend(parse_script(path, &content));
        }
        if let Some(ops) = args.get_many::<String>("OPERATION") {
            operations.extend(ops.enumerate().map(|(idx, text)| {
                SourcedOperation {
                    origin: format!("argument {}", idx + 1),
                    text: text.clone(),
                }
            }));
        }

        Ok(GlobalSettings {
            operations,
            strict: args.get_flag("strict"),
            segments: args.get_flag("segments"),
        })
    }
}

/// Split a script into operations.  Empty lines and comments (starting with
/// '#') are ignored.
pub fn parse_script(
    name: &str,
    content: &str,
) -> impl Iterator<Item = SourcedOperation> {
    let name = name.to_string();
    content.lines().enumerate().filter_map(move |(idx, line)| {
        let text = line.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            None
        } else {
            Some(SourcedOperation {
                origin: format!("{}:{}", name, idx + 1),
                text: text.to_string(),
            })
        }
    })
}
