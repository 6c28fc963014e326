//! Terminal rendering of [`ConfigError`]s.

use crate::error::ConfigError;
use std::fmt;
use yansi::Paint;

/// Renders a config error for the terminal, coloured when stderr is a TTY
/// and `NO_COLOR` is unset.
pub struct ErrorFormatter {
    error: ConfigError,
    use_colors: bool,
}

impl ErrorFormatter {
    pub fn new(error: ConfigError) -> Self {
        Self {
            error,
            use_colors: supports_color(),
        }
    }

    pub fn format(&self) -> String {
        if self.use_colors {
            self.colored()
        } else {
            self.error.to_string()
        }
    }

    fn colored(&self) -> String {
        let mark = "✗".red().bold();
        match &self.error {
            ConfigError::InvalidEnum {
                field,
                value,
                options,
                hint,
            } => format!(
                "{mark} {} = {}\n  {} {}\n  {} {}",
                field.cyan(),
                format!("'{}'", value).yellow(),
                "expected one of:".bold(),
                options,
                "hint:".bold(),
                hint.green()
            ),
            ConfigError::InvalidInteger { field, value, min } => format!(
                "{mark} {} must be greater than {}, got {}",
                field.cyan(),
                min.green(),
                value.red()
            ),
            ConfigError::YamlError {
                location,
                message,
                context,
            }
            | ConfigError::TomlError {
                location,
                message,
                context,
            }
            | ConfigError::JsonError {
                location,
                message,
                context,
            } => {
                let mut out = format!(
                    "{mark} {}{}\n  {}",
                    "Could not parse configuration".bold(),
                    location.yellow(),
                    message
                );
                if !context.is_empty() {
                    out.push('\n');
                    out.push_str(&context.dim().to_string());
                }
                out
            }
            ConfigError::ValidationError { field, message } => {
                format!("{mark} {}: {}", field.cyan(), message)
            }
            ConfigError::ProfileNotFound { name } => format!(
                "{mark} No profile named {}\n  {} repolens config list-profiles",
                name.yellow(),
                "hint:".bold()
            ),
            ConfigError::NoDefaultProfile => format!(
                "{mark} No default profile\n  {} repolens config add-profile <name> --api-key <key>",
                "hint:".bold()
            ),
            ConfigError::FileNotFound { path } => format!(
                "{mark} Configuration file not found: {}",
                path.display().to_string().yellow()
            ),
            other => format!("{mark} {}", other),
        }
    }
}

fn supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
