//! GitHub Actions workflow commands.
//!
//! Commands are lines of the form `::name key=value::data` written to
//! stdout. Exported variables go to the file named by `GITHUB_ENV` using
//! the heredoc form, so values may span several lines.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, trace};

use super::Platform;
use crate::core::constants;
use crate::error::{Error, Result};

/// GitHub Actions runner.
#[derive(Debug)]
pub struct GitHubActions<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
    env_file: Option<PathBuf>,
}

impl GitHubActions<io::Stdout> {
    /// Runner writing commands to stdout and exports to `$GITHUB_ENV`.
    pub fn from_env() -> Self {
        let env_file = std::env::var_os(constants::GITHUB_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        debug!(env_file = ?env_file, "github actions platform");
        Self::new(io::stdout(), env_file)
    }
}

impl<W: Write + Send> GitHubActions<W> {
    /// Runner writing commands to `out`.
    ///
    /// Without an env file, exports fall back to the `set-env` command.
    pub fn new(out: W, env_file: Option<PathBuf>) -> Self {
        Self {
            out: Mutex::new(out),
            env_file,
        }
    }

    /// Consume the runner and return its command writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn command(&self, name: &str, properties: &[(&str, &str)], message: &str) -> Result<()> {
        let line = format_command(name, properties, message);
        let mut out = self
            .out
            .lock()
            .map_err(|_| Error::Platform("command writer poisoned".into()))?;
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> Platform for GitHubActions<W> {
    fn set_secret(&self, value: &str) -> Result<()> {
        self.command("add-mask", &[], value)
    }

    fn warning(&self, message: &str) -> Result<()> {
        self.command("warning", &[], message)
    }

    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        match &self.env_file {
            Some(path) => {
                trace!(variable = %name, "appending to env file");
                append_env_file(path, name, value)
            }
            None => self.command("set-env", &[("name", name)], value),
        }
    }

    fn set_failed(&self, message: &str) -> Result<()> {
        self.command("error", &[], message)
    }
}

/// Append one `name<<DELIM` block to the env file.
fn append_env_file(path: &Path, name: &str, value: &str) -> Result<()> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    if name.contains(&delimiter) {
        return Err(Error::Platform(format!(
            "variable name should not contain the delimiter '{}'",
            delimiter
        )));
    }
    if value.contains(&delimiter) {
        return Err(Error::Platform(format!(
            "value of '{}' should not contain the delimiter '{}'",
            name, delimiter
        )));
    }

    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{}<<{}\n{}\n{}", name, delimiter, value, delimiter)?;
    Ok(())
}

/// Render a workflow command line.
pub fn format_command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{}", name);
    if !properties.is_empty() {
        let props: Vec<String> = properties
            .iter()
            .map(|(k, v)| format!("{}={}", k, escape_property(v)))
            .collect();
        line.push(' ');
        line.push_str(&props.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Escape command data so it stays on one line.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
