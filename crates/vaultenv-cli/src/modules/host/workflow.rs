use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;
use uuid::Uuid;
use vaultenv_core::{EnvWriter, HostError, Redactor};

use super::commands::{env_file_entry, workflow_command};

/// Talks to the Actions runner through workflow commands on `out` and, when
/// the runner provides one, the `GITHUB_ENV` file.
pub(crate) struct ActionsHost<W: Write> {
    out: W,
    env_file: Option<PathBuf>,
}

impl<W: Write> ActionsHost<W> {
    pub(crate) fn new(out: W, env_file: Option<PathBuf>) -> Self {
        let env_file = env_file.filter(|path| !path.as_os_str().is_empty());
        Self { out, env_file }
    }

    pub(crate) fn fail(&mut self, message: &str) -> Result<(), HostError> {
        self.issue(&workflow_command("error", &[], message))
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn issue(&mut self, command: &str) -> Result<(), HostError> {
        writeln!(self.out, "{command}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Redactor for ActionsHost<W> {
    fn mask(&mut self, value: &str) -> Result<(), HostError> {
        self.issue(&workflow_command("add-mask", &[], value))
    }
}

impl<W: Write> EnvWriter for ActionsHost<W> {
    fn set(&mut self, name: &str, value: &str) -> Result<(), HostError> {
        if name.trim().is_empty() {
            return Err(HostError::InvalidName(name.to_string()));
        }
        match &self.env_file {
            Some(path) => {
                let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
                let entry = env_file_entry(name, value, &delimiter)?;
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(entry.as_bytes())?;
                debug!(name = %name, path = %path.display(), "appended variable to env file");
                Ok(())
            }
            None => self.issue(&workflow_command("set-env", &[("name", name)], value)),
        }
    }
}
