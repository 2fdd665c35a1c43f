// ProcessLauncher backed by std::process.
//
// The child is detached: stdio is closed and the handle is dropped without waiting.

use crate::shared::infrastructure::process_launcher::{Invocation, LaunchError, ProcessLauncher};
use std::io::ErrorKind;
use std::process::{Command, Stdio};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessLauncher;

impl ProcessLauncher for SystemProcessLauncher {
    #[allow(clippy::zombie_processes)]
    fn launch(&self, invocation: &Invocation) -> Result<(), LaunchError> {
        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => LaunchError::NotFound {
                    program: invocation.program.clone(),
                },
                _ => LaunchError::Failed {
                    program: invocation.program.clone(),
                    reason: e.to_string(),
                },
            })?;
        tracing::debug!(pid = child.id(), %invocation, "external renderer launched");
        Ok(())
    }
}
