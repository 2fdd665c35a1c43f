// In memory implementation of the ProcessLauncher port.
//
// Purpose
// - Record invocations instead of spawning them.
// - Script per-program outcomes: missing, failing to start, or launched.

use crate::shared::infrastructure::process_launcher::{Invocation, LaunchError, ProcessLauncher};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub struct InMemoryProcessLauncher {
    launched: Mutex<Vec<Invocation>>,
    missing: HashSet<String>,
    failing: HashMap<String, String>,
}

impl InMemoryProcessLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing(mut self, program: impl Into<String>) -> Self {
        self.missing.insert(program.into());
        self
    }

    pub fn with_failure(mut self, program: impl Into<String>, reason: impl Into<String>) -> Self {
        self.failing.insert(program.into(), reason.into());
        self
    }

    pub fn launched(&self) -> Vec<Invocation> {
        self.guard().clone()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Invocation>> {
        self.launched.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProcessLauncher for InMemoryProcessLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<(), LaunchError> {
        if self.missing.contains(&invocation.program) {
            return Err(LaunchError::NotFound {
                program: invocation.program.clone(),
            });
        }
        if let Some(reason) = self.failing.get(&invocation.program) {
            return Err(LaunchError::Failed {
                program: invocation.program.clone(),
                reason: reason.clone(),
            });
        }
        self.guard().push(invocation.clone());
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_process_launcher_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_record_launched_invocations() {
        let launcher = InMemoryProcessLauncher::new();
        let invocation = Invocation::new("open").arg("-a").arg("Safari");

        launcher.launch(&invocation).unwrap();

        assert_eq!(launcher.launched(), vec![invocation]);
    }

    #[rstest]
    fn it_should_script_missing_and_failing_programs() {
        let launcher = InMemoryProcessLauncher::new()
            .with_missing("chromium")
            .with_failure("powershell", "access denied");

        let missing = launcher.launch(&Invocation::new("chromium"));
        let failing = launcher.launch(&Invocation::new("powershell"));

        assert!(matches!(missing, Err(LaunchError::NotFound { .. })));
        assert_eq!(
            failing.unwrap_err().to_string(),
            "powershell failed to start: access denied"
        );
        assert!(launcher.launched().is_empty());
    }
}
