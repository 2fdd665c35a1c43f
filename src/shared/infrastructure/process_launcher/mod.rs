// Port for launching external programs without waiting for them.
//
// Purpose
// - Keep the image exporter testable without spawning real processes.
//
// Responsibilities
// - Start the program described by an Invocation and return as soon as it is running.
// - Distinguish a missing program from any other launch failure.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LaunchError {
    #[error("{program} was not found")]
    NotFound { program: String },

    #[error("{program} failed to start: {reason}")]
    Failed { program: String, reason: String },
}

pub trait ProcessLauncher: Send + Sync {
    fn launch(&self, invocation: &Invocation) -> Result<(), LaunchError>;
}

pub mod in_memory;
pub mod system;
