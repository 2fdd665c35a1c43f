// Composition root for the hours report.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the concrete source, artifact store and process launcher.
// - Wire them into the report handler.

pub mod config;
pub mod state;
