#[path = "integration/files.rs"]
mod files;
#[path = "integration/scenarios.rs"]
mod scenarios;
