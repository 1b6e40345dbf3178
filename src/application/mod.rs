//! Application Layer - Scan orchestration

mod orchestrator;

pub use orchestrator::{PipelineError, ScanOrchestrator, ScanRequest};
