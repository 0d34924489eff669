//! # atlas-pipeline
//!
//! Runs the classification stages over an in-memory batch:
//! screening → season calendar → code classification → tier evaluation
//! (with escalation and colony discovery) → adjudication.
//!
//! Each stage completes over the whole batch before the next begins.
//! Species that raise a fatal fault are quarantined: their records get
//! cleared derived fields and take no further part in the run. Everything
//! else carries on.

pub mod pipeline;
pub mod quarantine;
pub mod report;
pub mod screening;

pub use pipeline::Pipeline;
pub use quarantine::Quarantine;
pub use report::PipelineReport;
