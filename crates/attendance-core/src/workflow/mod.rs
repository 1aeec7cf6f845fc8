//! Attendance Workflow
//!
//! Explicit state machine for one attendance form: member lookup, category
//! choice, duplicate guard, optional fine, submission.

mod machine;
mod state;


pub use machine::AttendanceWorkflow;
pub use state::{Admission, Effect, Outcome, StepId, WorkflowEvent, WorkflowState};
