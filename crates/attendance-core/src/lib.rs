//! Attendance Core
//!
//! DOM-free logic behind the attendance form:
//! - domain: member codes, categories, roles
//! - admission: daily windows and which categories are selectable
//! - fine: fine amount validation
//! - wire: JSON shapes of the members service
//! - backend: async trait seam, duplicate guard, effect execution
//! - workflow: the state machine itself

pub mod admission;
pub mod backend;
pub mod config;
pub mod domain;
pub mod fine;
pub mod wire;
pub mod workflow;

pub use admission::{AdmissionWindow, Availability, CategoryOption};
pub use backend::{has_attended_today, perform, AttendanceBackend, BackendError};
pub use config::WorkflowConfig;
pub use domain::{Category, Member, MemberCode, Role};
pub use fine::{parse_fine_amount, FineAmount};
pub use wire::{AttendanceCheck, AttendanceRequest, MemberRecord};
pub use workflow::{Admission, AttendanceWorkflow, Effect, Outcome, StepId, WorkflowEvent, WorkflowState};
