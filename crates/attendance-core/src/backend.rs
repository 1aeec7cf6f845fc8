//! Backend Seam
//!
//! Abstract interface to the members service plus the glue that turns
//! request effects into workflow events. Implementations can use HTTP,
//! in-memory fixtures, etc.

use async_trait::async_trait;

use crate::domain::{Category, Member, MemberCode};
use crate::wire::{AttendanceCheck, AttendanceRequest};
use crate::workflow::{Effect, WorkflowEvent};

/// Failures reported by a backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("not found")]
    NotFound,
    /// Non-success status; carries the server's text verbatim
    #[error("{0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Calls the attendance workflow needs from the members service.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait AttendanceBackend {
    /// `GET /members/member/{code}`
    async fn fetch_member(&self, code: &MemberCode) -> Result<Member, BackendError>;

    /// `GET /members/checkAttendance/{code}/{category}`
    async fn check_attendance(&self, code: &MemberCode, category: Category) -> Result<AttendanceCheck, BackendError>;

    /// `POST /members/attend`
    async fn submit_attendance(&self, request: &AttendanceRequest) -> Result<(), BackendError>;
}

/// Duplicate guard. Fails open: any error reads as "not attended".
pub async fn has_attended_today<B: AttendanceBackend + ?Sized>(
    backend: &B,
    code: &MemberCode,
    category: Category,
) -> bool {
    match backend.check_attendance(code, category).await {
        Ok(check) => check.attended(),
        Err(e) => {
            log::warn!("attendance check for {} / {} failed, treating as not attended: {}", code, category, e);
            false
        }
    }
}

/// Execute one request effect and report its outcome.
///
/// Timer effects return `None`; the host schedules those itself.
pub async fn perform<B: AttendanceBackend + ?Sized>(backend: &B, effect: Effect) -> Option<WorkflowEvent> {
    match effect {
        Effect::ResolveMember { step, code } => {
            let result = backend.fetch_member(&code).await;
            Some(WorkflowEvent::MemberLoaded { step, result })
        }
        Effect::CheckDuplicate { step, code, category } => {
            let attended = has_attended_today(backend, &code, category).await;
            Some(WorkflowEvent::DuplicateChecked { step, attended })
        }
        Effect::SubmitAttendance { step, request } => {
            let result = backend.submit_attendance(&request).await;
            Some(WorkflowEvent::Submitted { step, result })
        }
        Effect::ArmTimeout { .. } | Effect::ScheduleReset { .. } => None,
    }
}
