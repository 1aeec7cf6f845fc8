//! Workflow States, Events and Effects

use std::fmt;
use std::time::Duration;

use crate::admission::CategoryOption;
use crate::backend::BackendError;
use crate::domain::{Category, Member, MemberCode};
use crate::fine::FineAmount;
use crate::wire::AttendanceRequest;

/// Cancellation token for one workflow step.
///
/// Responses and timers carry the step that issued them. Once the workflow
/// has moved on, their step no longer matches and they are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StepId(pub(crate) u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an admitted member goes after the duplicate guard
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// Regular member: "Did a fine apply?"
    FineQuestion,
    /// Fine amount being typed
    FineEntry { input: String },
    /// Submission in flight. `fine` is `None` for a plain attendance mark.
    Submitting { fine: Option<FineAmount> },
}

/// How a transaction ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(String),
    Error(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(msg) | Outcome::Error(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// The attendance transaction, one variant per phase
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    /// Member lookup in flight
    Resolving { code: MemberCode },
    CategorySelectionOffered {
        member: Member,
        options: Vec<CategoryOption>,
    },
    /// Duplicate guard in flight. `options` is empty when selection was skipped.
    CategoryChosen {
        member: Member,
        category: Category,
        options: Vec<CategoryOption>,
    },
    AdmissionDecided {
        member: Member,
        category: Category,
        decision: Admission,
    },
    Terminal(Outcome),
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Resolving { .. } => "resolving",
            WorkflowState::CategorySelectionOffered { .. } => "category-selection",
            WorkflowState::CategoryChosen { .. } => "category-chosen",
            WorkflowState::AdmissionDecided { decision: Admission::FineQuestion, .. } => "fine-question",
            WorkflowState::AdmissionDecided { decision: Admission::FineEntry { .. }, .. } => "fine-entry",
            WorkflowState::AdmissionDecided { decision: Admission::Submitting { .. }, .. } => "submitting",
            WorkflowState::Terminal(Outcome::Success(_)) => "success",
            WorkflowState::Terminal(Outcome::Error(_)) => "error",
        }
    }

    /// Member of the transaction in progress, if any
    pub fn member(&self) -> Option<&Member> {
        match self {
            WorkflowState::CategorySelectionOffered { member, .. }
            | WorkflowState::CategoryChosen { member, .. }
            | WorkflowState::AdmissionDecided { member, .. } => Some(member),
            _ => None,
        }
    }

    /// Code the in-flight transaction is bound to
    pub(crate) fn transaction_code(&self) -> Option<&MemberCode> {
        match self {
            WorkflowState::Resolving { code } => Some(code),
            other => other.member().map(|m| &m.code),
        }
    }
}

/// Everything that can happen to the workflow
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEvent {
    /// Raw text from the code field
    CodeEdited(String),
    /// Attend button
    ResolveRequested,
    MemberLoaded {
        step: StepId,
        result: Result<Member, BackendError>,
    },
    CategoryPicked(Category),
    DuplicateChecked { step: StepId, attended: bool },
    /// Answer to "Did a fine apply?"
    FineAnswered(bool),
    FineAmountEdited(String),
    PayRequested,
    Submitted {
        step: StepId,
        result: Result<(), BackendError>,
    },
    TimedOut { step: StepId },
    ResetElapsed { step: StepId },
}

impl WorkflowEvent {
    /// Step the event answers to; `None` for operator input
    pub fn step(&self) -> Option<StepId> {
        match self {
            WorkflowEvent::MemberLoaded { step, .. }
            | WorkflowEvent::DuplicateChecked { step, .. }
            | WorkflowEvent::Submitted { step, .. }
            | WorkflowEvent::TimedOut { step }
            | WorkflowEvent::ResetElapsed { step } => Some(*step),
            _ => None,
        }
    }
}

/// Work the host must carry out on behalf of the workflow
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ResolveMember { step: StepId, code: MemberCode },
    CheckDuplicate {
        step: StepId,
        code: MemberCode,
        category: Category,
    },
    SubmitAttendance { step: StepId, request: AttendanceRequest },
    /// Deliver `TimedOut { step }` after `after`
    ArmTimeout { step: StepId, after: Duration },
    /// Deliver `ResetElapsed { step }` after `after`
    ScheduleReset { step: StepId, after: Duration },
}

impl Effect {
    /// Timer effects and the event they deliver when they fire
    pub fn timer(&self) -> Option<(Duration, WorkflowEvent)> {
        match self {
            Effect::ArmTimeout { step, after } => Some((*after, WorkflowEvent::TimedOut { step: *step })),
            Effect::ScheduleReset { step, after } => Some((*after, WorkflowEvent::ResetElapsed { step: *step })),
            _ => None,
        }
    }
}
