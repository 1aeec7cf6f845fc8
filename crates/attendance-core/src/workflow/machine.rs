//! Attendance Workflow State Machine
//!
//! Single `handle(event)` entry point. Transitions:
//!
//! ```text
//! Idle -> Resolving -> CategorySelectionOffered -> CategoryChosen -> AdmissionDecided -> Terminal -> Idle
//!                   \-> CategoryChosen (leader with one category)
//! ```

use std::mem;

use chrono::NaiveTime;

use super::state::{Admission, Effect, Outcome, StepId, WorkflowEvent, WorkflowState};
use crate::admission::{self, Availability};
use crate::backend::BackendError;
use crate::config::WorkflowConfig;
use crate::domain::{sanitize_code_input, Category, Member, MemberCode};
use crate::fine::{parse_fine_amount, FineAmount};
use crate::wire::AttendanceRequest;

const LOOKUP_FAILED: &str = "Failed to load member details. Please try again.";
const NO_RESPONSE: &str = "The server did not respond in time. Please try again.";

/// One attendance form's workflow, owned by its host component
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceWorkflow {
    config: WorkflowConfig,
    code_input: String,
    state: WorkflowState,
    step: StepId,
}

impl Default for AttendanceWorkflow {
    fn default() -> Self {
        Self::new(WorkflowConfig::default())
    }
}

impl AttendanceWorkflow {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            code_input: String::new(),
            state: WorkflowState::Idle,
            step: StepId::default(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Sanitized text of the code field
    pub fn code_input(&self) -> &str {
        &self.code_input
    }

    pub fn step(&self) -> StepId {
        self.step
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Attend button is offered only while idle with a well-formed code
    pub fn trigger_enabled(&self) -> bool {
        matches!(self.state, WorkflowState::Idle) && MemberCode::parse(&self.code_input).is_some()
    }

    /// A backend call is in flight; its control must stay disabled
    pub fn busy(&self) -> bool {
        matches!(
            self.state,
            WorkflowState::Resolving { .. }
                | WorkflowState::CategoryChosen { .. }
                | WorkflowState::AdmissionDecided { decision: Admission::Submitting { .. }, .. }
        )
    }

    /// Pay action is enabled only for a valid fine amount
    pub fn pay_enabled(&self) -> bool {
        match &self.state {
            WorkflowState::AdmissionDecided { decision: Admission::FineEntry { input }, .. } => {
                parse_fine_amount(input).is_some()
            }
            _ => false,
        }
    }

    /// Feed one event in, get back the effects the host must run
    pub fn handle(&mut self, event: WorkflowEvent, now: NaiveTime) -> Vec<Effect> {
        if let Some(step) = event.step() {
            if step != self.step {
                log::debug!("dropping stale event for step {} (current {})", step, self.step);
                return Vec::new();
            }
        }

        let from = self.state.name();
        let effects = match event {
            WorkflowEvent::CodeEdited(raw) => self.on_code_edited(&raw),
            WorkflowEvent::ResolveRequested => self.on_resolve_requested(),
            WorkflowEvent::MemberLoaded { result, .. } => self.on_member_loaded(result, now),
            WorkflowEvent::CategoryPicked(category) => self.on_category_picked(category, now),
            WorkflowEvent::DuplicateChecked { attended, .. } => self.on_duplicate_checked(attended),
            WorkflowEvent::FineAnswered(applies) => self.on_fine_answered(applies),
            WorkflowEvent::FineAmountEdited(input) => self.on_fine_amount_edited(input),
            WorkflowEvent::PayRequested => self.on_pay_requested(),
            WorkflowEvent::Submitted { result, .. } => self.on_submitted(result),
            WorkflowEvent::TimedOut { .. } => self.on_timed_out(),
            WorkflowEvent::ResetElapsed { .. } => self.on_reset_elapsed(),
        };

        if from != self.state.name() {
            log::debug!("attendance workflow: {} -> {} (step {})", from, self.state.name(), self.step);
        }
        effects
    }

    // ========================
    // Transition helpers
    // ========================

    /// Replace the state and start a new step, invalidating pending work
    fn transition(&mut self, state: WorkflowState) -> StepId {
        self.step = StepId(self.step.0 + 1);
        self.state = state;
        self.step
    }

    fn finish(&mut self, outcome: Outcome) -> Vec<Effect> {
        let after = match &outcome {
            Outcome::Success(msg) => {
                log::info!("attendance workflow finished: {}", msg);
                self.config.success_display()
            }
            Outcome::Error(msg) => {
                log::warn!("attendance workflow failed: {}", msg);
                self.config.error_display()
            }
        };
        let step = self.transition(WorkflowState::Terminal(outcome));
        vec![Effect::ScheduleReset { step, after }]
    }

    fn fail(&mut self, message: impl Into<String>) -> Vec<Effect> {
        self.finish(Outcome::Error(message.into()))
    }

    fn check_duplicate(&mut self, member: Member, category: Category, options: Vec<admission::CategoryOption>) -> Vec<Effect> {
        let code = member.code.clone();
        let step = self.transition(WorkflowState::CategoryChosen { member, category, options });
        vec![
            Effect::CheckDuplicate { step, code, category },
            Effect::ArmTimeout { step, after: self.config.request_timeout() },
        ]
    }

    fn submit(&mut self, member: Member, category: Category, fine: Option<FineAmount>) -> Vec<Effect> {
        let request = AttendanceRequest {
            code: member.code.clone(),
            category,
            amount: fine.map_or(0.0, |f| f.value()),
        };
        let decision = Admission::Submitting { fine };
        let step = self.transition(WorkflowState::AdmissionDecided { member, category, decision });
        vec![
            Effect::SubmitAttendance { step, request },
            Effect::ArmTimeout { step, after: self.config.request_timeout() },
        ]
    }

    // ========================
    // Handlers
    // ========================

    fn on_code_edited(&mut self, raw: &str) -> Vec<Effect> {
        let sanitized = sanitize_code_input(raw);
        if sanitized == self.code_input {
            return Vec::new();
        }
        self.code_input = sanitized;

        match &self.state {
            WorkflowState::Idle => {}
            WorkflowState::Terminal(_) => {
                self.transition(WorkflowState::Idle);
            }
            in_flight => {
                let typed = MemberCode::parse(&self.code_input);
                if typed.as_ref() != in_flight.transaction_code() {
                    log::info!("code field changed, abandoning {} step", in_flight.name());
                    self.transition(WorkflowState::Idle);
                }
            }
        }
        Vec::new()
    }

    fn on_resolve_requested(&mut self) -> Vec<Effect> {
        if !matches!(self.state, WorkflowState::Idle) {
            return Vec::new();
        }
        let Some(code) = MemberCode::parse(&self.code_input) else {
            return Vec::new();
        };

        let step = self.transition(WorkflowState::Resolving { code: code.clone() });
        vec![
            Effect::ResolveMember { step, code },
            Effect::ArmTimeout { step, after: self.config.request_timeout() },
        ]
    }

    fn on_member_loaded(&mut self, result: Result<Member, BackendError>, now: NaiveTime) -> Vec<Effect> {
        if !matches!(self.state, WorkflowState::Resolving { .. }) {
            return Vec::new();
        }

        let member = match result {
            Ok(member) => member,
            Err(BackendError::NotFound) => return self.fail("Member not found."),
            Err(e) => {
                log::warn!("member lookup failed: {}", e);
                return self.fail(LOOKUP_FAILED);
            }
        };

        if member.categories.is_empty() {
            return self.fail("Member has no categories assigned.");
        }
        if member.categories.len() == 1 && member.role.is_privileged() {
            let category = member.categories[0];
            return self.check_duplicate(member, category, Vec::new());
        }

        let options = admission::category_options(&member, now);
        self.transition(WorkflowState::CategorySelectionOffered { member, options });
        Vec::new()
    }

    fn on_category_picked(&mut self, category: Category, now: NaiveTime) -> Vec<Effect> {
        let WorkflowState::CategorySelectionOffered { member, .. } = &self.state else {
            return Vec::new();
        };
        if !member.belongs_to(category) {
            log::warn!("member {} is not in category {}, ignoring pick", member.code, category);
            return Vec::new();
        }
        if let Availability::Closed { .. } = admission::availability(member, category, now) {
            return self.fail(format!("Time window closed for {}.", category));
        }

        match mem::take(&mut self.state) {
            WorkflowState::CategorySelectionOffered { member, options } => self.check_duplicate(member, category, options),
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    fn on_duplicate_checked(&mut self, attended: bool) -> Vec<Effect> {
        let (member, category) = match mem::take(&mut self.state) {
            WorkflowState::CategoryChosen { member, category, .. } => (member, category),
            other => {
                self.state = other;
                return Vec::new();
            }
        };

        if attended {
            self.code_input.clear();
            return self.fail(format!("Already attended today for {}.", category));
        }
        if member.role.is_privileged() {
            return self.submit(member, category, None);
        }

        self.transition(WorkflowState::AdmissionDecided {
            member,
            category,
            decision: Admission::FineQuestion,
        });
        Vec::new()
    }

    fn on_fine_answered(&mut self, applies: bool) -> Vec<Effect> {
        match mem::take(&mut self.state) {
            WorkflowState::AdmissionDecided { member, category, decision: Admission::FineQuestion } => {
                if applies {
                    self.transition(WorkflowState::AdmissionDecided {
                        member,
                        category,
                        decision: Admission::FineEntry { input: String::new() },
                    });
                    Vec::new()
                } else {
                    self.submit(member, category, None)
                }
            }
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    fn on_fine_amount_edited(&mut self, text: String) -> Vec<Effect> {
        if let WorkflowState::AdmissionDecided { decision: Admission::FineEntry { input }, .. } = &mut self.state {
            *input = text;
        }
        Vec::new()
    }

    fn on_pay_requested(&mut self) -> Vec<Effect> {
        let amount = match &self.state {
            WorkflowState::AdmissionDecided { decision: Admission::FineEntry { input }, .. } => parse_fine_amount(input),
            _ => None,
        };
        let Some(amount) = amount else {
            return Vec::new();
        };

        match mem::take(&mut self.state) {
            WorkflowState::AdmissionDecided { member, category, .. } => self.submit(member, category, Some(amount)),
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    fn on_submitted(&mut self, result: Result<(), BackendError>) -> Vec<Effect> {
        let (category, fine) = match &self.state {
            WorkflowState::AdmissionDecided { category, decision: Admission::Submitting { fine }, .. } => (*category, *fine),
            _ => return Vec::new(),
        };
        let fallback = if fine.is_some() {
            "Error while paying fine."
        } else {
            "Error while recording attendance."
        };

        match result {
            Ok(()) => {
                self.code_input.clear();
                let message = match fine {
                    Some(amount) => format!("Fine paid ({} EGP) and attendance marked ({}).", amount.display(), category),
                    None => format!("Attendance recorded successfully ({}).", category),
                };
                self.finish(Outcome::Success(message))
            }
            Err(BackendError::Rejected(text)) if !text.trim().is_empty() => self.fail(text),
            Err(e) => {
                log::warn!("attendance submission failed: {}", e);
                self.fail(fallback)
            }
        }
    }

    fn on_timed_out(&mut self) -> Vec<Effect> {
        match &self.state {
            WorkflowState::Resolving { .. } => self.fail(NO_RESPONSE),
            WorkflowState::CategoryChosen { .. } => {
                log::warn!("attendance check timed out, treating as not attended");
                self.on_duplicate_checked(false)
            }
            WorkflowState::AdmissionDecided { decision: Admission::Submitting { .. }, .. } => self.fail(NO_RESPONSE),
            _ => Vec::new(),
        }
    }

    fn on_reset_elapsed(&mut self) -> Vec<Effect> {
        if matches!(self.state, WorkflowState::Terminal(_)) {
            self.transition(WorkflowState::Idle);
        }
        Vec::new()
    }
}
