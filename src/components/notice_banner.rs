//! Notice Banner Component
//!
//! Transient success/error alert shown while the workflow is terminal.

use attendance_core::WorkflowState;
use leptos::prelude::*;

use crate::context::use_attendance;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_attendance();

    let notice = move || {
        ctx.workflow.with(|wf| match wf.state() {
            WorkflowState::Terminal(outcome) => Some((outcome.is_success(), outcome.message().to_string())),
            _ => None,
        })
    };

    move || {
        notice().map(|(success, message)| {
            let (class, mark) = if success {
                ("alert alert-success", "✅")
            } else {
                ("alert alert-danger", "❌")
            };
            view! {
                <div class=class role="alert">
                    {mark} " " {message}
                </div>
            }
        })
    }
}
