//! Attendance Panel Component
//!
//! Code input, attend button and whichever sub-step the workflow is in.
//! The code field stays live the whole time: editing it aborts the
//! transaction in progress.

use attendance_core::{Admission, AttendanceWorkflow, MemberCode, WorkflowEvent, WorkflowState};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{CategoryPicker, FinePrompt, NoticeBanner};
use crate::context::use_attendance;

/// Which sub-step is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Code,
    Categories,
    Fine,
    Recording,
}

fn stage_of(state: &WorkflowState) -> Stage {
    match state {
        WorkflowState::CategorySelectionOffered { .. } => Stage::Categories,
        WorkflowState::CategoryChosen { options, .. } if !options.is_empty() => Stage::Categories,
        WorkflowState::CategoryChosen { .. } => Stage::Recording,
        WorkflowState::AdmissionDecided { member, decision: Admission::Submitting { fine: None }, .. }
            if member.role.is_privileged() =>
        {
            Stage::Recording
        }
        WorkflowState::AdmissionDecided { .. } => Stage::Fine,
        _ => Stage::Code,
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let ctx = use_attendance();
    let workflow = ctx.workflow;

    // Memo so typing a fine amount does not rebuild the sub-step
    let stage = Memo::new(move |_| workflow.with(|wf| stage_of(wf.state())));
    let busy = move || workflow.with(AttendanceWorkflow::busy);
    let resolving = move || workflow.with(|wf| matches!(wf.state(), WorkflowState::Resolving { .. }));

    let input_class = move || {
        workflow.with(|wf| {
            let code = wf.code_input();
            if code.is_empty() {
                "code-input"
            } else if MemberCode::parse(code).is_some() {
                "code-input is-valid"
            } else {
                "code-input is-invalid"
            }
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(WorkflowEvent::ResolveRequested);
    };

    view! {
        <section id="attendContent" class="attend-panel">
            <form class="attend-form" on:submit=on_submit>
                <input
                    type="text"
                    inputmode="numeric"
                    autocomplete="off"
                    placeholder="Member code (6 digits)"
                    class=input_class
                    prop:value=move || workflow.with(|wf| wf.code_input().to_string())
                    on:input=move |ev| {
                        let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                        if let Some(input) = input {
                            ctx.dispatch(WorkflowEvent::CodeEdited(input.value()));
                        }
                    }
                />
                <Show when=move || workflow.with(AttendanceWorkflow::trigger_enabled) || resolving()>
                    <button type="submit" class="attend-btn" disabled=busy>
                        {move || if resolving() { "Loading..." } else { "Attend" }}
                    </button>
                </Show>
            </form>

            {move || match stage.get() {
                Stage::Code => view! { <div></div> }.into_any(),
                Stage::Categories => view! { <CategoryPicker /> }.into_any(),
                Stage::Fine => view! { <FinePrompt /> }.into_any(),
                Stage::Recording => view! {
                    <p class="recording-status">"Recording attendance..."</p>
                }.into_any(),
            }}

            <NoticeBanner />
        </section>
    }
}
