//! Fine Prompt Component
//!
//! "Did a fine apply?" question, then the amount field with the pay button.

use attendance_core::{Admission, AttendanceWorkflow, WorkflowEvent, WorkflowState};
use leptos::prelude::*;

use crate::context::use_attendance;

#[component]
pub fn FinePrompt() -> impl IntoView {
    let ctx = use_attendance();
    let workflow = ctx.workflow;

    let busy = move || workflow.with(AttendanceWorkflow::busy);
    let pay_enabled = move || workflow.with(AttendanceWorkflow::pay_enabled);
    let entering = move || {
        workflow.with(|wf| {
            matches!(
                wf.state(),
                WorkflowState::AdmissionDecided { decision: Admission::FineEntry { .. }, .. }
                    | WorkflowState::AdmissionDecided { decision: Admission::Submitting { fine: Some(_) }, .. }
            )
        })
    };

    let amount_entry = move || {
        view! {
            <div id="fineAmountDiv" class="fine-amount">
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Fine amount (EGP)"
                    class=move || if pay_enabled() || busy() { "fine-input" } else { "fine-input is-invalid" }
                    disabled=busy
                    on:input=move |ev| ctx.dispatch(WorkflowEvent::FineAmountEdited(event_target_value(&ev)))
                />
                <Show when=move || pay_enabled() || busy()>
                    <button
                        type="button"
                        class="pay-btn"
                        disabled=busy
                        on:click=move |_| ctx.dispatch(WorkflowEvent::PayRequested)
                    >
                        {move || if busy() { "Processing... ⏳" } else { "Pay Fine" }}
                    </button>
                </Show>
            </div>
        }
    };

    view! {
        <div id="fineQuestion" class="fine-prompt">
            <Show when=move || !entering() fallback=amount_entry>
                <p class="fine-question">"Did a fine apply?"</p>
                <div class="fine-answers">
                    <button
                        type="button"
                        class="fine-yes"
                        disabled=busy
                        on:click=move |_| ctx.dispatch(WorkflowEvent::FineAnswered(true))
                    >
                        "Yes"
                    </button>
                    <button
                        type="button"
                        class="fine-no"
                        disabled=busy
                        on:click=move |_| ctx.dispatch(WorkflowEvent::FineAnswered(false))
                    >
                        {move || if busy() { "Recording..." } else { "No" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
