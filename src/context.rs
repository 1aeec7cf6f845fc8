//! Application Context
//!
//! Attendance workflow state provided via Leptos Context API, plus the
//! dispatcher that runs the effects the workflow asks for.

use attendance_core::{perform, AttendanceWorkflow, Effect, WorkflowEvent};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpBackend;

/// Attendance form signals provided via context
#[derive(Clone, Copy)]
pub struct AttendanceContext {
    /// Current workflow - read
    pub workflow: ReadSignal<AttendanceWorkflow>,
    /// Current workflow - write (only through `dispatch`)
    set_workflow: WriteSignal<AttendanceWorkflow>,
    backend: StoredValue<HttpBackend, LocalStorage>,
}

impl AttendanceContext {
    pub fn new(
        workflow: (ReadSignal<AttendanceWorkflow>, WriteSignal<AttendanceWorkflow>),
        backend: HttpBackend,
    ) -> Self {
        Self {
            workflow: workflow.0,
            set_workflow: workflow.1,
            backend: StoredValue::new_local(backend),
        }
    }

    /// Feed an event into the workflow and start whatever it asks for
    pub fn dispatch(&self, event: WorkflowEvent) {
        let now = chrono::Local::now().time();
        let effects = self
            .set_workflow
            .try_update(|wf| wf.handle(event, now))
            .unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let ctx = *self;

        if let Some((after, event)) = effect.timer() {
            let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
            spawn_local(async move {
                TimeoutFuture::new(millis).await;
                ctx.dispatch(event);
            });
            return;
        }

        let Some(backend) = self.backend.try_get_value() else {
            log::warn!("backend disposed, dropping {:?}", effect);
            return;
        };
        spawn_local(async move {
            if let Some(event) = perform(&backend, effect).await {
                ctx.dispatch(event);
            }
        });
    }
}

/// Get the attendance context
pub fn use_attendance() -> AttendanceContext {
    expect_context::<AttendanceContext>()
}
