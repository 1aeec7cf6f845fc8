//! Scout Attendance Frontend App
//!
//! Main application component: provides the workflow context and lays
//! out the attendance card.

use attendance_core::AttendanceWorkflow;
use leptos::prelude::*;

use crate::commands::HttpBackend;
use crate::components::AttendancePanel;
use crate::config::AppConfig;
use crate::context::AttendanceContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("using attendance API at {}", config.api_base_url);

    let workflow = signal(AttendanceWorkflow::new(config.workflow));
    let backend = HttpBackend::new(&config.api_base_url);

    // Provide context to all children
    provide_context(AttendanceContext::new(workflow, backend));

    view! {
        <div class="app-layout">
            <main class="main-content attend-card">
                <h1>"Attendance"</h1>
                <AttendancePanel />
            </main>
        </div>
    }
}
