//! Category Picker Component
//!
//! One button per member category. Regular members see the daily window
//! and a closed marker outside it; leaders can pick anything.

use attendance_core::admission::WINDOW_CLOSED_REASON;
use attendance_core::{Availability, Category, CategoryOption, WorkflowEvent, WorkflowState};
use leptos::prelude::*;

use crate::context::use_attendance;

/// Snapshot of what the picker renders
#[derive(Debug, Clone, PartialEq)]
struct PickerView {
    full_name: String,
    is_leader: bool,
    options: Vec<CategoryOption>,
    /// Category whose duplicate check is in flight
    pending: Option<Category>,
}

fn picker_view(state: &WorkflowState) -> Option<PickerView> {
    let (member, options, pending) = match state {
        WorkflowState::CategorySelectionOffered { member, options } => (member, options, None),
        WorkflowState::CategoryChosen { member, options, category } => (member, options, Some(*category)),
        _ => return None,
    };
    Some(PickerView {
        full_name: member.full_name.clone(),
        is_leader: member.role.is_privileged(),
        options: options.clone(),
        pending,
    })
}

#[component]
pub fn CategoryPicker() -> impl IntoView {
    let ctx = use_attendance();
    let picker = Memo::new(move |_| ctx.workflow.with(|wf| picker_view(wf.state())));

    move || {
        picker.get().map(|picker| {
            let is_leader = picker.is_leader;
            let waiting = picker.pending.is_some();

            view! {
                <div id="categorySelection" class="category-selection" role="dialog" aria-labelledby="categorySelectionTitle">
                    <span class="material-symbols-outlined category-icon" aria-hidden="true">"category"</span>
                    <p id="categorySelectionTitle" class="category-title">
                        {picker.full_name.clone()}
                        {is_leader.then(|| view! { <span class="badge leader-badge">"Scout Leader"</span> })}
                    </p>
                    <p class="category-hint">"Select the category for attendance:"</p>

                    <div class="category-buttons">
                        {picker.options.iter().map(|option| {
                            let category = option.category;
                            let open = option.is_open();
                            let checking = picker.pending == Some(category);
                            let class = if open { "category-btn" } else { "category-btn disabled" };

                            let detail = match option.availability {
                                Availability::Closed { window } => Some((window.label(), true)),
                                Availability::Open if !is_leader => Some((category.admission_window().label(), false)),
                                Availability::Open => None,
                            };

                            view! {
                                <button
                                    type="button"
                                    class=class
                                    disabled=!open || waiting
                                    on:click=move |_| ctx.dispatch(WorkflowEvent::CategoryPicked(category))
                                >
                                    <span class="material-symbols-outlined" aria-hidden="true">{category.icon()}</span>
                                    <span class="category-name">
                                        {if checking { "Checking...".to_string() } else { category.to_string() }}
                                    </span>
                                    {detail.map(|(range, closed)| view! {
                                        <small class="category-window">{range}</small>
                                        {closed.then(|| view! {
                                            <small class="category-closed">"⏰ " {WINDOW_CLOSED_REASON}</small>
                                        })}
                                    })}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    {if is_leader {
                        view! {
                            <div class="category-footnote leader">
                                "Scout Leaders can attend anytime without time restrictions"
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="category-footnote">
                                "You can only attend during the category's time window"
                            </div>
                        }.into_any()
                    }}
                </div>
            }
        })
    }
}
