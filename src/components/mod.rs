//! UI Components
//!
//! Leptos components for the attendance form.

mod attendance_panel;
mod category_picker;
mod fine_prompt;
mod notice_banner;

pub use attendance_panel::AttendancePanel;
pub use category_picker::CategoryPicker;
pub use fine_prompt::FinePrompt;
pub use notice_banner::NoticeBanner;
