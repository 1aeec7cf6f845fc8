//! Attendance Commands
//!
//! Duplicate check and attendance submission.

use attendance_core::{AttendanceCheck, AttendanceRequest, BackendError, Category, MemberCode};

use super::{decode_error, ensure_success, network_error, HttpBackend};

/// `GET /members/checkAttendance/{code}/{category}`
pub async fn check_attendance(
    backend: &HttpBackend,
    code: &MemberCode,
    category: Category,
) -> Result<AttendanceCheck, BackendError> {
    let url = backend.url(&["members", "checkAttendance", code.as_str(), category.as_str()]);
    log::debug!("GET {}", url);

    let response = backend.client.get(&url).send().await.map_err(network_error)?;
    ensure_success(response, false).await?.json().await.map_err(decode_error)
}

/// `POST /members/attend`
pub async fn submit_attendance(backend: &HttpBackend, request: &AttendanceRequest) -> Result<(), BackendError> {
    let url = backend.url(&["members", "attend"]);
    log::debug!("POST {} for {} ({}, amount {})", url, request.code, request.category, request.amount);

    let response = backend
        .client
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(network_error)?;
    ensure_success(response, false).await?;
    Ok(())
}
