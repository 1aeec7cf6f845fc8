//! Member Commands
//!
//! Member lookup by code.

use attendance_core::{BackendError, Member, MemberCode, MemberRecord};

use super::{decode_error, ensure_success, network_error, HttpBackend};

/// `GET /members/member/{code}`; 404 maps to `NotFound`
pub async fn fetch_member(backend: &HttpBackend, code: &MemberCode) -> Result<Member, BackendError> {
    let url = backend.url(&["members", "member", code.as_str()]);
    log::debug!("GET {}", url);

    let response = backend.client.get(&url).send().await.map_err(network_error)?;
    let record: MemberRecord = ensure_success(response, true).await?.json().await.map_err(decode_error)?;
    Ok(record.into_member(code))
}
