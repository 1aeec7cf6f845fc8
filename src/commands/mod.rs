//! Backend Command Wrappers
//!
//! HTTP bindings to the members service, organized by area.

mod attendance;
mod member;

use async_trait::async_trait;
use attendance_core::{AttendanceBackend, AttendanceCheck, AttendanceRequest, BackendError, Category, Member, MemberCode};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response, StatusCode};

pub use attendance::{check_attendance, submit_attendance};
pub use member::fetch_member;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Members service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Join escaped path segments onto the base URL
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }
}

#[async_trait(?Send)]
impl AttendanceBackend for HttpBackend {
    async fn fetch_member(&self, code: &MemberCode) -> Result<Member, BackendError> {
        fetch_member(self, code).await
    }

    async fn check_attendance(&self, code: &MemberCode, category: Category) -> Result<AttendanceCheck, BackendError> {
        check_attendance(self, code, category).await
    }

    async fn submit_attendance(&self, request: &AttendanceRequest) -> Result<(), BackendError> {
        submit_attendance(self, request).await
    }
}

// ========================
// Response helpers
// ========================

fn network_error(e: reqwest::Error) -> BackendError {
    BackendError::Network(e.to_string())
}

fn decode_error(e: reqwest::Error) -> BackendError {
    BackendError::Decode(e.to_string())
}

/// Error for a non-2xx answer. 404 only means `NotFound` on a lookup.
fn status_error(status: StatusCode, body: String, lookup: bool) -> BackendError {
    if lookup && status == StatusCode::NOT_FOUND {
        return BackendError::NotFound;
    }
    BackendError::Rejected(body)
}

/// Passes 2xx through; anything else becomes a `BackendError`
async fn ensure_success(response: Response, lookup: bool) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::debug!("could not read {} response body: {}", status, e);
            String::new()
        }
    };
    log::debug!("backend answered {}: {}", status, text);
    Err(status_error(status, text, lookup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_escapes_segments() {
        let backend = HttpBackend::new("http://localhost:9090/");
        assert_eq!(
            backend.url(&["members", "checkAttendance", "230615", "Scouts and Guides"]),
            "http://localhost:9090/members/checkAttendance/230615/Scouts%20and%20Guides"
        );
        assert_eq!(backend.url(&["members", "member", "a/b?"]), "http://localhost:9090/members/member/a%2Fb%3F");
    }

    #[test]
    fn test_status_maps_to_backend_error() {
        assert_eq!(status_error(StatusCode::NOT_FOUND, String::new(), true), BackendError::NotFound);
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, "no such route".to_string(), false),
            BackendError::Rejected("no such route".to_string())
        );
        assert_eq!(
            status_error(StatusCode::BAD_REQUEST, "Member already attended today".to_string(), false),
            BackendError::Rejected("Member already attended today".to_string())
        );
        assert_eq!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, String::new(), true),
            BackendError::Rejected(String::new())
        );
    }
}
