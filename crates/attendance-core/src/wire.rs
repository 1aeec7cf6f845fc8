//! Backend Wire Shapes
//!
//! JSON bodies exchanged with the members service and their conversion
//! into domain types.

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::{Category, Member, MemberCode, Role};

// ========================
// Member lookup
// ========================

/// `category` arrives either joined with commas or as a list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    List(Vec<String>),
    Joined(String),
}

impl CategoryField {
    fn names(&self) -> Vec<&str> {
        match self {
            CategoryField::List(list) => list.iter().map(|s| s.trim()).collect(),
            CategoryField::Joined(joined) => joined.split(',').map(str::trim).collect(),
        }
    }
}

/// Member body from `GET /members/member/{code}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryField>,
}

impl MemberRecord {
    /// Convert into a domain member.
    ///
    /// `requested` is used when the body carries a malformed code, so the
    /// transaction keeps the code the operator typed.
    pub fn into_member(self, requested: &MemberCode) -> Member {
        let code = MemberCode::parse(&self.code).unwrap_or_else(|| requested.clone());
        let mut categories = Vec::new();
        if let Some(field) = &self.category {
            for name in field.names().into_iter().filter(|n| !n.is_empty()) {
                match Category::parse(name) {
                    Some(category) if !categories.contains(&category) => categories.push(category),
                    Some(_) => {}
                    None => log::warn!("member {}: ignoring unknown category {:?}", code, name),
                }
            }
        }

        Member {
            code,
            full_name: self.full_name,
            role: Role::from_title(self.title.as_deref().unwrap_or_default()),
            categories,
        }
    }
}

// ========================
// Duplicate check
// ========================

/// Body from `GET /members/checkAttendance/{code}/{category}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttendanceCheck {
    Flag(bool),
    HasAttended {
        #[serde(rename = "hasAttended")]
        has_attended: bool,
    },
    Attended { attended: bool },
    Other(serde_json::Value),
}

impl AttendanceCheck {
    /// Unknown shapes read as "not attended"
    pub fn attended(&self) -> bool {
        match self {
            AttendanceCheck::Flag(flag) => *flag,
            AttendanceCheck::HasAttended { has_attended } => *has_attended,
            AttendanceCheck::Attended { attended } => *attended,
            AttendanceCheck::Other(_) => false,
        }
    }
}

// ========================
// Submission
// ========================

/// Body for `POST /members/attend`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRequest {
    pub code: MemberCode,
    pub category: Category,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
}

/// Whole amounts go out as integers (`0`, not `0.0`)
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && amount.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}
