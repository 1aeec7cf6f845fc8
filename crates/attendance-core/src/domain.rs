//! Domain Types
//!
//! Member codes, categories and roles as closed types. Loose string shapes
//! only exist at the backend boundary (see `wire`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::admission::AdmissionWindow;

/// Title that grants the privileged role (compared case-insensitively)
const LEADER_TITLE: &str = "scout leader";

// ========================
// Member Code
// ========================

/// A validated member code: exactly six ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberCode(String);

impl MemberCode {
    /// Parse a candidate code, ignoring surrounding whitespace
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.len() == 6 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MemberCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid member code: {:?}", value))
    }
}

impl From<MemberCode> for String {
    fn from(code: MemberCode) -> Self {
        code.0
    }
}

/// Drop everything that is not a digit from raw keyboard input
pub fn sanitize_code_input(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

// ========================
// Category
// ========================

/// Attendance category. The set is fixed; each has its own daily window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Scouts and Guides")]
    ScoutsAndGuides,
    #[serde(rename = "Cubs and Blossoms")]
    CubsAndBlossoms,
    #[serde(rename = "Buds")]
    Buds,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::ScoutsAndGuides,
        Category::CubsAndBlossoms,
        Category::Buds,
    ];

    /// Name used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ScoutsAndGuides => "Scouts and Guides",
            Category::CubsAndBlossoms => "Cubs and Blossoms",
            Category::Buds => "Buds",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Daily window during which regular members may be admitted
    pub fn admission_window(&self) -> AdmissionWindow {
        match self {
            Category::ScoutsAndGuides | Category::CubsAndBlossoms => AdmissionWindow::from_hm((11, 55), (12, 30)),
            Category::Buds => AdmissionWindow::from_hm((11, 0), (11, 50)),
        }
    }

    /// Material symbol shown next to the category
    pub fn icon(&self) -> &'static str {
        match self {
            Category::ScoutsAndGuides => "hiking",
            Category::CubsAndBlossoms => "sports_kabaddi",
            Category::Buds => "child_care",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========================
// Role & Member
// ========================

/// Member role. Leaders are exempt from admission windows and fines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    ScoutLeader,
    #[default]
    Member,
}

impl Role {
    pub fn from_title(title: &str) -> Self {
        if title.to_lowercase() == LEADER_TITLE {
            Role::ScoutLeader
        } else {
            Role::Member
        }
    }

    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::ScoutLeader)
    }
}

/// Read-only copy of a member, held for one attendance transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub code: MemberCode,
    pub full_name: String,
    pub role: Role,
    /// Ordered, no duplicates
    pub categories: Vec<Category>,
}

impl Member {
    pub fn belongs_to(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}
