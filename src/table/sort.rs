// file: src/table/sort.rs
// description: column sorting with a tri-state toggle per column

use crate::error::DashboardError;
use crate::models::Comment;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Id,
    PostId,
    Name,
    Email,
    Body,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sorting applies only when both a column and a direction are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub column: Option<SortColumn>,
    pub direction: Option<SortDirection>,
}

enum SortValue<'a> {
    Number(u64),
    Text(&'a str),
}

impl SortValue<'_> {
    fn as_text(&self) -> String {
        match self {
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(s) => s.to_lowercase(),
        }
    }
}

impl SortColumn {
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Id,
        SortColumn::PostId,
        SortColumn::Name,
        SortColumn::Email,
        SortColumn::Body,
        SortColumn::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::PostId => "postId",
            SortColumn::Name => "name",
            SortColumn::Email => "email",
            SortColumn::Body => "body",
            SortColumn::Phone => "phone",
        }
    }

    fn value<'a>(&self, comment: &'a Comment) -> SortValue<'a> {
        match self {
            SortColumn::Id => SortValue::Number(comment.id),
            SortColumn::PostId => SortValue::Number(comment.post_id),
            SortColumn::Name => SortValue::Text(&comment.name),
            SortColumn::Email => SortValue::Text(&comment.email),
            SortColumn::Body => SortValue::Text(&comment.body),
            SortColumn::Phone => SortValue::Text(&comment.phone),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "");
        SortColumn::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| DashboardError::Validation(format!("Unknown sort column: {}", s)))
    }
}

impl SortDirection {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl SortSpec {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column: Some(column),
            direction: Some(SortDirection::Asc),
        }
    }

    pub fn descending(column: SortColumn) -> Self {
        Self {
            column: Some(column),
            direction: Some(SortDirection::Desc),
        }
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some() && self.direction.is_some()
    }

    /// Direction shown for `column`, if it is the one currently sorted.
    pub fn direction_for(&self, column: SortColumn) -> Option<SortDirection> {
        match self.column {
            Some(current) if current == column => self.direction,
            _ => None,
        }
    }

    /// `unsorted -> asc -> desc -> unsorted` on the same column; selecting
    /// another column starts over at `asc`.
    pub fn toggle(self, column: SortColumn) -> Self {
        if self.column != Some(column) {
            return Self::ascending(column);
        }

        match self.direction {
            Some(SortDirection::Asc) => Self::descending(column),
            Some(SortDirection::Desc) => Self::unsorted(),
            None => Self::ascending(column),
        }
    }

    pub fn compare(&self, a: &Comment, b: &Comment) -> Ordering {
        match (self.column, self.direction) {
            (Some(column), Some(direction)) => direction.apply(compare_values(
                &column.value(a),
                &column.value(b),
            )),
            _ => Ordering::Equal,
        }
    }
}

fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.cmp(y),
        _ => a.as_text().cmp(&b.as_text()),
    }
}

/// Stable sort: records with equal keys keep their incoming order.
pub fn sort_records<'a>(mut records: Vec<&'a Comment>, spec: &SortSpec) -> Vec<&'a Comment> {
    if spec.is_active() {
        records.sort_by(|a, b| spec.compare(a, b));
    }
    records
}
