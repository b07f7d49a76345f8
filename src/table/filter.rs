// file: src/table/filter.rs
// description: case-insensitive substring filtering over comment records

use crate::models::Comment;
use serde::{Deserialize, Serialize};

/// Search terms for the name, email and phone columns. An empty term
/// matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FilterCriteria {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty() && self.phone.trim().is_empty()
    }

    pub fn matches(&self, comment: &Comment) -> bool {
        let terms = self.normalized();
        terms.matches(comment)
    }

    fn normalized(&self) -> NormalizedTerms {
        NormalizedTerms {
            name: normalize(&self.name),
            email: normalize(&self.email),
            phone: normalize(&self.phone),
        }
    }
}

struct NormalizedTerms {
    name: String,
    email: String,
    phone: String,
}

impl NormalizedTerms {
    fn matches(&self, comment: &Comment) -> bool {
        contains(&comment.name, &self.name)
            && contains(&comment.email, &self.email)
            && contains(&comment.phone, &self.phone)
    }
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

fn contains(field: &str, term: &str) -> bool {
    term.is_empty() || field.to_lowercase().contains(term)
}

/// Keeps the records that satisfy every criterion, in their original order.
pub fn filter_records<'a>(records: &'a [Comment], criteria: &FilterCriteria) -> Vec<&'a Comment> {
    if criteria.is_empty() {
        return records.iter().collect();
    }

    let terms = criteria.normalized();
    records.iter().filter(|c| terms.matches(c)).collect()
}
