// file: src/models/comment.rs
// description: comment record as served by the comments endpoint
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// One table row. The endpoint never sends `phone`; it is filled with an
/// empty string on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
    #[serde(default)]
    pub phone: String,
}

impl Comment {
    pub fn new(
        id: u64,
        post_id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            post_id,
            name: name.into(),
            email: email.into(),
            body: body.into(),
            phone: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_phone() {
        let json = r#"{"postId":1,"id":2,"name":"id labore","email":"Eliseo@gardner.biz","body":"laudantium"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();

        assert_eq!(comment.id, 2);
        assert_eq!(comment.post_id, 1);
        assert_eq!(comment.email, "Eliseo@gardner.biz");
        assert!(comment.phone.is_empty());
    }

    #[test]
    fn test_with_phone() {
        let comment = Comment::new(1, 1, "a", "a@b.c", "body").with_phone("555-0100");
        assert_eq!(comment.phone, "555-0100");
    }
}
