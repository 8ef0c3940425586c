use serde::{Deserialize, Serialize};

/// Category assigned to a todo when the client does not send one.
pub const DEFAULT_TODO_CATEGORY: &str = "today";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TodoCreate {
    pub title: String,
    pub description: Option<String>,
    /// `None` (missing or `null`) => [`DEFAULT_TODO_CATEGORY`]
    pub category: Option<String>,
}

impl TodoCreate {
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_TODO_CATEGORY)
    }
}

/// Body of `PUT /todos/{id}`. Only `completed` is applied.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TodoUpdate {
    /// `None` => do not change; `Some(v)` => update
    pub completed: Option<bool>,
}

/// Query of `PATCH /todos/{id}/complete`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TodoCompleteQuery {
    /// `None` => toggle the current value
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_create_without_optional_fields_uses_defaults() {
        let parsed: TodoCreate =
            serde_json::from_str(r#"{"title":"read chapter 4"}"#).expect("parse sample");

        assert_eq!(parsed.title, "read chapter 4");
        assert_eq!(parsed.description, None);
        assert_eq!(parsed.category_or_default(), "today");
    }

    #[test]
    fn todo_create_null_category_falls_back_to_default() {
        let parsed: TodoCreate =
            serde_json::from_str(r#"{"title":"t","category":null}"#).expect("parse sample");
        assert_eq!(parsed.category_or_default(), DEFAULT_TODO_CATEGORY);

        let parsed: TodoCreate =
            serde_json::from_str(r#"{"title":"t","category":"week"}"#).expect("parse sample");
        assert_eq!(parsed.category_or_default(), "week");
    }

    #[test]
    fn todo_create_requires_title() {
        let err = serde_json::from_str::<TodoCreate>(r#"{"description":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn todo_update_accepts_empty_object() {
        let parsed: TodoUpdate = serde_json::from_str("{}").expect("parse sample");
        assert_eq!(parsed.completed, None);
    }
}
