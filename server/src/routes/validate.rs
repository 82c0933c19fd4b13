//! Field validation for request bodies.
//!
//! The closed enumerations and required fields are enforced here, before
//! anything reaches the store. Every failure is an [`ApiError::Validation`]
//! carrying the message the client shows.

use api::models::{TodoPriority, TodoStatus};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::ApiError;

/// Required, trimmed, non-empty title. `what` names the entity for the
/// message ("Board title is required").
pub fn required_title(raw: Option<&str>, what: &str) -> Result<String, ApiError> {
    let title = raw.unwrap_or("").trim();
    if title.is_empty() {
        return Err(ApiError::Validation(format!("{what} title is required")));
    }
    Ok(title.to_string())
}

/// Optional free text, trimmed, defaulting to empty.
pub fn optional_text(raw: Option<&str>) -> String {
    raw.unwrap_or("").trim().to_string()
}

/// Board color tag, defaulting to the indigo the client palette starts with.
pub fn color_tag(raw: Option<&str>) -> String {
    let tag = raw.unwrap_or("").trim();
    if tag.is_empty() {
        "#6366f1".to_string()
    } else {
        tag.to_string()
    }
}

/// Status from the closed set, defaulting to `todo` when absent.
pub fn status(raw: Option<&str>) -> Result<TodoStatus, ApiError> {
    match raw {
        None => Ok(TodoStatus::default()),
        Some(s) => TodoStatus::parse(s).ok_or_else(|| ApiError::validation("Invalid status")),
    }
}

/// Status for the narrow `PATCH .../status` route — no default, the field
/// is the whole point of the request.
pub fn required_status(raw: Option<&str>) -> Result<TodoStatus, ApiError> {
    TodoStatus::parse(raw.unwrap_or(""))
        .ok_or_else(|| ApiError::validation("Invalid status"))
}

/// Priority from the closed set, defaulting to `medium` when absent.
pub fn priority(raw: Option<&str>) -> Result<TodoPriority, ApiError> {
    match raw {
        None => Ok(TodoPriority::default()),
        Some(p) => TodoPriority::parse(p).ok_or_else(|| ApiError::validation("Invalid priority")),
    }
}

/// Optional `YYYY-MM-DD` due date; empty string means absent.
pub fn due_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|_| ApiError::validation("Invalid due date, expected YYYY-MM-DD")),
    }
}

/// Required board reference on todo creation.
pub fn board_id(raw: Option<&str>) -> Result<Uuid, ApiError> {
    let raw = raw.unwrap_or("").trim();
    if raw.is_empty() {
        return Err(ApiError::validation("Board ID is required"));
    }
    raw.parse()
        .map_err(|_| ApiError::validation("Invalid board ID"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed_and_required() {
        assert_eq!(required_title(Some("  Ship it  "), "Todo").unwrap(), "Ship it");
        let err = required_title(Some("   "), "Board").unwrap_err();
        assert_eq!(err.to_string(), "Board title is required");
        assert!(required_title(None, "Board").is_err());
    }

    #[test]
    fn test_status_defaults_and_rejects() {
        assert_eq!(status(None).unwrap(), TodoStatus::Todo);
        assert_eq!(status(Some("in-progress")).unwrap(), TodoStatus::InProgress);
        assert!(status(Some("blocked")).is_err());
        // The narrow variant has no default.
        assert!(required_status(None).is_err());
        assert_eq!(required_status(Some("done")).unwrap(), TodoStatus::Done);
    }

    #[test]
    fn test_priority_defaults_and_rejects() {
        assert_eq!(priority(None).unwrap(), TodoPriority::Medium);
        assert_eq!(priority(Some("high")).unwrap(), TodoPriority::High);
        assert!(priority(Some("urgent")).is_err());
    }

    #[test]
    fn test_due_date_parsing() {
        assert_eq!(due_date(None).unwrap(), None);
        assert_eq!(due_date(Some("")).unwrap(), None);
        assert_eq!(
            due_date(Some("2026-03-14")).unwrap(),
            Some(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
        );
        assert!(due_date(Some("next week")).is_err());
    }

    #[test]
    fn test_board_id_required_and_well_formed() {
        assert!(board_id(None).is_err());
        assert!(board_id(Some("not-a-uuid")).is_err());
        let id = Uuid::new_v4();
        assert_eq!(board_id(Some(&id.to_string())).unwrap(), id);
    }

    #[test]
    fn test_color_tag_default() {
        assert_eq!(color_tag(None), "#6366f1");
        assert_eq!(color_tag(Some(" #10b981 ")), "#10b981");
    }
}
