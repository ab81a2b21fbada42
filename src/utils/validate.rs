use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ClassroomError, Result};

static DISPLAY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\p{Cc}]+$").expect("Invalid display name regex"));

static DUE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid due date regex"));

pub const MAX_DISPLAY_NAME_CHARS: usize = 64;

/// 去除首尾空白，空字符串视为缺失
pub fn required(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClassroomError::validation(message));
    }
    Ok(trimmed.to_string())
}

pub fn validate_display_name(name: &str) -> Result<String> {
    let name = required(name, "Please enter a name")?;
    if name.chars().count() > MAX_DISPLAY_NAME_CHARS {
        return Err(ClassroomError::validation(format!(
            "Name must be at most {MAX_DISPLAY_NAME_CHARS} characters"
        )));
    }
    if !DISPLAY_NAME_RE.is_match(&name) {
        return Err(ClassroomError::validation(
            "Name must not contain control characters",
        ));
    }
    Ok(name)
}

/// 截止日期必须为 YYYY-MM-DD
pub fn validate_due_date(due: &str) -> Result<String> {
    let due = required(due, "Fill all fields")?;
    if !DUE_DATE_RE.is_match(&due) {
        return Err(ClassroomError::validation(
            "Due date must use the YYYY-MM-DD format",
        ));
    }
    NaiveDate::parse_from_str(&due, "%Y-%m-%d")?;
    Ok(due)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  HW1 ", "x").unwrap(), "HW1");
        let err = required("   ", "Enter a message").unwrap_err();
        assert_eq!(err.message(), "Enter a message");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(validate_display_name(" Alice ").unwrap(), "Alice");
        assert_eq!(validate_display_name("李雷").unwrap(), "李雷");
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("bad\u{0007}name").is_err());
        assert!(validate_display_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_due_date() {
        assert_eq!(validate_due_date("2099-01-01").unwrap(), "2099-01-01");
        assert!(validate_due_date("01/01/2099").is_err());
        let err = validate_due_date("2099-02-30").unwrap_err();
        assert_eq!(err.code(), "E008");
        assert!(validate_due_date("").is_err());
    }
}
