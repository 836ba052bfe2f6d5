// src/domain/user/validator.rs
//
// Pure per-field validation rules for user input. Each function returns the
// failure message for its field, or `None` when the value is acceptable, so
// command factories can collect every failing field into one report.

use crate::domain::user::value_objects::Role;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub fn validate_email(email: &str) -> Option<String> {
    if is_valid_email(email) {
        None
    } else {
        Some("Invalid email format".into())
    }
}

pub fn validate_name(name: &str) -> Option<String> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        Some(format!(
            "Name must be at least {MIN_NAME_LENGTH} characters long"
        ))
    } else {
        None
    }
}

pub fn validate_role(role: &str) -> Option<String> {
    if Role::ALL.iter().any(|candidate| candidate.as_str() == role) {
        None
    } else {
        let valid = Role::ALL.map(|role| role.as_str()).join(", ");
        Some(format!("Invalid role value. Must be one of: {valid}"))
    }
}

pub fn validate_password(password: &str) -> Option<String> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if long_enough && has_uppercase && has_lowercase && has_digit && has_special {
        None
    } else {
        Some(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long and contain at least \
             one lowercase and uppercase letter, one number and one special character"
        ))
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for email in ["a@x.com", "first.last@example.org", "u+tag@sub.domain.io"] {
            assert!(validate_email(email).is_none(), "rejected {email}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["", "plain", "@x.com", "a@", "a@nodot", "a b@x.com", "a@@x.com", "a@.com"] {
            assert!(validate_email(email).is_some(), "accepted {email}");
        }
    }

    #[test]
    fn name_requires_two_characters_after_trim() {
        assert!(validate_name("  a  ").is_some());
        assert!(validate_name("ab").is_none());
    }

    #[test]
    fn role_must_be_in_enumerated_set() {
        assert!(validate_role("reader").is_none());
        assert!(validate_role("author").is_none());
        assert!(validate_role("admin").is_none());
        assert!(validate_role("superuser").is_some());
    }

    #[test]
    fn valid_password_is_accepted() {
        assert!(validate_password("Abcdefg1!").is_none());
    }

    // Flipping any single requirement on an otherwise-valid password rejects it.
    #[test]
    fn each_missing_requirement_rejects() {
        assert!(validate_password("Abcde1!").is_some(), "too short");
        assert!(validate_password("abcdefg1!").is_some(), "no uppercase");
        assert!(validate_password("ABCDEFG1!").is_some(), "no lowercase");
        assert!(validate_password("Abcdefgh!").is_some(), "no digit");
        assert!(validate_password("Abcdefg12").is_some(), "no special");
    }

    #[test]
    fn special_character_must_come_from_fixed_set() {
        assert!(validate_password("Abcdefg1_").is_some());
        assert!(validate_password("Abcdefg1#").is_none());
    }
}
