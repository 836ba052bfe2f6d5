// src/domain/article/validator.rs
//
// Pure per-field validation rules for article input, same contract as the
// user validator: `None` means acceptable.

pub const MIN_TITLE_LENGTH: usize = 10;
pub const MAX_TITLE_LENGTH: usize = 255;
pub const MIN_CONTENT_LENGTH: usize = 50;

pub fn validate_title(title: &str) -> Option<String> {
    let length = title.chars().count();
    if (MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&length) {
        None
    } else {
        Some(format!(
            "Title must be between {MIN_TITLE_LENGTH} and {MAX_TITLE_LENGTH} characters long"
        ))
    }
}

pub fn validate_content(content: &str) -> Option<String> {
    if content.chars().count() >= MIN_CONTENT_LENGTH {
        None
    } else {
        Some(format!(
            "Content must be at least {MIN_CONTENT_LENGTH} characters long"
        ))
    }
}
