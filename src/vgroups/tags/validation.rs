//! Tag name validation.
//!
//! Valid tags:
//! - Non-empty
//! - ASCII letters, digits, underscores (`_`) and hyphens (`-`) only
//! - At most [`MAX_TAG_LENGTH`] characters
//!
//! Unlike many tag systems there is no rule about the first or last character:
//! `7up`, `-draft` and `wip_` are all legal. Names are case-sensitive.
//!
//! The tag store never calls into this module. Validation is a separate, earlier
//! step owned by whoever accepts tag names from a user.

/// Longest tag name accepted by [`validate_tag_name`].
pub const MAX_TAG_LENGTH: usize = 64;

/// Validates a tag name.
///
/// # Examples
/// ```
/// use vgroups::tags::validation::validate_tag_name;
///
/// assert!(validate_tag_name("candle").is_ok());
/// assert!(validate_tag_name("hero-large").is_ok());
/// assert!(validate_tag_name("main_character").is_ok());
/// assert!(validate_tag_name("7up").is_ok());
///
/// assert!(validate_tag_name("").is_err());
/// assert!(validate_tag_name("my tag").is_err());
/// assert!(validate_tag_name("tag@home").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> Result<(), TagValidationError> {
    if name.is_empty() {
        return Err(TagValidationError::Empty);
    }

    if let Some(ch) = name.chars().find(|&ch| !is_tag_char(ch)) {
        return Err(TagValidationError::InvalidCharacter(ch));
    }

    // All chars are ASCII at this point, so bytes == chars.
    if name.len() > MAX_TAG_LENGTH {
        return Err(TagValidationError::TooLong(name.len()));
    }

    Ok(())
}

/// Checks if a character may appear in a tag name.
///
/// Shared with the query grammar, where `tag:<name>` uses the same alphabet.
pub fn is_tag_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Error type for tag name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag name is empty
    Empty,
    /// Tag name contains a character outside `[A-Za-z0-9_-]`
    InvalidCharacter(char),
    /// Tag name is longer than [`MAX_TAG_LENGTH`]; carries the actual length
    TooLong(usize),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "Tag name cannot be empty"),
            TagValidationError::InvalidCharacter(ch) => write!(
                f,
                "Tag name contains invalid character '{}' \
                 (only letters, numbers, underscores, and hyphens allowed)",
                ch
            ),
            TagValidationError::TooLong(len) => write!(
                f,
                "Tag name is {} characters long (maximum is {})",
                len, MAX_TAG_LENGTH
            ),
        }
    }
}

impl std::error::Error for TagValidationError {}
