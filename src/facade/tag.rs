//! Tag validation.

use crate::error::InvalidArgument;

/// Longest tag accepted, in characters.
pub const MAX_TAG_LEN: usize = 23;

/// Checks that `tag` is non-empty and at most [`MAX_TAG_LEN`] characters.
pub fn validate_tag(tag: &str) -> Result<(), InvalidArgument> {
    if tag.is_empty() {
        return Err(InvalidArgument::EmptyTag);
    }
    let len = tag.chars().count();
    if len > MAX_TAG_LEN {
        return Err(InvalidArgument::TagTooLong {
            tag: tag.to_string(),
            len,
            max: MAX_TAG_LEN,
        });
    }
    Ok(())
}
