use crate::Error;

/// Returns the trimmed review text or [`Error::EmptyReview`]
/// if nothing but whitespace was entered.
pub fn review_text(text: &str) -> Result<&str, Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyReview);
    }
    Ok(trimmed)
}
