use anyhow::{anyhow, Result};

/// Upload size limit for question documents.
pub const MAX_DOCUMENT_BYTES: u32 = 5 * 1024 * 1024;

/// Question documents must be plain text files.
pub fn validate_document_name(file_name: &str) -> Result<()> {
    let file_name = file_name.trim();

    if file_name.is_empty() {
        return Err(anyhow!("File name cannot be empty"));
    }

    let extension = file_name.rsplit('.').next().unwrap_or_default();
    if file_name.contains('.') && extension.eq_ignore_ascii_case("txt") {
        Ok(())
    } else {
        Err(anyhow!("Please upload a text (.txt) file"))
    }
}

pub fn validate_document_size(size: u32) -> Result<()> {
    if size > MAX_DOCUMENT_BYTES {
        return Err(anyhow!("File size exceeds 5MB limit"));
    }
    Ok(())
}

/// Quiz-link ids are exactly 8 lowercase base-36 characters.
pub fn validate_quiz_id(quiz_id: &str) -> Result<()> {
    let quiz_id = quiz_id.trim();

    if quiz_id.len() != 8 {
        return Err(anyhow!("Quiz id must be exactly 8 characters long"));
    }

    if !quiz_id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(anyhow!(
            "Quiz id can only contain lowercase letters and digits"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_document_name_valid() {
        assert!(validate_document_name("questions.txt").is_ok());
        assert!(validate_document_name("Trivia.TXT").is_ok());
        assert!(validate_document_name("  spaced.txt  ").is_ok());
    }

    #[test]
    fn test_validate_document_name_invalid() {
        assert!(validate_document_name("").is_err());
        assert!(validate_document_name("   ").is_err());
        assert!(validate_document_name("questions.pdf").is_err());
        assert!(validate_document_name("questions").is_err());
        assert!(validate_document_name("archive.txt.zip").is_err());
    }

    #[test]
    fn test_validate_document_size() {
        assert!(validate_document_size(0).is_ok());
        assert!(validate_document_size(MAX_DOCUMENT_BYTES).is_ok());
        assert!(validate_document_size(MAX_DOCUMENT_BYTES + 1).is_err());
    }

    #[test]
    fn test_validate_quiz_id_valid() {
        assert!(validate_quiz_id("ab12cd34").is_ok());
        assert!(validate_quiz_id("00000000").is_ok());
        assert!(validate_quiz_id("zzzzzzzz").is_ok());
    }

    #[test]
    fn test_validate_quiz_id_invalid() {
        assert!(validate_quiz_id("").is_err());
        assert!(validate_quiz_id("short").is_err());
        assert!(validate_quiz_id("toolongtoolong").is_err());
        assert!(validate_quiz_id("AB12CD34").is_err());
        assert!(validate_quiz_id("ab12cd3!").is_err());
    }
}
