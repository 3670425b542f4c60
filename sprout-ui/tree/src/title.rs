use thiserror::Error;

/// Errors returned while validating a submitted node title.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title cannot be empty.")]
    Empty,
}

/// Trim a submitted title, rejecting one that is blank.
pub(crate) fn normalize_title(raw: &str) -> Result<String, TitleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TitleError::Empty);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_title_trims_surrounding_whitespace() {
        assert_eq!(normalize_title("  Pears \n"), Ok(String::from("Pears")));
    }

    #[test]
    fn normalize_title_rejects_blank_input() {
        assert_eq!(normalize_title(""), Err(TitleError::Empty));
        assert_eq!(normalize_title(" \t "), Err(TitleError::Empty));
    }
}
