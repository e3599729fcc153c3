use crate::utils::error::{ReportError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: String) -> ReportError {
    ReportError::ConfigError {
        message: format!("{} = '{}': {}", field, value, reason),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "value cannot be empty or whitespace-only".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "path cannot be empty".to_string()));
    }

    if path.contains('\0') {
        return Err(invalid(
            field_name,
            path,
            "path contains null bytes".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed: &[&str]) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed.contains(&extension) => Ok(()),
        Some(extension) => Err(invalid(
            field_name,
            file,
            format!(
                "unsupported file extension '{}', allowed: {}",
                extension,
                allowed.join(", ")
            ),
        )),
        None => Err(invalid(
            field_name,
            file,
            "file has no extension or invalid filename".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("date_column", "date").is_ok());
        assert!(validate_non_empty_string("date_column", "").is_err());
        assert!(validate_non_empty_string("date_column", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "./report").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("input", "draws.csv", &["csv"]).is_ok());
        assert!(validate_file_extension("input", "draws.txt", &["csv"]).is_err());
        assert!(validate_file_extension("input", "draws", &["csv"]).is_err());
    }
}
