use crate::utils::error::{ContribError, Result};
use url::Url;

/// `dayCount` 未提供時的預設天數
pub const DEFAULT_DAY_COUNT: f64 = 30.0;
pub const MAX_DAY_COUNT: f64 = 365.0;

pub const NAME_NOT_PROVIDED: &str = "name not provided";
pub const DAY_COUNT_NOT_CORRECT: &str = "dayCount not correct";
pub const DAY_COUNT_OUT_OF_RANGE: &str = "dayCount out of range";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ContribError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ContribError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ContribError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContribError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ContribError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 檢查查詢參數 `name`：必須存在且非空字串
pub fn validate_name(name: Option<&str>) -> Result<String> {
    match name {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ContribError::ValidationError {
            field: "name".to_string(),
            message: NAME_NOT_PROVIDED.to_string(),
        }),
    }
}

/// 解析查詢參數 `dayCount`
///
/// 省略時使用 [`DEFAULT_DAY_COUNT`]；允許小數，前後空白會被忽略，
/// 但空字串、`NaN`、`inf` 一律視為格式錯誤。
pub fn parse_day_count(raw: Option<&str>) -> Result<f64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_DAY_COUNT);
    };

    let day_count = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ContribError::ValidationError {
            field: "dayCount".to_string(),
            message: DAY_COUNT_NOT_CORRECT.to_string(),
        })?;

    validate_range("dayCount", day_count, 0.0, MAX_DAY_COUNT).map_err(|_| {
        ContribError::ValidationError {
            field: "dayCount".to_string(),
            message: DAY_COUNT_OUT_OF_RANGE.to_string(),
        }
    })?;

    Ok(day_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(err: ContribError) -> String {
        match err {
            ContribError::ValidationError { message, .. } => message,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source.base_url", "https://github.com/users").is_ok());
        assert!(validate_url("source.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("source.base_url", "").is_err());
        assert!(validate_url("source.base_url", "invalid-url").is_err());
        assert!(validate_url("source.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.port", 3000u16, 1, u16::MAX).is_ok());
        assert!(validate_range("server.port", 0u16, 1, u16::MAX).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name(Some("octocat")).unwrap(), "octocat");
        assert_eq!(
            validation_message(validate_name(Some("")).unwrap_err()),
            NAME_NOT_PROVIDED
        );
        assert_eq!(
            validation_message(validate_name(None).unwrap_err()),
            NAME_NOT_PROVIDED
        );
    }

    #[test]
    fn test_day_count_defaults_to_thirty() {
        assert_eq!(parse_day_count(None).unwrap(), 30.0);
    }

    #[test]
    fn test_day_count_accepts_bounds_and_whitespace() {
        assert_eq!(parse_day_count(Some("0")).unwrap(), 0.0);
        assert_eq!(parse_day_count(Some("365")).unwrap(), 365.0);
        assert_eq!(parse_day_count(Some(" 7 ")).unwrap(), 7.0);
        assert_eq!(parse_day_count(Some("1.5")).unwrap(), 1.5);
    }

    #[test]
    fn test_day_count_rejects_malformed_values() {
        for raw in ["", "   ", "abc", "NaN", "inf", "-inf", "12days"] {
            assert_eq!(
                validation_message(parse_day_count(Some(raw)).unwrap_err()),
                DAY_COUNT_NOT_CORRECT,
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_day_count_rejects_out_of_range() {
        for raw in ["400", "-1", "365.5"] {
            assert_eq!(
                validation_message(parse_day_count(Some(raw)).unwrap_err()),
                DAY_COUNT_OUT_OF_RANGE,
                "input {raw:?}"
            );
        }
    }
}
