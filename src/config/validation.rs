use crate::config::types::CrawlConfig;
use crate::ConfigError;
use scraper::Selector;

/// Validates the entire configuration
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_limits(config)?;
    validate_selectors(config)?;
    validate_extensions(config)?;
    validate_output(config)?;
    Ok(())
}

/// Validates the numeric crawl limits
fn validate_limits(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.max_concurrent < 1 || config.max_concurrent > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent must be between 1 and 100, got {}",
            config.max_concurrent
        )));
    }

    if config.timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout must be >= 1 second, got {}",
            config.timeout
        )));
    }

    Ok(())
}

/// Validates that every excluded tag and cleanup selector parses
///
/// Catching a bad selector here keeps the extractor total: it can assume
/// every configured selector is parseable.
fn validate_selectors(config: &CrawlConfig) -> Result<(), ConfigError> {
    for tag in &config.excluded_tags {
        Selector::parse(tag).map_err(|e| {
            ConfigError::Validation(format!("invalid excluded tag '{}': {:?}", tag, e))
        })?;
    }

    for selector in &config.clean_selectors {
        Selector::parse(selector).map_err(|e| {
            ConfigError::Validation(format!("invalid clean selector '{}': {:?}", selector, e))
        })?;
    }

    Ok(())
}

/// Validates the allowed extension list
fn validate_extensions(config: &CrawlConfig) -> Result<(), ConfigError> {
    for ext in &config.allowed_extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "allowed extension '{}' must start with a dot, e.g. '.html'",
                ext
            )));
        }
    }

    Ok(())
}

/// Validates the output destination
fn validate_output(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.output_file.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output_file cannot be empty".to_string(),
        ));
    }

    Ok(())
}
