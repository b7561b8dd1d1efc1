use crate::config::types::{Config, FilterConfig, OutputConfig, SourceConfig};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_source_config(&config.source)?;
    validate_filter_config(&config.filter)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates download source configuration
fn validate_source_config(config: &SourceConfig) -> ConfigResult<()> {
    validate_base_url(&config.base_url)?;

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.books.is_empty() {
        return Err(ConfigError::Validation(
            "books must list at least one book id".to_string(),
        ));
    }

    Ok(())
}

/// Validates the base URL the document URLs are built on
fn validate_base_url(base_url: &str) -> ConfigResult<()> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", base_url, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' must use http or https",
            base_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url '{}' has no host",
            base_url
        )));
    }

    Ok(())
}

/// Validates token filter configuration
fn validate_filter_config(config: &FilterConfig) -> ConfigResult<()> {
    if config.min_word_length < 1 {
        return Err(ConfigError::Validation(format!(
            "min_word_length must be >= 1, got {}",
            config.min_word_length
        )));
    }

    if let Some(word) = config
        .extra_stop_words
        .iter()
        .chain(&config.extra_names)
        .find(|w| w.trim().is_empty())
    {
        return Err(ConfigError::Validation(format!(
            "extra word list entries cannot be blank, got '{}'",
            word
        )));
    }

    if config.dictionaries.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::Validation(
            "dictionary paths cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.full_path.is_empty() {
        return Err(ConfigError::Validation(
            "full_path cannot be empty".to_string(),
        ));
    }

    if config.top_path.is_empty() {
        return Err(ConfigError::Validation(
            "top_path cannot be empty".to_string(),
        ));
    }

    if config.full_path == config.top_path {
        return Err(ConfigError::Validation(format!(
            "full_path and top_path must differ, both are '{}'",
            config.full_path
        )));
    }

    if config.top_n < 1 {
        return Err(ConfigError::Validation(format!(
            "top_n must be >= 1, got {}",
            config.top_n
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("https://www.gutenberg.org").is_ok());
        assert!(validate_base_url("http://127.0.0.1:8080").is_ok());

        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("ftp://www.gutenberg.org").is_err());
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_book_list_rejected() {
        let mut config = Config::default();
        config.source.books.clear();
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_blank_extra_word_rejected() {
        let mut config = Config::default();
        config.filter.extra_names = vec!["  ".to_string()];
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_same_output_paths_rejected() {
        let mut config = Config::default();
        config.output.top_path = config.output.full_path.clone();
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let mut config = Config::default();
        config.output.top_n = 0;
        assert!(validate(&config).is_err());
    }
}
