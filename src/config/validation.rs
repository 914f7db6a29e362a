use crate::config::types::{Config, FetcherConfig, OutputConfig, PacingConfig, SearchConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_pacing_config(&config.pacing)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates search configuration
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if config.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "at least one keyword is required".to_string(),
        ));
    }

    for keyword in &config.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keywords cannot be blank".to_string(),
            ));
        }
    }

    if config.location.trim().is_empty() {
        return Err(ConfigError::Validation(
            "location cannot be empty".to_string(),
        ));
    }

    if config.max_jobs_per_keyword < 1 {
        return Err(ConfigError::Validation(format!(
            "max_jobs_per_keyword must be >= 1, got {}",
            config.max_jobs_per_keyword
        )));
    }

    validate_endpoint_url("search-url", &config.search_url)?;
    validate_endpoint_url("detail-url", &config.detail_url)?;
    validate_endpoint_url("view-url", &config.view_url)?;

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    // Header values must survive HeaderValue construction later
    for (name, value) in [
        ("user-agent", &config.user_agent),
        ("accept", &config.accept),
        ("accept-language", &config.accept_language),
    ] {
        if !value.chars().all(|c| (' '..='~').contains(&c)) {
            return Err(ConfigError::Validation(format!(
                "{} must be visible ASCII, got '{}'",
                name, value
            )));
        }
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates pacing configuration
fn validate_pacing_config(config: &PacingConfig) -> Result<(), ConfigError> {
    if config.page_delay_min_ms > config.page_delay_max_ms {
        return Err(ConfigError::Validation(format!(
            "page delay range is inverted: {}ms > {}ms",
            config.page_delay_min_ms, config.page_delay_max_ms
        )));
    }

    if config.detail_delay_min_ms > config.detail_delay_max_ms {
        return Err(ConfigError::Validation(format!(
            "detail delay range is inverted: {}ms > {}ms",
            config.detail_delay_min_ms, config.detail_delay_max_ms
        )));
    }

    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max_attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }

    if config.workers < 1 || config.workers > 100 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 100, got {}",
            config.workers
        )));
    }

    if config.throttle_every < 1 {
        return Err(ConfigError::Validation(format!(
            "throttle_every must be >= 1, got {}",
            config.throttle_every
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.collection_path.is_empty() {
        return Err(ConfigError::Validation(
            "collection_path cannot be empty".to_string(),
        ));
    }

    if config.summary_path.is_empty() {
        return Err(ConfigError::Validation(
            "summary_path cannot be empty".to_string(),
        ));
    }

    if config.summary_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "summary_limit must be >= 1, got {}",
            config.summary_limit
        )));
    }

    Ok(())
}

/// Validates that an endpoint URL parses and uses an HTTP scheme
fn validate_endpoint_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", name, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::Validation(format!(
            "{} must use an http(s) scheme, got '{}'",
            name, value
        )));
    }

    Ok(())
}
