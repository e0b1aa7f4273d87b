pub mod domain;
pub mod llm;
pub mod service;

pub mod config {
    use anyhow::Context;

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub openai_api_key: Option<String>,
        pub openai_base_url: Option<String>,
        pub openai_model: Option<String>,
        pub openai_timeout_secs: Option<u64>,
        pub strict_schema: bool,
        pub sentry_dsn: Option<String>,
        pub port: Option<u16>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let openai_timeout_secs = std::env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .map(|raw| parse_var::<u64>("OPENAI_TIMEOUT_SECS", &raw))
                .transpose()?;
            let port = std::env::var("PORT")
                .ok()
                .map(|raw| parse_var::<u16>("PORT", &raw))
                .transpose()?;

            Ok(Self {
                openai_api_key: non_empty_var("OPENAI_API_KEY"),
                openai_base_url: non_empty_var("OPENAI_BASE_URL"),
                openai_model: non_empty_var("OPENAI_MODEL"),
                openai_timeout_secs,
                strict_schema: std::env::var("FINANCIAL_MODEL_STRICT_SCHEMA")
                    .map(|v| is_truthy(&v))
                    .unwrap_or(false),
                sentry_dsn: non_empty_var("SENTRY_DSN"),
                port,
            })
        }

        pub fn require_openai_api_key(&self) -> anyhow::Result<&str> {
            self.openai_api_key
                .as_deref()
                .context("OPENAI_API_KEY is required")
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_var<T>(key: &str, raw: &str) -> anyhow::Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        raw.trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: {raw:?}"))
    }

    fn is_truthy(value: &str) -> bool {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn truthy_values() {
            assert!(is_truthy("1"));
            assert!(is_truthy(" TRUE "));
            assert!(is_truthy("on"));
            assert!(!is_truthy("0"));
            assert!(!is_truthy(""));
            assert!(!is_truthy("nope"));
        }

        #[test]
        fn parse_var_accepts_padded_numbers() {
            assert_eq!(parse_var::<u16>("PORT", " 8080 ").unwrap(), 8080);
            assert_eq!(parse_var::<u64>("OPENAI_TIMEOUT_SECS", "30").unwrap(), 30);
        }

        #[test]
        fn parse_var_names_the_bad_variable() {
            let err = parse_var::<u16>("PORT", "70000").unwrap_err();
            assert_eq!(err.to_string(), "PORT has an invalid value: \"70000\"");

            let err = parse_var::<u64>("OPENAI_TIMEOUT_SECS", "soon").unwrap_err();
            assert!(err.to_string().starts_with("OPENAI_TIMEOUT_SECS has an invalid value"));
            assert!(format!("{err:#}").contains("invalid digit"));
        }

        #[test]
        fn missing_api_key_is_reported() {
            let settings = Settings::default();
            let err = settings.require_openai_api_key().unwrap_err();
            assert!(err.to_string().contains("OPENAI_API_KEY"));
        }
    }
}
