use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing external is mandatory at startup: without `ANTHROPIC_API_KEY`
/// enrichment is skipped, and without the mail settings submissions fail at
/// the delivery step only.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub mail: Option<MailConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    pub server_token: String,
    pub from: String,
    pub recipients: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mail = mail_config(
            optional_env("POSTMARK_SERVER_TOKEN"),
            optional_env("MAIL_FROM"),
            optional_env("HR_RECIPIENTS"),
        );

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            mail,
        })
    }
}

/// Mail is enabled only when token, sender and at least one recipient are all set.
fn mail_config(
    server_token: Option<String>,
    from: Option<String>,
    recipients: Option<String>,
) -> Option<MailConfig> {
    let recipients = parse_recipients(&recipients?);
    if recipients.is_empty() {
        return None;
    }
    Some(MailConfig {
        server_token: server_token?,
        from: from?,
        recipients,
    })
}

/// Reads a variable, treating unset and blank the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a comma-separated address list, dropping blanks.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipients_trims_and_drops_blanks() {
        assert_eq!(
            parse_recipients(" hr@example.com, ,lead@example.com ,"),
            vec!["hr@example.com", "lead@example.com"]
        );
    }

    #[test]
    fn test_parse_recipients_empty() {
        assert!(parse_recipients(" , ").is_empty());
    }

    fn some(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_mail_config_all_present() {
        let mail = mail_config(some("tok"), some("noreply@example.com"), some("a@x.com, b@x.com"));
        assert_eq!(
            mail,
            Some(MailConfig {
                server_token: "tok".to_string(),
                from: "noreply@example.com".to_string(),
                recipients: vec!["a@x.com".to_string(), "b@x.com".to_string()],
            })
        );
    }

    #[test]
    fn test_mail_config_missing_any_setting_disables_mail() {
        assert_eq!(mail_config(None, some("noreply@example.com"), some("a@x.com")), None);
        assert_eq!(mail_config(some("tok"), None, some("a@x.com")), None);
        assert_eq!(mail_config(some("tok"), some("noreply@example.com"), None), None);
    }

    #[test]
    fn test_mail_config_blank_recipients_disables_mail() {
        assert_eq!(mail_config(some("tok"), some("noreply@example.com"), some(" , ,")), None);
    }
}
