use std::env;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// SMTP settings for forwarding contact messages.
#[derive(Debug, Clone, Default)]
pub struct MailConfig {
    pub user: Option<String>,
    pub password: Option<String>,
    pub smtp_host: String,
    pub recipient: Option<String>,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            user: non_empty_var("EMAIL_USER"),
            password: non_empty_var("EMAIL_PASS"),
            smtp_host: non_empty_var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            recipient: non_empty_var("CONTACT_RECIPIENT"),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.user.is_some() && self.password.is_some()
    }

    /// Where submissions end up. Falls back to the sending account.
    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref().or(self.user.as_deref())
    }
}
