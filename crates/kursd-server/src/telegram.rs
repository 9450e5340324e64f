//! Lead delivery to a Telegram chat.

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use crate::validation::{ContactForm, project_type_label};

pub(crate) const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Delivers contact leads to a Telegram chat via the Bot API.
///
/// The notifier is deliberately non-fatal: missing credentials and HTTP
/// failures are logged and reported as `false` from [`Self::send_lead`].
#[derive(Debug)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    token: Option<String>,
    chat_id: Option<String>,
    api_base: String,
}

impl TelegramNotifier {
    /// Creates a notifier. Either credential may be absent.
    #[must_use]
    pub fn new(token: Option<String>, chat_id: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            chat_id,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Overrides the Bot API base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Whether both the bot token and the chat id are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.token.is_some() && self.chat_id.is_some()
    }

    /// Sends a lead as an HTML-formatted message to the configured chat.
    ///
    /// Returns whether delivery succeeded.
    pub async fn send_lead(&self, form: &ContactForm) -> bool {
        let (Some(token), Some(chat_id)) = (self.token.as_deref(), self.chat_id.as_deref())
        else {
            warn!("telegram credentials missing, lead not delivered");
            return false;
        };

        let url = format!("{}/bot{token}/sendMessage", self.api_base);
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": format_lead(form, Utc::now()),
            "parse_mode": "HTML",
        });

        match self.client.post(&url).json(&body).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("lead delivered to telegram");
                true
            }
            Ok(response) => {
                error!(status = %response.status(), "telegram api rejected the lead");
                false
            }
            Err(error) => {
                error!(%error, "telegram request failed");
                false
            }
        }
    }
}

/// Renders a lead as the message text sent to the chat.
///
/// Empty optional fields are omitted. The project type key is replaced by
/// its label when known.
fn format_lead(form: &ContactForm, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        "🔔 <b>Новая заявка с сайта!</b>".to_string(),
        String::new(),
        format!("👤 <b>Имя:</b> {}", form.name),
        format!("📧 <b>Email:</b> {}", form.email),
    ];

    if let Some(phone) = form.phone.as_deref().filter(|value| !value.is_empty()) {
        lines.push(format!("📱 <b>Телефон:</b> {phone}"));
    }
    if let Some(key) = form.project_type.as_deref() {
        let label = project_type_label(key).unwrap_or(key);
        lines.push(format!("📋 <b>Тип проекта:</b> {label}"));
    }
    if let Some(budget) = form.budget.as_deref().filter(|value| !value.is_empty()) {
        lines.push(format!("💰 <b>Бюджет:</b> {budget}"));
    }

    lines.push(String::new());
    lines.push("💬 <b>Сообщение:</b>".to_string());
    lines.push(form.message.clone());
    lines.push(String::new());
    lines.push(format!("⏰ <b>Время:</b> {}", now.format("%d.%m.%Y, %H:%M:%S")));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn lead_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    fn minimal_form() -> ContactForm {
        ContactForm {
            name: "Иван Петров".to_string(),
            email: "ivan@example.com".to_string(),
            phone: None,
            project_type: None,
            budget: None,
            message: "Нужен бот для записи клиентов".to_string(),
        }
    }

    #[test]
    fn test_format_lead_minimal() {
        let text = format_lead(&minimal_form(), lead_time());
        let expected = "🔔 <b>Новая заявка с сайта!</b>\n\
                        \n\
                        👤 <b>Имя:</b> Иван Петров\n\
                        📧 <b>Email:</b> ivan@example.com\n\
                        \n\
                        💬 <b>Сообщение:</b>\n\
                        Нужен бот для записи клиентов\n\
                        \n\
                        ⏰ <b>Время:</b> 15.01.2024, 09:30:00";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_lead_with_optionals() {
        let mut form = minimal_form();
        form.phone = Some("+74951234567".to_string());
        form.project_type = Some("bot".to_string());
        form.budget = Some("50-100k".to_string());

        let text = format_lead(&form, lead_time());
        assert!(text.contains("📱 <b>Телефон:</b> +74951234567"));
        assert!(text.contains("📋 <b>Тип проекта:</b> Telegram-бот"));
        assert!(text.contains("💰 <b>Бюджет:</b> 50-100k"));
    }

    #[test]
    fn test_format_lead_skips_empty_optionals() {
        let mut form = minimal_form();
        form.phone = Some(String::new());
        form.budget = Some(String::new());

        let text = format_lead(&form, lead_time());
        assert!(!text.contains("Телефон"));
        assert!(!text.contains("Бюджет"));
    }

    #[test]
    fn test_unknown_project_type_falls_back_to_key() {
        let mut form = minimal_form();
        form.project_type = Some("game".to_string());

        let text = format_lead(&form, lead_time());
        assert!(text.contains("📋 <b>Тип проекта:</b> game"));
    }

    #[test]
    fn test_is_configured() {
        let notifier = TelegramNotifier::new(Some("123:abc".to_string()), Some("42".to_string()));
        assert!(notifier.is_configured());

        let notifier = TelegramNotifier::new(Some("123:abc".to_string()), None);
        assert!(!notifier.is_configured());

        let notifier = TelegramNotifier::new(None, None);
        assert!(!notifier.is_configured());
    }
}
