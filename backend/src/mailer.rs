use chrono::{DateTime, Utc};
use chrono_tz::Asia::Tokyo;
use futures::future::BoxFuture;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::SmtpSettings;
use crate::handlers::contact_dtos::Application;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mailbox: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("mail relay failed: {0}")]
    Relay(String),
}

/// Forwards accepted applications to the salon.
pub trait ApplicationMailer: Send + Sync {
    fn send<'a>(
        &'a self,
        application: &'a Application,
        received_at: DateTime<Utc>,
    ) -> BoxFuture<'a, Result<(), MailError>>;
}

pub fn subject(application: &Application) -> String {
    format!("【求人応募】{}様", application.full_name())
}

pub fn compose_body(application: &Application, received_at: DateTime<Utc>) -> String {
    let received = received_at.with_timezone(&Tokyo).format("%Y年%m月%d日 %H:%M");
    let licenses = if application.licenses.is_empty() {
        "なし".to_string()
    } else {
        application.licenses.join("、")
    };
    let message = if application.message.trim().is_empty() {
        "なし"
    } else {
        application.message.as_str()
    };

    format!(
        "求人応募がありました。\n\n\
         受付日時: {} (JST)\n\
         お名前: {}\n\
         年齢: {}歳\n\
         電話番号: {}\n\
         メールアドレス: {}\n\
         美容師歴: {}\n\
         保有資格: {}\n\
         現在のポジション: {}\n\n\
         勤務に対する不安など:\n{}\n",
        received,
        application.full_name(),
        application.age,
        application.phone,
        application.email.as_deref().unwrap_or("未入力"),
        application.experience,
        licenses,
        application.position.as_deref().unwrap_or("未選択"),
        message,
    )
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings, sender: &str, recipient: &str) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| MailError::Relay(e.to_string()))?
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: sender.parse()?,
            to: recipient.parse()?,
        })
    }

    fn message(&self, application: &Application, received_at: DateTime<Utc>) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject(application))
            .header(ContentType::TEXT_PLAIN);

        if let Some(email) = &application.email {
            match email.parse::<Mailbox>() {
                Ok(reply_to) => builder = builder.reply_to(reply_to),
                Err(e) => tracing::warn!("ignoring applicant address {}: {}", email, e),
            }
        }

        Ok(builder.body(compose_body(application, received_at))?)
    }
}

impl ApplicationMailer for SmtpMailer {
    fn send<'a>(
        &'a self,
        application: &'a Application,
        received_at: DateTime<Utc>,
    ) -> BoxFuture<'a, Result<(), MailError>> {
        Box::pin(async move {
            let message = self.message(application, received_at)?;
            self.transport
                .send(message)
                .await
                .map_err(|e| MailError::Relay(e.to_string()))?;
            tracing::info!("forwarded application from {}", application.full_name());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> Application {
        Application {
            last_name: "山田".into(),
            first_name: "花子".into(),
            phone: "090-1234-5678".into(),
            email: None,
            experience: "3~5年".into(),
            licenses: vec!["美容師免許".into(), "管理美容師".into()],
            position: None,
            age: 29,
            message: String::new(),
        }
    }

    #[test]
    fn body_uses_japan_time() {
        // 2024-03-31 15:30 UTC is 2024-04-01 00:30 in Tokyo.
        let received = DateTime::from_timestamp(1_711_899_000, 0).unwrap();
        let body = compose_body(&application(), received);
        assert!(body.contains("受付日時: 2024年04月01日 00:30 (JST)"));
    }

    #[test]
    fn body_fills_placeholders_for_optional_fields() {
        let received = DateTime::from_timestamp(0, 0).unwrap();
        let body = compose_body(&application(), received);
        assert!(body.contains("メールアドレス: 未入力"));
        assert!(body.contains("現在のポジション: 未選択"));
        assert!(body.contains("保有資格: 美容師免許、管理美容師"));
        assert!(body.ends_with("勤務に対する不安など:\nなし\n"));
    }

    #[test]
    fn subject_names_the_applicant() {
        assert_eq!(subject(&application()), "【求人応募】山田 花子様");
    }
}
