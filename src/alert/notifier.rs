//! Email alert delivery over SMTP

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use crate::common::errors::{MonitorError, Result};
use crate::common::traits::AlertSink;
use crate::common::types::AlertEvent;
use crate::config::types::MailConfig;

/// Mail settings the notifier cannot send without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    SmtpPass,
    SmtpUser,
    DestinationEmail,
}

impl MissingField {
    /// Operator-facing message naming the appsettings.json key to fill in
    pub fn message(&self) -> &'static str {
        match self {
            MissingField::SmtpPass => {
                "Senha SMTP não configurada. Preencha no appsettings.json antes de enviar emails."
            }
            MissingField::SmtpUser => {
                "Usuário SMTP não configurado. Preencha no appsettings.json antes de enviar emails."
            }
            MissingField::DestinationEmail => {
                "Email de destino não configurado. Preencha no appsettings.json antes de enviar emails."
            }
        }
    }
}

/// Check every required mail field before any network I/O
///
/// Returns all missing fields in declaration order rather than stopping at
/// the first, so the operator can fix the settings file in one pass.
pub fn validate_mail_config(config: &MailConfig) -> Vec<MissingField> {
    fn blank(value: &Option<String>) -> bool {
        value.as_deref().map_or(true, |v| v.trim().is_empty())
    }

    let mut missing = Vec::new();
    if blank(&config.smtp_pass) {
        missing.push(MissingField::SmtpPass);
    }
    if blank(&config.smtp_user) {
        missing.push(MissingField::SmtpUser);
    }
    if blank(&config.destination_email) {
        missing.push(MissingField::DestinationEmail);
    }
    missing
}

/// Sends alert emails through an authenticated STARTTLS SMTP relay
///
/// The transport is built per send attempt and dropped afterwards, so the
/// SMTP connection is released even when the send fails.
pub struct EmailNotifier {
    config: MailConfig,
}

impl EmailNotifier {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Build the transport for one send attempt
    fn build_transport(&self, user: &str, pass: &str) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let tls = TlsParameters::new(self.config.smtp_host.clone())
            .map_err(|e| MonitorError::Smtp(e.to_string()))?;

        Ok(
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(self.config.smtp_host.as_str())
                .port(self.config.smtp_port)
                .tls(Tls::Required(tls))
                .credentials(Credentials::new(user.to_string(), pass.to_string()))
                .build(),
        )
    }

    /// Compose and submit one alert email
    ///
    /// Callers run [`validate_mail_config`] first; the unwrap_or_default
    /// fallbacks here only ever see validated values.
    async fn send(&self, alert: &AlertEvent) -> Result<()> {
        let user = self.config.smtp_user.as_deref().unwrap_or_default();
        let pass = self.config.smtp_pass.as_deref().unwrap_or_default();
        let destination = self.config.destination_email.as_deref().unwrap_or_default();

        let from: Mailbox = user
            .parse()
            .map_err(|e| MonitorError::Smtp(format!("remetente inválido: {e}")))?;
        let to: Mailbox = destination
            .parse()
            .map_err(|e| MonitorError::Smtp(format!("destinatário inválido: {e}")))?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(format!("Alerta de Cotação - {}", alert.symbol))
            .body(format!(
                "O ativo {} {}. Cotação atual: {}",
                alert.symbol, alert.reason, alert.price
            ))
            .map_err(|e| MonitorError::Smtp(e.to_string()))?;

        let transport = self.build_transport(user, pass)?;
        transport
            .send(email)
            .await
            .map_err(|e| MonitorError::Smtp(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AlertSink for EmailNotifier {
    async fn notify(&self, alert: &AlertEvent) -> bool {
        let missing = validate_mail_config(&self.config);
        if !missing.is_empty() {
            for field in missing {
                warn!("{}", field.message());
            }
            return false;
        }

        match self.send(alert).await {
            Ok(()) => {
                info!(
                    "[ALERTA ENVIADO] {} {}. Cotação: {}",
                    alert.symbol, alert.reason, alert.price
                );
                true
            }
            Err(e) => {
                warn!("Erro ao enviar email: {}", e);
                false
            }
        }
    }
}
