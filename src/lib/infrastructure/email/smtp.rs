//! SMTP email transport implementation

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::MultiPart,
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Message, SmtpTransport, Transport,
};
use tracing::warn;

use crate::domain::mailing::{
    errors::MailerError,
    mailer::{Mailer, SendReceipt},
    value_objects::email_address::EmailAddress,
};

/// SMTP configuration
#[derive(Clone, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT")]
    pub port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: String,

    /// The sender email address
    #[clap(long, env = "SMTP_SENDER")]
    pub sender: String,

    /// Connection attempts before the transport is declared unavailable
    #[clap(long, env = "SMTP_MAX_CONNECTION_ATTEMPTS", default_value = "3")]
    pub max_connection_attempts: u32,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long, env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,
}

/// SMTP mailer
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build a transport for the configured relay
    fn transport(&self) -> Result<SmtpTransport> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        let relay = if self.config.starttls {
            SmtpTransport::starttls_relay(&self.config.host)?
        } else {
            SmtpTransport::relay(&self.config.host)?
        };

        Ok(relay
            .credentials(creds)
            .port(self.config.port)
            .tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ))
            .build())
    }

    /// Establish a connection, retrying up to the configured attempt budget
    fn connect(&self) -> Result<SmtpTransport, MailerError> {
        let attempts = self.config.max_connection_attempts.max(1);

        for attempt in 1..=attempts {
            let transport = self.transport()?;

            match transport.test_connection() {
                Ok(true) => return Ok(transport),
                Ok(false) => {
                    warn!(
                        "connection attempt {attempt}/{attempts} to {} refused",
                        self.config.host
                    );
                }
                Err(e) => {
                    warn!(
                        "connection attempt {attempt}/{attempts} to {} failed: {e}",
                        self.config.host
                    );
                }
            }
        }

        Err(MailerError::TransportUnavailable {
            host: self.config.host.clone(),
            attempts,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_email(
        &self,
        to: &EmailAddress,
        subject: &str,
        html: &str,
        plain: &str,
    ) -> Result<SendReceipt, MailerError> {
        let email = Message::builder()
            .from(self.config.sender.parse()?)
            .to(to.to_string().parse()?)
            .subject(subject.to_string())
            .multipart(MultiPart::alternative_plain_html(
                String::from(plain),
                String::from(html),
            ))?;

        match self.connect()?.send(&email) {
            Ok(response) => Ok(SendReceipt {
                code: response.code().to_string(),
                message: response.message().collect::<Vec<_>>().join(" "),
            }),
            Err(e) => Err(MailerError::Rejected(e.to_string())),
        }
    }
}
