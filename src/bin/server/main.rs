#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! REST API for the email dispatch service

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use mail_courier::{
    domain::mailing::service::MailingServiceImpl,
    infrastructure::{
        email::smtp::{SmtpConfig, SmtpMailer},
        http::{state::InstanceConfig, HttpServer, HttpServerConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The instance configuration
    #[clap(flatten)]
    pub instance: InstanceConfig,

    /// The SMTP transport configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Failed to load environment: {}", e);

        return Err(e.into());
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mailer = SmtpMailer::new(args.smtp);
    let mailing = MailingServiceImpl::new(Arc::new(mailer));

    HttpServer::new(mailing, args.instance, args.server)
        .await?
        .run()
        .await
}
