use clap::Parser;

use crate::{api::envertec::Credentials, error::ScrapeError};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[clap(long, default_value = "0.0.0.0:9100", env = "BIND_ADDRESS")]
    pub bind_address: String,

    /// Path under which the metrics are served, for any request method.
    #[clap(long, default_value = "/metrics", env = "METRICS_PATH")]
    pub metrics_path: String,

    #[clap(flatten)]
    pub credentials: CredentialArgs,
}

/// Envertec Portal account.
///
/// Both are optional here, so that the exporter still starts and reports the problem on every scrape.
#[derive(Clone, Parser)]
pub struct CredentialArgs {
    #[clap(long = "username", env = "ENVERTEC_USERNAME")]
    pub username: Option<String>,

    #[clap(long = "password", env = "ENVERTEC_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl TryFrom<CredentialArgs> for Credentials {
    type Error = ScrapeError;

    fn try_from(args: CredentialArgs) -> Result<Self, Self::Error> {
        Self::new(args.username, args.password)
    }
}
