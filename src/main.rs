//! kubectl secretvalue
//!
//! Entry point of the plugin. Parses the command line, reads the requested
//! secret with the local kubeconfig and prints the decoded value.

use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kubectl_secretvalue::{
    adapters::ClusterAccess,
    cli::{self, Request},
    retriever, Error, Result,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let request = cli::parse_args(std::env::args().skip(1));
    if request.help_requested {
        cli::print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&request).await {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = ?err, "secretvalue failed");
            println!("{}", err);
            if matches!(err, Error::Parse(_)) {
                cli::print_usage();
            }
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(request: &Request) -> Result<String> {
    request.validated()?;
    debug!(secret = %request.secret_name, "Retrieving secret value");
    let value = retriever::get_value(&ClusterAccess::from_env(), request).await?;
    Ok(value)
}

/// Initialize tracing subscriber, logging to stderr so stdout only carries the value
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,kube=warn,hyper=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
