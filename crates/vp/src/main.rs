use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vp::cli::vp::run;
use vp_cli_helpers::messages::fail;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "vp=warn,vp_password=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::debug!(error = ?e, "vp::main");
            fail(e.to_string());
            std::process::exit(1);
        }
    }
}
