//! Exercise a BitNet OpenAI-compatible shim: authenticated health check,
//! then one generation call on the chat or completions route.
//!
//! Usage:
//!   bitnet-probe --cf-client-id <id> --cf-client-secret <secret> \
//!     [--base <url>] [--route chat|completions] [--prompt <text>] \
//!     [--stop <s>]...
//!
//! Exits 0 on success, 1 on any failure. A failed health check aborts the
//! run before the generation request is sent.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bitnet_probe::config::{self, AccessCredentials, ProbeConfig, Route};
use bitnet_probe::{report, Error, ProbeClient};

/// Command-line arguments for the probe.
#[derive(Parser, Debug)]
#[command(name = "bitnet-probe")]
#[command(about = "Test a BitNet OpenAI-compatible shim behind Cloudflare Access")]
#[command(version)]
struct Args {
    /// Base URL of the shim
    #[arg(long, default_value = "http://127.0.0.1:19000")]
    base: String,

    /// Endpoint to call
    #[arg(long, value_enum, default_value = "chat")]
    route: Route,

    /// Model name string to report
    #[arg(long, env = "BITNET_MODEL", default_value = "bitnet-b1.58")]
    model: String,

    /// CF Access Client ID header value
    #[arg(long = "cf-client-id")]
    cf_client_id: String,

    /// CF Access Client Secret header value
    #[arg(long = "cf-client-secret")]
    cf_client_secret: String,

    /// Prompt text
    #[arg(long, default_value = "Say hello in one short sentence.")]
    prompt: String,

    /// Maximum tokens to generate
    #[arg(long = "max_tokens", default_value_t = 8096)]
    max_tokens: u32,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.7)]
    temperature: f64,

    /// Nucleus sampling probability
    #[arg(long, default_value_t = 0.95)]
    top_p: f64,

    /// Add a stop string. Can be passed multiple times.
    #[arg(long)]
    stop: Vec<String>,
}

fn build_config(args: Args) -> bitnet_probe::Result<ProbeConfig> {
    Ok(ProbeConfig {
        base_url: config::normalize_base_url(&args.base)?,
        route: args.route,
        model: args.model,
        prompt: args.prompt,
        max_tokens: args.max_tokens,
        temperature: args.temperature,
        top_p: args.top_p,
        stop: args.stop,
        credentials: AccessCredentials {
            client_id: args.cf_client_id,
            client_secret: args.cf_client_secret,
        },
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match build_config(args) {
        Ok(config) => config,
        Err(e) => {
            println!("❌ Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("→ Using base URL: {}", config.base_url);

    let client = match ProbeClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            println!("❌ Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Hard precondition: no generation request unless the shim is healthy.
    match client.health().await {
        Ok(body) => {
            println!("✅ /health OK");
            println!("{}", report::pretty(&body));
        }
        Err(e) => {
            println!("❌ /health failed: {}", report::describe(&e));
            return ExitCode::FAILURE;
        }
    }

    match client.generate(&config).await {
        Ok(outcome) => {
            println!("\n✅ Response:");
            println!("{}", report::pretty(&outcome.raw));
            match outcome.response.first_text(config.route) {
                Ok(text) => {
                    println!("\n📝 Text:\n{}", text.trim());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!("❌ Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(Error::Remote { status, body }) => {
            println!("❌ HTTP error: status {status}");
            println!("{}", report::pretty(&body));
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}
