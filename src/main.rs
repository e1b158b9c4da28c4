use std::path::Path;

use clap::Parser;
use dotenvy::dotenv;
use tumblr_download::{
    cli::{self, Args, Mode},
    observability, AppConfig, AppResult,
};

fn main() {
    dotenv().ok();
    observability::init_logging();

    let args = Args::parse();

    let Some(url) = args.blog_url() else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "tumblr-download".to_string());
        cli::write_usage(&program, &mut std::io::stderr()).ok();
        std::process::exit(0);
    };

    if let Err(e) = run(args.mode(), url) {
        tracing::error!(error = %e, "Download aborted");
        std::process::exit(1);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn run(mode: Mode, url: &str) -> AppResult<()> {
    let config = AppConfig::from_env()?;
    cli::run(mode, url, &config, Path::new("."), &mut std::io::stdout()).await
}
