use anyhow::Result;
use clap::Parser;
use debugai_cli::app;
use debugai_core::{DebugAiError, Settings};

#[derive(Parser)]
#[command(name = "debugai")]
#[command(about = "DebugAI - diagnóstico de erros e logs DevOps com Gemini")]
#[command(version)]
struct Cli {
    /// Analyze a single error or log and exit
    #[arg(short, long)]
    prompt: Option<String>,

    /// Gemini model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Color theme (hacker, plain)
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load();

    if let Some(model) = cli.model {
        settings.llm.model = model;
    }
    if let Some(theme) = cli.theme {
        settings.ui.theme = theme;
    }

    let llm = match settings.build_llm_client() {
        Ok(llm) => llm,
        Err(DebugAiError::MissingApiKey(var)) => {
            eprintln!("🔑 API Key não encontrada. Verifique a variável de ambiente {var}.");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(prompt) = cli.prompt {
        app::run_single_prompt(llm, &prompt).await?;
    } else {
        app::run_tui(llm, &settings.ui.theme).await?;
    }

    Ok(())
}
