use clap::Parser;
use reelsense_core::ReviewSubmission;
use reelsense_demo::cli::{Cli, Commands};
use reelsense_demo::models::DemoConfig;
use reelsense_demo::server::run_server;
use reelsense_demo::state::DemoAppState;
use reelsense_model::ArtifactSpec;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            address,
            vocabulary,
            model,
            config,
            verbose,
        } => {
            init_logging(verbose);

            let demo_config = match config {
                Some(path) => DemoConfig::from_file(&path)?,
                None => DemoConfig {
                    vocabulary_path: vocabulary,
                    artifact: model.map(|path| ArtifactSpec::Local { path }),
                    ..Default::default()
                },
            };

            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;
            let state = DemoAppState::from_config(demo_config)?;

            println!();
            println!("  Reelsense — movie review sentiment demo");
            println!();
            println!("  Model:      {}", state.pipeline.scorer_name());
            println!("  Vocabulary: {} words", state.pipeline.vocabulary().len());
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(state, addr).await?;
        }

        Commands::Score {
            movie,
            vocabulary,
            model,
            verbose,
            review,
        } => {
            init_logging(verbose);

            // Same rule as the form: both fields non-blank before anything loads.
            let submission = ReviewSubmission::new(movie, review);
            let errors = submission.validation_errors();
            if !errors.is_empty() {
                anyhow::bail!(errors.join(" "));
            }

            let demo_config = DemoConfig {
                vocabulary_path: vocabulary,
                artifact: model.map(|path| ArtifactSpec::Local { path }),
                ..Default::default()
            };
            let state = DemoAppState::from_config(demo_config)?;

            let prediction = state.pipeline.analyze(&submission.review).await?;
            println!("Sentiment: {}", prediction.label);
            println!("Prediction score: {}", prediction.score_display());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "reelsense_demo=debug,reelsense_model=debug,tower_http=debug"
    } else {
        "reelsense_demo=info,reelsense_model=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
