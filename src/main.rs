use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use movie_search::{
    cli::Cli,
    config::Config,
    logging,
    render::render,
    search::{SearchController, SearchState},
    services::HttpRecommendationService,
};

const QUIT_COMMAND: &str = ":quit";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env()?);

    tracing::info!(
        api_url = %config.recommend_api_url,
        user_id = %config.recommend_user_id,
        timeout_secs = config.request_timeout_secs,
        "Starting movie search"
    );

    let service =
        HttpRecommendationService::new(config.recommend_api_url.clone(), config.request_timeout())?;
    let controller = SearchController::new(Arc::new(service), config.recommend_user_id);

    match cli.movie {
        Some(movie) => run_once(&controller, movie).await,
        None => run_interactive(&controller).await,
    }
}

/// Searches a single movie and prints the settled result
async fn run_once(controller: &SearchController, movie: String) -> anyhow::Result<ExitCode> {
    controller.set_query(movie);
    if controller.submit_search().is_none() {
        tracing::warn!("No movie name given");
        return Ok(ExitCode::FAILURE);
    }

    let state = controller.settled().await;
    println!("{}", render(&state));

    Ok(match state {
        SearchState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

/// Reads one movie name per line and prints every state transition
///
/// The watch channel keeps only the newest state, so a fast response can
/// replace `Loading` before it is printed.
async fn run_interactive(controller: &SearchController) -> anyhow::Result<ExitCode> {
    println!("Movie Recommendations");
    println!("Enter a movie name, or {} to exit.", QUIT_COMMAND);

    let mut updates = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim() == QUIT_COMMAND {
                    break;
                }
                controller.set_query(line);
                controller.submit_search();
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let text = render(&updates.borrow_and_update());
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
        }
    }

    if controller.is_loading() || updates.has_changed().unwrap_or(false) {
        println!("{}", render(&controller.settled().await));
    }

    Ok(ExitCode::SUCCESS)
}
