//! Entry point for hist-finder.
//!
//! Loads config and history before touching the terminal, so startup
//! failures print as plain errors. Then runs the TUI until the user cancels,
//! restoring the terminal on every exit path.

use std::path::PathBuf;

use anyhow::Result;
use hist_finder::app::App;
use hist_finder::config::Config;
use hist_finder::history::load_history;
use hist_finder::search::{Debounce, MatchRanker, SearchSession};
use hist_finder::utils;
use hist_finder::utils::guard::ExitGuard;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before anything else
    let _log_guard = utils::logger::init_logging();

    let config = Config::load()?;
    let history_path = config.resolve_history_path(std::env::args_os().nth(1).map(PathBuf::from))?;
    let entries = load_history(&history_path)?;

    let ranker = MatchRanker::new(config.match_strategy, config.max_results);
    let debounce = Debounce::new(config.debounce());
    info!(
        "Matching with {:?}, up to {} results, debounce {:?}",
        ranker.strategy(),
        ranker.max_results(),
        debounce.delay()
    );

    let session = SearchSession::new(entries, ranker, debounce, config.clipboard.build());

    let mut terminal = ratatui::init();
    // Restores cooked mode on normal exit and on panic
    let _restore = ExitGuard::new(ratatui::restore);

    let mut app = App::new(session);
    app.run(&mut terminal).await
}
