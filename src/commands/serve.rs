use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ServeArgs;
use crate::conversation::InMemorySessionStore;
use crate::server::{self, AppState};

pub fn run(args: ServeArgs) -> Result<()> {
    let engine = super::build_engine(&args.source)?;
    let sessions = Arc::new(InMemorySessionStore::new(non_zero_secs(args.session_ttl_secs)));
    let sweep_every = sessions
        .ttl()
        .and(non_zero_secs(args.sweep_interval_secs));

    info!(
        bind = %args.bind,
        catalog_sections = engine.catalog_sections(),
        index_categories = engine.index().populated_categories(),
        fallback_used = engine.index().fallback_merged(),
        session_ttl_secs = sessions.ttl().map(|ttl| ttl.as_secs()).unwrap_or(0),
        sweep_interval_secs = sweep_every.map(|period| period.as_secs()).unwrap_or(0),
        "starting fir intake server"
    );

    let state = AppState::new(engine, sessions);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(server::serve(args.bind, state, sweep_every))
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
