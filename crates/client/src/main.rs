//! Gesture duel client binary.
//!
//! Composition root that loads content, replays a match fixture through a
//! [`MatchSession`], resolves the duel and prints the report.
//!
//! # Environment
//!
//! - `DUEL_CONFIG`: settings file (defaults to the bundled `config.toml`)
//! - `DUEL_RULES`: gesture rule table (defaults to the bundled `rules.ron`)
//! - `DUEL_FIXTURE`: bundled fixture name or fixture path (default `sample`)
//! - `DUEL_REALTIME`: replay frames at recorded speed
//! - `DUEL_SESSION_ID`, `DUEL_LOG_DIR`: log file location
//!
//! ```bash
//! DUEL_FIXTURE=sample cargo run -p duel-client
//! ```

mod config;
mod logging;

use std::time::Duration;

use anyhow::Result;
use duel_content::{ContentFactory, MatchFixture};
use duel_core::DuelError;
use runtime::{Event, MatchSession, ReplaySummary, RuntimeError, SessionConfig, Topic};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&client_config.session_id, &client_config.log_dir)?;

    tracing::info!("Starting duel client");
    tracing::info!("Fixture: {}", client_config.fixture);
    tracing::info!("Realtime replay: {}", client_config.realtime);

    // 3. Load content
    let factory = ContentFactory::bundled();
    let settings = client_config.load_settings(&factory)?;
    let rules = client_config.load_rules(&factory)?;
    let fixture = client_config.load_fixture(&factory)?;

    // 4. Build the session and attach event logging
    let mut session = MatchSession::builder()
        .config(SessionConfig::from(settings))
        .rules(rules)
        .build()?;

    let loggers: Vec<JoinHandle<()>> = session
        .subscribe_multiple(&[Topic::Turn, Topic::Gesture, Topic::Match])
        .into_iter()
        .map(|(topic, events)| tokio::spawn(log_events(topic, events)))
        .collect();

    // 5. Replay and resolve
    let summary = if client_config.realtime {
        replay_realtime(&mut session, &fixture).await?
    } else {
        session.replay(&fixture).inspect_err(log_failure)?
    };
    tracing::info!(?summary, "Replay finished");

    let report = session.fight().inspect_err(log_failure)?;

    // Closing the session closes the event channels.
    drop(session);
    for logger in loggers {
        logger.await?;
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    println!("digest: {}", hex::encode(report.digest()));

    Ok(())
}

/// Replays `fixture`, sleeping until each frame's recorded time.
async fn replay_realtime(session: &mut MatchSession, fixture: &MatchFixture) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary {
        entries: session.record_script(fixture)?,
        ..ReplaySummary::default()
    };

    for (side, frame) in fixture.timeline() {
        let wait = frame.at - session.clock();
        if wait > 0.0 {
            tokio::time::sleep(Duration::from_secs_f64(wait)).await;
        }
        summary.tally(session.replay_frame(side, frame))?;
    }

    Ok(summary)
}

fn log_failure(error: &RuntimeError) {
    tracing::error!(
        severity = error.severity().as_str(),
        code = error.error_code(),
        %error,
        "Match aborted"
    );
}

async fn log_events(topic: Topic, mut events: broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(event) => tracing::info!(?topic, ?event, "event"),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(?topic, skipped, "Event logger lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
