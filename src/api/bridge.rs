//! Background execution of API commands.
//!
//! The TUI loop is synchronous; the HTTP calls are async. The bridge owns
//! a small tokio runtime, spawns one task per command, and pushes each
//! task's resolution into an `mpsc` channel as a [`SessionEvent`]. The
//! event loop drains that channel between terminal events, so resolutions
//! re-enter the state machine on the UI thread like any other input.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Runtime;
use tracing::{debug, warn};

use crate::api::SearchClient;
use crate::state::{ApiCommand, SessionEvent};

/// Executes [`ApiCommand`]s off-thread and feeds resolutions back as
/// events.
///
/// Tasks carry the generation tag from their command into the resolution
/// event untouched; staleness is judged by the state machine, never here.
/// In-flight tasks are cancelled at their next await point when the
/// bridge (and its runtime) is dropped on shutdown.
#[derive(Debug)]
pub struct ApiBridge {
    runtime: Runtime,
    client: Arc<SearchClient>,
    events: Sender<SessionEvent>,
}

impl ApiBridge {
    /// Creates a bridge around `client`, sending resolutions to `events`.
    ///
    /// # Errors
    ///
    /// Fails when the tokio runtime cannot be built.
    pub fn new(client: SearchClient, events: Sender<SessionEvent>) -> Result<Self, std::io::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            client: Arc::new(client),
            events,
        })
    }

    /// Spawns the HTTP work for one command.
    ///
    /// Never blocks. A send failure means the event loop is already gone,
    /// which only happens during shutdown; the resolution is dropped.
    pub fn dispatch(&self, command: ApiCommand) {
        match command {
            ApiCommand::Search { generation, query } => {
                let client = Arc::clone(&self.client);
                let events = self.events.clone();
                self.runtime.spawn(async move {
                    let event = match client.search(&query).await {
                        Ok(result) => SessionEvent::SearchResolved { generation, result },
                        Err(error) => SessionEvent::SearchFailed { generation, error },
                    };
                    if events.send(event).is_err() {
                        debug!(generation, "event loop gone, dropping search resolution");
                    }
                });
            }
            ApiCommand::Explain {
                generation,
                query,
                matches,
            } => {
                let client = Arc::clone(&self.client);
                let events = self.events.clone();
                self.runtime.spawn(async move {
                    let event = match client.explain(&query, &matches).await {
                        Ok(explanation) => SessionEvent::ExplainResolved {
                            generation,
                            explanation,
                        },
                        Err(error) => {
                            warn!(%error, "explain request failed");
                            SessionEvent::ExplainFailed { generation }
                        }
                    };
                    if events.send(event).is_err() {
                        debug!(generation, "event loop gone, dropping explain resolution");
                    }
                });
            }
        }
    }
}
