//! Background execution of catalog work.
//!
//! The UI loop never awaits. It sends [`UiCommand`]s to a task on the
//! tokio runtime, and every outcome comes back as an [`AppEvent`] on the
//! UI event channel.

use std::sync::mpsc as std_mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::catalog::{CatalogClient, DiscoverRequest};
use crate::ui::events::AppEvent;
use crate::ui::poster::{Thumbnail, THUMB_HEIGHT, THUMB_WIDTH};

const COMMAND_BUFFER: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Discover {
        generation: u64,
        request: DiscoverRequest,
    },
    FetchPoster {
        movie_id: u64,
        poster_path: String,
        url: String,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct CatalogWorker;

impl CatalogWorker {
    /// Spawn the command loop on `handle` and return its sender.
    ///
    /// The loop ends when every sender is dropped.
    pub fn spawn(
        handle: &Handle,
        client: CatalogClient,
        events: std_mpsc::Sender<AppEvent>,
    ) -> UiCommandSender {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        handle.spawn(run(client, receiver, events));
        sender
    }
}

async fn run(
    client: CatalogClient,
    mut receiver: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = receiver.recv().await {
        let client = client.clone();
        let events = events.clone();
        match command {
            UiCommand::Discover {
                generation,
                request,
            } => {
                tokio::spawn(async move {
                    let result = client.discover(request).await;
                    let _ = events.send(AppEvent::Discovered {
                        generation,
                        request,
                        result,
                    });
                });
            }
            UiCommand::FetchPoster {
                movie_id,
                poster_path,
                url,
            } => {
                tokio::spawn(async move {
                    let thumbnail = fetch_thumbnail(&client, movie_id, &url).await;
                    let _ = events.send(AppEvent::PosterFetched {
                        movie_id,
                        poster_path,
                        thumbnail,
                    });
                });
            }
        }
    }
    debug!("Catalog worker stopped");
}

async fn fetch_thumbnail(client: &CatalogClient, movie_id: u64, url: &str) -> Option<Thumbnail> {
    let bytes = match client.fetch_poster(url).await {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(movie_id, error = %err, "Poster download failed");
            return None;
        }
    };

    let decoded =
        tokio::task::spawn_blocking(move || Thumbnail::decode(&bytes, THUMB_WIDTH, THUMB_HEIGHT))
            .await;
    match decoded {
        Ok(Ok(thumbnail)) => Some(thumbnail),
        Ok(Err(err)) => {
            debug!(movie_id, error = %err, "Poster decode failed");
            None
        }
        Err(err) => {
            warn!(movie_id, error = %err, "Poster decode task panicked");
            None
        }
    }
}
