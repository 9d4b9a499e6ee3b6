//! Effect execution
//!
//! [`Dispatcher`] owns the [`AppState`] and feeds every [`Message`] through
//! [`update`]. Effects that need time (catalog fetch, page delay) run as
//! tokio tasks that post their result back on a channel. Each task observes a
//! [`CancellationToken`]; cancelling the root token on shutdown guarantees no
//! callback fires into a torn-down UI.

mod delay;

pub use delay::{Delay, ImmediateDelay, TokioDelay};

use crate::catalog::CatalogLoader;
use crate::core::{AppState, Effect, Message, update};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

const CHANNEL_CAPACITY: usize = 32;

/// Runs effects as background tasks
pub struct EffectRunner {
    loader: CatalogLoader,
    delay: Arc<dyn Delay>,
    tx: mpsc::Sender<Message>,
    shutdown: CancellationToken,
    /// Token of the pending page extension, if any
    extension: Option<CancellationToken>,
}

impl EffectRunner {
    pub fn new(loader: CatalogLoader, delay: Arc<dyn Delay>, tx: mpsc::Sender<Message>) -> Self {
        Self {
            loader,
            delay,
            tx,
            shutdown: CancellationToken::new(),
            extension: None,
        }
    }

    pub fn run(&mut self, effect: Effect) {
        match effect {
            Effect::FetchCatalog => self.spawn_fetch(),
            Effect::ScheduleExtension { generation, delay } => self.spawn_extension(generation, delay),
            Effect::CancelExtension => self.cancel_extension(),
        }
    }

    /// Cancel every task spawned by this runner
    pub fn shutdown(&mut self) {
        self.cancel_extension();
        self.shutdown.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    fn spawn_fetch(&self) {
        let loader = self.loader.clone();
        let tx = self.tx.clone();
        let token = self.shutdown.child_token();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("Catalog fetch abandoned");
                }
                result = loader.load() => {
                    if tx.send(Message::CatalogLoaded(result)).await.is_err() {
                        tracing::debug!("UI gone before catalog arrived");
                    }
                }
            }
        });
    }

    fn spawn_extension(&mut self, generation: u64, duration: Duration) {
        self.cancel_extension();

        let token = self.shutdown.child_token();
        self.extension = Some(token.clone());
        let delay = Arc::clone(&self.delay);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = delay.wait(duration) => {
                    let _ = tx.send(Message::ExtensionElapsed { generation }).await;
                }
            }
        });
    }

    fn cancel_extension(&mut self) {
        if let Some(token) = self.extension.take() {
            token.cancel();
        }
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Owns the state and routes messages and effects
pub struct Dispatcher {
    state: AppState,
    effects: EffectRunner,
    rx: mpsc::Receiver<Message>,
}

impl Dispatcher {
    pub fn new(state: AppState, loader: CatalogLoader, delay: Arc<dyn Delay>) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            state,
            effects: EffectRunner::new(loader, delay, tx),
            rx,
        }
    }

    /// Issue the initial catalog fetch
    pub fn start(&mut self) {
        self.effects.run(Effect::FetchCatalog);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply a message and run the effect it produces
    pub fn dispatch(&mut self, message: Message) {
        if let Some(effect) = update(&mut self.state, message) {
            self.effects.run(effect);
        }
    }

    /// Apply every message already posted by background tasks
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.dispatch(message);
            applied += 1;
        }
        applied
    }

    /// Wait for the next background message and apply it
    pub async fn next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(message) => {
                self.dispatch(message);
                true
            }
            None => false,
        }
    }

    pub fn shutdown(&mut self) {
        self.effects.shutdown();
    }
}
