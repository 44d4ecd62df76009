use log::{debug, info};
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};

use crate::{
    controls::{Command, Effect, LayerId, StateView, ViewerState},
    loader::FeedLoader,
    store::{Feed, LayerStore},
};

/// Feeds loaded when the viewer starts.
pub const STARTUP_FEEDS: [Feed; 4] = [Feed::Boundary, Feed::Winds, Feed::Metars, Feed::Tafs];

/// Owns the viewer state and runs the effects its transitions ask for:
/// feed loads, the slider ticker and the periodic refresh.
pub struct MapController {
    state: RwLock<ViewerState>,
    loader: FeedLoader,
    ticker: Mutex<Option<JoinHandle<()>>>,
    tick_period: Duration,
}

impl MapController {
    pub fn new(loader: FeedLoader, tick_period: Duration) -> Self {
        Self {
            state: RwLock::new(ViewerState::default()),
            loader,
            ticker: Mutex::new(None),
            tick_period,
        }
    }

    pub fn store(&self) -> &Arc<LayerStore> {
        self.loader.store()
    }

    pub async fn state(&self) -> ViewerState {
        self.state.read().await.clone()
    }

    pub async fn view(&self) -> StateView {
        self.state.read().await.view(self.store().loading())
    }

    pub async fn is_active(&self, layer: LayerId) -> bool {
        self.state.read().await.layers.is_active(layer)
    }

    /// Applies a command to the state without running its effects.
    pub async fn apply(&self, command: Command) -> Vec<Effect> {
        let mut state = self.state.write().await;
        let (next, effects) = state.clone().apply(command);
        *state = next;
        effects
    }

    /// Applies a command and runs the resulting effects.
    pub async fn dispatch(self: &Arc<Self>, command: Command) -> StateView {
        debug!("dispatching {:?}", command);
        let effects = self.apply(command).await;
        for effect in effects {
            match effect {
                Effect::LoadFeed(feed) => {
                    self.loader.spawn(feed);
                }
                Effect::StartTicker => self.start_ticker().await,
                Effect::StopTicker => self.stop_ticker().await,
            }
        }
        self.view().await
    }

    /// Kicks off the initial loads in the background.
    pub fn start(&self) {
        for feed in STARTUP_FEEDS {
            self.loader.spawn(feed);
        }
    }

    /// Feeds a manual or periodic refresh reloads.
    pub async fn refresh_feeds(&self) -> Vec<Feed> {
        let mut feeds = vec![Feed::Metars, Feed::Tafs];
        if self.is_active(LayerId::Sigmet).await {
            feeds.push(Feed::Sigmets);
        }
        feeds
    }

    /// Reloads the refresh feeds and waits for all of them.
    pub async fn reload(&self) -> Vec<Feed> {
        let feeds = self.refresh_feeds().await;
        let loads: Vec<_> = feeds.iter().map(|feed| self.loader.load(*feed)).collect();
        futures::future::join_all(loads).await;
        feeds
    }

    /// Reloads the refresh feeds every `period`, first firing one period
    /// after startup.
    pub fn spawn_refresh(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                info!("refreshing weather feeds");
                controller.reload().await;
            }
        })
    }

    async fn start_ticker(self: &Arc<Self>) {
        let mut ticker = self.ticker.lock().await;
        if ticker.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }

        let controller = Arc::clone(self);
        let period = self.tick_period;
        *ticker = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let effects = controller.apply(Command::Tick).await;
                if effects.contains(&Effect::StopTicker) {
                    debug!("slider playback reached the last forecast hour");
                    break;
                }
                if !controller.state.read().await.slider.is_playing() {
                    break;
                }
            }
        }));
    }

    async fn stop_ticker(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
    }
}
