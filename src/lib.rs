pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod executor;
pub mod host;
pub mod settings;
pub mod tree;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::clock::SystemClock;
use crate::config::BotConfig;
use crate::engine::navigator::Navigator;
use crate::engine::runstate::RunControl;
use crate::host::{HostEvent, UiHost};
use crate::settings::SettingsStore;

/// Handle given to the host bootstrap and the control panel: `events` feeds
/// UI-change notifications in, `control` flips run/pause.
pub struct BotHandle {
    pub events: mpsc::Sender<HostEvent>,
    pub control: Arc<RunControl>,
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
}

/// Builds a navigator over the given host and settings surface and spawns its
/// loop on the current tokio runtime. The returned handle is the only way in.
pub fn spawn(
    host: Arc<dyn UiHost>,
    settings: Arc<dyn SettingsStore>,
    config: BotConfig,
) -> BotHandle {
    let control = Arc::new(RunControl::new());
    let (event_tx, event_rx) = mpsc::channel::<HostEvent>(32);

    let mut navigator = Navigator::new(
        host,
        settings,
        control.clone(),
        Arc::new(SystemClock),
        config,
        event_rx,
    );

    tracing::info!("spawning navigator background task");
    tokio::spawn(async move {
        navigator.run_loop().await;
        tracing::info!("navigator task exited");
    });

    BotHandle {
        events: event_tx,
        control,
    }
}
