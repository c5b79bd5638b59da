use std::{sync::Arc, time::Duration};

use roster::Roster;
use tracing::info;

use super::{config::Config, gate::Gate};

pub struct AppState {
    pub config: Config,
    pub roster: Roster,
    pub gate: Gate,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let roster = Roster::load(&config.roster_path).expect("Roster misconfigured!");
        info!(
            "Loaded {} roster entries from {}",
            roster.len(),
            config.roster_path
        );

        let gate = Gate::new(
            config.passphrase.clone(),
            Duration::from_millis(config.review_delay_ms),
        );

        Arc::new(Self {
            config,
            roster,
            gate,
        })
    }
}
