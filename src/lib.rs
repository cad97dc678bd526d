//! Mock vehicle-tracking backend: a fixed demo fleet plus a synthetic
//! one-hour route per vehicle, served as JSON for the dashboard UI.

pub mod api;
pub mod clock;
pub mod config;
pub mod registry;
pub mod route;
pub mod timestamp;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::AppState;
use crate::clock::SharedClock;
use crate::config::Config;
use crate::registry::VehicleRegistry;
use crate::route::RouteTable;


/// Builds the registry and route table at the clock's current instant.
pub fn build_state(config: &Config, clock: SharedClock) -> AppState {
    let mut rng = match config.route_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy()
    };

    let started_at = clock.now();
    let registry = VehicleRegistry::seeded(started_at);
    let routes = RouteTable::generate(&registry, started_at, &mut rng);

    tracing::info!(
        vehicles = registry.len(),
        seeded = config.route_seed.is_some(),
        "generated routes"
    );

    AppState::new(registry, routes, clock)
}
