use std::collections::HashMap;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;

use crate::registry::{VehicleRecord, VehicleRegistry};
use crate::timestamp;


pub const ROUTE_LEN: usize = 8;
pub const JITTER_DEGREES: f64 = 0.005;
const SAMPLE_INTERVAL_MINUTES: i64 = 10;

pub fn window() -> Duration {
    Duration::hours(1)
}


#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Vehicle not found")]
    NotFound
}


#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoutePoint {
    #[serde(serialize_with = "timestamp::serialize")]
    pub timestamp: DateTime<Utc>,
    /// `[latitude, longitude]`
    pub coordinates: (f64, f64)
}


/// Per-vehicle synthetic history, generated once and only ever read afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Vec<RoutePoint>>
}

impl RouteTable {
    pub fn generate<R: Rng + ?Sized>(registry: &VehicleRegistry, generated_at: DateTime<Utc>, rng: &mut R) -> Self {
        let generated_at = timestamp::truncate(generated_at);

        let routes = registry.list().iter()
            .map(|v| (v.id.clone(), generate_route(v, generated_at, rng)))
            .collect();

        Self { routes }
    }

    /// Points of `vehicle_id`'s route strictly newer than one hour before `now`, in stored order.
    pub fn route(&self, vehicle_id: &str, now: DateTime<Utc>) -> Result<Vec<RoutePoint>, RouteError> {
        let stored = self.routes.get(vehicle_id).ok_or(RouteError::NotFound)?;
        let cutoff = now - window();

        tracing::debug!(vehicle_id, now = %timestamp::format(&now), cutoff = %timestamp::format(&cutoff), "filtering route");

        let route: Vec<RoutePoint> = stored.iter()
            .filter(|p| p.timestamp > cutoff)
            .cloned()
            .collect();

        tracing::debug!(vehicle_id, kept = route.len(), stored = stored.len(), "filtered route");

        Ok(route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}


fn generate_route<R: Rng + ?Sized>(vehicle: &VehicleRecord, generated_at: DateTime<Utc>, rng: &mut R) -> Vec<RoutePoint> {
    let start = generated_at - window();

    let mut route: Vec<RoutePoint> = (0..ROUTE_LEN as i64 - 1)
        .map(|i| RoutePoint {
            timestamp: start + Duration::minutes((i + 1) * SAMPLE_INTERVAL_MINUTES),
            coordinates: jitter(vehicle, rng)
        })
        .collect();

    route.push(RoutePoint {
        timestamp: generated_at,
        coordinates: jitter(vehicle, rng)
    });

    route
}

fn jitter<R: Rng + ?Sized>(vehicle: &VehicleRecord, rng: &mut R) -> (f64, f64) {
    (
        vehicle.latitude + rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES),
        vehicle.longitude + rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES)
    )
}
