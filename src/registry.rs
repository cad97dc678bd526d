use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::timestamp;


const SEED_VEHICLES: [(&str, &str, f64, f64); 10] = [
    ("vehicle-1", "Toyota Corolla", 34.0522, -118.2437),
    ("vehicle-2", "Honda Civic", 40.7128, -74.0060),
    ("vehicle-3", "Ford Focus", 41.8781, -87.6298),
    ("vehicle-4", "Chevrolet Malibu", 29.7604, -95.3698),
    ("vehicle-5", "Hyundai Elantra", 33.4484, -112.0740),
    ("vehicle-6", "Nissan Altima", 39.7392, -104.9903),
    ("vehicle-7", "BMW 3 Series", 51.5074, -0.1278),
    ("vehicle-8", "Mercedes-Benz C-Class", 37.7749, -122.4194),
    ("vehicle-9", "Audi A4", 47.6062, -122.3321),
    ("vehicle-10", "Tesla Model 3", 38.6270, -90.1994),
];


#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(serialize_with = "timestamp::serialize")]
    pub timestamp: DateTime<Utc>
}


/// Fixed set of vehicles, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct VehicleRegistry {
    vehicles: Vec<VehicleRecord>
}

impl VehicleRegistry {
    pub fn new(vehicles: Vec<VehicleRecord>) -> Self {
        Self { vehicles }
    }

    /// The built-in demo fleet, every record stamped with `created_at`.
    pub fn seeded(created_at: DateTime<Utc>) -> Self {
        let created_at = timestamp::truncate(created_at);

        let vehicles = SEED_VEHICLES.iter()
            .map(|&(id, name, latitude, longitude)| VehicleRecord {
                id: id.to_string(),
                name: name.to_string(),
                latitude,
                longitude,
                timestamp: created_at
            })
            .collect();

        Self::new(vehicles)
    }

    pub fn list(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn get(&self, id: &str) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Case-insensitive substring match on the vehicle id. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&VehicleRecord> {
        let needle = query.to_lowercase();
        self.vehicles.iter()
            .filter(|v| v.id.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
