use std::sync::Arc;
use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::clock::SharedClock;
use crate::registry::{VehicleRecord, VehicleRegistry};
use crate::route::{RouteError, RoutePoint, RouteTable};


/// Everything the handlers read. Built once before serving, never mutated.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<VehicleRegistry>,
    pub routes: Arc<RouteTable>,
    pub clock: SharedClock
}

impl AppState {
    pub fn new(registry: VehicleRegistry, routes: RouteTable, clock: SharedClock) -> Self {
        Self {
            registry: Arc::new(registry),
            routes: Arc::new(routes),
            clock
        }
    }
}


pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/vehicles", get(get_vehicles))
        .route("/vehicles/{id}/route", get(get_route))
        .layer(cors)
        .layer(Extension(state))
}


pub struct ApiError(pub RouteError);

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RouteError::NotFound => StatusCode::NOT_FOUND,
        };

        let body = Json(serde_json::json!({
            "error": self.0.to_string()
        }));

        (status, body).into_response()
    }
}


#[derive(Deserialize, Debug)]
pub struct VehicleQuery {
    search: Option<String>
}

#[derive(Serialize, Debug)]
pub struct RouteResponse {
    route: Vec<RoutePoint>
}


async fn get_vehicles(
    Extension(state): Extension<AppState>,
    query: Result<Query<VehicleQuery>, QueryRejection>
) -> Json<Vec<VehicleRecord>> {
    // an unreadable query string never fails the listing
    let search = match query {
        Ok(Query(query)) => query.search,
        Err(rejection) => {
            tracing::warn!(%rejection, "ignoring query string");
            None
        }
    };

    let vehicles: Vec<VehicleRecord> = match search.as_deref() {
        Some(q) if !q.is_empty() => state.registry.search(q).into_iter().cloned().collect(),
        _ => state.registry.list().to_vec()
    };

    Json(vehicles)
}

async fn get_route(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>
) -> Result<impl IntoResponse, ApiError> {
    let now = state.clock.now();

    let vehicle = state.registry.get(&id).ok_or_else(|| {
        tracing::warn!(vehicle_id = %id, "no route data found for vehicle");
        RouteError::NotFound
    })?;

    tracing::debug!(vehicle_id = %vehicle.id, name = %vehicle.name, "route requested");
    let route = state.routes.route(&vehicle.id, now)?;

    Ok(Json(RouteResponse { route }))
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::from(RouteError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
