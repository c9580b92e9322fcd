//! Runtime configuration for the dashboard bundle.
//!
//! - `GET /dashboard-config.json`: the `ClientConfig` the host was started
//!   with, so a single bundle works against any records service.

use actix_web::web::{get, resource, Data};
use actix_web::{HttpResponse, Resource};
use common::config::{ClientConfig, CONFIG_PATH};

pub fn configure_routes() -> Resource {
    resource(CONFIG_PATH).route(get().to(process))
}

async fn process(config: Data<ClientConfig>) -> HttpResponse {
    HttpResponse::Ok().json(config.get_ref())
}
