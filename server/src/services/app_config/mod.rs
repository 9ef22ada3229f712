//! # Runtime Configuration Endpoint
//!
//! Serves the browser-side `AppConfig` as `GET /app-config.json`. The SPA
//! fetches it once on startup before issuing any API call, so the API base
//! URL, debounce window, toast duration and page size can change per
//! deployment without rebuilding the WebAssembly bundle.

use actix_web::web::{self, get, resource};
use actix_web::{HttpResponse, Resource};
use common::config::AppConfig;

pub const PATH: &str = "/app-config.json";

pub fn configure_routes() -> Resource {
    resource(PATH).route(get().to(process))
}

async fn process(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_serves_configured_values() {
        let config = AppConfig {
            api_base_url: "https://api.example.org".to_string(),
            ..AppConfig::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri(PATH).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["apiBaseUrl"], "https://api.example.org");
        assert_eq!(body["pageSize"], config.page_size);
    }
}
