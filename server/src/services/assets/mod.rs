//! # Embedded Frontend Assets
//!
//! The trunk build output is copied into `static/dist` by `build.rs` and
//! compiled into the binary with `include_dir!`. Unknown paths fall back to
//! `index.html` so client-side navigation survives a reload.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

fn serve_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file(INDEX) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode, test, web, App};

    #[actix_web::test]
    async fn test_unknown_route_falls_back_to_index() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let req = test::TestRequest::get().uri("/campaigns/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html")));
    }

    #[actix_web::test]
    async fn test_empty_dir_is_not_found() {
        static EMPTY: Dir = Dir::new("", &[]);
        let resp = serve_from(&EMPTY, "/missing.js");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], b"Not Found");
    }
}
