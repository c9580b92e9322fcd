//! The compiled frontend, embedded at build time from `static/dist`.
//!
//! Every path that is not a file of the bundle gets `index.html`, so the
//! dashboard's own routes (`/dashboard`, `/certificates`) survive a reload.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Bundle path requested by `request_path`.
fn asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() {
        INDEX
    } else {
        path
    }
}

/// Default service of the host: everything not matched by another route.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

/// Answers `request_path` from `dir`.
///
/// # Arguments
/// * `dir` - The bundle to serve, normally [`STATIC_DIR`].
/// * `request_path` - The URL path of the request, with its leading `/`.
///
/// # Returns
/// The file with a MIME type guessed from its extension; `index.html` for any
/// path that is not in the bundle; `404 Not Found` when the bundle has no
/// `index.html` either.
fn serve_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let file_path = asset_path(request_path);

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
    use actix_web::http::StatusCode;

    #[test]
    fn root_maps_to_index() {
        assert_eq!(asset_path("/"), "index.html");
        assert_eq!(asset_path(""), "index.html");
        assert_eq!(asset_path("/app-1a2b.wasm"), "app-1a2b.wasm");
        assert_eq!(asset_path("/certificates"), "certificates");
    }

    #[test]
    fn empty_bundle_is_not_found() {
        let empty = Dir::new("", &[]);
        let response = serve_from(&empty, "/dashboard");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
