//! # Static Frontend Files
//!
//! Serves the companion frontend (index page, script, stylesheet) straight
//! from `Config::static_root`. Registered as the application's default
//! service, so it answers every path the API scope does not match.

use crate::config::Config;
use actix_files::NamedFile;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;
use std::path::{Component, Path, PathBuf};

const INDEX_FILE: &str = "index.html";

pub async fn process(req: HttpRequest, config: web::Data<Config>) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::MethodNotAllowed().finish();
    }

    let Some(file_path) = resolve(&config.static_root, req.path()) else {
        debug!("Refused static path {}", req.path());
        return not_found();
    };

    match NamedFile::open_async(&file_path).await {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            debug!("Static file {} unavailable: {e}", file_path.display());
            not_found()
        }
    }
}

/// Maps a request path onto a file under `root`.
///
/// The empty path maps to `index.html`. Paths that would leave `root`
/// (parent, root or prefix components) yield `None`.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let relative = if relative.is_empty() {
        INDEX_FILE
    } else {
        relative
    };

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().body("Not Found")
}
