//! Local dev server with hot reload.
//!
//! Serves the site root as static files and reloads connected browsers when
//! an `*.html` or `*.css` file in the root changes. The heavy lifting is
//! delegated: `tower-http`'s `ServeDir` serves files, `tower-livereload`
//! injects the reload script and owns the client connections, and `notify`
//! watches the filesystem. This module only wires them together.
//!
//! Development only: plain HTTP on localhost, no TLS, no auth.

use axum::Router;
use notify::{Event, RecursiveMode, Watcher};
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_livereload::LiveReloadLayer;

/// Port the dev server binds on localhost.
pub const DEFAULT_PORT: u16 = 3000;

/// Changes to files with these extensions trigger a browser reload.
const WATCHED_EXTENSIONS: &[&str] = &["html", "css"];

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),
}

/// Whether a changed path should trigger a reload.
fn is_watched(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            WATCHED_EXTENSIONS
                .iter()
                .any(|watched| ext.eq_ignore_ascii_case(watched))
        })
}

/// Static file service for `root` with the livereload layer applied.
fn router(root: &Path, livereload: LiveReloadLayer) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(livereload)
}

/// Serve `root` on `port`, blocking until interrupted.
pub fn serve(root: &Path, port: u16) -> Result<(), ServeError> {
    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();
    let app = router(root, livereload);

    // The callback runs on notify's watcher thread; Reloader is Clone + Send
    // and reload() just flips the signal the injected script polls.
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        if let Ok(event) = res {
            if event.paths.iter().any(|p| is_watched(p)) {
                reloader.reload();
            }
        }
    })?;
    // Top-level files only — the site keeps its pages and stylesheets at the
    // root; image churn below images/ must not trigger reloads.
    watcher.watch(root, RecursiveMode::NonRecursive)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        println!("Serving {} on http://{}", root.display(), addr);
        println!("Watching *.html and *.css for changes");
        axum::serve(listener, app).await
    })?;

    drop(watcher);
    Ok(())
}
