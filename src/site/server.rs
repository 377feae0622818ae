// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Static file server for the build output.

use std::future::Future;
use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::handler::HandlerWithoutStateExt;
use axum::http::{StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

use crate::errors::ServeError;
use crate::observability::messages::server::{FileNotFound, PortInUse, ServerListening};
use crate::observability::messages::StructuredLog;

/// Router serving `out_dir`: `/` is `index.html`, every other path maps to
/// the file of the same name. Directories, `..` segments and missing files
/// are `404 Not Found`.
pub fn router(out_dir: impl Into<PathBuf>) -> Router {
    let out_dir = out_dir.into();
    let files = ServeDir::new(&out_dir)
        .append_index_html_on_directories(false)
        .not_found_service(not_found.into_service());

    Router::new()
        .route_service("/", ServeFile::new(out_dir.join("index.html")))
        .fallback_service(files)
}

async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    FileNotFound {
        request_path: uri.path(),
    }
    .log();
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Bind `host:port`, retrying once on `fallback` if the port is taken.
///
/// Any bind error other than "address in use" is returned as is.
pub async fn bind_with_fallback(host: &str, port: u16, fallback: u16) -> Result<TcpListener, ServeError> {
    let ip: IpAddr = host
        .parse()
        .map_err(|_| ServeError::InvalidAddress(host.to_string()))?;

    let primary = SocketAddr::new(ip, port);
    match TcpListener::bind(primary).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            PortInUse { port, fallback }.log();
            let addr = SocketAddr::new(ip, fallback);
            TcpListener::bind(addr)
                .await
                .map_err(|source| ServeError::Bind { addr, source })
        }
        Err(source) => Err(ServeError::Bind {
            addr: primary,
            source,
        }),
    }
}

/// Serve `out_dir` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, out_dir: PathBuf, shutdown: F) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(ServeError::Server)?;
    ServerListening { addr }.log();

    axum::serve(listener, router(out_dir))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServeError::Server)
}
