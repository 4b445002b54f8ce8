//! Local preview server
//!
//! Serves a generated site straight from memory over HTTP/1.1.

use anyhow::{Context, Result};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{self, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use super::site::Site;
use crate::constants::{artifact, media};

/// Pause after a failed accept before trying again
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Accept connections on `addr` until the process is stopped
pub async fn serve(site: Site, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind preview server to {}", addr))?;
    let local = listener.local_addr()?;
    info!("Serving preview at http://{}/", local);
    serve_listener(listener, Arc::new(site)).await;
    Ok(())
}

/// Serve connections from an already bound listener. Accept failures are
/// logged and the loop keeps going.
pub async fn serve_listener(listener: TcpListener, site: Arc<Site>) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        let site = Arc::clone(&site);
        tokio::spawn(async move {
            let service = service_fn(move |req: Request<hyper::body::Incoming>| {
                let site = Arc::clone(&site);
                async move { Ok::<_, Infallible>(respond(&site, &req)) }
            });
            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                debug!("Connection from {} ended with error: {}", peer, e);
            }
        });
    }
}

/// Map a request onto an artifact of `site`
pub fn respond<B>(site: &Site, req: &Request<B>) -> Response<Full<Bytes>> {
    let method = req.method();
    if method != Method::GET && method != Method::HEAD {
        let mut response = plain(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed\n");
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
        return response;
    }

    let path = req.uri().path().trim_start_matches('/');
    let path = if path.is_empty() { artifact::INDEX } else { path };
    let Some(found) = site.get(path) else {
        debug!("{} {} -> 404", method, req.uri().path());
        return plain(StatusCode::NOT_FOUND, "Not Found\n");
    };

    let etag = format!("\"{}\"", found.digest);
    let fresh = req
        .headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == etag);

    let (status, body) = if fresh {
        (StatusCode::NOT_MODIFIED, Bytes::new())
    } else {
        (StatusCode::OK, Bytes::from(found.bytes.clone()))
    };
    debug!("{} {} -> {}", method, req.uri().path(), status);

    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(found.media_type),
    );
    if let Ok(value) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, value);
    }
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

fn plain(status: StatusCode, text: &'static str) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from_static(text.as_bytes())));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(media::TEXT));
    response
}
