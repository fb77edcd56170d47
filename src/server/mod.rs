//! HTTP front end
//!
//! Serves the landing page, accepts contact form posts and exposes a health
//! check. Every response carries the same set of security headers.

use anyhow::Result;
use bytes::Bytes;
use http::request::Parts;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::Incoming;
use hyper::header::{self, HeaderMap, HeaderName, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::constants::limits;
use crate::contact::ContactLinks;
use crate::menu::MenuState;
use crate::page::render_page;
use crate::service::{ContactForm, LandingService, PageVisit, SubmissionError};
use crate::validation::anonymize_ip;


const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; style-src 'self' 'unsafe-inline'; \
     img-src 'self' data: https:; form-action 'self'; frame-ancestors 'none'; base-uri 'self'";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Shared state handed to every connection
pub struct AppState {
    pub service: LandingService,
    pub links: ContactLinks,
}

/// Accept connections until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    info!("Listening on http://{}", listener.local_addr()?);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!("Failed to accept connection: {}", e);
                        continue;
                    }
                };
                let io = TokioIo::new(stream);
                let state = state.clone();

                tokio::spawn(async move {
                    let svc = service_fn(move |req| handle(req, peer, state.clone()));
                    if let Err(e) = http1::Builder::new().serve_connection(io, svc).await {
                        debug!("Connection error: {}", e);
                    }
                });
            }
            _ = &mut shutdown => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}

async fn handle(
    req: Request<Incoming>,
    peer: SocketAddr,
    state: Arc<AppState>,
) -> std::result::Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();

    let body = if parts.method == Method::POST {
        match Limited::new(body, limits::FORM_BODY).collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
                return Ok(text(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"));
            }
            Err(e) => {
                debug!("Failed to read request body: {}", e);
                return Ok(text(StatusCode::BAD_REQUEST, "Could not read request body"));
            }
        }
    } else {
        Bytes::new()
    };

    // Routing takes the SQLite lock, so it runs on the blocking pool
    let routed = tokio::task::spawn_blocking(move || {
        let response = route(&state, &parts, body, Some(peer.ip()));
        debug!("{} {} -> {}", parts.method, parts.uri.path(), response.status());
        response
    })
    .await;

    match routed {
        Ok(response) => Ok(response),
        Err(e) => {
            error!("Request handler failed: {}", e);
            Ok(text(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong. Please try again.",
            ))
        }
    }
}

/// Dispatch a fully-read request
pub fn route(state: &AppState, parts: &Parts, body: Bytes, peer: Option<IpAddr>) -> Response<Full<Bytes>> {
    match (parts.uri.path(), &parts.method) {
        ("/", &Method::GET) | ("/", &Method::HEAD) => landing(state, parts, peer),
        ("/contact", &Method::POST) => contact(state, parts, &body, peer),
        ("/healthz", &Method::GET) => text(StatusCode::OK, "ok"),
        ("/", _) | ("/contact", _) | ("/healthz", _) => {
            text(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
        }
        _ => text(StatusCode::NOT_FOUND, "Not found"),
    }
}

fn landing(state: &AppState, parts: &Parts, peer: Option<IpAddr>) -> Response<Full<Bytes>> {
    let ip = peer.map(|ip| ip.to_string());
    if let Some(ip) = ip.as_deref() {
        info!("Landing page view from {}", anonymize_ip(ip));
    }

    state.service.log_page_view(PageVisit {
        page_path: parts.uri.path().to_string(),
        ip_address: ip,
        user_agent: header_str(&parts.headers, header::USER_AGENT),
        referrer: header_str(&parts.headers, header::REFERER),
        session_id: session_id(&parts.headers),
    });

    let menu = MenuState::from_query(parts.uri.query());
    let html = render_page(&state.service.page_content(), &state.links, menu);

    let body = if parts.method == Method::HEAD {
        Bytes::new()
    } else {
        Bytes::from(html)
    };
    let mut response = respond(StatusCode::OK, "text/html; charset=utf-8", body);
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

fn contact(state: &AppState, parts: &Parts, body: &[u8], peer: Option<IpAddr>) -> Response<Full<Bytes>> {
    if !is_form_content_type(&parts.headers) {
        return text(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Expected application/x-www-form-urlencoded",
        );
    }

    let mut fields = parse_form(body);
    let form = ContactForm {
        name: fields.remove("name").unwrap_or_default(),
        email: fields.remove("email").unwrap_or_default(),
        phone: fields.remove("phone"),
        message: fields.remove("message").unwrap_or_default(),
    };

    let ip = peer.map(|ip| ip.to_string());
    let user_agent = header_str(&parts.headers, header::USER_AGENT);

    match state
        .service
        .submit_contact(form, ip.as_deref(), user_agent.as_deref())
    {
        Ok(_) => text(StatusCode::CREATED, "Thank you! We'll be in touch soon."),
        Err(SubmissionError::RateLimited) => text(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many submissions. Please try again later.",
        ),
        Err(SubmissionError::Storage(e)) => {
            error!("Error submitting contact form: {}", e);
            text(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong. Please try again.",
            )
        }
        Err(e) => text(StatusCode::BAD_REQUEST, &format!("Invalid submission: {}", e)),
    }
}

/// Decode an `application/x-www-form-urlencoded` body; later keys win
pub fn parse_form(body: &[u8]) -> HashMap<String, String> {
    let body = String::from_utf8_lossy(body);
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(&key.replace('+', " ")).ok()?.into_owned();
            let value = urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}

/// Compare the media type essence, ignoring case and parameters
fn is_form_content_type(headers: &HeaderMap) -> bool {
    header_str(headers, header::CONTENT_TYPE)
        .and_then(|ct| ct.split(';').next().map(|essence| essence.trim().to_string()))
        .map(|essence| essence.eq_ignore_ascii_case(FORM_CONTENT_TYPE))
        .unwrap_or(false)
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, _)| *name == "sid")
        .map(|(_, value)| value.to_string())
}

fn text(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    respond(
        status,
        "text/plain; charset=utf-8",
        Bytes::from(format!("{}\n", message)),
    )
}

fn respond(status: StatusCode, content_type: &'static str, body: Bytes) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );
    response
}
