//! Shell server: serves the console page and the resolved URL set over plain HTTP/1.1.
//!
//! One thread per connection; the configuration is shared read-only.

use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use serde::Serialize;

use crate::config::ShellConfig;
use crate::http::{classify_endpoint, read_http_request, respond, Endpoint, HttpRequest, Method};
use crate::registry::{list_modules, ModuleDescriptor};
use crate::resolve::{ResolveMemo, ResolvedUrlSet};
use crate::shell::{render_shell, Selection};
use crate::surfaces::{list_surfaces, SurfaceDescriptor};

const READ_TIMEOUT_SECS: u64 = 10;

struct ServerCtx {
    config: ShellConfig,
    fallback_origin: String,
    memo: ResolveMemo,
}

#[derive(Serialize)]
struct ModulesPayload<'a> {
    #[serde(flatten)]
    resolved: &'a ResolvedUrlSet,
    descriptors: &'static [ModuleDescriptor],
    surface_descriptors: &'static [SurfaceDescriptor],
}

/// Page origin as the browser sees it: from the Host header, else the bound address.
fn page_origin(req: &HttpRequest, fallback: &str) -> String {
    match req.header("host").map(str::trim).filter(|h| !h.is_empty()) {
        Some(host) => format!("http://{host}"),
        None => fallback.to_string(),
    }
}

fn handle_connection(ctx: &ServerCtx, stream: &mut TcpStream) {
    let req = match read_http_request(stream) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("rejecting request: {e}");
            let _ = respond(
                stream,
                "400 Bad Request",
                "text/plain; charset=utf-8",
                b"bad request\n",
                true,
            );
            return;
        }
    };

    let include_body = match &req.method {
        Method::Get => true,
        Method::Head => false,
        Method::Other(m) => {
            tracing::debug!(method = %m, path = %req.path, "method not allowed");
            let _ = respond(
                stream,
                "405 Method Not Allowed",
                "text/plain; charset=utf-8",
                b"method not allowed\n",
                true,
            );
            return;
        }
    };

    let result = match classify_endpoint(&req.path) {
        Some(Endpoint::Shell) => {
            let origin = page_origin(&req, &ctx.fallback_origin);
            let set = ctx.memo.get(&ctx.config, &origin);
            let sel = Selection::from_query(&req.query);
            tracing::info!(module = %sel.module, surface = %sel.surface, "render shell");
            let page = render_shell(&set, sel);
            respond(
                stream,
                "200 OK",
                "text/html; charset=utf-8",
                page.as_bytes(),
                include_body,
            )
        }
        Some(Endpoint::ModulesApi) => {
            let origin = page_origin(&req, &ctx.fallback_origin);
            let set = ctx.memo.get(&ctx.config, &origin);
            let payload = ModulesPayload {
                resolved: &set,
                descriptors: list_modules(),
                surface_descriptors: list_surfaces(),
            };
            match serde_json::to_vec_pretty(&payload) {
                Ok(body) => respond(
                    stream,
                    "200 OK",
                    "application/json",
                    &body,
                    include_body,
                ),
                Err(e) => {
                    tracing::error!("serializing module set failed: {e}");
                    respond(
                        stream,
                        "500 Internal Server Error",
                        "text/plain; charset=utf-8",
                        b"internal error\n",
                        true,
                    )
                }
            }
        }
        Some(Endpoint::Health) => respond(
            stream,
            "200 OK",
            "text/plain; charset=utf-8",
            b"ok\n",
            include_body,
        ),
        None => respond(
            stream,
            "404 Not Found",
            "text/plain; charset=utf-8",
            b"not found\n",
            include_body,
        ),
    };
    if let Err(e) = result {
        tracing::debug!(path = %req.path, "write failed: {e}");
    }
}

/// Running server; stops accepting when `stop()` is called or the handle is dropped.
pub struct ShellServer {
    addr: SocketAddr,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ShellServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    /// Block until the accept loop exits.
    pub fn join(mut self) {
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }

    fn shutdown(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

impl Drop for ShellServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Bind `bind` and serve in a background thread.
pub fn start_server(config: ShellConfig, bind: &str) -> io::Result<ShellServer> {
    let listener = TcpListener::bind(bind).map_err(|e| {
        io::Error::new(e.kind(), format!("bind {bind} failed: {e}"))
    })?;
    let addr = listener.local_addr()?;
    listener.set_nonblocking(true)?;

    let ctx = Arc::new(ServerCtx {
        config,
        fallback_origin: format!("http://{addr}"),
        memo: ResolveMemo::new(),
    });
    let running = Arc::new(AtomicBool::new(true));
    let running_cl = running.clone();

    let handle = std::thread::spawn(move || {
        tracing::info!(%addr, "shell server listening");
        loop {
            if !running_cl.load(Ordering::SeqCst) {
                break;
            }
            let (stream, peer) = match listener.accept() {
                Ok(pair) => pair,
                Err(e) => {
                    if e.kind() != io::ErrorKind::WouldBlock {
                        tracing::warn!("accept error: {e}");
                    }
                    std::thread::sleep(Duration::from_millis(50));
                    continue;
                }
            };
            let _ = stream.set_nonblocking(false);
            let _ = stream.set_read_timeout(Some(Duration::from_secs(READ_TIMEOUT_SECS)));
            let ctx_cl = ctx.clone();
            std::thread::spawn(move || {
                tracing::trace!(%peer, "connection");
                let mut s = stream;
                handle_connection(&ctx_cl, &mut s);
            });
        }
        tracing::info!("shell server stopped");
    });

    Ok(ShellServer {
        addr,
        running,
        handle: Some(handle),
    })
}
