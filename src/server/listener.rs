use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::{Config, ServerConfig};
use crate::files::StaticHandler;
use crate::http::connection::Connection;

/// Binds the listening socket and serves connections until an accept fault.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server)?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg.clone()).await
}

/// Binds a listening socket with the configured backlog.
pub fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = cfg
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address {}", cfg.listen_addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.bind(addr)?;

    Ok(socket.listen(cfg.backlog)?)
}

/// Accepts and services connections strictly one at a time.
///
/// Each connection is fully serviced and closed before the next accept.
/// Connection-level faults are logged and do not stop the loop; accept
/// faults propagate and terminate the server.
pub async fn serve(listener: TcpListener, cfg: Config) -> anyhow::Result<()> {
    let handler = StaticHandler::new(&cfg.static_files)?;

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, &handler, cfg.server.max_request_bytes);
        if let Err(e) = conn.run().await {
            error!("Connection error from {}: {}", peer, e);
        }
    }
}
