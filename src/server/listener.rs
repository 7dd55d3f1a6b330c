use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::files::{DocumentRoot, StaticHandler};
use crate::http::connection::Connection;
use crate::http::mime::MimeTable;

/// Builds the shared handler from config.
pub fn handler_from_config(cfg: &Config) -> anyhow::Result<StaticHandler> {
    let static_cfg = &cfg.static_files;
    let root = DocumentRoot::new(&static_cfg.root, static_cfg.index_file.clone())
        .with_context(|| format!("invalid document root {}", static_cfg.root.display()))?;
    let mime_types = MimeTable::with_extra(static_cfg.mime_types.clone());

    Ok(StaticHandler::new(root, mime_types))
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let handler = Arc::new(handler_from_config(cfg)?);

    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.listen_addr))?;
    info!(
        "Listening on {}, serving {}",
        cfg.server.listen_addr,
        handler.root().path().display()
    );

    serve(listener, handler, cfg.server.read_buffer_size).await
}

/// Accept loop. Each connection runs in its own task.
pub async fn serve(
    listener: TcpListener,
    handler: Arc<StaticHandler>,
    read_buffer_size: usize,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let handler = handler.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, handler, read_buffer_size);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
