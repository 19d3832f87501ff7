//! Newline-delimited stdio transport.
//!
//! Each request line is handled on its own task; responses are funneled
//! through a single writer task so output lines never interleave.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use super::handler::McpHandler;
use super::protocol::{error_codes, JsonRpcResponse};

/// Serves requests from `reader` until EOF, writing responses to `writer`.
///
/// Returns once every in-flight request has written its response. Stops
/// reading early if the writer fails.
pub async fn serve<R, W>(handler: Arc<McpHandler>, reader: R, writer: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let writer_task = tokio::spawn(write_responses(writer, rx));

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut in_flight = JoinSet::new();

    let read_outcome: Result<()> = loop {
        buf.clear();
        let read = tokio::select! {
            read = reader.read_until(b'\n', &mut buf) => read,
            _ = tx.closed() => {
                warn!("response writer stopped, no longer reading requests");
                break Ok(());
            }
        };
        match read {
            Ok(0) => {
                info!("stdin closed (EOF), shutting down");
                break Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                break Err(anyhow::Error::new(e).context("stdin read error"));
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!("Failed to decode request: {}", e);
                let _ = tx.send(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: invalid UTF-8: {e}"),
                ));
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        debug!("Received: {}", line);

        let handler = Arc::clone(&handler);
        let tx = tx.clone();
        let line = line.to_string();
        in_flight.spawn(async move {
            if let Some(response) = handler.handle_line(&line).await {
                // A closed channel means the writer failed; that error is returned below.
                let _ = tx.send(response);
            }
        });

        while let Some(joined) = in_flight.try_join_next() {
            log_join_error(joined);
        }
    };

    while let Some(joined) = in_flight.join_next().await {
        log_join_error(joined);
    }
    drop(tx);

    let written = writer_task.await.context("response writer task failed")?;
    read_outcome?;
    written
}

async fn write_responses<W>(writer: W, mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut writer = BufWriter::new(writer);
    while let Some(response) = rx.recv().await {
        let json = serde_json::to_string(&response)?;
        debug!("Sending: {}", json);
        writer
            .write_all(json.as_bytes())
            .await
            .context("stdout write error")?;
        writer.write_all(b"\n").await.context("stdout write error")?;
        writer.flush().await.context("stdout flush error")?;
    }
    Ok(())
}

fn log_join_error(joined: Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        error!("request task failed: {}", e);
    }
}
