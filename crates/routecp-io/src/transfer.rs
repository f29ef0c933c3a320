//! Streaming file transfer with single-fire completion
//!
//! The copy streams fixed-size chunks from a buffered reader into a writer
//! task, so file size is never bounded by available memory. Three
//! independent events can end a transfer: a read error, a write error, and
//! the writer's final flush. Whichever fires first decides the outcome; a
//! [`CompletionGate`] swallows the late arrivals.

use routecp_types::{Error, Result};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::sync::mpsc;
use tracing::debug;

/// Options controlling a single streaming transfer
#[derive(Debug, Clone)]
pub struct TransferOptions {
    /// Chunk size for read and write operations
    pub buffer_size: usize,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,
        }
    }
}

/// One-shot latch that lets exactly the first completion event through
#[derive(Debug, Default)]
struct CompletionGate(AtomicBool);

impl CompletionGate {
    /// Returns `true` for the first caller only
    fn try_fire(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }
}

/// Copy `source` to `target` byte for byte, returning the bytes written
///
/// Existing content at `target` is truncated silently. On failure the
/// error carries the **source** path and the underlying cause; bytes
/// already written to `target` are left in place (the copy is not atomic).
pub async fn copy_file(source: &Path, target: &Path, options: &TransferOptions) -> Result<u64> {
    let source_file = File::open(source)
        .await
        .map_err(|e| Error::copy_failed(source, e.to_string()))?;
    let target_file = File::create(target)
        .await
        .map_err(|e| Error::copy_failed(source, e.to_string()))?;

    debug!(
        "starting transfer: {} -> {}",
        source.display(),
        target.display()
    );

    let mut reader = BufReader::with_capacity(options.buffer_size, source_file);
    let (chunk_tx, mut chunk_rx) = mpsc::channel::<Vec<u8>>(4);
    let (done_tx, mut done_rx) = mpsc::channel::<std::io::Result<u64>>(1);
    let gate = Arc::new(CompletionGate::default());

    let writer_gate = Arc::clone(&gate);
    let writer_done = done_tx.clone();
    let writer_capacity = options.buffer_size;
    let writer = tokio::spawn(async move {
        let mut writer = BufWriter::with_capacity(writer_capacity, target_file);
        let mut bytes_written = 0u64;

        while let Some(chunk) = chunk_rx.recv().await {
            if let Err(error) = writer.write_all(&chunk).await {
                if writer_gate.try_fire() {
                    let _ = writer_done.send(Err(error)).await;
                }
                return;
            }
            bytes_written += chunk.len() as u64;
        }

        let outcome = writer.flush().await.map(|()| bytes_written);
        if writer_gate.try_fire() {
            let _ = writer_done.send(outcome).await;
        }
    });

    let mut buffer = vec![0u8; options.buffer_size];
    loop {
        match reader.read(&mut buffer).await {
            Ok(0) => break,
            Ok(bytes_read) => {
                // A dead writer has already fired the gate; its error wins.
                if chunk_tx.send(buffer[..bytes_read].to_vec()).await.is_err() {
                    break;
                }
            }
            Err(error) => {
                if gate.try_fire() {
                    let _ = done_tx.send(Err(error)).await;
                }
                break;
            }
        }
    }
    // Closing the chunk channel lets the writer flush and fire completion.
    drop(chunk_tx);
    drop(done_tx);

    let outcome = done_rx.recv().await;
    let _ = writer.await;

    match outcome {
        Some(Ok(bytes_copied)) => {
            debug!(
                "transfer complete: {} -> {} ({} bytes)",
                source.display(),
                target.display(),
                bytes_copied
            );
            Ok(bytes_copied)
        }
        Some(Err(error)) => Err(Error::copy_failed(source, error.to_string())),
        None => Err(Error::copy_failed(
            source,
            "transfer ended without a completion signal",
        )),
    }
}
