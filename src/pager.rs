// ABOUTME: Sends long output through an external pager program.
// ABOUTME: Writes to the pager's stdin, closes it, then waits for exit.

use crate::error::{Error, Result};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Pipe `text` into the pager `argv[0]` with arguments `argv[1..]`.
///
/// The pager inherits stdout and stderr. Returns once it exits.
pub async fn page(argv: &[String], text: &str) -> Result<()> {
    let Some((program, args)) = argv.split_first() else {
        return Err(Error::Pager {
            program: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty pager command"),
        });
    };
    let pager_err = |source: std::io::Error| Error::Pager {
        program: program.clone(),
        source,
    };

    tracing::debug!("paging through {}", argv.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(pager_err)?;

    if let Some(mut stdin) = child.stdin.take() {
        // A pager quit early closes the pipe; that is not an error.
        match stdin.write_all(text.as_bytes()).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Err(e) => return Err(pager_err(e)),
        }
        drop(stdin);
    }

    let status = child.wait().await.map_err(pager_err)?;
    if !status.success() {
        tracing::debug!("pager exited with {}", status);
    }
    Ok(())
}
