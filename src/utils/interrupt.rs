// file: src/utils/interrupt.rs
// description: races a running command against an interrupt signal
// reference: https://docs.rs/tokio/latest/tokio/macro.select.html

use std::future::Future;
use std::io;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Finished(T),
    Interrupted,
}

/// Waits for `command` unless `interrupt` resolves with `Ok(())` first.
/// An interrupt source that fails to register is ignored and the command
/// is awaited to completion.
pub async fn race_interrupt<T, C, I>(command: C, interrupt: I) -> Outcome<T>
where
    C: Future<Output = T>,
    I: Future<Output = io::Result<()>>,
{
    tokio::select! {
        out = command => Outcome::Finished(out),
        Ok(()) = interrupt => Outcome::Interrupted,
    }
}
