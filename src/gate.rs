//! Pre-run confirmation gate.
//!
//! The backup core only needs a proceed/decline signal; this module turns an
//! interactive y/N prompt (with an optional timeout) into that signal.
//! Declining is the default: an empty answer, anything other than `y`, or a
//! timeout leaves the batch unrun.

use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Decline,
}

fn parse_answer(answer: &str) -> Decision {
    if answer.trim().eq_ignore_ascii_case("y") {
        Decision::Proceed
    } else {
        Decision::Decline
    }
}

/// Prompts on stdout and reads one line from stdin. With a timeout, an
/// unanswered prompt declines.
pub async fn confirm(prompt: &str, timeout: Option<Duration>) -> Result<Decision> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let read_line = tokio::task::spawn_blocking(|| {
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).map(|_| input)
    });

    let answer = match timeout {
        Some(limit) => match tokio::time::timeout(limit, read_line).await {
            Ok(joined) => joined.context("stdin reader panicked")??,
            Err(_) => {
                println!();
                return Ok(Decision::Decline);
            }
        },
        None => read_line.await.context("stdin reader panicked")??,
    };

    Ok(parse_answer(&answer))
}
