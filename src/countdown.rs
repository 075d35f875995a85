use std::{io::Write, time::Duration};

pub fn format_remaining(seconds: u64) -> String {
    let hrs = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{hrs}h {mins}m {secs}s")
}

/// Blocks the cycle for `seconds`, redrawing the remaining time on stdout every second.
pub async fn countdown(seconds: u64) {
    countdown_to(seconds, &mut std::io::stdout()).await
}

/// A broken display is reported once; the wait itself always runs to the end.
pub async fn countdown_to(seconds: u64, out: &mut impl Write) {
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let mut display_ok = true;

    for remaining in (0..=seconds).rev() {
        ticker.tick().await;

        if display_ok {
            if let Err(e) = redraw(out, remaining) {
                tracing::warn!("Countdown display unavailable: {e}");
                display_ok = false;
            }
        }
    }

    if display_ok {
        let _ = writeln!(out).and_then(|_| out.flush());
    }
}

fn redraw(out: &mut impl Write, remaining: u64) -> std::io::Result<()> {
    write!(out, "\rTime until next cycle: {} ", format_remaining(remaining))?;
    out.flush()
}
