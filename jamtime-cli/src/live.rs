// Live clock mode: redraws one status line on every refresh tick

use crate::display;
use crate::ticker::RefreshTimer;
use jamtime_core::Interpreter;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

// Overwrite the current terminal line with `line`
fn draw<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    write!(out, "{}{}", display::REDRAW, line)?;
    out.flush()
}

pub async fn run_clock(interp: Arc<Interpreter>, period: Duration) -> anyhow::Result<()> {
    println!("{}", display::banner());
    println!("{}", display::zone_line(interp.zone()));
    println!("Press Ctrl-C to exit");
    println!();

    // Once stdout fails (closed pipe) further redraws are skipped
    let mut output_closed = false;
    let timer = RefreshTimer::start(period, move || {
        if output_closed {
            return;
        }
        let line = display::status_line(&interp.refresh());
        if let Err(e) = draw(&mut io::stdout().lock(), &line) {
            debug!(error = %e, "live clock output failed, no longer redrawing");
            output_closed = true;
        }
    });

    debug!(period_ms = timer.period().as_millis() as u64, "live clock running");

    // The timer is dropped on both the Ok and the Err path
    let result = tokio::signal::ctrl_c().await;
    timer.stop();
    println!();

    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_draw_overwrites_line() {
        let mut out = Vec::new();
        draw(&mut out, "Slot 1").unwrap();
        assert_eq!(out, format!("{}Slot 1", display::REDRAW).into_bytes());
    }

    #[test]
    fn test_draw_reports_closed_output() {
        let err = draw(&mut ClosedPipe, "Slot 1").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
