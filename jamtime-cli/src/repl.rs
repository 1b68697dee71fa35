// REPL implementation using editline with tokio spawn_blocking

use crate::display;
use editline::{LineEditor, terminals::StdioTerminal};
use jamtime_core::{Interpreter, Response};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// What the host does with one interpreter result.
///
/// Kept apart from the terminal loop so the transcript rules are testable.
pub fn render(result: Result<Response, jamtime_core::CommandError>) -> Option<String> {
    match result {
        Ok(Response::Display(text)) => Some(text),
        Ok(Response::Clear) => Some(format!("{}{}", display::CLEAR_SCREEN, display::banner())),
        // Blank lines are neither echoed nor answered
        Ok(Response::Empty) => None,
        Err(e) => Some(display::render_error(&e)),
    }
}

pub async fn run_repl(interp: Arc<Interpreter>) -> anyhow::Result<()> {
    println!();
    println!("{}", display::banner());
    println!("{}", display::zone_line(interp.zone()));
    println!("Press Ctrl-D to exit");

    // Create editline editor and terminal (sync)
    let mut editor = LineEditor::new(1024, 50);
    let mut terminal = StdioTerminal::new();

    loop {
        // Prompt carries a fresh clock reading
        print!("\n{}", display::prompt(&interp.refresh()));
        std::io::stdout().flush()?;

        // Read a line using editline in a blocking task
        let line_result = tokio::task::spawn_blocking(move || {
            let result = editor.read_line(&mut terminal);
            (editor, terminal, result)
        })
        .await?;

        let (ed, term, read_result) = line_result;
        editor = ed;
        terminal = term;

        match read_result {
            Ok(line) => {
                if let Some(text) = render(interp.execute(&line)) {
                    println!("{}", text);
                }
            }
            Err(editline::Error::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(editline::Error::Interrupted) => {
                // Ctrl-C - just continue
                println!("^C");
                continue;
            }
            Err(e) => {
                debug!(error = %e, "terminal input failed");
                return Err(anyhow::anyhow!("input error: {}", e));
            }
        }
    }

    Ok(())
}
