use std::io::{self, BufRead, Write};

use crate::{
    Session,
    diagnostics::{dump_ast, dump_tokens},
};

/// Presentation settings of the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text written before each line is read.
    pub prompt:      String,
    /// Print the token sequence of every line.
    pub show_tokens: bool,
    /// Print the syntax tree of every line.
    pub show_ast:    bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { prompt:      ">".to_string(),
               show_tokens: false,
               show_ast:    false, }
    }
}

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reads lines from `input` until end of input or `:quit`.
///
/// Every line is handled by [`handle_line`]. Only I/O failures end the loop
/// early; language errors are reported and the loop moves on. Bytes that are
/// not valid UTF-8 are replaced with U+FFFD, which the lexer then rejects
/// like any other unrecognized character.
///
/// # Example
/// ```
/// use iodine::{Session, repl::{ReplConfig, run}};
///
/// let mut session = Session::new();
/// let mut output = Vec::new();
/// let config = ReplConfig { prompt: String::new(), ..ReplConfig::default() };
///
/// run(&mut session, "x = 4\nx / 0\nx * 2\n".as_bytes(), &mut output, &config).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "4\nError: Division by zero.\n8\n");
/// ```
pub fn run<R, W>(session: &mut Session,
                 mut input: R,
                 output: &mut W,
                 config: &ReplConfig)
                 -> io::Result<()>
    where R: BufRead,
          W: Write
{
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);
        if handle_line(session, line, output, config)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Handles one input line and writes everything it produces.
///
/// Lines starting with `:` are meta commands:
/// - `:vars` lists the bindings as `name: kind = value`.
/// - `:reset` drops all bindings.
/// - `:quit` ends the loop.
///
/// Any other line goes through the pipeline. A blank line reports
/// `AST is empty`; otherwise the optional token and tree dumps are written
/// before the value. Failures are written as `Error: <message>`.
pub fn handle_line<W>(session: &mut Session,
                      line: &str,
                      output: &mut W,
                      config: &ReplConfig)
                      -> io::Result<Flow>
    where W: Write
{
    if let Some(command) = line.trim().strip_prefix(':') {
        return handle_command(session, command, output);
    }

    let (tokens, ast) = match session.parse_line(line) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "line rejected");
            writeln!(output, "Error: {e}")?;
            return Ok(Flow::Continue);
        },
    };

    let Some(root) = ast else {
        writeln!(output, "AST is empty")?;
        return Ok(Flow::Continue);
    };

    if config.show_tokens {
        write!(output, "{}", dump_tokens(&tokens))?;
    }
    if config.show_ast {
        write!(output, "{}", dump_ast(&root, session.environment()))?;
    }

    match session.evaluate(&root) {
        Ok(value) => writeln!(output, "{value}")?,
        Err(e) => {
            tracing::debug!(error = %e, "evaluation failed");
            writeln!(output, "Error: {e}")?;
        },
    }

    Ok(Flow::Continue)
}

fn handle_command<W>(session: &mut Session, command: &str, output: &mut W) -> io::Result<Flow>
    where W: Write
{
    match command.trim() {
        "quit" | "q" => return Ok(Flow::Quit),
        "reset" => {
            session.reset();
            writeln!(output, "Environment cleared")?;
        },
        "vars" => {
            for (name, value) in session.environment().iter() {
                writeln!(output, "{name}: {} = {value}", value.kind())?;
            }
        },
        other => writeln!(output, "Error: Unknown command ':{other}'.")?,
    }
    Ok(Flow::Continue)
}
