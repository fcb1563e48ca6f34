//! reckon - a stack calculator that can take it back
//!
//! Usage:
//!   reckon              Start interactive REPL
//!   reckon -c "expr"    Evaluate a single line
//!   reckon calc.rk      Execute a script file

use reckon::display::format_number;
use reckon::{lex, parse, Evaluator};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper, Result as RlResult};
use std::borrow::Cow;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        r#"reckon-{} A stack calculator that can take it back

USAGE:
    reckon                  Start interactive REPL
    reckon -c <expr>        Evaluate a single line
    reckon <file>           Execute a script file
    reckon --help           Show this help message
    reckon --version        Show version

INPUT:
    42  -3  2.5  1e6        Numbers push themselves onto the stack
    + add                   Pop two values, push their sum
    - sub                   Subtract the top value from the one beneath it
    * mul                   Multiply the top two values
    / div                   Divide the top value by the one beneath it
    undo                    Reverse the most recent operation
    redo                    Re-apply the most recently undone operation
    pop                     Discard the top value
    # comment               Ignored to end of line

HISTORY:
    Every operation records the operands it consumed. undo pushes them
    back (most recent pop on top); redo runs the same operation forward
    again. A fresh operation clears the redo chain; plain pushes and
    pops do not.

REPL COMMANDS:
    .help, .h               Show this help
    .stack, .s              Show the operand stack
    .pop, .p                Pop and show the top value
    .clear, .c              Reset the calculator (stack and history)
    .history                Show undo/redo depths
    .trace                  Toggle instruction tracing
    exit, quit              Exit the REPL

STARTUP:
    ~/.reckon_history       Line history (loaded and saved)
    RECKON_BANNER=1         Show startup banner (quiet by default)
    RECKON_TRACE=1          Start with instruction tracing on

EXAMPLES:
    2 3 +                   # 5
    10 3 -                  # 7
    2 10 /                  # 5
    5 3 + 2 *               # 16
    2 3 + pop undo          # 2 3 back on the stack
    redo                    # 5 again
"#,
        VERSION
    );
}

fn print_version() {
    println!("reckon-{}", VERSION);
}

/// Execute a single line of reckon input
fn execute_line(eval: &mut Evaluator, input: &str, print_output: bool) -> Result<(), String> {
    let tokens = lex(input).map_err(|e| e.to_string())?;

    // Empty input is OK
    if tokens.is_empty() {
        return Ok(());
    }

    let program = parse(tokens).map_err(|e| e.to_string())?;
    let result = eval.eval(&program).map_err(|e| e.to_string())?;

    if print_output && !result.output.is_empty() {
        println!("{}", result.output);
    }

    Ok(())
}

/// Shared state between the REPL loop and the rustyline helper
struct SharedState {
    /// Copy of the operand stack for the live hint
    stack: Vec<f64>,
}

impl SharedState {
    fn new() -> Self {
        SharedState { stack: Vec::new() }
    }
}

/// Helper struct for rustyline with live stack display and tab completion
struct ReckonHelper {
    state: Arc<Mutex<SharedState>>,
    words: HashSet<&'static str>,
}

impl Helper for ReckonHelper {}

impl Completer for ReckonHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Find the word being completed
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        let prefix = &line[start..pos];

        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }

        let mut completions: Vec<String> = self
            .words
            .iter()
            .filter(|w| w.starts_with(prefix))
            .map(|w| w.to_string())
            .collect();
        completions.sort();

        let pairs: Vec<Pair> = completions
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();

        Ok((start, pairs))
    }
}

/// Instruction words and REPL commands for tab completion
fn default_words() -> HashSet<&'static str> {
    [
        // Instruction words
        "add", "sub", "mul", "div", "undo", "redo", "pop",
        // REPL commands
        ".help", ".stack", ".pop", ".clear", ".history", ".trace",
        "exit", "quit",
    ]
    .into_iter()
    .collect()
}

impl Hinter for ReckonHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        // Show the stack as a hint below the input
        if let Ok(state) = self.state.lock() {
            if state.stack.is_empty() {
                return None;
            }
            let items: Vec<String> = state
                .stack
                .iter()
                .map(|n| {
                    let s = format_number(*n);
                    if s.len() > 20 {
                        format!("{}...", &s[..17])
                    } else {
                        s
                    }
                })
                .collect();
            Some(format!("\n {}", items.join(", ")))
        } else {
            None
        }
    }
}

impl Highlighter for ReckonHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }

    fn highlight_char(&self, _line: &str, _pos: usize) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        // Dim the stack hint
        Cow::Owned(format!("\x1b[90m{}\x1b[0m", hint))
    }
}

impl Validator for ReckonHelper {}

/// Execute a script file
fn execute_script(path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut eval = Evaluator::new();

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // The stack persists between lines - a calculation may span them
        if let Err(e) = execute_line(&mut eval, trimmed, true) {
            eprintln!("Error at line {}: {}", line_num + 1, e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Get home directory
fn dirs_home() -> Option<std::path::PathBuf> {
    env::var_os("HOME").map(std::path::PathBuf::from)
}

/// Parse command-line arguments
struct CliArgs {
    command: Option<String>,
    script: Option<String>,
    help: bool,
    version: bool,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        command: None,
        script: None,
        help: false,
        version: false,
    };

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    // Evaluate a single expression
    if let Some(cmd) = cli.command {
        return execute_command(&cmd);
    }

    // Execute script
    if let Some(script) = cli.script {
        return execute_script(&script);
    }

    // Start REPL
    match run_repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate a single expression and exit
fn execute_command(cmd: &str) -> ExitCode {
    let mut eval = Evaluator::new();

    match execute_line(&mut eval, cmd, true) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the interactive REPL
fn run_repl() -> RlResult<()> {
    let mut rl = Editor::new()?;

    // Shared state for the live stack hint
    let shared_state = Arc::new(Mutex::new(SharedState::new()));

    rl.set_helper(Some(ReckonHelper {
        state: Arc::clone(&shared_state),
        words: default_words(),
    }));

    let mut eval = Evaluator::new();

    // Try to load history
    let history_path = dirs_home().map(|h| h.join(".reckon_history"));
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    // Show banner only if RECKON_BANNER is set
    if env::var("RECKON_BANNER").is_ok() {
        println!("reckon-{} postfix arithmetic with undo/redo", VERSION);
        println!("  Type 'exit' or Ctrl-D to quit, '.help' for usage");
    }

    let prompt_normal = format!("reckon-{}> ", VERSION);
    let prompt_stack = format!("reckon-{}= ", VERSION); // Stack has items

    loop {
        // Sync evaluator stack into the hint state
        {
            let mut state = shared_state.lock().unwrap();
            state.stack = eval.stack().to_vec();
        }

        let prompt = if eval.stack().is_empty() {
            &prompt_normal
        } else {
            &prompt_stack
        };

        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(trimmed);

                // Handle built-in REPL commands (dot-prefix)
                match trimmed {
                    "exit" | "quit" => break,
                    ".help" | ".h" => {
                        print_help();
                        continue;
                    }
                    ".stack" | ".s" => {
                        let items: Vec<String> =
                            eval.stack().iter().map(|n| format_number(*n)).collect();
                        println!("Stack: [{}]", items.join(", "));
                        continue;
                    }
                    ".pop" | ".p" => {
                        // Pop and display top of stack
                        if let Some(value) = eval.pop_value() {
                            println!("{}", format_number(value));
                        } else {
                            println!("Stack empty");
                        }
                        continue;
                    }
                    ".clear" | ".c" => {
                        // Reset the calculator - stack and both histories
                        eval.reset();
                        continue;
                    }
                    ".history" => {
                        println!(
                            "History: {} undo, {} redo",
                            eval.undo_depth(),
                            eval.redo_depth()
                        );
                        continue;
                    }
                    ".trace" => {
                        let enabled = !eval.trace_mode();
                        eval.set_trace_mode(enabled);
                        println!("Trace mode {}", if enabled { "on" } else { "off" });
                        continue;
                    }
                    _ => {}
                }

                // Execute the line
                if let Err(e) = execute_line(&mut eval, trimmed, true) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - drop the pending line, keep the stack
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}
