// crates/arsenal-cli/src/stdin.rs - STDIN fallback for positional input
//
// Follows Unix conventions: read from stdin when no positional arg is given.

use anyhow::{Result, bail};
use std::io::{self, IsTerminal, Read};

/// Read input from stdin or use provided argument
///
/// ```bash
/// arsenal search nmap
/// echo nmap | arsenal search
/// ```
pub fn read_input_or_stdin(arg: Option<&str>) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value.to_string());
    }

    if io::stdin().is_terminal() {
        bail!(
            "No input provided. Either provide an argument or pipe input.\n\nExamples:\n  arsenal search nmap\n  echo nmap | arsenal search"
        );
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer.trim().to_string())
}
