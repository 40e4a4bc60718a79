/* src/cli/core/src/ui.rs */

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Status line: colored glyph, then the message. `fail` and `warn` print to stderr.
fn mark(color: &str, glyph: char, msg: &str) -> String {
  format!("  {color}{glyph}{RESET} {msg}")
}

pub fn ok(msg: &str) {
  println!("{}", mark(GREEN, '\u{2713}', msg));
}

pub fn arrow(msg: &str) {
  println!("{}", mark(GREEN, '\u{2192}', msg));
}

pub fn fail(msg: &str) {
  eprintln!("{}", mark(RED, '\u{2717}', msg));
}

pub fn warn(msg: &str) {
  eprintln!("{}", mark(YELLOW, '!', msg));
}

/// Indented continuation under the previous status line.
pub fn detail(msg: &str) {
  println!("      {DIM}{msg}{RESET}");
}

pub fn banner(cmd: &str) {
  println!("\n  {BOLD}locale-router {cmd}{RESET} {DIM}v{}{RESET}\n", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mark_layout() {
    assert_eq!(mark(RED, '!', "bad"), "  \x1b[31m!\x1b[0m bad");
  }
}
