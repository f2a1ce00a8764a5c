//! Markdown output to the terminal, styled with termimad or plain.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either through a termimad skin or verbatim.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.quote_mark.set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::DarkCyan);

        Self { rich_enabled, skin }
    }

    /// Prints `markdown` to stdout, styled when rich output is enabled.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_to(&mut out, markdown)
            .and_then(|()| out.flush())
            .context("Failed to write to stdout")
    }

    /// Headers keep their leading hashes so plain and rich output share
    /// the same layout.
    fn write_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{markdown}");
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "\x1b[32m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(renderer: &TerminalRenderer, markdown: &str) -> String {
        let mut buffer = Vec::new();
        renderer.write_to(&mut buffer, markdown).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_plain_renderer_is_verbatim() {
        let renderer = TerminalRenderer::new(false);
        let markdown = "# Regular Weekend\n\n- **Hike** (`1`)\n";
        assert_eq!(render_to_string(&renderer, markdown), markdown);
    }

    #[test]
    fn test_rich_renderer_keeps_header_hashes() {
        let renderer = TerminalRenderer::new(true);
        let output = render_to_string(&renderer, "## Saturday\nNo events planned.\n");
        assert!(output.starts_with("\x1b[32m## Saturday\x1b[0m\n"));
        assert!(output.contains("No events planned."));
    }
}
