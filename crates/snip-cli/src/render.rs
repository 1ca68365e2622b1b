// crates/snip-cli/src/render.rs - Terminal output helpers
//
// Shared presentation code for the command handlers: the metadata tables
// and syntax-highlighted snippet bodies. Styling degrades automatically
// when stdout is not a terminal (console drops colors, and code prints as
// plain text without the line-number gutter so pipes get the raw body).

use std::io::{self, IsTerminal};

use console::{Style, style};
use once_cell::sync::Lazy;
use snip_core::extension_for;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const THEME_NAME: &str = "base16-ocean.dark";

/// A fixed-width text table with a per-column color, in the spirit of the
/// usual terminal table output: bold title, bold header row, dim rule,
/// then rows padded to the widest cell in each column.
pub struct Table {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

struct Column {
    header: &'static str,
    style: Style,
}

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn add_column(&mut self, header: &'static str, style: Style) {
        self.columns.push(Column { header, style });
    }

    /// Cells must line up with the declared columns.
    pub fn add_row(&mut self, cells: Vec<String>) {
        debug_assert_eq!(cells.len(), self.columns.len());
        self.rows.push(cells);
    }

    pub fn print(&self) {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain([col.header.chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        println!("{}", style(&self.title).bold());

        let header = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| format!("{:<width$}", col.header, width = *w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", style(header).bold());

        let rule = widths
            .iter()
            .map(|w| "\u{2500}".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", style(rule).dim());

        for row in &self.rows {
            let line = row
                .iter()
                .zip(self.columns.iter().zip(&widths))
                .map(|(cell, (col, w))| {
                    col.style
                        .apply_to(format!("{:<width$}", cell, width = *w))
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join("  ");
            println!("{}", line);
        }
    }
}

/// Tags joined for table cells, with a placeholder for none.
pub fn join_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(", ")
    }
}

/// Print a snippet body. On a terminal the code is syntax-highlighted with
/// a dim line-number gutter; piped output gets the raw body so redirects
/// like `snip get x > x.py` stay clean.
pub fn print_code(code: &str, language: &str) {
    if io::stdout().is_terminal() {
        if let Some(theme) = THEME_SET.themes.get(THEME_NAME) {
            print_highlighted(code, language, theme);
            return;
        }
    }
    print!("{}", code);
    if !code.is_empty() && !code.ends_with('\n') {
        println!();
    }
}

fn print_highlighted(code: &str, language: &str, theme: &Theme) {
    // Token lookup covers canonical names and common aliases ("python",
    // "js"); the extension fallback catches aliases syntect has no token
    // for ("shell" resolves via .sh).
    let syntax = SYNTAX_SET
        .find_syntax_by_token(language)
        .or_else(|| {
            let ext = extension_for(language).trim_start_matches('.');
            SYNTAX_SET.find_syntax_by_extension(ext)
        })
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, theme);
    for (i, line) in LinesWithEndings::from(code).enumerate() {
        let gutter = style(format!("{:>4} \u{2502}", i + 1)).dim();
        match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => print!("{} {}", gutter, as_24_bit_terminal_escaped(&ranges, false)),
            Err(_) => print!("{} {}", gutter, line),
        }
    }
    // as_24_bit_terminal_escaped leaves the last color active.
    print!("\x1b[0m");
    if !code.ends_with('\n') {
        println!();
    }
}
