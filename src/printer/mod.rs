//! Printers: coloured status lines (owo-colors) and the comparison table (termimad).

use std::io;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use termimad::crossterm::style::Color;
use termimad::MadSkin;

use crate::comparison::ComparisonTable;
use crate::handlers::new::Scaffolded;

pub struct TextPrinter {
    pub color: Option<&'static str>,
}

impl TextPrinter {
    pub fn new(color: &'static str) -> Self {
        let color = io::stdout().is_terminal().then_some(color);
        Self { color }
    }

    pub fn print(&self, text: &str) {
        if let Some(c) = self.color {
            match c {
                "green" => println!("{}", text.green()),
                "cyan" => println!("{}", text.cyan()),
                "yellow" => println!("{}", text.yellow()),
                _ => println!("{}", text),
            }
        } else {
            println!("{}", text);
        }
    }
}

pub fn info(text: &str) {
    TextPrinter::new("cyan").print(text);
}

pub fn success(text: &str) {
    TextPrinter::new("green").print(text);
}

pub fn warn(text: &str) {
    TextPrinter::new("yellow").print(text);
}

pub fn error(text: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", text.red());
    } else {
        eprintln!("{}", text);
    }
}

/// One line per file a scaffold wrote.
pub fn created(made: &Scaffolded) {
    let paths = [Some(&made.solution), Some(&made.input), Some(&made.output), made.lint.as_ref()];
    for path in paths.into_iter().flatten() {
        info(&format!("Created {}", path.display()));
    }
}

pub struct TablePrinter {
    pub skin: MadSkin,
    pub width: usize,
}

impl Default for TablePrinter {
    fn default() -> Self {
        if io::stdout().is_terminal() {
            let mut skin = MadSkin::default();
            skin.bold.set_fg(Color::Green);
            let width = termimad::terminal_size().0 as usize;
            Self { skin, width }
        } else {
            Self { skin: MadSkin::no_style(), width: 100 }
        }
    }
}

impl TablePrinter {
    pub fn print(&self, table: &ComparisonTable) {
        print!("{}", self.render(table));
    }

    pub fn render(&self, table: &ComparisonTable) -> String {
        self.skin.text(&markdown(table), Some(self.width)).to_string()
    }
}

/// Two left-aligned columns under bold `Input`/`Output` headers.
pub fn markdown(table: &ComparisonTable) -> String {
    let mut md = String::from("|**Input**|**Output**|\n|:-|:-|\n");
    for (input, output) in &table.rows {
        md.push_str(&format!("|{}|{}|\n", escape(input), escape(output)));
    }
    md
}

fn escape(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len());
    for c in cell.chars() {
        match c {
            '\t' => out.push_str("    "),
            '\\' | '*' | '`' | '~' | '|' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
