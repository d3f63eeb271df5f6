//! Line-by-line pairing of an input file with the output it produced.

use std::fs;
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonTable {
    pub rows: Vec<(String, String)>,
}

impl ComparisonTable {
    /// Pairs line `i` of `input` with line `i` of `output`. The shorter side is
    /// padded with empty cells; no verdict is computed.
    pub fn from_lines<I, O>(input: I, output: O) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        let mut input = input.into_iter();
        let mut output = output.into_iter();
        let mut rows = Vec::new();
        loop {
            let (left, right) = match (input.next(), output.next()) {
                (None, None) => break,
                (l, r) => (cell(l), cell(r)),
            };
            rows.push((left, right));
        }
        Self { rows }
    }

    /// Both files are read after the run has finished writing.
    pub fn from_files(input: &Path, output: &Path) -> Result<Self> {
        let input = read_lossy(input)?;
        let output = read_lossy(output)?;
        Ok(Self::from_lines(input.lines(), output.lines()))
    }
}

fn cell<S: AsRef<str>>(line: Option<S>) -> String {
    line.map(|l| l.as_ref().trim_end().to_string()).unwrap_or_default()
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
