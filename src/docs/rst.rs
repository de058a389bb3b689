//! reST output primitives: section titles, paragraphs and grid tables.

use std::io::Write;

use super::generator::DocsError;

/// Raw HTML substitutions referenced by translated help texts.
pub const PREAMBLE: &str = r"
.. |br| raw:: html

   <br />

.. |bstart| raw:: html

   <b>

.. |bend| raw:: html

   </b>

.. |istart| raw:: html

   <i>

.. |iend| raw:: html

   </i>

.. |listart| raw:: html

   <li>

.. |liend| raw:: html

   </li>

.. |ulstart| raw:: html

   <ul>

.. |ulend| raw:: html

   </ul>

.. |pstart| raw:: html

   <p>

.. |pend| raw:: html

   </p>

";

/// reST section levels used by the plugins document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLevel {
    /// Document title.
    Title,
    /// Plugin category.
    Category,
    /// Single plugin.
    Plugin,
    /// Part of a plugin entry (description, parameters, snippet).
    Part,
}

impl SectionLevel {
    /// Character used to underline titles of this level.
    pub fn underline(self) -> char {
        match self {
            SectionLevel::Title => '=',
            SectionLevel::Category => '-',
            SectionLevel::Plugin => '^',
            SectionLevel::Part => '"',
        }
    }
}

/// Append-only reST output stream.
pub struct DocumentWriter<W: Write> {
    out: W,
}

impl<W: Write> DocumentWriter<W> {
    /// Wraps an output stream.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes a section title, its underline and a blank line.
    ///
    /// # Errors
    /// Returns `DocsError::Io` if the underlying stream fails.
    pub fn section(&mut self, title: &str, level: SectionLevel) -> Result<(), DocsError> {
        let underline: String = std::iter::repeat_n(level.underline(), title.chars().count())
            .collect();
        writeln!(self.out, "{title}\n{underline}\n")?;
        Ok(())
    }

    /// Writes `text` followed by a blank line.
    ///
    /// # Errors
    /// Returns `DocsError::Io` if the underlying stream fails.
    pub fn paragraph(&mut self, text: &str) -> Result<(), DocsError> {
        writeln!(self.out, "{text}\n")?;
        Ok(())
    }

    /// Writes `text` as is, followed by a newline.
    ///
    /// # Errors
    /// Returns `DocsError::Io` if the underlying stream fails.
    pub fn line(&mut self, text: &str) -> Result<(), DocsError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Writes `text` verbatim.
    ///
    /// # Errors
    /// Returns `DocsError::Io` if the underlying stream fails.
    pub fn raw(&mut self, text: &str) -> Result<(), DocsError> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Flushes the underlying stream.
    ///
    /// # Errors
    /// Returns `DocsError::Io` if the underlying stream fails.
    pub fn flush(&mut self) -> Result<(), DocsError> {
        self.out.flush()?;
        Ok(())
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Renders rows as a reST grid table.
///
/// Cells are trimmed and may span several lines. Each column is at least
/// two characters wider than its header.
pub fn grid_table(headers: &[&str], rows: &[Vec<&str>]) -> String {
    let header_cells: Vec<Vec<&str>> = headers.iter().map(|h| cell_lines(h)).collect();
    let body: Vec<Vec<Vec<&str>>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell_lines(cell)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            body.iter()
                .filter_map(|row| row.get(column))
                .flat_map(|lines| lines.iter().map(|line| line.chars().count()))
                .fold(header.chars().count() + 2, usize::max)
        })
        .collect();

    let mut lines = vec![border(&widths, '-')];
    lines.extend(row_lines(&header_cells, &widths));
    lines.push(border(&widths, '='));

    for row in &body {
        lines.extend(row_lines(row, &widths));
        lines.push(border(&widths, '-'));
    }

    lines.join("\n")
}

fn cell_lines(cell: &str) -> Vec<&str> {
    cell.trim().split('\n').collect()
}

fn border(widths: &[usize], fill: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| std::iter::repeat_n(fill, width + 2).collect())
        .collect();
    format!("+{}+", segments.join("+"))
}

fn row_lines(cells: &[Vec<&str>], widths: &[usize]) -> Vec<String> {
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|index| {
            let padded: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(column, &width)| {
                    let text = cells
                        .get(column)
                        .and_then(|lines| lines.get(index))
                        .copied()
                        .unwrap_or("");
                    format!("{text:<width$}")
                })
                .collect();
            format!("| {} |", padded.join(" | "))
        })
        .collect()
}
