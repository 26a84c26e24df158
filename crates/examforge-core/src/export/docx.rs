//! `.docx` rendering.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow,
};

use super::{Block, ExportDocument};
use crate::{Error, Result, TRACING_TARGET_EXPORT};

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn table_cell(text: &str, bold: bool) -> TableCell {
    let run = Run::new().add_text(text);
    let run = if bold { run.bold() } else { run };
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}

fn table(header: &[String; 2], rows: &[[String; 2]]) -> Table {
    let header_row = TableRow::new(header.iter().map(|h| table_cell(h, true)).collect());
    let body = rows
        .iter()
        .map(|row| TableRow::new(row.iter().map(|c| table_cell(c, false)).collect()));
    Table::new(std::iter::once(header_row).chain(body).collect())
}

impl ExportDocument {
    /// Renders the document as `.docx` bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        let mut docx = Docx::new()
            .add_style(
                Style::new(TITLE_STYLE, StyleType::Paragraph)
                    .name("Title")
                    .size(44)
                    .bold(),
            )
            .add_style(
                Style::new(HEADING_STYLE, StyleType::Paragraph)
                    .name("Heading 1")
                    .size(32)
                    .bold(),
            )
            .add_paragraph(
                text_paragraph(&self.title)
                    .style(TITLE_STYLE)
                    .align(AlignmentType::Center),
            );

        for section in &self.sections {
            docx = docx.add_paragraph(text_paragraph(&section.heading).style(HEADING_STYLE));
            for block in &section.blocks {
                docx = match block {
                    Block::Paragraph(text) => docx.add_paragraph(text_paragraph(text)),
                    Block::Bullet(text) => docx.add_paragraph(text_paragraph(&format!("  • {text}"))),
                    Block::Table { header, rows } => docx.add_table(table(header, rows)),
                };
            }
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build().pack(&mut buffer).map_err(|err| {
            Error::internal()
                .with_message("failed to write docx archive")
                .with_source(err)
        })?;

        let bytes = buffer.into_inner();
        tracing::debug!(
            target: TRACING_TARGET_EXPORT,
            title = %self.title,
            size = bytes.len(),
            "rendered docx"
        );
        Ok(bytes)
    }
}
