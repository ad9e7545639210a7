//! Minimal single-purpose PDF writer for the daily order report.
//!
//! Produces an A4 document with a title, a subtitle and a grid table,
//! paginated when the rows overflow a page. Text uses the built-in
//! Helvetica Type1 font, so only Latin-1 characters render; anything
//! outside is replaced with `?`.

use std::fmt::Write as _;

const PAGE_W: f64 = 595.0;
const PAGE_H: f64 = 842.0;
const MARGIN: f64 = 40.0;
const ROW_H: f64 = 18.0;
const TITLE_SIZE: f64 = 20.0;
const SUBTITLE_SIZE: f64 = 10.0;
const CELL_SIZE: f64 = 9.0;
// Amber header fill, matching the app accent color.
const HEADER_FILL: &str = "0.85 0.46 0.02";

/// A tabular report: title, subtitle and a grid of text cells.
pub struct PdfReport {
    pub title: String,
    pub subtitle: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PdfReport {
    /// Renders the whole document.
    pub fn to_bytes(&self) -> Vec<u8> {
        // First page leaves room for title and subtitle.
        let first_top = PAGE_H - 82.0;
        let later_top = PAGE_H - MARGIN;
        let first_capacity = rows_fitting(first_top).saturating_sub(1);
        let later_capacity = rows_fitting(later_top).saturating_sub(1);

        let mut chunks: Vec<&[Vec<String>]> = Vec::new();
        if self.rows.len() <= first_capacity {
            chunks.push(&self.rows);
        } else {
            let (first, mut rest) = self.rows.split_at(first_capacity);
            chunks.push(first);
            while rest.len() > later_capacity {
                let (page, tail) = rest.split_at(later_capacity);
                chunks.push(page);
                rest = tail;
            }
            chunks.push(rest);
        }

        // Objects: 1 catalog, 2 page tree, 3 font, then (page, content) per
        // page.
        let mut objects: Vec<Vec<u8>> = Vec::new();
        let kids: Vec<String> = (0..chunks.len())
            .map(|i| format!("{} 0 R", 4 + 2 * i))
            .collect();
        objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
        objects.push(
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                chunks.len()
            )
            .into_bytes(),
        );
        objects.push(b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_vec());

        for (i, chunk) in chunks.iter().enumerate() {
            let top = if i == 0 { first_top } else { later_top };
            let content = self.page_content(chunk, top, i == 0);
            let content_id = 5 + 2 * i;
            objects.push(
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_W} {PAGE_H}] \
                     /Resources << /Font << /F1 3 0 R >> >> /Contents {content_id} 0 R >>"
                )
                .into_bytes(),
            );
            let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            stream.extend_from_slice(&content);
            stream.extend_from_slice(b"\nendstream");
            objects.push(stream);
        }

        assemble(objects)
    }

    fn page_content(&self, rows: &[Vec<String>], table_top: f64, first_page: bool) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        let cols = self.headers.len().max(1);
        let table_w = PAGE_W - 2.0 * MARGIN;
        let col_w = table_w / cols as f64;

        if first_page {
            push_text(&mut out, MARGIN, PAGE_H - 42.0, TITLE_SIZE, "0 0 0", &self.title);
            push_text(
                &mut out,
                MARGIN,
                PAGE_H - 62.0,
                SUBTITLE_SIZE,
                "0.25 0.25 0.25",
                &self.subtitle,
            );
        }

        // Header row: filled background, white labels.
        let mut ops = String::new();
        let _ = writeln!(
            ops,
            "{} rg\n{} {} {} {} re f",
            HEADER_FILL,
            MARGIN,
            table_top - ROW_H,
            table_w,
            ROW_H
        );
        out.extend_from_slice(ops.as_bytes());
        for (c, header) in self.headers.iter().enumerate() {
            push_text(
                &mut out,
                MARGIN + c as f64 * col_w + 4.0,
                table_top - 13.0,
                CELL_SIZE,
                "1 1 1",
                header,
            );
        }

        for (r, row) in rows.iter().enumerate() {
            let row_top = table_top - ROW_H * (r + 1) as f64;
            for (c, cell) in row.iter().take(cols).enumerate() {
                push_text(
                    &mut out,
                    MARGIN + c as f64 * col_w + 4.0,
                    row_top - 13.0,
                    CELL_SIZE,
                    "0 0 0",
                    cell,
                );
            }
        }

        // Grid lines over header + rows.
        let bottom = table_top - ROW_H * (rows.len() + 1) as f64;
        let mut grid = String::from("0.6 G 0.5 w\n");
        for r in 0..=(rows.len() + 1) {
            let y = table_top - ROW_H * r as f64;
            let _ = writeln!(grid, "{MARGIN} {y} m {} {y} l S", MARGIN + table_w);
        }
        for c in 0..=cols {
            let x = MARGIN + c as f64 * col_w;
            let _ = writeln!(grid, "{x} {table_top} m {x} {bottom} l S");
        }
        out.extend_from_slice(grid.as_bytes());
        out
    }
}

fn rows_fitting(table_top: f64) -> usize {
    ((table_top - MARGIN) / ROW_H).floor() as usize
}

/// One `BT … Tj ET` text run. The string goes through [`append_escaped`].
fn push_text(out: &mut Vec<u8>, x: f64, y: f64, size: f64, color: &str, text: &str) {
    out.extend_from_slice(format!("BT /F1 {size} Tf {color} rg {x} {y} Td (").as_bytes());
    append_escaped(out, text);
    out.extend_from_slice(b") Tj ET\n");
}

/// Escapes a string into PDF literal-string bytes. Characters above U+00FF
/// have no slot in the standard font encoding and become `?`.
fn append_escaped(out: &mut Vec<u8>, text: &str) {
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            '\n' | '\r' => out.push(b' '),
            c if (c as u32) <= 0xFF => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
}

/// Serializes numbered objects, the xref table and the trailer.
fn assemble(objects: Vec<Vec<u8>>) -> Vec<u8> {
    let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets: Vec<usize> = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
        out.extend_from_slice(body);
        out.extend_from_slice(b"\nendobj\n");
    }
    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(rows: usize) -> PdfReport {
        PdfReport {
            title: "Kebab Order Report".into(),
            subtitle: "Orders for: 2024-01-05".into(),
            headers: ["Imie", "Typ", "Rozmiar", "Sos", "Mieso"]
                .map(String::from)
                .to_vec(),
            rows: (0..rows)
                .map(|i| {
                    vec![
                        format!("Customer {i}"),
                        "Pita".into(),
                        "XL".into(),
                        "Ostry".into(),
                        "Kurczak".into(),
                    ]
                })
                .collect(),
        }
    }

    #[test]
    fn document_has_pdf_framing() {
        let bytes = report(3).to_bytes();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("(Kebab Order Report)"));
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn long_reports_paginate() {
        let bytes = report(100).to_bytes();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 3"));
        assert!(text.contains("4 0 R 6 0 R 8 0 R"));
    }

    #[test]
    fn escapes_literal_string_delimiters() {
        let mut out = Vec::new();
        append_escaped(&mut out, r"a(b)c\d");
        assert_eq!(out, br"a\(b\)c\\d");
    }

    #[test]
    fn replaces_characters_outside_the_font_encoding() {
        let mut out = Vec::new();
        append_escaped(&mut out, "Łukasz ó");
        // Ł is outside Latin-1, ó is inside.
        assert_eq!(out, [b'?', b'u', b'k', b'a', b's', b'z', b' ', 0xF3]);
    }

    #[test]
    fn xref_counts_every_object() {
        let bytes = report(1).to_bytes();
        let text = String::from_utf8_lossy(&bytes);
        // catalog + pages + font + one page + one content stream
        assert!(text.contains("xref\n0 6\n"));
        assert!(text.contains("/Size 6"));
    }
}
