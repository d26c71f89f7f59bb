//! Downloadable PDF summary of a recommendation: a title, the generation time,
//! the profile paragraph and the recommendation table as returned by the model.

use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use thiserror::Error;
use uuid::Uuid;

pub const SUMMARY_TITLE: &str = "Hasil Rekomendasi Jurusan & Kampus";
pub const SUMMARY_CONTENT_TYPE: &str = "application/pdf";

// A4 portrait, 15 mm margins.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
/// Characters per body line at 12 pt Helvetica across the printable width.
const WRAP_WIDTH: usize = 85;

#[derive(Debug, Error)]
#[error("PDF rendering failed: {0}")]
pub struct SummaryError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
}

impl LineStyle {
    fn font_size(self) -> f32 {
        match self {
            LineStyle::Title => 16.0,
            LineStyle::Heading => 14.0,
            LineStyle::Body => 12.0,
        }
    }

    /// Vertical advance in mm after a line of this style.
    fn advance(self) -> f32 {
        match self {
            LineStyle::Title => 12.0,
            LineStyle::Heading => 9.0,
            LineStyle::Body => 6.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub style: LineStyle,
    pub text: String,
}

impl SummaryLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// Lays the document out as styled, already wrapped lines.
pub fn summary_lines(
    profile_summary: &str,
    recommendation: &str,
    generated_at: DateTime<Utc>,
) -> Vec<SummaryLine> {
    let mut lines = vec![
        SummaryLine::new(LineStyle::Title, SUMMARY_TITLE),
        SummaryLine::new(
            LineStyle::Body,
            format!("Dibuat pada {}", generated_at.format("%d-%m-%Y %H:%M UTC")),
        ),
        SummaryLine::new(LineStyle::Body, ""),
        SummaryLine::new(LineStyle::Heading, "Profil Pengguna:"),
    ];
    push_wrapped(&mut lines, profile_summary.trim());
    lines.push(SummaryLine::new(LineStyle::Body, ""));
    lines.push(SummaryLine::new(LineStyle::Heading, "Rekomendasi:"));
    push_wrapped(&mut lines, recommendation.trim());
    lines
}

fn push_wrapped(lines: &mut Vec<SummaryLine>, text: &str) {
    for paragraph in text.lines() {
        for wrapped in textwrap::wrap(paragraph, WRAP_WIDTH) {
            lines.push(SummaryLine::new(LineStyle::Body, wrapped.into_owned()));
        }
    }
}

/// Renders the summary as PDF bytes, adding pages as the text runs past the bottom margin.
pub fn render_summary_pdf(
    profile_summary: &str,
    recommendation: &str,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, SummaryError> {
    let (doc, page, layer) = PdfDocument::new(
        SUMMARY_TITLE,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Halaman 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| SummaryError(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| SummaryError(e.to_string()))?;

    let mut current: PdfLayerReference = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;
    let mut page_number = 1;

    for line in summary_lines(profile_summary, recommendation, generated_at) {
        if y - line.style.advance() < MARGIN {
            page_number += 1;
            let (page, layer) = doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                format!("Halaman {page_number}"),
            );
            current = doc.get_page(page).get_layer(layer);
            y = PAGE_HEIGHT - MARGIN;
        }

        y -= line.style.advance();
        if line.text.is_empty() {
            continue;
        }
        let font: &IndirectFontRef = match line.style {
            LineStyle::Body => &regular,
            LineStyle::Title | LineStyle::Heading => &bold,
        };
        current.use_text(
            line.text.as_str(),
            line.style.font_size(),
            Mm(MARGIN),
            Mm(y),
            font,
        );
    }

    doc.save_to_bytes()
        .map_err(|e| SummaryError(e.to_string()))
}

/// Unique download name, so concurrent exports never collide.
pub fn summary_file_name(id: Uuid) -> String {
    format!("rekomendasi_jurusan_{id}.pdf")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const TABLE: &str =
        "| Kampus | Jurusan | Peluang Diterima (%) |\n|---|---|---|\n| UI | Informatika | 80% |\n";

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_document_layout() {
        let lines = summary_lines(
            "  Siti, seorang Perempuan berusia 18 tahun.  ",
            TABLE,
            generated_at(),
        );
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();

        assert_eq!(
            texts,
            [
                "Hasil Rekomendasi Jurusan & Kampus",
                "Dibuat pada 01-07-2024 09:30 UTC",
                "",
                "Profil Pengguna:",
                "Siti, seorang Perempuan berusia 18 tahun.",
                "",
                "Rekomendasi:",
                "| Kampus | Jurusan | Peluang Diterima (%) |",
                "|---|---|---|",
                "| UI | Informatika | 80% |",
            ]
        );
        assert_eq!(lines[0].style, LineStyle::Title);
        assert_eq!(lines[3].style, LineStyle::Heading);
        assert_eq!(lines[6].style, LineStyle::Heading);
        assert_eq!(lines[9].style, LineStyle::Body);
    }

    #[test]
    fn test_long_profile_is_wrapped() {
        let profile = "kata ".repeat(60);
        let lines = summary_lines(&profile, TABLE, generated_at());
        let body: Vec<&SummaryLine> = lines[4..]
            .iter()
            .take_while(|l| !l.text.is_empty())
            .collect();

        assert!(body.len() > 1);
        assert!(body.iter().all(|l| l.text.chars().count() <= WRAP_WIDTH));
    }

    #[test]
    fn test_pdf_has_magic_bytes() {
        let pdf = render_summary_pdf("Siti, 18 tahun.", TABLE, generated_at()).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_long_recommendation_spans_pages() {
        let many_rows = "| UI | Informatika | 80% |\n".repeat(120);
        let one_page = render_summary_pdf("Siti.", TABLE, generated_at()).unwrap();
        let several_pages = render_summary_pdf("Siti.", &many_rows, generated_at()).unwrap();

        assert!(several_pages.starts_with(b"%PDF-"));
        assert!(several_pages.len() > one_page.len());
    }

    #[test]
    fn test_file_name_uses_id() {
        let id = Uuid::nil();
        assert_eq!(
            summary_file_name(id),
            "rekomendasi_jurusan_00000000-0000-0000-0000-000000000000.pdf"
        );
    }
}
