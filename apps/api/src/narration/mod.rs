// Spoken narration of recommendation tables.
// Pure text transformation: no I/O, no shared state, safe to call from any handler.

pub mod formatter;
pub mod table;

use serde::Serialize;
use thiserror::Error;

pub use formatter::narrate;
pub use table::{parse_table, RecommendationRow, SkippedRow};

/// Why a recommendation could not be narrated.
///
/// `Display` yields the exact Indonesian message shown to the user, so the
/// legacy string API and the HTTP layer share one wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// Fewer than three lines, or two lines without a separator row.
    #[error("Format rekomendasi tidak sesuai untuk dibacakan.")]
    StructurallyInsufficient,

    /// Data lines exist but none of them had three cells.
    #[error("Ada beberapa data rekomendasi yang tidak bisa dibacakan karena formatnya. Silakan periksa teks.")]
    AllRowsUnreadable,

    /// Header and separator without any data line.
    #[error("Tidak ada data rekomendasi yang dapat dibacakan.")]
    EmptyTable,
}

/// Narration ready for speech synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narration {
    pub text: String,
    /// Introduction plus one sentence per readable row.
    pub sentence_count: usize,
    pub skipped_rows: Vec<SkippedRow>,
}

/// Outcome of narrating a table. Callers branch on the variant instead of
/// matching substrings of the returned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechText {
    Narration(Narration),
    Diagnostic(Diagnostic),
}

impl SpeechText {
    /// Narration text, or the diagnostic message.
    pub fn into_text(self) -> String {
        match self {
            SpeechText::Narration(narration) => narration.text,
            SpeechText::Diagnostic(diagnostic) => diagnostic.to_string(),
        }
    }
}
