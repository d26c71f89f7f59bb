//! Table → narration. One introduction sentence, then one sentence per readable row.

use tracing::debug;

use crate::narration::table::{parse_table, RecommendationRow};
use crate::narration::{Diagnostic, Narration, SpeechText};

pub const INTRODUCTION: &str = "Berikut adalah rekomendasi jurusan dan kampus untuk Anda:";

/// Narrates a markdown recommendation table.
///
/// Total over any input: malformed tables come back as `SpeechText::Diagnostic`.
pub fn narrate(table_text: &str) -> SpeechText {
    let table = match parse_table(table_text) {
        Ok(table) => table,
        Err(diagnostic) => return SpeechText::Diagnostic(diagnostic),
    };

    if table.rows.is_empty() {
        return SpeechText::Diagnostic(if table.skipped.is_empty() {
            Diagnostic::EmptyTable
        } else {
            Diagnostic::AllRowsUnreadable
        });
    }

    let sentences: Vec<String> = std::iter::once(INTRODUCTION.to_string())
        .chain(table.rows.iter().map(row_sentence))
        .collect();

    debug!(
        "Narrated {} of {} recommendation rows",
        table.rows.len(),
        table.data_line_count()
    );

    SpeechText::Narration(Narration {
        text: sentences.join(" "),
        sentence_count: sentences.len(),
        skipped_rows: table.skipped,
    })
}

/// String form of [`narrate`]: the narration, or the diagnostic message in its place.
///
/// Entry point for callers that only display text. The HTTP handlers use
/// `narrate` so they can branch on diagnostics.
#[allow(dead_code)]
pub fn format_recommendation_for_speech(table_text: &str) -> String {
    narrate(table_text).into_text()
}

fn row_sentence(row: &RecommendationRow) -> String {
    format!(
        "Rekomendasi ke-{}: Kampus {}, jurusan {}, dengan peluang diterima {}.",
        row.ordinal,
        row.campus,
        row.major,
        row.spoken_chance()
    )
}
