//! Lenient reader for the markdown recommendation table returned by the model.
//!
//! The header and separator lines are never validated. A data line that does
//! not yield exactly three non-empty cells is recorded as skipped instead of
//! failing the whole table.

use serde::Serialize;
use tracing::warn;

use crate::narration::Diagnostic;

/// A data row with its three cells: campus, major, admission chance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationRow {
    /// 1-based position among all data lines, skipped lines included.
    pub ordinal: usize,
    pub campus: String,
    pub major: String,
    /// Raw chance cell as written by the model, e.g. `"80%"`.
    pub chance: String,
}

impl RecommendationRow {
    /// The chance cell with every `%` removed and `" persen"` appended.
    ///
    /// Non-numeric cells are kept as they are (`"N/A"` becomes `"N/A persen"`).
    pub fn spoken_chance(&self) -> String {
        format!("{} persen", self.chance.replace('%', "").trim())
    }
}

/// A data line that did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub ordinal: usize,
    pub cell_count: usize,
    pub line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationTable {
    pub rows: Vec<RecommendationRow>,
    pub skipped: Vec<SkippedRow>,
}

impl RecommendationTable {
    pub fn data_line_count(&self) -> usize {
        self.rows.len() + self.skipped.len()
    }
}

/// Parses a recommendation table.
///
/// Returns `Diagnostic::StructurallyInsufficient` when the text cannot hold a
/// header, a separator and at least one data line. A header followed only by
/// a separator row parses as an empty table.
pub fn parse_table(text: &str) -> Result<RecommendationTable, Diagnostic> {
    let lines: Vec<&str> = text.trim().lines().collect();

    match lines.len() {
        0 | 1 => return Err(Diagnostic::StructurallyInsufficient),
        2 if is_separator(lines[1]) => return Ok(RecommendationTable::default()),
        2 => return Err(Diagnostic::StructurallyInsufficient),
        _ => {}
    }

    let mut table = RecommendationTable::default();

    for (index, line) in lines[2..].iter().enumerate() {
        let ordinal = index + 1;
        let cells = split_cells(line);

        match cells.as_slice() {
            [campus, major, chance] if cells.iter().all(|c| !c.is_empty()) => {
                table.rows.push(RecommendationRow {
                    ordinal,
                    campus: campus.to_string(),
                    major: major.to_string(),
                    chance: chance.to_string(),
                });
            }
            _ => {
                warn!(
                    "Skipping recommendation row {} with {} cells: {:?}",
                    ordinal,
                    cells.len(),
                    line
                );
                table.skipped.push(SkippedRow {
                    ordinal,
                    cell_count: cells.len(),
                    line: line.to_string(),
                });
            }
        }
    }

    Ok(table)
}

/// Strips the outer pipes of a row and returns its trimmed cells.
fn split_cells(line: &str) -> Vec<&str> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect()
}

/// `|---|:---:|` style row: only pipes, dashes, colons and whitespace.
fn is_separator(line: &str) -> bool {
    let line = line.trim();
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "| Kampus | Jurusan | Peluang Diterima (%) |\n|--------|---------|--------------------|";

    #[test]
    fn test_parses_well_formed_rows_in_order() {
        let text = format!("{HEADER}\n| UI | Informatika | 80% |\n| ITB | Elektro | 75 |");
        let table = parse_table(&text).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert!(table.skipped.is_empty());
        assert_eq!(table.rows[0].ordinal, 1);
        assert_eq!(table.rows[0].campus, "UI");
        assert_eq!(table.rows[0].major, "Informatika");
        assert_eq!(table.rows[0].chance, "80%");
        assert_eq!(table.rows[1].ordinal, 2);
        assert_eq!(table.rows[1].campus, "ITB");
    }

    #[test]
    fn test_short_input_is_structurally_insufficient() {
        for text in ["", "a", "a\nb", "   \n  ", "| Kampus | Jurusan | Peluang |"] {
            assert_eq!(
                parse_table(text),
                Err(Diagnostic::StructurallyInsufficient),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn test_header_and_separator_only_is_empty_table() {
        let table = parse_table(HEADER).unwrap();
        assert_eq!(table.data_line_count(), 0);
    }

    #[test]
    fn test_separator_with_alignment_colons() {
        let table = parse_table("| A | B | C |\n|:--|:-:|--:|").unwrap();
        assert_eq!(table.data_line_count(), 0);
    }

    #[test]
    fn test_skipped_rows_keep_their_ordinal() {
        let text = format!("{HEADER}\n| UI | Informatika | 80% |\n| ITB | Elektro |\n| UGM | Kedokteran | 60% |");
        let table = parse_table(&text).unwrap();

        let ordinals: Vec<usize> = table.rows.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![1, 3]);
        assert_eq!(table.skipped.len(), 1);
        assert_eq!(table.skipped[0].ordinal, 2);
        assert_eq!(table.skipped[0].cell_count, 2);
        assert_eq!(table.skipped[0].line, "| ITB | Elektro |");
    }

    #[test]
    fn test_four_cells_is_skipped() {
        let text = format!("{HEADER}\n| UI | Informatika | 80% | extra |");
        let table = parse_table(&text).unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.skipped[0].cell_count, 4);
    }

    #[test]
    fn test_empty_cell_is_skipped() {
        let text = format!("{HEADER}\n| UI |  | 80% |");
        let table = parse_table(&text).unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.skipped.len(), 1);
    }

    #[test]
    fn test_rows_without_outer_pipes_and_with_indentation() {
        let text = format!("{HEADER}\nUI | Informatika | 80%\n    | ITB | Elektro | 75 |   ");
        let table = parse_table(&text).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].chance, "75");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "| A | B | C |\r\n|---|---|---|\r\n| UI | Hukum | 70% |\r\n";
        let table = parse_table(text).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].chance, "70%");
    }

    #[test]
    fn test_spoken_chance_strips_percent_and_whitespace() {
        let row = |chance: &str| RecommendationRow {
            ordinal: 1,
            campus: "UI".to_string(),
            major: "Informatika".to_string(),
            chance: chance.to_string(),
        };
        assert_eq!(row("85%").spoken_chance(), "85 persen");
        assert_eq!(row("85").spoken_chance(), "85 persen");
        assert_eq!(row(" 85 % ").spoken_chance(), "85 persen");
        assert_eq!(row("N/A").spoken_chance(), "N/A persen");
    }
}
