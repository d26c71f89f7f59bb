// LLM prompt constants for the recommendation flow.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt: the assistant answers with a markdown table.
pub const RECOMMENDATION_SYSTEM: &str =
    "Anda adalah asisten yang memberikan rekomendasi jurusan dan kampus dalam format tabel markdown.";

/// Header row the narration and the table renderer expect.
pub const TABLE_HEADER: &str = "| Kampus | Jurusan | Peluang Diterima (%) |";

/// Recommendation prompt template.
/// Replace: {profile}, {table_header}, {table_only_instruction}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"Berikan rekomendasi 3 jurusan dari 3 kampus sesuai dengan profil berikut ini dan sajikan dalam bentuk tabular serta peluang untuk dapat diterima:

{profile}

Format keluaran yang diharapkan:
{table_header}
|--------|---------|--------------------|
| ...    | ...     | ...                |
| ...    | ...     | ...                |
| ...    | ...     | ...                |

{table_only_instruction}"#;
