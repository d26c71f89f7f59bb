// Shared prompt fragments.
// Each feature that calls the LLM keeps its own prompts.rs alongside it;
// only cross-cutting fragments live here.

/// Appended to prompts whose answer is parsed as a markdown table.
pub const TABLE_ONLY_INSTRUCTION: &str = "\
    Jawab HANYA dengan tabel markdown sesuai format di atas. \
    Jangan menambahkan penjelasan, catatan, atau teks lain di luar tabel. \
    Jangan membungkus tabel dengan code fence.";
