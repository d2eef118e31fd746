use super::language::Language;

/// Assemble the generation prompt: the language instruction, a blank line,
/// then the extracted product text.
pub fn build_prompt(language: Language, product_text: &str) -> String {
    format!("{}\n\n{}", language.instruction(), product_text)
}
