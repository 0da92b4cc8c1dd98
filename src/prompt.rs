use crate::core::models::Category;

/// Builds the single-turn instruction sent to the model for one message.
///
/// The model is asked for a JSON object with exactly `category` (one of
/// [`Category::MODEL_LABELS`]) and `topic`.
#[must_use]
pub fn build_classification_prompt(message_text: &str) -> String {
    let labels = Category::MODEL_LABELS
        .iter()
        .map(|c| format!("\"{}\"", c.label()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analise a seguinte mensagem de um canal de suporte e retorne um objeto JSON com \
         \"category\" e \"topic\". Categorias possíveis: {labels}. Mensagem: \"{message_text}\""
    )
}
