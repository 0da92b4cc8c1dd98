use panorama::core::models::Category;
use panorama::prompt::build_classification_prompt;

#[test]
fn test_prompt_embeds_message_text() {
    let prompt = build_classification_prompt("how do I export?");
    assert!(prompt.ends_with("Mensagem: \"how do I export?\""));
}

#[test]
fn test_prompt_asks_for_category_and_topic() {
    let prompt = build_classification_prompt("x");
    assert!(prompt.contains("JSON"));
    assert!(prompt.contains("\"category\""));
    assert!(prompt.contains("\"topic\""));
}

#[test]
fn test_prompt_lists_closed_category_set_in_order() {
    let prompt = build_classification_prompt("x");

    let positions: Vec<usize> = Category::MODEL_LABELS
        .iter()
        .map(|c| {
            prompt
                .find(&format!("\"{}\"", c.label()))
                .unwrap_or_else(|| panic!("missing label {}", c.label()))
        })
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!prompt.contains(Category::NotAnalyzed.label()));
}
