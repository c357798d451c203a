pub const SYSTEM_PROMPT: &str = "You are a powerful and exciting Jewish content summarizer. Your job is to create compelling, accurate summaries of the daily Tanya, Rambam, Daf Yomi and Halakhah Yomit study in under 150 words.";

const USER_PROMPT_TEMPLATE: &str = "Summarize the following {label} text for social media. Use short paragraphs, line breaks, and end with a call to action:

{text}";

/// Fill the user prompt; the text goes in last so it is never rescanned
pub fn user_prompt(label: &str, text: &str) -> String {
    USER_PROMPT_TEMPLATE
        .replace("{label}", label)
        .replace("{text}", text)
}
