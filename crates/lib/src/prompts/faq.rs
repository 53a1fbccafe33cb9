//! # FAQ-Grounded Prompts
//!
//! Renders an FAQ corpus into a compact digest and wraps it in the instruction
//! envelope sent as the system message of every chat request.

use crate::{
    constants::{REFUSAL_EN, REFUSAL_JA},
    corpus::FaqCorpus,
    types::{DigestOptions, Language},
};

/// The role statement opening every FAQ system prompt.
pub const FAQ_ROLE_PROMPT: &str = "You are an AI assistant that answers questions based solely on the FAQ list below. Search the list for the most relevant information and answer the user's question clearly, summarizing or paraphrasing where needed. Even if there is no exact match in the FAQ, use any related information from the list to answer as best you can.";

/// The formatting constraint placed on every answer.
pub const PLAIN_PROSE_INSTRUCTION: &str = "Do not use bold, italics, bullet points, headers, symbols, decorative formatting, block quotes, or code blocks. Only output plain, normal sentences.";

/// The language-mirroring constraint placed on every answer.
pub const SAME_LANGUAGE_INSTRUCTION: &str = "Always answer in the same language that the user used to ask the question (Japanese or English).";

/// The fixed sentence the assistant must reply with when the FAQ has nothing relevant.
pub fn refusal_sentence(language: Language) -> &'static str {
    match language {
        Language::Ja => REFUSAL_JA,
        Language::En => REFUSAL_EN,
    }
}

fn other_language(language: Language) -> Language {
    match language {
        Language::Ja => Language::En,
        Language::En => Language::Ja,
    }
}

/// Generates the fallback instruction for `language`.
///
/// The sentence for `language` is the primary reply; the other supported
/// language's sentence is named for questions written in that language.
pub fn get_fallback_instruction(language: Language) -> String {
    let other = other_language(language);
    format!(
        "If there is no relevant information in the FAQ, reply exactly: \"{primary}\" If the question is written in {other_name}, reply exactly: \"{secondary}\" instead.",
        primary = refusal_sentence(language),
        other_name = other.name(),
        secondary = refusal_sentence(other),
    )
}

/// Renders the corpus as `## category` blocks of `Q:`/`A:` pairs, with
/// categories in first-seen order.
pub fn build_faq_digest(corpus: &FaqCorpus) -> String {
    build_faq_digest_with_options(corpus, &DigestOptions::default())
}

/// Renders the corpus as `## category` blocks of `Q:`/`A:` pairs.
///
/// Every entry is embedded; nothing is dropped, truncated or deduplicated.
pub fn build_faq_digest_with_options(corpus: &FaqCorpus, options: &DigestOptions) -> String {
    let mut digest = String::new();

    for group in corpus.grouped(options.category_order) {
        digest.push_str(&format!("## {}\n\n", group.category));
        for faq in group.entries {
            digest.push_str(&format!("Q: {}\nA: {}\n\n", faq.question, faq.answer));
        }
    }

    digest.trim().to_string()
}

/// Builds the system prompt for `user_question` from the default digest options.
pub fn build_system_prompt(user_question: &str, corpus: &FaqCorpus, language: Language) -> String {
    build_system_prompt_with_options(user_question, corpus, language, &DigestOptions::default())
}

/// Builds the system prompt: role, fallback, formatting and language rules,
/// then the FAQ digest and the user question.
///
/// The question is embedded verbatim.
pub fn build_system_prompt_with_options(
    user_question: &str,
    corpus: &FaqCorpus,
    language: Language,
    options: &DigestOptions,
) -> String {
    let digest = build_faq_digest_with_options(corpus, options);

    format!(
        r#"<role>
{FAQ_ROLE_PROMPT}
</role>

<instructions>
1. {fallback}
2. {PLAIN_PROSE_INSTRUCTION}
3. {SAME_LANGUAGE_INSTRUCTION}
</instructions>

<faq_list>
{digest}
</faq_list>

<user_question>
{user_question}
</user_question>"#,
        fallback = get_fallback_instruction(language),
    )
}
