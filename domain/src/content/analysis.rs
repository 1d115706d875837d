//! Post-generation content analysis.
//!
//! Pure helpers the content agent uses to enrich response metadata:
//! a first-match-wins content-type classifier over the prompt, word count,
//! estimated reading time, and a heuristic SEO score.

/// Keyword families for content-type classification, checked in order.
/// The first family with a matching keyword wins.
const CONTENT_TYPE_FAMILIES: &[(&str, &[&str])] = &[
    ("blog-post", &["blog", "article", "post"]),
    ("product-description", &["product", "description"]),
    ("marketing-copy", &["marketing", "copy", "campaign"]),
    ("social-media", &["social", "tweet", "instagram", "facebook", "linkedin"]),
    ("email-content", &["email", "newsletter"]),
    ("headline", &["headline", "title"]),
    ("meta-description", &["meta"]),
];

/// Classify the requested content type from the prompt.
///
/// Falls back to "general-content" when no family matches.
pub fn classify_content_type(prompt: &str) -> &'static str {
    let prompt_lower = prompt.to_lowercase();
    for (content_type, family) in CONTENT_TYPE_FAMILIES {
        if family.iter().any(|keyword| prompt_lower.contains(keyword)) {
            return content_type;
        }
    }
    "general-content"
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in minutes at 200 words per minute, rounded up.
pub fn estimated_reading_time(words: usize) -> u32 {
    words.div_ceil(200) as u32
}

/// Heuristic SEO score in [0, 1].
///
/// Starts at 0.5 and adds:
/// - +0.2 if any prompt word longer than 3 characters appears in the content
/// - +0.2 if the word count is between 300 and 1500 inclusive
/// - +0.1 if any sentence (split on `.!?`) is non-empty and under 50
///   characters, a proxy for short heading-like lines
pub fn seo_score(prompt: &str, content: &str) -> f64 {
    let mut score: f64 = 0.5;
    let content_lower = content.to_lowercase();

    let prompt_lower = prompt.to_lowercase();
    if prompt_lower
        .split_whitespace()
        .any(|word| word.len() > 3 && content_lower.contains(word))
    {
        score += 0.2;
    }

    let words = word_count(content);
    if (300..=1500).contains(&words) {
        score += 0.2;
    }

    let has_short_sentence = content.split(['.', '!', '?']).any(|sentence| {
        let trimmed = sentence.trim();
        !trimmed.is_empty() && trimmed.len() < 50
    });
    if has_short_sentence {
        score += 0.1;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_first_match_wins() {
        assert_eq!(classify_content_type("write a blog about copy"), "blog-post");
        assert_eq!(
            classify_content_type("a product description please"),
            "product-description"
        );
        assert_eq!(classify_content_type("draft marketing copy"), "marketing-copy");
        assert_eq!(classify_content_type("an instagram caption"), "social-media");
        assert_eq!(classify_content_type("a welcome email"), "email-content");
        assert_eq!(classify_content_type("a punchy headline"), "headline");
        assert_eq!(classify_content_type("the meta tag text"), "meta-description");
    }

    #[test]
    fn test_classifier_general_fallback() {
        assert_eq!(
            classify_content_type("write a short paragraph about gardening"),
            "general-content"
        );
    }

    #[test]
    fn test_word_count_and_reading_time() {
        assert_eq!(word_count("one two  three\nfour"), 4);
        assert_eq!(estimated_reading_time(0), 0);
        assert_eq!(estimated_reading_time(1), 1);
        assert_eq!(estimated_reading_time(200), 1);
        assert_eq!(estimated_reading_time(201), 2);
        assert_eq!(estimated_reading_time(1000), 5);
    }

    #[test]
    fn test_seo_score_base_only() {
        // No prompt-word overlap, tiny word count, one long sentence
        let content = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod";
        let score = seo_score("qqqq zzzz", content);
        assert!((score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seo_score_caps_at_one() {
        // Exactly 300 words, contains a prompt keyword, has a short sentence
        let mut content = String::from("Gardening matters. ");
        let filler_words = 300 - word_count(&content);
        for _ in 0..filler_words {
            content.push_str("word ");
        }
        assert_eq!(word_count(&content), 300);

        let score = seo_score("tips about gardening", &content);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_seo_score_short_words_do_not_count_as_overlap() {
        // Prompt words of <= 3 chars are ignored for the overlap bonus
        let score = seo_score("a an the", "a an the and more");
        assert!((score - 0.6).abs() < f64::EPSILON); // only the short-sentence bonus
    }
}
