use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::enrichment::MAX_KEYWORDS;

/// Vocabulary used to score paragraphs for business relevance. Substring
/// containment, one point per distinct entry.
const BUSINESS_WORDS: &[&str] = &[
    "platform",
    "software",
    "solution",
    "product",
    "service",
    "company",
    "technology",
    "ai",
    "fintech",
    "developer",
    "enterprise",
    "customers",
    "business",
];

/// Function words that never count as keywords.
const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "from", "have", "your", "about", "their", "they", "will", "more",
    "than", "into", "using", "also", "such", "where", "which", "been", "were", "when", "what",
    "some", "each", "does", "just", "only", "very", "most", "over", "here", "then", "them",
    "these", "those", "could", "would", "should", "every", "under", "after", "before", "other",
    "being", "between", "through",
];

const MIN_PARAGRAPH_CHARS: usize = 80;
const SUMMARY_SENTENCE_LIMIT: usize = 3;

lazy_static! {
    static ref META_DESCRIPTION: Regex =
        Regex::new(r#"(?i)<meta name="description" content="([^"]*)""#).unwrap();
    static ref KEYWORD_RUNS: Regex = Regex::new(r"\b[a-z]{4,}\b").unwrap();
}

/// Meta description from raw HTML, if the tag exists in the common
/// double-quoted form and has non-empty content.
pub fn extract_meta_description(html: &str) -> Option<String> {
    META_DESCRIPTION
        .captures(html)
        .map(|caps| caps[1].trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Highest business-scoring paragraph of the cleaned (pre-collapse) text.
/// Lines of 80 characters or fewer are not paragraphs. Stable on ties, so
/// earlier paragraphs win.
pub fn best_paragraph(cleaned: &str) -> Option<String> {
    let mut scored: Vec<(String, usize)> = cleaned
        .split('\n')
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_PARAGRAPH_CHARS)
        .map(|line| {
            let lower = line.to_lowercase();
            let score = BUSINESS_WORDS
                .iter()
                .filter(|word| lower.contains(*word))
                .count();
            (line.to_string(), score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().next().map(|(line, _)| line)
}

/// First `limit` ". "-separated fragments, rejoined.
pub fn clip_sentences(text: &str, limit: usize) -> String {
    text.split(". ").take(limit).collect::<Vec<_>>().join(". ")
}

/// Summary pick, in order: meta description, best paragraph, leading
/// fragments of the sanitized text. An empty page gives an empty summary,
/// never an error.
pub fn heuristic_summary(html: &str, cleaned: &str, text: &str) -> String {
    if let Some(meta) = extract_meta_description(html) {
        return clip_sentences(&meta, SUMMARY_SENTENCE_LIMIT);
    }
    if let Some(paragraph) = best_paragraph(cleaned) {
        return clip_sentences(&paragraph, SUMMARY_SENTENCE_LIMIT);
    }
    if text.is_empty() {
        return String::new();
    }
    format!("{}.", clip_sentences(text, 2))
}

/// Top keywords of the sanitized text by raw frequency. Runs of four or more
/// lowercase letters, stop words dropped, descending count with first-seen
/// order on ties, at most [`MAX_KEYWORDS`] entries.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for word in KEYWORD_RUNS.find_iter(&lower).map(|m| m.as_str()) {
        if STOP_WORDS.contains(&word) {
            continue;
        }
        match counts.iter_mut().find(|(seen, _)| seen.as_str() == word) {
            Some((_, count)) => *count += 1,
            None => counts.push((word.to_string(), 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        best_paragraph, clip_sentences, extract_keywords, extract_meta_description,
        heuristic_summary,
    };

    #[test]
    fn meta_description_is_preferred_over_paragraphs() {
        let html = r#"<html><head><meta name="description" content="We build AI tools for developers."></head><body><p>Our platform is a software solution that enterprise customers rely on for every business workflow.</p></body></html>"#;
        let cleaned = " Our platform is a software solution that enterprise customers rely on for every business workflow. ";

        let summary = heuristic_summary(html, cleaned, cleaned.trim());

        assert_eq!(summary, "We build AI tools for developers.");
    }

    #[test]
    fn meta_match_is_case_insensitive() {
        let html = r#"<META NAME="Description" CONTENT="Fintech rails for marketplaces.">"#;

        assert_eq!(
            extract_meta_description(html),
            Some("Fintech rails for marketplaces.".to_string())
        );
    }

    #[test]
    fn empty_meta_content_does_not_count() {
        let html = r#"<meta name="description" content="">"#;

        assert_eq!(extract_meta_description(html), None);
    }

    #[test]
    fn best_paragraph_prefers_business_density_over_position() {
        let bland = "The second long paragraph recounts a fishing trip and the slow mornings on the water with nothing much to report.";
        let dense = "Our platform is a software solution that enterprise customers rely on, one product for every business workflow in the company.";
        let cleaned = format!("{}\n{}", bland, dense);

        assert_eq!(best_paragraph(&cleaned), Some(dense.to_string()));
    }

    #[test]
    fn equal_scores_keep_document_order() {
        let first = "The first long paragraph simply describes winter weather in the northern hills during the colder months of the year.";
        let second = "The second long paragraph recounts a fishing trip and the slow mornings on the water with nothing much to report.";
        let cleaned = format!("{}\n{}", first, second);

        assert_eq!(best_paragraph(&cleaned), Some(first.to_string()));
    }

    #[test]
    fn short_lines_are_not_paragraph_candidates() {
        let cleaned = "Welcome\nPricing\nAbout us";

        assert_eq!(best_paragraph(cleaned), None);
    }

    #[test]
    fn summaries_are_clipped_to_three_fragments() {
        let wordy = "We make robots. Robots make parts. Parts make money. Money makes more robots";

        assert_eq!(
            clip_sentences(wordy, 3),
            "We make robots. Robots make parts. Parts make money"
        );
    }

    #[test]
    fn fallback_summary_uses_leading_text_fragments() {
        let text = "Great snacks for offices. Free shipping nationwide. Come hungry";

        let summary = heuristic_summary("<html></html>", text, text);

        assert_eq!(summary, "Great snacks for offices. Free shipping nationwide.");
    }

    #[test]
    fn empty_page_gives_empty_summary_and_keywords() {
        assert_eq!(heuristic_summary("", "", ""), "");
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn keywords_rank_by_frequency_with_first_seen_ties() {
        let text = "Robots build robots. Robots helping teams ship code faster. Teams ship every day with robots";

        assert_eq!(
            extract_keywords(text),
            vec!["robots", "teams", "ship", "build", "helping", "code", "faster"]
        );
    }

    #[test]
    fn keywords_never_include_stop_words() {
        let text = "They would should with from every which platform platform about their";

        assert_eq!(extract_keywords(text), vec!["platform"]);
    }

    #[test]
    fn keywords_cap_at_eight_entries() {
        let text = "alpha beta gamma delta epsilon zeta theta iota kappa lambda";

        let keywords = extract_keywords(text);

        assert_eq!(keywords.len(), 8);
        assert_eq!(
            keywords,
            vec!["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "theta", "iota"]
        );
    }

    #[test]
    fn keyword_extraction_is_idempotent() {
        let text = "Robots build robots while teams ship code. Robots again";

        assert_eq!(extract_keywords(text), extract_keywords(text));
    }
}
