/// Structural cues scanned in raw lowercased HTML: paths and phrases that
/// reveal how a company operates, regardless of what its copy says.
const STRUCTURAL_RULES: &[(&[&str], &str)] = &[
    (&["/careers", "/jobs"], "Actively Hiring"),
    (&["/blog"], "Content Marketing Presence"),
    (&["/changelog"], "Ships Product Updates"),
    (&["/pricing"], "Monetized Product"),
    (&["/docs", "documentation"], "Developer-Focused"),
    (&["/api", "api reference"], "Platform Play"),
    (&["open source", "github.com"], "Open Source Presence"),
    (&["soc 2", "gdpr", "compliance"], "Enterprise-Ready"),
];

/// Lexical cues scanned in lowercased sanitized text. Substring containment,
/// same as the structural table.
const LEXICAL_RULES: &[(&str, &str)] = &[
    ("saas", "SaaS Business Model"),
    ("ai", "AI-Focused"),
    ("machine learning", "Uses Machine Learning"),
    ("api", "API-Based Product"),
    ("developer", "Developer Tools Focused"),
    ("fintech", "Fintech Sector"),
    ("enterprise", "Enterprise Customers"),
    ("startup", "Startup-Focused"),
];

/// Signals derived from site structure. Input must already be lowercased.
/// Output order is rule-declaration order; one signal per rule at most.
pub fn detect_structural_signals(html_lower: &str) -> Vec<String> {
    STRUCTURAL_RULES
        .iter()
        .filter(|(cues, _)| cues.iter().any(|cue| html_lower.contains(cue)))
        .map(|(_, label)| label.to_string())
        .collect()
}

/// Signals derived from page wording. Input must already be lowercased.
pub fn detect_lexical_signals(text_lower: &str) -> Vec<String> {
    LEXICAL_RULES
        .iter()
        .filter(|(cue, _)| text_lower.contains(cue))
        .map(|(_, label)| label.to_string())
        .collect()
}
