use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SCRIPT_BLOCKS: Regex = Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap();
    static ref STYLE_BLOCKS: Regex = Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap();
    static ref NAV_BLOCKS: Regex = Regex::new(r"(?is)<nav[^>]*>.*?</nav>").unwrap();
    static ref FOOTER_BLOCKS: Regex = Regex::new(r"(?is)<footer[^>]*>.*?</footer>").unwrap();
    static ref ANY_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Page text with scripts, styles, nav/footer chrome and every remaining tag
/// stripped out. Line structure is preserved so paragraphs can still be told
/// apart. This is substring surgery, not a DOM parser: malformed markup comes
/// out mangled, which is accepted behavior for this pipeline.
pub fn strip_tags(html: &str) -> String {
    let cleaned = SCRIPT_BLOCKS.replace_all(html, "");
    let cleaned = STYLE_BLOCKS.replace_all(&cleaned, "");
    let cleaned = NAV_BLOCKS.replace_all(&cleaned, "");
    let cleaned = FOOTER_BLOCKS.replace_all(&cleaned, "");
    ANY_TAG.replace_all(&cleaned, " ").to_string()
}

/// Collapses whitespace runs to single spaces, trims, and truncates to
/// `max_chars` characters (characters, not bytes).
pub fn normalize(cleaned: &str, max_chars: usize) -> String {
    let collapsed = cleaned.split_whitespace().join(" ");
    collapsed.chars().take(max_chars).collect()
}
