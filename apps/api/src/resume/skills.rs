//! Closed-vocabulary skill detection over Unicode word tokens.
//!
//! Two matching modes are supported:
//! - `Strict`: a vocabulary entry is found only when a single token equals it
//!   exactly. Case variants and multi-word entries are never detected.
//! - `Normalized`: case-insensitive, and multi-word entries match a contiguous
//!   run of tokens.
//!
//! In both modes the output holds canonical vocabulary spellings, deduplicated,
//! in order of first occurrence in the text.

use std::collections::HashSet;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

/// Skills recognised out of the box.
pub const DEFAULT_SKILLS: [&str; 14] = [
    "Python",
    "Java",
    "C++",
    "SQL",
    "React",
    "FastAPI",
    "JavaScript",
    "HTML",
    "CSS",
    "Machine Learning",
    "Data Analysis",
    "Communication",
    "Leadership",
    "Git",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillMatchMode {
    Strict,
    Normalized,
}

/// Fixed set of skill names. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<VocabularyEntry>,
}

#[derive(Debug, Clone)]
struct VocabularyEntry {
    canonical: String,
    /// Lowercased tokens of `canonical`, for normalized matching.
    folded_tokens: Vec<String>,
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries = skills
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.trim().is_empty() && seen.insert(s.clone()))
            .map(|canonical| VocabularyEntry {
                folded_tokens: tokenize(&canonical)
                    .into_iter()
                    .map(str::to_lowercase)
                    .collect(),
                canonical,
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn exact(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.canonical == token)
            .map(|e| e.canonical.as_str())
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

/// Extracts vocabulary skills from free text.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
    mode: SkillMatchMode,
}

impl SkillExtractor {
    pub fn new(vocabulary: Arc<SkillVocabulary>, mode: SkillMatchMode) -> Self {
        Self { vocabulary, mode }
    }

    pub fn mode(&self) -> SkillMatchMode {
        self.mode
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        match self.mode {
            SkillMatchMode::Strict => self.extract_strict(&tokens),
            SkillMatchMode::Normalized => self.extract_normalized(&tokens),
        }
    }

    fn extract_strict(&self, tokens: &[&str]) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for token in tokens {
            if let Some(skill) = self.vocabulary.exact(token) {
                if !found.iter().any(|f| f == skill) {
                    found.push(skill.to_string());
                }
            }
        }
        found
    }

    fn extract_normalized(&self, tokens: &[&str]) -> Vec<String> {
        let folded: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mut matched = vec![false; self.vocabulary.entries.len()];
        let mut found = Vec::new();

        for start in 0..folded.len() {
            for (idx, entry) in self.vocabulary.entries.iter().enumerate() {
                if matched[idx] || entry.folded_tokens.is_empty() {
                    continue;
                }
                let end = start + entry.folded_tokens.len();
                if end <= folded.len() && folded[start..end] == entry.folded_tokens[..] {
                    matched[idx] = true;
                    found.push(entry.canonical.clone());
                }
            }
        }
        found
    }
}

/// Characters that UAX #29 keeps inside a word (`Skills:Python`) but that
/// separate words in resume text.
const INFIX_SEPARATORS: [char; 2] = [':', '\u{00B7}'];

/// Possessive endings peeled off a word, so `Python's` yields `Python`.
const POSSESSIVE_SUFFIXES: [&str; 4] = ["'s", "'S", "\u{2019}s", "\u{2019}S"];

/// Splits text on UAX #29 word boundaries, dropping whitespace, then refines
/// each word:
/// - `:` and `·` inside a word are split out as their own tokens;
/// - `.` between a lowercase and an uppercase letter is split out
///   (`used.Python`), while `Node.js` and `example.com` stay whole;
/// - a trailing `'s` becomes a separate token.
///
/// A run of `+` or `#` directly after a word stays attached to it so `C++`
/// and `C#` come out as single tokens.
fn tokenize(text: &str) -> Vec<&str> {
    let mut spans: Vec<(usize, usize)> = Vec::new();

    for (start, segment) in text.split_word_bound_indices() {
        if segment.trim().is_empty() {
            continue;
        }
        let end = start + segment.len();
        if segment == "+" || segment == "#" {
            if let Some(last) = spans.last_mut() {
                let prev = &text[last.0..last.1];
                let attaches = last.1 == start
                    && prev
                        .chars()
                        .last()
                        .is_some_and(|c| c.is_alphanumeric() || c == '+' || c == '#');
                if attaches {
                    last.1 = end;
                    continue;
                }
            }
        }
        push_word(text, start, end, &mut spans);
    }

    spans.into_iter().map(|(s, e)| &text[s..e]).collect()
}

fn push_word(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    let mut piece_start = start;
    let mut prev: Option<char> = None;
    let mut chars = text[start..end].char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        let splits = INFIX_SEPARATORS.contains(&c)
            || (c == '.'
                && prev.is_some_and(char::is_lowercase)
                && next.is_some_and(char::is_uppercase));
        if splits {
            let at = start + offset;
            push_piece(text, piece_start, at, spans);
            spans.push((at, at + c.len_utf8()));
            piece_start = at + c.len_utf8();
        }
        prev = Some(c);
    }
    push_piece(text, piece_start, end, spans);
}

fn push_piece(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    if start >= end {
        return;
    }
    let piece = &text[start..end];
    for suffix in POSSESSIVE_SUFFIXES {
        if piece.len() > suffix.len() && piece.ends_with(suffix) {
            let cut = end - suffix.len();
            spans.push((start, cut));
            spans.push((cut, end));
            return;
        }
    }
    spans.push((start, end));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(skills: &[&str], mode: SkillMatchMode) -> SkillExtractor {
        SkillExtractor::new(Arc::new(SkillVocabulary::new(skills.iter().copied())), mode)
    }

    fn default_extractor(mode: SkillMatchMode) -> SkillExtractor {
        SkillExtractor::new(Arc::new(SkillVocabulary::default()), mode)
    }

    #[test]
    fn test_first_occurrence_order_and_dedup() {
        let ex = extractor(&["Python", "Java"], SkillMatchMode::Strict);
        assert_eq!(
            ex.extract("Python is great, Python rocks, Java too"),
            vec!["Python", "Java"]
        );
    }

    #[test]
    fn test_repeated_isolated_token_reported_once() {
        let ex = default_extractor(SkillMatchMode::Strict);
        for skill in ["Python", "SQL", "FastAPI", "Git", "C++"] {
            let text = format!("{skill} and {skill}; also {skill}.");
            let found = ex.extract(&text);
            assert_eq!(
                found.iter().filter(|s| s.as_str() == skill).count(),
                1,
                "skill {skill} in {found:?}"
            );
        }
    }

    #[test]
    fn test_vocabulary_order_does_not_drive_output_order() {
        let ex = default_extractor(SkillMatchMode::Strict);
        assert_eq!(
            ex.extract("Git, then SQL, then Python"),
            vec!["Git", "SQL", "Python"]
        );
    }

    #[test]
    fn test_strict_mode_is_case_sensitive() {
        let ex = default_extractor(SkillMatchMode::Strict);
        assert!(ex.extract("python and sql daily").is_empty());
    }

    #[test]
    fn test_strict_mode_misses_multi_word_skills() {
        let ex = default_extractor(SkillMatchMode::Strict);
        let found = ex.extract("Worked on Machine Learning and Data Analysis with Python");
        assert_eq!(found, vec!["Python"]);
    }

    #[test]
    fn test_strict_mode_ignores_substrings() {
        let ex = default_extractor(SkillMatchMode::Strict);
        // "JavaScript" must not yield "Java"; "Gitlab" must not yield "Git".
        assert_eq!(ex.extract("JavaScript on Gitlab"), vec!["JavaScript"]);
    }

    #[test]
    fn test_normalized_mode_matches_case_variants() {
        let ex = default_extractor(SkillMatchMode::Normalized);
        assert_eq!(
            ex.extract("python, SQL and react"),
            vec!["Python", "SQL", "React"]
        );
    }

    #[test]
    fn test_normalized_mode_matches_multi_word_skills() {
        let ex = default_extractor(SkillMatchMode::Normalized);
        let found = ex.extract("Skills: machine learning,\nData   Analysis; leadership");
        assert_eq!(found, vec!["Machine Learning", "Data Analysis", "Leadership"]);
    }

    #[test]
    fn test_normalized_mode_requires_contiguous_tokens() {
        let ex = default_extractor(SkillMatchMode::Normalized);
        assert!(ex.extract("machine, learning").is_empty());
    }

    #[test]
    fn test_plus_and_hash_stay_attached() {
        assert_eq!(tokenize("C++ and C# devs"), vec!["C++", "and", "C#", "devs"]);
        assert_eq!(tokenize("a + b"), vec!["a", "+", "b"]);
    }

    #[test]
    fn test_colon_separates_label_from_skill() {
        assert_eq!(
            tokenize("Skills:Python,Java"),
            vec!["Skills", ":", "Python", ",", "Java"]
        );
        let ex = default_extractor(SkillMatchMode::Strict);
        assert_eq!(ex.extract("Skills:Python,Java"), vec!["Python", "Java"]);
    }

    #[test]
    fn test_possessive_suffix_is_peeled() {
        assert_eq!(tokenize("Python's"), vec!["Python", "'s"]);
        let ex = default_extractor(SkillMatchMode::Strict);
        assert_eq!(
            ex.extract("Python's ecosystem and Git\u{2019}s internals"),
            vec!["Python", "Git"]
        );
    }

    #[test]
    fn test_normalized_mode_sees_through_infixes() {
        let ex = default_extractor(SkillMatchMode::Normalized);
        assert_eq!(ex.extract("Skills:python, Tools:git"), vec!["Python", "Git"]);
    }

    #[test]
    fn test_period_splits_only_lower_to_upper() {
        assert_eq!(tokenize("used.Python"), vec!["used", ".", "Python"]);
        assert_eq!(tokenize("Node.js"), vec!["Node.js"]);
        assert_eq!(tokenize("see example.com"), vec!["see", "example.com"]);
    }

    #[test]
    fn test_vocabulary_dedups_and_skips_blank() {
        let vocab = SkillVocabulary::new(["Rust", "Rust", " ", "Go"]);
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let ex = default_extractor(SkillMatchMode::Normalized);
        assert!(ex.extract("").is_empty());
    }
}
