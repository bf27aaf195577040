//! Text normalization and tokenization.
//!
//! Every later stage works on the output of [`normalize`]: NFKC-folded,
//! lowercase, whitespace-collapsed text in which the word "and" has been
//! turned into a comma so that lists read uniformly as comma-separated
//! clauses. [`tokenize`] then splits that text into word and separator
//! tokens carrying byte spans into the normalized string.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// ── Regex patterns ──────────────────────────────────────────────────────

static RE_AND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\band\b").unwrap());

// ── Normalization ───────────────────────────────────────────────────────

/// Normalize free text into the canonical parsing form.
///
/// Lowercases, folds Unicode compatibility forms, replaces the standalone
/// word "and" with a comma, collapses all whitespace runs to one space, and
/// removes empty clauses. The result is idempotent: normalizing twice
/// yields the same string.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfkc()
        .map(|c| if c == '\u{2019}' || c == '\u{2018}' { '\'' } else { c })
        .collect::<String>()
        .to_lowercase();
    let replaced = RE_AND.replace_all(&folded, ",");

    replaced
        .split(',')
        .map(|clause| clause.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|clause| !clause.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lowercase, trim and collapse inner whitespace of a single phrase.
pub fn fold_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

// ── Tokens ──────────────────────────────────────────────────────────────

/// Byte-level span into the tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token categories produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of letters and digits, possibly joined by `.`, `-`, `'` or `/`
    /// and possibly ending in a grade star (`a*`).
    Word,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A free-standing `-` (as in "physics - b").
    Dash,
    /// Sentence-ending punctuation: `.`, `!`, `?`, `;`.
    Stop,
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Lowercase surface text.
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Comma or sentence stop; these end a clause.
    pub fn is_boundary(&self) -> bool {
        matches!(self.kind, TokenKind::Comma | TokenKind::Stop)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '&'
}

fn is_joiner(c: char) -> bool {
    matches!(c, '.' | '-' | '\'' | '/')
}

/// Split text into word and separator tokens.
///
/// Whitespace and unrecognized punctuation (brackets, quotes) are dropped.
/// A `*` directly after `a` or `d` stays in the word so that `a*` and
/// `a*aa` survive as grade tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |(b, _)| *b);
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        if is_word_char(c) {
            let mut j = i + 1;
            while j < chars.len() {
                let cj = chars[j].1;
                let prev = chars[j - 1].1;
                let next = chars.get(j + 1).map(|(_, c)| *c);
                if is_word_char(cj)
                    || (is_joiner(cj) && prev.is_alphanumeric() && next.is_some_and(is_word_char))
                    || (cj == '*' && matches!(prev, 'a' | 'd' | 'A' | 'D'))
                {
                    j += 1;
                } else {
                    break;
                }
            }
            let end = byte_at(j);
            tokens.push(Token {
                kind: TokenKind::Word,
                text: text[start..end].to_lowercase(),
                span: Span { start, end },
            });
            i = j;
            continue;
        }

        let kind = match c {
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            '-' | '\u{2013}' | '\u{2014}' => Some(TokenKind::Dash),
            '.' | '!' | '?' | ';' => Some(TokenKind::Stop),
            _ => None,
        };
        if let Some(kind) = kind {
            let end = start + c.len_utf8();
            tokens.push(Token {
                kind,
                text: text[start..end].to_string(),
                span: Span { start, end },
            });
        }
        i += 1;
    }

    tokens
}

/// Rebuild text from the tokens whose `keep` flag is set.
///
/// Adjacent kept tokens keep their original gap; a gap left by removed
/// tokens becomes a single space before a word and nothing before a
/// separator. Commas that would lead the output, follow another boundary,
/// or trail it are dropped, so the result is never longer than `text`.
pub fn render(text: &str, tokens: &[Token], keep: &[bool]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last: Option<usize> = None;

    for (i, token) in tokens.iter().enumerate() {
        if !keep.get(i).copied().unwrap_or(false) {
            continue;
        }
        if token.kind == TokenKind::Comma {
            match last {
                None => continue,
                Some(l) if tokens[l].is_boundary() => continue,
                _ => {}
            }
        }
        if token.kind == TokenKind::Stop {
            if let Some(l) = last {
                if tokens[l].kind == TokenKind::Comma {
                    out.truncate(out.trim_end_matches(',').len());
                }
            }
        }
        match last {
            None => {}
            Some(l) if l + 1 == i => out.push_str(&text[tokens[l].span.end..token.span.start]),
            Some(_) if token.is_word() || token.kind == TokenKind::Dash => out.push(' '),
            Some(_) => {}
        }
        out.push_str(&text[token.span.start..token.span.end]);
        last = Some(i);
    }

    if let Some(l) = last {
        if tokens[l].kind == TokenKind::Comma {
            out.truncate(out.len() - tokens[l].text.len());
        }
    }
    out.trim_end().to_string()
}

// ── Phrase matching ─────────────────────────────────────────────────────

/// A set of multi-word phrases matched against word tokens, longest first.
#[derive(Debug, Clone, Default)]
pub struct PhraseSet {
    phrases: Vec<Vec<String>>,
}

impl PhraseSet {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases: Vec<Vec<String>> = phrases
            .into_iter()
            .map(|p| {
                tokenize(&fold_phrase(p.as_ref()))
                    .into_iter()
                    .filter(Token::is_word)
                    .map(|t| t.text)
                    .collect::<Vec<_>>()
            })
            .filter(|words| !words.is_empty())
            .collect();
        // Stable sort keeps declaration order among equal lengths.
        phrases.sort_by_key(|words| std::cmp::Reverse(words.len()));
        Self { phrases }
    }

    /// Length in tokens of the longest phrase starting at `tokens[at]`.
    ///
    /// Only contiguous word tokens participate in a match.
    pub fn match_at(&self, tokens: &[Token], at: usize) -> Option<usize> {
        self.phrases
            .iter()
            .find(|words| {
                words.len() <= tokens.len().saturating_sub(at)
                    && words
                        .iter()
                        .zip(&tokens[at..])
                        .all(|(w, t)| t.is_word() && t.text == *w)
            })
            .map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn normalize_replaces_and_and_collapses() {
        assert_eq!(
            normalize("A in maths and B in physics,  and  dropped chemistry"),
            "a in maths, b in physics, dropped chemistry"
        );
        assert_eq!(
            normalize("A in maths, , dropped music, and dropped art"),
            "a in maths, dropped music, dropped art"
        );
    }

    #[test]
    fn normalize_collapses_newlines() {
        assert_eq!(
            normalize("A in Maths\nB in Physics\n\tC in Chemistry"),
            "a in maths b in physics c in chemistry"
        );
    }

    #[test]
    fn normalize_keeps_and_inside_words() {
        assert_eq!(normalize("Band and Sandwich"), "band, sandwich");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in [
            "I got A* in Maths and B in Physics. Interested in Med!",
            "  , and , ",
            "Maths: A*, Physics - B, Chem C",
            "I’m hoping to study English literature",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input}");
        }
    }

    #[test]
    fn normalize_folds_curly_apostrophes() {
        assert_eq!(normalize("I’m keen"), "i'm keen");
    }

    #[test]
    fn tokenize_grades_and_separators() {
        let tokens = tokenize("maths: a*, physics - b.");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Colon,
                TokenKind::Word,
                TokenKind::Comma,
                TokenKind::Word,
                TokenKind::Dash,
                TokenKind::Word,
                TokenKind::Stop,
            ]
        );
        assert_eq!(tokens[2].text, "a*");
    }

    #[test]
    fn tokenize_keeps_joined_words() {
        assert_eq!(words("f.maths d&t further-math i'm"), vec![
            "f.maths",
            "d&t",
            "further-math",
            "i'm"
        ]);
        assert_eq!(words("a*aa in art & design"), vec!["a*aa", "in", "art", "&", "design"]);
    }

    #[test]
    fn tokenize_spans_point_into_input() {
        let input = "got b in chem";
        for token in tokenize(input) {
            assert_eq!(&input[token.span.start..token.span.end], token.text);
        }
    }

    #[test]
    fn render_drops_orphan_commas() {
        let text = "i got a in maths, dropped chemistry, b in physics";
        let tokens = tokenize(text);
        let keep: Vec<bool> = tokens
            .iter()
            .map(|t| t.text != "dropped" && t.text != "chemistry")
            .collect();
        assert_eq!(render(text, &tokens, &keep), "i got a in maths, b in physics");
    }

    #[test]
    fn render_never_grows() {
        let text = "dropped maths, a in physics,b in chemistry";
        let tokens = tokenize(text);
        let keep: Vec<bool> = tokens.iter().map(|t| t.text != "dropped").collect();
        let out = render(text, &tokens, &keep);
        assert!(out.len() <= text.len());
        assert!(!out.starts_with(','));
    }

    #[test]
    fn phrase_set_prefers_longest() {
        let set = PhraseSet::new(["withdrew", "withdrew from", "gave up"]);
        let tokens = tokenize("withdrew from music");
        assert_eq!(set.match_at(&tokens, 0), Some(2));
        let tokens = tokenize("i gave up art");
        assert_eq!(set.match_at(&tokens, 1), Some(2));
        assert_eq!(set.match_at(&tokens, 0), None);
    }
}
