//! English sentence boundary detection
//!
//! Splits raw journal text into sentences ahead of per-sentence
//! classification. Terminators are `.`, `!` and `?`; a period is
//! suppressed when it ends a known abbreviation or a single-letter
//! initial, or sits between two digits (decimals). Closing quotes and
//! brackets after a terminator attach to the finished sentence. A
//! trailing fragment without any terminator still counts as a sentence.
//!
//! Abbreviation suppression wins over a following capital, so
//! "met Dr. Smith" never splits but "10 p.m. He left" stays joined too.

/// Common English abbreviations whose trailing period does not end a
/// sentence. Stored lowercase, without the trailing period; multi-part
/// forms keep their interior periods ("e.g", "u.s").
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "gen", "gov", "capt", "sgt", "sr", "jr", "st",
    "vs", "etc", "e.g", "i.e", "cf", "al", "inc", "ltd", "co", "corp", "dept", "est", "fig", "mt",
    "ave", "blvd", "approx", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec", "mon", "tue", "wed", "thu", "fri", "sat", "sun", "a.m", "p.m", "u.s",
    "u.k",
];

/// Characters that close a sentence after its terminator (quotes and
/// brackets trailing the final punctuation belong to the sentence).
fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']')
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into trimmed, non-empty sentences in original order
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (_, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        // Consume the whole terminator run ("...", "?!", etc.)
        let mut run_end = i;
        while run_end + 1 < chars.len() && is_terminator(chars[run_end + 1].1) {
            run_end += 1;
        }

        // A lone period gets the suppression checks
        if c == '.' && run_end == i && (is_decimal_point(&chars, i) || ends_abbreviation(&chars, i))
        {
            i += 1;
            continue;
        }

        // Attach trailing closing quotes/brackets to this sentence
        let mut end_idx = run_end;
        while end_idx + 1 < chars.len() && is_closing(chars[end_idx + 1].1) {
            end_idx += 1;
        }

        let strong = chars[i..=run_end].iter().any(|&(_, t)| t == '!' || t == '?');
        let next_nonspace = chars[end_idx + 1..]
            .iter()
            .map(|&(_, ch)| ch)
            .find(|ch| !ch.is_whitespace());

        // Periods (including ellipses) only end a sentence when the text
        // ends or continues with something other than a lowercase letter.
        let boundary = strong
            || match next_nonspace {
                None => true,
                Some(ch) => !ch.is_lowercase(),
            };

        if boundary {
            let (last_pos, last_char) = chars[end_idx];
            let end = last_pos + last_char.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }

        i = end_idx + 1;
    }

    // Trailing fragment without a terminator is still a sentence
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Period between two digits is a decimal point, not a boundary
fn is_decimal_point(chars: &[(usize, char)], i: usize) -> bool {
    let prev_digit = i > 0 && chars[i - 1].1.is_ascii_digit();
    let next_digit = i + 1 < chars.len() && chars[i + 1].1.is_ascii_digit();
    prev_digit && next_digit
}

/// Check whether the period at `i` terminates an abbreviation or a
/// single-letter initial ("J. Smith"). The standalone pronoun "I" is
/// exempt from the initial rule so "So did I." still ends a sentence.
fn ends_abbreviation(chars: &[(usize, char)], i: usize) -> bool {
    // Token = maximal run of letters and interior periods before `i`
    let mut k = i;
    let mut token = String::new();
    while k > 0 {
        let ch = chars[k - 1].1;
        if ch.is_alphabetic() || ch == '.' {
            token.push(ch);
            k -= 1;
        } else {
            break;
        }
    }
    if token.is_empty() {
        return false;
    }

    let token: String = token.chars().rev().collect();
    let token = token.trim_start_matches('.');

    if token == "I" {
        // The pronoun, not an initial
        return false;
    }

    if token.chars().count() == 1 {
        // Single letter before the period: an initial
        return true;
    }

    let token = token.to_lowercase();

    ABBREVIATIONS.contains(&token.as_str())
}
