use once_cell::sync::Lazy;
use regex::Regex;

// ECMAScript whitespace. Differs from Unicode White_Space: U+FEFF is in, U+0085 is out.
const SPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Anything that is not an ASCII word character or whitespace is dropped.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[^A-Za-z0-9_{SPACE_CLASS}]")).expect("valid regex"));
static SPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[{SPACE_CLASS}]+")).expect("valid regex"));

/// Lower-cases `text`, strips punctuation and splits it on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    SPACE_RUN
        .split(&stripped)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
