//! # Reply format
//!
//! Converts the small markdown subset the model tends to emit into Telegram HTML. Passes run in
//! a fixed order, each over the whole string:
//!
//! 1. `**X**` → `<b>X</b>`
//! 2. a line-leading `*` followed by whitespace → `-`
//! 3. a `*` with whitespace on both sides → `-`
//! 4. `_X_` → `<i>X</i>`
//! 5. `` `X` `` → `<code>X</code>`
//! 6. a line of only `---` (plus spaces or tabs) → `<hr>`
//!
//! Nothing is escaped: characters that are special in HTML pass through as-is.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.+?)_").unwrap());
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").unwrap());
static RULE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*---[ \t\r]*$").unwrap());

/// Applies every pass in order and returns Telegram HTML.
pub fn markdown_to_html(text: &str) -> String {
    let text = BOLD_PATTERN.replace_all(text, "<b>$1</b>");
    let text = star_bullets_to_hyphens(&text);
    let text = ITALIC_PATTERN.replace_all(&text, "<i>$1</i>");
    let text = CODE_PATTERN.replace_all(&text, "<code>$1</code>");
    RULE_PATTERN.replace_all(&text, "<hr>").into_owned()
}

/// Passes 2 and 3: a `*` followed by whitespace becomes `-` when it starts the text or a line,
/// or when whitespace precedes it.
fn star_bullets_to_hyphens(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c != '*' {
                return c;
            }
            let followed_by_space = chars.get(i + 1).is_some_and(|n| n.is_whitespace());
            let preceded_by_space_or_start = i == 0 || chars[i - 1].is_whitespace();
            if followed_by_space && preceded_by_space_or_start {
                '-'
            } else {
                c
            }
        })
        .collect()
}
