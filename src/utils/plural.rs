//! Pluralization for summary lines.

/// "s" suffix for a count: `plural_s(1)` is `""`, anything else `"s"`.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count with noun: `plural_count(2, "theme")` -> `"2 themes"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}
