//! Centralized value formatting.
//!
//! Inline CSS values emitted by the web component and the timestamps
//! printed by the preview tool all go through this module, so that the two
//! surfaces agree on precision and units.

/// Format a float with at most `precision` decimals, trimming trailing zeros.
///
/// # Examples
/// ```
/// use festive_types::formatting::format_trimmed;
/// assert_eq!(format_trimmed(12.0, 2), "12");
/// assert_eq!(format_trimmed(12.50, 2), "12.5");
/// assert_eq!(format_trimmed(-0.126, 2), "-0.13");
/// ```
pub fn format_trimmed(n: f32, precision: usize) -> String {
    let s = format!("{:.*}", precision, n);
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a CSS pixel length.
///
/// # Examples
/// ```
/// use festive_types::formatting::css_px;
/// assert_eq!(css_px(300.0), "300px");
/// assert_eq!(css_px(-12.25), "-12.25px");
/// ```
pub fn css_px(n: f32) -> String {
    format!("{}px", format_trimmed(n, 2))
}

/// Format a CSS percentage.
///
/// # Examples
/// ```
/// use festive_types::formatting::css_pct;
/// assert_eq!(css_pct(42.5), "42.5%");
/// ```
pub fn css_pct(n: f32) -> String {
    format!("{}%", format_trimmed(n, 2))
}

/// Format a CSS time in seconds.
///
/// # Examples
/// ```
/// use festive_types::formatting::css_secs;
/// assert_eq!(css_secs(7.0), "7s");
/// assert_eq!(css_secs(0.35), "0.35s");
/// ```
pub fn css_secs(n: f32) -> String {
    format!("{}s", format_trimmed(n, 2))
}

/// Format a CSS `transform` value that translates then rotates.
///
/// # Examples
/// ```
/// use festive_types::formatting::css_translate_rotate;
/// assert_eq!(
///     css_translate_rotate(10.0, -20.5, 45.0),
///     "translate(10px, -20.5px) rotate(45deg)"
/// );
/// ```
pub fn css_translate_rotate(x: f32, y: f32, deg: f32) -> String {
    format!(
        "translate({}, {}) rotate({}deg)",
        css_px(x),
        css_px(y),
        format_trimmed(deg, 2)
    )
}

/// Format a millisecond timestamp as `M:SS.mmm`.
///
/// # Examples
/// ```
/// use festive_types::formatting::format_clock_ms;
/// assert_eq!(format_clock_ms(0), "0:00.000");
/// assert_eq!(format_clock_ms(12_000), "0:12.000");
/// assert_eq!(format_clock_ms(125_400), "2:05.400");
/// ```
pub fn format_clock_ms(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}.{:03}", secs / 60, secs % 60, ms % 1000)
}
