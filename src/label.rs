//! Label text as shown on screen

/// Text for a label, uppercased when the capitals setting is on.
///
/// Uses full Unicode case mapping: accented letters keep their accents and
/// `ß` becomes `SS`.
pub fn label_text(text: &str, use_capitals: bool) -> String {
    if use_capitals {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}

/// Approximate rendered width of `text` when every character is
/// `char_width` wide
pub fn approx_label_width(text: &str, char_width: f32) -> f32 {
    text.chars().count() as f32 * char_width
}
