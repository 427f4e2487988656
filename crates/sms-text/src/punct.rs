//! Case folding and ASCII punctuation removal.

/// Lower-case with Rust's default Unicode case mapping.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Remove the 32 ASCII punctuation characters, keeping everything else.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
