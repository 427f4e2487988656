/// Maps a raw message to its canonical token string.
pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}
