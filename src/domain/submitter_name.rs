use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Returns a `SubmitterName` if the input holds at least two graphemes,
    /// an error message otherwise.
    pub fn parse(s: String) -> Result<SubmitterName, String> {
        if s.trim().is_empty() || s.graphemes(true).count() < 2 {
            Err("Name must be at least 2 characters".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
