use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct InquiryMessage(String);

impl InquiryMessage {
    pub fn parse(s: String) -> Result<InquiryMessage, String> {
        if s.graphemes(true).count() < 10 {
            Err("Message must be at least 10 characters".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for InquiryMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
