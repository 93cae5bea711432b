use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct InquirySubject(String);

impl InquirySubject {
    pub fn parse(s: String) -> Result<InquirySubject, String> {
        if s.graphemes(true).count() < 5 {
            Err("Subject must be at least 5 characters".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for InquirySubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
