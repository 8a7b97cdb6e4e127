use serde_json::Value;

/// Uploaded image file attached to a post submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// MIME type, guessed from the extension when the client sent none.
    pub fn mime(&self) -> &str {
        if let Some(ct) = self.content_type.as_deref().filter(|ct| !ct.is_empty()) {
            return ct;
        }
        match self.extension().as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("webp") => "image/webp",
            Some("gif") => "image/gif",
            _ => "application/octet-stream",
        }
    }
}

/// A validated post ready to be sent upstream as multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSubmission {
    pub payload: Value,
    pub image: Option<ImageUpload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, ct: Option<&str>) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            content_type: ct.map(str::to_string),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(upload("photo.JPG", None).extension().as_deref(), Some("jpg"));
        assert_eq!(upload("archive.tar.gz", None).extension().as_deref(), Some("gz"));
        assert_eq!(upload("noext", None).extension(), None);
        assert_eq!(upload(".hidden", None).extension(), None);
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(upload("a.webp", None).mime(), "image/webp");
        assert_eq!(upload("a.png", Some("image/x-png")).mime(), "image/x-png");
        assert_eq!(upload("a.bin", Some("")).mime(), "application/octet-stream");
    }
}
