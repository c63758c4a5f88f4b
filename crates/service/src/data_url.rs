use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const DEFAULT_MIME: &str = "application/octet-stream";

/// A binary file inlined as text: `data:<mime>;base64,<payload>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encode `bytes`; `None` when there is nothing to encode (no file chosen).
    pub fn encode(mime: Option<&str>, bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        let mime = mime
            .map(|m| m.split(';').next().unwrap_or("").trim())
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MIME);
        Some(Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes))))
    }

    pub fn mime(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(mime, _)| mime)
            .unwrap_or(DEFAULT_MIME)
    }

    pub fn into_string(self) -> String { self.0 }
}
