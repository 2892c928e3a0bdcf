/// Number of leading bytes inspected when sniffing a file type.
pub const SNIFF_LEN: usize = 1024;

/// Reported for content that no known signature matches.
pub const FALLBACK_MIME: &str = "text/plain";

/// Guess the MIME type of a document from its leading bytes.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    let prefix = &bytes[..bytes.len().min(SNIFF_LEN)];
    infer::get(prefix)
        .map(|kind| kind.mime_type())
        .unwrap_or(FALLBACK_MIME)
}

pub fn is_pdf(mime: &str) -> bool {
    mime.contains("pdf")
}
