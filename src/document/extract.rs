use super::detect::is_pdf;
use crate::error::{DocqaError, Result};
use std::panic;

/// Turn document bytes into plain text.
///
/// PDF content goes through the PDF extractor; everything else must be
/// valid UTF-8 and is used as is.
pub fn extract_text(bytes: &[u8], mime: &str) -> Result<String> {
    if is_pdf(mime) {
        extract_pdf_text(bytes)
    } else {
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|e| DocqaError::Extraction(format!("file is not valid UTF-8 text ({})", e)))
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    // pdf-extract panics on some malformed files instead of returning an error
    match catch_quietly(|| pdf_extract::extract_text_from_mem(bytes)) {
        Some(Ok(text)) => Ok(text),
        Some(Err(e)) => Err(DocqaError::Extraction(format!("failed to parse PDF: {}", e))),
        None => Err(DocqaError::Extraction(
            "failed to parse PDF: malformed document".to_string(),
        )),
    }
}

/// Run `f`, turning a panic into `None` without printing the panic message.
///
/// The panic hook is process-wide; it is swapped out only for the duration
/// of the call and restored afterwards.
fn catch_quietly<F, R>(f: F) -> Option<R>
where
    F: FnOnce() -> R + panic::UnwindSafe,
{
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(f);
    panic::set_hook(previous);
    result.ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_catch_quietly_silences_and_restores_hook() {
        let reported = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&reported);
        panic::set_hook(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let caught = catch_quietly(|| -> u32 { panic!("malformed xref") });
        assert_eq!(caught, None);
        assert_eq!(reported.load(Ordering::SeqCst), 0);

        assert_eq!(catch_quietly(|| 7), Some(7));

        // The hook installed before the call is back in place
        let _ = panic::catch_unwind(|| panic!("after"));
        assert_eq!(reported.load(Ordering::SeqCst), 1);

        let _ = panic::take_hook();
    }
}
