//! Document text extraction. PDF parsing is delegated to `pdf-extract`.

use thiserror::Error;

/// Maximum accepted document size (10 MiB).
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF could not be read: {0}")]
    Pdf(String),

    #[error("document is neither a PDF nor UTF-8 text")]
    UnsupportedFormat,

    #[error("document contains no extractable text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(PDF_MAGIC) {
            DocumentKind::Pdf
        } else {
            DocumentKind::PlainText
        }
    }
}

/// Extracts the raw text of a document. Blocking; run it off the async runtime.
///
/// A document yielding only whitespace is an error: there is nothing to score.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = match DocumentKind::detect(bytes) {
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::PlainText => std::str::from_utf8(bytes)
            .map_err(|_| ExtractionError::UnsupportedFormat)?
            .to_string(),
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    Ok(text)
}

/// pdf-extract panics on some structurally valid but incomplete PDFs
/// (e.g. a page without `/Resources`), so panics are reported as read failures.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "parser panicked".to_string());
            Err(ExtractionError::Pdf(reason))
        }
    }
}

/// Builds a one-page PDF showing `text` in Helvetica, with a valid xref table.
#[cfg(test)]
pub(crate) fn single_page_pdf(text: &str, with_resources: bool) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 712 Td ({text}) Tj ET");
    let resources = if with_resources {
        " /Resources << /Font << /F1 4 0 R >> >>"
    } else {
        ""
    };
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!("<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792]{resources} /Contents 5 0 R >>"),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_pdf_header() {
        assert_eq!(DocumentKind::detect(b"%PDF-1.7\n..."), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect(b"Jane Doe"), DocumentKind::PlainText);
        assert_eq!(DocumentKind::detect(b""), DocumentKind::PlainText);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_text("Profil: Analis data, 3 tahun".as_bytes()).unwrap();
        assert_eq!(text, "Profil: Analis data, 3 tahun");
    }

    #[test]
    fn test_blank_document_is_empty_error() {
        assert!(matches!(extract_text(b"  \n\t"), Err(ExtractionError::Empty)));
        assert!(matches!(extract_text(b""), Err(ExtractionError::Empty)));
    }

    #[test]
    fn test_binary_garbage_is_unsupported() {
        let err = extract_text(&[0xff, 0xfe, 0x00, 0x80]).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat));
    }

    #[test]
    fn test_truncated_pdf_is_pdf_error() {
        let err = extract_text(b"%PDF-1.4\nthis is not really a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[test]
    fn test_pdf_text_is_extracted() {
        let pdf = single_page_pdf("Profile contact python", true);
        assert_eq!(DocumentKind::detect(&pdf), DocumentKind::Pdf);

        let text = extract_text(&pdf).unwrap().to_lowercase();
        assert!(text.contains("profile"), "got {text:?}");
        assert!(text.contains("contact"), "got {text:?}");
        assert!(text.contains("python"), "got {text:?}");
    }

    #[test]
    fn test_page_without_resources_is_pdf_error() {
        let pdf = single_page_pdf("Profile contact python", false);
        let err = extract_text(&pdf).unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }
}
