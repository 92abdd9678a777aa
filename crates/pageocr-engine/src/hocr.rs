//! hOCR document template
//!
//! Backends produce only the per-page fragment. It is wrapped verbatim in
//! an XHTML 1.0 Transitional document whose head names the backend version.

/// Capabilities advertised in the `ocr-capabilities` meta tag.
pub const OCR_CAPABILITIES: &str = "ocr_page ocr_carea ocr_par ocr_line ocrx_word ocrp_wconf";

/// Build a complete hOCR document around a page fragment.
///
/// `body` is inserted unescaped.
pub fn hocr_document(version: &str, body: &str) -> String {
    let mut doc = String::with_capacity(body.len() + 512);
    doc.push_str(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\"\n",
        "    \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n",
        "<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"en\" lang=\"en\">\n",
        " <head>\n",
        "  <title></title>\n",
        "  <meta http-equiv=\"Content-Type\" content=\"text/html;charset=utf-8\"/>\n",
    ));
    doc.push_str("  <meta name='ocr-system' content='");
    doc.push_str(version);
    doc.push_str("' />\n");
    doc.push_str("  <meta name='ocr-capabilities' content='");
    doc.push_str(OCR_CAPABILITIES);
    doc.push_str("'/>\n");
    doc.push_str(" </head>\n <body>\n");
    doc.push_str(body);
    doc.push_str(" </body>\n</html>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_in_ocr_system() {
        let doc = hocr_document("5.3.0", "");
        assert!(doc.contains("<meta name='ocr-system' content='5.3.0' />"));
        assert!(doc.contains(&format!(
            "<meta name='ocr-capabilities' content='{}'/>",
            OCR_CAPABILITIES
        )));
    }

    #[test]
    fn test_body_unescaped() {
        let body = "  <div class='ocr_page' id='page_1'>&amp; <b></div>\n";
        let doc = hocr_document("v", body);
        let start = doc.find("<body>\n").unwrap() + "<body>\n".len();
        let end = doc.find(" </body>").unwrap();
        assert_eq!(&doc[start..end], body);
    }

    #[test]
    fn test_document_shape() {
        let doc = hocr_document("v", "");
        assert!(doc.starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        ));
        assert!(doc.contains("XHTML 1.0 Transitional"));
        assert!(doc.ends_with("</html>\n"));
    }
}
