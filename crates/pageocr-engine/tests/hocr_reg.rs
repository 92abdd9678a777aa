//! hOCR regression test
//!
//!   Test 1: document header names the backend version
//!   Test 2: page markup is embedded verbatim

use pageocr_backend::NoProgress;
use pageocr_core::PageSegMode;
use pageocr_engine::{OcrEngine, hocr_document};
use pageocr_test::{
    MOCK_MODEL, MOCK_VERSION, MockBackend, MockImageBackend, MockPage, RegParams, sample_image,
    sample_page,
};

fn loaded_engine(page: MockPage) -> OcrEngine<MockBackend, MockImageBackend> {
    let mut engine = OcrEngine::new(
        MockBackend::with_page(page),
        MockImageBackend::new(0.0, 0.0),
    );
    engine.load_model(MOCK_MODEL).expect("load model");
    engine
        .load_image(&sample_image(), PageSegMode::default())
        .expect("load image");
    engine
}

/// Test 1: XHTML header with the ocr-system meta tag
#[test]
fn hocr_reg_header() {
    let mut rp = RegParams::new("hocr_header");

    let mut engine = loaded_engine(sample_page());
    let doc = engine.hocr(&mut NoProgress).expect("hocr");

    rp.check(
        doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"),
        "xml declaration first",
    );
    rp.check(
        doc.contains("-//W3C//DTD XHTML 1.0 Transitional//EN"),
        "XHTML 1.0 Transitional doctype",
    );
    rp.check(
        doc.contains(&format!("<meta name='ocr-system' content='{}' />", MOCK_VERSION)),
        "ocr-system names the backend version",
    );
    rp.check(doc.contains("ocr-capabilities"), "capabilities advertised");
    rp.check(doc.ends_with(" </body>\n</html>\n"), "document closed");

    assert!(rp.cleanup(), "hocr_header regression test failed");
}

/// Test 2: the backend fragment appears unchanged inside the body
#[test]
fn hocr_reg_body() {
    let mut rp = RegParams::new("hocr_body");

    let mut engine = loaded_engine(MockPage::from_lines(&["R&D <lab>", "second"]));
    let doc = engine.hocr(&mut NoProgress).expect("hocr");

    rp.check(doc.contains("class='ocr_page'"), "page element");
    rp.compare_values(2.0, doc.matches("class='ocr_line'").count() as f64, 0.0);
    rp.compare_values(3.0, doc.matches("class='ocrx_word'").count() as f64, 0.0);
    rp.check(doc.contains(">R&amp;D</span>"), "word text escaped once");
    rp.check(doc.contains(">&lt;lab&gt;</span>"), "markup escaped once");
    rp.check(doc.contains("x_wconf 91"), "word confidence present");

    // Only the wrapper differs from the standalone template
    let body_start = doc.find("<body>\n").expect("body start") + "<body>\n".len();
    let body_end = doc.rfind(" </body>").expect("body end");
    let fragment = &doc[body_start..body_end];
    rp.compare_strings(&hocr_document(MOCK_VERSION, fragment), &doc);
    rp.check(
        fragment.starts_with("  <div class='ocr_page' id='page_1'"),
        "first page fragment",
    );

    assert!(rp.cleanup(), "hocr_body regression test failed");
}
