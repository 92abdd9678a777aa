//! Result caching regression test
//!
//! Layout analysis and recognition run at most once per loaded image, and
//! progress is reported for every recognition request.
//!
//!   Test 1: repeated bounding_boxes calls analyse the layout once
//!   Test 2: recognition runs once; cached calls report only 100
//!   Test 3: loading a new image invalidates both caches
//!   Test 4: layout boxes agree with recognized boxes after recognition
//!   Test 5: failed recognition keeps the cached layout

use pageocr_backend::NoProgress;
use pageocr_core::{PageSegMode, TextUnit};
use pageocr_engine::{OcrEngine, OcrError, RecognitionState};
use pageocr_test::{
    MOCK_MODEL, MockBackend, MockImageBackend, MockPage, ProgressRecorder, RegParams,
    sample_image, sample_page,
};

type MockEngine = OcrEngine<MockBackend, MockImageBackend>;

fn loaded_engine(backend: MockBackend) -> MockEngine {
    let mut engine = OcrEngine::new(backend, MockImageBackend::new(0.0, 0.0));
    engine.load_model(MOCK_MODEL).expect("load model");
    engine
        .load_image(&sample_image(), PageSegMode::default())
        .expect("load image");
    engine
}

/// Test 1: layout analysis is cached
#[test]
fn cache_reg_layout_once() {
    let mut rp = RegParams::new("cache_layout_once");

    let mut engine = loaded_engine(MockBackend::with_page(sample_page()));
    let first = engine.bounding_boxes(TextUnit::Word).expect("first");
    let second = engine.bounding_boxes(TextUnit::Word).expect("second");
    let lines = engine.bounding_boxes(TextUnit::Line).expect("lines");

    rp.compare_regions(&first, &second);
    rp.compare_values(9.0, first.len() as f64, 0.0);
    rp.compare_values(2.0, lines.len() as f64, 0.0);
    rp.compare_values(1.0, engine.backend().layout_calls() as f64, 0.0);
    rp.compare_values(0.0, engine.backend().recognize_calls() as f64, 0.0);
    rp.check(
        engine.state() == RecognitionState::LayoutAnalyzed,
        "state is LayoutAnalyzed",
    );

    assert!(rp.cleanup(), "cache_layout_once regression test failed");
}

/// Test 2: recognition is cached across every recognition read
#[test]
fn cache_reg_recognition_once() {
    let mut rp = RegParams::new("cache_recognition_once");

    let backend = MockBackend::with_page(sample_page()).with_progress_steps(&[0, 40, 80]);
    let mut engine = loaded_engine(backend);

    let mut recorder = ProgressRecorder::new();
    let words = engine
        .text_boxes(TextUnit::Word, &mut recorder)
        .expect("text boxes");
    rp.compare_values(9.0, words.len() as f64, 0.0);
    let first = recorder.take();
    rp.check(first == [0, 40, 80, 100], "first call relays and completes");

    engine.text(&mut recorder).expect("text");
    engine.hocr(&mut recorder).expect("hocr");
    engine
        .text_boxes(TextUnit::Line, &mut recorder)
        .expect("lines");
    rp.check(
        recorder.values() == [100, 100, 100],
        "cached calls report 100",
    );
    rp.compare_values(1.0, engine.backend().recognize_calls() as f64, 0.0);
    rp.check(
        engine.state() == RecognitionState::Recognized,
        "state is Recognized",
    );

    // Recognition implies layout; boxes need no separate analysis
    engine.bounding_boxes(TextUnit::Word).expect("boxes");
    rp.compare_values(0.0, engine.backend().layout_calls() as f64, 0.0);

    assert!(
        rp.cleanup(),
        "cache_recognition_once regression test failed"
    );
}

/// Test 3: a new image discards cached results
#[test]
fn cache_reg_invalidation() {
    let mut rp = RegParams::new("cache_invalidation");

    let mut engine = loaded_engine(MockBackend::with_page(sample_page()));
    let mut recorder = ProgressRecorder::new();
    engine.text(&mut recorder).expect("text");
    engine.bounding_boxes(TextUnit::Word).expect("boxes");
    recorder.take();

    engine
        .load_image(&sample_image(), PageSegMode::default())
        .expect("reload");
    rp.check(engine.state() == RecognitionState::Clean, "state reset");

    engine.text(&mut recorder).expect("text again");
    rp.check(
        recorder.values() == [0, 30, 60, 90, 100],
        "full progress sequence after reload",
    );
    rp.check(recorder.is_monotonic(), "progress is monotonic");
    rp.compare_values(2.0, engine.backend().recognize_calls() as f64, 0.0);

    engine
        .load_image(&sample_image(), PageSegMode::default())
        .expect("reload");
    engine.bounding_boxes(TextUnit::Word).expect("boxes again");
    rp.compare_values(1.0, engine.backend().layout_calls() as f64, 0.0);

    assert!(rp.cleanup(), "cache_invalidation regression test failed");
}

/// Test 4: word rectangles agree between layout and recognition
#[test]
fn cache_reg_boxes_agree() {
    let mut rp = RegParams::new("cache_boxes_agree");

    let mut engine = loaded_engine(MockBackend::with_page(sample_page()));
    let layout = engine.bounding_boxes(TextUnit::Word).expect("boxes");
    let recognized = engine
        .text_boxes(TextUnit::Word, &mut NoProgress)
        .expect("text boxes");
    let after = engine.bounding_boxes(TextUnit::Word).expect("boxes after");

    rp.compare_values(layout.len() as f64, recognized.len() as f64, 0.0);
    let same_rects = layout
        .iter()
        .zip(&recognized)
        .all(|(a, b)| a.rect == b.rect && a.flags == b.flags);
    rp.check(same_rects, "rects and flags agree");
    rp.compare_regions(&layout, &after);
    rp.compare_values(1.0, engine.backend().layout_calls() as f64, 0.0);

    assert!(rp.cleanup(), "cache_boxes_agree regression test failed");
}

/// Test 5: recognition failure leaves the cached layout in place
#[test]
fn cache_reg_failed_recognition() {
    let mut rp = RegParams::new("cache_failed_recognition");

    let mut engine = loaded_engine(MockBackend::with_page(MockPage::from_lines(&["a b c"])));
    engine.bounding_boxes(TextUnit::Word).expect("boxes");

    let mut failing = MockBackend::with_page(MockPage::from_lines(&["a b c"]));
    failing.fail_recognition(true);
    let mut failing_engine = loaded_engine(failing);
    failing_engine.bounding_boxes(TextUnit::Word).expect("boxes");

    let mut recorder = ProgressRecorder::new();
    let result = failing_engine.text(&mut recorder);
    rp.check(matches!(result, Err(OcrError::Backend(_))), "backend error");
    rp.check(recorder.values().is_empty(), "no completion on failure");
    rp.check(
        failing_engine.state() == RecognitionState::LayoutAnalyzed,
        "layout still cached",
    );
    let boxes = failing_engine.bounding_boxes(TextUnit::Word).expect("boxes");
    rp.compare_values(3.0, boxes.len() as f64, 0.0);
    rp.compare_values(1.0, failing_engine.backend().layout_calls() as f64, 0.0);

    let words = engine
        .text_boxes(TextUnit::Word, &mut recorder)
        .expect("healthy engine");
    rp.compare_values(3.0, words.len() as f64, 0.0);

    assert!(
        rp.cleanup(),
        "cache_failed_recognition regression test failed"
    );
}
