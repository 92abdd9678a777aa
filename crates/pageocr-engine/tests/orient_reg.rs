//! Orientation regression test
//!
//!   Test 1: reference signals map to the expected rotations
//!   Test 2: detection failure yields the unknown orientation
//!   Test 3: thresholded images are released after every detection
//!   Test 4: orientation ignores the recognition cache

use pageocr_backend::NoProgress;
use pageocr_core::{Orientation, PageSegMode, TextUnit};
use pageocr_engine::{OcrEngine, OcrError, RecognitionState};
use pageocr_test::{MOCK_MODEL, MockBackend, MockImageBackend, RegParams, sample_image, sample_page};

fn loaded_engine(image_backend: MockImageBackend) -> OcrEngine<MockBackend, MockImageBackend> {
    let mut engine = OcrEngine::new(MockBackend::with_page(sample_page()), image_backend);
    engine
        .load_image(&sample_image(), PageSegMode::default())
        .expect("load image");
    engine
}

/// Test 1: up/down wins only by a clear margin, otherwise left/right decides
#[test]
fn orient_reg_reference_cases() {
    let mut rp = RegParams::new("orient_reference_cases");

    let cases: [(f32, f32, u32); 6] = [
        (10.0, 1.0, 0),
        (-10.0, 1.0, 180),
        (1.0, -10.0, 90),
        (1.0, 10.0, 270),
        (0.0, 0.0, 270),
        // |6| - |1| is exactly the margin, which is not enough
        (6.0, 1.0, 270),
    ];
    for (up, left, rotation) in cases {
        let mut engine = loaded_engine(MockImageBackend::new(up, left));
        let orientation = engine.orientation().expect("orientation");
        eprintln!("up={up} left={left} -> {:?}", orientation);
        rp.compare_values(rotation as f64, orientation.rotation as f64, 0.0);
        rp.compare_values(1.0, orientation.confidence as f64, 0.0);

        // Same image, same answer
        let again = engine.orientation().expect("orientation again");
        rp.check(again == orientation, "orientation is deterministic");
    }

    assert!(
        rp.cleanup(),
        "orient_reference_cases regression test failed"
    );
}

/// Test 2: a failing image backend is not an error
#[test]
fn orient_reg_failure() {
    let mut rp = RegParams::new("orient_failure");

    let mut engine = loaded_engine(MockImageBackend::failing());
    let orientation = engine.orientation().expect("orientation");
    rp.check(orientation == Orientation::UNKNOWN, "unknown orientation");
    rp.compare_values(0.0, orientation.confidence as f64, 0.0);
    rp.compare_values(1.0, engine.image_backend().calls() as f64, 0.0);

    let mut empty = OcrEngine::new(MockBackend::new(), MockImageBackend::new(10.0, 0.0));
    rp.check(
        matches!(empty.orientation(), Err(OcrError::NoImage)),
        "orientation needs an image",
    );

    assert!(rp.cleanup(), "orient_failure regression test failed");
}

/// Test 3: every thresholded image handed out is released
#[test]
fn orient_reg_release() {
    let mut rp = RegParams::new("orient_release");

    let mut engine = loaded_engine(MockImageBackend::new(-20.0, 3.0));
    for _ in 0..3 {
        engine.orientation().expect("orientation");
    }
    let mut failing = loaded_engine(MockImageBackend::failing());
    failing.orientation().expect("orientation");

    rp.compare_values(3.0, engine.backend().binaries_created() as f64, 0.0);
    rp.compare_values(3.0, engine.backend().binaries_released() as f64, 0.0);
    rp.compare_values(1.0, failing.backend().binaries_released() as f64, 0.0);
    rp.check(
        engine.image_backend().last_min_count() == Some(0),
        "default evidence count requested",
    );

    assert!(rp.cleanup(), "orient_release regression test failed");
}

/// Test 4: orientation neither uses nor disturbs cached results
#[test]
fn orient_reg_independent_of_cache() {
    let mut rp = RegParams::new("orient_independent_of_cache");

    let mut engine = loaded_engine(MockImageBackend::new(1.0, -9.0));
    engine.load_model(MOCK_MODEL).expect("load model");

    let before = engine.orientation().expect("before");
    engine
        .text_boxes(TextUnit::Word, &mut NoProgress)
        .expect("recognize");
    let after = engine.orientation().expect("after");

    rp.check(
        before == after,
        "same orientation before and after recognition",
    );
    rp.compare_values(90.0, after.rotation as f64, 0.0);
    rp.check(
        engine.state() == RecognitionState::Recognized,
        "recognition still cached",
    );
    rp.compare_values(0.0, engine.backend().layout_calls() as f64, 0.0);
    rp.compare_values(1.0, engine.backend().recognize_calls() as f64, 0.0);
    rp.compare_values(2.0, engine.image_backend().calls() as f64, 0.0);

    assert!(
        rp.cleanup(),
        "orient_independent_of_cache regression test failed"
    );
}
