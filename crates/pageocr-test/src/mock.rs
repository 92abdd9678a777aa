//! Scripted backends
//!
//! [`MockBackend`] lays out a [`MockPage`] on a fixed grid and reports it
//! through the [`RecognitionBackend`] interface, counting every call so
//! tests can observe caching. [`MockImageBackend`] returns a fixed
//! orientation signal.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use pageocr_backend::{
    BackendError, BackendResult, EngineMode, ImageBackend, IteratorLevel, OrientSignal,
    PageIterator, ProgressSink, RecognitionBackend,
};
use pageocr_core::{Image, PageSegMode, Rectangle};

/// Model data accepted by [`MockBackend::init`].
pub const MOCK_MODEL: &[u8] = b"MOCKMODEL\x00eng";

/// Version reported by [`MockBackend`].
pub const MOCK_VERSION: &str = "5.3.0-mock";

const MODEL_MAGIC: &[u8] = b"MOCKMODEL";

// Page grid: every character is CHAR_WIDTH wide, lines are LINE_PITCH apart
const MARGIN: i32 = 10;
const CHAR_WIDTH: i32 = 10;
const WORD_GAP: i32 = 10;
const LINE_HEIGHT: i32 = 20;
const LINE_PITCH: i32 = 30;

const DEFAULT_CONFIDENCE: f32 = 91.0;

/// Progress reported by [`MockBackend::recognize`]; deliberately stops
/// short of 100.
const DEFAULT_PROGRESS_STEPS: [u8; 4] = [0, 30, 60, 90];

/// A word placed on the page grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MockWord {
    pub text: String,
    pub rect: Rectangle,
    /// Confidence as a percentage
    pub confidence: f32,
}

/// Page content served by [`MockBackend`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockPage {
    lines: Vec<Vec<MockWord>>,
}

impl MockPage {
    /// Lay out whitespace-separated words, one text line per entry.
    ///
    /// Blank entries are dropped.
    pub fn from_lines(lines: &[&str]) -> Self {
        let lines = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                let top = MARGIN + row as i32 * LINE_PITCH;
                let mut left = MARGIN;
                line.split_whitespace()
                    .map(|text| {
                        let right = left + text.chars().count() as i32 * CHAR_WIDTH;
                        let word = MockWord {
                            text: text.to_string(),
                            rect: Rectangle::from_corners(left, top, right, top + LINE_HEIGHT),
                            confidence: DEFAULT_CONFIDENCE,
                        };
                        left = right + WORD_GAP;
                        word
                    })
                    .collect()
            })
            .collect();
        Self { lines }
    }

    /// Override the confidence of one word.
    ///
    /// # Panics
    ///
    /// Panics if the word does not exist.
    pub fn with_confidence(mut self, line: usize, word: usize, confidence: f32) -> Self {
        self.lines[line][word].confidence = confidence;
        self
    }

    pub fn lines(&self) -> &[Vec<MockWord>] {
        &self.lines
    }

    pub fn words(&self) -> impl Iterator<Item = &MockWord> {
        self.lines.iter().flatten()
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Page text: words separated by spaces, each line ending in `\n`.
    pub fn text(&self) -> String {
        self.lines.iter().map(|line| line_text(line)).collect()
    }

    /// Union of all word rectangles.
    pub fn extent(&self) -> Option<Rectangle> {
        union(self.words().map(|w| w.rect))
    }
}

fn line_text(line: &[MockWord]) -> String {
    let mut text = line
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    text.push('\n');
    text
}

fn union(rects: impl Iterator<Item = Rectangle>) -> Option<Rectangle> {
    rects.reduce(|a, b| Rectangle {
        left: a.left.min(b.left),
        top: a.top.min(b.top),
        right: a.right.max(b.right),
        bottom: a.bottom.max(b.bottom),
    })
}

fn mean(values: impl Iterator<Item = f32>) -> f32 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f32 }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Thresholded image handed out by [`MockBackend`].
///
/// Dropping it is recorded as a release.
#[derive(Debug)]
pub struct MockBinary {
    pub width: u32,
    pub height: u32,
    released: Rc<Cell<usize>>,
}

impl Drop for MockBinary {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

/// Recognition backend serving a scripted page.
#[derive(Debug)]
pub struct MockBackend {
    page: MockPage,
    language: Option<String>,
    engine_mode: Option<EngineMode>,
    image: Option<(u32, u32)>,
    page_seg_mode: PageSegMode,
    rectangle: Option<(i32, i32, i32, i32)>,
    layout_done: bool,
    recognized: bool,
    fail_layout: bool,
    fail_recognition: bool,
    progress_steps: Vec<u8>,
    variables: HashMap<String, String>,
    init_calls: usize,
    layout_calls: usize,
    recognize_calls: usize,
    clear_calls: usize,
    set_image_calls: usize,
    binaries_created: usize,
    binaries_released: Rc<Cell<usize>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a backend serving an empty page.
    pub fn new() -> Self {
        Self::with_page(MockPage::default())
    }

    pub fn with_page(page: MockPage) -> Self {
        let variables = [
            ("tessedit_char_whitelist", ""),
            ("user_defined_dpi", "0"),
            ("preserve_interword_spaces", "0"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            page,
            language: None,
            engine_mode: None,
            image: None,
            page_seg_mode: PageSegMode::default(),
            rectangle: None,
            layout_done: false,
            recognized: false,
            fail_layout: false,
            fail_recognition: false,
            progress_steps: DEFAULT_PROGRESS_STEPS.to_vec(),
            variables,
            init_calls: 0,
            layout_calls: 0,
            recognize_calls: 0,
            clear_calls: 0,
            set_image_calls: 0,
            binaries_created: 0,
            binaries_released: Rc::new(Cell::new(0)),
        }
    }

    /// Progress values reported by each recognition pass.
    pub fn with_progress_steps(mut self, steps: &[u8]) -> Self {
        self.progress_steps = steps.to_vec();
        self
    }

    pub fn fail_layout(&mut self, fail: bool) {
        self.fail_layout = fail;
    }

    pub fn fail_recognition(&mut self, fail: bool) {
        self.fail_recognition = fail;
    }

    /// Set [`sample_image`](crate::sample_image) directly, bypassing any
    /// engine.
    pub fn load_sample_image(&mut self) {
        self.set_image(&crate::sample_image());
    }

    /// Mark layout analysis as done without counting a call.
    pub fn force_layout(&mut self) {
        self.layout_done = true;
    }

    /// Mark recognition as done without counting a call.
    pub fn force_recognized(&mut self) {
        self.layout_done = true;
        self.recognized = true;
    }

    pub fn page(&self) -> &MockPage {
        &self.page
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn engine_mode(&self) -> Option<EngineMode> {
        self.engine_mode
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn page_seg_mode(&self) -> PageSegMode {
        self.page_seg_mode
    }

    /// Active rectangle as `(left, top, width, height)`.
    pub fn rectangle(&self) -> Option<(i32, i32, i32, i32)> {
        self.rectangle
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls
    }

    pub fn layout_calls(&self) -> usize {
        self.layout_calls
    }

    pub fn recognize_calls(&self) -> usize {
        self.recognize_calls
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls
    }

    pub fn set_image_calls(&self) -> usize {
        self.set_image_calls
    }

    pub fn binaries_created(&self) -> usize {
        self.binaries_created
    }

    pub fn binaries_released(&self) -> usize {
        self.binaries_released.get()
    }

    fn require_image(&self) -> BackendResult<()> {
        if self.image.is_some() {
            Ok(())
        } else {
            Err(BackendError::NoImage)
        }
    }

    fn require_recognized(&self) -> BackendResult<()> {
        self.require_image()?;
        if self.recognized {
            Ok(())
        } else {
            Err(BackendError::TextUnavailable(
                "recognition has not run".to_string(),
            ))
        }
    }

    fn hocr_fragment(&self, page: u32) -> String {
        let (width, height) = self.image.unwrap_or((0, 0));
        let page_id = page + 1;
        let mut out = format!(
            "  <div class='ocr_page' id='page_{page_id}' title='image \"\"; bbox 0 0 {width} {height}; ppageno {page}'>\n"
        );
        let mut word_id = 0;
        for (line_no, line) in self.page.lines.iter().enumerate() {
            let Some(bbox) = union(line.iter().map(|w| w.rect)) else {
                continue;
            };
            out.push_str(&format!(
                "   <span class='ocr_line' id='line_{page_id}_{}' title='bbox {} {} {} {}'>\n",
                line_no + 1,
                bbox.left,
                bbox.top,
                bbox.right,
                bbox.bottom
            ));
            for word in line {
                word_id += 1;
                out.push_str(&format!(
                    "    <span class='ocrx_word' id='word_{page_id}_{word_id}' title='bbox {} {} {} {}; x_wconf {}'>{}</span>\n",
                    word.rect.left,
                    word.rect.top,
                    word.rect.right,
                    word.rect.bottom,
                    word.confidence.round() as i32,
                    escape_xml(&word.text)
                ));
            }
            out.push_str("   </span>\n");
        }
        out.push_str("  </div>\n");
        out
    }
}

impl RecognitionBackend for MockBackend {
    type Iter<'a> = MockIterator<'a>;
    type Binary = MockBinary;

    fn init(&mut self, model: &[u8], language: &str, mode: EngineMode) -> BackendResult<()> {
        self.init_calls += 1;
        if !model.starts_with(MODEL_MAGIC) {
            return Err(BackendError::InitFailed(
                "unrecognized model format".to_string(),
            ));
        }
        self.language = Some(language.to_string());
        self.engine_mode = Some(mode);
        Ok(())
    }

    fn version(&self) -> String {
        MOCK_VERSION.to_string()
    }

    fn set_page_seg_mode(&mut self, mode: PageSegMode) {
        self.page_seg_mode = mode;
    }

    fn set_image(&mut self, image: &Image) {
        self.set_image_calls += 1;
        self.image = Some((image.width(), image.height()));
        self.rectangle = None;
        self.layout_done = false;
        self.recognized = false;
    }

    fn set_rectangle(&mut self, left: i32, top: i32, width: i32, height: i32) {
        self.rectangle = Some((left, top, width, height));
    }

    fn clear(&mut self) {
        self.clear_calls += 1;
        self.image = None;
        self.rectangle = None;
        self.layout_done = false;
        self.recognized = false;
    }

    fn analyse_layout(&mut self) -> BackendResult<()> {
        self.require_image()?;
        if self.fail_layout {
            return Err(BackendError::LayoutFailed("scripted failure".to_string()));
        }
        self.layout_calls += 1;
        self.layout_done = true;
        Ok(())
    }

    fn recognize(&mut self, monitor: &mut dyn ProgressSink) -> BackendResult<()> {
        self.require_image()?;
        if self.language.is_none() {
            return Err(BackendError::RecognitionFailed(
                "no model loaded".to_string(),
            ));
        }
        if self.fail_recognition {
            return Err(BackendError::RecognitionFailed(
                "scripted failure".to_string(),
            ));
        }
        self.recognize_calls += 1;
        for &step in &self.progress_steps {
            monitor.progress(step);
        }
        self.layout_done = true;
        self.recognized = true;
        Ok(())
    }

    fn iterator(&mut self) -> Option<MockIterator<'_>> {
        if self.image.is_none() || !self.layout_done || self.page.lines.is_empty() {
            return None;
        }
        Some(MockIterator::new(&self.page, self.recognized))
    }

    fn utf8_text(&mut self) -> BackendResult<String> {
        self.require_recognized()?;
        Ok(self.page.text())
    }

    fn hocr_text(&mut self, page: u32) -> BackendResult<String> {
        self.require_recognized()?;
        Ok(self.hocr_fragment(page))
    }

    fn thresholded_image(&mut self) -> Option<MockBinary> {
        let (width, height) = self.image?;
        self.binaries_created += 1;
        Some(MockBinary {
            width,
            height,
            released: Rc::clone(&self.binaries_released),
        })
    }

    fn variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }

    fn set_variable(&mut self, name: &str, value: &str) -> BackendResult<()> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None => Err(BackendError::VariableRejected {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

/// Iterator over a [`MockPage`].
///
/// The page is a single block and paragraph.
#[derive(Debug, Clone)]
pub struct MockIterator<'a> {
    page: &'a MockPage,
    recognized: bool,
    line: usize,
    word: usize,
    symbol: usize,
}

impl<'a> MockIterator<'a> {
    pub fn new(page: &'a MockPage, recognized: bool) -> Self {
        Self {
            page,
            recognized,
            line: 0,
            word: 0,
            symbol: 0,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.line >= self.page.lines.len()
    }

    fn current_line(&self) -> Option<&'a [MockWord]> {
        self.page.lines.get(self.line).map(Vec::as_slice)
    }

    fn current_word(&self) -> Option<&'a MockWord> {
        self.current_line()?.get(self.word)
    }

    fn next_word(&mut self) {
        self.symbol = 0;
        self.word += 1;
        if self.word >= self.current_line().map_or(0, <[MockWord]>::len) {
            self.line += 1;
            self.word = 0;
        }
    }
}

impl PageIterator for MockIterator<'_> {
    fn bounding_box(&self, level: IteratorLevel) -> Option<Rectangle> {
        if self.is_exhausted() {
            return None;
        }
        match level {
            IteratorLevel::Block | IteratorLevel::Para => self.page.extent(),
            IteratorLevel::TextLine => union(self.current_line()?.iter().map(|w| w.rect)),
            IteratorLevel::Word => self.current_word().map(|w| w.rect),
            IteratorLevel::Symbol => {
                let rect = self.current_word()?.rect;
                let left = rect.left + self.symbol as i32 * CHAR_WIDTH;
                Some(Rectangle::from_corners(
                    left,
                    rect.top,
                    left + CHAR_WIDTH,
                    rect.bottom,
                ))
            }
        }
    }

    fn confidence(&self, level: IteratorLevel) -> f32 {
        if !self.recognized || self.is_exhausted() {
            return 0.0;
        }
        match level {
            IteratorLevel::Block | IteratorLevel::Para => {
                mean(self.page.words().map(|w| w.confidence))
            }
            IteratorLevel::TextLine => mean(
                self.current_line()
                    .unwrap_or_default()
                    .iter()
                    .map(|w| w.confidence),
            ),
            IteratorLevel::Word | IteratorLevel::Symbol => {
                self.current_word().map_or(0.0, |w| w.confidence)
            }
        }
    }

    fn text(&self, level: IteratorLevel) -> Option<String> {
        if !self.recognized || self.is_exhausted() {
            return None;
        }
        match level {
            IteratorLevel::Block | IteratorLevel::Para => Some(self.page.text()),
            IteratorLevel::TextLine => self.current_line().map(line_text),
            IteratorLevel::Word => self.current_word().map(|w| w.text.clone()),
            IteratorLevel::Symbol => self
                .current_word()?
                .text
                .chars()
                .nth(self.symbol)
                .map(String::from),
        }
    }

    fn is_at_beginning_of(&self, level: IteratorLevel) -> bool {
        if self.is_exhausted() {
            return false;
        }
        match level {
            IteratorLevel::Block | IteratorLevel::Para => {
                self.line == 0 && self.word == 0 && self.symbol == 0
            }
            IteratorLevel::TextLine => self.word == 0 && self.symbol == 0,
            IteratorLevel::Word => self.symbol == 0,
            IteratorLevel::Symbol => true,
        }
    }

    fn is_at_final_element(&self, level: IteratorLevel, element: IteratorLevel) -> bool {
        if !element.is_finer_than(level) || self.is_exhausted() {
            return false;
        }
        let mut probe = self.clone();
        if !probe.advance(element) {
            return true;
        }
        probe.is_at_beginning_of(level)
    }

    fn advance(&mut self, level: IteratorLevel) -> bool {
        if self.is_exhausted() {
            return false;
        }
        match level {
            IteratorLevel::Block | IteratorLevel::Para => {
                self.line = self.page.lines.len();
                self.word = 0;
                self.symbol = 0;
            }
            IteratorLevel::TextLine => {
                self.line += 1;
                self.word = 0;
                self.symbol = 0;
            }
            IteratorLevel::Word => self.next_word(),
            IteratorLevel::Symbol => {
                let symbols = self.current_word().map_or(0, |w| w.text.chars().count());
                self.symbol += 1;
                if self.symbol >= symbols {
                    self.next_word();
                }
            }
        }
        !self.is_exhausted()
    }
}

/// Image backend returning a scripted orientation signal.
#[derive(Debug)]
pub struct MockImageBackend {
    signal: BackendResult<OrientSignal>,
    calls: Cell<usize>,
    last_min_count: Cell<Option<u32>>,
}

impl MockImageBackend {
    /// Backend reporting the given up/left confidences.
    pub fn new(up_confidence: f32, left_confidence: f32) -> Self {
        Self::with_result(Ok(OrientSignal {
            up_confidence,
            left_confidence,
        }))
    }

    /// Backend whose detection always fails.
    pub fn failing() -> Self {
        Self::with_result(Err(BackendError::OrientationFailed(
            "scripted failure".to_string(),
        )))
    }

    pub fn with_result(signal: BackendResult<OrientSignal>) -> Self {
        Self {
            signal,
            calls: Cell::new(0),
            last_min_count: Cell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// `min_count` passed to the most recent detection.
    pub fn last_min_count(&self) -> Option<u32> {
        self.last_min_count.get()
    }
}

impl ImageBackend for MockImageBackend {
    type Binary = MockBinary;

    fn orient_detect(&self, _image: &MockBinary, min_count: u32) -> BackendResult<OrientSignal> {
        self.calls.set(self.calls.get() + 1);
        self.last_min_count.set(Some(min_count));
        self.signal.clone()
    }
}
