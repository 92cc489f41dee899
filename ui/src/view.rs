//! Element seams between page behaviours and whatever host renders them.
//!
//! Behaviours only ever touch the elements handed to them. The `Memory*`
//! types are the in-process host used by the CLI and the tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Container the dispatcher writes loading, error and result markup into
pub trait ResultsView: Send + Sync {
    fn hide(&self);
    fn reveal(&self);
    fn set_html(&self, html: &str);
}

/// Free-text symptom input
pub trait TextField: Send + Sync {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Element accepting inline style properties, including `--custom` ones
pub trait StyledElement: Send + Sync {
    fn set_style(&self, property: &str, value: &str);
}

pub trait ClassList: Send + Sync {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// Axis-aligned box in page pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Element that receives the tilt/glare treatment
pub trait Card: StyledElement {
    /// Stable identity used to guard against attaching twice
    fn id(&self) -> &str;
    fn bounding_rect(&self) -> Rect;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One write against a results container, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsEvent {
    Hidden,
    Html(String),
    Revealed,
}

#[derive(Debug, Default)]
struct ResultsState {
    html: String,
    visible: bool,
    events: Vec<ResultsEvent>,
}

/// In-memory results container that keeps a log of every write
#[derive(Debug, Default)]
pub struct MemoryResults {
    state: Mutex<ResultsState>,
}

impl MemoryResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> String {
        lock(&self.state).html.clone()
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.state).visible
    }

    pub fn events(&self) -> Vec<ResultsEvent> {
        lock(&self.state).events.clone()
    }
}

impl ResultsView for MemoryResults {
    fn hide(&self) {
        let mut state = lock(&self.state);
        state.visible = false;
        state.events.push(ResultsEvent::Hidden);
    }

    fn reveal(&self) {
        let mut state = lock(&self.state);
        state.visible = true;
        state.events.push(ResultsEvent::Revealed);
    }

    fn set_html(&self, html: &str) {
        let mut state = lock(&self.state);
        state.html = html.to_string();
        state.events.push(ResultsEvent::Html(html.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct MemoryField {
    value: Mutex<String>,
}

impl MemoryField {
    pub fn new(initial: &str) -> Self {
        Self {
            value: Mutex::new(initial.to_string()),
        }
    }
}

impl TextField for MemoryField {
    fn value(&self) -> String {
        lock(&self.value).clone()
    }

    fn set_value(&self, value: &str) {
        *lock(&self.value) = value.to_string();
    }
}

#[derive(Debug, Default)]
struct ElementState {
    styles: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    additions: BTreeMap<String, usize>,
}

/// In-memory element usable as a card, header, or hero target
#[derive(Debug)]
pub struct MemoryElement {
    id: String,
    rect: Rect,
    state: Mutex<ElementState>,
}

impl MemoryElement {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
            state: Mutex::new(ElementState::default()),
        }
    }

    pub fn style(&self, property: &str) -> Option<String> {
        lock(&self.state).styles.get(property).cloned()
    }

    /// How many times `class` has been added over the element's lifetime
    pub fn class_additions(&self, class: &str) -> usize {
        lock(&self.state).additions.get(class).copied().unwrap_or(0)
    }
}

impl StyledElement for MemoryElement {
    fn set_style(&self, property: &str, value: &str) {
        lock(&self.state)
            .styles
            .insert(property.to_string(), value.to_string());
    }
}

impl ClassList for MemoryElement {
    fn add_class(&self, class: &str) {
        let mut state = lock(&self.state);
        state.classes.insert(class.to_string());
        *state.additions.entry(class.to_string()).or_insert(0) += 1;
    }

    fn remove_class(&self, class: &str) {
        lock(&self.state).classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        lock(&self.state).classes.contains(class)
    }
}

impl Card for MemoryElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounding_rect(&self) -> Rect {
        self.rect
    }
}
