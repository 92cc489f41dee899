// Behaviours of the symptom query page, written against element traits so
// any host (browser binding, terminal, in-memory test double) can drive them.

pub mod dispatcher;
pub mod effects;
pub mod form;
pub mod render;
pub mod view;

pub use dispatcher::{DispatchOutcome, QueryDispatcher};
pub use form::{SymptomForm, PRESET_SYMPTOMS};
pub use render::ResultRenderer;
pub use view::{
    Card, ClassList, MemoryElement, MemoryField, MemoryResults, Rect, ResultsEvent, ResultsView,
    StyledElement, TextField,
};
