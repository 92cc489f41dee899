use std::sync::Arc;

use tracing::debug;

use crate::dispatcher::{DispatchOutcome, QueryDispatcher};
use crate::view::TextField;

/// Labels of the preset symptom tags, one per condition the backend knows.
pub const PRESET_SYMPTOMS: [&str; 5] = ["Headache", "Fever", "Cough", "Fatigue", "Nausea"];

/// Wires the text field, the search action and the preset tags to a dispatcher.
pub struct SymptomForm {
    field: Arc<dyn TextField>,
    dispatcher: Arc<QueryDispatcher>,
}

impl SymptomForm {
    pub fn new(field: Arc<dyn TextField>, dispatcher: Arc<QueryDispatcher>) -> Self {
        Self { field, dispatcher }
    }

    pub fn presets(&self) -> &'static [&'static str] {
        &PRESET_SYMPTOMS
    }

    /// Primary search action: queries whatever the field currently holds.
    pub async fn submit(&self) -> DispatchOutcome {
        let value = self.field.value();
        self.dispatcher.dispatch(&value).await
    }

    /// A preset tag was clicked: its label replaces the field text and is
    /// searched right away.
    pub async fn activate_preset(&self, label: &str) -> DispatchOutcome {
        debug!(label, "Preset symptom selected");
        self.field.set_value(label);
        self.dispatcher.dispatch(label).await
    }
}
