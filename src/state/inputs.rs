#[cfg(test)]
#[path = "inputs_test.rs"]
mod inputs_test;

use std::collections::BTreeMap;

use crate::net::types::{PendingInput, ResolveRequest};

/// Lifecycle of the pending-inputs list for one page view.
///
/// `Failed` is terminal: the fetch is not retried automatically, the page
/// shows inline error text instead of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListPhase {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Which kind of control a field renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldControl {
    #[default]
    SingleLine,
    MultiLine,
}

/// The field literally named `description` gets a multi-line control,
/// everything else a single-line text control.
pub fn field_control(name: &str) -> FieldControl {
    if name == "description" {
        FieldControl::MultiLine
    } else {
        FieldControl::SingleLine
    }
}

/// Display label for a field: the field name with its first character
/// upper-cased.
pub fn field_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One editable field on a card, holding whatever the control currently has.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: String,
    pub label: String,
    pub control: FieldControl,
    pub value: String,
}

/// Per-card submission lifecycle. A resolved card is removed from the list
/// rather than kept in a terminal phase; a failed submit returns to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPhase {
    #[default]
    Idle,
    Submitting,
}

/// One rendered pending-input card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputCard {
    pub activity_id: String,
    pub created_at: Option<String>,
    pub fields: Vec<FieldEntry>,
    pub phase: CardPhase,
}

impl InputCard {
    /// Build a card from a server record. Records with no required fields
    /// are inconsistent server data and produce no card.
    pub fn from_record(record: PendingInput) -> Option<Self> {
        let names = record.required_fields.filter(|f| !f.is_empty())?;

        // Server order is rendering order.
        let fields = names
            .into_iter()
            .map(|name| FieldEntry {
                label: field_label(&name),
                control: field_control(&name),
                value: String::new(),
                name,
            })
            .collect();

        Some(Self {
            activity_id: record.activity_id,
            created_at: record.created_at,
            fields,
            phase: CardPhase::Idle,
        })
    }

    /// Collect every field's current value into a resolution payload.
    pub fn resolve_request(&self) -> ResolveRequest {
        let input_data: BTreeMap<String, String> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        ResolveRequest {
            activity_id: self.activity_id.clone(),
            input_data,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            CardPhase::Idle => "Resolve & Process",
            CardPhase::Submitting => "Processing...",
        }
    }
}

/// Filter a server response into renderable cards, dropping malformed
/// records and preserving server order.
pub fn cards_from_response(records: Vec<PendingInput>) -> Vec<InputCard> {
    records.into_iter().filter_map(InputCard::from_record).collect()
}

/// State for the pending-inputs page: list phase plus the live cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputsState {
    pub phase: ListPhase,
    pub cards: Vec<InputCard>,
}

impl InputsState {
    /// Apply a successful list fetch.
    pub fn apply_loaded(&mut self, records: Vec<PendingInput>) {
        self.cards = cards_from_response(records);
        self.phase = ListPhase::Loaded;
    }

    /// Apply a failed list fetch. Terminal for this page view.
    pub fn apply_load_error(&mut self) {
        self.cards.clear();
        self.phase = ListPhase::Failed;
    }

    /// The list loaded and nothing is left to resolve.
    pub fn is_empty_state(&self) -> bool {
        self.phase == ListPhase::Loaded && self.cards.is_empty()
    }

    fn card_mut(&mut self, activity_id: &str) -> Option<&mut InputCard> {
        self.cards.iter_mut().find(|c| c.activity_id == activity_id)
    }

    /// Move a card into `Submitting`. Returns `false` if the card is gone
    /// or already has a submission in flight.
    pub fn begin_submit(&mut self, activity_id: &str) -> bool {
        match self.card_mut(activity_id) {
            Some(card) if card.phase == CardPhase::Idle => {
                card.phase = CardPhase::Submitting;
                true
            }
            _ => false,
        }
    }

    /// Successful resolution removes the card from the view.
    pub fn apply_submit_ok(&mut self, activity_id: &str) {
        self.cards.retain(|c| c.activity_id != activity_id);
    }

    /// Failed resolution re-enables the card, keeping entered values.
    pub fn apply_submit_err(&mut self, activity_id: &str) {
        if let Some(card) = self.card_mut(activity_id) {
            card.phase = CardPhase::Idle;
        }
    }

    /// Record an edit to one field of one card.
    pub fn set_field_value(&mut self, activity_id: &str, field: &str, value: String) {
        if let Some(card) = self.card_mut(activity_id) {
            if let Some(entry) = card.fields.iter_mut().find(|f| f.name == field) {
                entry.value = value;
            }
        }
    }
}
