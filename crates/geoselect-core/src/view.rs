// crates/geoselect-core/src/view.rs
//! Explicit UI state and its rendered snapshot.
//!
//! [`AppState`] is what the controller mutates. [`ViewModel`] is what hosts
//! draw: it is produced on demand by [`AppState::render`] and carries
//! everything a DOM, a terminal or a test needs, including placeholder text
//! and summary labels.
use crate::common::{Level, Selection};
use crate::config::EMPTY_MARK;
use crate::model::{find_option, LocationOption};
use serde::{Deserialize, Serialize};

/// What the first, value-less entry of a control says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// "Select a state"
    Prompt,
    /// "No states found"
    NoneFound,
    /// "—", shown after a parent change wiped the list.
    Reset,
}

/// One choice control (a `<select>` in the browser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub level: Level,
    pub options: Vec<LocationOption>,
    /// Value of the chosen option; empty while the placeholder is shown.
    pub value: String,
    pub disabled: bool,
    pub placeholder: Placeholder,
}

impl Control {
    /// A control before any data arrived. Only the country control starts
    /// enabled.
    pub fn new(level: Level) -> Self {
        let mut control = Self {
            level,
            options: Vec::new(),
            value: String::new(),
            disabled: false,
            placeholder: Placeholder::Prompt,
        };
        if level != Level::Country {
            control.reset();
        }
        control
    }

    /// Replaces the option list and clears the choice. An empty list disables
    /// the control and switches to the "No ... found" placeholder.
    pub fn set_options(&mut self, options: Vec<LocationOption>) {
        self.placeholder = if options.is_empty() {
            Placeholder::NoneFound
        } else {
            Placeholder::Prompt
        };
        self.disabled = options.is_empty();
        self.options = options;
        self.value.clear();
    }

    /// Empties and disables the control (dependent of a changed parent).
    pub fn reset(&mut self) {
        self.options.clear();
        self.value.clear();
        self.disabled = true;
        self.placeholder = Placeholder::Reset;
    }

    /// Sets the chosen value the way a `<select>` does: an unknown value
    /// leaves nothing selected. Returns whether a real option is now chosen.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o.value == value) {
            self.value = value.to_string();
            true
        } else {
            self.value.clear();
            false
        }
    }

    pub fn selected(&self) -> Option<&LocationOption> {
        if self.value.is_empty() {
            return None;
        }
        self.options.iter().find(|o| o.value == self.value)
    }

    /// See [`find_option`].
    pub fn resolve(&self, query: &str) -> Option<&LocationOption> {
        find_option(&self.options, query)
    }

    pub fn placeholder_text(&self) -> String {
        match self.placeholder {
            Placeholder::Prompt => format!("Select a {}", self.level.noun()),
            Placeholder::NoneFound => format!("No {} found", self.level.plural()),
            Placeholder::Reset => EMPTY_MARK.to_string(),
        }
    }

    pub fn render(&self) -> ControlView {
        ControlView {
            options: self.options.clone(),
            value: self.value.clone(),
            disabled: self.disabled,
            placeholder: self.placeholder_text(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Info,
    Error,
}

/// The single status line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// Everything the controller owns besides its source and store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub country: Control,
    pub state: Control,
    pub city: Control,
    pub status: Status,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            country: Control::new(Level::Country),
            state: Control::new(Level::State),
            city: Control::new(Level::City),
            status: Status::default(),
        }
    }
}

impl AppState {
    pub fn control(&self, level: Level) -> &Control {
        match level {
            Level::Country => &self.country,
            Level::State => &self.state,
            Level::City => &self.city,
        }
    }

    pub fn control_mut(&mut self, level: Level) -> &mut Control {
        match level {
            Level::Country => &mut self.country,
            Level::State => &mut self.state,
            Level::City => &mut self.city,
        }
    }

    /// Resets every control below `level`.
    pub fn reset_below(&mut self, level: Level) {
        let mut next = level.child();
        while let Some(child) = next {
            self.control_mut(child).reset();
            next = child.child();
        }
    }

    /// The selection as the controls currently show it.
    pub fn selection(&self) -> Selection {
        Selection {
            country: self.country.value.clone(),
            state: self.state.value.clone(),
            city: self.city.value.clone(),
        }
    }

    pub fn summary(&self) -> Summary {
        let label = |c: &Control| {
            c.selected()
                .map(|o| o.label.clone())
                .unwrap_or_else(|| EMPTY_MARK.to_string())
        };
        Summary {
            country: label(&self.country),
            state: label(&self.state),
            city: label(&self.city),
        }
    }

    pub fn render(&self) -> ViewModel {
        ViewModel {
            country: self.country.render(),
            state: self.state.render(),
            city: self.city.render(),
            status: self.status.clone(),
            summary: self.summary(),
            selection: self.selection(),
        }
    }
}

/// Chosen labels, `—` for an unselected level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub country: String,
    pub state: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlView {
    pub options: Vec<LocationOption>,
    pub value: String,
    pub disabled: bool,
    pub placeholder: String,
}

/// A render snapshot handed to hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub country: ControlView,
    pub state: ControlView,
    pub city: ControlView,
    pub status: Status,
    pub summary: Summary,
    pub selection: Selection,
}

impl ViewModel {
    pub fn control(&self, level: Level) -> &ControlView {
        match level {
            Level::Country => &self.country,
            Level::State => &self.state,
            Level::City => &self.city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(&str, &str)]) -> Vec<LocationOption> {
        pairs
            .iter()
            .map(|(v, l)| LocationOption::new(*v, *l))
            .collect()
    }

    #[test]
    fn empty_list_disables_with_none_found() {
        let mut c = Control::new(Level::State);
        c.set_options(Vec::new());
        assert!(c.disabled);
        assert_eq!(c.placeholder_text(), "No states found");

        c.set_options(opts(&[("CA", "California")]));
        assert!(!c.disabled);
        assert_eq!(c.placeholder_text(), "Select a state");
    }

    #[test]
    fn unknown_value_selects_nothing() {
        let mut c = Control::new(Level::Country);
        c.set_options(opts(&[("US", "United States")]));
        assert!(c.select("US"));
        assert!(!c.select("XX"));
        assert!(c.selected().is_none());
        assert_eq!(c.value, "");
    }

    #[test]
    fn resolve_tries_value_then_label() {
        let mut c = Control::new(Level::City);
        c.set_options(opts(&[("MUC", "München"), ("BER", "Berlin")]));
        assert_eq!(c.resolve("BER").unwrap().label, "Berlin");
        assert_eq!(c.resolve("muc").unwrap().label, "München");
        assert_eq!(c.resolve("munchen").unwrap().value, "MUC");
        assert!(c.resolve("Paris").is_none());
    }

    #[test]
    fn reset_below_only_touches_dependents() {
        let mut s = AppState::default();
        s.country.set_options(opts(&[("US", "United States")]));
        s.country.select("US");
        s.state.set_options(opts(&[("CA", "California")]));
        s.state.select("CA");
        s.city.set_options(opts(&[("LA", "Los Angeles")]));

        s.reset_below(Level::State);
        assert_eq!(s.state.value, "CA");
        assert!(s.city.disabled);
        assert_eq!(s.city.placeholder, Placeholder::Reset);

        s.reset_below(Level::Country);
        assert_eq!(s.country.value, "US");
        assert!(s.state.options.is_empty() && s.state.disabled);
    }

    #[test]
    fn summary_marks_unselected_levels() {
        let mut s = AppState::default();
        s.country.set_options(opts(&[("US", "United States")]));
        s.country.select("US");
        let summary = s.summary();
        assert_eq!(summary.country, "United States");
        assert_eq!(summary.state, "—");
        assert_eq!(summary.city, "—");
    }

    #[test]
    fn initial_controls() {
        let view = AppState::default().render();
        assert!(!view.country.disabled);
        assert!(view.state.disabled && view.city.disabled);
        assert_eq!(view.country.placeholder, "Select a country");
        assert_eq!(view.state.placeholder, "—");
    }
}
