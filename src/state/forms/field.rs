//! Form field value objects

/// Value submitted for a checked checkbox
pub const CHECKED_VALUE: &str = "on";

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// One of a fixed list of options; `None` until the user picks one
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub is_multiline: bool,
    pub is_required: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, is_multiline: bool) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            is_multiline,
            is_required: false,
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            is_multiline: false,
            is_required: false,
        }
    }

    /// Create a new unchecked checkbox
    pub fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Checkbox(false),
            is_multiline: false,
            is_required: false,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Value as submitted by the form, `None` for an unchecked checkbox
    pub fn submitted_value(&self) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Choice { options, selected } => Some(
                selected
                    .and_then(|i| options.get(i))
                    .map(|o| o.to_string())
                    .unwrap_or_default(),
            ),
            FieldValue::Checkbox(true) => Some(CHECKED_VALUE.to_string()),
            FieldValue::Checkbox(false) => None,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            // Typing picks the first option starting with that letter
            FieldValue::Choice { options, selected } => {
                let wanted = c.to_ascii_lowercase();
                if let Some(index) = options
                    .iter()
                    .position(|o| o.chars().next().map(|f| f.to_ascii_lowercase()) == Some(wanted))
                {
                    *selected = Some(index);
                }
            }
            FieldValue::Checkbox(checked) => {
                if c == ' ' {
                    *checked = !*checked;
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::Checkbox(_) => {}
        }
    }

    /// Step through choice options (wraps around); no-op for other fields
    pub fn cycle(&mut self, forward: bool) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            let len = options.len();
            *selected = Some(match (*selected, forward) {
                (None, true) => 0,
                (None, false) => len - 1,
                (Some(i), true) => (i + 1) % len,
                (Some(i), false) => (i + len - 1) % len,
            });
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::Checkbox(checked) => *checked = false,
        }
    }

    /// Whether the field accepts free text
    pub fn is_text(&self) -> bool {
        matches!(self.value, FieldValue::Text(_))
    }

    /// Label with a required marker
    pub fn display_label(&self) -> String {
        if self.is_required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, selected } => match selected.and_then(|i| options.get(i)) {
                Some(option) => format!("◀ {option} ▶"),
                None => "◀ select ▶".to_string(),
            },
            FieldValue::Checkbox(true) => "[x] I agree".to_string(),
            FieldValue::Checkbox(false) => "[ ] I agree".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPES: &[&str] = &["Upright", "Grand", "Digital"];

    mod text {
        use super::*;

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::text("name", "Name", false);
            field.push_char('A');
            field.push_char('d');
            field.pop_char();
            assert_eq!(field.submitted_value().as_deref(), Some("A"));
        }

        #[test]
        fn test_clear() {
            let mut field = FormField::text("name", "Name", false);
            field.push_char('A');
            field.clear();
            assert_eq!(field.submitted_value().as_deref(), Some(""));
        }

        #[test]
        fn test_required_label() {
            let field = FormField::text("name", "Name", false).required();
            assert!(field.is_required);
            assert_eq!(field.display_label(), "Name *");
            assert_eq!(FormField::text("serial", "Serial", false).display_label(), "Serial");
        }
    }

    mod choice {
        use super::*;

        #[test]
        fn test_starts_unselected() {
            let field = FormField::choice("type", "Piano Type", TYPES);
            assert_eq!(field.submitted_value().as_deref(), Some(""));
            assert_eq!(field.display_value(), "◀ select ▶");
        }

        #[test]
        fn test_cycle_wraps_both_ways() {
            let mut field = FormField::choice("type", "Piano Type", TYPES);
            field.cycle(false);
            assert_eq!(field.submitted_value().as_deref(), Some("Digital"));
            field.cycle(true);
            assert_eq!(field.submitted_value().as_deref(), Some("Upright"));
            field.cycle(false);
            assert_eq!(field.submitted_value().as_deref(), Some("Digital"));
        }

        #[test]
        fn test_typing_selects_by_initial() {
            let mut field = FormField::choice("type", "Piano Type", TYPES);
            field.push_char('g');
            assert_eq!(field.submitted_value().as_deref(), Some("Grand"));
            field.push_char('x');
            assert_eq!(field.submitted_value().as_deref(), Some("Grand"));
        }

        #[test]
        fn test_backspace_and_clear_deselect() {
            let mut field = FormField::choice("type", "Piano Type", TYPES);
            field.cycle(true);
            field.pop_char();
            assert_eq!(field.submitted_value().as_deref(), Some(""));
            field.cycle(true);
            field.clear();
            assert_eq!(field.submitted_value().as_deref(), Some(""));
        }
    }

    mod checkbox {
        use super::*;

        #[test]
        fn test_unchecked_is_not_submitted() {
            let field = FormField::checkbox("commitment", "Commitment");
            assert_eq!(field.submitted_value(), None);
        }

        #[test]
        fn test_space_toggles() {
            let mut field = FormField::checkbox("commitment", "Commitment");
            field.push_char(' ');
            assert_eq!(field.submitted_value().as_deref(), Some(CHECKED_VALUE));
            field.push_char(' ');
            assert_eq!(field.submitted_value(), None);
            field.push_char('x');
            assert_eq!(field.submitted_value(), None);
        }

        #[test]
        fn test_cycle_is_noop() {
            let mut field = FormField::checkbox("commitment", "Commitment");
            field.cycle(true);
            assert_eq!(field.value, FieldValue::Checkbox(false));
            assert!(!field.is_text());
        }
    }
}
