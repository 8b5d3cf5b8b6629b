//! Form field identifiers and value objects

/// The fixed set of registration form fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    ContactNumber,
    Email,
    Day,
    Month,
    Year,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// Every field, in form order
    pub const ALL: [FieldId; 8] = [
        FieldId::FullName,
        FieldId::ContactNumber,
        FieldId::Email,
        FieldId::Day,
        FieldId::Month,
        FieldId::Year,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Wire name, as used in the submission payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::ContactNumber => "contact_number",
            Self::Email => "email",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    /// Human-readable label for the UI shell
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::ContactNumber => "Contact Number",
            Self::Email => "Email",
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free-text input
    Text(String),
    /// Numeric choice from a fixed option list; `None` until selected
    Selection(Option<u32>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Create a selected value
    pub fn selection(value: u32) -> Self {
        FieldValue::Selection(Some(value))
    }

    /// Get the text content (empty string for selections)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Selection(_) => "",
        }
    }

    /// Get the selected number (`None` for text values)
    pub fn as_selection(&self) -> Option<u32> {
        match self {
            FieldValue::Selection(n) => *n,
            FieldValue::Text(_) => None,
        }
    }

    /// True when nothing has been entered or selected
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Selection(n) => n.is_none(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Selection(Some(n)) => n.to_string(),
            FieldValue::Selection(None) => String::new(),
        }
    }

    /// Consume into text, coercing a selection to its printed number
    pub(crate) fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Selection(Some(n)) => n.to_string(),
            FieldValue::Selection(None) => String::new(),
        }
    }

    /// Consume into a selection, coercing numeric text
    pub(crate) fn into_selection(self) -> Option<u32> {
        match self {
            FieldValue::Selection(n) => n,
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}
