//! Reservation wizard state machine and validation rules.
//!
//! DESIGN
//! ======
//! The wizard advances through an explicit step enum (`Details → Contact →
//! Submitted`) so transitions are exhaustive and nothing ever leaves
//! `Submitted`. Each validation pass recomputes the whole error map and
//! replaces it wholesale; the only incremental mutation is clearing a single
//! field's error when that field is edited.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use std::collections::HashMap;

/// Time slots offered for every date. The date-change recomputation is a
/// placeholder until a real availability service exists.
pub const OFFERED_TIMES: [&str; 10] = [
    "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
];

/// Recompute the offered time slots for a date.
pub fn offered_times(_date: &str) -> Vec<String> {
    OFFERED_TIMES.iter().map(|s| (*s).to_owned()).collect()
}

/// Format a 24-hour `HH:MM` slot for display, e.g. `"17:30"` → `"5:30 PM"`.
///
/// Malformed input is returned unchanged rather than panicking.
pub fn display_time(slot: &str) -> String {
    let Some((hour, minute)) = slot.split_once(':') else {
        return slot.to_owned();
    };
    let Ok(hour) = hour.parse::<u32>() else {
        return slot.to_owned();
    };
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = if hour > 12 { hour - 12 } else { hour };
    format!("{display_hour}:{minute} {period}")
}

/// The wizard's current phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingStep {
    /// Step 1: date, time, and party size.
    #[default]
    Details,
    /// Step 2: name and phone number.
    Contact,
    /// Terminal: the reservation was confirmed.
    Submitted,
}

/// Form fields, used as the key of the validation error map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Time,
    Diners,
    FirstName,
    LastName,
    Phone,
}

impl Field {
    /// Stable element id for label/error ARIA wiring.
    pub fn id(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Diners => "diners",
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Phone => "phone",
        }
    }
}

/// Field-name → message map, recomputed wholesale per validation pass.
pub type ValidationErrors = HashMap<Field, String>;

/// The in-progress reservation. All fields hold the raw input text; diners
/// is parsed at validation time because the backing number input may be
/// empty or mid-edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub date: String,
    pub time: String,
    pub diners: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Wizard state: current step, the draft, and the displayed errors.
#[derive(Clone, Debug, Default)]
pub struct BookingState {
    pub step: BookingStep,
    pub draft: BookingDraft,
    pub errors: ValidationErrors,
}

impl BookingState {
    /// Update one draft field, clearing that field's displayed error.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Date => self.draft.date = value,
            Field::Time => self.draft.time = value,
            Field::Diners => self.draft.diners = value,
            Field::FirstName => self.draft.first_name = value,
            Field::LastName => self.draft.last_name = value,
            Field::Phone => self.draft.phone = value,
        }
        self.errors.remove(&field);
    }

    /// Validate step 1 and move to `Contact` on success. Returns whether the
    /// transition happened; on failure the errors stay displayed.
    pub fn advance(&mut self, today: &str) -> bool {
        if self.step != BookingStep::Details {
            return false;
        }
        self.errors = validate_details(&self.draft, today);
        if self.errors.is_empty() {
            self.step = BookingStep::Contact;
            true
        } else {
            false
        }
    }

    /// Return from `Contact` to `Details`, keeping the draft and clearing
    /// all displayed errors. Validation is not re-run.
    pub fn retreat(&mut self) {
        if self.step == BookingStep::Contact {
            self.step = BookingStep::Details;
            self.errors.clear();
        }
    }

    /// Validate step 2 and move to `Submitted` on success.
    ///
    /// Returns true exactly once per wizard: `Submitted` is terminal, so a
    /// repeated call cannot trigger a second confirmation effect.
    pub fn confirm(&mut self) -> bool {
        if self.step != BookingStep::Contact {
            return false;
        }
        self.errors = validate_contact(&self.draft);
        if self.errors.is_empty() {
            self.step = BookingStep::Submitted;
            true
        } else {
            false
        }
    }

    /// Error message for one field, if any.
    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.get(&field).cloned()
    }
}

/// Step 1 rules: date present and not in the past, time present, diners
/// present and within 1..=20.
///
/// The date comparison is lexicographic on ISO `YYYY-MM-DD` strings, which
/// is order-correct because the format is fixed-width and zero-padded. A
/// date equal to `today` is accepted.
pub fn validate_details(draft: &BookingDraft, today: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.date.is_empty() {
        errors.insert(Field::Date, "Please select a date".to_owned());
    } else if draft.date.as_str() < today {
        errors.insert(Field::Date, "Please select a future date".to_owned());
    }

    if draft.time.is_empty() {
        errors.insert(Field::Time, "Please select a time".to_owned());
    }

    if draft.diners.is_empty() {
        errors.insert(Field::Diners, "Please select number of diners".to_owned());
    } else if !draft
        .diners
        .trim()
        .parse::<i64>()
        .is_ok_and(|n| (1..=20).contains(&n))
    {
        errors.insert(
            Field::Diners,
            "Number of diners must be between 1 and 20".to_owned(),
        );
    }

    errors
}

/// Step 2 rules: trimmed names present with at least two characters, phone
/// present and loosely phone-shaped.
pub fn validate_contact(draft: &BookingDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let first = draft.first_name.trim();
    if first.is_empty() {
        errors.insert(Field::FirstName, "First name is required".to_owned());
    } else if first.chars().count() < 2 {
        errors.insert(
            Field::FirstName,
            "First name must be at least 2 characters".to_owned(),
        );
    }

    let last = draft.last_name.trim();
    if last.is_empty() {
        errors.insert(Field::LastName, "Last name is required".to_owned());
    } else if last.chars().count() < 2 {
        errors.insert(
            Field::LastName,
            "Last name must be at least 2 characters".to_owned(),
        );
    }

    let phone = draft.phone.trim();
    if phone.is_empty() {
        errors.insert(Field::Phone, "Phone number is required".to_owned());
    } else if !phone_shape_ok(phone) {
        errors.insert(Field::Phone, "Please enter a valid phone number".to_owned());
    }

    errors
}

/// Permissive phone shape: an optional leading `+`, then at least ten
/// characters drawn from digits, spaces, dashes, and parentheses. Not a real
/// phone-number check, just enough to catch obvious typos.
fn phone_shape_ok(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    rest.chars().count() >= 10
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}
