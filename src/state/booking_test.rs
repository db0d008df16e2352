use super::*;

const TODAY: &str = "2025-06-15";

fn valid_details() -> BookingDraft {
    BookingDraft {
        date: TODAY.to_owned(),
        time: "18:00".to_owned(),
        diners: "4".to_owned(),
        ..BookingDraft::default()
    }
}

fn valid_draft() -> BookingDraft {
    BookingDraft {
        first_name: "Maria".to_owned(),
        last_name: "Lopez".to_owned(),
        phone: "1234567890".to_owned(),
        ..valid_details()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn booking_state_starts_on_details_step() {
    let state = BookingState::default();
    assert_eq!(state.step, BookingStep::Details);
    assert!(state.errors.is_empty());
    assert_eq!(state.draft, BookingDraft::default());
}

// =============================================================
// Step 1 validation: date
// =============================================================

#[test]
fn missing_date_is_required() {
    let draft = BookingDraft {
        date: String::new(),
        ..valid_details()
    };
    let errors = validate_details(&draft, TODAY);
    assert_eq!(errors.get(&Field::Date).unwrap(), "Please select a date");
}

#[test]
fn past_date_is_rejected() {
    let draft = BookingDraft {
        date: "2025-06-14".to_owned(),
        ..valid_details()
    };
    let errors = validate_details(&draft, TODAY);
    assert_eq!(
        errors.get(&Field::Date).unwrap(),
        "Please select a future date"
    );
}

#[test]
fn past_year_is_rejected() {
    let draft = BookingDraft {
        date: "2023-01-01".to_owned(),
        ..valid_details()
    };
    assert!(validate_details(&draft, TODAY).contains_key(&Field::Date));
}

#[test]
fn today_is_accepted() {
    let errors = validate_details(&valid_details(), TODAY);
    assert!(!errors.contains_key(&Field::Date));
}

#[test]
fn future_date_is_accepted() {
    let draft = BookingDraft {
        date: "2025-06-16".to_owned(),
        ..valid_details()
    };
    assert!(!validate_details(&draft, TODAY).contains_key(&Field::Date));
}

#[test]
fn next_year_is_accepted() {
    let draft = BookingDraft {
        date: "2026-01-01".to_owned(),
        ..valid_details()
    };
    assert!(!validate_details(&draft, TODAY).contains_key(&Field::Date));
}

// =============================================================
// Step 1 validation: time and diners
// =============================================================

#[test]
fn missing_time_is_required() {
    let draft = BookingDraft {
        time: String::new(),
        ..valid_details()
    };
    let errors = validate_details(&draft, TODAY);
    assert_eq!(errors.get(&Field::Time).unwrap(), "Please select a time");
}

#[test]
fn missing_diners_is_required() {
    let draft = BookingDraft {
        diners: String::new(),
        ..valid_details()
    };
    let errors = validate_details(&draft, TODAY);
    assert_eq!(
        errors.get(&Field::Diners).unwrap(),
        "Please select number of diners"
    );
}

#[test]
fn diners_bounds_are_inclusive() {
    for diners in ["1", "20"] {
        let draft = BookingDraft {
            diners: diners.to_owned(),
            ..valid_details()
        };
        assert!(
            !validate_details(&draft, TODAY).contains_key(&Field::Diners),
            "{diners} diners should be accepted"
        );
    }
}

#[test]
fn diners_outside_range_are_rejected() {
    for diners in ["0", "21", "-3", "100"] {
        let draft = BookingDraft {
            diners: diners.to_owned(),
            ..valid_details()
        };
        let errors = validate_details(&draft, TODAY);
        assert_eq!(
            errors.get(&Field::Diners).unwrap(),
            "Number of diners must be between 1 and 20",
            "{diners} diners should be rejected"
        );
    }
}

#[test]
fn non_numeric_diners_are_rejected() {
    let draft = BookingDraft {
        diners: "four".to_owned(),
        ..valid_details()
    };
    assert!(validate_details(&draft, TODAY).contains_key(&Field::Diners));
}

#[test]
fn empty_step1_reports_exactly_three_errors() {
    let errors = validate_details(&BookingDraft::default(), TODAY);
    assert_eq!(errors.len(), 3);
    assert!(errors.contains_key(&Field::Date));
    assert!(errors.contains_key(&Field::Time));
    assert!(errors.contains_key(&Field::Diners));
}

// =============================================================
// Step 2 validation: names
// =============================================================

#[test]
fn missing_first_name_is_required() {
    let draft = BookingDraft {
        first_name: "   ".to_owned(),
        ..valid_draft()
    };
    let errors = validate_contact(&draft);
    assert_eq!(
        errors.get(&Field::FirstName).unwrap(),
        "First name is required"
    );
}

#[test]
fn one_character_name_is_too_short() {
    let draft = BookingDraft {
        first_name: " M ".to_owned(),
        last_name: "L".to_owned(),
        ..valid_draft()
    };
    let errors = validate_contact(&draft);
    assert_eq!(
        errors.get(&Field::FirstName).unwrap(),
        "First name must be at least 2 characters"
    );
    assert_eq!(
        errors.get(&Field::LastName).unwrap(),
        "Last name must be at least 2 characters"
    );
}

#[test]
fn two_character_names_pass() {
    let draft = BookingDraft {
        first_name: "Jo".to_owned(),
        last_name: "Li".to_owned(),
        ..valid_draft()
    };
    assert!(validate_contact(&draft).is_empty());
}

// =============================================================
// Step 2 validation: phone
// =============================================================

#[test]
fn missing_phone_is_required() {
    let draft = BookingDraft {
        phone: String::new(),
        ..valid_draft()
    };
    let errors = validate_contact(&draft);
    assert_eq!(errors.get(&Field::Phone).unwrap(), "Phone number is required");
}

#[test]
fn short_phone_is_rejected() {
    let draft = BookingDraft {
        phone: "123".to_owned(),
        ..valid_draft()
    };
    let errors = validate_contact(&draft);
    assert_eq!(
        errors.get(&Field::Phone).unwrap(),
        "Please enter a valid phone number"
    );
}

#[test]
fn plain_ten_digit_phone_passes() {
    let draft = BookingDraft {
        phone: "1234567890".to_owned(),
        ..valid_draft()
    };
    assert!(validate_contact(&draft).is_empty());
}

#[test]
fn formatted_phones_pass() {
    for phone in ["+1 (312) 555-0199", "312-555-0199", "  312 555 0199  "] {
        let draft = BookingDraft {
            phone: phone.to_owned(),
            ..valid_draft()
        };
        assert!(
            validate_contact(&draft).is_empty(),
            "{phone:?} should be accepted"
        );
    }
}

#[test]
fn phone_with_letters_is_rejected() {
    let draft = BookingDraft {
        phone: "call me maybe".to_owned(),
        ..valid_draft()
    };
    assert!(validate_contact(&draft).contains_key(&Field::Phone));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn advance_moves_to_contact_with_valid_details() {
    let mut state = BookingState {
        draft: valid_details(),
        ..BookingState::default()
    };
    assert!(state.advance(TODAY));
    assert_eq!(state.step, BookingStep::Contact);
    assert!(state.errors.is_empty());
}

#[test]
fn advance_stays_on_details_with_errors() {
    let mut state = BookingState::default();
    assert!(!state.advance(TODAY));
    assert_eq!(state.step, BookingStep::Details);
    assert_eq!(state.errors.len(), 3);
}

#[test]
fn retreat_keeps_draft_and_clears_errors() {
    let mut state = BookingState {
        draft: valid_details(),
        ..BookingState::default()
    };
    assert!(state.advance(TODAY));

    // Fail step 2 once so errors are displayed.
    assert!(!state.confirm());
    assert!(!state.errors.is_empty());

    state.retreat();
    assert_eq!(state.step, BookingStep::Details);
    assert!(state.errors.is_empty());
    assert_eq!(state.draft, valid_details());
}

#[test]
fn retreat_from_details_is_a_no_op() {
    let mut state = BookingState::default();
    state.retreat();
    assert_eq!(state.step, BookingStep::Details);
}

#[test]
fn confirm_moves_to_submitted_with_valid_contact() {
    let mut state = BookingState {
        draft: valid_draft(),
        ..BookingState::default()
    };
    assert!(state.advance(TODAY));
    assert!(state.confirm());
    assert_eq!(state.step, BookingStep::Submitted);
}

#[test]
fn confirm_fires_exactly_once() {
    let mut state = BookingState {
        draft: valid_draft(),
        ..BookingState::default()
    };
    assert!(state.advance(TODAY));
    assert!(state.confirm());

    // Submitted is terminal, so a second click cannot re-trigger the
    // confirmation effect.
    assert!(!state.confirm());
    assert_eq!(state.step, BookingStep::Submitted);
}

#[test]
fn confirm_before_contact_step_is_rejected() {
    let mut state = BookingState {
        draft: valid_draft(),
        ..BookingState::default()
    };
    assert!(!state.confirm());
    assert_eq!(state.step, BookingStep::Details);
}

// =============================================================
// Field edits
// =============================================================

#[test]
fn set_field_updates_draft() {
    let mut state = BookingState::default();
    state.set_field(Field::Date, "2025-07-01".to_owned());
    state.set_field(Field::FirstName, "Maria".to_owned());
    assert_eq!(state.draft.date, "2025-07-01");
    assert_eq!(state.draft.first_name, "Maria");
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut state = BookingState::default();
    assert!(!state.advance(TODAY));
    assert_eq!(state.errors.len(), 3);

    state.set_field(Field::Date, TODAY.to_owned());
    assert!(state.error(Field::Date).is_none());
    assert!(state.error(Field::Time).is_some());
    assert!(state.error(Field::Diners).is_some());
}

#[test]
fn editing_an_unerrored_field_leaves_errors_alone() {
    let mut state = BookingState::default();
    assert!(!state.advance(TODAY));
    let before = state.errors.len();

    state.set_field(Field::FirstName, "Maria".to_owned());
    assert_eq!(state.errors.len(), before);
}

// =============================================================
// Offered time slots
// =============================================================

#[test]
fn offered_times_returns_the_static_slot_list() {
    let times = offered_times("2025-06-15");
    assert_eq!(times.len(), 10);
    assert_eq!(times.first().unwrap(), "17:00");
    assert_eq!(times.last().unwrap(), "21:30");
}

#[test]
fn offered_times_ignores_the_date_for_now() {
    assert_eq!(offered_times("2025-06-15"), offered_times("2026-12-31"));
}

// =============================================================
// Display formatting
// =============================================================

#[test]
fn display_time_formats_evening_slots() {
    assert_eq!(display_time("17:00"), "5:00 PM");
    assert_eq!(display_time("21:30"), "9:30 PM");
}

#[test]
fn display_time_keeps_noon_as_twelve() {
    assert_eq!(display_time("12:15"), "12:15 PM");
}

#[test]
fn display_time_formats_morning_slots() {
    assert_eq!(display_time("9:30"), "9:30 AM");
}

#[test]
fn display_time_passes_malformed_input_through() {
    assert_eq!(display_time("soon"), "soon");
    assert_eq!(display_time("ab:cd"), "ab:cd");
}
