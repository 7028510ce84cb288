// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_range, create_test_roster, group_id, student_id};
use crate::{CoreError, Roster};
use ta_roster_domain::{Consultation, DomainError, StudentId};

#[test]
fn test_book_consultation_sets_registry_and_embedded_copy() {
    let mut roster: Roster = create_test_roster();
    let target: StudentId = student_id("E1234567");

    let booked: Consultation = roster
        .book_consultation(
            &target,
            create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
        )
        .unwrap();

    assert_eq!(roster.consultation_for(&target), Some(&booked));
    assert_eq!(
        roster.student(&target).unwrap().consultation(),
        Some(&booked)
    );
    assert_eq!(
        roster
            .students_in_group(&group_id("T01"))
            .unwrap()[0]
            .consultation(),
        Some(&booked)
    );
    roster.check_integrity().unwrap();
}

#[test]
fn test_book_for_unknown_student_fails() {
    let mut roster: Roster = create_test_roster();

    let result: Result<Consultation, CoreError> = roster.book_consultation(
        &student_id("E9999999"),
        create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::StudentNotFound(
            String::from("E9999999")
        )))
    );
    assert!(roster.consultations().is_empty());
}

#[test]
fn test_overlap_with_another_student_is_rejected() {
    let mut roster: Roster = create_test_roster();
    roster
        .book_consultation(
            &student_id("E1234567"),
            create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
        )
        .unwrap();
    let before: Roster = roster.clone();

    let result: Result<Consultation, CoreError> = roster.book_consultation(
        &student_id("E7654321"),
        create_test_range("2025-10-10 15:30", "2025-10-10 17:00"),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::OverlapConflict {
            student_id: String::from("E7654321"),
            conflicting_student_id: String::from("E1234567"),
        }))
    );
    assert_eq!(roster, before);
}

#[test]
fn test_back_to_back_bookings_are_allowed() {
    let mut roster: Roster = create_test_roster();
    roster
        .book_consultation(
            &student_id("E1234567"),
            create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
        )
        .unwrap();

    roster
        .book_consultation(
            &student_id("E7654321"),
            create_test_range("2025-10-10 16:00", "2025-10-10 17:00"),
        )
        .unwrap();

    assert_eq!(roster.consultations().len(), 2);
    roster.check_integrity().unwrap();
}

#[test]
fn test_repeating_a_booking_is_a_duplicate() {
    let mut roster: Roster = create_test_roster();
    let target: StudentId = student_id("E1234567");
    roster
        .book_consultation(
            &target,
            create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
        )
        .unwrap();

    let result: Result<Consultation, CoreError> = roster.book_consultation(
        &target,
        create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::DuplicateConsultation {
                student_id: String::from("E1234567"),
            }
        ))
    );
}

#[test]
fn test_second_disjoint_booking_for_same_student_is_rejected() {
    let mut roster: Roster = create_test_roster();
    let target: StudentId = student_id("E1234567");
    roster
        .book_consultation(
            &target,
            create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
        )
        .unwrap();

    let result: Result<Consultation, CoreError> = roster.book_consultation(
        &target,
        create_test_range("2025-10-11 09:00", "2025-10-11 10:00"),
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::StudentAlreadyBooked(String::from("E1234567"))
        ))
    );
    assert_eq!(roster.consultations().len(), 1);
}

#[test]
fn test_cancel_consultation_clears_both_sides() {
    let mut roster: Roster = create_test_roster();
    let target: StudentId = student_id("E1234567");
    let booked: Consultation = roster
        .book_consultation(
            &target,
            create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
        )
        .unwrap();

    let cancelled: Consultation = roster.cancel_consultation(&target).unwrap();

    assert_eq!(cancelled, booked);
    assert!(roster.consultation_for(&target).is_none());
    assert!(roster.student(&target).unwrap().consultation().is_none());
    roster.check_integrity().unwrap();
}

#[test]
fn test_cancel_without_booking_fails() {
    let mut roster: Roster = create_test_roster();

    let result: Result<Consultation, CoreError> =
        roster.cancel_consultation(&student_id("E1234567"));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NoConsultation(
            String::from("E1234567")
        )))
    );
}

#[test]
fn test_slot_can_be_rebooked_after_cancel() {
    let mut roster: Roster = create_test_roster();
    roster
        .book_consultation(
            &student_id("E1234567"),
            create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
        )
        .unwrap();
    roster.cancel_consultation(&student_id("E1234567")).unwrap();

    roster
        .book_consultation(
            &student_id("E7654321"),
            create_test_range("2025-10-10 14:00", "2025-10-10 16:00"),
        )
        .unwrap();

    roster.check_integrity().unwrap();
}

#[test]
fn test_consultations_by_start_orders_by_time_then_id() {
    let mut roster: Roster = create_test_roster();
    roster
        .book_consultation(
            &student_id("E7654321"),
            create_test_range("2025-10-12 09:00", "2025-10-12 10:00"),
        )
        .unwrap();
    roster
        .book_consultation(
            &student_id("E1234567"),
            create_test_range("2025-10-10 09:00", "2025-10-10 10:00"),
        )
        .unwrap();
    roster
        .book_consultation(
            &student_id("E1111111"),
            create_test_range("2025-10-11 09:00", "2025-10-11 10:00"),
        )
        .unwrap();

    let ordered: Vec<&str> = roster
        .consultations_by_start()
        .into_iter()
        .map(|c| c.student_id().value())
        .collect();

    assert_eq!(ordered, vec!["E1234567", "E1111111", "E7654321"]);
}
