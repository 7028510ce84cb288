// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of outcomes and roster views.

use crate::cli::Report;
use std::io::{self, Write};
use ta_roster::{CoreError, Outcome, Roster};
use ta_roster_domain::{AssignmentId, DomainError, Student};

pub fn write_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Student(student) => writeln!(out, "{student}"),
        Outcome::Students(students) => {
            writeln!(out, "Updated {} student(s)", students.len())?;
            for student in students {
                writeln!(out, "  {student}")?;
            }
            Ok(())
        }
        Outcome::Group(group) => writeln!(out, "Group {} ({} member(s))", group.id(), group.len()),
        Outcome::Consultation(consultation) => writeln!(out, "{consultation}"),
    }
}

/// Renders a read-only view of `roster`.
///
/// # Errors
///
/// Returns an error if the view names a missing student or group.
pub fn write_report(
    out: &mut impl Write,
    roster: &Roster,
    report: &Report,
) -> color_eyre::Result<()> {
    match report {
        Report::Students { group: None } => write_students(out, roster.students())?,
        Report::Students {
            group: Some(group_id),
        } => {
            write_students(out, roster.students_in_group(group_id)?)?;
        }
        Report::Groups => {
            for group in roster.groups() {
                writeln!(out, "{}: {} member(s)", group.id(), group.len())?;
            }
        }
        Report::Consultations => {
            for consultation in roster.consultations_by_start() {
                writeln!(out, "{consultation}")?;
            }
        }
        Report::Student(student_id) => {
            let student: &Student = roster.student(student_id).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::StudentNotFound(
                    student_id.value().to_owned(),
                ))
            })?;
            write_student_detail(out, student)?;
        }
    }
    Ok(())
}

fn write_students(out: &mut impl Write, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return writeln!(out, "No students");
    }
    for (index, student) in students.iter().enumerate() {
        writeln!(out, "{}. {student}", index + 1)?;
    }
    Ok(())
}

fn write_student_detail(out: &mut impl Write, student: &Student) -> io::Result<()> {
    writeln!(out, "{student}")?;

    writeln!(out, "Homework:")?;
    for number in 1..=AssignmentId::MAX_ASSIGNMENTS {
        if let Ok(assignment) = AssignmentId::new(i64::from(number)) {
            writeln!(
                out,
                "  Assignment {assignment}: {}",
                student.homework().status_label(assignment)
            )?;
        }
    }

    writeln!(out, "Attendance:")?;
    if student.attendance().is_empty() {
        writeln!(out, "  none recorded")?;
    }
    for (week, status) in student.attendance().iter() {
        writeln!(out, "  Week {week}: {status}")?;
    }

    match student.consultation() {
        Some(consultation) => writeln!(out, "Consultation: {}", consultation.range()),
        None => writeln!(out, "Consultation: none"),
    }
}
