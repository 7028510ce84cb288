// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Outcome, Roster, TransitionResult};
use ta_roster_domain::{Consultation, Group, Student};
use tracing::{debug, info};

/// Applies a command to the roster, producing a new roster and the affected records.
///
/// This function is pure: the input roster is never modified. A rejected
/// command therefore leaves the caller's roster exactly as it was.
///
/// # Arguments
///
/// * `roster` - The current roster (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new roster and the outcome
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates a domain rule or references a
/// student or group that does not exist.
pub fn apply(roster: &Roster, command: Command) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    debug!(command = name, roster = %roster.summary(), "Applying command");

    let mut new_roster: Roster = roster.clone();
    match execute(&mut new_roster, command) {
        Ok(outcome) => {
            debug!(command = name, roster = %new_roster.summary(), "Command applied");
            Ok(TransitionResult {
                new_roster,
                outcome,
            })
        }
        Err(err) => {
            debug!(command = name, error = %err, "Command rejected");
            Err(err)
        }
    }
}

#[allow(clippy::too_many_lines)]
fn execute(roster: &mut Roster, command: Command) -> Result<Outcome, CoreError> {
    match command {
        Command::AddStudent { student } => {
            let added: Student = roster.add_student(student)?;
            info!(
                student_id = %added.id(),
                group_id = %added.group_id(),
                "Added student"
            );
            Ok(Outcome::Student(added))
        }
        Command::EditStudent { student_id, edit } => {
            let edited: Student = roster.edit_student(&student_id, &edit)?;
            info!(student_id = %student_id, "Edited student");
            Ok(Outcome::Student(edited))
        }
        Command::RemoveStudent { student_id } => {
            let removed: Student = roster.remove_student(&student_id)?;
            info!(
                student_id = %student_id,
                group_id = %removed.group_id(),
                "Removed student"
            );
            Ok(Outcome::Student(removed))
        }
        Command::ReassignGroup {
            student_id,
            group_id,
        } => {
            let moved: Student = roster.reassign_group(&student_id, group_id)?;
            info!(
                student_id = %student_id,
                group_id = %moved.group_id(),
                "Reassigned student"
            );
            Ok(Outcome::Student(moved))
        }
        Command::CreateGroup { group_id } => {
            let group: Group = roster.create_group(group_id)?;
            info!(group_id = %group.id(), "Created group");
            Ok(Outcome::Group(group))
        }
        Command::RemoveGroup { group_id } => {
            let group: Group = roster.remove_group(&group_id)?;
            info!(group_id = %group_id, "Removed group");
            Ok(Outcome::Group(group))
        }
        Command::MarkGroupAttendance {
            group_id,
            week,
            status,
        } => {
            let marked: Vec<Student> = roster.mark_attendance(&group_id, week, status)?;
            info!(
                group_id = %group_id,
                week = %week,
                status = %status,
                students = marked.len(),
                "Marked group attendance"
            );
            Ok(Outcome::Students(marked))
        }
        Command::MarkStudentAttendance {
            student_id,
            week,
            status,
        } => {
            let marked: Student = roster.mark_student_attendance(&student_id, week, status)?;
            info!(
                student_id = %student_id,
                week = %week,
                status = %status,
                "Marked student attendance"
            );
            Ok(Outcome::Student(marked))
        }
        Command::AddHomework { target, assignment } => {
            let updated: Vec<Student> = roster.add_homework(&target, assignment)?;
            info!(
                assignment = %assignment,
                students = updated.len(),
                "Added homework"
            );
            Ok(Outcome::Students(updated))
        }
        Command::MarkHomework {
            target,
            assignment,
            status,
        } => {
            let updated: Vec<Student> = roster.mark_homework(&target, assignment, status)?;
            info!(
                assignment = %assignment,
                status = %status,
                students = updated.len(),
                "Marked homework"
            );
            Ok(Outcome::Students(updated))
        }
        Command::RemoveHomework { target, assignment } => {
            let updated: Vec<Student> = roster.remove_homework(&target, assignment)?;
            info!(
                assignment = %assignment,
                students = updated.len(),
                "Removed homework"
            );
            Ok(Outcome::Students(updated))
        }
        Command::BookConsultation { student_id, range } => {
            let booked: Consultation = roster.book_consultation(&student_id, range)?;
            info!(
                student_id = %student_id,
                range = %booked.range(),
                "Booked consultation"
            );
            Ok(Outcome::Consultation(booked))
        }
        Command::CancelConsultation { student_id } => {
            let cancelled: Consultation = roster.cancel_consultation(&student_id)?;
            info!(student_id = %student_id, "Cancelled consultation");
            Ok(Outcome::Consultation(cancelled))
        }
    }
}
