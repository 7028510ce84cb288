// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{StudentEdit, StudentSelector};
use crate::error::CoreError;
use crate::state::Roster;
use ta_roster_domain::{
    AssignmentId, AttendanceStatus, Consultation, DomainError, Group, GroupId, HomeworkStatus,
    Student, StudentId, TimeRange, Week, validate_group_unique, validate_no_overlap,
    validate_student_unique,
};
use tracing::debug;

fn student_not_found(student_id: &StudentId) -> CoreError {
    CoreError::DomainViolation(DomainError::StudentNotFound(student_id.value().to_owned()))
}

impl Roster {
    /// Adds a new student, creating their group if it does not exist yet.
    ///
    /// The stored record never carries a consultation; consultations are
    /// attached only by [`Roster::book_consultation`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateStudent` if the id is already in use.
    pub fn add_student(&mut self, student: Student) -> Result<Student, CoreError> {
        validate_student_unique(student.id(), &self.students)?;

        let record: Student = student.with_consultation(None);
        self.place_in_group(record.clone())?;
        self.students.push(record.clone());

        debug!(
            student_id = %record.id(),
            group_id = %record.group_id(),
            "Student added"
        );
        Ok(record)
    }

    /// Replaces the record of `target` everywhere it is held.
    ///
    /// The replacement keeps the canonical record's consultation. If its
    /// group differs, the record moves between group views and the
    /// destination group is created when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No student has the `target` id
    /// - The replacement carries a different id
    pub fn set_student(
        &mut self,
        target: &StudentId,
        replacement: Student,
    ) -> Result<Student, CoreError> {
        let current: &Student = self.require_student(target)?;
        if replacement.id() != target {
            return Err(CoreError::DomainViolation(DomainError::StudentIdMismatch {
                expected: target.value().to_owned(),
                found: replacement.id().value().to_owned(),
            }));
        }

        let record: Student = replacement.with_consultation(current.consultation().cloned());
        self.replace_record(record.clone())?;
        Ok(record)
    }

    /// Applies field-level edits to a student.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StudentNotFound` if the student does not exist.
    pub fn edit_student(
        &mut self,
        student_id: &StudentId,
        edit: &StudentEdit,
    ) -> Result<Student, CoreError> {
        let edited: Student = edit.apply_to(self.require_student(student_id)?);
        self.set_student(student_id, edited)
    }

    /// Removes a student, their group membership and any consultation they hold.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StudentNotFound` if the student does not exist.
    pub fn remove_student(&mut self, student_id: &StudentId) -> Result<Student, CoreError> {
        let group_id: GroupId = self.require_student(student_id)?.group_id().clone();
        self.group_mut(&group_id)?.remove_member(student_id)?;

        let index: usize = self
            .students
            .iter()
            .position(|s| s.id() == student_id)
            .ok_or_else(|| student_not_found(student_id))?;
        let removed: Student = self.students.remove(index);
        self.consultations.retain(|c| c.student_id() != student_id);

        debug!(student_id = %student_id, group_id = %group_id, "Student removed");
        Ok(removed)
    }

    /// Moves a student to `group_id`, creating the group if needed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StudentNotFound` if the student does not exist.
    pub fn reassign_group(
        &mut self,
        student_id: &StudentId,
        group_id: GroupId,
    ) -> Result<Student, CoreError> {
        let moved: Student = self.require_student(student_id)?.with_group_id(group_id);
        self.set_student(student_id, moved)
    }

    /// Books a consultation window for a student.
    ///
    /// The window is checked against every booked consultation, whoever holds it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The student does not exist
    /// - The same booking already exists
    /// - The window overlaps another booking
    /// - The student already holds a consultation
    pub fn book_consultation(
        &mut self,
        student_id: &StudentId,
        range: TimeRange,
    ) -> Result<Consultation, CoreError> {
        let student: &Student = self.require_student(student_id)?;
        let candidate: Consultation = Consultation::new(student_id.clone(), range);
        validate_no_overlap(&candidate, &self.consultations)?;

        if student.consultation().is_some() || self.consultation_for(student_id).is_some() {
            return Err(CoreError::DomainViolation(
                DomainError::StudentAlreadyBooked(student_id.value().to_owned()),
            ));
        }

        let record: Student = student.with_consultation(Some(candidate.clone()));
        self.replace_record(record)?;
        self.consultations.push(candidate.clone());

        debug!(student_id = %student_id, range = %candidate.range(), "Consultation booked");
        Ok(candidate)
    }

    /// Cancels a student's consultation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The student does not exist
    /// - The student holds no consultation
    pub fn cancel_consultation(
        &mut self,
        student_id: &StudentId,
    ) -> Result<Consultation, CoreError> {
        let student: &Student = self.require_student(student_id)?;
        let booked: Consultation = student.consultation().cloned().ok_or_else(|| {
            CoreError::DomainViolation(DomainError::NoConsultation(student_id.value().to_owned()))
        })?;

        let record: Student = student.with_consultation(None);
        self.replace_record(record)?;
        self.consultations.retain(|c| c.student_id() != student_id);

        debug!(student_id = %student_id, "Consultation cancelled");
        Ok(booked)
    }

    /// Creates an empty group.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateGroup` if the group already exists.
    pub fn create_group(&mut self, group_id: GroupId) -> Result<Group, CoreError> {
        validate_group_unique(&group_id, &self.groups)?;
        let group: Group = Group::new(group_id);
        self.groups.push(group.clone());
        debug!(group_id = %group.id(), "Group created");
        Ok(group)
    }

    /// Removes a group that has no members.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The group does not exist
    /// - The group still has members
    pub fn remove_group(&mut self, group_id: &GroupId) -> Result<Group, CoreError> {
        let group: &Group = self.require_group(group_id)?;
        if !group.is_empty() {
            return Err(CoreError::DomainViolation(DomainError::GroupNotEmpty {
                group_id: group_id.value().to_owned(),
                members: group.len(),
            }));
        }

        let index: usize = self
            .groups
            .iter()
            .position(|g| g.id() == group_id)
            .ok_or_else(|| {
                CoreError::DomainViolation(DomainError::GroupNotFound(group_id.value().to_owned()))
            })?;
        let removed: Group = self.groups.remove(index);
        debug!(group_id = %group_id, "Group removed");
        Ok(removed)
    }

    /// Marks `week` as `status` for every member of a group.
    ///
    /// Every updated record is computed before any is stored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GroupNotFound` if the group does not exist.
    pub fn mark_attendance(
        &mut self,
        group_id: &GroupId,
        week: Week,
        status: AttendanceStatus,
    ) -> Result<Vec<Student>, CoreError> {
        let replacements: Vec<Student> = self
            .require_group(group_id)?
            .members()
            .iter()
            .map(|member| {
                self.require_student(member.id())
                    .map(|s| s.with_marked_attendance(week, status))
            })
            .collect::<Result<_, _>>()?;

        for record in &replacements {
            self.replace_record(record.clone())?;
        }

        debug!(
            group_id = %group_id,
            week = %week,
            status = %status,
            members = replacements.len(),
            "Group attendance marked"
        );
        Ok(replacements)
    }

    /// Marks `week` as `status` for one student.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StudentNotFound` if the student does not exist.
    pub fn mark_student_attendance(
        &mut self,
        student_id: &StudentId,
        week: Week,
        status: AttendanceStatus,
    ) -> Result<Student, CoreError> {
        let record: Student = self
            .require_student(student_id)?
            .with_marked_attendance(week, status);
        self.replace_record(record.clone())?;
        Ok(record)
    }

    /// Starts tracking `assignment` as incomplete for the targeted students.
    ///
    /// # Errors
    ///
    /// Returns an error if a targeted student does not exist or already
    /// tracks the assignment. No student is updated in that case.
    pub fn add_homework(
        &mut self,
        target: &StudentSelector,
        assignment: AssignmentId,
    ) -> Result<Vec<Student>, CoreError> {
        self.update_students(target, |s| s.with_added_homework(assignment))
    }

    /// Records `status` for `assignment` on the targeted students.
    ///
    /// # Errors
    ///
    /// Returns an error if a targeted student does not exist or does not
    /// track the assignment. No student is updated in that case.
    pub fn mark_homework(
        &mut self,
        target: &StudentSelector,
        assignment: AssignmentId,
        status: HomeworkStatus,
    ) -> Result<Vec<Student>, CoreError> {
        self.update_students(target, |s| s.with_updated_homework(assignment, status))
    }

    /// Stops tracking `assignment` for the targeted students.
    ///
    /// # Errors
    ///
    /// Returns an error if a targeted student does not exist or does not
    /// track the assignment. No student is updated in that case.
    pub fn remove_homework(
        &mut self,
        target: &StudentSelector,
        assignment: AssignmentId,
    ) -> Result<Vec<Student>, CoreError> {
        self.update_students(target, |s| s.with_removed_homework(assignment))
    }

    fn update_students<F>(
        &mut self,
        target: &StudentSelector,
        edit: F,
    ) -> Result<Vec<Student>, CoreError>
    where
        F: Fn(&Student) -> Result<Student, DomainError>,
    {
        let replacements: Vec<Student> = match target {
            StudentSelector::One(student_id) => vec![edit(self.require_student(student_id)?)?],
            StudentSelector::All => self.students.iter().map(&edit).collect::<Result<_, _>>()?,
        };

        for record in &replacements {
            self.replace_record(record.clone())?;
        }
        Ok(replacements)
    }

    /// Adds `record` to its group's view, creating the group when missing.
    fn place_in_group(&mut self, record: Student) -> Result<(), CoreError> {
        if !self.has_group(record.group_id()) {
            self.groups.push(Group::new(record.group_id().clone()));
        }
        self.group_mut(record.group_id())?.add_member(record)?;
        Ok(())
    }

    /// Stores `record` in the canonical collection and its group view.
    ///
    /// Every check runs before the first write.
    pub(crate) fn replace_record(&mut self, record: Student) -> Result<(), CoreError> {
        let old_group_id: GroupId = self.require_student(record.id())?.group_id().clone();

        if &old_group_id == record.group_id() {
            self.group_mut(&old_group_id)?
                .replace_member(record.clone())?;
        } else {
            if !self.require_group(&old_group_id)?.has_member(record.id()) {
                return Err(student_not_found(record.id()));
            }
            if self
                .group(record.group_id())
                .is_some_and(|g| g.has_member(record.id()))
            {
                return Err(CoreError::DomainViolation(DomainError::DuplicateStudent(
                    record.id().value().to_owned(),
                )));
            }
            self.group_mut(&old_group_id)?.remove_member(record.id())?;
            self.place_in_group(record.clone())?;
            debug!(
                student_id = %record.id(),
                from = %old_group_id,
                to = %record.group_id(),
                "Student moved between groups"
            );
        }

        let slot: &mut Student = self
            .students
            .iter_mut()
            .find(|s| s.is_same_student(&record))
            .ok_or_else(|| student_not_found(record.id()))?;
        *slot = record;
        Ok(())
    }
}
