// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;
use ta_roster::{Command, FieldChange, StudentEdit, StudentSelector};
use ta_roster_domain::{
    AssignmentId, AttendanceStatus, DomainError, Email, GroupId, HomeworkStatus, Name, Phone,
    Student, StudentId, TelegramHandle, TimeRange, Week,
};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Manage a teaching assistant's roster of students, groups and consultations.
#[derive(Debug, Parser)]
#[command(name = "ta-roster", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the roster data file
    #[arg(
        long,
        global = true,
        env = "TA_ROSTER_DATA",
        default_value = "data/roster.json"
    )]
    pub data: PathBuf,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    pub command: RosterCommand,
}

impl Args {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Selects one student or every student.
#[derive(Clone, Debug, ClapArgs)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Apply to one student
    #[arg(long)]
    pub student: Option<StudentId>,

    /// Apply to every student
    #[arg(long)]
    pub all: bool,
}

impl From<TargetArgs> for StudentSelector {
    fn from(target: TargetArgs) -> Self {
        target.student.map_or(Self::All, Self::One)
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum RosterCommand {
    /// Add a student, creating their group if needed
    #[command(visible_alias = "add")]
    AddStudent {
        /// Student id, e.g. E1234567
        #[arg(long)]
        id: StudentId,
        /// Full name
        #[arg(long)]
        name: Name,
        /// Telegram handle, e.g. @alice
        #[arg(long)]
        telegram: TelegramHandle,
        /// Group id, e.g. T01 or B02
        #[arg(long)]
        group: GroupId,
        /// Phone number
        #[arg(long)]
        phone: Option<Phone>,
        /// Email address
        #[arg(long)]
        email: Option<Email>,
    },

    /// Change a student's name or contact details
    #[command(visible_alias = "edit")]
    EditStudent {
        id: StudentId,
        #[arg(long)]
        name: Option<Name>,
        #[arg(long)]
        telegram: Option<TelegramHandle>,
        #[arg(long, conflicts_with = "clear_phone")]
        phone: Option<Phone>,
        /// Remove the stored phone number
        #[arg(long)]
        clear_phone: bool,
        #[arg(long, conflicts_with = "clear_email")]
        email: Option<Email>,
        /// Remove the stored email address
        #[arg(long)]
        clear_email: bool,
    },

    /// Remove a student and any consultation they hold
    #[command(visible_alias = "rm")]
    RemoveStudent { id: StudentId },

    /// Move a student to another group
    Reassign { id: StudentId, group: GroupId },

    /// Create an empty group
    CreateGroup { group: GroupId },

    /// Remove an empty group
    RemoveGroup { group: GroupId },

    /// Mark attendance for every member of a group
    MarkGroupAttendance {
        group: GroupId,
        #[arg(long)]
        week: Week,
        /// present, absent or excused
        #[arg(long)]
        status: AttendanceStatus,
    },

    /// Mark attendance for one student
    MarkAttendance {
        id: StudentId,
        #[arg(long)]
        week: Week,
        /// present, absent or excused
        #[arg(long)]
        status: AttendanceStatus,
    },

    /// Start tracking an assignment
    AddHomework {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long)]
        assignment: AssignmentId,
    },

    /// Record an assignment's status
    MarkHomework {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long)]
        assignment: AssignmentId,
        /// complete, incomplete or late
        #[arg(long)]
        status: HomeworkStatus,
    },

    /// Stop tracking an assignment
    RemoveHomework {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long)]
        assignment: AssignmentId,
    },

    /// Book a consultation window
    #[command(visible_alias = "book")]
    BookConsultation {
        id: StudentId,
        /// Start, as "YYYY-MM-DD HH:MM"
        #[arg(long)]
        from: String,
        /// End, as "YYYY-MM-DD HH:MM"
        #[arg(long)]
        to: String,
    },

    /// Cancel a student's consultation
    #[command(visible_alias = "cancel")]
    CancelConsultation { id: StudentId },

    /// List students, optionally for one group
    #[command(visible_alias = "ls")]
    ListStudents {
        #[arg(long)]
        group: Option<GroupId>,
    },

    /// List groups and their sizes
    ListGroups,

    /// List consultations by start time
    ListConsultations,

    /// Show one student's full record
    Show { id: StudentId },
}

/// What a parsed subcommand asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Apply a command and save the result.
    Mutate(Command),
    /// Print a view of the roster without changing it.
    Report(Report),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Students { group: Option<GroupId> },
    Groups,
    Consultations,
    Student(StudentId),
}

fn field_change<T>(value: Option<T>, clear: bool) -> FieldChange<T> {
    match value {
        Some(value) => FieldChange::Set(value),
        None if clear => FieldChange::Clear,
        None => FieldChange::Keep,
    }
}

impl RosterCommand {
    /// Converts the parsed arguments into a roster action.
    ///
    /// # Errors
    ///
    /// Returns an error if a consultation window is malformed or ends before it starts.
    #[allow(clippy::too_many_lines)]
    pub fn into_action(self) -> Result<Action, DomainError> {
        let command: Command = match self {
            Self::AddStudent {
                id,
                name,
                telegram,
                group,
                phone,
                email,
            } => Command::AddStudent {
                student: Student::new(id, name, telegram, group)
                    .with_phone(phone)
                    .with_email(email),
            },
            Self::EditStudent {
                id,
                name,
                telegram,
                phone,
                clear_phone,
                email,
                clear_email,
            } => Command::EditStudent {
                student_id: id,
                edit: StudentEdit {
                    name,
                    phone: field_change(phone, clear_phone),
                    email: field_change(email, clear_email),
                    telegram,
                },
            },
            Self::RemoveStudent { id } => Command::RemoveStudent { student_id: id },
            Self::Reassign { id, group } => Command::ReassignGroup {
                student_id: id,
                group_id: group,
            },
            Self::CreateGroup { group } => Command::CreateGroup { group_id: group },
            Self::RemoveGroup { group } => Command::RemoveGroup { group_id: group },
            Self::MarkGroupAttendance {
                group,
                week,
                status,
            } => Command::MarkGroupAttendance {
                group_id: group,
                week,
                status,
            },
            Self::MarkAttendance { id, week, status } => Command::MarkStudentAttendance {
                student_id: id,
                week,
                status,
            },
            Self::AddHomework { target, assignment } => Command::AddHomework {
                target: target.into(),
                assignment,
            },
            Self::MarkHomework {
                target,
                assignment,
                status,
            } => Command::MarkHomework {
                target: target.into(),
                assignment,
                status,
            },
            Self::RemoveHomework { target, assignment } => Command::RemoveHomework {
                target: target.into(),
                assignment,
            },
            Self::BookConsultation { id, from, to } => Command::BookConsultation {
                student_id: id,
                range: TimeRange::parse(&from, &to)?,
            },
            Self::CancelConsultation { id } => Command::CancelConsultation { student_id: id },
            Self::ListStudents { group } => return Ok(Action::Report(Report::Students { group })),
            Self::ListGroups => return Ok(Action::Report(Report::Groups)),
            Self::ListConsultations => return Ok(Action::Report(Report::Consultations)),
            Self::Show { id } => return Ok(Action::Report(Report::Student(id))),
        };
        Ok(Action::Mutate(command))
    }
}
