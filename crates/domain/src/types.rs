// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Upper-cases the leading character and leaves the rest untouched.
fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    let first = chars.next().into_iter().flat_map(char::to_uppercase);
    first.chain(chars).collect()
}

/// Represents a student's institutional identifier.
///
/// The identifier is the entity key for a student everywhere in the roster.
/// The leading letter is normalized to uppercase, so `e1234567` and
/// `E1234567` denote the same student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId {
    /// The normalized identifier (`E` followed by 7 digits).
    value: String,
}

impl StudentId {
    /// User-facing constraint message.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "identifier must start with E and be followed by 7 digits";

    /// Number of digits following the prefix.
    const DIGITS: usize = 7;

    /// Creates a new `StudentId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStudentId` if the value does not match the pattern.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(value) {
            return Err(DomainError::InvalidStudentId(String::from(
                Self::MESSAGE_CONSTRAINTS,
            )));
        }
        Ok(Self {
            value: upper_first(value),
        })
    }

    /// Returns whether `value` would be accepted by [`StudentId::new`].
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        let prefix_ok: bool = matches!(chars.next(), Some('E' | 'e'));
        let digits: Vec<char> = chars.collect();
        prefix_ok && digits.len() == Self::DIGITS && digits.iter().all(char::is_ascii_digit)
    }

    /// Returns the normalized identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for StudentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for StudentId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<StudentId> for String {
    fn from(id: StudentId) -> Self {
        id.value
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a tutorial or lab group identifier.
///
/// Group ids start with `T` (tutorial) or `B` (lab) and are followed by at
/// least one digit. The prefix is normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupId {
    /// The normalized identifier.
    value: String,
}

impl GroupId {
    /// User-facing constraint message.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Group IDs should start with T or B (case-insensitive) and be followed by at least 1 digit";

    /// Creates a new `GroupId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGroupId` if the value does not match the pattern.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(value) {
            return Err(DomainError::InvalidGroupId(String::from(
                Self::MESSAGE_CONSTRAINTS,
            )));
        }
        Ok(Self {
            value: upper_first(value),
        })
    }

    /// Returns whether `value` would be accepted by [`GroupId::new`].
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        let prefix_ok: bool = matches!(chars.next(), Some('T' | 't' | 'B' | 'b'));
        let rest: &str = chars.as_str();
        prefix_ok && !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
    }

    /// Returns the normalized identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for GroupId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for GroupId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<GroupId> for String {
    fn from(id: GroupId) -> Self {
        id.value
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a student's full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    value: String,
}

impl Name {
    /// User-facing constraint message.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Creates a new `Name`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is blank or contains
    /// characters other than alphanumerics and spaces.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(value) {
            return Err(DomainError::InvalidName(String::from(
                Self::MESSAGE_CONSTRAINTS,
            )));
        }
        Ok(Self {
            value: value.trim().to_owned(),
        })
    }

    /// Returns whether `value` would be accepted by [`Name::new`].
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        let mut chars = value.trim().chars();
        chars.next().is_some_and(char::is_alphanumeric)
            && chars.all(|c| c.is_alphanumeric() || c == ' ')
    }

    /// Returns the name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Name {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    value: String,
}

impl Phone {
    /// User-facing constraint message.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Creates a new `Phone`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPhone` if the value is not at least 3 digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(value) {
            return Err(DomainError::InvalidPhone(String::from(
                Self::MESSAGE_CONSTRAINTS,
            )));
        }
        Ok(Self {
            value: value.to_owned(),
        })
    }

    /// Returns whether `value` is an acceptable phone number.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit())
    }

    /// Returns the phone number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Phone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.value
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents an email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    value: String,
}

impl Email {
    /// User-facing constraint message.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emails should be of the format local-part@domain, where the local part uses \
         alphanumerics and +_.- without starting or ending with a special character, and the \
         domain is made of labels separated by periods";

    const SPECIAL_CHARACTERS: [char; 4] = ['+', '_', '.', '-'];

    /// Creates a new `Email`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if the value is not a well-formed address.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(value) {
            return Err(DomainError::InvalidEmail(String::from(
                Self::MESSAGE_CONSTRAINTS,
            )));
        }
        Ok(Self {
            value: value.to_owned(),
        })
    }

    /// Returns whether `value` is a well-formed email address.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        Self::is_valid_local(local) && Self::is_valid_domain(domain)
    }

    fn is_valid_local(local: &str) -> bool {
        let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
            return false;
        };
        first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || Self::SPECIAL_CHARACTERS.contains(&c))
    }

    fn is_valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        let label_ok = |label: &&str| {
            label.starts_with(|c: char| c.is_ascii_alphanumeric())
                && label.ends_with(|c: char| c.is_ascii_alphanumeric())
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        };
        labels.iter().all(label_ok) && labels.last().is_some_and(|last| last.len() >= 2)
    }

    /// Returns the email address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.value
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a student's messaging handle (for example `@alice_t`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TelegramHandle {
    value: String,
}

impl TelegramHandle {
    /// User-facing constraint message.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Telegram handles should start with @ followed by at least one character, without spaces";

    /// Creates a new `TelegramHandle`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTelegram` if the handle is malformed.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(value) {
            return Err(DomainError::InvalidTelegram(String::from(
                Self::MESSAGE_CONSTRAINTS,
            )));
        }
        Ok(Self {
            value: value.to_owned(),
        })
    }

    /// Returns whether `value` is an acceptable handle.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        value
            .strip_prefix('@')
            .is_some_and(|rest| !rest.is_empty() && !rest.chars().any(char::is_whitespace))
    }

    /// Returns the handle, including the leading `@`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for TelegramHandle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TelegramHandle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<TelegramHandle> for String {
    fn from(handle: TelegramHandle) -> Self {
        handle.value
    }
}

impl std::fmt::Display for TelegramHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
