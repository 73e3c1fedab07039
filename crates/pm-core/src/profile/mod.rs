//! Registration profile draft.
//!
//! Field-by-field container mutated on the register screen. Every field is
//! required; gender is constrained to [`Gender`] and the date of birth to
//! calendar-date syntax (`YYYY-MM-DD`). No cross-field checks are made.

mod gender;

pub use gender::{Gender, GenderParseError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar-date syntax accepted for the date of birth.
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Fallback used by the welcome banner when no first name was entered.
pub const ANONYMOUS_DISPLAY_NAME: &str = "User";

/// Addressable field of the [`ProfileDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Gender,
    DateOfBirth,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Gender,
        ProfileField::DateOfBirth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Gender => "gender",
            ProfileField::DateOfBirth => "date_of_birth",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a profile field blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ProfileFieldError {
    #[error("{field} is required")]
    Missing { field: ProfileField },
    #[error(transparent)]
    InvalidGender(#[from] GenderParseError),
    #[error("date of birth {value:?} is not a calendar date (YYYY-MM-DD)")]
    InvalidDateOfBirth { value: String },
}

/// In-progress registration form data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub date_of_birth: String,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one field. Values are stored as entered.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Gender => &self.gender,
            ProfileField::DateOfBirth => &self.date_of_birth,
        }
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Gender => &mut self.gender,
            ProfileField::DateOfBirth => &mut self.date_of_birth,
        }
    }

    /// Validity of a single field.
    pub fn check(&self, field: ProfileField) -> Result<(), ProfileFieldError> {
        let value = self.get(field);
        if value.is_empty() {
            return Err(ProfileFieldError::Missing { field });
        }
        match field {
            ProfileField::Gender => {
                value.parse::<Gender>()?;
            }
            ProfileField::DateOfBirth => {
                NaiveDate::parse_from_str(value, DATE_OF_BIRTH_FORMAT).map_err(|_| {
                    ProfileFieldError::InvalidDateOfBirth {
                        value: value.to_string(),
                    }
                })?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Returns the first blocking field error, in form order.
    pub fn validate(&self) -> Result<(), ProfileFieldError> {
        ProfileField::ALL
            .iter()
            .try_for_each(|field| self.check(*field))
    }

    /// Every blocking field error, in form order.
    pub fn errors(&self) -> Vec<ProfileFieldError> {
        ProfileField::ALL
            .iter()
            .filter_map(|field| self.check(*field).err())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Name shown in the welcome banner.
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            ANONYMOUS_DISPLAY_NAME
        } else {
            &self.first_name
        }
    }

    /// Name shown on the profile tab.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
