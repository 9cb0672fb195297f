//! Custom field rules referenced from `#[validate(custom(...))]` attributes.
//!
//! Each rule returns a `ValidationError` carrying the message shown to the
//! client, so the extractors can report it verbatim.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use validator::ValidationError;

use cuti_auth::password::PasswordPolicy;
use cuti_entity::account::AccountRole;
use cuti_entity::leave::{LeaveStatus, VerifyDecision};

pub const DEPARTMENT_ID_FORMAT: &str = "Departement ID tidak sesuai format";
pub const LEAVE_ID_FORMAT: &str = "Leave ID tidak sesuai format UUID";
pub const DATE_ORDER: &str = "Tanggal selesai harus lebih besar atau sama dengan tanggal mulai";

fn fail(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Letters, digits, `.` and `_`; no leading, trailing or doubled separator.
///
/// Length is checked separately so each violation gets its own message.
pub fn is_username(value: &str) -> bool {
    let is_separator = |c: char| c == '.' || c == '_';

    if value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || is_separator(c))
    {
        return false;
    }
    if value.starts_with(is_separator) || value.ends_with(is_separator) {
        return false;
    }
    !value
        .as_bytes()
        .windows(2)
        .any(|w| is_separator(w[0] as char) && is_separator(w[1] as char))
}

/// Canonical lowercase hyphenated UUID, e.g. `0f8fad5b-d9cb-469f-a165-70867728950e`.
pub fn is_canonical_uuid(value: &str) -> bool {
    value.len() == 36
        && value.char_indices().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_digit() || ('a'..='f').contains(&c),
        })
}

/// Parses an ISO-8601 date, accepting a full timestamp and keeping its date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|d| d.date())
        })
}

fn letters_and_spaces(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Character-count bounds with a distinct message for each side.
fn bounded(
    value: &str,
    (min, max): (usize, usize),
    too_short: &'static str,
    too_long: &'static str,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        Err(fail("length", too_short))
    } else if len > max {
        Err(fail("length", too_long))
    } else {
        Ok(())
    }
}

pub fn username(value: &str) -> Result<(), ValidationError> {
    bounded(
        value,
        (3, 100),
        "Panjang username minimal 3 karakter",
        "Panjang username maksimal 100 karakter",
    )?;
    if is_username(value) {
        Ok(())
    } else {
        Err(fail(
            "username",
            "Username hanya terdiri karakter huruf, angka, titik dan underscore",
        ))
    }
}

/// Username echoed in a leave draft body.
pub fn leave_username(value: &str) -> Result<(), ValidationError> {
    if is_username(value) && (3..=100).contains(&value.len()) {
        Ok(())
    } else {
        Err(fail("username", "Username tidak sesuai format"))
    }
}

pub fn person_name(value: &str) -> Result<(), ValidationError> {
    bounded(
        value,
        (3, 100),
        "Panjang Nama minimal 3 karakter",
        "Panjang Nama maksimal 100 karakter",
    )?;
    if letters_and_spaces(value) {
        Ok(())
    } else {
        Err(fail("name", "Nama hanya terdiri dari karakter huruf dan spasi"))
    }
}

pub fn department_name(value: &str) -> Result<(), ValidationError> {
    bounded(
        value,
        (3, 150),
        "Panjang Nama Departemen minimal 3 karakter",
        "Panjang Nama Departemen maksimal 150 karakter",
    )?;
    if letters_and_spaces(value) {
        Ok(())
    } else {
        Err(fail(
            "name",
            "Nama Departemen hanya terdiri dari karakter huruf dan spasi",
        ))
    }
}

pub fn email_length(value: &str) -> Result<(), ValidationError> {
    bounded(
        value,
        (3, 100),
        "Panjang email minimal 3 karakter",
        "Panjang email maksimal 100 karakter",
    )
}

/// Length-only check used where the stored hash decides, e.g. login.
pub fn password_length(value: &str) -> Result<(), ValidationError> {
    bounded(
        value,
        (6, 100),
        "Panjang password minimal 6 karakter",
        "Panjang password maksimal 100 karakter",
    )
}

pub fn current_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(fail("required", "Password saat ini wajib diisi"));
    }
    password_length(value)
}

pub fn reason(value: &str) -> Result<(), ValidationError> {
    bounded(
        value,
        (10, 500),
        "Alasan minimal 10 karakter",
        "Alasan maksimal 500 karakter",
    )
}

pub fn password_policy(value: &str) -> Result<(), ValidationError> {
    match PasswordPolicy::new().violation(value) {
        None => Ok(()),
        Some(message) => Err(fail("password", message)),
    }
}

pub fn department_id(value: &str) -> Result<(), ValidationError> {
    if is_canonical_uuid(value) {
        Ok(())
    } else {
        Err(fail("uuid", DEPARTMENT_ID_FORMAT))
    }
}

pub fn start_date(value: &str) -> Result<(), ValidationError> {
    match parse_iso_date(value) {
        Some(_) => Ok(()),
        None => Err(fail("date", "Tanggal mulai harus dalam format ISO")),
    }
}

pub fn end_date(value: &str) -> Result<(), ValidationError> {
    match parse_iso_date(value) {
        Some(_) => Ok(()),
        None => Err(fail("date", "Tanggal selesai harus dalam format ISO")),
    }
}

/// End must not precede start. Unparseable dates are left to the field rules.
pub fn date_order(start: &str, end: &str) -> Result<(), ValidationError> {
    match (parse_iso_date(start), parse_iso_date(end)) {
        (Some(start), Some(end)) if end < start => Err(fail("date_range", DATE_ORDER)),
        _ => Ok(()),
    }
}

pub fn role(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<AccountRole>()
        .map(|_| ())
        .map_err(|_| fail("role", "Role tidak valid"))
}

pub fn leave_status(value: &str) -> Result<(), ValidationError> {
    value.parse::<LeaveStatus>().map(|_| ()).map_err(|_| {
        fail(
            "status",
            "Status hanya boleh salah satu dari DRAFT, TERKIRIM, DITOLAK, atau DITERIMA",
        )
    })
}

pub fn verify_decision(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<VerifyDecision>()
        .map(|_| ())
        .map_err(|_| fail("status", "Status hanya boleh DITOLAK atau DITERIMA"))
}
