//! User validator.

use super::{check_name, ValidationErrors, Violation};
use crate::model::{UserFields, UserPayload};

pub const USER_NAME_MAX_LEN: usize = 150;
pub const CPF_LEN: usize = 11;
pub const EMAIL_MIN_LEN: usize = 3;

/// Every constraint the candidate breaks, in rule order: name, cpf, email.
pub fn user_violations(candidate: &UserPayload) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_name(candidate.name.as_deref(), USER_NAME_MAX_LEN, &mut violations);
    if !candidate.cpf.as_deref().is_some_and(is_valid_cpf) {
        violations.push(Violation::InvalidCpf);
    }
    if !candidate.email.as_deref().is_some_and(is_valid_email) {
        violations.push(Violation::InvalidEmail);
    }
    violations
}

/// Turns a candidate into validated fields, or reports every violation.
pub fn validate_user(candidate: UserPayload) -> Result<UserFields, ValidationErrors> {
    let violations = user_violations(&candidate);
    match (candidate.name, candidate.cpf, candidate.email) {
        (Some(name), Some(cpf), Some(email)) if violations.is_empty() => {
            Ok(UserFields { name, cpf, email })
        }
        _ => Err(ValidationErrors::new(violations)),
    }
}

/// Exactly eleven ASCII digits.
fn is_valid_cpf(cpf: &str) -> bool {
    cpf.len() == CPF_LEN && cpf.bytes().all(|b| b.is_ascii_digit())
}

/// At least three characters, an '@', and a '.' somewhere after the first '@'.
fn is_valid_email(email: &str) -> bool {
    email.chars().count() >= EMAIL_MIN_LEN
        && email
            .find('@')
            .is_some_and(|at| email[at..].contains('.'))
}
