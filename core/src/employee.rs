//! # Person & Employee Models
//!
//! [`Person`] holds a full name (last name, first name, patronymic) and an
//! age. [`Employee`] wraps a person and adds a position and a salary that can
//! be raised by a percentage.

use std::fmt;

use seminar_common::utils::text::title_case;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmployeeError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid salary: {0}, salary must be a non-negative number")]
    InvalidSalary(f64),

    #[error("invalid raise: {0}%, percent must be a number not below -100")]
    InvalidPercent(f64),
}

fn name_part(field: &'static str, value: &str) -> Result<String, EmployeeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        let e = EmployeeError::EmptyField(field);
        error!("{e}");
        return Err(e);
    }
    Ok(title_case(trimmed))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    last_name: String,
    first_name: String,
    patronymic: String,
    age: u32,
}

impl Person {
    /// Name parts are trimmed and stored title-cased.
    pub fn new(
        last_name: &str,
        first_name: &str,
        patronymic: &str,
        age: u32,
    ) -> Result<Self, EmployeeError> {
        Ok(Self {
            last_name: name_part("last name", last_name)?,
            first_name: name_part("first name", first_name)?,
            patronymic: name_part("patronymic", patronymic)?,
            age,
        })
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn patronymic(&self) -> &str {
        &self.patronymic
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// `Last First Patronymic`
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.patronymic)
    }

    pub fn birthday(&mut self) {
        self.age = self.age.saturating_add(1);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    person: Person,
    position: String,
    salary: f64,
}

impl Employee {
    pub fn new(person: Person, position: &str, salary: f64) -> Result<Self, EmployeeError> {
        let position = name_part("position", position)?;
        if !salary.is_finite() || salary < 0.0 {
            error!("Failed to hire {}: invalid salary {salary}", person.full_name());
            return Err(EmployeeError::InvalidSalary(salary));
        }

        let employee = Self { person, position, salary };
        info!(
            "Employee: last name: {} first name: {} patronymic: {} age: {}\tposition: {} salary: {}",
            employee.person.last_name,
            employee.person.first_name,
            employee.person.patronymic,
            employee.person.age,
            employee.position,
            employee.salary
        );
        Ok(employee)
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    pub fn age(&self) -> u32 {
        self.person.age()
    }

    pub fn birthday(&mut self) {
        self.person.birthday();
        info!("{} turned {}", self.full_name(), self.age());
    }

    /// Scales the salary by `1 + percent / 100`.
    ///
    /// Anything below -100% would make the salary negative and is rejected,
    /// leaving the salary untouched.
    pub fn raise_salary(&mut self, percent: f64) -> Result<f64, EmployeeError> {
        if !percent.is_finite() || percent < -100.0 {
            error!("Failed to raise salary of {}: invalid percent {percent}", self.full_name());
            return Err(EmployeeError::InvalidPercent(percent));
        }

        self.salary *= 1.0 + percent / 100.0;
        info!(
            "Employee {} ({}) got a {percent}% raise. Salary: {}",
            self.full_name(),
            self.position,
            self.salary
        );
        Ok(self.salary)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.position)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
