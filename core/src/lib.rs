//! # Seminar Exercises
//!
//! Domain models for three independent exercises:
//!
//! * **[`rectangle`]**: a value type with perimeter-additive `+`/`-` and
//!   area-based ordering.
//! * **[`archive`]**: a process-wide accumulator of text/number records.
//! * **[`employee`]**: a person record and an employee with salary raises.
//!
//! Every construction and mutation is reported through `tracing`; the
//! front end decides where those events end up.

pub mod archive;
pub mod employee;
pub mod rectangle;

pub use archive::{Archive, ArchiveError, Entry};
pub use employee::{Employee, EmployeeError, Person};
pub use rectangle::{Dimension, Rectangle, RectangleError};

#[cfg(test)]
mod test_log;
