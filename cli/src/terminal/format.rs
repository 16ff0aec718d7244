use std::cmp::Ordering;

use crate::terminal::colors;
use colored::*;
use seminar_core::{Archive, Employee, Rectangle};

pub fn number(value: f64) -> ColoredString {
    value.to_string().color(colors::NUMBER)
}

pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}

pub fn rectangle_details(rect: &Rectangle) -> Vec<(&'static str, ColoredString)> {
    vec![
        ("Rectangle", format!("{rect:#}").color(colors::PRIMARY)),
        ("Width", number(rect.width())),
        ("Height", number(rect.height())),
        ("Area", number(rect.area())),
        ("Perimeter", number(rect.perimeter())),
    ]
}

pub fn archive_details(archive: &Archive) -> Vec<(&'static str, ColoredString)> {
    let current: ColoredString = match archive.current() {
        Some(_) => format!("{archive:#}").color(colors::PRIMARY),
        None => "none".dimmed(),
    };
    vec![
        ("Current", current),
        ("Archived", archive.len().to_string().color(colors::ACCENT)),
        ("Texts", format!("{:?}", archive.texts()).normal()),
        ("Numbers", format!("{:?}", archive.numbers()).normal()),
    ]
}

pub fn employee_details(employee: &Employee) -> Vec<(&'static str, ColoredString)> {
    vec![
        ("Employee", employee.to_string().color(colors::PRIMARY)),
        ("Age", employee.age().to_string().color(colors::NUMBER)),
        ("Position", employee.position().normal()),
        ("Salary", number(employee.salary())),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
