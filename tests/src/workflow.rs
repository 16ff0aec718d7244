use seminar_common::config::{Config, Exercise};
use seminar_core::{Archive, Employee, EmployeeError, Entry, Person, Rectangle};
use std::path::PathBuf;

/// Mirrors the exercise's own demo run: invalid input is rejected and
/// valid objects keep working afterwards.
#[test]
fn rectangle_session() {
    let mut r1 = Rectangle::new(5.0, 4.0).unwrap();
    assert!(Rectangle::new(5.0, -4.0).is_err());
    let mut r3 = Rectangle::square(3.0).unwrap();

    let r4 = (r1 + r3).unwrap();
    assert_eq!(format!("{r4:#}"), "Rectangle(8, 7)");

    let r5 = (r1 - r3).unwrap();
    assert_eq!(format!("{r5:#}"), "Rectangle(2, 1)");

    let r6 = Rectangle::new(4.0, 5.0).unwrap();
    assert!((r1 - r6).is_err());

    assert!(r3.set_width(-10.0).is_err());
    assert_eq!(r3.width(), 3.0);

    r1.set_height(8.0).unwrap();
    assert_eq!(r1.to_string(), "Rectangle with sides 5 and 8");
}

#[test]
fn archive_session() {
    let mut archive = Archive::new();
    for (text, number) in [("text1", "1"), ("text2", "2"), ("text3", "3"), ("text4", "4"), ("text5", "5")] {
        archive.submit(text, number).unwrap();
    }
    assert!(archive.submit("", "-5").is_err());
    assert!(archive.submit("text7", "7t").is_err());

    assert_eq!(archive.len(), 4);
    assert_eq!(archive.texts(), ["text1", "text2", "text3", "text4"]);
    assert_eq!(archive.current(), Some(&Entry::new("text5", 5.0).unwrap()));
}

#[test]
fn employee_session() {
    let person = Person::new("иванов", "иван", "иванович", 30).unwrap();
    let mut e1 = Employee::new(person, "менеджер проекта", 200_000.0).unwrap();
    e1.raise_salary(30.0).unwrap();
    assert!((e1.salary() - 260_000.0).abs() < 1e-6);
    assert_eq!(e1.to_string(), "Иванов Иван Иванович (Менеджер Проекта)");

    let person = Person::new("сидоров", "аристарх", "иванович", 55).unwrap();
    let mut e2 = Employee::new(person, "начальник отдела", 350_000.0).unwrap();
    assert_eq!(e2.raise_salary(-200.0), Err(EmployeeError::InvalidPercent(-200.0)));
    e2.birthday();
    assert_eq!(e2.person().age(), 56);
}

#[test]
fn log_files_are_per_exercise() {
    let cfg = Config {
        log_dir: PathBuf::from("logs"),
        ..Config::default()
    };
    let paths: Vec<PathBuf> = [Exercise::Rectangle, Exercise::Archive, Exercise::Employee]
        .into_iter()
        .map(|e| cfg.log_path(e))
        .collect();

    assert_eq!(
        paths,
        [
            PathBuf::from("logs/rectangle_info.txt"),
            PathBuf::from("logs/archive_info.txt"),
            PathBuf::from("logs/employee_info.txt"),
        ]
    );
}
