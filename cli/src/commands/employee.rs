use clap::Args;
use seminar_common::config::Config;
use seminar_core::{Employee, Person};

use crate::terminal::{format, print};

#[derive(Args)]
pub struct EmployeeArgs {
    /// Last name
    #[arg(short, long, alias = "last_name")]
    pub last_name: String,

    /// First name
    #[arg(short, long, alias = "first_name")]
    pub first_name: String,

    /// Patronymic
    #[arg(short, long)]
    pub patronymic: String,

    /// Age in years
    #[arg(short, long)]
    pub age: u32,

    /// Job title
    #[arg(short = 'P', long)]
    pub position: String,

    /// Starting salary
    #[arg(short, long)]
    pub salary: f64,

    /// Raise the salary by this many percent after hiring
    #[arg(short, long, allow_negative_numbers = true)]
    pub raise: Option<f64>,

    /// Celebrate a birthday after hiring
    #[arg(long)]
    pub birthday: bool,
}

pub fn employee(args: EmployeeArgs, cfg: &Config) -> anyhow::Result<()> {
    let person = Person::new(&args.last_name, &args.first_name, &args.patronymic, args.age)?;
    let mut employee = Employee::new(person, &args.position, args.salary)?;

    print::header("employee", cfg.quiet);
    show(&employee, cfg);

    if let Some(percent) = args.raise {
        let before: f64 = employee.salary();
        employee.raise_salary(percent)?;
        print::header("salary raise", cfg.quiet);
        print::as_tree_one_level(vec![
            (String::from("Percent"), format::number(percent)),
            (String::from("Before"), format::number(before)),
            (String::from("After"), format::number(employee.salary())),
        ]);
    }

    if args.birthday {
        employee.birthday();
        print::header("birthday", cfg.quiet);
        show(&employee, cfg);
    }

    print::fat_separator(cfg.quiet);
    Ok(())
}

fn show(employee: &Employee, cfg: &Config) {
    match cfg.quiet {
        2 => print::print(&employee.to_string()),
        _ => print::details(format::employee_details(employee)),
    }
}
