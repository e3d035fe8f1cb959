//! Colored terminal rendering of outcomes and errors
//!
//! Mirrors the plain `Display` output of the core crate, adding color only
//! when enabled. With color off the output is identical to `Display`.

use crossterm::style::{StyledContent, Stylize};
use roster_core::{Outcome, RosterError};
use std::fmt::Display;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint<D, F>(&self, content: D, style: F) -> String
    where
        D: Display,
        F: FnOnce(StyledContent<String>) -> StyledContent<String>,
    {
        let text = content.to_string();
        if self.color {
            style(text.stylize()).to_string()
        } else {
            text
        }
    }

    pub fn banner(&self, text: &str) -> String {
        self.paint(text, |s| s.dark_cyan())
    }

    pub fn hint(&self, text: &str) -> String {
        self.paint(text, |s| s.dark_yellow())
    }

    pub fn error(&self, err: &RosterError) -> String {
        self.paint(format!("ERROR: {}", err), |s| s.red())
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text, |s| s.bold().on_yellow().black())
    }

    pub fn outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::TraineeDetail { trainee, courses } => format!(
                "{}\n{} {}",
                self.heading(&format!(
                    "{} {} {}",
                    trainee.id, trainee.first_name, trainee.last_name
                )),
                self.paint("Courses:", |s| s.bold()),
                self.paint(Outcome::course_names(courses), |s| s.dark_cyan()),
            ),
            Outcome::TraineeList(trainees) => {
                let mut lines = vec![self.heading("Trainees:")];
                lines.extend(trainees.iter().map(|t| {
                    format!(
                        "{} {} {}",
                        self.paint(t.id, |s| s.bold()),
                        self.paint(&t.first_name, |s| s.dark_cyan()),
                        self.paint(&t.last_name, |s| s.cyan()),
                    )
                }));
                lines.push(String::new());
                lines.push(self.total(trainees.len()));
                lines.join("\n")
            }
            Outcome::CourseDetail {
                course,
                participants,
            } => {
                let mut lines = vec![
                    self.heading(&format!("{} {} {}", course.id, course.name, course.start_date)),
                    format!(
                        "{} ({}):",
                        self.paint("Participants", |s| s.bold()),
                        participants.len()
                    ),
                ];
                lines.extend(participants.iter().map(|t| {
                    format!(
                        "- {} {} {}",
                        t.id,
                        self.paint(&t.first_name, |s| s.dark_cyan()),
                        self.paint(&t.last_name, |s| s.cyan()),
                    )
                }));
                lines.join("\n")
            }
            Outcome::CourseList(courses) => {
                let mut lines = vec![self.heading("Courses:")];
                lines.extend(courses.iter().map(|c| {
                    let mut line = format!(
                        "{} {} {} {}",
                        self.paint(c.id, |s| s.bold()),
                        self.paint(&c.name, |s| s.dark_cyan()),
                        c.start_date,
                        c.participant_count
                    );
                    if c.full {
                        line.push(' ');
                        line.push_str(&self.paint("FULL", |s| s.cyan()));
                    }
                    line
                }));
                lines.push(String::new());
                lines.push(self.total(courses.len()));
                lines.join("\n")
            }
            confirmation => self.paint(confirmation, |s| s.dark_cyan()),
        }
    }

    fn total(&self, count: usize) -> String {
        format!("{} {}", self.heading("Total:"), self.paint(count, |s| s.bold()))
    }
}
