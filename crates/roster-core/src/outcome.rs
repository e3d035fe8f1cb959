//! Typed results of successful commands
//!
//! Handlers never build presentation strings themselves. The `Display` impl
//! here is the plain-text rendering; the CLI adds color on top of the same
//! structure.

use crate::core_types::{Course, RecordId, Trainee};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub id: RecordId,
    pub name: String,
    pub start_date: String,
    pub participant_count: usize,
    pub full: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    TraineeCreated(Trainee),
    TraineeUpdated(Trainee),
    TraineeDeleted(Trainee),
    TraineeDetail {
        trainee: Trainee,
        courses: Vec<String>,
    },
    TraineeList(Vec<Trainee>),
    CourseCreated(Course),
    CourseUpdated(Course),
    CourseDeleted(Course),
    Joined {
        trainee: Trainee,
        course: Course,
    },
    Left {
        trainee: Trainee,
        course: Course,
    },
    CourseDetail {
        course: Course,
        participants: Vec<Trainee>,
    },
    CourseList(Vec<CourseSummary>),
}

impl Outcome {
    /// Course names joined the way trainee details print them.
    pub fn course_names(courses: &[String]) -> String {
        if courses.is_empty() {
            "none".to_string()
        } else {
            courses.join(", ")
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::TraineeCreated(t) => {
                write!(f, "CREATED: {} {} {}", t.id, t.first_name, t.last_name)
            }
            Outcome::TraineeUpdated(t) => {
                write!(f, "UPDATED: {} {} {}", t.id, t.first_name, t.last_name)
            }
            Outcome::TraineeDeleted(t) => {
                write!(f, "DELETED: {} {} {}", t.id, t.first_name, t.last_name)
            }
            Outcome::TraineeDetail { trainee, courses } => {
                writeln!(f, "{} {} {}", trainee.id, trainee.first_name, trainee.last_name)?;
                write!(f, "Courses: {}", Self::course_names(courses))
            }
            Outcome::TraineeList(trainees) => {
                writeln!(f, "Trainees:")?;
                for t in trainees {
                    writeln!(f, "{} {} {}", t.id, t.first_name, t.last_name)?;
                }
                write!(f, "\nTotal: {}", trainees.len())
            }
            Outcome::CourseCreated(c) => {
                write!(f, "CREATED: {} {} {}", c.id, c.name, c.start_date)
            }
            Outcome::CourseUpdated(c) => {
                write!(f, "UPDATED: {} {} {}", c.id, c.name, c.start_date)
            }
            Outcome::CourseDeleted(c) => write!(f, "DELETED: {} {}", c.id, c.name),
            Outcome::Joined { trainee, course } => {
                write!(f, "{} Joined {}", trainee.full_name(), course.name)
            }
            Outcome::Left { trainee, course } => {
                write!(f, "{} Left {}", trainee.full_name(), course.name)
            }
            Outcome::CourseDetail {
                course,
                participants,
            } => {
                writeln!(f, "{} {} {}", course.id, course.name, course.start_date)?;
                write!(f, "Participants ({}):", participants.len())?;
                for t in participants {
                    write!(f, "\n- {} {} {}", t.id, t.first_name, t.last_name)?;
                }
                Ok(())
            }
            Outcome::CourseList(courses) => {
                writeln!(f, "Courses:")?;
                for c in courses {
                    write!(f, "{} {} {} {}", c.id, c.name, c.start_date, c.participant_count)?;
                    if c.full {
                        write!(f, " FULL")?;
                    }
                    writeln!(f)?;
                }
                write!(f, "\nTotal: {}", courses.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Trainee {
        Trainee {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[test]
    fn test_confirmation_lines() {
        let course = Course {
            id: 9,
            name: "Intro to Rust".to_string(),
            start_date: "2026-03-01".to_string(),
            participants: vec![],
        };
        assert_eq!(Outcome::TraineeCreated(ada()).to_string(), "CREATED: 1 Ada Lovelace");
        assert_eq!(Outcome::CourseDeleted(course.clone()).to_string(), "DELETED: 9 Intro to Rust");
        assert_eq!(
            Outcome::Joined {
                trainee: ada(),
                course
            }
            .to_string(),
            "Ada Lovelace Joined Intro to Rust"
        );
    }

    #[test]
    fn test_course_list_marks_full_courses() {
        let list = Outcome::CourseList(vec![
            CourseSummary {
                id: 1,
                name: "A".to_string(),
                start_date: "2026-01-01".to_string(),
                participant_count: 20,
                full: true,
            },
            CourseSummary {
                id: 2,
                name: "B".to_string(),
                start_date: "2026-02-01".to_string(),
                participant_count: 3,
                full: false,
            },
        ]);
        assert_eq!(
            list.to_string(),
            "Courses:\n1 A 2026-01-01 20 FULL\n2 B 2026-02-01 3\n\nTotal: 2"
        );
    }

    #[test]
    fn test_trainee_detail_without_courses() {
        let detail = Outcome::TraineeDetail {
            trainee: ada(),
            courses: vec![],
        };
        assert_eq!(detail.to_string(), "1 Ada Lovelace\nCourses: none");
    }
}
