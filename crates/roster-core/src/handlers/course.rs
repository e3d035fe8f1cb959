//! Course operations, including enrollment of trainees
//!
//! Referential integrity between courses and trainees is only checked when a
//! trainee joins a course. Deleting a trainee later does not touch the
//! participant lists.

use crate::config::{IdConfig, LimitsConfig};
use crate::core_types::{Course, RecordId};
use crate::errors::RosterError;
use crate::handlers::trainee::TraineeHandler;
use crate::handlers::{arg, is_blank, parse_id};
use crate::ids::{allocate_id, IdSource};
use crate::outcome::{CourseSummary, Outcome};
use crate::storage::RosterStore;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static START_DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid start date pattern"));

#[derive(Clone)]
pub struct CourseHandler {
    store: Arc<dyn RosterStore>,
    trainees: TraineeHandler,
    ids: Arc<dyn IdSource>,
    id_config: IdConfig,
    limits: LimitsConfig,
}

fn course_by_id(courses: &[Course], id: RecordId) -> Result<usize, RosterError> {
    courses
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| RosterError::NotFound(format!("Course with ID {} doesn't exist", id)))
}

fn validate_start_date(start_date: &str) -> Result<(), RosterError> {
    if !START_DATE_PATTERN.is_match(start_date) {
        return Err(RosterError::Validation(
            "Invalid start date. Must be in yyyy-MM-dd format".to_string(),
        ));
    }
    Ok(())
}

impl CourseHandler {
    pub fn new(
        store: Arc<dyn RosterStore>,
        trainees: TraineeHandler,
        ids: Arc<dyn IdSource>,
        id_config: IdConfig,
        limits: LimitsConfig,
    ) -> Self {
        Self {
            store,
            trainees,
            ids,
            id_config,
            limits,
        }
    }

    pub async fn handle(&self, subcommand: &str, args: &[String]) -> Result<Outcome, RosterError> {
        match subcommand {
            "ADD" => self.add(arg(args, 0), arg(args, 1)).await,
            "UPDATE" => self.update(arg(args, 0), arg(args, 1), arg(args, 2)).await,
            "DELETE" => self.delete(arg(args, 0)).await,
            "JOIN" => self.join(arg(args, 0), arg(args, 1)).await,
            "LEAVE" => self.leave(arg(args, 0), arg(args, 1)).await,
            "GET" => self.get(arg(args, 0)).await,
            "GETALL" => self.get_all().await,
            other => Err(RosterError::Validation(format!(
                "Invalid COURSE subcommand: {}",
                other
            ))),
        }
    }

    pub async fn add(&self, name: &str, start_date: &str) -> Result<Outcome, RosterError> {
        if is_blank(name) || is_blank(start_date) {
            return Err(RosterError::Validation(
                "Must provide course name and start date".to_string(),
            ));
        }
        validate_start_date(start_date)?;

        let mut courses = self.store.load_courses().await?;
        let id = allocate_id(self.ids.as_ref(), &self.id_config, |candidate| {
            courses.iter().any(|c| c.id == candidate)
        })?;

        let course = Course {
            id,
            name: name.to_string(),
            start_date: start_date.to_string(),
            participants: Vec::new(),
        };
        courses.push(course.clone());
        self.store.save_courses(&courses).await?;

        log::debug!("Created course {}", id);
        Ok(Outcome::CourseCreated(course))
    }

    pub async fn update(
        &self,
        id: &str,
        name: &str,
        start_date: &str,
    ) -> Result<Outcome, RosterError> {
        if is_blank(id) || is_blank(name) || is_blank(start_date) {
            return Err(RosterError::Validation(
                "Must provide ID, name and start date.".to_string(),
            ));
        }
        let id = parse_id(id, "course ID")?;
        validate_start_date(start_date)?;

        let mut courses = self.store.load_courses().await?;
        let index = course_by_id(&courses, id)?;
        let course = &mut courses[index];
        course.name = name.to_string();
        course.start_date = start_date.to_string();
        let updated = course.clone();

        self.store.save_courses(&courses).await?;

        log::debug!("Updated course {}", id);
        Ok(Outcome::CourseUpdated(updated))
    }

    pub async fn delete(&self, id: &str) -> Result<Outcome, RosterError> {
        if is_blank(id) {
            return Err(RosterError::Validation("Must provide course ID".to_string()));
        }
        let id = parse_id(id, "course ID")?;

        let mut courses = self.store.load_courses().await?;
        let index = course_by_id(&courses, id)?;
        let removed = courses.remove(index);
        self.store.save_courses(&courses).await?;

        log::debug!("Deleted course {}", id);
        Ok(Outcome::CourseDeleted(removed))
    }

    pub async fn join(&self, course_id: &str, trainee_id: &str) -> Result<Outcome, RosterError> {
        let (course_id, trainee_id) = Self::enrollment_ids(course_id, trainee_id)?;

        let mut courses = self.store.load_courses().await?;
        let index = course_by_id(&courses, course_id)?;
        let trainee = self.trainees.find(trainee_id).await?;

        let enrolled_in = courses.iter().filter(|c| c.has_participant(trainee_id)).count();
        if enrolled_in >= self.limits.max_courses_per_trainee {
            return Err(RosterError::Capacity(format!(
                "A trainee is not allowed to join more than {} courses.",
                self.limits.max_courses_per_trainee
            )));
        }

        let course = &mut courses[index];
        if course.has_participant(trainee_id) {
            return Err(RosterError::Conflict(
                "The Trainee has already joined this course".to_string(),
            ));
        }
        if course.participants.len() >= self.limits.course_capacity {
            return Err(RosterError::Capacity("The course is full.".to_string()));
        }

        course.participants.push(trainee_id);
        let joined = course.clone();
        self.store.save_courses(&courses).await?;

        log::debug!("Trainee {} joined course {}", trainee_id, course_id);
        Ok(Outcome::Joined {
            trainee,
            course: joined,
        })
    }

    pub async fn leave(&self, course_id: &str, trainee_id: &str) -> Result<Outcome, RosterError> {
        let (course_id, trainee_id) = Self::enrollment_ids(course_id, trainee_id)?;

        let mut courses = self.store.load_courses().await?;
        let index = course_by_id(&courses, course_id)?;
        let trainee = self.trainees.find(trainee_id).await?;

        let course = &mut courses[index];
        if !course.has_participant(trainee_id) {
            return Err(RosterError::Conflict(
                "The Trainee did not join the course".to_string(),
            ));
        }

        course.participants.retain(|&p| p != trainee_id);
        let left = course.clone();
        self.store.save_courses(&courses).await?;

        log::debug!("Trainee {} left course {}", trainee_id, course_id);
        Ok(Outcome::Left {
            trainee,
            course: left,
        })
    }

    pub async fn get(&self, id: &str) -> Result<Outcome, RosterError> {
        if is_blank(id) {
            return Err(RosterError::Validation("Must provide course ID".to_string()));
        }
        let id = parse_id(id, "course ID")?;

        let courses = self.store.load_courses().await?;
        let course = courses[course_by_id(&courses, id)?].clone();
        let trainees = self.trainees.all().await?;

        // Listed in trainee-collection order; stale ids never match.
        let participants = trainees
            .into_iter()
            .filter(|t| course.has_participant(t.id))
            .collect();

        Ok(Outcome::CourseDetail {
            course,
            participants,
        })
    }

    pub async fn get_all(&self) -> Result<Outcome, RosterError> {
        let mut courses = self.store.load_courses().await?;
        sort_by_start_date(&mut courses);

        let summaries = courses
            .into_iter()
            .map(|c| CourseSummary {
                id: c.id,
                participant_count: c.participants.len(),
                full: c.participants.len() >= self.limits.course_capacity,
                name: c.name,
                start_date: c.start_date,
            })
            .collect();

        Ok(Outcome::CourseList(summaries))
    }

    fn enrollment_ids(
        course_id: &str,
        trainee_id: &str,
    ) -> Result<(RecordId, RecordId), RosterError> {
        if is_blank(course_id) || is_blank(trainee_id) {
            return Err(RosterError::Validation(
                "Must provide course ID and trainee ID".to_string(),
            ));
        }
        Ok((
            parse_id(course_id, "course ID")?,
            parse_id(trainee_id, "trainee ID")?,
        ))
    }
}

/// Chronological; dates that do not parse keep their relative order at the end.
fn sort_by_start_date(courses: &mut [Course]) {
    courses.sort_by_cached_key(|c| {
        let date = NaiveDate::parse_from_str(&c.start_date, "%Y-%m-%d").ok();
        (date.is_none(), date)
    });
}
