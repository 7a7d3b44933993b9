//! Shared fixtures for integration tests.
#![allow(dead_code)]

use batchguard::api::{
    Batch, BatchId, BatchStatus, Candidate, ClockMinutes, CourseId, InstructorId, TimeSlot,
};
use chrono::Weekday;

pub fn batch(id: &str, name: &str, instructors: &[&str], days: &[Weekday], time: &str) -> Batch {
    Batch {
        id: BatchId::new(id),
        name: name.to_string(),
        course_id: CourseId::new("course-1"),
        instructor_ids: instructors.iter().map(|i| InstructorId::new(*i)).collect(),
        status: BatchStatus::Active,
        days: days.to_vec(),
        time_range: time.to_string(),
        start_date: None,
        end_date: None,
    }
}

pub fn candidate(instructors: &[&str], days: &[Weekday], start: u16, end: u16) -> Candidate {
    Candidate {
        name: "Candidate Batch".to_string(),
        course_id: CourseId::new("course-1"),
        instructor_ids: instructors.iter().map(|i| InstructorId::new(*i)).collect(),
        days: days.to_vec(),
        time_slot: TimeSlot::new(ClockMinutes::new(start), ClockMinutes::new(end)),
        start_date: None,
        end_date: None,
    }
}
