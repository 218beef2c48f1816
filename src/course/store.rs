//! In-memory course store.
//!
//! # Responsibilities
//! - Own the ordered sequence of course records for the process lifetime
//! - Assign unique, monotonically derived ids on insertion
//! - Expose lookup and mutation primitives for the HTTP handlers
//!
//! # Design Decisions
//! - Backed by a Vec: the collection is small and insertion order is part
//!   of the observable contract
//! - New id = max existing id + 1 (1 when empty), so ids never collide
//! - No interior locking; the caller serializes access

use crate::course::model::Course;
use crate::course::payload::CourseName;

/// Ordered in-memory collection of course records.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
}

impl CourseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, insertion order preserved.
    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Insert a new record with a freshly assigned id.
    pub fn insert(&mut self, name: CourseName) -> Course {
        let course = Course {
            id: self.next_id(),
            name: name.into_inner(),
        };
        self.courses.push(course.clone());
        course
    }

    /// Replace the name of an existing record, keeping its id.
    ///
    /// Returns the updated record, or `None` when no record has this id.
    pub fn update(&mut self, id: u64, name: CourseName) -> Option<Course> {
        let course = self.courses.iter_mut().find(|c| c.id == id)?;
        course.name = name.into_inner();
        Some(course.clone())
    }

    /// Remove a record by id, returning it.
    pub fn remove(&mut self, id: u64) -> Option<Course> {
        let index = self.courses.iter().position(|c| c.id == id)?;
        Some(self.courses.remove(index))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    fn next_id(&self) -> u64 {
        self.courses
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}
