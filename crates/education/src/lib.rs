//! Security-awareness education content: the training catalog behind the
//! education view and the two decoy pages a simulation points recipients at.

pub mod catalog;
pub mod decoy;

pub use catalog::{courses, quizzes, resources, Course, Difficulty, Quiz, ResourceGuide};
pub use decoy::{feedback_page, landing_page, DecoyPage};
