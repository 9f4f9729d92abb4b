//! Data models for `GpaPolicy`

pub mod category;
pub mod course;
pub mod grade;

pub use category::CourseCategory;
pub use course::Course;
pub use grade::{Grade, GradeLevel};
