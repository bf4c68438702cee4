//! Record types for the two resources the API serves.

pub mod course;
pub mod review;

pub use course::Course;
pub use review::Review;
