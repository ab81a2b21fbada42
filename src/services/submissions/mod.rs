pub mod delete;
pub mod grade;
pub mod submit;
