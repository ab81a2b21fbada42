pub mod answer;
pub mod create;
pub mod delete;
