pub mod burnout;
pub mod dashboard;
pub mod login;
pub mod predictions;
pub mod register;
