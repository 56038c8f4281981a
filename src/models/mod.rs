// src/models/mod.rs
pub mod attendance;
pub mod student;
pub mod teacher;
pub mod user;
