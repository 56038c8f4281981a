// src/services/mod.rs
pub mod attendance_service;
pub mod student_service;
pub mod teacher_service;
pub mod user_service;
