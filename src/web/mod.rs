// src/web/mod.rs
pub mod attendance_handlers;
pub mod auth_handlers;
pub mod extract;
pub mod routes;
pub mod student_handlers;
pub mod teacher_handlers;
pub mod user_handlers;
