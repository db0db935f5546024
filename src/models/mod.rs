//! # Data Model
//!
//! The Task entity and its request types.

pub mod task;

pub use task::{CreateTaskRequest, NewTask, Task, TaskPatch, TaskStatus, UpdateTaskRequest};
