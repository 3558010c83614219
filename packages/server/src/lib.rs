// Classroom Chat - API Core
//
// Backend API for classroom chat sessions: teachers create rooms, students
// join via a shared link and exchange messages, and participation analytics
// are computed on demand when a session ends.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
