//! Driver layer around `calc_eval`: request handling and the interactive session.

pub mod repl;
pub mod service;

pub use service::{handle_request, handle_request_with, respond, Response, ResponseBody};
