//! Request-pipeline middleware for quill-web.

pub mod visit_recorder;
