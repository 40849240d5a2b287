// Job catalog access and skill-overlap matching.

pub mod catalog;
pub mod handlers;
pub mod matcher;
