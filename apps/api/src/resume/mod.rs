// Resume intake: document text extraction, contact and skill detection.

pub mod contact;
pub mod handlers;
pub mod parser;
pub mod skills;
pub mod text_extractor;
