pub mod catalog;
pub mod chat;
pub mod feedback;
pub mod lead;
pub mod status;
