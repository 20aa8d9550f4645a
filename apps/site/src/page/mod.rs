// Resume page: settings lookup, access gates, metadata and the final document.
// Handlers compose these; everything below them is testable without a server.

pub mod access;
pub mod document;
pub mod download;
pub mod handlers;
pub mod metadata;
pub mod session;
pub mod settings;
