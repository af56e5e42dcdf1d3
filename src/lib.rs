// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive CLI.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the marketplace backend
//   (submit a listing, fetch/search items, download images).
// - `listing`: The listing form itself: field state, the image-required
//   submit guard, and the completion callback.
// - `ui`: Implements the terminal-based user interface flows and
//   delegates requests to `api` through `listing`.
//
// Keeping this separation makes it easier to test the form and API logic
// or replace the UI in the future (for example, adding a TUI or GUI).
pub mod api;
pub mod listing;
pub mod ui;
