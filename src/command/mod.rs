//! Serial command responder.
//!
//! ```text
//!  bytes ──▶ LineDecoder ──▶ Command::parse ──▶ CommandResponder ──▶ reply line
//! ```
//!
//! The link is line oriented ASCII. `id?` returns the identification
//! string; any other non-empty token returns one tab-separated report
//! line. Everything else is dropped without a reply.

pub mod codec;
pub mod protocol;
pub mod responder;
