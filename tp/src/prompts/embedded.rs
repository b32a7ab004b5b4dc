//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

/// Itinerary generation system prompt
pub const ITINERARY: &str = include_str!("../../prompts/itinerary.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "itinerary" => Some(ITINERARY),
        _ => None,
    }
}
