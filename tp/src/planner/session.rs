//! Session-scoped context
//!
//! One interactive session owns an append-only log of the itineraries it
//! generated plus a conversation transcript. Both are passed explicitly to
//! whoever needs them; there is no ambient global state.

use triplog::ItineraryRecord;

/// Append-only list of itineraries generated this session
#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Vec<ItineraryRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generated itinerary; existing entries are never touched
    pub fn append(&mut self, record: ItineraryRecord) {
        self.entries.push(record);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[ItineraryRecord] {
        &self.entries
    }

    /// The most recent entry, if any
    pub fn latest(&self) -> Option<&ItineraryRecord> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Who said a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Traveler,
    Assistant,
}

/// One transcript line
#[derive(Debug, Clone)]
pub struct TranscriptTurn {
    pub speaker: Speaker,
    pub content: String,
}

/// Conversation transcript for one session
///
/// Mirrors the submission flow: the traveler's destination and interests
/// lines, then the assistant's itinerary.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<TranscriptTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the traveler's destination line
    pub fn record_destination(&mut self, city: &str) {
        self.turns.push(TranscriptTurn {
            speaker: Speaker::Traveler,
            content: format!("Destination: {}", city),
        });
    }

    /// Record the traveler's interests line (raw channel text, as given)
    pub fn record_interests(&mut self, interests: &str) {
        self.turns.push(TranscriptTurn {
            speaker: Speaker::Traveler,
            content: format!("Interests: {}", interests),
        });
    }

    /// Record the assistant's generated itinerary
    pub fn record_itinerary(&mut self, itinerary: &str) {
        self.turns.push(TranscriptTurn {
            speaker: Speaker::Assistant,
            content: itinerary.to_string(),
        });
    }

    /// All turns, in order
    pub fn turns(&self) -> &[TranscriptTurn] {
        &self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: &str) -> ItineraryRecord {
        ItineraryRecord::new(
            city,
            vec!["food".to_string()],
            "Full day",
            "Mid-range",
            vec!["Cultural".to_string()],
            "text",
        )
    }

    #[test]
    fn test_session_log_is_append_only_and_ordered() {
        let mut log = SessionLog::new();
        assert!(log.is_empty());

        log.append(record("Paris"));
        log.append(record("Tokyo"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].destination, "Paris");
        assert_eq!(log.entries()[1].destination, "Tokyo");
        assert_eq!(log.latest().unwrap().destination, "Tokyo");
    }

    #[test]
    fn test_transcript_line_formats() {
        let mut transcript = Transcript::new();
        transcript.record_destination("Paris");
        transcript.record_interests("art, food, Duration: 2 days");
        transcript.record_itinerary("# Day 1");

        let turns = transcript.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].speaker, Speaker::Traveler);
        assert_eq!(turns[0].content, "Destination: Paris");
        assert_eq!(turns[1].content, "Interests: art, food, Duration: 2 days");
        assert_eq!(turns[2].speaker, Speaker::Assistant);
        assert_eq!(turns[2].content, "# Day 1");
    }
}
