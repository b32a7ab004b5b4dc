//! Combined-string parameter codec
//!
//! The input surface delivers interests and trip parameters through a single
//! text channel, joined with literal `, Duration:` / `, Budget:` / `, Style:`
//! markers in that fixed order. This module reproduces that encoding and its
//! decoder exactly as a compatibility contract. The encoding is lossy and
//! order-dependent: it breaks if a field's own text contains one of the
//! marker substrings. New code should pass a
//! [`TripRequest`](super::TripRequest) directly instead.

use tracing::debug;

use super::options::{BudgetLevel, TravelStyle, TripDuration};

const DURATION_MARKER: &str = ", Duration:";
const BUDGET_MARKER: &str = ", Budget:";
const STYLE_MARKER: &str = ", Style:";

/// Join interests and trip parameters into the combined channel string
///
/// Pure string concatenation; any input text is accepted verbatim.
pub fn encode(interests: &[String], duration: &str, budget: &str, travel_style: &[String]) -> String {
    format!(
        "{}, Duration: {}, Budget: {}, Style: {}",
        interests.join(", "),
        duration,
        budget,
        travel_style.join(", ")
    )
}

/// Best-effort decoder output
///
/// Fields that were not present in the input stay `None`; callers fall back
/// to the request defaults. Decoding never fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedParams {
    /// Interest tags from the base segment (empty pieces preserved)
    pub interests: Vec<String>,

    /// Raw duration text, trimmed
    pub duration: Option<String>,

    /// Raw budget text, trimmed
    pub budget: Option<String>,

    /// Raw style tags, each trimmed
    pub travel_style: Option<Vec<String>>,
}

/// Decoded parameters resolved onto the fixed enumerations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedParams {
    pub duration: Option<TripDuration>,
    pub budget: Option<BudgetLevel>,
    pub travel_style: Option<Vec<TravelStyle>>,
}

/// Split the combined channel string back into discrete fields
///
/// Each marker is matched at its first occurrence; everything before it
/// belongs to the preceding field, everything after continues to the next
/// marker. Missing markers end the scan and leave the remaining fields
/// unset. Comma-splitting preserves empty pieces (a trailing comma in the
/// interests text yields an empty tag, matching the historical behavior).
pub fn decode(encoded: &str) -> DecodedParams {
    debug!(len = encoded.len(), "decode: called");
    let mut params = DecodedParams::default();

    let Some((base, rest)) = encoded.split_once(DURATION_MARKER) else {
        // No parameter markers at all: the whole input is interests text
        params.interests = split_tags(encoded);
        return params;
    };

    params.interests = split_tags(base);

    let Some((duration, rest)) = rest.split_once(BUDGET_MARKER) else {
        params.duration = Some(rest.trim().to_string());
        return params;
    };
    params.duration = Some(duration.trim().to_string());

    let Some((budget, styles)) = rest.split_once(STYLE_MARKER) else {
        params.budget = Some(rest.trim().to_string());
        return params;
    };
    params.budget = Some(budget.trim().to_string());
    params.travel_style = Some(split_tags(styles));

    params
}

/// Comma-split with per-piece trimming; empty pieces are kept
fn split_tags(s: &str) -> Vec<String> {
    s.split(',').map(|piece| piece.trim().to_string()).collect()
}

impl DecodedParams {
    /// Map the raw decoded text onto the fixed enumerations
    ///
    /// Values outside the enumerations are dropped with a notice rather
    /// than failing the decode; the caller decides whether to surface the
    /// notices or silently keep defaults.
    pub fn resolve(&self) -> (ResolvedParams, Vec<String>) {
        debug!(?self.duration, ?self.budget, "resolve: called");
        let mut notices = Vec::new();
        let mut resolved = ResolvedParams::default();

        if let Some(ref raw) = self.duration {
            match raw.parse::<TripDuration>() {
                Ok(duration) => resolved.duration = Some(duration),
                Err(_) => notices.push(format!("duration '{}' not recognized", raw)),
            }
        }

        if let Some(ref raw) = self.budget {
            match raw.parse::<BudgetLevel>() {
                Ok(budget) => resolved.budget = Some(budget),
                Err(_) => notices.push(format!("budget '{}' not recognized", raw)),
            }
        }

        if let Some(ref raw_styles) = self.travel_style {
            let mut styles = Vec::new();
            for raw in raw_styles {
                match raw.parse::<TravelStyle>() {
                    Ok(style) => styles.push(style),
                    Err(_) => notices.push(format!("travel style '{}' not recognized", raw)),
                }
            }
            if !styles.is_empty() {
                resolved.travel_style = Some(styles);
            }
        }

        (resolved, notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encode_fixed_order() {
        let encoded = encode(
            &strings(&["art", "food"]),
            "2 days",
            "Luxury",
            &strings(&["Cultural", "Foodie"]),
        );
        assert_eq!(
            encoded,
            "art, food, Duration: 2 days, Budget: Luxury, Style: Cultural, Foodie"
        );
    }

    #[test]
    fn test_decode_full_round_trip() {
        let encoded = encode(
            &strings(&["art", "food"]),
            "2 days",
            "Luxury",
            &strings(&["Cultural", "Foodie"]),
        );
        let decoded = decode(&encoded);

        assert_eq!(decoded.interests, strings(&["art", "food"]));
        assert_eq!(decoded.duration.as_deref(), Some("2 days"));
        assert_eq!(decoded.budget.as_deref(), Some("Luxury"));
        assert_eq!(decoded.travel_style, Some(strings(&["Cultural", "Foodie"])));
    }

    #[test]
    fn test_decode_without_markers_is_plain_comma_split() {
        let decoded = decode("history, food, adventure");
        assert_eq!(decoded.interests, strings(&["history", "food", "adventure"]));
        assert_eq!(decoded.duration, None);
        assert_eq!(decoded.budget, None);
        assert_eq!(decoded.travel_style, None);
    }

    #[test]
    fn test_decode_duration_only() {
        let decoded = decode("beaches, Duration: Week");
        assert_eq!(decoded.interests, strings(&["beaches"]));
        assert_eq!(decoded.duration.as_deref(), Some("Week"));
        assert_eq!(decoded.budget, None);
        assert_eq!(decoded.travel_style, None);
    }

    #[test]
    fn test_decode_duration_and_budget_only() {
        let decoded = decode("beaches, Duration: Week, Budget: No limit");
        assert_eq!(decoded.duration.as_deref(), Some("Week"));
        assert_eq!(decoded.budget.as_deref(), Some("No limit"));
        assert_eq!(decoded.travel_style, None);
    }

    #[test]
    fn test_decode_preserves_empty_pieces() {
        // Trailing comma in the interests text yields an empty tag
        let decoded = decode("history, food,");
        assert_eq!(decoded.interests, strings(&["history", "food", ""]));

        let decoded = decode("a,,b, Duration: Week");
        assert_eq!(decoded.interests, strings(&["a", "", "b"]));
    }

    #[test]
    fn test_decode_marker_inside_interest_breaks_the_field() {
        // Documented fragility: a marker substring inside a field's own
        // text is indistinguishable from the real marker.
        let decoded = decode("flights, Duration: trivia, Duration: Week");
        assert_eq!(decoded.interests, strings(&["flights"]));
        assert_eq!(decoded.duration.as_deref(), Some("trivia, Duration: Week"));
    }

    #[test]
    fn test_decode_empty_input() {
        let decoded = decode("");
        assert_eq!(decoded.interests, strings(&[""]));
        assert_eq!(decoded.duration, None);
    }

    #[test]
    fn test_resolve_known_values() {
        let decoded = decode("art, Duration: 2 days, Budget: Luxury, Style: Cultural, Foodie");
        let (resolved, notices) = decoded.resolve();

        assert!(notices.is_empty());
        assert_eq!(resolved.duration, Some(TripDuration::TwoDays));
        assert_eq!(resolved.budget, Some(BudgetLevel::Luxury));
        assert_eq!(
            resolved.travel_style,
            Some(vec![TravelStyle::Cultural, TravelStyle::Foodie])
        );
    }

    #[test]
    fn test_resolve_notices_for_unknown_values() {
        let decoded = decode("art, Duration: fortnight, Budget: Luxury, Style: Cultural, spelunking");
        let (resolved, notices) = decoded.resolve();

        assert_eq!(resolved.duration, None);
        assert_eq!(resolved.budget, Some(BudgetLevel::Luxury));
        // Unrecognized style is dropped, recognized one survives
        assert_eq!(resolved.travel_style, Some(vec![TravelStyle::Cultural]));
        assert_eq!(notices.len(), 2);
        assert!(notices[0].contains("fortnight"));
        assert!(notices[1].contains("spelunking"));
    }

    #[test]
    fn test_resolve_all_styles_unknown_falls_back_to_none() {
        let decoded = decode("art, Duration: Week, Budget: Budget, Style: skydiving");
        let (resolved, notices) = decoded.resolve();
        assert_eq!(resolved.travel_style, None);
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn test_round_trip_over_the_enumerations() {
        for duration in TripDuration::ALL {
            for budget in BudgetLevel::ALL {
                let styles = vec![TravelStyle::Nature.to_string(), TravelStyle::Shopping.to_string()];
                let encoded = encode(
                    &strings(&["hiking"]),
                    &duration.to_string(),
                    &budget.to_string(),
                    &styles,
                );
                let decoded = decode(&encoded);
                assert_eq!(decoded.duration, Some(duration.to_string()));
                assert_eq!(decoded.budget, Some(budget.to_string()));
                assert_eq!(decoded.travel_style, Some(styles.clone()));
            }
        }
    }

    proptest! {
        // Any marker-free, comma-free, trimmed interest tags survive the
        // round trip unchanged.
        #[test]
        fn prop_interests_round_trip(
            tags in proptest::collection::vec("[a-zA-Z][a-zA-Z ]{0,18}[a-zA-Z]", 1..6)
        ) {
            let tags: Vec<String> = tags;
            let encoded = encode(&tags, "Full day", "Mid-range", &["Cultural".to_string()]);
            let decoded = decode(&encoded);
            let trimmed: Vec<String> = tags.iter().map(|t| t.trim().to_string()).collect();
            prop_assert_eq!(decoded.interests, trimmed);
        }
    }
}
