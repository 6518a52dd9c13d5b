//! Keyword assistant
//!
//! Matches the question against a fixed list of topics and answers from
//! the live store. Anything unmatched gets a generic answer plus
//! suggested questions.

use shared::models::{ChatResponse, PujaType};

use crate::core::ServerState;

/// Topics in match order; the first topic with a matching keyword wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Prasad,
    Parking,
    Queue,
    Booking,
    Puja,
    Schedule,
}

const TOPICS: &[(Topic, &[&str])] = &[
    (Topic::Prasad, &["prasad", "bhandara", "langar"]),
    (Topic::Parking, &["parking", "park", "car", "bike", "vehicle"]),
    (Topic::Queue, &["queue", "token", "wait", "line"]),
    (Topic::Booking, &["book", "slot", "e-token", "ticket"]),
    (Topic::Puja, &["puja", "pooja", "pandit"]),
    (
        Topic::Schedule,
        &["schedule", "aarti", "darshan", "timing", "open", "close"],
    ),
];

const SUGGESTIONS: &[&str] = &[
    "What are the darshan timings?",
    "When is prasad served?",
    "How long is the queue?",
    "Where can I park?",
];

const DEFAULT_ANSWER: &str = "I can help with darshan timings, prasad, parking, the token \
    queue, e-token booking and virtual puja. What would you like to know?";

fn topic_of(question: &str) -> Option<Topic> {
    let question = question.to_lowercase();
    let words: Vec<&str> = question
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .filter(|w| !w.is_empty())
        .collect();

    TOPICS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| words.contains(k)))
        .map(|(topic, _)| *topic)
}

fn rupees(amount: f64) -> String {
    format!("₹{}", amount)
}

pub fn answer(state: &ServerState, question: &str) -> ChatResponse {
    let store = state.store();
    let answer = match topic_of(question) {
        Some(Topic::Prasad) => {
            let t = store.prasad_timings();
            format!(
                "Prasad is served {} in the morning and {} in the evening. \
                 Bhandara is held {}, {}.",
                t.morning, t.evening, t.bhandara_day, t.bhandara_time
            )
        }
        Some(Topic::Parking) => {
            let p = store.parking();
            format!(
                "{} of {} parking spaces are free. Two-wheelers pay {}, four-wheelers pay {}.",
                p.available_spaces,
                p.total_spaces,
                rupees(p.pricing.two_wheeler),
                rupees(p.pricing.four_wheeler)
            )
        }
        Some(Topic::Queue) => {
            let view = store.queue_view(
                state.config.queue_length,
                state.config.average_processing_minutes,
            );
            if view.status.is_active {
                format!(
                    "Now serving token #{}. The estimated wait is about {} minutes.",
                    view.status.current_token, view.estimated_wait_time
                )
            } else {
                format!(
                    "The queue is paused at token #{}. {}",
                    view.status.current_token, view.status.display_message
                )
            }
        }
        Some(Topic::Booking) => {
            let open: Vec<String> = store
                .list_slots(None)
                .into_iter()
                .filter(|s| s.is_available)
                .map(|s| format!("{} {} ({} left)", s.slot.date, s.slot.time, s.spots_remaining))
                .collect();
            if open.is_empty() {
                "All darshan slots are fully booked right now.".to_string()
            } else {
                format!("You can book an e-token for: {}.", open.join(", "))
            }
        }
        Some(Topic::Puja) => {
            let pujas = [
                PujaType::Rudrabhishek,
                PujaType::Satyanarayan,
                PujaType::GrihaShanti,
            ]
            .iter()
            .map(|p| format!("{} ₹{}", p.display_name(), p.price()))
            .collect::<Vec<_>>()
            .join(", ");
            format!("Virtual pujas on offer: {pujas}.")
        }
        Some(Topic::Schedule) => {
            let entries = store
                .schedule()
                .into_iter()
                .map(|e| format!("{} {}", e.time, e.event))
                .collect::<Vec<_>>()
                .join("; ");
            format!("Today's schedule: {entries}.")
        }
        None => {
            return ChatResponse {
                answer: DEFAULT_ANSWER.to_string(),
                suggestions: Some(SUGGESTIONS.iter().map(|s| s.to_string()).collect()),
            };
        }
    };

    ChatResponse {
        answer,
        suggestions: None,
    }
}
