//! Keyword-to-summary lookup for the overview panel.

/// Topic keywords and their summaries. Earlier entries win when a query
/// mentions several topics, so keep this order.
pub static OVERVIEWS: [(&str, &str); 3] = [
    (
        "ai",
        "Artificial Intelligence is a rapidly evolving field of computer science. \
         It focuses on creating intelligent machines that can simulate human-like \
         thinking and behavior.",
    ),
    (
        "machine learning",
        "Machine Learning is a subset of AI that enables computers to learn from data \
         without being explicitly programmed. It's revolutionizing industries from \
         healthcare to finance.",
    ),
    (
        "technology",
        "Technology continues to advance at an unprecedented rate, transforming how we \
         live, work, and interact with the world around us.",
    ),
];

/// Returned when no keyword occurs in the query.
pub const FALLBACK_OVERVIEW: &str = "A comprehensive search exploring various aspects of \
     the topic, providing insights and relevant information.";

/// Pick the summary for the first keyword found anywhere in `query`.
pub fn overview_for(query: &str) -> &'static str {
    let query_lower = query.to_lowercase();
    OVERVIEWS
        .iter()
        .find(|(keyword, _)| query_lower.contains(keyword))
        .map(|(_, summary)| *summary)
        .unwrap_or(FALLBACK_OVERVIEW)
}

/// The keywords in lookup order.
pub fn keywords() -> impl Iterator<Item = &'static str> {
    OVERVIEWS.iter().map(|(keyword, _)| *keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(keyword: &str) -> &'static str {
        OVERVIEWS
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, s)| *s)
            .unwrap()
    }

    #[test]
    fn ai_query_gets_ai_summary() {
        assert_eq!(overview_for("AI"), summary("ai"));
        assert_eq!(overview_for("what is ai?"), summary("ai"));
        assert!(summary("ai").starts_with("Artificial Intelligence is a rapidly evolving field"));
    }

    #[test]
    fn ai_wins_over_later_keywords() {
        // Contains both "ai" and "technology"; table order decides.
        assert_eq!(overview_for("ai technology"), summary("ai"));
        // "explain" contains "ai", which is checked before "machine learning".
        assert_eq!(overview_for("explain machine learning"), summary("ai"));
    }

    #[test]
    fn machine_learning_without_ai() {
        assert_eq!(overview_for("Machine Learning"), summary("machine learning"));
    }

    #[test]
    fn technology_summary() {
        assert_eq!(overview_for("TECHNOLOGY news"), summary("technology"));
    }

    #[test]
    fn keyword_may_sit_inside_a_word() {
        // "rain" contains "ai".
        assert_eq!(overview_for("rain"), summary("ai"));
    }

    #[test]
    fn unmatched_query_falls_back() {
        assert_eq!(overview_for("xyz123"), FALLBACK_OVERVIEW);
        assert_eq!(overview_for("rust"), FALLBACK_OVERVIEW);
        assert_eq!(
            FALLBACK_OVERVIEW,
            "A comprehensive search exploring various aspects of the topic, providing \
             insights and relevant information."
        );
    }

    #[test]
    fn keywords_keep_lookup_order() {
        assert_eq!(
            keywords().collect::<Vec<_>>(),
            vec!["ai", "machine learning", "technology"]
        );
    }
}
