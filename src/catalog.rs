//! The fixed result catalog and the substring filter over it.

use serde::Serialize;

/// One result card: a titled link with a snippet and an optional image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: &'static str,
    pub link: &'static str,
    pub snippet: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

/// Every result the view can ever show, in display order.
pub static CATALOG: [SearchResult; 3] = [
    SearchResult {
        title: "Wikipedia: AI",
        link: "https://en.wikipedia.org/wiki/Artificial_intelligence",
        snippet: "Artificial intelligence (AI) is intelligence demonstrated by machines, \
                  unlike natural intelligence displayed by animals and humans.",
        image: Some(
            "https://upload.wikimedia.org/wikipedia/commons/0/05/Sci-fi_artificial_intelligence.jpg",
        ),
    },
    SearchResult {
        title: "OpenAI Research",
        link: "https://openai.com/research",
        snippet: "Pioneering research in artificial intelligence to ensure that artificial \
                  general intelligence benefits all of humanity.",
        image: Some("https://openai.com/content/images/2022/05/openai-social-logo.png"),
    },
    SearchResult {
        title: "Machine Learning Basics",
        link: "https://www.coursera.org/learn/machine-learning",
        snippet: "Learn about the most effective machine learning techniques, and gain \
                  practice implementing them and getting them to work for yourself.",
        image: Some(
            "https://d3njjcbhbojbot.cloudfront.net/api/utilities/v1/imageproxy/\
             https://d15cw65ipctsrr.cloudfront.net/20/8f20cc684011e88a7b4b3c5ee2f156/ML-hero.png",
        ),
    },
];

impl SearchResult {
    /// Case-insensitive containment against title or snippet.
    /// `query_lower` must already be lowercased.
    fn matches(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.snippet.to_lowercase().contains(query_lower)
    }
}

/// Filter the catalog by a free-text query.
///
/// Keeps catalog order. The query is used as typed (no trimming); callers are
/// expected to drop blank queries before getting here. Never fails, worst case
/// the result is empty.
pub fn search(query: &str) -> Vec<SearchResult> {
    let query_lower = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|item| item.matches(&query_lower))
        .copied()
        .collect()
}
