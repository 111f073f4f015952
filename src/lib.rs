//! TimeMachine - keyword search over a small fixed catalog
//!
//! A single search view: type a query, trigger the search, wait out a simulated
//! network delay, then read an overview sentence and a grid of result cards.
//!
//! # Features
//!
//! - **Substring Search**: Case-insensitive match on result titles and snippets
//! - **Topic Overview**: Keyword lookup that summarizes what the query is about
//! - **Terminal UI**: Full-screen ratatui view with keyboard navigation
//! - **Native GUI**: egui window with clickable cards and remote images
//! - **One-shot CLI**: Scriptable search with text or JSON output
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use timemachine::{SearchSession, TriggerOutcome};
//!
//! let mut session = SearchSession::new(Duration::from_secs(1));
//! session.set_query("machine learning");
//!
//! if session.trigger() == TriggerOutcome::Scheduled {
//!     session.wait_for_completion(Duration::from_secs(5));
//! }
//!
//! println!("{}", session.state.overview);
//! for result in &session.state.results {
//!     println!("{} - {}", result.title, result.link);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod gui;
pub mod logging;
pub mod overview;
pub mod session;
pub mod tui;

// Re-export main types
pub use catalog::{SearchResult, CATALOG};
pub use error::{Result, TimeMachineError};
pub use overview::{overview_for, FALLBACK_OVERVIEW};
pub use session::{SearchCompletion, SearchSession, TriggerOutcome, ViewState};

use std::time::Duration;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest simulated delay the CLI accepts
pub const MAX_SEARCH_DELAY: Duration = Duration::from_secs(60);

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Simulated network delay between trigger and results
    pub search_delay: Duration,
    /// Terminal input poll interval
    pub tick_rate: Duration,
    /// Hand result links to the system browser (otherwise only report them)
    pub open_links_in_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(1000),
            tick_rate: Duration::from_millis(50),
            open_links_in_browser: true,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.search_delay > MAX_SEARCH_DELAY {
            return Err(TimeMachineError::InvalidConfig(format!(
                "search delay {}ms exceeds the {}ms limit",
                self.search_delay.as_millis(),
                MAX_SEARCH_DELAY.as_millis()
            )));
        }
        Ok(())
    }

    /// A fresh session using this configuration's delay
    pub fn session(&self) -> SearchSession {
        SearchSession::new(self.search_delay)
    }
}

/// Open a result link in a new browser context
pub fn open_link(link: &str) -> Result<()> {
    open::that_detached(link).map_err(|source| TimeMachineError::OpenLink {
        link: link.to_string(),
        source,
    })?;
    logging::log_link_opened(link);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_one_second() {
        let config = AppConfig::default();
        assert_eq!(config.search_delay, Duration::from_secs(1));
        assert!(config.validate().is_ok());
        assert_eq!(config.session().delay(), Duration::from_secs(1));
    }

    #[test]
    fn overlong_delay_is_rejected() {
        let config = AppConfig {
            search_delay: Duration::from_secs(61),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TimeMachineError::InvalidConfig(_))
        ));
    }
}
