pub mod error;

use tracing::{debug, warn};

use crate::model::SearchResult;

pub use error::SearchError;

/// Search box, last result set and the single user-visible error slot.
///
/// State moves idle -> loading -> idle. `submit` refuses to start a second
/// lookup while one is in flight, so completions never interleave.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    input: String,
    results: Vec<SearchResult>,
    is_loading: bool,
    has_searched: bool,
    error: Option<SearchError>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a lookup for `term`. On success returns the trimmed term the
    /// caller must send, exactly once.
    pub fn submit(&mut self, term: &str) -> Result<String, SearchError> {
        if self.is_loading {
            debug!("Search already in flight, ignoring submission");
            return Err(SearchError::InFlight);
        }

        let term = term.trim();
        if term.is_empty() {
            self.error = Some(SearchError::EmptyTerm);
            return Err(SearchError::EmptyTerm);
        }

        self.error = None;
        self.results.clear();
        self.is_loading = true;
        self.has_searched = true;

        Ok(term.to_string())
    }

    /// Submits the current contents of the search box.
    pub fn submit_input(&mut self) -> Result<String, SearchError> {
        let input = self.input.clone();
        self.submit(&input)
    }

    /// Publishes the outcome of the in-flight lookup and returns the new
    /// result set.
    pub fn complete(
        &mut self,
        outcome: Result<Vec<SearchResult>, SearchError>,
    ) -> &[SearchResult] {
        if !self.is_loading {
            warn!("Search completion without a pending search, dropping it");
            return &self.results;
        }

        match outcome {
            Ok(results) => self.results = results,
            Err(e) => {
                self.results.clear();
                self.error = Some(e);
            }
        }
        self.is_loading = false;

        &self.results
    }

    pub fn dismiss_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    pub fn show_no_results(&self) -> bool {
        self.has_searched && !self.is_loading && self.results.is_empty() && self.error.is_none()
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_loading {
            self.input.push(c);
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        if !self.is_loading {
            self.input.extend(text.chars().filter(|c| !c.is_control()));
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_loading {
            self.input.pop();
        }
    }

    pub fn clear_input(&mut self) {
        if !self.is_loading {
            self.input.clear();
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: u64) -> SearchResult {
        SearchResult::new(id)
    }

    #[test]
    fn blank_term_is_rejected_locally() {
        let mut state = SearchState::new();

        for term in ["", "   ", "\t\n"] {
            assert_eq!(state.submit(term), Err(SearchError::EmptyTerm));
            assert!(!state.is_loading());
            assert!(!state.has_searched());
        }
        assert_eq!(
            state.error().map(ToString::to_string).as_deref(),
            Some("Por favor, ingresa un término de búsqueda")
        );
    }

    #[test]
    fn submit_trims_and_resets_state() {
        let mut state = SearchState::new();
        state.submit("first").unwrap();
        state.complete(Ok(vec![result(1)]));
        state.submit("second").unwrap();
        state.complete(Err(SearchError::Network("boom".into())));

        assert_eq!(state.submit("  Beyonce  ").as_deref(), Ok("Beyonce"));
        assert!(state.is_loading());
        assert!(state.has_searched());
        assert!(state.results().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn second_submission_is_refused_while_loading() {
        let mut state = SearchState::new();
        state.submit("one").unwrap();

        assert_eq!(state.submit("two"), Err(SearchError::InFlight));
        assert_eq!(state.submit("   "), Err(SearchError::InFlight));
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn success_publishes_results_in_order() {
        let mut state = SearchState::new();
        state.submit("x").unwrap();

        let published: Vec<u64> = state
            .complete(Ok(vec![result(3), result(1), result(2)]))
            .iter()
            .map(|r| r.track_id)
            .collect();

        assert_eq!(published, vec![3, 1, 2]);
        assert!(!state.is_loading());
        assert!(!state.show_no_results());
    }

    #[test]
    fn empty_success_is_not_an_error() {
        let mut state = SearchState::new();
        state.submit("zzzz").unwrap();
        state.complete(Ok(vec![]));

        assert!(state.error().is_none());
        assert!(state.show_no_results());
    }

    #[test]
    fn failure_clears_results_and_sets_one_error() {
        let mut state = SearchState::new();
        state.submit("x").unwrap();
        state.complete(Err(SearchError::Network(
            "Error al conectar con la API de iTunes".into(),
        )));

        assert!(state.results().is_empty());
        assert!(!state.is_loading());
        assert!(!state.show_no_results());
        assert_eq!(
            state.error(),
            Some(&SearchError::Network(
                "Error al conectar con la API de iTunes".into()
            ))
        );

        assert!(state.dismiss_error());
        assert!(!state.dismiss_error());
        assert!(state.show_no_results());
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut state = SearchState::new();
        state.complete(Ok(vec![result(1)]));

        assert!(state.results().is_empty());
        assert!(!state.has_searched());
    }

    #[test]
    fn input_is_read_only_while_loading() {
        let mut state = SearchState::new();
        state.push_char('a');
        state.insert_str("bc\n");
        assert_eq!(state.input(), "abc");

        state.submit_input().unwrap();
        state.push_char('d');
        state.pop_char();
        state.clear_input();
        assert_eq!(state.input(), "abc");

        state.complete(Ok(vec![]));
        state.clear_input();
        assert_eq!(state.input(), "");
    }
}
