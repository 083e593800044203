use crate::api::FetchRequest;
use crate::error::Result;
use crate::models::{Article, Category, SECONDARY_LIMIT, TRENDING_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Search,
    Headlines,
}

impl View {
    pub fn toggle(&self) -> Self {
        match self {
            View::Search => View::Headlines,
            View::Headlines => View::Search,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Search => "Search",
            View::Headlines => "Headlines",
        }
    }
}

/// Single component behind both views. Holds the article list and the
/// loading flag; the render output is a pure function of these fields.
#[derive(Debug)]
pub struct App {
    pub view: View,
    pub articles: Vec<Article>,
    pub loading: bool,
    /// Search box contents.
    pub query: String,
    /// Last selected category. Stays marked after a free-text search even
    /// though the fetch uses the text.
    pub category: Option<Category>,
    pub selected: usize,
    pub input_mode: bool,
    pub status: String,
    default_query: String,
    country: String,
    generation: u64,
}

impl App {
    pub fn new(default_query: String, country: String) -> Self {
        Self {
            view: View::Search,
            articles: vec![],
            loading: false,
            query: default_query.clone(),
            category: None,
            selected: 0,
            input_mode: false,
            status: "Tab:view  /:search  1-5:category  r:refresh  o:open  q:quit".to_string(),
            default_query,
            country,
            generation: 0,
        }
    }

    /// Effective search query: submitted term if non-empty, else the
    /// selected category, else the configured default.
    pub fn search_query(&self, term: Option<&str>) -> String {
        term.map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| self.category.map(|c| c.query().to_string()))
            .unwrap_or_else(|| self.default_query.clone())
    }

    /// Request for the current view. `term` is a free-text override; None
    /// means "whatever is active" (used on startup, refresh, view switch).
    pub fn request(&self, term: Option<&str>) -> FetchRequest {
        match self.view {
            View::Search => FetchRequest::Search {
                query: self.search_query(term),
            },
            View::Headlines => FetchRequest::TopHeadlines {
                country: self.country.clone(),
            },
        }
    }

    /// Start a fetch: raises the loading flag and returns the generation
    /// tag the response must carry to be applied.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a fetch result. Responses from a superseded fetch are dropped
    /// so the latest request always wins. Failures end the loading state
    /// and leave the article list untouched.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<Vec<Article>>) {
        if generation != self.generation {
            tracing::debug!(
                "dropping stale response (generation {generation}, current {})",
                self.generation
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(articles) => {
                self.selected = 0;
                self.status = format!("Loaded {} articles", articles.len());
                self.articles = articles;
            }
            Err(e) => {
                tracing::error!("news fetch failed: {e}");
            }
        }
    }

    pub fn select_category(&mut self, category: Category) -> FetchRequest {
        self.category = Some(category);
        FetchRequest::Search {
            query: category.query().to_string(),
        }
    }

    pub fn start_search(&mut self) {
        self.input_mode = true;
    }

    pub fn cancel_search(&mut self) {
        self.input_mode = false;
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.query.pop();
    }

    /// Submit the search box contents. An empty box falls back through the
    /// category/default chain.
    pub fn submit_search(&mut self) -> FetchRequest {
        self.input_mode = false;
        let term = self.query.clone();
        FetchRequest::Search {
            query: self.search_query(Some(&term)),
        }
    }

    pub fn switch_view(&mut self) -> FetchRequest {
        self.view = self.view.toggle();
        self.selected = 0;
        self.request(None)
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }

    /// Number of navigable entries in the current view. The headlines view
    /// caps at the display window; everything past it is discarded.
    fn visible_len(&self) -> usize {
        match self.view {
            View::Search => self.articles.len(),
            View::Headlines => self.articles.len().min(1 + SECONDARY_LIMIT + TRENDING_LIMIT),
        }
    }

    pub fn move_down(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_article;

    fn app() -> App {
        App::new("technology".to_string(), "us".to_string())
    }

    fn ok_articles(n: usize) -> Result<Vec<Article>> {
        Ok((0..n).map(|i| sample_article(&format!("a{i}"))).collect())
    }

    fn fetch_error() -> Result<Vec<Article>> {
        Err(anyhow::anyhow!("boom").into())
    }

    // ==================== Query precedence ====================

    #[test]
    fn test_default_query_on_startup() {
        let app = app();
        assert_eq!(
            app.request(None),
            FetchRequest::Search {
                query: "technology".to_string()
            }
        );
    }

    #[test]
    fn test_category_overrides_default() {
        let mut app = app();
        let request = app.select_category(Category::Sports);

        assert_eq!(
            request,
            FetchRequest::Search {
                query: "sports".to_string()
            }
        );
        // Subsequent parameterless fetches keep using the category
        assert_eq!(app.search_query(None), "sports");
    }

    #[test]
    fn test_free_text_overrides_category() {
        // Select Sports, then submit "elections": the fetch uses the text
        let mut app = app();
        app.select_category(Category::Sports);
        app.query = "elections".to_string();

        let request = app.submit_search();

        assert_eq!(
            request,
            FetchRequest::Search {
                query: "elections".to_string()
            }
        );
        // The category stays marked; only the fetch moved on
        assert_eq!(app.category, Some(Category::Sports));
    }

    #[test]
    fn test_empty_submission_falls_back_to_category() {
        let mut app = app();
        app.select_category(Category::Health);
        app.query = "   ".to_string();

        assert_eq!(
            app.submit_search(),
            FetchRequest::Search {
                query: "health".to_string()
            }
        );
    }

    #[test]
    fn test_empty_submission_without_category_uses_default() {
        let mut app = app();
        app.query.clear();

        assert_eq!(
            app.submit_search(),
            FetchRequest::Search {
                query: "technology".to_string()
            }
        );
    }

    #[test]
    fn test_headlines_view_ignores_query_state() {
        let mut app = app();
        app.select_category(Category::Business);
        app.view = View::Headlines;

        assert_eq!(
            app.request(Some("ignored")),
            FetchRequest::TopHeadlines {
                country: "us".to_string()
            }
        );
    }

    // ==================== Fetch lifecycle ====================

    #[test]
    fn test_successful_fetch_replaces_articles_wholesale() {
        let mut app = app();
        let gen = app.begin_fetch();
        assert!(app.loading);

        app.finish_fetch(gen, ok_articles(3));

        assert!(!app.loading);
        assert_eq!(app.articles.len(), 3);
        assert_eq!(app.selected, 0);

        let gen = app.begin_fetch();
        app.finish_fetch(gen, ok_articles(1));
        assert_eq!(app.articles.len(), 1);
    }

    #[test]
    fn test_failure_ends_loading_and_keeps_articles() {
        let mut app = app();
        let gen = app.begin_fetch();
        app.finish_fetch(gen, ok_articles(5));

        let gen = app.begin_fetch();
        app.finish_fetch(gen, fetch_error());

        assert!(!app.loading);
        assert_eq!(app.articles.len(), 5);
    }

    #[test]
    fn test_failure_on_first_fetch_leaves_list_empty() {
        let mut app = app();
        let gen = app.begin_fetch();
        app.finish_fetch(gen, fetch_error());

        assert!(!app.loading);
        assert!(app.articles.is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut app = app();
        let first = app.begin_fetch();
        let second = app.begin_fetch();

        // The superseded response must not end the newer fetch's loading
        // state or overwrite its result
        app.finish_fetch(first, ok_articles(9));
        assert!(app.loading);
        assert!(app.articles.is_empty());

        app.finish_fetch(second, ok_articles(2));
        assert!(!app.loading);
        assert_eq!(app.articles.len(), 2);
    }

    #[test]
    fn test_stale_failure_is_also_dropped() {
        let mut app = app();
        let first = app.begin_fetch();
        let second = app.begin_fetch();

        app.finish_fetch(first, fetch_error());
        assert!(app.loading);

        app.finish_fetch(second, ok_articles(1));
        assert_eq!(app.articles.len(), 1);
    }

    // ==================== Navigation ====================

    #[test]
    fn test_selection_clamps_to_list() {
        let mut app = app();
        let gen = app.begin_fetch();
        app.finish_fetch(gen, ok_articles(2));

        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected, 1);

        app.move_up();
        app.move_up();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_selection_on_empty_list_is_inert() {
        let mut app = app();
        app.move_down();
        app.move_up();
        assert_eq!(app.selected, 0);
        assert!(app.selected_article().is_none());
    }

    #[test]
    fn test_headlines_navigation_caps_at_display_window() {
        let mut app = app();
        app.view = View::Headlines;
        let gen = app.begin_fetch();
        app.finish_fetch(gen, ok_articles(20));

        for _ in 0..30 {
            app.move_down();
        }
        assert_eq!(app.selected, 14);
    }

    #[test]
    fn test_switch_view_builds_fresh_request() {
        let mut app = app();
        assert_eq!(
            app.switch_view(),
            FetchRequest::TopHeadlines {
                country: "us".to_string()
            }
        );
        assert_eq!(app.view, View::Headlines);

        assert_eq!(
            app.switch_view(),
            FetchRequest::Search {
                query: "technology".to_string()
            }
        );
    }

    // ==================== Search box editing ====================

    #[test]
    fn test_search_box_editing() {
        let mut app = app();
        app.start_search();
        assert!(app.input_mode);

        app.clear_search();
        app.push_search_char('a');
        app.push_search_char('b');
        app.pop_search_char();
        assert_eq!(app.query, "a");

        app.cancel_search();
        assert!(!app.input_mode);
        // Cancel keeps the typed text
        assert_eq!(app.query, "a");
    }
}
