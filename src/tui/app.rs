use std::time::{Duration, Instant};

use crate::content::{Category, CtaLink, CATEGORIES};
use crate::scoring::{Rating, Scorer, CATEGORY_COUNT};
use crate::tui::theme::ThemeColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Scorecard,
    Insights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

pub struct App {
    pub scorer: Scorer,
    /// Index of the highlighted category
    pub selected: usize,
    pub current_view: View,
    pub input_mode: InputMode,
    pub insights_scroll: u16,
    /// Furthest the Insights view can scroll; set by the renderer
    pub insights_max_scroll: u16,
    pub flash_message: Option<(String, Instant)>,
    pub flash_duration: Duration,
    pub should_quit: bool,
    pub theme: ThemeColors,
}

impl App {
    pub fn new(theme: ThemeColors, flash_duration: Duration) -> Self {
        Self {
            scorer: Scorer::new(),
            selected: 0,
            current_view: View::Scorecard,
            input_mode: InputMode::Normal,
            insights_scroll: 0,
            insights_max_scroll: 0,
            flash_message: None,
            flash_duration,
            should_quit: false,
            theme,
        }
    }

    pub fn selected_category(&self) -> &'static Category {
        &CATEGORIES[self.selected]
    }

    pub fn selected_rating(&self) -> Option<Rating> {
        self.scorer.score(self.selected)
    }

    pub fn next_category(&mut self) {
        self.selected = (self.selected + 1) % CATEGORY_COUNT;
    }

    pub fn previous_category(&mut self) {
        self.selected = (self.selected + CATEGORY_COUNT - 1) % CATEGORY_COUNT;
    }

    /// Set the highlighted category's rating from a score button
    pub fn rate_selected(&mut self, rating: Rating) {
        self.scorer.set_score(self.selected, rating);
    }

    /// Step the highlighted rating up; an unanswered category starts at 1
    pub fn raise_selected(&mut self) {
        let next = match self.selected_rating() {
            Some(rating) => rating.raised(),
            None => Rating::LOWEST,
        };
        self.scorer.set_score(self.selected, next);
    }

    /// Step the highlighted rating down; unanswered categories stay unanswered
    pub fn lower_selected(&mut self) {
        if let Some(rating) = self.selected_rating() {
            self.scorer.set_score(self.selected, rating.lowered());
        }
    }

    pub fn toggle_view(&mut self) {
        self.current_view = match self.current_view {
            View::Scorecard => View::Insights,
            View::Insights => View::Scorecard,
        };
    }

    pub fn scroll_down(&mut self) {
        if self.insights_scroll < self.insights_max_scroll {
            self.insights_scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.insights_scroll = self.insights_scroll.saturating_sub(1);
    }

    /// Record how far the Insights content can scroll at the current size
    pub fn set_insights_max_scroll(&mut self, max: u16) {
        self.insights_max_scroll = max;
        self.insights_scroll = self.insights_scroll.min(max);
    }

    /// Open a call-to-action link and report the outcome in the status bar
    pub fn open_link(&mut self, link: CtaLink) {
        match crate::browser::open_link(link) {
            Ok(()) => self.show_flash(format!("Opened: {}", link.label())),
            Err(e) => {
                crate::log_warn!("{:#}", e);
                self.show_flash(format!("Failed to open browser: {}", e));
            }
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed() >= self.flash_duration {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::TierLevel;

    fn app() -> App {
        App::new(ThemeColors::dark(), Duration::from_secs(3))
    }

    fn rating(value: u8) -> Rating {
        Rating::new(value).unwrap()
    }

    #[test]
    fn test_new_app_starts_empty() {
        let app = app();
        assert_eq!(app.selected, 0);
        assert_eq!(app.scorer.total_score(), 0);
        assert!(app.scorer.risk_tier().is_none());
        assert_eq!(app.current_view, View::Scorecard);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = app();
        app.previous_category();
        assert_eq!(app.selected, CATEGORY_COUNT - 1);
        app.next_category();
        assert_eq!(app.selected, 0);
        app.next_category();
        assert_eq!(app.selected_category().title, "Proposals & PPTs");
    }

    #[test]
    fn test_rate_selected_overwrites() {
        let mut app = app();
        app.rate_selected(rating(3));
        app.rate_selected(rating(5));
        assert_eq!(app.scorer.total_score(), 5);
    }

    #[test]
    fn test_raise_and_lower() {
        let mut app = app();
        app.lower_selected();
        assert_eq!(app.selected_rating(), None);

        app.raise_selected();
        assert_eq!(app.selected_rating().map(Rating::value), Some(1));

        for _ in 0..10 {
            app.raise_selected();
        }
        assert_eq!(app.selected_rating().map(Rating::value), Some(5));

        app.lower_selected();
        assert_eq!(app.selected_rating().map(Rating::value), Some(4));
    }

    #[test]
    fn test_three_to_five_crosses_tier() {
        let mut app = app();
        for value in [3, 3, 3, 3, 3, 4] {
            app.rate_selected(rating(value));
            app.next_category();
        }
        assert_eq!(app.scorer.total_score(), 19);
        assert_eq!(app.scorer.risk_tier().unwrap().level, TierLevel::EfficiencyTrap);

        assert_eq!(app.selected, 0);
        app.rate_selected(rating(5));
        assert_eq!(app.scorer.total_score(), 21);
        assert_eq!(app.scorer.risk_tier().unwrap().level, TierLevel::AiFirstLeader);
    }

    #[test]
    fn test_flash_expires() {
        let mut app = App::new(ThemeColors::dark(), Duration::ZERO);
        app.show_flash("hello".to_string());
        app.update_flash();
        assert!(app.flash_message.is_none());
    }

    #[test]
    fn test_toggle_view_and_scroll() {
        let mut app = app();
        app.toggle_view();
        assert_eq!(app.current_view, View::Insights);
        app.set_insights_max_scroll(10);
        app.scroll_up();
        assert_eq!(app.insights_scroll, 0);
        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.insights_scroll, 2);
        app.toggle_view();
        assert_eq!(app.current_view, View::Scorecard);
    }

    #[test]
    fn test_scroll_stops_at_content_end() {
        let mut app = app();
        app.set_insights_max_scroll(2);
        for _ in 0..5 {
            app.scroll_down();
        }
        assert_eq!(app.insights_scroll, 2);

        // A taller viewport pulls the offset back
        app.set_insights_max_scroll(1);
        assert_eq!(app.insights_scroll, 1);
        app.set_insights_max_scroll(0);
        app.scroll_down();
        assert_eq!(app.insights_scroll, 0);
    }
}
