//! The screen controller: owns the menu state and drives the surface.
//!
//! State changes flow through exactly two operations. [`MenuScreen::apply`]
//! installs the outcome of the one load the board performs, and
//! [`MenuScreen::select_day`] reacts to a day selection by rebuilding the
//! meal panel. Both rebuild their regions wholesale; nothing is diffed.

use crate::clock::{Clock, last_updated_stamp};
use crate::document::MenuDocument;
use crate::loader::LoadError;
use crate::order::{format_meal_name, order_days, order_meals};
use crate::view::{DayControl, MealCard, MenuSurface, TextRegion, Toggle};

pub const ERROR_TITLE: &str = "Could not load menu";
pub const ERROR_SUBTITLE: &str =
    "Make sure the menu JSON is reachable and follows the expected structure.";
pub const NO_DAY_TITLE: &str = "No day selected";
pub const NO_DAY_SUBTITLE: &str = "Pick a day from the selector.";
pub const NO_ITEMS_NOTE: &str = "No items listed for this meal.";

const HINT_TODAY: &str = "Today";
const HINT_VIEW: &str = "Tap to view menu";
const TIME_FALLBACK: &str = "Time: N/A";
const STATUS_LOADING: &str = "Loading menu…";
const STATUS_ERROR: &str = "Error loading data";

pub struct MenuScreen<S, C> {
    surface: S,
    clock: C,
    document: MenuDocument,
    active_day: Option<String>,
    loaded: bool,
}

impl<S: MenuSurface, C: Clock> MenuScreen<S, C> {
    pub fn new(surface: S, clock: C) -> Self {
        Self {
            surface,
            clock,
            document: MenuDocument::default(),
            active_day: None,
            loaded: false,
        }
    }

    /// Puts the surface into its pre-load shape: today's name, a loading
    /// status line, both empty states showing, error and badge hidden.
    pub fn boot(&mut self) {
        let today = self.clock.today_name();
        self.surface.set_text(TextRegion::CurrentDay, today);
        self.surface.set_text(TextRegion::DataStatus, STATUS_LOADING);
        self.surface.set_visible(Toggle::DaySelectorEmpty, true);
        self.surface.set_visible(Toggle::MealPanelEmpty, true);
        self.surface.set_visible(Toggle::TodayBadge, false);
        self.surface.set_visible(Toggle::ErrorMessage, false);
    }

    /// Installs the outcome of the load. A failed load, and a document with
    /// no days at all, both land in the error state; a usable document
    /// renders the selector, picks the initial day, and fills the panel.
    pub fn apply(&mut self, outcome: Result<MenuDocument, LoadError>, label: &str) {
        let document = match outcome {
            Ok(document) => document,
            Err(err) => {
                tracing::error!(url = label, error = ?err, "menu load failed");
                self.show_error(&format!("Could not load menu from {label}."));
                return;
            }
        };

        self.document = document;
        if self.document.is_empty() {
            tracing::warn!(url = label, "menu loaded without any days");
            self.show_error("Menu loaded, but no days were found.");
            return;
        }

        self.loaded = true;
        self.render_day_selector();
        self.active_day = self.initial_day();
        self.render_meal_panel();

        self.surface
            .set_text(TextRegion::DataStatus, &format!("Loaded: {label}"));
        self.surface.set_text(
            TextRegion::LastUpdated,
            &format!("Updated: {}", last_updated_stamp(self.clock.now())),
        );
        self.surface.set_visible(Toggle::DaySelectorEmpty, false);
        self.surface.set_visible(Toggle::MealPanelEmpty, false);
    }

    /// Makes `day` the active day and rebuilds the meal panel. The selector
    /// list itself is untouched apart from the active marker.
    pub fn select_day(&mut self, day: &str) {
        self.active_day = Some(day.to_owned());
        self.render_meal_panel();
    }

    /// Whether a document with at least one day has been installed.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn active_day(&self) -> Option<&str> {
        self.active_day.as_deref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Today when the document lists it, else the earliest available day in
    /// canonical week order.
    fn initial_day(&self) -> Option<String> {
        let today = self.clock.today_name();
        if self.document.contains_day(today) {
            return Some(today.to_owned());
        }
        order_days(self.document.day_names()).into_iter().next()
    }

    fn render_day_selector(&mut self) {
        let today = self.clock.today_name();
        let days = order_days(self.document.day_names());

        let has_today = days.iter().any(|day| day == today);
        self.surface.set_visible(Toggle::TodayBadge, has_today);
        if has_today {
            self.surface
                .set_text(TextRegion::TodayText, &format!("Today: {today}"));
        }

        self.surface.clear_days();
        for day in days {
            let hint = if day == today { HINT_TODAY } else { HINT_VIEW };
            self.surface.push_day(DayControl {
                hint: hint.to_owned(),
                day,
                active: false,
            });
        }
    }

    fn render_meal_panel(&mut self) {
        let today = self.clock.today_name();
        self.surface.set_text(TextRegion::CurrentDay, today);

        let active = self.active_day.clone();
        let menu = active.as_deref().and_then(|day| self.document.menu_for(day));
        let (Some(day), Some(menu)) = (active.as_deref(), menu) else {
            self.surface.set_text(TextRegion::MealsTitle, NO_DAY_TITLE);
            self.surface.set_text(TextRegion::MealsSubtitle, NO_DAY_SUBTITLE);
            self.surface.clear_meals();
            self.surface.set_visible(Toggle::MealPanelEmpty, true);
            self.surface.mark_active_day(None);
            return;
        };

        self.surface
            .set_text(TextRegion::MealsTitle, &format!("{day} Menu"));
        self.surface.set_text(
            TextRegion::MealsSubtitle,
            &format!("Complete meal plan for {day}."),
        );
        self.surface.clear_meals();
        self.surface.set_visible(Toggle::ErrorMessage, false);
        self.surface.set_visible(Toggle::MealPanelEmpty, false);

        for meal in order_meals(menu.meal_names()) {
            let Some(entry) = menu.entry(&meal) else {
                continue;
            };
            self.surface.push_meal(MealCard {
                name: format_meal_name(&meal),
                time_tag: entry
                    .time
                    .clone()
                    .unwrap_or_else(|| TIME_FALLBACK.to_owned()),
                items: entry.items.clone(),
                empty_note: entry.items.is_empty().then(|| NO_ITEMS_NOTE.to_owned()),
            });
        }

        self.surface.mark_active_day(Some(day));
    }

    fn show_error(&mut self, message: &str) {
        self.surface.set_text(TextRegion::ErrorMessage, message);
        self.surface.set_visible(Toggle::ErrorMessage, true);
        self.surface.set_text(TextRegion::MealsTitle, ERROR_TITLE);
        self.surface.set_text(TextRegion::MealsSubtitle, ERROR_SUBTITLE);
        self.surface.set_text(TextRegion::DataStatus, STATUS_ERROR);
        self.surface.clear_meals();
        self.surface.clear_days();
        self.surface
            .set_text(TextRegion::CurrentDay, self.clock.today_name());
        self.surface.set_visible(Toggle::DaySelectorEmpty, true);
        self.surface.set_visible(Toggle::MealPanelEmpty, true);
        self.surface.set_visible(Toggle::TodayBadge, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::loader::parse_document;
    use crate::view::PageModel;
    use time::macros::datetime;

    // 2025-12-01 was a Monday.
    fn monday_clock() -> FixedClock {
        FixedClock(datetime!(2025-12-01 12:00 UTC))
    }

    // 2025-12-06 was a Saturday.
    fn saturday_clock() -> FixedClock {
        FixedClock(datetime!(2025-12-06 12:00 UTC))
    }

    fn screen_with(clock: FixedClock) -> MenuScreen<PageModel, FixedClock> {
        let mut screen = MenuScreen::new(PageModel::default(), clock);
        screen.boot();
        screen
    }

    fn monday_lunch() -> MenuDocument {
        parse_document(
            br#"{"Monday": {"LUNCH": {"time": "1PM", "items": ["Rice"]}}}"#,
            "menu.json",
        )
        .unwrap()
    }

    #[test]
    fn boot_sets_today_and_loading_status() {
        let screen = screen_with(monday_clock());
        let page = screen.surface();

        assert_eq!(page.current_day, "Monday");
        assert_eq!(page.data_status, "Loading menu…");
        assert!(page.day_selector_empty);
        assert!(page.meal_panel_empty);
        assert!(!page.error_visible);
        assert!(!page.today_badge);
    }

    #[test]
    fn load_with_today_present_activates_today() {
        let mut screen = screen_with(monday_clock());
        screen.apply(Ok(monday_lunch()), "menu.json");

        let page = screen.surface();
        assert_eq!(page.active_day(), Some("Monday"));
        assert_eq!(page.meals_title, "Monday Menu");
        assert_eq!(page.meal_cards.len(), 1);

        let card = &page.meal_cards[0];
        assert_eq!(card.name, "Lunch");
        assert_eq!(card.time_tag, "1PM");
        assert_eq!(card.items, vec!["Rice"]);
        assert_eq!(card.empty_note, None);

        assert!(page.today_badge);
        assert_eq!(page.today_text, "Today: Monday");
        assert_eq!(page.data_status, "Loaded: menu.json");
        assert!(page.last_updated.starts_with("Updated: Dec 1, 2025"));
        assert!(!page.day_selector_empty);
        assert!(!page.meal_panel_empty);
    }

    #[test]
    fn load_without_today_falls_back_to_earliest_canonical_day() {
        let mut screen = screen_with(saturday_clock());
        screen.apply(Ok(monday_lunch()), "menu.json");

        let page = screen.surface();
        assert_eq!(page.active_day(), Some("Monday"));
        assert!(!page.today_badge);
        assert_eq!(page.day_controls[0].hint, "Tap to view menu");
    }

    #[test]
    fn selector_lists_days_in_week_order_with_today_hint() {
        let document = parse_document(
            br#"{"Sunday": {}, "Monday": {}, "Zday": {}}"#,
            "menu.json",
        )
        .unwrap();

        let mut screen = screen_with(monday_clock());
        screen.apply(Ok(document), "menu.json");

        let page = screen.surface();
        let days: Vec<&str> = page.day_controls.iter().map(|c| c.day.as_str()).collect();
        assert_eq!(days, vec!["Monday", "Sunday", "Zday"]);
        assert_eq!(page.day_controls[0].hint, "Today");
        assert_eq!(page.day_controls[1].hint, "Tap to view menu");
    }

    #[test]
    fn empty_document_enters_the_no_days_error_state() {
        let mut screen = screen_with(monday_clock());
        screen.apply(Ok(parse_document(b"{}", "menu.json").unwrap()), "menu.json");

        let page = screen.surface();
        assert!(!screen.loaded());
        assert!(page.error_visible);
        assert_eq!(page.error_message, "Menu loaded, but no days were found.");
        assert_eq!(page.meals_title, ERROR_TITLE);
        assert_eq!(page.data_status, "Error loading data");
        assert!(page.day_controls.is_empty());
        assert!(page.meal_cards.is_empty());
    }

    #[test]
    fn failed_load_shows_the_error_state_with_the_url() {
        let mut screen = screen_with(monday_clock());
        let err = LoadError::Status {
            url: "http://mess/menu.json".to_owned(),
            status: 500,
        };
        screen.apply(Err(err), "http://mess/menu.json");

        let page = screen.surface();
        assert!(page.error_visible);
        assert_eq!(
            page.error_message,
            "Could not load menu from http://mess/menu.json."
        );
        assert_eq!(page.current_day, "Monday");
        assert!(!page.today_badge);
        assert!(page.day_selector_empty);
        assert!(page.meal_panel_empty);
    }

    #[test]
    fn missing_items_render_the_placeholder_note() {
        let document = parse_document(
            br#"{"Monday": {"BREAKFAST": {"time": "8AM"}}}"#,
            "menu.json",
        )
        .unwrap();

        let mut screen = screen_with(monday_clock());
        screen.apply(Ok(document), "menu.json");

        let card = &screen.surface().meal_cards[0];
        assert!(card.items.is_empty());
        assert_eq!(card.empty_note.as_deref(), Some(NO_ITEMS_NOTE));
    }

    #[test]
    fn meal_cards_follow_canonical_meal_order() {
        let document = parse_document(
            br#"{"Monday": {
                "DINNER": {"time": "8PM", "items": ["Dal"]},
                "BREAKFAST": {"time": "8AM", "items": ["Poha"]},
                "HIGH TEA": {"items": ["Biscuits"]},
                "LUNCH": {"time": "1PM", "items": ["Rice"]}
            }}"#,
            "menu.json",
        )
        .unwrap();

        let mut screen = screen_with(monday_clock());
        screen.apply(Ok(document), "menu.json");

        let names: Vec<&str> = screen
            .surface()
            .meal_cards
            .iter()
            .map(|card| card.name.as_str())
            .collect();
        assert_eq!(names, vec!["Breakfast", "Lunch", "Dinner", "High Tea"]);
    }

    #[test]
    fn selecting_a_day_moves_the_active_marker_and_rebuilds_only_the_panel() {
        let document = parse_document(
            br#"{
                "Monday": {"LUNCH": {"time": "1PM", "items": ["Rice"]}},
                "Tuesday": {"DINNER": {"time": "8PM", "items": ["Dal"]}}
            }"#,
            "menu.json",
        )
        .unwrap();

        let mut screen = screen_with(monday_clock());
        screen.apply(Ok(document), "menu.json");
        let controls_before = screen.surface().day_controls.clone();

        screen.select_day("Tuesday");

        let page = screen.surface();
        assert_eq!(page.active_day(), Some("Tuesday"));
        assert_eq!(
            page.day_controls.iter().filter(|c| c.active).count(),
            1,
            "exactly one control is active"
        );
        assert_eq!(page.meals_title, "Tuesday Menu");
        assert_eq!(page.meal_cards[0].name, "Dinner");

        // Same controls in the same order; only the active marker moved.
        let stripped: Vec<(&str, &str)> = page
            .day_controls
            .iter()
            .map(|c| (c.day.as_str(), c.hint.as_str()))
            .collect();
        let stripped_before: Vec<(&str, &str)> = controls_before
            .iter()
            .map(|c| (c.day.as_str(), c.hint.as_str()))
            .collect();
        assert_eq!(stripped, stripped_before);
    }

    #[test]
    fn selecting_a_day_without_a_usable_menu_shows_the_placeholder_panel() {
        let document = parse_document(
            br#"{"Monday": {"LUNCH": {"items": ["Rice"]}}, "Tuesday": null}"#,
            "menu.json",
        )
        .unwrap();

        let mut screen = screen_with(monday_clock());
        screen.apply(Ok(document), "menu.json");
        screen.select_day("Tuesday");

        let page = screen.surface();
        assert_eq!(page.meals_title, NO_DAY_TITLE);
        assert!(page.meal_cards.is_empty());
        assert!(page.meal_panel_empty);
        assert_eq!(page.active_day(), None);
    }
}
