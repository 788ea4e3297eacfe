//! Display-surface abstraction the renderer writes into.
//!
//! The board only ever needs a handful of operations against named regions:
//! set text, toggle visibility, and rebuild the two element lists (day
//! controls and meal cards). Anything that can do that can host the board;
//! [`PageModel`] is the plain-value implementation used by the HTML
//! template, the terminal printer, and tests alike.

/// Regions carrying a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRegion {
    MealsTitle,
    MealsSubtitle,
    ErrorMessage,
    CurrentDay,
    DataStatus,
    LastUpdated,
    TodayText,
}

/// Regions that are shown or hidden as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    DaySelectorEmpty,
    MealPanelEmpty,
    ErrorMessage,
    TodayBadge,
}

/// One selectable control in the day list.
#[derive(Debug, Clone, PartialEq)]
pub struct DayControl {
    pub day: String,
    pub hint: String,
    pub active: bool,
}

/// One rendered meal card.
#[derive(Debug, Clone, PartialEq)]
pub struct MealCard {
    pub name: String,
    pub time_tag: String,
    pub items: Vec<String>,
    pub empty_note: Option<String>,
}

pub trait MenuSurface {
    fn set_text(&mut self, region: TextRegion, text: &str);
    fn set_visible(&mut self, region: Toggle, visible: bool);
    fn clear_days(&mut self);
    fn push_day(&mut self, control: DayControl);
    /// Marks the control for `day` active and every other control inactive.
    fn mark_active_day(&mut self, day: Option<&str>);
    fn clear_meals(&mut self);
    fn push_meal(&mut self, card: MealCard);
}

/// Value-level surface recording everything the renderer wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageModel {
    pub meals_title: String,
    pub meals_subtitle: String,
    pub error_message: String,
    pub current_day: String,
    pub data_status: String,
    pub last_updated: String,
    pub today_text: String,
    pub day_selector_empty: bool,
    pub meal_panel_empty: bool,
    pub error_visible: bool,
    pub today_badge: bool,
    pub day_controls: Vec<DayControl>,
    pub meal_cards: Vec<MealCard>,
}

impl PageModel {
    pub fn active_day(&self) -> Option<&str> {
        self.day_controls
            .iter()
            .find(|control| control.active)
            .map(|control| control.day.as_str())
    }
}

impl MenuSurface for PageModel {
    fn set_text(&mut self, region: TextRegion, text: &str) {
        let slot = match region {
            TextRegion::MealsTitle => &mut self.meals_title,
            TextRegion::MealsSubtitle => &mut self.meals_subtitle,
            TextRegion::ErrorMessage => &mut self.error_message,
            TextRegion::CurrentDay => &mut self.current_day,
            TextRegion::DataStatus => &mut self.data_status,
            TextRegion::LastUpdated => &mut self.last_updated,
            TextRegion::TodayText => &mut self.today_text,
        };
        slot.clear();
        slot.push_str(text);
    }

    fn set_visible(&mut self, region: Toggle, visible: bool) {
        let slot = match region {
            Toggle::DaySelectorEmpty => &mut self.day_selector_empty,
            Toggle::MealPanelEmpty => &mut self.meal_panel_empty,
            Toggle::ErrorMessage => &mut self.error_visible,
            Toggle::TodayBadge => &mut self.today_badge,
        };
        *slot = visible;
    }

    fn clear_days(&mut self) {
        self.day_controls.clear();
    }

    fn push_day(&mut self, control: DayControl) {
        self.day_controls.push(control);
    }

    fn mark_active_day(&mut self, day: Option<&str>) {
        for control in &mut self.day_controls {
            control.active = day == Some(control.day.as_str());
        }
    }

    fn clear_meals(&mut self) {
        self.meal_cards.clear();
    }

    fn push_meal(&mut self, card: MealCard) {
        self.meal_cards.push(card);
    }
}
