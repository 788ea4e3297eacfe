//! The parsed menu document: days mapped to meals mapped to entries.
//!
//! Conversion from JSON is deliberately lenient. Menu documents are authored
//! by hand and the board degrades instead of rejecting them: a day whose
//! value is unusable stays selectable but has no menu, falsy meal entries
//! vanish, and a missing or malformed item list reads as "nothing listed".

use std::collections::BTreeMap;

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuDocument {
    days: BTreeMap<String, Option<DayMenu>>,
}

impl MenuDocument {
    /// Builds a document from parsed JSON. Returns `None` when the top-level
    /// value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(days) = value else {
            return None;
        };

        let days = days
            .into_iter()
            .map(|(name, value)| (name, DayMenu::from_value(value)))
            .collect();

        Some(Self { days })
    }

    /// Every top-level key, usable menu or not.
    pub fn day_names(&self) -> Vec<String> {
        self.days.keys().cloned().collect()
    }

    pub fn contains_day(&self, name: &str) -> bool {
        self.days.contains_key(name)
    }

    /// The usable menu for a day, if the day carries one.
    pub fn menu_for(&self, name: &str) -> Option<&DayMenu> {
        self.days.get(name).and_then(|menu| menu.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayMenu {
    meals: BTreeMap<String, MealEntry>,
}

impl DayMenu {
    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(meals) = value else {
            return None;
        };

        let meals = meals
            .into_iter()
            .filter_map(|(name, value)| MealEntry::from_value(value).map(|entry| (name, entry)))
            .collect();

        Some(Self { meals })
    }

    /// Meal-type names as stored in the document, unordered.
    pub fn meal_names(&self) -> Vec<String> {
        self.meals.keys().cloned().collect()
    }

    pub fn entry(&self, name: &str) -> Option<&MealEntry> {
        self.meals.get(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealEntry {
    pub time: Option<String>,
    pub items: Vec<String>,
}

impl MealEntry {
    /// Falsy values disappear from the day; truthy non-objects degrade to an
    /// entry with no time and nothing listed.
    fn from_value(value: Value) -> Option<Self> {
        if is_falsy(&value) {
            return None;
        }

        let Value::Object(entry) = value else {
            return Some(Self::default());
        };

        let time = match entry.get("time") {
            Some(Value::String(time)) if !time.is_empty() => Some(time.clone()),
            _ => None,
        };

        let items = match entry.get("items") {
            Some(Value::Array(items)) => items.iter().filter_map(item_text).collect(),
            _ => Vec::new(),
        };

        Some(Self { time, items })
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(truthy) => !truthy,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn item_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(truthy) => Some(truthy.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_values_that_are_not_objects() {
        assert!(MenuDocument::from_value(json!(null)).is_none());
        assert!(MenuDocument::from_value(json!(42)).is_none());
        assert!(MenuDocument::from_value(json!(["Monday"])).is_none());
        assert!(MenuDocument::from_value(json!({})).is_some());
    }

    #[test]
    fn keeps_every_day_key_but_only_usable_menus() {
        let document = MenuDocument::from_value(json!({
            "Monday": { "LUNCH": { "time": "1PM", "items": ["Rice"] } },
            "Tuesday": null,
            "Wednesday": "closed",
        }))
        .unwrap();

        assert_eq!(document.day_names(), vec!["Monday", "Tuesday", "Wednesday"]);
        assert!(document.menu_for("Monday").is_some());
        assert!(document.menu_for("Tuesday").is_none());
        assert!(document.menu_for("Wednesday").is_none());
    }

    #[test]
    fn falsy_meal_entries_are_dropped() {
        let document = MenuDocument::from_value(json!({
            "Monday": {
                "BREAKFAST": null,
                "LUNCH": false,
                "SNACKS": "",
                "DINNER": { "time": "8PM", "items": ["Dal"] },
            },
        }))
        .unwrap();

        let menu = document.menu_for("Monday").unwrap();
        assert_eq!(menu.meal_names(), vec!["DINNER"]);
    }

    #[test]
    fn truthy_non_object_entries_degrade_to_empty() {
        let document = MenuDocument::from_value(json!({
            "Monday": { "LUNCH": "thali" },
        }))
        .unwrap();

        let entry = document.menu_for("Monday").unwrap().entry("LUNCH").unwrap();
        assert_eq!(entry.time, None);
        assert!(entry.items.is_empty());
    }

    #[test]
    fn missing_or_malformed_items_mean_nothing_listed() {
        let document = MenuDocument::from_value(json!({
            "Monday": {
                "BREAKFAST": { "time": "8AM" },
                "LUNCH": { "time": "1PM", "items": "Rice" },
                "DINNER": { "items": ["Roti", 2, true, null, {"dish": "x"}] },
            },
        }))
        .unwrap();

        let menu = document.menu_for("Monday").unwrap();
        assert!(menu.entry("BREAKFAST").unwrap().items.is_empty());
        assert!(menu.entry("LUNCH").unwrap().items.is_empty());
        assert_eq!(menu.entry("DINNER").unwrap().items, vec!["Roti", "2", "true"]);
    }

    #[test]
    fn empty_time_reads_as_unset() {
        let document = MenuDocument::from_value(json!({
            "Monday": { "LUNCH": { "time": "", "items": ["Rice"] } },
        }))
        .unwrap();

        let entry = document.menu_for("Monday").unwrap().entry("LUNCH").unwrap();
        assert_eq!(entry.time, None);
    }
}
