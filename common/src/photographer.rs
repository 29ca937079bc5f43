//! Photographer records and the normalization layer.
//!
//! Upstream records are loosely shaped: fields may be missing, null, given as
//! strings instead of numbers, or named `_id` instead of `id`. Deserialization
//! substitutes safe defaults (empty string, empty list, zero) so every other
//! component can treat a `Photographer` as fully populated.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::search_const::DEFAULT_PROFILE_PIC;

static NULL: Value = Value::Null;

/// Stable identifier, accepted as either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PhotographerId(pub String);

impl PhotographerId {
    /// Numeric reading of the id; higher means more recently added.
    /// Ids that are not numbers read as 0.
    pub fn numeric(&self) -> f64 {
        self.0.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0)
    }

    /// Id of a raw record: `id` when it is a string or a number, otherwise
    /// `_id`. Anything else gives an empty id.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let id = match record.get("id") {
            Some(id @ (Value::String(_) | Value::Number(_))) => id,
            _ => record.get("_id").unwrap_or(&NULL),
        };
        PhotographerId(lenient_string(id))
    }

    /// Whether `other` names this id. Ids that both read as numbers compare
    /// numerically, so `1.0` matches `1`.
    pub fn matches(&self, other: &str) -> bool {
        let (mine, other) = (self.0.trim(), other.trim());
        if mine.is_empty() || other.is_empty() {
            return false;
        }
        if mine == other {
            return true;
        }
        match (mine.parse::<f64>(), other.parse::<f64>()) {
            (Ok(a), Ok(b)) => a.is_finite() && a == b,
            _ => false,
        }
    }
}

impl Display for PhotographerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PhotographerId {
    fn from(value: &str) -> Self {
        PhotographerId(value.to_string())
    }
}

impl From<u64> for PhotographerId {
    fn from(value: u64) -> Self {
        PhotographerId(value.to_string())
    }
}

impl Serialize for PhotographerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PhotographerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(PhotographerId(lenient_string(&value)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Review {
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_number")]
    pub rating: f64,
    #[serde(deserialize_with = "de_string")]
    pub comment: String,
    #[serde(deserialize_with = "de_string")]
    pub date: String,
}

impl Review {
    pub fn rating_label(&self) -> String {
        format_compact_number(self.rating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Photographer {
    pub id: PhotographerId,
    pub name: String,
    pub location: String,
    pub price: f64,
    pub rating: f64,
    pub bio: String,
    pub tags: Vec<String>,
    pub styles: Vec<String>,
    #[serde(rename = "profilePic")]
    pub profile_pic: String,
    pub portfolio: Vec<String>,
    pub reviews: Vec<Review>,
}

/// Records are read field by field from a JSON object so that no single bad
/// or duplicated key can reject the whole record.
impl<'de> Deserialize<'de> for Photographer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Value::Object(record) = Value::deserialize(deserializer)? else {
            return Err(serde::de::Error::custom("photographer record is not an object"));
        };
        let field = |key: &str| record.get(key).unwrap_or(&NULL);
        let profile_pic = match field("profilePic") {
            Value::Null => field("profile_pic"),
            pic => pic,
        };
        Ok(Photographer {
            id: PhotographerId::from_record(&record),
            name: lenient_string(field("name")),
            location: lenient_string(field("location")),
            price: lenient_number(field("price")),
            rating: lenient_number(field("rating")),
            bio: lenient_string(field("bio")),
            tags: lenient_string_list(field("tags")),
            styles: lenient_string_list(field("styles")),
            profile_pic: lenient_string(profile_pic),
            portfolio: lenient_string_list(field("portfolio")),
            reviews: lenient_reviews(field("reviews")),
        })
    }
}

impl Photographer {
    pub fn profile_pic_or_default(&self) -> &str {
        if self.profile_pic.trim().is_empty() { DEFAULT_PROFILE_PIC } else { &self.profile_pic }
    }

    /// Text fields consulted by the free-text query, in match order:
    /// name, location, joined tags, joined styles, bio.
    pub fn searchable_fields(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.location.clone(),
            self.tags.join(" "),
            self.styles.join(" "),
            self.bio.clone(),
        ]
    }

    pub fn price_label(&self) -> String {
        format!("₹{}", format_indian_grouping(self.price))
    }

    pub fn rating_label(&self) -> String {
        format_compact_number(self.rating)
    }
}

/// Formats a whole amount with Indian digit grouping: `120000` -> `1,20,000`.
pub fn format_indian_grouping(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round().abs() as u64 } else { 0 };
    let digits = rounded.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), last_three)
}

fn format_compact_number(value: f64) -> String {
    if value.fract() == 0.0 { format!("{}", value as i64) } else { format!("{}", value) }
}

fn lenient_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Whole floats print without a fraction: `1.0` reads as `"1"`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn lenient_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

fn lenient_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(lenient_string)
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.clone()],
        _ => vec![],
    }
}

fn lenient_reviews(value: &Value) -> Vec<Review> {
    let Value::Array(items) = value else { return vec![] };
    // a review that is not an object is dropped rather than failing the record
    items.iter().filter(|item| item.is_object()).filter_map(|item| serde_json::from_value::<Review>(item.clone()).ok()).collect()
}

fn de_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_string(&Value::deserialize(deserializer)?))
}

fn de_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(lenient_number(&Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let p: Photographer = serde_json::from_value(json!({"id": 7})).unwrap();
        assert_eq!(p.id, PhotographerId::from(7u64));
        assert_eq!(p.name, "");
        assert_eq!(p.price, 0.0);
        assert!(p.tags.is_empty());
        assert!(p.styles.is_empty());
        assert_eq!(p.profile_pic_or_default(), DEFAULT_PROFILE_PIC);
    }

    #[test]
    fn nulls_and_strings_are_normalized() {
        let p: Photographer = serde_json::from_value(json!({
            "_id": "12",
            "name": null,
            "price": "4500",
            "rating": "not a number",
            "styles": ["candid", null, 3],
            "tags": "wedding",
            "reviews": [{"name": "A", "rating": 5}, "garbage"],
        }))
        .unwrap();
        assert_eq!(p.id.numeric(), 12.0);
        assert_eq!(p.name, "");
        assert_eq!(p.price, 4500.0);
        assert_eq!(p.rating, 0.0);
        assert_eq!(p.styles, vec!["candid".to_string(), "3".to_string()]);
        assert_eq!(p.tags, vec!["wedding".to_string()]);
        assert_eq!(p.reviews.len(), 1);
        assert_eq!(p.reviews[0].rating, 5.0);
    }

    #[test]
    fn profile_pic_accepts_camel_case() {
        let p: Photographer = serde_json::from_value(json!({"profilePic": "https://x/y.jpg"})).unwrap();
        assert_eq!(p.profile_pic_or_default(), "https://x/y.jpg");
    }

    #[test]
    fn both_id_keys_keep_the_record() {
        let p: Photographer = serde_json::from_value(json!({"id": 5, "_id": "abc", "name": "Chitra"})).unwrap();
        assert_eq!(p.id, PhotographerId::from(5u64));
        assert_eq!(p.name, "Chitra");

        let p: Photographer = serde_json::from_value(json!({"_id": "abc", "id": 5})).unwrap();
        assert_eq!(p.id, PhotographerId::from(5u64));

        let p: Photographer = serde_json::from_value(json!({"id": null, "_id": 7})).unwrap();
        assert_eq!(p.id, PhotographerId::from(7u64));

        let p: Photographer = serde_json::from_value(json!({"_id": 7, "id": {"nested": true}})).unwrap();
        assert_eq!(p.id, PhotographerId::from(7u64));
    }

    #[test]
    fn whole_float_ids_read_as_integers() {
        let p: Photographer = serde_json::from_value(json!({"id": 1.0})).unwrap();
        assert_eq!(p.id.to_string(), "1");
        let p: Photographer = serde_json::from_value(json!({"id": 2.5})).unwrap();
        assert_eq!(p.id.to_string(), "2.5");
    }

    #[test]
    fn id_matching_is_numeric_when_possible() {
        assert!(PhotographerId::from("1.0").matches("1"));
        assert!(PhotographerId::from(3u64).matches(" 3 "));
        assert!(PhotographerId::from("abc").matches("abc"));
        assert!(!PhotographerId::from("abc").matches("abd"));
        assert!(!PhotographerId::from("").matches(""));
        assert!(!PhotographerId::from(1u64).matches("2"));
    }

    #[test]
    fn serialized_record_reads_back() {
        let p = Photographer { id: 4u64.into(), name: "Dev".into(), profile_pic: "https://x/p.jpg".into(), ..Default::default() };
        let back: Photographer = serde_json::from_value(serde_json::to_value(&p).unwrap()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn non_object_record_is_rejected() {
        assert!(serde_json::from_value::<Photographer>(json!("oops")).is_err());
    }

    #[test]
    fn non_numeric_id_reads_as_zero() {
        assert_eq!(PhotographerId::from("abc").numeric(), 0.0);
        assert_eq!(PhotographerId::from(" 3 ").numeric(), 3.0);
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_indian_grouping(0.0), "0");
        assert_eq!(format_indian_grouping(999.0), "999");
        assert_eq!(format_indian_grouping(5000.0), "5,000");
        assert_eq!(format_indian_grouping(120000.0), "1,20,000");
        assert_eq!(format_indian_grouping(12345678.0), "1,23,45,678");
    }

    #[test]
    fn labels() {
        let p = Photographer { price: 8000.0, rating: 4.5, ..Default::default() };
        assert_eq!(p.price_label(), "₹8,000");
        assert_eq!(p.rating_label(), "4.5");
        let p = Photographer { rating: 4.0, ..Default::default() };
        assert_eq!(p.rating_label(), "4");
    }
}
