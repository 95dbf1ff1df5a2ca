use std::fmt;

// ---------------------------------------------------------------------------
// PropertyValue – one entry of a per-layer property sequence
// ---------------------------------------------------------------------------

/// A dynamically-typed layer value as found in the catalog JSON.
/// Classifiers count distinct values through `BTreeSet`, so it must be `Ord`.
///
/// Numbers compare by value (`1` and `1.0` are the same value); text compares
/// literally, so `"1"` and `1` stay distinct.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Bool(bool),
    /// Arrays and objects, kept as their JSON text.
    Raw(String),
    Null,
}

impl PropertyValue {
    /// Build a numeric value, folding `-0.0` into `0.0`.
    pub fn number(v: f64) -> Self {
        PropertyValue::Number(if v == 0.0 { 0.0 } else { v })
    }

    /// Read the value as a multiplier magnitude.
    ///
    /// Numbers are used as-is, strings are trimmed and parsed as `f64`,
    /// booleans count as `1.0` / `0.0`. Anything else is not a number.
    pub fn as_multiplier(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(v) => Some(*v),
            PropertyValue::Text(s) => s.trim().parse::<f64>().ok(),
            PropertyValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            PropertyValue::Raw(_) | PropertyValue::Null => None,
        }
    }
}

// -- Manual Eq/Ord so PropertyValue can live in a BTreeSet --

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for PropertyValue {}

impl PartialOrd for PropertyValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PropertyValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use PropertyValue::*;
        fn discriminant(v: &PropertyValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Number(_) => 2,
                Text(_) => 3,
                Raw(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Number(a), Number(b)) => a.total_cmp(b),
            (Text(a), Text(b)) | (Raw(a), Raw(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(v) => write!(f, "{v}"),
            PropertyValue::Text(s) => write!(f, "'{s}'"),
            PropertyValue::Bool(b) => write!(f, "{b}"),
            PropertyValue::Raw(s) => write!(f, "{s}"),
            PropertyValue::Null => write!(f, "null"),
        }
    }
}

// ---------------------------------------------------------------------------
// Channel – the colour tag of a layer
// ---------------------------------------------------------------------------

/// Colour channel a layer is drawn on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Red,
    Green,
    Blue,
    /// Any tag outside the three known channels, kept verbatim.
    Other(String),
}

impl Channel {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Red" => Channel::Red,
            "Green" => Channel::Green,
            "Blue" => Channel::Blue,
            other => Channel::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "Red"),
            Channel::Green => write!(f, "Green"),
            Channel::Blue => write!(f, "Blue"),
            Channel::Other(tag) => write!(f, "{tag}"),
        }
    }
}

// ---------------------------------------------------------------------------
// UnsigRecord – one catalog entry
// ---------------------------------------------------------------------------

/// The four index-aligned layer sequences of an unsig.
///
/// Each field is `None` when the key is missing or not a JSON array.
/// Alignment between the sequences is assumed, never checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsigProperties {
    pub colors: Option<Vec<Channel>>,
    pub distributions: Option<Vec<PropertyValue>>,
    pub multipliers: Option<Vec<PropertyValue>>,
    pub rotations: Option<Vec<PropertyValue>>,
}

/// Descriptive metadata of one generated artwork.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsigRecord {
    /// Position of the unsig in the generation run, when recorded.
    pub index: Option<i64>,
    /// Declared number of layers, when recorded.
    pub num_props: Option<i64>,
    pub properties: Option<UnsigProperties>,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded file
// ---------------------------------------------------------------------------

/// All catalog entries keyed by their string identifier, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, UnsigRecord)>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<(String, UnsigRecord)>) -> Self {
        Catalog { entries }
    }

    /// Iterate `(id, record)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnsigRecord)> {
        self.entries.iter().map(|(id, rec)| (id.as_str(), rec))
    }

    /// Look up a record by its identifier.
    pub fn get(&self, id: &str) -> Option<&UnsigRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, rec)| rec)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn numbers_compare_by_value() {
        let set: BTreeSet<PropertyValue> = [
            PropertyValue::number(1.0),
            PropertyValue::number(1.0),
            PropertyValue::number(-0.0),
            PropertyValue::number(0.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn text_and_number_stay_distinct() {
        assert_ne!(
            PropertyValue::Text("1".into()),
            PropertyValue::number(1.0)
        );
    }

    #[test]
    fn multiplier_parsing() {
        assert_eq!(PropertyValue::Text(" 0.25 ".into()).as_multiplier(), Some(0.25));
        assert_eq!(PropertyValue::number(3.0).as_multiplier(), Some(3.0));
        assert_eq!(PropertyValue::Bool(true).as_multiplier(), Some(1.0));
        assert_eq!(PropertyValue::Text("abc".into()).as_multiplier(), None);
        assert_eq!(PropertyValue::Null.as_multiplier(), None);
    }

    #[test]
    fn unknown_channel_tags_are_kept() {
        assert_eq!(Channel::from_tag("Red"), Channel::Red);
        assert_eq!(
            Channel::from_tag("Purple"),
            Channel::Other("Purple".to_string())
        );
        assert_eq!(Channel::from_tag("Purple").to_string(), "Purple");
    }

    #[test]
    fn catalog_keeps_entry_order() {
        let catalog = Catalog::from_entries(vec![
            ("9".to_string(), UnsigRecord::default()),
            ("2".to_string(), UnsigRecord::default()),
        ]);
        let ids: Vec<&str> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["9", "2"]);
        assert!(catalog.get("2").is_some());
        assert!(catalog.get("3").is_none());
        assert_eq!(catalog.len(), 2);
    }
}
