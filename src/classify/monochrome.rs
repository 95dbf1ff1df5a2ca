use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::{parse_id, Verdict};
use crate::data::model::{Catalog, Channel, PropertyValue, UnsigRecord};
use crate::error::ClassifyError;

// ---------------------------------------------------------------------------
// Colour group patterns
// ---------------------------------------------------------------------------

const RGB: &[Channel] = &[Channel::Red, Channel::Green, Channel::Blue];
const RG: &[Channel] = &[Channel::Red, Channel::Green];
const RB: &[Channel] = &[Channel::Red, Channel::Blue];
const GB: &[Channel] = &[Channel::Green, Channel::Blue];

/// A colour group that a monochrome unsig may repeat end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RepeatPattern {
    Rgb,
    RedGreen,
    RedBlue,
    GreenBlue,
}

impl RepeatPattern {
    /// Patterns in the order they are tried.
    pub const ALL: [RepeatPattern; 4] = [
        RepeatPattern::Rgb,
        RepeatPattern::RedGreen,
        RepeatPattern::RedBlue,
        RepeatPattern::GreenBlue,
    ];

    pub fn channels(self) -> &'static [Channel] {
        match self {
            RepeatPattern::Rgb => RGB,
            RepeatPattern::RedGreen => RG,
            RepeatPattern::RedBlue => RB,
            RepeatPattern::GreenBlue => GB,
        }
    }

    /// Layers per group.
    pub fn group_size(self) -> usize {
        self.channels().len()
    }
}

impl fmt::Display for RepeatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.channels().iter().map(Channel::to_string).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// Which rule made a record monochrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MonochromeRule {
    /// Every layer shares one multiplier and one rotation.
    Uniform,
    /// Colours tile the pattern, and multipliers and rotations are constant
    /// inside each tile.
    Repeating(RepeatPattern),
}

impl fmt::Display for MonochromeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonochromeRule::Uniform => write!(f, "uniform"),
            MonochromeRule::Repeating(pattern) => write!(f, "repeating {pattern}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

/// Return the rule under which `record` is monochrome, if any.
///
/// All four property sequences must be present and non-empty, and every
/// layer must share a single distribution.
pub fn explain_monochrome(record: &UnsigRecord) -> Option<MonochromeRule> {
    let props = record.properties.as_ref()?;
    let distributions = non_empty(props.distributions.as_deref())?;
    let multipliers = non_empty(props.multipliers.as_deref())?;
    let rotations = non_empty(props.rotations.as_deref())?;
    let colors = non_empty(props.colors.as_deref())?;

    if distinct_count(distributions) != 1 {
        return None;
    }

    if distinct_count(multipliers) == 1 && distinct_count(rotations) == 1 {
        return Some(MonochromeRule::Uniform);
    }

    RepeatPattern::ALL
        .into_iter()
        .find(|&pattern| {
            let k = pattern.group_size();
            tiles_pattern(colors, pattern.channels())
                && groups_uniform(multipliers, k)
                && groups_uniform(rotations, k)
        })
        .map(MonochromeRule::Repeating)
}

pub fn is_monochrome(record: &UnsigRecord) -> Verdict {
    explain_monochrome(record).is_some().into()
}

fn non_empty<T>(values: Option<&[T]>) -> Option<&[T]> {
    values.filter(|v| !v.is_empty())
}

fn distinct_count(values: &[PropertyValue]) -> usize {
    values.iter().collect::<BTreeSet<_>>().len()
}

/// `colors` is `pattern` repeated end to end, nothing more.
fn tiles_pattern(colors: &[Channel], pattern: &[Channel]) -> bool {
    colors.len() % pattern.len() == 0 && colors.chunks(pattern.len()).all(|tile| tile == pattern)
}

/// Consecutive groups of `size` values each hold a single value.
fn groups_uniform(values: &[PropertyValue], size: usize) -> bool {
    values.len() % size == 0
        && values
            .chunks(size)
            .all(|group| group.iter().all(|v| *v == group[0]))
}

// ---------------------------------------------------------------------------
// Catalog pass
// ---------------------------------------------------------------------------

/// Identifiers of all monochrome unsigs, ascending.
pub fn classify_monochromes(catalog: &Catalog) -> Result<Vec<u64>, ClassifyError> {
    let mut ids = catalog
        .iter()
        .filter(|(_, rec)| is_monochrome(rec).is_match())
        .map(|(id, _)| parse_id(id))
        .collect::<Result<Vec<_>, _>>()?;
    ids.sort_unstable();
    Ok(ids)
}

/// How many catalog records each rule accounts for.
pub fn rule_breakdown(catalog: &Catalog) -> BTreeMap<MonochromeRule, usize> {
    let mut counts = BTreeMap::new();
    for rule in catalog.iter().filter_map(|(_, rec)| explain_monochrome(rec)) {
        *counts.entry(rule).or_insert(0) += 1;
    }
    counts
}
