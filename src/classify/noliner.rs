use super::{parse_id, Verdict};
use crate::data::model::{Catalog, Channel, UnsigRecord};
use crate::error::ClassifyError;

/// Highest total a channel may reach for its unsig to count as a no-liner.
pub const CHANNEL_LIMIT: f64 = 1.0;

/// Summed multipliers per colour channel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelTotals {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ChannelTotals {
    /// Add a layer's multiplier to its channel. Unknown tags are ignored.
    fn add(&mut self, channel: &Channel, multiplier: f64) {
        match channel {
            Channel::Red => self.red += multiplier,
            Channel::Green => self.green += multiplier,
            Channel::Blue => self.blue += multiplier,
            Channel::Other(_) => {}
        }
    }

    /// All three totals are at or below `limit`.
    pub fn within(&self, limit: f64) -> bool {
        self.red <= limit && self.green <= limit && self.blue <= limit
    }
}

/// Sum the multipliers of `record` per channel.
///
/// Colours and multipliers are paired up to the shorter of the two. Returns
/// `Ok(None)` when either sequence is missing, and fails when a paired
/// multiplier is not a number.
pub fn channel_totals(id: &str, record: &UnsigRecord) -> Result<Option<ChannelTotals>, ClassifyError> {
    let Some(props) = record.properties.as_ref() else {
        return Ok(None);
    };
    let (Some(colors), Some(multipliers)) = (props.colors.as_ref(), props.multipliers.as_ref()) else {
        return Ok(None);
    };

    let mut totals = ChannelTotals::default();
    for (index, (channel, raw)) in colors.iter().zip(multipliers).enumerate() {
        let multiplier = raw
            .as_multiplier()
            .ok_or_else(|| ClassifyError::MalformedMultiplier {
                id: id.to_string(),
                index,
                value: raw.to_string(),
            })?;
        totals.add(channel, multiplier);
    }
    Ok(Some(totals))
}

pub fn is_no_liner(id: &str, record: &UnsigRecord) -> Result<Verdict, ClassifyError> {
    let totals = channel_totals(id, record)?;
    Ok(totals.is_some_and(|t| t.within(CHANNEL_LIMIT)).into())
}

/// Identifiers of all no-liners, in catalog order.
///
/// A single malformed multiplier anywhere in the catalog fails the pass.
pub fn classify_no_liners(catalog: &Catalog) -> Result<Vec<u64>, ClassifyError> {
    let mut ids = Vec::new();
    for (id, record) in catalog.iter() {
        if is_no_liner(id, record)?.is_match() {
            ids.push(parse_id(id)?);
        }
    }
    Ok(ids)
}
