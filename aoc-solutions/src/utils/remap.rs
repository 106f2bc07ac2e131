//! Interval remapping over half-open translation rules
//!
//! A [`RangeRule`] moves every value in `[source_start, source_start + length)` by the
//! same offset onto `[destination_start, ..)`. A [`Stage`] is an ordered group of rules
//! applied as one pass: the first rule containing a value decides its image, and values
//! no rule contains pass through unchanged. Stages chain by feeding one stage's output
//! values into the next.

use thiserror::Error;

/// Errors raised while remapping a value list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemapError {
    /// Remapping needs at least one value to produce a minimum
    #[error("cannot remap an empty value list")]
    EmptyInput,
    /// Output length differs from input length
    #[error("remapped {actual} values from {expected} inputs")]
    LengthMismatch { expected: usize, actual: usize },
    /// The translated value does not fit in a u64
    #[error("value {value} overflows when translated by {rule}")]
    Overflow { value: u64, rule: RangeRule },
}

/// One contiguous translation `(destination_start, source_start, length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRule {
    pub destination_start: u64,
    pub source_start: u64,
    pub length: u64,
}

impl std::fmt::Display for RangeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} {} {})",
            self.destination_start, self.source_start, self.length
        )
    }
}

impl RangeRule {
    pub fn new(destination_start: u64, source_start: u64, length: u64) -> Self {
        Self {
            destination_start,
            source_start,
            length,
        }
    }

    /// Whether `value` lies in `source_start..=source_start + length - 1`
    ///
    /// A zero-length rule contains nothing.
    pub fn contains(&self, value: u64) -> bool {
        value >= self.source_start && value - self.source_start < self.length
    }

    /// Image of `value` under this rule, or `Ok(None)` when the rule does not contain it
    pub fn translate(&self, value: u64) -> Result<Option<u64>, RemapError> {
        if !self.contains(value) {
            return Ok(None);
        }
        self.destination_start
            .checked_add(value - self.source_start)
            .map(Some)
            .ok_or(RemapError::Overflow { value, rule: *self })
    }
}

/// Output of one remapping pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remapped {
    /// One output per input, in input order
    pub values: Vec<u64>,
    /// Smallest output value
    pub min: u64,
}

/// Map every value through the first rule that contains it
///
/// Rules are tried in order and may overlap; the earliest containing rule wins
/// regardless of range size. With no rules every value is returned unchanged.
///
/// # Returns
/// * `Ok(Remapped)` - Output values (same length as `values`) and their minimum
/// * `Err(RemapError::EmptyInput)` - `values` was empty
/// * `Err(RemapError::Overflow)` - A translated value exceeded `u64::MAX`
pub fn remap(values: &[u64], rules: &[RangeRule]) -> Result<Remapped, RemapError> {
    let mut min = u64::MAX;
    let mut output = Vec::with_capacity(values.len());

    for &value in values {
        let mut image = value;
        for rule in rules {
            if let Some(translated) = rule.translate(value)? {
                image = translated;
                break;
            }
        }
        min = min.min(image);
        output.push(image);
    }

    if output.is_empty() {
        return Err(RemapError::EmptyInput);
    }
    if output.len() != values.len() {
        return Err(RemapError::LengthMismatch {
            expected: values.len(),
            actual: output.len(),
        });
    }
    log::debug!("Remapped {} values, current min: {}", output.len(), min);

    Ok(Remapped {
        values: output,
        min,
    })
}

/// A named, ordered group of rules applied as one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub name: String,
    pub rules: Vec<RangeRule>,
}

impl Stage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    pub fn push(&mut self, rule: RangeRule) {
        self.rules.push(rule);
    }

    /// Run this stage over `values`
    pub fn apply(&self, values: &[u64]) -> Result<Remapped, RemapError> {
        log::debug!("Applying stage {} ({} rules)", self.name, self.rules.len());
        remap(values, &self.rules)
    }
}
