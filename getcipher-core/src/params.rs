//! Parameter descriptors — the tunable options an algorithm exposes.
//!
//! Each algorithm owns a fixed array of [`MAX_PARAMETERS`] slots. All
//! slots start inactive; `init` declares the ones the algorithm uses, and
//! `configure` overwrites their current values from external overrides.
//! The same array serves as the option schema (names, kinds, advertised
//! values, bounds) and as runtime state.
//!
//! Overrides are applied atomically: every key is resolved and parsed
//! before any slot changes.

use std::collections::BTreeMap;

use crate::constants::{MAX_PARAMETERS, MAX_PARAMETER_BYTES, MAX_PARAMETER_OPTIONS};
use crate::errors::{CipherError, ParameterError};

/// External `name → value` overrides, as supplied by a driver.
pub type Overrides = BTreeMap<String, String>;

/// Byte-valued parameter payload, 1 to [`MAX_PARAMETER_BYTES`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortBytes(Vec<u8>);

impl ShortBytes {
    /// # Errors
    /// `None` when `bytes` is empty or longer than [`MAX_PARAMETER_BYTES`].
    pub fn new(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() > MAX_PARAMETER_BYTES {
            return None;
        }
        Some(Self(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A parameter value: a small integer or a short byte string, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Bytes(ShortBytes),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::Bytes(_) => ParamKind::Bytes,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b.as_bytes())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    Bytes,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::Int => "integer",
            ParamKind::Bytes => "bytes",
        }
    }
}

/// One tunable option slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub valid: bool,
    pub default: Option<ParamValue>,
    pub current: Option<ParamValue>,
    /// Advertised values, first one is the default.
    pub options: Vec<ParamValue>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl ParameterDescriptor {
    pub fn kind(&self) -> Option<ParamKind> {
        self.default.as_ref().map(ParamValue::kind)
    }

    /// Parse `raw` into this slot's kind and check bounds.
    fn parse(&self, raw: &str) -> Result<ParamValue, ParameterError> {
        let invalid = |reason: &str| ParameterError::InvalidValue {
            name: self.name.clone(),
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        match self.kind() {
            Some(ParamKind::Int) => {
                let value: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| invalid("expected an integer"))?;
                let min = self.min.unwrap_or(i64::MIN);
                let max = self.max.unwrap_or(i64::MAX);
                if value < min || value > max {
                    return Err(ParameterError::OutOfBounds {
                        name: self.name.clone(),
                        value,
                        min,
                        max,
                    });
                }
                Ok(ParamValue::Int(value))
            }
            Some(ParamKind::Bytes) => ShortBytes::new(raw.as_bytes())
                .map(ParamValue::Bytes)
                .ok_or_else(|| invalid("expected 1 to 31 bytes")),
            None => Err(invalid("parameter has no declared kind")),
        }
    }
}

/// Fixed-capacity descriptor array owned by one algorithm instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSet {
    slots: [ParameterDescriptor; MAX_PARAMETERS],
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSet {
    /// All slots inactive.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| ParameterDescriptor::default()),
        }
    }

    /// Mark every slot inactive.
    pub fn clear_all(&mut self) {
        for slot in &mut self.slots {
            *slot = ParameterDescriptor::default();
        }
    }

    /// Activate slot `index` as an integer parameter. `options[0]` becomes
    /// both default and current value.
    pub fn declare_int_options(
        &mut self,
        index: usize,
        name: &str,
        options: &[i64],
    ) -> Result<(), CipherError> {
        let values = options.iter().copied().map(ParamValue::Int).collect();
        self.declare(index, name, values)
    }

    /// Activate slot `index` as a byte-valued parameter with one canonical value.
    pub fn declare_bytes_option(
        &mut self,
        index: usize,
        name: &str,
        bytes: &[u8],
    ) -> Result<(), CipherError> {
        let value = ShortBytes::new(bytes).ok_or_else(|| ParameterError::InvalidValue {
            name: name.to_string(),
            value: String::from_utf8_lossy(bytes).into_owned(),
            reason: "expected 1 to 31 bytes".into(),
        })?;
        self.declare(index, name, vec![ParamValue::Bytes(value)])
    }

    /// Attach inclusive bounds to an active integer slot.
    pub fn set_bounds(&mut self, index: usize, min: i64, max: i64) -> Result<(), CipherError> {
        let slot = self.active_mut(index)?;
        if slot.kind() != Some(ParamKind::Int) {
            return Err(ParameterError::KindMismatch {
                index,
                expected: ParamKind::Int.as_str(),
            }
            .into());
        }
        slot.min = Some(min);
        slot.max = Some(max);
        Ok(())
    }

    fn declare(
        &mut self,
        index: usize,
        name: &str,
        options: Vec<ParamValue>,
    ) -> Result<(), CipherError> {
        check_slot(index)?;
        if options.len() > MAX_PARAMETER_OPTIONS {
            return Err(ParameterError::TooManyOptions {
                name: name.to_string(),
                count: options.len(),
                limit: MAX_PARAMETER_OPTIONS,
            }
            .into());
        }
        let default = options
            .first()
            .cloned()
            .ok_or_else(|| ParameterError::NoOptions(name.to_string()))?;

        self.slots[index] = ParameterDescriptor {
            name: name.to_string(),
            valid: true,
            current: Some(default.clone()),
            default: Some(default),
            options,
            min: None,
            max: None,
        };
        Ok(())
    }

    /// Apply every override or none of them.
    ///
    /// # Errors
    /// `InvalidParameter` wrapping `ParameterError::Unknown` for a name no
    /// active slot carries, or `InvalidValue` / `OutOfBounds` when a value
    /// does not fit its slot.
    pub fn apply_override(&mut self, overrides: &Overrides) -> Result<(), CipherError> {
        let mut staged = Vec::with_capacity(overrides.len());
        for (name, raw) in overrides {
            let index = self
                .index_of(name)
                .ok_or_else(|| ParameterError::Unknown(name.clone()))?;
            staged.push((index, self.slots[index].parse(raw)?));
        }

        for (index, value) in staged {
            tracing::debug!(name = %self.slots[index].name, %value, "parameter override");
            self.slots[index].current = Some(value);
        }
        Ok(())
    }

    /// Slot index of the active parameter called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.valid && slot.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.index_of(name).map(|i| &self.slots[i])
    }

    /// Slot `index`, active or not.
    pub fn slot(&self, index: usize) -> Result<&ParameterDescriptor, CipherError> {
        check_slot(index)?;
        Ok(&self.slots[index])
    }

    /// Active slots in index order.
    pub fn active(&self) -> impl Iterator<Item = (usize, &ParameterDescriptor)> {
        self.slots.iter().enumerate().filter(|(_, slot)| slot.valid)
    }

    pub fn current_int(&self, index: usize) -> Result<i64, CipherError> {
        match self.active_ref(index)?.current {
            Some(ParamValue::Int(v)) => Ok(v),
            _ => Err(ParameterError::KindMismatch {
                index,
                expected: ParamKind::Int.as_str(),
            }
            .into()),
        }
    }

    pub fn current_bytes(&self, index: usize) -> Result<&[u8], CipherError> {
        match &self.active_ref(index)?.current {
            Some(ParamValue::Bytes(b)) => Ok(b.as_bytes()),
            _ => Err(ParameterError::KindMismatch {
                index,
                expected: ParamKind::Bytes.as_str(),
            }
            .into()),
        }
    }

    fn active_ref(&self, index: usize) -> Result<&ParameterDescriptor, CipherError> {
        let slot = self.slot(index)?;
        if !slot.valid {
            return Err(ParameterError::Inactive(index).into());
        }
        Ok(slot)
    }

    fn active_mut(&mut self, index: usize) -> Result<&mut ParameterDescriptor, CipherError> {
        self.active_ref(index)?;
        Ok(&mut self.slots[index])
    }
}

fn check_slot(index: usize) -> Result<(), CipherError> {
    if index >= MAX_PARAMETERS {
        return Err(ParameterError::SlotOutOfRange {
            index,
            capacity: MAX_PARAMETERS,
        }
        .into());
    }
    Ok(())
}
