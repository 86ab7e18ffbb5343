//! Parameter Storage Types
//!
//! Provides the typed key-value `ParameterStore` the survey parameter block
//! loads from. Registration happens once with defaults; a GCS or plan
//! loader then overwrites values with `set`. Persistence belongs to the
//! owning application.

use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

use super::error::ParameterError;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 64;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter is hidden from GCS parameter listings
        const HIDDEN = 0b00000001;
        /// Parameter cannot be modified after registration
        const READ_ONLY = 0b00000010;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

/// One registered parameter: value plus flags
#[derive(Debug, Clone)]
struct ParamEntry {
    value: ParamValue,
    flags: ParamFlags,
}

/// Parameter store for survey configuration management.
///
/// Stores parameters as key-value pairs with flags. Values must be
/// registered before they can be set; the dirty flag tells the owning
/// application when a write-back is due.
pub struct ParameterStore {
    entries: FnvIndexMap<String<PARAM_NAME_LEN>, ParamEntry, MAX_PARAMS>,
    dirty: bool,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::new(),
            dirty: false,
        }
    }

    /// Register a parameter with its default value.
    ///
    /// Returns Err if the name is too long, already registered, or the
    /// store is full.
    pub fn register(
        &mut self,
        name: &str,
        value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = Self::key(name)?;
        if self.entries.contains_key(&key) {
            return Err(ParameterError::Duplicate);
        }
        self.entries
            .insert(key, ParamEntry { value, flags })
            .map(|_| ())
            .map_err(|_| ParameterError::StoreFull)
    }

    /// Get a parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = Self::key(name).ok()?;
        self.entries.get(&key).map(|entry| &entry.value)
    }

    /// Get a parameter's flags
    pub fn flags(&self, name: &str) -> Option<ParamFlags> {
        let key = Self::key(name).ok()?;
        self.entries.get(&key).map(|entry| entry.flags)
    }

    /// Set a registered parameter's value.
    ///
    /// Marks the store as dirty. Returns Err for unknown or read-only
    /// parameters.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = Self::key(name)?;
        let entry = self
            .entries
            .get_mut(&key)
            .ok_or(ParameterError::Unknown)?;
        if entry.flags.contains(ParamFlags::READ_ONLY) {
            return Err(ParameterError::ReadOnly);
        }
        entry.value = value;
        self.dirty = true;
        Ok(())
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameters are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any value changed since the last `clear_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after the owning application persisted the store
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn key(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
        let mut key = String::new();
        key.push_str(name)
            .map_err(|_| ParameterError::NameTooLong)?;
        Ok(key)
    }
}
