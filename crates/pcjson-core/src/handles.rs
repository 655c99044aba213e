//! Handle indirection: raw object handles travel through documents as names.
//!
//! A handle value is an index into the table of its category. Generation maps
//! an index to the name at that position; parsing assigns indices to names in
//! order of first appearance, bounded by the category's declared count.

use std::collections::HashMap;
use std::fmt;

use pcjson_contracts::{
    STATE_DESCRIPTOR_SET_LAYOUTS, STATE_IMMUTABLE_SAMPLERS, STATE_YCBCR_SAMPLERS,
};

use crate::diagnostics::Diagnostics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleCategory {
    YcbcrConversion,
    Sampler,
    DescriptorSetLayout,
}

impl HandleCategory {
    pub const ALL: [HandleCategory; 3] = [
        HandleCategory::YcbcrConversion,
        HandleCategory::Sampler,
        HandleCategory::DescriptorSetLayout,
    ];

    /// Document key holding the records of this category.
    pub fn document_key(self) -> &'static str {
        match self {
            HandleCategory::YcbcrConversion => STATE_YCBCR_SAMPLERS,
            HandleCategory::Sampler => STATE_IMMUTABLE_SAMPLERS,
            HandleCategory::DescriptorSetLayout => STATE_DESCRIPTOR_SET_LAYOUTS,
        }
    }
}

impl fmt::Display for HandleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HandleCategory::YcbcrConversion => "Ycbcr conversion",
            HandleCategory::Sampler => "sampler",
            HandleCategory::DescriptorSetLayout => "descriptor set layout",
        })
    }
}

#[derive(Debug, Clone)]
pub struct HandleNameTable {
    category: HandleCategory,
    count: usize,
    names: Vec<String>,
    indices: HashMap<String, u32>,
}

impl HandleNameTable {
    /// Table for generation: every position already carries its name.
    pub fn with_names(category: HandleCategory, names: Vec<String>) -> Self {
        let indices = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i as u32))
            .collect();
        Self {
            category,
            count: names.len(),
            names,
            indices,
        }
    }

    /// Table for parsing: names are assigned as they are first seen.
    pub fn with_capacity(category: HandleCategory, count: usize) -> Self {
        Self {
            category,
            count,
            names: Vec::with_capacity(count),
            indices: HashMap::new(),
        }
    }

    pub fn category(&self) -> HandleCategory {
        self.category
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn name_for(&self, index: u64, diag: &mut Diagnostics) -> Option<&str> {
        let found = usize::try_from(index)
            .ok()
            .filter(|i| *i < self.count)
            .and_then(|i| self.names.get(i));
        if found.is_none() {
            diag.error(format!(
                "{} handle index {index} is out of range (table has {} entries)",
                self.category, self.count
            ));
        }
        found.map(String::as_str)
    }

    /// Returns the index of `name`, assigning the next free one on first sight.
    pub fn index_for(&mut self, name: &str, diag: &mut Diagnostics) -> Option<u32> {
        if let Some(index) = self.indices.get(name) {
            return Some(*index);
        }
        if self.names.len() >= self.count {
            diag.error(format!(
                "Unknown {} name {name:?}: all {} entries are already assigned",
                self.category, self.count
            ));
            return None;
        }
        let index = self.names.len() as u32;
        self.names.push(name.to_string());
        self.indices.insert(name.to_string(), index);
        Some(index)
    }

    /// Declares the name of the next record; names must be unique.
    pub fn define(&mut self, name: &str, diag: &mut Diagnostics) -> Option<u32> {
        if self.indices.contains_key(name) {
            diag.error(format!("Duplicate {} name {name:?}", self.category));
            return None;
        }
        self.index_for(name, diag)
    }

    /// Resolves a reference that is either a name or a raw index.
    pub fn resolve_reference(&mut self, value: &serde_json::Value, diag: &mut Diagnostics) -> Option<u32> {
        match value {
            serde_json::Value::String(name) => self.index_for(name, diag),
            other => match other.as_u64() {
                Some(index) if (index as usize) < self.count => Some(index as u32),
                _ => {
                    diag.error(format!(
                        "{} reference {other} is neither a name nor an index below {}",
                        self.category, self.count
                    ));
                    None
                }
            },
        }
    }
}

/// The three tables consulted while resolving one pipeline document.
#[derive(Debug, Clone)]
pub struct HandleTables {
    pub ycbcr_conversions: HandleNameTable,
    pub samplers: HandleNameTable,
    pub descriptor_set_layouts: HandleNameTable,
}

impl HandleTables {
    pub fn get(&self, category: HandleCategory) -> &HandleNameTable {
        match category {
            HandleCategory::YcbcrConversion => &self.ycbcr_conversions,
            HandleCategory::Sampler => &self.samplers,
            HandleCategory::DescriptorSetLayout => &self.descriptor_set_layouts,
        }
    }

    pub fn get_mut(&mut self, category: HandleCategory) -> &mut HandleNameTable {
        match category {
            HandleCategory::YcbcrConversion => &mut self.ycbcr_conversions,
            HandleCategory::Sampler => &mut self.samplers,
            HandleCategory::DescriptorSetLayout => &mut self.descriptor_set_layouts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let table = HandleNameTable::with_names(HandleCategory::Sampler, names(&["a", "b", "c"]));
        let mut diag = Diagnostics::new();
        assert_eq!(table.name_for(2, &mut diag), Some("c"));
        assert!(diag.is_ok());
        assert_eq!(table.name_for(7, &mut diag), None);
        assert!(!diag.is_ok());
        assert!(diag.messages()[0].text.contains("index 7 is out of range"));
    }

    #[test]
    fn parse_assigns_indices_in_first_seen_order() {
        let mut table = HandleNameTable::with_capacity(HandleCategory::DescriptorSetLayout, 2);
        let mut diag = Diagnostics::new();
        assert_eq!(table.index_for("set1", &mut diag), Some(0));
        assert_eq!(table.index_for("set0", &mut diag), Some(1));
        assert_eq!(table.index_for("set1", &mut diag), Some(0));
        assert!(diag.is_ok());
        assert_eq!(table.index_for("set2", &mut diag), None);
        assert!(!diag.is_ok());
        assert_eq!(table.names(), &names(&["set1", "set0"])[..]);
    }

    #[test]
    fn define_rejects_duplicates() {
        let mut table = HandleNameTable::with_capacity(HandleCategory::YcbcrConversion, 3);
        let mut diag = Diagnostics::new();
        assert_eq!(table.define("conv", &mut diag), Some(0));
        assert_eq!(table.define("conv", &mut diag), None);
        assert!(diag.messages()[0].text.contains("Duplicate Ycbcr conversion name"));
    }

    #[test]
    fn references_accept_names_and_indices() {
        let mut table = HandleNameTable::with_capacity(HandleCategory::Sampler, 2);
        let mut diag = Diagnostics::new();
        table.define("linear", &mut diag);
        assert_eq!(table.resolve_reference(&serde_json::json!("linear"), &mut diag), Some(0));
        assert_eq!(table.resolve_reference(&serde_json::json!(1), &mut diag), Some(1));
        assert!(diag.is_ok());
        assert_eq!(table.resolve_reference(&serde_json::json!(2), &mut diag), None);
        assert!(!diag.is_ok());
    }
}
