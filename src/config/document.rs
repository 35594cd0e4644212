//! Serialized settings tree
//!
//! A minimal named-element tree mirroring the layout the host persists:
//! leaf elements carry text, container elements carry children.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One element of the serialized settings tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SettingsNode>,
}

impl SettingsNode {
    /// Leaf element holding text
    pub fn leaf(name: &str, text: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Empty container element
    pub fn container(name: &str) -> Self {
        Self {
            name: name.to_string(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: SettingsNode) {
        self.children.push(child);
    }

    /// Builder form of [`SettingsNode::push`]
    pub fn with_child(mut self, child: SettingsNode) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child with this name
    pub fn child(&self, name: &str) -> Option<&SettingsNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first direct child with this name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_lookup() {
        let mut root = SettingsNode::container("Settings");
        root.push(SettingsNode::leaf("PointsPerFrame", "100"));
        root.push(SettingsNode::container("IGTLookup").with_child(SettingsNode::leaf("Row", "")));

        assert_eq!(root.child_text("PointsPerFrame"), Some("100"));
        assert_eq!(root.child("IGTLookup").unwrap().children.len(), 1);
        assert!(root.child("Missing").is_none());
    }

    #[test]
    fn test_json_omits_empty_parts() {
        let node = SettingsNode::leaf("Version", "1.2.0");
        let json = node.to_json().unwrap();
        assert!(!json.contains("children"));
        assert_eq!(SettingsNode::from_json(&json).unwrap(), node);
    }

    #[test]
    fn test_bad_json_is_document_error() {
        let err = SettingsNode::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::error::RtaTbError::Document(_)));
    }
}
