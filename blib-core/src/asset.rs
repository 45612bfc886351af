use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of data block that can be packed into a .blib container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    CyclesMaterial,
    CyclesNodeGroup,
}

impl AssetKind {
    /// Human-readable name, as shown in summaries and prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetKind::CyclesMaterial => "Cycles Material",
            AssetKind::CyclesNodeGroup => "Cycles Node Group",
        }
    }

    /// Subtype tag handed to the codec's file sniffing
    pub fn subtype(&self) -> &'static str {
        match self {
            AssetKind::CyclesMaterial => "mat",
            AssetKind::CyclesNodeGroup => "grp",
        }
    }

    /// All kinds, in roster order
    pub fn all() -> &'static [AssetKind] {
        &[AssetKind::CyclesMaterial, AssetKind::CyclesNodeGroup]
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named host data block eligible for export
///
/// The payload is opaque to the batch engine; only the codec interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBlock {
    pub name: String,
    pub kind: AssetKind,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl AssetBlock {
    pub fn new(name: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

/// One roster entry: an asset name plus its export toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetItem {
    pub name: String,
    pub selected: bool,
}

/// Source of host data blocks, by kind
///
/// Stands in for the host application's data store. `MemorySource` is the
/// in-memory implementation used by the CLI and tests.
pub trait AssetSource {
    fn blocks(&self, kind: AssetKind) -> Vec<AssetBlock>;

    /// Look up a single block by name
    fn block(&self, kind: AssetKind, name: &str) -> Option<AssetBlock> {
        self.blocks(kind).into_iter().find(|b| b.name == name)
    }
}

/// In-memory asset source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySource {
    pub blocks: Vec<AssetBlock>,
}

impl MemorySource {
    pub fn new(blocks: Vec<AssetBlock>) -> Self {
        Self { blocks }
    }
}

impl AssetSource for MemorySource {
    fn blocks(&self, kind: AssetKind) -> Vec<AssetBlock> {
        self.blocks
            .iter()
            .filter(|b| b.kind == kind)
            .cloned()
            .collect()
    }
}

/// The selectable asset list for one kind, rebuilt per export batch
///
/// Items start deselected; the caller opts assets in before running the
/// exporter.
#[derive(Debug, Clone, Default)]
pub struct AssetRoster {
    items: Vec<AssetItem>,
}

impl AssetRoster {
    /// Build the roster from a source, keeping only blocks the codec
    /// recognizes as exportable
    pub fn from_source<S, F>(source: &S, kind: AssetKind, check_asset: F) -> Self
    where
        S: AssetSource + ?Sized,
        F: Fn(&AssetBlock) -> bool,
    {
        let items = source
            .blocks(kind)
            .into_iter()
            .filter(|block| check_asset(block))
            .map(|block| AssetItem {
                name: block.name,
                selected: false,
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[AssetItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn select_all(&mut self) {
        for item in &mut self.items {
            item.selected = true;
        }
    }

    pub fn select_none(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }

    /// Select a single asset by name; returns false if the roster has no
    /// such entry
    pub fn select(&mut self, name: &str) -> bool {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.selected = true;
                true
            }
            None => false,
        }
    }

    /// Names of all assets currently flagged for export
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.name.as_str())
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }
}
