//! Material properties and name resolution.

use std::collections::HashMap;

use crate::core::{Error, types::Result};
use super::Material;

/// Point queries against a material table.
pub trait MaterialRegistry: Send + Sync {
    fn is_solid(&self, material: Material) -> bool;
    fn is_liquid(&self, material: Material) -> bool;

    /// Sentinel "empty" material.
    fn air(&self) -> Material {
        Material::AIR
    }

    /// Resolve a registered name to its base material.
    fn lookup(&self, name: &str) -> Option<Material>;

    /// Parse `name`, `name:data`, `kind` or `kind:data`.
    fn parse(&self, text: &str) -> Result<Material> {
        let text = text.trim();
        let (head, data) = match text.split_once(':') {
            Some((head, data)) => {
                let data = data.parse::<u8>().map_err(|_| {
                    Error::UserInput(format!("Invalid material data in '{}'", text))
                })?;
                (head, Some(data))
            }
            None => (text, None),
        };
        let base = match head.parse::<u16>() {
            Ok(kind) => Material::kind(kind),
            Err(_) => self
                .lookup(&head.to_ascii_lowercase())
                .ok_or_else(|| Error::UserInput(format!("Unknown material '{}'", text)))?,
        };
        Ok(Material::new(base.kind, data.unwrap_or(base.data)))
    }
}

/// Properties for one material kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialProperties {
    pub name: &'static str,
    pub kind: u16,
    pub solid: bool,
    pub liquid: bool,
}

const fn props(name: &'static str, kind: u16, solid: bool, liquid: bool) -> MaterialProperties {
    MaterialProperties { name, kind, solid, liquid }
}

/// Built-in material table.
#[derive(Clone, Debug)]
pub struct StandardMaterials {
    by_kind: HashMap<u16, MaterialProperties>,
    by_name: HashMap<&'static str, u16>,
}

impl StandardMaterials {
    pub const STONE: Material = Material::kind(1);
    pub const GRASS: Material = Material::kind(2);
    pub const DIRT: Material = Material::kind(3);
    pub const COBBLESTONE: Material = Material::kind(4);
    pub const PLANKS: Material = Material::kind(5);
    pub const WATER: Material = Material::kind(9);
    pub const LAVA: Material = Material::kind(11);
    pub const SAND: Material = Material::kind(12);
    pub const GRAVEL: Material = Material::kind(13);
    pub const LEAVES: Material = Material::kind(18);
    pub const GLASS: Material = Material::kind(20);
    pub const WOOL: Material = Material::kind(35);
    pub const TALL_GRASS: Material = Material::kind(31);
    pub const SNOW: Material = Material::kind(80);

    pub fn new() -> Self {
        let table = [
            props("air", 0, false, false),
            props("stone", 1, true, false),
            props("grass", 2, true, false),
            props("dirt", 3, true, false),
            props("cobblestone", 4, true, false),
            props("planks", 5, true, false),
            props("water", 9, false, true),
            props("lava", 11, false, true),
            props("sand", 12, true, false),
            props("gravel", 13, true, false),
            props("leaves", 18, true, false),
            props("glass", 20, true, false),
            props("tallgrass", 31, false, false),
            props("wool", 35, true, false),
            props("snow", 80, true, false),
        ];
        let mut registry = Self {
            by_kind: HashMap::new(),
            by_name: HashMap::new(),
        };
        for entry in table {
            registry.register(entry);
        }
        registry
    }

    /// Add or replace a material kind.
    pub fn register(&mut self, properties: MaterialProperties) {
        self.by_name.insert(properties.name, properties.kind);
        self.by_kind.insert(properties.kind, properties);
    }

    pub fn properties(&self, material: Material) -> Option<&MaterialProperties> {
        self.by_kind.get(&material.kind)
    }
}

impl Default for StandardMaterials {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialRegistry for StandardMaterials {
    fn is_solid(&self, material: Material) -> bool {
        self.properties(material).is_some_and(|p| p.solid)
    }

    fn is_liquid(&self, material: Material) -> bool {
        self.properties(material).is_some_and(|p| p.liquid)
    }

    fn lookup(&self, name: &str) -> Option<Material> {
        self.by_name.get(name).map(|kind| Material::kind(*kind))
    }
}
