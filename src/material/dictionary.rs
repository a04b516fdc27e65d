//! Per-shape material dictionary.
//!
//! Materials get small integer ids in first-use order. Id 0 always names the
//! current default material. Ids are never reused or freed.

use std::collections::HashMap;

use crate::core::{Error, types::Result};
use super::Material;

/// Stored id meaning "no material recorded at this voxel".
pub const NO_MATERIAL: u16 = u16::MAX;

/// Bidirectional id <-> material map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialDictionary {
    /// Indexed by id
    materials: Vec<Material>,
    /// Inverse of `materials`
    ids: HashMap<Material, u16>,
}

impl MaterialDictionary {
    /// Create a dictionary whose id 0 is `default`.
    pub fn new(default: Material) -> Self {
        let mut ids = HashMap::new();
        ids.insert(default, 0);
        Self {
            materials: vec![default],
            ids,
        }
    }

    /// Id for `material`, registering it on first use.
    pub fn id_for(&mut self, material: Material) -> Result<u16> {
        if let Some(id) = self.ids.get(&material) {
            return Ok(*id);
        }
        let next_id = self.materials.len();
        if next_id >= NO_MATERIAL as usize {
            return Err(Error::Argument(format!(
                "material dictionary full, cannot register {}",
                material
            )));
        }
        let id = next_id as u16;
        self.materials.push(material);
        self.ids.insert(material, id);
        Ok(id)
    }

    /// Id for `material` without registering it.
    pub fn lookup_id(&self, material: Material) -> Option<u16> {
        self.ids.get(&material).copied()
    }

    pub fn material_for(&self, id: u16) -> Option<Material> {
        self.materials.get(id as usize).copied()
    }

    pub fn default_material(&self) -> Material {
        self.materials[0]
    }

    /// Make `material` the holder of id 0.
    ///
    /// The previous default moves to the id `material` held (or to a freshly
    /// allocated id). Returns that id, or `None` when nothing changed.
    pub fn promote_to_default(&mut self, material: Material) -> Result<Option<u16>> {
        let old_default = self.default_material();
        if old_default == material {
            return Ok(None);
        }
        let id = self.id_for(material)?;
        self.materials.swap(0, id as usize);
        self.ids.insert(material, 0);
        self.ids.insert(old_default, id);
        Ok(Some(id))
    }

    /// Number of registered materials (next id to be assigned).
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Registered materials in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Material)> + '_ {
        self.materials.iter().enumerate().map(|(id, m)| (id as u16, *m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_or_get() {
        let mut dict = MaterialDictionary::new(Material::AIR);
        let stone = Material::kind(1);
        assert_eq!(dict.id_for(stone).unwrap(), 1);
        assert_eq!(dict.id_for(stone).unwrap(), 1);
        assert_eq!(dict.id_for(Material::AIR).unwrap(), 0);
        assert_eq!(dict.material_for(1), Some(stone));
        assert_eq!(dict.material_for(2), None);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_ids_monotonic() {
        let mut dict = MaterialDictionary::new(Material::AIR);
        let ids: Vec<u16> = (1..=10)
            .map(|k| dict.id_for(Material::kind(k)).unwrap())
            .collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u16>>());
    }

    #[test]
    fn test_promote_existing() {
        let mut dict = MaterialDictionary::new(Material::AIR);
        let stone = Material::kind(1);
        let dirt = Material::kind(3);
        dict.id_for(stone).unwrap();
        dict.id_for(dirt).unwrap();

        assert_eq!(dict.promote_to_default(dirt).unwrap(), Some(2));
        assert_eq!(dict.default_material(), dirt);
        assert_eq!(dict.material_for(2), Some(Material::AIR));
        assert_eq!(dict.lookup_id(Material::AIR), Some(2));
        assert_eq!(dict.lookup_id(dirt), Some(0));
        assert_eq!(dict.lookup_id(stone), Some(1));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_promote_new_and_noop() {
        let mut dict = MaterialDictionary::new(Material::AIR);
        let sand = Material::kind(12);
        assert_eq!(dict.promote_to_default(sand).unwrap(), Some(1));
        assert_eq!(dict.default_material(), sand);
        assert_eq!(dict.promote_to_default(sand).unwrap(), None);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_capacity() {
        let mut dict = MaterialDictionary::new(Material::AIR);
        for i in 1..NO_MATERIAL as u32 {
            let m = Material::new((i >> 8) as u16, (i & 0xFF) as u8);
            dict.id_for(m).unwrap();
        }
        assert_eq!(dict.len(), NO_MATERIAL as usize);
        let overflow = Material::new(1000, 0);
        assert!(matches!(dict.id_for(overflow), Err(Error::Argument(_))));
    }
}
