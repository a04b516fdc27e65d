//! Name and alias lookup over brushes.

use std::collections::HashMap;

use crate::core::{Error, types::Result};
use super::effect::{BlendBrush, ErodeBrush, OverlayBrush, SplatterBrush};
use super::mask::{CheckerBrush, FlattenBrush, MaterialMaskBrush, RandomMaskBrush, SplatterMaskBrush};
use super::primitive::{BallBrush, CuboidBrush, CylinderBrush, EllipsoidBrush};
use super::{Brush, BrushKind};

/// Registered brushes
#[derive(Default)]
pub struct BrushRegistry {
    /// All brushes in registration order
    brushes: Vec<Box<dyn Brush>>,
    /// Lowercase name or alias -> index into `brushes`
    by_name: HashMap<String, usize>,
}

impl BrushRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in brush.
    pub fn with_builtins() -> Self {
        let builtins: Vec<Box<dyn Brush>> = vec![
            Box::new(BallBrush),
            Box::new(EllipsoidBrush),
            Box::new(CylinderBrush),
            Box::new(CuboidBrush),
            Box::new(CheckerBrush),
            Box::new(FlattenBrush),
            Box::new(MaterialMaskBrush),
            Box::new(RandomMaskBrush),
            Box::new(SplatterMaskBrush),
            Box::new(ErodeBrush),
            Box::new(BlendBrush),
            Box::new(OverlayBrush),
            Box::new(SplatterBrush),
        ];
        let mut registry = Self::new();
        for brush in builtins {
            if let Err(err) = registry.register(brush) {
                log::error!("Built-in brush rejected: {}", err);
            }
        }
        registry
    }

    /// Add a brush. Fails if its name or any alias is already taken.
    pub fn register(&mut self, brush: Box<dyn Brush>) -> Result<()> {
        let info = *brush.info();
        let keys: Vec<String> = std::iter::once(info.name)
            .chain(info.aliases.iter().copied())
            .map(str::to_lowercase)
            .collect();
        if let Some(taken) = keys.iter().find(|k| self.by_name.contains_key(*k)) {
            return Err(Error::Argument(format!(
                "brush name '{}' is already registered",
                taken
            )));
        }

        let index = self.brushes.len();
        for key in keys {
            self.by_name.insert(key, index);
        }
        log::debug!("Registered brush '{}' ({:?})", info.name, info.kind);
        self.brushes.push(brush);
        Ok(())
    }

    /// Look up a brush by name or alias, ignoring case.
    pub fn get(&self, name: &str) -> Option<&dyn Brush> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&i| self.brushes[i].as_ref())
    }

    /// Like [`Self::get`], but unknown names are user errors.
    pub fn resolve(&self, name: &str) -> Result<&dyn Brush> {
        self.get(name)
            .ok_or_else(|| Error::UserInput(format!("Unknown brush '{}'", name)))
    }

    /// Primary names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.brushes.iter().map(|b| b.info().name)
    }

    /// Primary names of every brush of one kind.
    pub fn names_of(&self, kind: BrushKind) -> Vec<&'static str> {
        self.brushes
            .iter()
            .filter(|b| b.info().kind == kind)
            .map(|b| b.info().name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = BrushRegistry::with_builtins();
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.names_of(BrushKind::Shape), ["ball", "ellipsoid", "cylinder", "cuboid"]);
        assert_eq!(
            registry.names_of(BrushKind::Mask),
            ["checker", "flatten", "materialmask", "random", "splattermask"]
        );
        assert_eq!(registry.names_of(BrushKind::Effect), ["erode", "blend", "overlay", "splatter"]);
    }

    #[test]
    fn test_lookup_by_alias_and_case() {
        let registry = BrushRegistry::with_builtins();
        assert_eq!(registry.get("SPHERE").map(|b| b.info().name), Some("ball"));
        assert_eq!(registry.get("smooth").map(|b| b.info().name), Some("blend"));
        assert!(registry.get("nope").is_none());
        assert!(registry.resolve("nope").unwrap_err().is_recoverable());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = BrushRegistry::with_builtins();
        let err = registry.register(Box::new(BallBrush)).unwrap_err();
        assert!(matches!(err, Error::Argument(_)));
        assert_eq!(registry.len(), 13);
    }
}
