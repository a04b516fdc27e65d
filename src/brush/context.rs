//! Per-invocation brush state: target, arguments, chain outputs, randomness.

use glam::IVec3;

use crate::config::BrushDefaults;
use crate::core::{Error, types::Result};
use crate::material::{ComplexMaterialShape, Material, MaterialRegistry, MaterialShape};
use crate::math::SimpleRng;
use crate::shape::Shape;
use crate::world::WorldView;
use super::params::{Param, ParamStore};

/// Store context holding the outputs of chain steps.
pub const CHAIN: &str = "chain";
/// Key of the current selection.
pub const SHAPE_KEY: &str = "shape";
/// Key of the current material result.
pub const MATERIALS_KEY: &str = "materials";

/// State threaded through one brush chain invocation.
pub struct BrushContext {
    /// World position the selection's origin is anchored at
    pub target: IVec3,
    pub params: ParamStore,
    pub defaults: BrushDefaults,
    rng: SimpleRng,
}

impl BrushContext {
    /// Seeds from `defaults.seed`, or fresh entropy when unset.
    pub fn new(target: IVec3, defaults: BrushDefaults) -> Self {
        let rng = defaults
            .seed
            .map(SimpleRng::new)
            .unwrap_or_else(SimpleRng::from_entropy);
        Self {
            target,
            params: ParamStore::new(),
            defaults,
            rng,
        }
    }

    pub fn rng(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }

    /// Set a brush argument.
    pub fn arg(&mut self, brush: &str, key: &str, value: impl Into<serde_json::Value>) -> &mut Self {
        self.params.set(brush, key, value);
        self
    }

    /// Numeric argument, falling back to `default` when missing or malformed.
    pub fn f64_or(&self, brush: &str, key: &str, default: f64) -> f64 {
        match self.params.number(brush, key) {
            None => default,
            Some(Ok(value)) => value,
            Some(Err(raw)) => fallback(brush, key, &raw, default),
        }
    }

    /// Probability argument; values outside [0, 1] count as malformed.
    pub fn unit_or(&self, brush: &str, key: &str, default: f64) -> f64 {
        match self.params.number(brush, key) {
            None => default,
            Some(Ok(value)) if (0.0..=1.0).contains(&value) => value,
            Some(Ok(value)) => fallback(brush, key, &value.to_string(), default),
            Some(Err(raw)) => fallback(brush, key, &raw, default),
        }
    }

    /// Non-negative integer argument.
    pub fn u32_or(&self, brush: &str, key: &str, default: u32) -> u32 {
        match self.params.number(brush, key) {
            None => default,
            Some(Ok(value)) if value >= 0.0 && value <= u32::MAX as f64 && value.fract() == 0.0 => value as u32,
            Some(Ok(value)) => fallback(brush, key, &value.to_string(), default),
            Some(Err(raw)) => fallback(brush, key, &raw, default),
        }
    }

    /// Strictly positive integer argument.
    pub fn positive_or(&self, brush: &str, key: &str, default: u32) -> u32 {
        match self.u32_or(brush, key, default) {
            0 => fallback(brush, key, "0", default),
            value => value,
        }
    }

    pub fn i32_or(&self, brush: &str, key: &str, default: i32) -> i32 {
        match self.params.number(brush, key) {
            None => default,
            Some(Ok(value)) if value.fract() == 0.0 && value.abs() <= i32::MAX as f64 => value as i32,
            Some(Ok(value)) => fallback(brush, key, &value.to_string(), default),
            Some(Err(raw)) => fallback(brush, key, &raw, default),
        }
    }

    pub fn bool_or(&self, brush: &str, key: &str, default: bool) -> bool {
        match self.params.flag(brush, key) {
            None => default,
            Some(Ok(value)) => value,
            Some(Err(raw)) => fallback(brush, key, &raw, default),
        }
    }

    /// Material argument resolved through `registry`; unknown names are user errors.
    pub fn material(&self, brush: &str, key: &str, registry: &dyn MaterialRegistry) -> Result<Option<Material>> {
        self.params
            .text(brush, key)
            .map(|text| registry.parse(&text))
            .transpose()
    }

    /// Like [`Self::material`] but falling back to the configured paint material.
    pub fn paint_material(&self, brush: &str, registry: &dyn MaterialRegistry) -> Result<Material> {
        match self.material(brush, "material", registry)? {
            Some(material) => Ok(material),
            None => registry.parse(&self.defaults.paint_material),
        }
    }

    pub fn shape(&self) -> Option<&dyn Shape> {
        self.params.shape(CHAIN, SHAPE_KEY)
    }

    /// The current selection, or a user error if no step produced one.
    pub fn require_shape(&self) -> Result<&dyn Shape> {
        self.shape().ok_or_else(|| {
            Error::UserInput("No shape selected; run a shape brush first".into())
        })
    }

    pub fn material_shape(&self) -> Option<&dyn MaterialShape> {
        self.params.material_shape(CHAIN, MATERIALS_KEY)
    }

    /// Replace the selection. Any material result belongs to the old selection and is dropped.
    pub fn put_shape(&mut self, shape: Box<dyn Shape>) {
        self.params.remove(CHAIN, MATERIALS_KEY);
        self.params.put(CHAIN, SHAPE_KEY, Param::Shape(shape));
    }

    /// Store a material result; its shape becomes the selection.
    pub fn put_material_shape(&mut self, materials: Box<dyn MaterialShape>) {
        self.params.put(CHAIN, SHAPE_KEY, Param::Shape(materials.shape().clone_box()));
        self.params.put(CHAIN, MATERIALS_KEY, Param::Materials(materials));
    }

    /// Input for an effect brush: the previous material result, or a fresh
    /// snapshot of the world under the current selection.
    pub fn effect_input(&self, world: &dyn WorldView) -> Result<ComplexMaterialShape> {
        match self.material_shape() {
            Some(materials) => materials.to_complex_materials(),
            None => world.snapshot(self.target, self.require_shape()?),
        }
    }
}

fn fallback<T: std::fmt::Display>(brush: &str, key: &str, raw: &str, default: T) -> T {
    log::warn!(
        "Brush '{}': invalid value {} for '{}', using default {}",
        brush, raw, key, default
    );
    default
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{SingleMaterialShape, StandardMaterials};
    use crate::shape::Cuboid;

    fn ctx() -> BrushContext {
        BrushContext::new(IVec3::ZERO, BrushDefaults::default())
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let mut ctx = ctx();
        ctx.arg("random", "chance", "abc")
            .arg("splatter", "growth", 1.5)
            .arg("erode", "erode", -2)
            .arg("checker", "width", 0)
            .arg("checker", "x", 2.5);
        assert_eq!(ctx.f64_or("random", "chance", 0.5), 0.5);
        assert_eq!(ctx.unit_or("splatter", "growth", 0.1), 0.1);
        assert_eq!(ctx.u32_or("erode", "erode", 3), 3);
        assert_eq!(ctx.positive_or("checker", "width", 1), 1);
        assert_eq!(ctx.i32_or("checker", "x", 0), 0);
    }

    #[test]
    fn test_wellformed_numbers() {
        let mut ctx = ctx();
        ctx.arg("random", "chance", "0.3").arg("checker", "x", -4).arg("erode", "fill", 5);
        assert_eq!(ctx.unit_or("random", "chance", 0.5), 0.3);
        assert_eq!(ctx.i32_or("checker", "x", 0), -4);
        assert_eq!(ctx.u32_or("erode", "fill", 3), 5);
        assert!(!ctx.bool_or("mask", "wildcard", false));
    }

    #[test]
    fn test_material_arguments() {
        let registry = StandardMaterials::new();
        let mut ctx = ctx();
        assert_eq!(ctx.material("mask", "material", &registry).unwrap(), None);
        assert_eq!(ctx.paint_material("overlay", &registry).unwrap(), StandardMaterials::GRASS);

        ctx.arg("mask", "material", "sand");
        assert_eq!(ctx.material("mask", "material", &registry).unwrap(), Some(StandardMaterials::SAND));

        ctx.arg("mask", "material", "nope");
        assert!(matches!(ctx.material("mask", "material", &registry), Err(Error::UserInput(_))));
    }

    #[test]
    fn test_require_shape() {
        let mut ctx = ctx();
        assert!(matches!(ctx.require_shape(), Err(Error::UserInput(_))));
        ctx.put_shape(Box::new(Cuboid::new(1, 1, 1).unwrap()));
        assert!(ctx.require_shape().is_ok());
    }

    #[test]
    fn test_put_shape_drops_stale_materials() {
        let mut ctx = ctx();
        let painted = SingleMaterialShape::new(Box::new(Cuboid::new(2, 1, 1).unwrap()), StandardMaterials::STONE);
        ctx.put_material_shape(Box::new(painted));
        assert_eq!(ctx.shape().map(|s| s.count_set()), Some(2));
        assert!(ctx.material_shape().is_some());

        ctx.put_shape(Box::new(Cuboid::new(1, 1, 1).unwrap()));
        assert!(ctx.material_shape().is_none());
    }

    #[test]
    fn test_seeded_context_is_reproducible() {
        let defaults = BrushDefaults { seed: Some(11), ..BrushDefaults::default() };
        let mut a = BrushContext::new(IVec3::ZERO, defaults.clone());
        let mut b = BrushContext::new(IVec3::ZERO, defaults);
        assert_eq!(a.rng().next_u32(), b.rng().next_u32());
    }
}
