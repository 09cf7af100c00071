//! Placed module instances and their geometry primitives.

use crate::models::ModuleType;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, stable identifier of a placed module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(Uuid);

impl ModuleId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ModuleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ModuleId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// One of the three coordinate axes.
///
/// For rotations the axes map to pitch (x), yaw (y) and roll (z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis (pitch)
    X,
    /// Y axis (yaw)
    Y,
    /// Z axis (roll)
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

impl FromStr for Axis {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "pitch" => Ok(Self::X),
            "y" | "yaw" => Ok(Self::Y),
            "z" | "roll" => Ok(Self::Z),
            other => anyhow::bail!("Unknown axis '{other}'. Expected x, y or z"),
        }
    }
}

/// Point or angle triple in continuous 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Reads one component.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns a copy with one component replaced.
    #[must_use]
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }
}

/// A placed instance of a module type.
///
/// `cost`, `mass` and `volume` are cached from the type's base figures times
/// `scale^3`. They are only ever written through [`Module::set_scale`] (or on
/// construction) and never edited on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Stable identifier
    pub id: ModuleId,
    /// Module type
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// Centre of the module
    pub position: Vec3,
    /// Pitch/yaw/roll in radians (cosmetic only)
    pub rotation: Vec3,
    /// Uniform scale multiplier
    pub scale: f64,
    /// Hardware cost in millions
    pub cost: f64,
    /// Mass in kilograms
    pub mass: f64,
    /// Pressurized volume in cubic metres
    pub volume: f64,
}

impl Module {
    /// Creates a module of the given type at the origin with scale 1.
    #[must_use]
    pub fn new(module_type: ModuleType) -> Self {
        Self::with_id(ModuleId::new(), module_type)
    }

    /// Creates a module with a caller-chosen id (fixtures, loading).
    #[must_use]
    pub fn with_id(id: ModuleId, module_type: ModuleType) -> Self {
        let spec = module_type.spec();
        Self {
            id,
            module_type,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            cost: spec.base_cost,
            mass: spec.base_mass,
            volume: spec.base_volume,
        }
    }

    /// Places the module at `position` (builder style, no collision check).
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the scale and recomputes the cached figures from the static
    /// specification, never from the previous instance values.
    pub fn set_scale(&mut self, scale: f64) {
        let spec = self.module_type.spec();
        let factor = scale.powi(3);
        self.scale = scale;
        self.cost = spec.base_cost * factor;
        self.mass = spec.base_mass * factor;
        self.volume = spec.base_volume * factor;
    }

    /// Sets one rotation component from a value in degrees.
    pub fn set_rotation_degrees(&mut self, axis: Axis, degrees: f64) {
        self.rotation = self.rotation.with(axis, degrees.to_radians());
    }

    /// Reads one rotation component back in degrees.
    #[must_use]
    pub fn rotation_degrees(&self, axis: Axis) -> f64 {
        self.rotation.get(axis).to_degrees()
    }

    /// Short id prefix for list display.
    #[must_use]
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(8).collect()
    }
}
