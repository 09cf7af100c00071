//! Habitat module types and their static specification table.

use crate::models::RgbColor;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive shape the display layer uses to draw a module.
///
/// Collision never looks at the shape: a cylinder is treated as its
/// enclosing box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned box
    Box,
    /// Cylinder standing on its axis
    Cylinder,
}

/// The fixed enumeration of placeable module types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleType {
    /// Crew sleeping quarters
    Dormitory,
    /// Environmental control and life support (ECLSS)
    #[serde(alias = "eclss")]
    LifeSupport,
    /// Science laboratory
    Laboratory,
    /// Pressurized logistics storage
    Storage,
    /// EVA airlock
    Airlock,
    /// Bioregenerative food production
    Greenhouse,
}

/// Static, read-only specification of a module type.
///
/// Base figures are for scale 1.0; instances multiply them by `scale^3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModuleSpec {
    /// Human-readable name shown in panels
    pub display_name: &'static str,
    /// Base hardware cost in millions
    pub base_cost: f64,
    /// Base mass in kilograms
    pub base_mass: f64,
    /// Base pressurized volume in cubic metres
    pub base_volume: f64,
    /// Render color
    pub color: RgbColor,
    /// Render primitive
    pub shape: Shape,
}

const DORMITORY: ModuleSpec = ModuleSpec {
    display_name: "Crew Quarters",
    base_cost: 45.0,
    base_mass: 8000.0,
    base_volume: 120.0,
    color: RgbColor::new(0x4A, 0x90, 0xD9),
    shape: Shape::Box,
};

const LIFE_SUPPORT: ModuleSpec = ModuleSpec {
    display_name: "ECLSS Module",
    base_cost: 150.0,
    base_mass: 12000.0,
    base_volume: 80.0,
    color: RgbColor::new(0x50, 0xC8, 0x78),
    shape: Shape::Cylinder,
};

const LABORATORY: ModuleSpec = ModuleSpec {
    display_name: "Science Laboratory",
    base_cost: 120.0,
    base_mass: 10000.0,
    base_volume: 100.0,
    color: RgbColor::new(0xF5, 0xA6, 0x23),
    shape: Shape::Box,
};

const STORAGE: ModuleSpec = ModuleSpec {
    display_name: "Logistics Storage",
    base_cost: 25.0,
    base_mass: 5000.0,
    base_volume: 90.0,
    color: RgbColor::new(0x9B, 0x9B, 0x9B),
    shape: Shape::Box,
};

const AIRLOCK: ModuleSpec = ModuleSpec {
    display_name: "Airlock",
    base_cost: 60.0,
    base_mass: 4000.0,
    base_volume: 30.0,
    color: RgbColor::new(0xD0, 0x02, 0x1B),
    shape: Shape::Cylinder,
};

const GREENHOUSE: ModuleSpec = ModuleSpec {
    display_name: "Bioregenerative Greenhouse",
    base_cost: 90.0,
    base_mass: 9000.0,
    base_volume: 110.0,
    color: RgbColor::new(0x7E, 0xD3, 0x21),
    shape: Shape::Cylinder,
};

impl ModuleType {
    /// Every module type, in palette order.
    pub const ALL: [Self; 6] = [
        Self::Dormitory,
        Self::LifeSupport,
        Self::Laboratory,
        Self::Storage,
        Self::Airlock,
        Self::Greenhouse,
    ];

    /// Looks up the static specification for this type.
    #[must_use]
    pub const fn spec(self) -> &'static ModuleSpec {
        match self {
            Self::Dormitory => &DORMITORY,
            Self::LifeSupport => &LIFE_SUPPORT,
            Self::Laboratory => &LABORATORY,
            Self::Storage => &STORAGE,
            Self::Airlock => &AIRLOCK,
            Self::Greenhouse => &GREENHOUSE,
        }
    }

    /// Stable kebab-case identifier (matches the serialized form).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dormitory => "dormitory",
            Self::LifeSupport => "life-support",
            Self::Laboratory => "laboratory",
            Self::Storage => "storage",
            Self::Airlock => "airlock",
            Self::Greenhouse => "greenhouse",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "dormitory" => Ok(Self::Dormitory),
            "life-support" | "eclss" => Ok(Self::LifeSupport),
            "laboratory" => Ok(Self::Laboratory),
            "storage" => Ok(Self::Storage),
            "airlock" => Ok(Self::Airlock),
            "greenhouse" => Ok(Self::Greenhouse),
            _ => {
                let known: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                anyhow::bail!(
                    "Unknown module type '{}'. Expected one of: {}",
                    s,
                    known.join(", ")
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_table_reference_values() {
        let dorm = ModuleType::Dormitory.spec();
        assert_eq!(dorm.base_cost, 45.0);
        assert_eq!(dorm.base_mass, 8000.0);
        assert_eq!(dorm.base_volume, 120.0);
        assert_eq!(dorm.shape, Shape::Box);

        let eclss = ModuleType::LifeSupport.spec();
        assert_eq!(eclss.base_cost, 150.0);
        assert_eq!(eclss.base_mass, 12000.0);
        assert_eq!(eclss.base_volume, 80.0);
        assert_eq!(eclss.shape, Shape::Cylinder);
    }

    #[test]
    fn test_every_type_has_positive_base_figures() {
        for module_type in ModuleType::ALL {
            let spec = module_type.spec();
            assert!(spec.base_cost > 0.0, "{module_type} cost");
            assert!(spec.base_mass > 0.0, "{module_type} mass");
            assert!(spec.base_volume > 0.0, "{module_type} volume");
            assert!(!spec.display_name.is_empty());
        }
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("dormitory".parse::<ModuleType>().unwrap(), ModuleType::Dormitory);
        assert_eq!("ECLSS".parse::<ModuleType>().unwrap(), ModuleType::LifeSupport);
        assert_eq!("life_support".parse::<ModuleType>().unwrap(), ModuleType::LifeSupport);
        assert!("hangar".parse::<ModuleType>().is_err());
    }

    #[test]
    fn test_display_matches_serde_name() {
        for module_type in ModuleType::ALL {
            let json = serde_json::to_string(&module_type).unwrap();
            assert_eq!(json, format!("\"{module_type}\""));
        }
        let parsed: ModuleType = serde_json::from_str("\"eclss\"").unwrap();
        assert_eq!(parsed, ModuleType::LifeSupport);
    }
}
