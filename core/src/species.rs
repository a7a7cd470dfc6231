//! Species preference profiles and the built-in catalog.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::DepthLayer;

/// Habitat preferences of a single species. Every weight lies in [0, 1].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeciesProfile {
    name: String,
    description: String,
    depth_preference: Vec<f64>,
    coastal: f64,
    plankton: f64,
    eddy: f64,
}

impl SpeciesProfile {
    /// Creates a validated profile.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        depth_preference: Vec<f64>,
        coastal: f64,
        plankton: f64,
        eddy: f64,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if depth_preference.is_empty() {
            return Err(ProfileError::NoDepthPreferences { name });
        }
        for (index, weight) in depth_preference.iter().copied().enumerate() {
            check_weight(&name, &format!("depth_preference[{index}]"), weight)?;
        }
        check_weight(&name, "coastal", coastal)?;
        check_weight(&name, "plankton", plankton)?;
        check_weight(&name, "eddy", eddy)?;

        Ok(Self {
            name,
            description: description.into(),
            depth_preference,
            coastal,
            plankton,
            eddy,
        })
    }

    fn from_record(record: &SpeciesRecord) -> Self {
        Self {
            name: record.name.to_owned(),
            description: record.description.to_owned(),
            depth_preference: record.depth_preference.to_vec(),
            coastal: record.coastal,
            plankton: record.plankton,
            eddy: record.eddy,
        }
    }

    /// Catalog name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line behavioural summary.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Innate affinity for each depth layer, surface first.
    #[must_use]
    pub fn depth_preference(&self) -> &[f64] {
        &self.depth_preference
    }

    /// Affinity for a single layer. Layers the profile does not describe contribute nothing.
    #[must_use]
    pub fn layer_preference(&self, layer: DepthLayer) -> f64 {
        self.depth_preference
            .get(layer.index())
            .copied()
            .unwrap_or(0.0)
    }

    /// Weight applied to coastal proximity.
    #[must_use]
    pub const fn coastal(&self) -> f64 {
        self.coastal
    }

    /// Weight applied to plankton abundance.
    #[must_use]
    pub const fn plankton(&self) -> f64 {
        self.plankton
    }

    /// Weight applied to eddy strength.
    #[must_use]
    pub const fn eddy(&self) -> f64 {
        self.eddy
    }

    /// Theoretical maximum suitability: the best depth affinity plus every
    /// environmental weight at full strength.
    #[must_use]
    pub fn max_suitability(&self) -> f64 {
        let best_depth = self
            .depth_preference
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        best_depth + self.coastal + self.plankton + self.eddy
    }
}

fn check_weight(name: &str, field: &str, value: f64) -> Result<(), ProfileError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ProfileError::WeightOutOfRange {
            name: name.to_owned(),
            field: field.to_owned(),
            value,
        })
    }
}

/// Reasons a species profile can be refused.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ProfileError {
    /// The profile has no name.
    #[error("species name must not be empty")]
    EmptyName,
    /// The profile carries no depth preferences.
    #[error("species `{name}` has no depth preferences")]
    NoDepthPreferences {
        /// Species name.
        name: String,
    },
    /// A weight lies outside [0, 1] or is NaN.
    #[error("species `{name}` has {field} = {value}, expected a value in [0, 1]")]
    WeightOutOfRange {
        /// Species name.
        name: String,
        /// Offending field.
        field: String,
        /// Offending value.
        value: f64,
    },
}

/// Immutable, alphabetically ordered collection of species profiles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpeciesCatalog {
    profiles: BTreeMap<String, SpeciesProfile>,
}

impl SpeciesCatalog {
    /// Catalog containing every species known to the model.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_profiles(BUILTIN_SPECIES.iter().map(SpeciesProfile::from_record))
    }

    /// Builds a catalog from profiles. Later profiles replace earlier ones with the same name.
    pub fn from_profiles<I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = SpeciesProfile>,
    {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.name.clone(), profile))
                .collect(),
        }
    }

    /// Adds the other catalog's profiles, replacing entries with matching names.
    pub fn merge(&mut self, other: SpeciesCatalog) {
        self.profiles.extend(other.profiles);
    }

    /// Looks up a profile by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SpeciesProfile> {
        self.profiles.get(name)
    }

    /// Profile at a zero-based position of the alphabetical menu.
    #[must_use]
    pub fn by_position(&self, position: usize) -> Option<&SpeciesProfile> {
        self.profiles.values().nth(position)
    }

    /// Iterates profiles in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesProfile> {
        self.profiles.values()
    }

    /// Species names in menu order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Reports whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

struct SpeciesRecord {
    name: &'static str,
    description: &'static str,
    depth_preference: [f64; 3],
    coastal: f64,
    plankton: f64,
    eddy: f64,
}

const BUILTIN_SPECIES: &[SpeciesRecord] = &[
    SpeciesRecord {
        name: "Great white shark",
        description: "Pelagic deep-forager. Uses warm eddies (SWOT) as thermal conduits to access cold, deep prey (Twilight Zone).",
        depth_preference: [0.1, 0.4, 1.0],
        coastal: 0.1,
        plankton: 0.4,
        eddy: 1.0,
    },
    SpeciesRecord {
        name: "Tiger shark",
        description: "Coastal-pelagic generalist. Favors highly productive, warmer, shallow regions (PACE/MODIS).",
        depth_preference: [0.9, 0.6, 0.1],
        coastal: 0.8,
        plankton: 0.9,
        eddy: 0.3,
    },
    SpeciesRecord {
        name: "Bull shark",
        description: "Euryhaline species. Strongest preference for shallow, coastal regions (low salinity areas/estuaries).",
        depth_preference: [1.0, 0.2, 0.0],
        coastal: 1.0,
        plankton: 0.6,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "Shortfin mako shark",
        description: "Fast pelagic predator. Migrates long distances, follows productive oceanic fronts.",
        depth_preference: [0.3, 0.9, 0.5],
        coastal: 0.2,
        plankton: 0.8,
        eddy: 0.6,
    },
    SpeciesRecord {
        name: "Longfin mako shark",
        description: "Warm-water pelagic species, prefers deep offshore waters.",
        depth_preference: [0.2, 0.7, 0.8],
        coastal: 0.1,
        plankton: 0.7,
        eddy: 0.7,
    },
    SpeciesRecord {
        name: "Porbeagle shark",
        description: "Cold-temperate water species, often found near continental shelves and banks.",
        depth_preference: [0.5, 0.8, 0.3],
        coastal: 0.4,
        plankton: 0.7,
        eddy: 0.5,
    },
    SpeciesRecord {
        name: "Salmon shark",
        description: "North Pacific predator, follows salmon migrations, favors temperate surface waters.",
        depth_preference: [0.8, 0.6, 0.1],
        coastal: 0.5,
        plankton: 0.8,
        eddy: 0.4,
    },
    SpeciesRecord {
        name: "Whale shark",
        description: "Largest filter feeder, strictly planktonic. Strong preference for warm, highly productive surface waters.",
        depth_preference: [1.0, 0.6, 0.0],
        coastal: 0.3,
        plankton: 1.0,
        eddy: 0.5,
    },
    SpeciesRecord {
        name: "Basking shark",
        description: "Cosmopolitan filter feeder, often near coastlines and upwelling zones.",
        depth_preference: [1.0, 0.7, 0.1],
        coastal: 0.6,
        plankton: 1.0,
        eddy: 0.3,
    },
    SpeciesRecord {
        name: "Sharpnose sevengill shark (Gill Seer)",
        description: "Deep-water scavenger and hunter, prefers continental slopes.",
        depth_preference: [0.0, 0.3, 1.0],
        coastal: 0.1,
        plankton: 0.1,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "Bluntnose sixgill shark (The Deep Titan)",
        description: "Largest deep-sea shark, prefers deep benthic habitats.",
        depth_preference: [0.0, 0.1, 1.0],
        coastal: 0.0,
        plankton: 0.0,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Broadnose sevengill shark (The Primeval Beast)",
        description: "Coastal to shelf-break species, known for aggressive hunting.",
        depth_preference: [0.4, 0.7, 0.5],
        coastal: 0.7,
        plankton: 0.3,
        eddy: 0.2,
    },
    SpeciesRecord {
        name: "Bigeyed sixgill shark (Ancient Watche_ Green Lantern)",
        description: "Very deep water species, found on seamounts and mid-ocean ridges.",
        depth_preference: [0.0, 0.0, 1.0],
        coastal: 0.0,
        plankton: 0.0,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "Greenland shark",
        description: "Arctic predator. Extremely slow, favors deep, cold waters.",
        depth_preference: [0.1, 0.3, 1.0],
        coastal: 0.2,
        plankton: 0.1,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Velvet dogfish",
        description: "Benthic species of the upper continental slope.",
        depth_preference: [0.1, 0.5, 0.8],
        coastal: 0.3,
        plankton: 0.1,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "Bramble shark",
        description: "Rare, sluggish deep-water species. Benthic, deep continental shelf/slope.",
        depth_preference: [0.0, 0.4, 0.9],
        coastal: 0.2,
        plankton: 0.0,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Centroscyllium species (like the Black dogfish)",
        description: "Small, deep-water benthic sharks of the continental slope.",
        depth_preference: [0.0, 0.2, 1.0],
        coastal: 0.0,
        plankton: 0.0,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Spiny dogfish",
        description: "Small, widespread coastal shark. Highly migratory along shelves.",
        depth_preference: [0.8, 0.6, 0.2],
        coastal: 0.8,
        plankton: 0.6,
        eddy: 0.2,
    },
    SpeciesRecord {
        name: "Blue shark",
        description: "Highly migratory oceanic species. Prefers cooler, productive surface waters.",
        depth_preference: [0.7, 0.8, 0.4],
        coastal: 0.2,
        plankton: 0.9,
        eddy: 0.8,
    },
    SpeciesRecord {
        name: "Oceanic whitetip shark",
        description: "Tropical/subtropical oceanic apex predator, often found around strong currents/eddies.",
        depth_preference: [0.6, 0.9, 0.4],
        coastal: 0.1,
        plankton: 0.7,
        eddy: 0.9,
    },
    SpeciesRecord {
        name: "Blacktip reef shark",
        description: "Small, shallow-water reef specialist. Strongly coastal and shallow.",
        depth_preference: [1.0, 0.1, 0.0],
        coastal: 1.0,
        plankton: 0.7,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Leopard shark",
        description: "Coastal, temperate bottom-dweller, found in bays and estuaries.",
        depth_preference: [1.0, 0.3, 0.0],
        coastal: 0.9,
        plankton: 0.6,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "Nurse shark (cat shark)",
        description: "Sluggish, nocturnal benthic species, strong preference for coral reefs and mangroves.",
        depth_preference: [1.0, 0.1, 0.0],
        coastal: 1.0,
        plankton: 0.5,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Blind shark (Peekaboo Shark)",
        description: "Nocturnal, coastal benthic species, found in rocky reefs and kelp beds.",
        depth_preference: [1.0, 0.1, 0.0],
        coastal: 1.0,
        plankton: 0.5,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Bluegrey carpetshark (Ocean Tapestry)",
        description: "Small, benthic reef shark of tropical waters.",
        depth_preference: [1.0, 0.1, 0.0],
        coastal: 1.0,
        plankton: 0.5,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Cookiecutter shark",
        description: "Diel vertical migrator, specialized parasitic feeder, uses deep water for safety.",
        depth_preference: [0.5, 0.5, 0.9],
        coastal: 0.0,
        plankton: 0.3,
        eddy: 0.7,
    },
    SpeciesRecord {
        name: "Horn shark (Spiral Maker)",
        description: "Small, temperate, benthic ambush predator. Found on reefs and rocky bottom.",
        depth_preference: [1.0, 0.3, 0.0],
        coastal: 0.9,
        plankton: 0.4,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Whitespotted bullhead shark (Bullhead Phantom)",
        description: "Benthic coastal species, feeds on hard-shelled invertebrates.",
        depth_preference: [1.0, 0.2, 0.0],
        coastal: 0.9,
        plankton: 0.4,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Crested bullhead shark (Shellbreaker)",
        description: "Benthic coastal species, feeds on hard-shelled invertebrates.",
        depth_preference: [1.0, 0.2, 0.0],
        coastal: 0.9,
        plankton: 0.4,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Mexican hornshark (Pacific Ram)",
        description: "Benthic species of the eastern Pacific, feeds on small invertebrates.",
        depth_preference: [1.0, 0.3, 0.0],
        coastal: 0.9,
        plankton: 0.4,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Common Angel Shark (Squatina squatina)",
        description: "Flat, benthic ambush predator, prefers soft sediments near shore.",
        depth_preference: [0.9, 0.3, 0.0],
        coastal: 0.9,
        plankton: 0.5,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Australian Angel Shark (Squatina australis)",
        description: "Flat, benthic ambush predator, temperate Australian waters.",
        depth_preference: [0.9, 0.3, 0.0],
        coastal: 0.9,
        plankton: 0.5,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Clouded Angel Shark (Squatina nebulosa)",
        description: "Flat, benthic ambush predator, western Pacific shelf.",
        depth_preference: [0.9, 0.3, 0.0],
        coastal: 0.9,
        plankton: 0.5,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Brazilian Angel Shark (Squatina guggenheim)",
        description: "Flat, benthic ambush predator, shallow Atlantic shelf.",
        depth_preference: [0.9, 0.3, 0.0],
        coastal: 0.9,
        plankton: 0.5,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Pacific Angelshark (Squatina californica)",
        description: "Flat, benthic ambush predator, rocky and soft bottoms.",
        depth_preference: [0.9, 0.3, 0.0],
        coastal: 0.9,
        plankton: 0.5,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Smoothback Angelshark (Squatina oculata)",
        description: "Flat, benthic ambush predator, Eastern Atlantic and Mediterranean.",
        depth_preference: [0.9, 0.3, 0.0],
        coastal: 0.9,
        plankton: 0.5,
        eddy: 0.0,
    },
    SpeciesRecord {
        name: "Japanese Sawshark (Pristiophorus japonicus)",
        description: "Benthic shark of the continental shelf and slope, uses saw for hunting.",
        depth_preference: [0.7, 0.6, 0.3],
        coastal: 0.7,
        plankton: 0.4,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "African Dwarf Sawshark (Pristiophorus nancyae)",
        description: "Small, deep-water sawshark, continental slope.",
        depth_preference: [0.5, 0.7, 0.5],
        coastal: 0.4,
        plankton: 0.3,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "Longnose Sawshark (Pristiophorus nudipinnis)",
        description: "Benthic shark of the continental shelf and slope.",
        depth_preference: [0.7, 0.6, 0.3],
        coastal: 0.7,
        plankton: 0.4,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "Bahamas Sawshark (Pristiophorus schroederi)",
        description: "Deep-water species of the Caribbean and Bahamas.",
        depth_preference: [0.4, 0.7, 0.6],
        coastal: 0.3,
        plankton: 0.3,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "Sixgill Sawshark (Pliotrema warreni)",
        description: "Unique sixgill sawshark, continental shelf and slope.",
        depth_preference: [0.6, 0.8, 0.4],
        coastal: 0.4,
        plankton: 0.3,
        eddy: 0.1,
    },
    SpeciesRecord {
        name: "Shortnose Sawshark (Pristiophorus nudipinnis)",
        description: "Benthic shark of the continental shelf and slope.",
        depth_preference: [0.7, 0.6, 0.3],
        coastal: 0.7,
        plankton: 0.4,
        eddy: 0.1,
    },];
