use crate::game::body::{kind_label, Moon, Planet, PlanetKind};
use crate::game::fmt::commas;
use serde::Serialize;
use std::fmt::Write;
use thiserror::Error;

/// Index of a planet in the system catalog. Missions address planets
/// through ids rather than holding references into the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanetId(pub(crate) usize);

impl PlanetId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SystemError {
    #[error("unknown planet '{0}'")]
    UnknownPlanet(String),
}

#[derive(Clone, Debug)]
pub struct SolarSystem {
    star_name: &'static str,
    star_diameter: u32,
    planets: Vec<Planet>,
}

impl SolarSystem {
    /// Build the fixed catalog: Sol and its eight planets, innermost first,
    /// each with its named major moons.
    pub fn new() -> Self {
        let planets = vec![
            Planet::new("Mercury", PlanetKind::Rocky, 58_000_000, 4879, 0, Vec::new()),
            Planet::new("Venus", PlanetKind::Rocky, 108_000_000, 12_104, 0, Vec::new()),
            Planet::new(
                "Earth",
                PlanetKind::Rocky,
                150_000_000,
                12_756,
                1,
                vec![Moon::new("Luna", 3475)],
            ),
            Planet::new(
                "Mars",
                PlanetKind::Rocky,
                228_000_000,
                6792,
                2,
                vec![Moon::new("Phobos", 22), Moon::new("Deimos", 13)],
            ),
            Planet::new(
                "Jupiter",
                PlanetKind::GasGiant,
                778_000_000,
                142_984,
                95,
                vec![
                    Moon::new("Ganymede", 5268),
                    Moon::new("Callisto", 4821),
                    Moon::new("Io", 3643),
                    Moon::new("Europa", 3122),
                ],
            ),
            Planet::new(
                "Saturn",
                PlanetKind::GasGiant,
                1_430_000_000,
                120_536,
                274,
                vec![
                    Moon::new("Titan", 5150),
                    Moon::new("Enceladus", 504),
                    Moon::new("Rhea", 1528),
                    Moon::new("Dione", 1123),
                    Moon::new("Tethys", 1062),
                    Moon::new("Mimas", 396),
                    Moon::new("Iapetus", 1469),
                ],
            ),
            Planet::new(
                "Uranus",
                PlanetKind::IceGiant,
                2_870_000_000,
                51_118,
                28,
                vec![
                    Moon::new("Titania", 1578),
                    Moon::new("Oberon", 1523),
                    Moon::new("Umbriel", 1169),
                    Moon::new("Ariel", 1158),
                    Moon::new("Miranda", 472),
                ],
            ),
            Planet::new(
                "Neptune",
                PlanetKind::IceGiant,
                4_500_000_000,
                49_528,
                16,
                vec![
                    Moon::new("Triton", 2707),
                    Moon::new("Nereid", 418),
                    Moon::new("Proteus", 340),
                ],
            ),
        ];

        Self {
            star_name: "Sol",
            star_diameter: 1_390_000,
            planets,
        }
    }

    pub fn star_name(&self) -> &'static str {
        self.star_name
    }

    pub fn star_diameter(&self) -> u32 {
        self.star_diameter
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, id: PlanetId) -> &Planet {
        &self.planets[id.0]
    }

    pub fn planet_mut(&mut self, id: PlanetId) -> &mut Planet {
        &mut self.planets[id.0]
    }

    pub fn ids(&self) -> impl Iterator<Item = PlanetId> {
        (0..self.planets.len()).map(PlanetId)
    }

    /// Look a planet up by name, case-insensitively.
    pub fn find(&self, name: &str) -> Result<PlanetId, SystemError> {
        self.planets
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
            .map(PlanetId)
            .ok_or_else(|| SystemError::UnknownPlanet(name.to_string()))
    }

    /// One-line system header plus one numbered line per planet.
    pub fn info(&self) -> String {
        let mut text = format!(
            "This solar system has {} at its centre (diameter {}km). ",
            self.star_name, self.star_diameter
        );
        let _ = write!(
            text,
            "Orbiting {} are {} planets:",
            self.star_name,
            self.planets.len()
        );
        for (index, planet) in self.planets.iter().enumerate() {
            let _ = write!(text, "\n{}. {}", index + 1, planet.info());
        }
        text
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// The full catalog as a plain-text report.
pub fn system_report(system: &SolarSystem) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", system.info());
    output
}

/// The full catalog as JSON.
pub fn system_json(system: &SolarSystem) -> String {
    let view = SystemView::from(system);
    serde_json::to_string_pretty(&view).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Serialize)]
struct MoonView {
    name: String,
    diameter_km: u32,
}

#[derive(Serialize)]
struct PlanetView {
    name: String,
    kind: &'static str,
    distance_to_sun_km: u64,
    diameter_km: u32,
    moon_count: u32,
    major_moons: Vec<MoonView>,
    scanned: bool,
}

#[derive(Serialize)]
struct SystemView {
    star_name: &'static str,
    star_diameter_km: u32,
    planets: Vec<PlanetView>,
}

impl From<&Moon> for MoonView {
    fn from(moon: &Moon) -> Self {
        Self {
            name: moon.name.clone(),
            diameter_km: moon.diameter,
        }
    }
}

impl From<&Planet> for PlanetView {
    fn from(planet: &Planet) -> Self {
        Self {
            name: planet.name.clone(),
            kind: kind_label(planet.kind),
            distance_to_sun_km: planet.distance_to_sun,
            diameter_km: planet.diameter,
            moon_count: planet.moon_count,
            major_moons: planet.major_moons.iter().map(MoonView::from).collect(),
            scanned: planet.scanned,
        }
    }
}

impl From<&SolarSystem> for SystemView {
    fn from(system: &SolarSystem) -> Self {
        Self {
            star_name: system.star_name,
            star_diameter_km: system.star_diameter,
            planets: system.planets.iter().map(PlanetView::from).collect(),
        }
    }
}

// Distance helper shared by the travel arithmetic and the destination menu.
pub fn trip_distance(system: &SolarSystem, from: PlanetId, to: PlanetId) -> u64 {
    let a = system.planet(from).distance_to_sun;
    let b = system.planet(to).distance_to_sun;
    a.abs_diff(b)
}
