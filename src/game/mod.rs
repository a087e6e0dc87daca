pub mod body;
pub mod fmt;
pub mod map;
pub mod system;

use crate::game::body::{kind_label, Planet};
use crate::game::fmt::commas;
use crate::game::system::{trip_distance, PlanetId, SolarSystem};
use std::fmt::Write;
use tracing::{info, warn};

/// Fuel burn rate: one kilogram per million kilometres travelled.
pub const KM_PER_KG: u64 = 1_000_000;
/// Default fuel load for a fresh mission, in kilograms.
pub const INITIAL_FUEL: u64 = 10_000;

/// Where the mission currently is. `Adrift` is terminal: it is only
/// entered by running out of fuel mid-trip and no travel can leave it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Orbit(PlanetId),
    Adrift,
}

/// What a call to [`Mission::travel_to`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TravelOutcome {
    Arrived { trip_km: u64, fuel_used: u64 },
    OutOfFuel,
    NoOp,
}

pub struct Mission {
    system: SolarSystem,
    location: Location,
    log: Vec<String>,
    distance: u64,
    fuel: u64,
}

impl Mission {
    pub fn new(system: SolarSystem, start: PlanetId) -> Self {
        Self::with_fuel(system, start, INITIAL_FUEL)
    }

    pub fn with_fuel(system: SolarSystem, start: PlanetId, fuel: u64) -> Self {
        let mut mission = Self {
            system,
            location: Location::Orbit(start),
            log: Vec::new(),
            distance: 0,
            fuel,
        };
        let opening = format!("Mission begins at {}...", mission.system.planet(start).name);
        mission.log_entry(&opening);
        mission
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn current_planet(&self) -> Option<&Planet> {
        match self.location {
            Location::Orbit(id) => Some(self.system.planet(id)),
            Location::Adrift => None,
        }
    }

    pub fn fuel(&self) -> u64 {
        self.fuel
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn is_adrift(&self) -> bool {
        self.location == Location::Adrift
    }

    pub fn can_travel(&self) -> bool {
        matches!(self.location, Location::Orbit(_)) && self.fuel > 0
    }

    /// Append an entry to the mission log. Blank entries are dropped.
    pub fn log_entry(&mut self, entry: &str) {
        if !entry.trim().is_empty() {
            self.log.push(entry.to_string());
        }
    }

    /// The full log between START/END markers, one `>>>` line per entry.
    pub fn log_text(&self) -> String {
        let mut text = String::from("MISSION LOG\nSTART");
        for entry in &self.log {
            let _ = write!(text, "\n>>> {entry}");
        }
        text.push_str("\nEND");
        text
    }

    /// The bordered status panel.
    pub fn status(&self) -> String {
        let state = if self.is_adrift() { "ADRIFT" } else { "ACTIVE" };
        let mut panel = String::new();
        let _ = writeln!(panel, "╔{}╗", "═".repeat(41));
        push_row(&mut panel, "Mission Status", state);
        push_row(&mut panel, "Distance (km)", &commas(self.distance));
        push_row(&mut panel, "Fuel left (kg)", &commas(self.fuel));
        let _ = writeln!(panel, "╠{}╣", "═".repeat(41));

        match self.current_planet() {
            Some(planet) => {
                push_row(&mut panel, "Orbiting planet", &planet.name);
                push_row(&mut panel, "Orbit radius (km)", &commas(planet.distance_to_sun));
                if planet.scanned {
                    push_row(&mut panel, "Planet type", kind_label(planet.kind));
                    push_row(&mut panel, "Diameter (km)", &commas(planet.diameter as u64));
                    push_row(&mut panel, "Moon count", &planet.moon_count.to_string());
                    for (i, moon) in planet.major_moons.iter().enumerate() {
                        let label = if i == 0 { "Major moons" } else { "" };
                        push_row(&mut panel, label, &moon.name);
                    }
                } else {
                    push_row(&mut panel, "Planet status", "UNSCANNED");
                }
            }
            None => {
                let _ = writeln!(panel, "║          ADRIFT IN SPACE :-(            ║");
            }
        }

        let _ = write!(panel, "╚{}╝", "═".repeat(41));
        panel
    }

    /// The numbered destination listing, or `None` when the mission has
    /// no fuel left and travel is impossible.
    pub fn destination_menu(&self) -> Option<String> {
        if self.fuel == 0 {
            return None;
        }
        let here = match self.location {
            Location::Orbit(id) => id,
            Location::Adrift => return None,
        };

        let mut menu = String::from("Select a destination:");
        for (index, planet) in self.system.planets().iter().enumerate() {
            let _ = write!(menu, "\n• [{}] {:<10}", index + 1, planet.name);
            if index == here.index() {
                menu.push_str("CURRENT LOCATION  ");
            } else {
                let away = trip_distance(&self.system, here, PlanetId(index));
                let _ = write!(menu, "{:<18}", format!("{}km", commas(away)));
            }
            if planet.scanned {
                let _ = write!(menu, "{} moons", planet.moon_count);
            } else {
                menu.push_str("???");
            }
        }
        Some(menu)
    }

    /// Parse a destination selection as a 1-based index into the planet
    /// list. Anything unparsable or out of range selects nothing. The
    /// current planet is a valid selection; travel to it is a no-op.
    pub fn select_destination(&self, line: &str) -> Option<PlanetId> {
        let index: usize = line.trim().parse().ok()?;
        if (1..=self.system.planets().len()).contains(&index) {
            Some(PlanetId(index - 1))
        } else {
            None
        }
    }

    /// Scan the planet currently being orbited, unlocking its details in
    /// the status panel, destination menu, and map.
    pub fn scan_planet(&mut self) {
        let id = match self.location {
            Location::Orbit(id) => id,
            Location::Adrift => return,
        };
        self.log_entry("Scanning planet...");
        self.system.planet_mut(id).scan();
        let report = self.system.planet(id).info();
        info!(planet = %self.system.planet(id).name, "scan complete");
        self.log_entry(&report);
    }

    pub fn travel_to(&mut self, destination: PlanetId) -> TravelOutcome {
        let here = match self.location {
            Location::Orbit(id) if id != destination && self.fuel > 0 => id,
            _ => return TravelOutcome::NoOp,
        };

        let origin = self.system.planet(here).name.clone();
        let target = self.system.planet(destination).name.clone();
        self.log_entry(&format!("Leaving {origin} for {target}..."));

        let trip_km = trip_distance(&self.system, here, destination);
        let fuel_used = trip_km / KM_PER_KG;

        if fuel_used > self.fuel {
            // The tank runs dry partway there.
            self.distance += self.fuel * KM_PER_KG;
            self.fuel = 0;
            self.location = Location::Adrift;
            self.log_entry("Ran out of fuel!");
            self.log_entry("ADRIFT IN SPACE  :-(");
            warn!(%origin, %target, "fuel exhausted mid-trip");
            return TravelOutcome::OutOfFuel;
        }

        self.distance += trip_km;
        self.fuel -= fuel_used;
        self.location = Location::Orbit(destination);
        self.log_entry(&format!("Travelled {}km", commas(trip_km)));
        self.log_entry(&format!("Arrived at {target}"));
        info!(%target, trip_km, fuel_used, "arrived");
        TravelOutcome::Arrived { trip_km, fuel_used }
    }

    /// The system map centered on the current location.
    pub fn map(&self) -> String {
        let here = match self.location {
            Location::Orbit(id) => Some(id),
            Location::Adrift => None,
        };
        map::render(&self.system, here)
    }
}

fn push_row(panel: &mut String, label: &str, value: &str) {
    let heading = if label.is_empty() {
        "  ".to_string()
    } else {
        format!("{label:>18}: ")
    };
    let _ = writeln!(panel, "║{heading:>20}{value:<20} ║");
}
