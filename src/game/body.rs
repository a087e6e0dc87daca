use crate::game::fmt::commas;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanetKind {
    Rocky,
    GasGiant,
    IceGiant,
}

pub fn kind_label(kind: PlanetKind) -> &'static str {
    match kind {
        PlanetKind::Rocky => "rocky",
        PlanetKind::GasGiant => "gas giant",
        PlanetKind::IceGiant => "ice giant",
    }
}

#[derive(Clone, Debug)]
pub struct Moon {
    pub name: String,
    pub diameter: u32,
}

impl Moon {
    pub fn new(name: impl Into<String>, diameter: u32) -> Self {
        Self {
            name: name.into(),
            diameter,
        }
    }

    pub fn info(&self) -> String {
        format!("{} (diameter {}km)", self.name, commas(self.diameter as u64))
    }
}

#[derive(Clone, Debug)]
pub struct Planet {
    pub name: String,
    pub kind: PlanetKind,
    pub distance_to_sun: u64,
    pub diameter: u32,
    // Known-moon count shown to the player; independent of `major_moons`,
    // which lists only the named major moons.
    pub moon_count: u32,
    pub major_moons: Vec<Moon>,
    pub scanned: bool,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        kind: PlanetKind,
        distance_to_sun: u64,
        diameter: u32,
        moon_count: u32,
        major_moons: Vec<Moon>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            distance_to_sun,
            diameter,
            moon_count,
            major_moons,
            scanned: false,
        }
    }

    pub fn add_moon(&mut self, moon: Moon) {
        self.major_moons.push(moon);
    }

    /// Mark the planet as scanned. Scans never revert.
    pub fn scan(&mut self) {
        self.scanned = true;
    }

    pub fn info(&self) -> String {
        let mut text = format!(
            "{} ({}, diameter {}km, {}km from star, {} moons)",
            self.name,
            kind_label(self.kind),
            commas(self.diameter as u64),
            commas(self.distance_to_sun),
            self.moon_count
        );
        if !self.major_moons.is_empty() {
            text.push_str("\n    Major moons:");
            for moon in &self.major_moons {
                let _ = write!(text, "\n     - {}", moon.info());
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_info_uses_thousands_separators() {
        let luna = Moon::new("Luna", 3475);
        assert_eq!(luna.info(), "Luna (diameter 3,475km)");
    }

    #[test]
    fn planet_info_without_moons_is_one_line() {
        let mercury = Planet::new("Mercury", PlanetKind::Rocky, 58_000_000, 4879, 0, Vec::new());
        assert_eq!(
            mercury.info(),
            "Mercury (rocky, diameter 4,879km, 58,000,000km from star, 0 moons)"
        );
    }

    #[test]
    fn planet_info_lists_major_moons() {
        let mars = Planet::new(
            "Mars",
            PlanetKind::Rocky,
            228_000_000,
            6792,
            2,
            vec![Moon::new("Phobos", 22), Moon::new("Deimos", 13)],
        );
        let info = mars.info();
        let lines: Vec<&str> = info.lines().collect();
        assert_eq!(
            lines[0],
            "Mars (rocky, diameter 6,792km, 228,000,000km from star, 2 moons)"
        );
        assert_eq!(lines[1], "    Major moons:");
        assert_eq!(lines[2], "     - Phobos (diameter 22km)");
        assert_eq!(lines[3], "     - Deimos (diameter 13km)");
    }

    #[test]
    fn moon_count_is_independent_of_listed_moons() {
        let jupiter = Planet::new(
            "Jupiter",
            PlanetKind::GasGiant,
            778_000_000,
            142_984,
            95,
            vec![Moon::new("Ganymede", 5268)],
        );
        assert_eq!(jupiter.moon_count, 95);
        assert_eq!(jupiter.major_moons.len(), 1);
    }

    #[test]
    fn scan_is_idempotent() {
        let mut venus = Planet::new("Venus", PlanetKind::Rocky, 108_000_000, 12_104, 0, Vec::new());
        assert!(!venus.scanned);
        venus.scan();
        assert!(venus.scanned);
        venus.scan();
        assert!(venus.scanned);
    }

    #[test]
    fn add_moon_appends_without_dedup() {
        let mut earth = Planet::new("Earth", PlanetKind::Rocky, 150_000_000, 12_756, 1, Vec::new());
        earth.add_moon(Moon::new("Luna", 3475));
        earth.add_moon(Moon::new("Luna", 3475));
        assert_eq!(earth.major_moons.len(), 2);
    }
}
