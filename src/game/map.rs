use crate::game::system::{PlanetId, SolarSystem};
use std::fmt::Write;

const EMPTY_CELL: &str = "           "; // 11-char planet column

/// Render the positional system map. Planet columns are 11 characters
/// wide; moons only appear under planets that have been scanned. When a
/// location is given, a "You Are Here" banner is aligned over its column.
pub fn render(system: &SolarSystem, location: Option<PlanetId>) -> String {
    let mut map = String::new();

    if let Some(here) = location {
        map.push_str("       ");
        for id in system.ids() {
            map.push_str(if id == here { "You Are Here" } else { EMPTY_CELL });
        }
        map.push('\n');

        map.push_str("            ");
        for id in system.ids() {
            map.push_str(if id == here { "↓↓         " } else { EMPTY_CELL });
        }
        map.push('\n');
    }

    map.push_str(" ⬤");
    for _ in system.planets() {
        map.push_str(" ┄┄┄┄┄┄┄┄ ○");
    }
    map.push('\n');

    let _ = write!(map, "{:<10}", system.star_name());
    for planet in system.planets() {
        let _ = write!(map, "{:<11}", planet.name);
    }
    map.push('\n');

    for i in 0..=10 {
        let mut row = String::from(EMPTY_CELL);
        for planet in system.planets() {
            match planet.major_moons.get(i) {
                Some(moon) if planet.scanned => {
                    row.push('•');
                    let _ = write!(row, "{:<10}", moon.name);
                }
                _ => row.push_str(EMPTY_CELL),
            }
        }
        if !row.trim().is_empty() {
            map.push_str(&row);
            map.push('\n');
        }
    }

    map
}
