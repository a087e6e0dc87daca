//! solfarer — a single-player solar system mission simulator.
//!
//! A fixed catalog of eight planets is explored through a turn-based
//! console menu: view the status panel, the mission log, and the system
//! map, travel between planets on a finite fuel supply, and scan planets
//! to unlock their details. Running out of fuel mid-trip leaves the
//! mission permanently adrift.

pub mod console;
pub mod game;

pub use console::{ActionRead, Console};
pub use game::system::{PlanetId, SolarSystem, SystemError};
pub use game::{Location, Mission, TravelOutcome};
