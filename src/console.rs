use crate::game::system::PlanetId;
use crate::game::Mission;
use std::io::{self, BufRead, Write};

/// One read from the action prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionRead {
    /// First character of the line, lower-cased.
    Action(char),
    /// Blank line; no recognized action.
    Blank,
    /// The input stream ended.
    Closed,
}

/// Prompt/menu I/O over arbitrary read/write handles, so the interactive
/// loop runs against stdin/stdout in the binary and in-memory buffers in
/// tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a block of text followed by a blank separator line.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        writeln!(self.output)
    }

    /// Show the options menu and read the player's choice.
    pub fn read_action(&mut self) -> io::Result<ActionRead> {
        writeln!(self.output, "OPTIONS:")?;
        writeln!(self.output, "• View mission [L]og")?;
        writeln!(self.output, "• View system [M]ap")?;
        writeln!(self.output, "• [T]ravel to a planet")?;
        writeln!(self.output, "• [S]can local planet")?;
        writeln!(self.output, "• [Q]uit mission")?;
        writeln!(self.output)?;
        let line = self.prompt()?;

        Ok(match line {
            None => ActionRead::Closed,
            Some(line) => match line.chars().next() {
                Some(first) => ActionRead::Action(first.to_ascii_lowercase()),
                None => ActionRead::Blank,
            },
        })
    }

    /// Show the destination menu and read a selection. Returns `None`
    /// without prompting (or touching the input) when the mission cannot
    /// travel, and on invalid selections.
    pub fn read_destination(&mut self, mission: &Mission) -> io::Result<Option<PlanetId>> {
        let menu = match mission.destination_menu() {
            Some(menu) => menu,
            None => return Ok(None),
        };
        writeln!(self.output, "{menu}")?;
        writeln!(self.output)?;
        let line = self.prompt()?;
        Ok(line.and_then(|line| mission.select_destination(&line)))
    }

    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        writeln!(self.output)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::system::SolarSystem;
    use std::io::Cursor;

    fn mission_with_fuel(fuel: u64) -> Mission {
        let system = SolarSystem::new();
        let earth = system.find("Earth").unwrap();
        Mission::with_fuel(system, earth, fuel)
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn action_is_first_character_lower_cased() {
        let mut console = console("Travel to Mars\n");
        assert_eq!(console.read_action().unwrap(), ActionRead::Action('t'));
    }

    #[test]
    fn blank_line_is_no_action() {
        let mut console = console("\n");
        assert_eq!(console.read_action().unwrap(), ActionRead::Blank);
    }

    #[test]
    fn closed_input_is_reported() {
        let mut console = console("");
        assert_eq!(console.read_action().unwrap(), ActionRead::Closed);
    }

    #[test]
    fn action_prompt_lists_the_options() {
        let mut console = console("q\n");
        console.read_action().unwrap();
        let output = String::from_utf8(console.output).unwrap();
        assert!(output.contains("OPTIONS:"));
        assert!(output.contains("• [T]ravel to a planet"));
        assert!(output.contains("• [Q]uit mission"));
        assert!(output.contains("> "));
    }

    #[test]
    fn destination_selection_round_trips() {
        let mission = mission_with_fuel(10_000);
        let mut console = console("4\n");
        let selected = console.read_destination(&mission).unwrap().unwrap();
        assert_eq!(mission.system().planet(selected).name, "Mars");

        let output = String::from_utf8(console.output).unwrap();
        assert!(output.contains("Select a destination:"));
        assert!(output.contains("CURRENT LOCATION"));
    }

    #[test]
    fn invalid_destination_selects_nothing() {
        let mission = mission_with_fuel(10_000);
        for input in ["0\n", "9\n", "mars\n", "\n", ""] {
            let mut console = console(input);
            assert_eq!(console.read_destination(&mission).unwrap(), None);
        }
    }

    #[test]
    fn empty_tank_skips_the_destination_prompt_entirely() {
        let mission = mission_with_fuel(0);
        let mut console = console("3\n");
        assert_eq!(console.read_destination(&mission).unwrap(), None);
        // Nothing was printed and the buffered input was not consumed.
        assert!(console.output.is_empty());
        assert_eq!(console.read_action().unwrap(), ActionRead::Action('3'));
    }
}
