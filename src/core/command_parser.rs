//! Line-oriented session script parser: route queries and pointer events.

use super::types::{PointerEvent, WheelDirection};
use regex::Regex;

/// Which route query the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Best,
    All,
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Query {
        mode: QueryMode,
        start: String,
        end: String,
    },
    Pointer(PointerEvent),
    Render {
        path: String,
    },
}

pub struct CommandParser {
    query_re: Regex,
    wheel_re: Regex,
    point_re: Regex,
    render_re: Regex,
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            query_re: Regex::new(r"^(best|all)\s+(.+?)\s*->\s*(.+?)$").expect("query pattern"),
            wheel_re: Regex::new(r"^wheel\s+(-?[\d.]+)\s+(-?[\d.]+)\s+(in|out)$")
                .expect("wheel pattern"),
            point_re: Regex::new(r"^(press|drag)\s+(-?[\d.]+)\s+(-?[\d.]+)$")
                .expect("point pattern"),
            render_re: Regex::new(r"^render\s+(\S+)$").expect("render pattern"),
        }
    }

    /// Parse a whole script. Blank lines and `#` comments are skipped;
    /// unrecognized lines are logged and skipped.
    pub fn parse(&self, script: &str) -> Vec<Command> {
        let mut commands = Vec::new();

        for (n, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match self.parse_line(line) {
                Some(cmd) => commands.push(cmd),
                None => log::warn!("line {}: unrecognized command '{}'", n + 1, line),
            }
        }

        commands
    }

    pub fn parse_line(&self, line: &str) -> Option<Command> {
        if line == "release" {
            return Some(Command::Pointer(PointerEvent::Release));
        }

        self.try_query(line)
            .or_else(|| self.try_wheel(line))
            .or_else(|| self.try_point(line))
            .or_else(|| self.try_render(line))
    }

    fn try_query(&self, line: &str) -> Option<Command> {
        let caps = self.query_re.captures(line)?;
        let mode = match &caps[1] {
            "best" => QueryMode::Best,
            _ => QueryMode::All,
        };
        Some(Command::Query {
            mode,
            start: caps[2].to_string(),
            end: caps[3].to_string(),
        })
    }

    fn try_wheel(&self, line: &str) -> Option<Command> {
        let caps = self.wheel_re.captures(line)?;
        let direction = match &caps[3] {
            "in" => WheelDirection::In,
            _ => WheelDirection::Out,
        };
        Some(Command::Pointer(PointerEvent::Wheel {
            x: caps[1].parse().ok()?,
            y: caps[2].parse().ok()?,
            direction,
        }))
    }

    fn try_point(&self, line: &str) -> Option<Command> {
        let caps = self.point_re.captures(line)?;
        let x = caps[2].parse().ok()?;
        let y = caps[3].parse().ok()?;
        let event = match &caps[1] {
            "press" => PointerEvent::Press { x, y },
            _ => PointerEvent::Drag { x, y },
        };
        Some(Command::Pointer(event))
    }

    fn try_render(&self, line: &str) -> Option<Command> {
        let caps = self.render_re.captures(line)?;
        Some(Command::Render {
            path: caps[1].to_string(),
        })
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
