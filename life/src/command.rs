// command.rs - Console command table and dispatch

use tracing::{debug, warn};

use crate::controller::SimulationController;
use crate::error::CommandError;
use crate::grid;
use crate::render::RenderSink;

/// Every command the console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Clear,
    Run,
    Stop,
    Cmds,
}

impl Command {
    /// Registration order.
    pub const ALL: [Command; 5] = [
        Command::Create,
        Command::Clear,
        Command::Run,
        Command::Stop,
        Command::Cmds,
    ];

    /// Names shown by `cmds`, which leaves itself out.
    pub const LISTED: [Command; 4] = [Command::Create, Command::Clear, Command::Run, Command::Stop];

    pub fn name(self) -> &'static str {
        match self {
            Command::Create => "create",
            Command::Clear => "clear",
            Command::Run => "run",
            Command::Stop => "stop",
            Command::Cmds => "cmds",
        }
    }

    /// Minimum number of arguments.
    pub fn arity(self) -> usize {
        match self {
            Command::Create => 1,
            Command::Clear | Command::Run | Command::Stop | Command::Cmds => 0,
        }
    }

    pub fn lookup(name: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    fn execute<R: RenderSink>(
        self,
        controller: &mut SimulationController<R>,
        args: &[&str],
    ) -> Result<String, CommandError> {
        match self {
            Command::Create => {
                // Any run ends even when the size turns out to be bad
                controller.stop();
                let size = args[0];
                let (width, height) = parse_size(size)?;
                controller.create(width, height);
                Ok(format!("created grid of size: {size}"))
            }
            Command::Clear => {
                controller.clear();
                Ok("cleared grid".into())
            }
            Command::Run => Ok(controller.run().to_string()),
            Command::Stop => Ok(controller.stop().to_string()),
            Command::Cmds => Ok(Self::LISTED.map(Command::name).join(" ")),
        }
    }
}

/// Looks up `name`, checks the argument count and runs the command.
///
/// Arguments beyond a command's arity are ignored.
pub fn dispatch<R: RenderSink>(
    controller: &mut SimulationController<R>,
    name: &str,
    args: &[&str],
) -> Result<String, CommandError> {
    let command = Command::lookup(name).ok_or_else(|| CommandError::NotFound(name.to_string()))?;
    if args.len() < command.arity() {
        return Err(CommandError::Arity {
            command: command.name(),
            expected: command.arity(),
            got: args.len(),
        });
    }

    let result = command.execute(controller, args);
    match &result {
        Ok(status) => debug!(command = command.name(), %status, "Command executed"),
        Err(err) => warn!(command = command.name(), %err, "Command rejected"),
    }
    result
}

/// Parses a `width,height` pair. Both parts must be positive integers whose
/// product stays within `grid::MAX_CELLS`; parts after the second are ignored.
pub fn parse_size(size: &str) -> Result<(usize, usize), CommandError> {
    let invalid = || CommandError::InvalidSize(size.to_string());
    let mut parts = size.trim().split(',').map(str::trim);

    let (Some(width), Some(height)) = (parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let width: usize = width.parse().map_err(|_| invalid())?;
    let height: usize = height.parse().map_err(|_| invalid())?;
    if !grid::size_allowed(width, height) {
        return Err(invalid());
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Grid};
    use crate::render::RecordingSink;
    use std::time::Duration;

    fn controller() -> SimulationController<RecordingSink> {
        SimulationController::with_grid(
            Grid::new(20, 20, Cell::Dead),
            Duration::from_millis(50),
            RecordingSink::new(),
        )
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Command::lookup("create"), Some(Command::Create));
        assert_eq!(Command::lookup("cmds"), Some(Command::Cmds));
        assert_eq!(Command::lookup("Create"), None);
        assert_eq!(Command::lookup(""), None);
    }

    #[test]
    fn test_unknown_command() {
        let mut c = controller();
        assert_eq!(dispatch(&mut c, "bogus", &[]), Err(CommandError::NotFound("bogus".into())));
        assert_eq!(c.sink().draws(), 1);
    }

    #[test]
    fn test_create_without_argument_is_arity_error() {
        let mut c = controller();
        assert_eq!(
            dispatch(&mut c, "create", &[]),
            Err(CommandError::Arity { command: "create", expected: 1, got: 0 })
        );
    }

    #[test]
    fn test_create_builds_grid() {
        let mut c = controller();
        assert_eq!(dispatch(&mut c, "create", &["5,3"]).unwrap(), "created grid of size: 5,3");
        assert_eq!((c.grid().width(), c.grid().height()), (5, 3));
    }

    #[test]
    fn test_create_single_number_leaves_grid() {
        let mut c = controller();
        c.toggle_cell(2, 2).unwrap();
        let before = c.grid().clone();
        assert_eq!(dispatch(&mut c, "create", &["5"]), Err(CommandError::InvalidSize("5".into())));
        assert_eq!(c.grid(), &before);
    }

    #[test]
    fn test_create_with_bad_size_still_stops() {
        let mut c = controller();
        c.run();
        assert!(dispatch(&mut c, "create", &["0,4"]).is_err());
        assert!(!c.is_running());
        assert_eq!((c.grid().width(), c.grid().height()), (20, 20));
    }

    #[test]
    fn test_run_stop_messages() {
        let mut c = controller();
        assert_eq!(dispatch(&mut c, "stop", &[]).unwrap(), "already stopped");
        assert_eq!(dispatch(&mut c, "run", &[]).unwrap(), "started");
        assert_eq!(dispatch(&mut c, "run", &[]).unwrap(), "already running");
        assert_eq!(dispatch(&mut c, "stop", &[]).unwrap(), "stopped");
    }

    #[test]
    fn test_clear_command() {
        let mut c = controller();
        c.toggle_cell(0, 0).unwrap();
        c.run();
        assert_eq!(dispatch(&mut c, "clear", &["extra"]).unwrap(), "cleared grid");
        assert!(!c.is_running());
        assert_eq!(c.grid().population(), 0);
    }

    #[test]
    fn test_cmds_lists_commands_except_itself() {
        let mut c = controller();
        assert_eq!(dispatch(&mut c, "cmds", &[]).unwrap(), "create clear run stop");
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("3,4"), Ok((3, 4)));
        assert_eq!(parse_size(" 3 , 4 "), Ok((3, 4)));
        assert_eq!(parse_size("3,4,9"), Ok((3, 4)));
        assert!(parse_size("3").is_err());
        assert!(parse_size("3,").is_err());
        assert!(parse_size("0,4").is_err());
        assert!(parse_size("4,0").is_err());
        assert!(parse_size("-3,4").is_err());
        assert!(parse_size("a,b").is_err());
        assert!(parse_size("2.5,4").is_err());
        assert_eq!(parse_size("1024,1024"), Ok((1024, 1024)));
    }

    #[test]
    fn test_create_rejects_overflowing_size() {
        let mut c = controller();
        let before = c.grid().clone();
        assert_eq!(
            dispatch(&mut c, "create", &["4294967296,4294967296"]),
            Err(CommandError::InvalidSize("4294967296,4294967296".into()))
        );
        assert_eq!(c.grid(), &before);
    }

    #[test]
    fn test_create_rejects_oversized_grid() {
        let mut c = controller();
        assert!(dispatch(&mut c, "create", &["100000,100000"]).is_err());
        assert_eq!((c.grid().width(), c.grid().height()), (20, 20));
    }
}
