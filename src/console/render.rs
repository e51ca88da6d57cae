//! Text rendering of the timer display

use crate::state::TimerSnapshot;

pub const HELP: &str = "\
Commands:
  <seconds>        type a duration into the input
  input <text>     type text into the input
  set [<seconds>]  press Set (optionally typing first)
  start | resume   start or resume the countdown
  pause            pause the countdown
  reset            back to the last set duration
  status           print the full status as JSON
  help             show this list
  quit | exit      stop the timer and leave";

/// `MM:SS  state  [Set] [Start] [Pause] [Reset]`
pub fn render_line(snapshot: &TimerSnapshot) -> String {
    format!(
        "{}  {:<7}  [Set] [{}] [Pause] [Reset]",
        snapshot.display,
        snapshot.run_state.as_str(),
        snapshot.start_label()
    )
}
