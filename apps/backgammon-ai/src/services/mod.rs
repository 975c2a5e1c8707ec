//! Service layer: robot sessions on top of the analyzers.

pub mod ai;

pub use ai::{select_move_from_list, BackgammonAi, RobotAiService};
