/*!
 * Command-Line Front End
 * Interactive collection of segments and processes, plus text rendering
 */

mod input;
mod render;
mod session;

pub use input::Prompter;
pub use render::write_layout;
pub use session::{Session, SessionSummary};
