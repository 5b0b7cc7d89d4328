//! Command implementations for the amen CLI, one submodule per subcommand.

mod amen;
mod count;
mod import;
mod serve;
mod today;
mod verse;

pub use amen::execute as lock_blessing;
pub use count::execute as count_verses;
pub use import::execute as import_verses;
pub use serve::execute as serve;
pub use today::execute as show_today;
pub use verse::execute as show_verse;
