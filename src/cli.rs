//! CLI domain: parse, route and output only.
//! A single route table dispatches to the store, walker and DAG builder.

mod output;
mod parse;
mod route;

pub use output::{map_error, CommandOutput};
pub use parse::{Cli, Commands};
pub use route::RunContext;
