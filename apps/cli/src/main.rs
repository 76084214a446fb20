//! meetslot CLI — pack meetings into as few concurrent slots as it can.
//!
//! Reads a CSV of meetings and their participants, and writes each meeting's
//! slot so that no one is booked twice at the same time.

mod commands;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = commands::parse_args();
    commands::init_tracing(&cli);
    commands::run(cli)
}
