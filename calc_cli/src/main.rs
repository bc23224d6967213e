//! # 3D Shape Calculator CLI
//!
//! Interactive, line-oriented front end for `calc_core`: pick a solid from
//! the menu, enter its dimensions, read back surface area and volume.
//!
//! Diagnostics go to stderr via `env_logger` (set `RUST_LOG=debug` to see
//! them); stdout carries only the session itself.

mod menu;
mod session;

use std::io;

use eyre::WrapErr;

use session::Session;

fn main() -> eyre::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run().wrap_err("interactive session failed")?;

    log::debug!("session finished");
    Ok(())
}
