mod cli;
mod commands;

use cli::{DotParams, TablesParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dot", m)) => {
            let params = DotParams::from_matches(m);
            commands::dot::run(params.into());
        }
        Some(("tables", m)) => {
            let params = TablesParams::from_matches(m);
            commands::tables::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
