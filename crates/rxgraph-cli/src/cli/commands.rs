//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("rxgraph")
        .about("Render backtracking regexp automata as Graphviz graphs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dot_command())
        .subcommand(tables_command())
}

/// Render a graph as a Graphviz digraph.
pub fn dot_command() -> Command {
    Command::new("dot")
        .about("Render a graph as a Graphviz digraph")
        .after_help(
            r#"EXAMPLES:
  rxgraph dot graph.json                         # print to stdout
  rxgraph dot graph.json -o graph.dot            # write to file
  rxgraph dot graph.json --root body             # render a subgraph
  rxgraph dot graph.json --dispatch-tables -i    # case-insensitive tables
  rxgraph dot graph.json | dot -Tsvg > graph.svg"#,
        )
        .arg(graph_path_arg())
        .arg(root_arg())
        .arg(label_arg())
        .arg(ignore_case_arg())
        .arg(dispatch_tables_arg())
        .arg(output_file_arg())
}

/// Dump the dispatch table of every reachable choice.
pub fn tables_command() -> Command {
    Command::new("tables")
        .about("Dump the dispatch table of every reachable choice")
        .after_help(
            r#"EXAMPLES:
  rxgraph tables graph.json
  rxgraph tables graph.json --ignore-case --color never"#,
        )
        .arg(graph_path_arg())
        .arg(root_arg())
        .arg(ignore_case_arg())
        .arg(color_arg())
}
