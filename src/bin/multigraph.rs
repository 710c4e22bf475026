//! Multigraph CLI — inspect and edit graph snapshots.
//!
//! Usage:
//!   multigraph demo
//!   multigraph show <file> [--edges] [--reverse] [--json]
//!   multigraph replace <file> <old> <new> [--json]
//!   multigraph merge <file> <old> <new> [--json]
//!   multigraph delete <file> <node> [--json]

use clap::{Parser, Subcommand};
use multigraph::Graph;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type StringGraph = Graph<String, i64>;

#[derive(Parser)]
#[command(
    name = "multigraph",
    version,
    about = "Directed weighted multigraph toolkit"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a small sample graph and print it in every supported form
    Demo,
    /// Print a graph snapshot
    Show {
        /// Path to a JSON snapshot
        file: PathBuf,
        /// List edges in global order instead of the node dump
        #[arg(long)]
        edges: bool,
        /// List edges in reverse global order
        #[arg(long, conflicts_with = "edges")]
        reverse: bool,
        /// Print the snapshot as JSON
        #[arg(long, conflicts_with_all = ["edges", "reverse"])]
        json: bool,
    },
    /// Rename a node, keeping its edges
    Replace {
        /// Path to a JSON snapshot
        file: PathBuf,
        /// Current node value
        old: String,
        /// New node value
        new: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Move every edge of one node onto another and delete the first
    Merge {
        /// Path to a JSON snapshot
        file: PathBuf,
        /// Node to merge away
        old: String,
        /// Node that receives the edges
        new: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a node and all of its edges
    Delete {
        /// Path to a JSON snapshot
        file: PathBuf,
        /// Node to delete
        node: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn load_graph(path: &Path) -> Result<StringGraph, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    let graph = StringGraph::from_json(&json)
        .map_err(|e| format!("invalid snapshot '{}': {}", path.display(), e))?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded snapshot"
    );
    Ok(graph)
}

fn print_edges<'a>(edges: impl Iterator<Item = (&'a String, &'a String, &'a i64)>) {
    for (from, to, weight) in edges {
        println!("{} -> {} (weight {})", from, to, weight);
    }
}

fn print_graph(graph: &StringGraph, json: bool) -> i32 {
    if json {
        match graph.to_json() {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    } else {
        print!("{}", graph);
    }
    0
}

fn cmd_demo() -> i32 {
    let mut g = StringGraph::new();
    for node in ["hello", "how", "are", "you?"] {
        g.insert_node(node.to_string());
    }

    let edges = [
        ("hello", "how", 5),
        ("hello", "are", 8),
        ("hello", "are", 2),
        ("how", "you?", 1),
        ("how", "hello", 4),
        ("are", "you?", 3),
    ];
    for (src, dst, weight) in edges {
        if let Err(e) = g.insert_edge(&src.to_string(), &dst.to_string(), weight) {
            eprintln!("Error: {}", e);
            return 1;
        }
    }

    println!("{}", g);
    for node in g.nodes() {
        println!("{}", node);
    }

    let mut copy = g.clone();
    println!("\n{}", copy);
    println!("equal: {}", g == copy);

    copy.delete_node(&"how".to_string());
    println!("\n{}", copy);
    println!("equal: {}", g == copy);

    println!();
    print_edges(g.iter());
    println!();
    let mut cursor = g.rbegin();
    while !cursor.is_sentinel() {
        if let Some((from, to, weight)) = g.get(&cursor) {
            println!("{} -> {} (weight {})", from, to, weight);
        }
        cursor = g.retreat(&cursor);
    }
    debug!("demo finished");
    0
}

fn cmd_show(file: &Path, edges: bool, reverse: bool, json: bool) -> i32 {
    let graph = match load_graph(file) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if edges {
        print_edges(graph.iter());
        0
    } else if reverse {
        print_edges(graph.iter().rev());
        0
    } else {
        print_graph(&graph, json)
    }
}

fn cmd_replace(file: &Path, old: &str, new: &str, json: bool) -> i32 {
    let mut graph = match load_graph(file) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match graph.replace(&old.to_string(), new.to_string()) {
        Ok(true) => print_graph(&graph, json),
        Ok(false) => {
            eprintln!("Error: node '{}' already exists", new);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_merge(file: &Path, old: &str, new: &str, json: bool) -> i32 {
    let mut graph = match load_graph(file) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match graph.merge_replace(&old.to_string(), &new.to_string()) {
        Ok(()) => print_graph(&graph, json),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_delete(file: &Path, node: &str, json: bool) -> i32 {
    let mut graph = match load_graph(file) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if let Err(e) = delete_node(&mut graph, node) {
        eprintln!("Error: {}", e);
        return 1;
    }
    print_graph(&graph, json)
}

fn delete_node(graph: &mut StringGraph, node: &str) -> Result<(), String> {
    if graph.delete_node(&node.to_string()) {
        Ok(())
    } else {
        Err(format!("node '{}' not found", node))
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let code = match cli.command {
        Commands::Demo => cmd_demo(),
        Commands::Show {
            file,
            edges,
            reverse,
            json,
        } => cmd_show(&file, edges, reverse, json),
        Commands::Replace {
            file,
            old,
            new,
            json,
        } => cmd_replace(&file, &old, &new, json),
        Commands::Merge {
            file,
            old,
            new,
            json,
        } => cmd_merge(&file, &old, &new, json),
        Commands::Delete { file, node, json } => cmd_delete(&file, &node, json),
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleting_a_missing_node_is_an_error() {
        let mut graph = StringGraph::from_nodes(["a".to_string()]);
        assert_eq!(
            delete_node(&mut graph, "b"),
            Err("node 'b' not found".to_string())
        );
        assert_eq!(delete_node(&mut graph, "a"), Ok(()));
        assert!(graph.is_empty());
    }
}
