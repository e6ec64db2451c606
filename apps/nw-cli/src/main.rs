use clap::{Parser, Subcommand};
use nw_project::{NetworkDef, ProjectResult, build_network, check_queries};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "netreach")]
#[command(about = "netreach - reachability queries over undirected networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network description file
    Validate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Ask whether two nodes are connected by any path
    #[command(allow_negative_numbers = true)]
    Query {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Source node (1-based)
        source: i64,
        /// Target node (1-based)
        target: i64,
    },
    /// Evaluate the queries declared in the file against their expectations
    Check {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Print the adjacency matrix
    Matrix {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Emit JSON instead of a 0/1 grid
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ProjectResult<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Query {
            network_path,
            source,
            target,
        } => cmd_query(&network_path, source, target),
        Commands::Check { network_path } => cmd_check(&network_path),
        Commands::Matrix { network_path, json } => cmd_matrix(&network_path, json),
    }
}

fn load(path: &Path) -> ProjectResult<NetworkDef> {
    tracing::info!(path = %path.display(), "loading network");
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => nw_project::load_json(path),
        _ => nw_project::load_yaml(path),
    }
}

fn cmd_validate(network_path: &Path) -> ProjectResult<ExitCode> {
    println!("Validating network: {}", network_path.display());
    let def = load(network_path)?;
    println!(
        "✓ Network is valid: {} ({} nodes, {} edges, {} queries)",
        def.name,
        def.nodes,
        def.edges.len(),
        def.queries.len()
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_query(network_path: &Path, source: i64, target: i64) -> ProjectResult<ExitCode> {
    let def = load(network_path)?;
    let network = build_network(&def)?;
    let reachable = network.query(source, target)?;

    if reachable {
        println!("{} -> {}: connected", source, target);
    } else {
        println!("{} -> {}: not connected", source, target);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(network_path: &Path) -> ProjectResult<ExitCode> {
    let failures = run_check(network_path)?;
    if failures == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Print every declared query and return how many missed their expectation.
fn run_check(network_path: &Path) -> ProjectResult<usize> {
    let def = load(network_path)?;
    let outcomes = check_queries(&def)?;

    if outcomes.is_empty() {
        println!("No queries declared in {}", network_path.display());
        return Ok(0);
    }

    let mut failures = 0;
    for outcome in &outcomes {
        let mark = if outcome.matches() { "✓" } else { "✗" };
        match outcome.expect {
            Some(expected) => println!(
                "  {} {} -> {}: {} (expected {})",
                mark, outcome.source, outcome.target, outcome.reachable, expected
            ),
            None => println!(
                "  {} {} -> {}: {}",
                mark, outcome.source, outcome.target, outcome.reachable
            ),
        }
        if !outcome.matches() {
            failures += 1;
        }
    }

    if failures == 0 {
        println!("✓ All {} queries matched", outcomes.len());
    } else {
        println!("✗ {} of {} queries did not match", failures, outcomes.len());
    }
    Ok(failures)
}

fn cmd_matrix(network_path: &Path, json: bool) -> ProjectResult<ExitCode> {
    let def = load(network_path)?;
    let matrix = build_network(&def)?.matrix_copy();

    if json {
        println!("{}", serde_json::to_string(&matrix)?);
    } else {
        for row in &matrix {
            let line: Vec<&str> = row.iter().map(|&c| if c { "1" } else { "0" }).collect();
            println!("{}", line.join(" "));
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_network(file_name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn check_counts_mismatched_expectations() {
        let path = write_network(
            "nw_cli_check_mismatch.yaml",
            "version: 1\nname: pair\nnodes: 3\nedges:\n  - { source: 1, target: 2 }\n\
             queries:\n  - { source: 1, target: 2, expect: true }\n  - { source: 1, target: 3, expect: true }\n",
        );
        assert_eq!(run_check(&path).unwrap(), 1);
    }

    #[test]
    fn check_passes_when_expectations_hold() {
        let path = write_network(
            "nw_cli_check_match.json",
            r#"{"version": 1, "name": "pair", "nodes": 3,
                "edges": [{"source": 1, "target": 2}],
                "queries": [{"source": 2, "target": 1, "expect": true},
                            {"source": 3, "target": 1, "expect": false}]}"#,
        );
        assert_eq!(run_check(&path).unwrap(), 0);
    }

    #[test]
    fn check_propagates_invalid_files() {
        let path = write_network(
            "nw_cli_check_invalid.yaml",
            "version: 1\nname: bad\nnodes: 3\nqueries:\n  - { source: 2, target: 2 }\n",
        );
        assert!(run_check(&path).is_err());
    }
}
