//! Route table inspection CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};

use trie_mux::config::loader::load_config;
use trie_mux::observability::logging;
use trie_mux::Tree;

/// Exit status of `resolve` when the path does not route.
const RESOLVE_MISS_STATUS: u8 = 2;

#[derive(Parser)]
#[command(name = "trie-mux")]
#[command(about = "Validate and query trie-mux route tables", long_about = None)]
struct Cli {
    /// Route table file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the route table
    Check,
    /// Resolve a path and print the match as JSON
    Resolve {
        /// Namespace to search in
        #[arg(short, long, default_value = "GET")]
        namespace: String,
        /// Path to resolve
        path: String,
    },
    /// List terminal routes per namespace
    Routes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = load_config(&cli.config)?;
    logging::init(&config.logging)?;

    tracing::info!(
        config = %cli.config.display(),
        namespaces = config.namespaces.len(),
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let tree = config.build_tree()?;

    match cli.command {
        Commands::Check => {
            println!(
                "{}: {} routes in {} namespaces",
                cli.config.display(),
                config.routes.len(),
                tree.namespaces().count()
            );
        }
        Commands::Resolve { namespace, path } => {
            let (body, status) = resolve_report(&tree, &namespace, &path)?;
            println!("{}", serde_json::to_string_pretty(&body)?);
            return Ok(ExitCode::from(status));
        }
        Commands::Routes => {
            for namespace in tree.namespaces() {
                println!("{}", namespace);
                for (path, handlers) in tree.routes(namespace) {
                    println!("  {:<40} {} handler(s)", path, handlers);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// JSON body and exit status for a `resolve` lookup.
fn resolve_report<H: Clone + Serialize>(
    tree: &Tree<H>,
    namespace: &str,
    path: &str,
) -> Result<(Value, u8), serde_json::Error> {
    match tree.search(namespace, path) {
        Ok(m) => Ok((serde_json::to_value(&m)?, 0)),
        Err(e) => Ok((
            json!({ "error": e.kind(), "message": e.to_string() }),
            RESOLVE_MISS_STATUS,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Tree<String> {
        let mut tree = Tree::new(["GET"]);
        tree.insert("GET", r"/users/:id[^\d+$]", "show_user".to_string())
            .unwrap();
        tree
    }

    #[test]
    fn test_resolve_match() {
        let (body, status) = resolve_report(&sample_tree(), "GET", "/users/42").unwrap();
        assert_eq!(status, 0);
        assert_eq!(body["handlers"][0], "show_user");
        assert_eq!(body["params"][0]["key"], "id");
        assert_eq!(body["params"][0]["value"], "42");
    }

    #[test]
    fn test_resolve_miss_is_non_zero() {
        let tree = sample_tree();

        let (body, status) = resolve_report(&tree, "GET", "/users/abc").unwrap();
        assert_eq!(status, RESOLVE_MISS_STATUS);
        assert_eq!(body["error"], "param_mismatch");
        assert!(body["message"].as_str().unwrap().contains("abc"));

        let (body, status) = resolve_report(&tree, "POST", "/users/1").unwrap();
        assert_eq!(status, RESOLVE_MISS_STATUS);
        assert_eq!(body["error"], "empty_tree");
    }
}
