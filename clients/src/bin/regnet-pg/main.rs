//! `regnet-pg` — Query the parameter graph of a regulatory network.
//!
//! The graph is built from a JSON network description and a directory of
//! logic resources (`<n>_<m>_<groups>[_E].dat`, one hex code per line).
//!
//! **Usage:**
//! ```text
//! regnet-pg --network <file> --catalogs <dir> size
//! regnet-pg --network <file> --catalogs <dir> parameter <INDEX>
//! regnet-pg --network <file> --catalogs <dir> index --logic <CODE>... [--order <N>...]
//! regnet-pg --network <file> --catalogs <dir> adjacencies <INDEX>
//! ```
//!
//! `--config <file>` reads `network` and `catalogs` from a TOML file instead.
//! `--json` switches every command to JSON output. Log verbosity follows
//! `RUST_LOG` (default `warn`); logs go to stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use regnet_catalog::{DirectoryCatalog, NetworkDescription};
use regnet_parameter::{LogicParameter, OrderParameter, Parameter, ParameterGraph};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use config::{Config, Sources};

type Graph = ParameterGraph<NetworkDescription>;

/// Query the parameter graph of a regulatory network.
#[derive(Parser)]
#[command(
    name = "regnet-pg",
    about = "Query the parameter graph of a regulatory network"
)]
struct Args {
    /// TOML file supplying `network` and `catalogs`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON network description.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Directory of logic resource files.
    #[arg(long, global = true)]
    catalogs: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the size of the parameter graph and its factors.
    Size,
    /// Print the parameter at an index.
    Parameter {
        /// Linear index in [0, size).
        index: u64,
    },
    /// Print the index of a parameter given per-node codes and orders.
    Index {
        /// Logic code of each node, in node order.
        #[arg(long, num_args = 1.., required = true)]
        logic: Vec<String>,
        /// Order index of each node, in node order (all zero when omitted).
        #[arg(long, num_args = 1..)]
        order: Vec<u64>,
    },
    /// Print the indices adjacent to an index.
    Adjacencies {
        /// Linear index in [0, size).
        index: u64,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let sources = Sources::resolve(args.network, args.catalogs, config)?;
    let graph = build_graph(&sources)?;

    match args.command {
        Command::Size => print_size(&graph, args.json),
        Command::Parameter { index } => {
            let p = graph
                .parameter(index)
                .with_context(|| format!("Failed to decode index {index}"))?;
            print_parameter(&graph, index, &p, args.json)
        }
        Command::Index { logic, order } => {
            let p = assemble(&graph, logic, order)?;
            let index = graph.index(&p).context("Parameter is not in this graph")?;
            if args.json {
                println!("{}", json!({ "index": index }));
            } else {
                println!("{index}");
            }
            Ok(())
        }
        Command::Adjacencies { index } => {
            let adjacent = graph
                .adjacencies(index)
                .with_context(|| format!("Failed to compute adjacencies of {index}"))?;
            if args.json {
                println!("{}", json!({ "index": index, "adjacencies": adjacent }));
            } else {
                let list: Vec<String> = adjacent.iter().map(u64::to_string).collect();
                println!("{}", list.join(" "));
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_graph(sources: &Sources) -> Result<Graph> {
    let network = NetworkDescription::from_path(&sources.network)
        .with_context(|| format!("Failed to load network {}", sources.network.display()))?;
    tracing::debug!(nodes = network.nodes().len(), "loaded network description");
    let catalogs = DirectoryCatalog::new(&sources.catalogs);
    ParameterGraph::new(Arc::new(network), &catalogs).with_context(|| {
        format!(
            "Failed to build parameter graph from {}",
            sources.catalogs.display()
        )
    })
}

/// Build a parameter for `graph` from command-line codes and order indices.
fn assemble(
    graph: &Graph,
    logic: Vec<String>,
    order: Vec<u64>,
) -> Result<Parameter<NetworkDescription>> {
    let network = Arc::clone(graph.network());
    let nodes = network.nodes();
    if logic.len() != nodes.len() {
        bail!("expected {} logic codes, got {}", nodes.len(), logic.len());
    }
    let order = if order.is_empty() {
        vec![0; nodes.len()]
    } else {
        order
    };
    if order.len() != nodes.len() {
        bail!("expected {} order indices, got {}", nodes.len(), order.len());
    }

    let logic = nodes
        .iter()
        .zip(logic)
        .map(|(node, code)| {
            LogicParameter::new(node.inputs, node.outputs, code.to_uppercase())
                .with_context(|| format!("Invalid logic code for node {}", node.name))
        })
        .collect::<Result<Vec<_>>>()?;
    let order = nodes
        .iter()
        .zip(order)
        .map(|(node, index)| {
            OrderParameter::new(node.outputs, index)
                .with_context(|| format!("Invalid order index for node {}", node.name))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Parameter::new(logic, order, network)?)
}

fn print_size(graph: &Graph, as_json: bool) -> Result<()> {
    if as_json {
        let nodes: Vec<_> = graph
            .network()
            .nodes()
            .iter()
            .zip(graph.logic_place_values())
            .zip(graph.order_place_values())
            .map(|((node, logic), order)| {
                json!({ "node": node.name, "logic": logic, "orderings": order })
            })
            .collect();
        let doc = json!({
            "size": graph.size(),
            "fixed_order_size": graph.fixed_order_size(),
            "reorderings": graph.reorderings(),
            "nodes": nodes,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{graph}");
        println!("  logic subspace:  {}", graph.fixed_order_size());
        println!("  reorderings:     {}", graph.reorderings());
    }
    Ok(())
}

fn print_parameter(
    graph: &Graph,
    index: u64,
    p: &Parameter<NetworkDescription>,
    as_json: bool,
) -> Result<()> {
    let nodes = graph.network().nodes();
    if as_json {
        let entries: Vec<_> = nodes
            .iter()
            .zip(p.logic().iter().zip(p.order()))
            .map(|(node, (lp, op))| {
                json!({
                    "node": node.name,
                    "logic": lp,
                    "order": op,
                    "permutation": op.permutation(),
                })
            })
            .collect();
        let doc = json!({ "index": index, "nodes": entries });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{index}: {p}");
        for (node, (lp, op)) in nodes.iter().zip(p.logic().iter().zip(p.order())) {
            println!("  {:<12} logic {:<8} order {}", node.name, lp.hex(), op);
        }
    }
    Ok(())
}
