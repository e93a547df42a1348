use crate::compare::compare_solvers;
use crate::error::Result;
use crate::graph::floyd::{solve, solve_parallel};
use crate::graph::random::{generate, GeneratorConfig};
use crate::graph::Graph;
use crate::io::tsv::{default_output_path, write_distance_table_file};
use crate::utils::timer;
use log::{info, warn};
use std::path::{Path, PathBuf};

///
/// Load the graph, compute all-pairs shortest distances and write the table.
///
/// The input format is chosen by the extension (see `GraphFormat`).
/// `output` defaults to `<input stem>_paths.csv`. Returns the path written.
///
pub fn run_solve(
    input: &Path,
    output: Option<&Path>,
    parallel: bool,
    compare: bool,
) -> Result<PathBuf> {
    let graph = Graph::from_file(input)?;
    let adjacency = graph.to_adjacency_matrix()?;
    info!(
        "n_nodes={} n_edges={}",
        graph.node_count(),
        graph.edge_count()
    );

    let dists = if compare {
        let c = compare_solvers(&adjacency)?;
        println!("# {}", c);
        if !c.is_identical {
            warn!("results differ, the sequential one is written");
        }
        c.dists
    } else {
        let (dists, t) = timer(|| {
            if parallel {
                solve_parallel(&adjacency)
            } else {
                solve(&adjacency)
            }
        });
        info!("calculation time: {:.1} sec", t.as_secs_f64());
        dists?
    };

    let output = match output {
        Some(output) => output.to_path_buf(),
        None => default_output_path(input),
    };
    write_distance_table_file(&output, &graph.labels, &dists)?;
    info!("wrote {}", output.display());
    Ok(output)
}

///
/// Write a random graph as GraphML, or JSON if `output` is `*.json`.
///
pub fn run_generate(config: &GeneratorConfig, output: &Path) -> Result<()> {
    let graph = generate(config);
    graph.to_file(output)?;
    info!(
        "generated n_nodes={} n_edges={} into {}",
        graph.node_count(),
        graph.edge_count(),
        output.display()
    );
    Ok(())
}
