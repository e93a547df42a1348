use allpairs::cli::{run_generate, run_solve};
use allpairs::graph::random::GeneratorConfig;
use clap::{Parser, Subcommand};
use log::error;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find shortest paths between all nodes of directed weighted multigraph
    /// with no negative cycles
    Solve {
        /// Input graph filename, GraphML or JSON (`*.json`)
        #[clap(short, long)]
        file: std::path::PathBuf,
        /// Output tab separated filename of shortest distances between all nodes.
        /// If not specified, `<name>_paths.csv` for input `<name>.graphml`.
        #[clap(short, long)]
        output: Option<std::path::PathBuf>,
        /// Use multi-threaded solver
        #[clap(long)]
        parallel: bool,
        /// Run both sequential and multi-threaded solvers and report the times
        #[clap(long)]
        compare: bool,
    },
    /// Generate a random graph GraphML
    Generate {
        /// Number of nodes
        #[clap(short = 'n', default_value_t = 300)]
        n_nodes: usize,
        /// Number of edges
        #[clap(short = 'e', default_value_t = 5000)]
        n_edges: usize,
        /// Edge weight is sampled from [0, max_weight)
        #[clap(short = 'w', default_value_t = 50.0)]
        max_weight: f64,
        /// Seed of random number generator
        #[clap(short = 's', default_value_t = 293)]
        seed: u64,
        /// Output graph filename, GraphML or JSON (`*.json`)
        #[clap(short, long, default_value = "my_big_graph.graphml")]
        output: std::path::PathBuf,
    },
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    println!("# started_at={}", chrono::Local::now());
    println!("# n_threads={}", rayon::current_num_threads());
    println!("# opts={:?}", opts);
    let result = match &opts.command {
        Commands::Solve {
            file,
            output,
            parallel,
            compare,
        } => run_solve(file, output.as_deref(), *parallel, *compare).map(|path| {
            println!("# output={}", path.display());
        }),
        Commands::Generate {
            n_nodes,
            n_edges,
            max_weight,
            seed,
            output,
        } => {
            let config = GeneratorConfig {
                n_nodes: *n_nodes,
                n_edges: *n_edges,
                max_weight: *max_weight,
                seed: *seed,
            };
            run_generate(&config, output)
        }
    };
    if let Err(e) = result {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    println!("# finished_at={}", chrono::Local::now());
}
