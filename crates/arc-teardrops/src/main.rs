use arc_teardrops::{add_arc_teardrops, load_board, Request};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "arc-teardrops",
    about = "Add arc teardrops to selected pads and vias"
)]
struct Cli {
    /// Input board snapshot (JSON)
    input: PathBuf,

    /// Output JSON file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// PTH arc radius in percent of the track width (0 disables)
    #[arg(long, default_value_t = 250.0)]
    pth: f64,

    /// SMD arc radius in percent of the track width (0 disables)
    #[arg(long, default_value_t = 250.0)]
    smd: f64,

    /// Via arc radius in percent of the track width (0 disables)
    #[arg(long, default_value_t = 350.0)]
    via: f64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut board = match load_board(&cli.input) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let request = Request::from_percent(cli.pth, cli.smd, cli.via);
    let count = add_arc_teardrops(&mut board, &request);
    eprintln!("Added {count} arcs");

    let json = if cli.pretty {
        serde_json::to_string_pretty(&board)
    } else {
        serde_json::to_string(&board)
    }
    .expect("JSON serialization failed");

    if let Some(output_path) = cli.output {
        std::fs::write(&output_path, &json).expect("Failed to write output file");
        eprintln!("Written to {}", output_path.display());
    } else {
        println!("{json}");
    }
}
