use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use nd_assembly::Assembly;
use nd_model::{resources::ResourceSummary, Model};

#[derive(Parser)]
#[command(name = "nichiyou-daiku", version, about = "Resolve a woodworking model into piece geometry, joints, and pilot holes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the model TOML file (shorthand for `build <file>`)
    model_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a model TOML file and report pieces, connections, and resource totals
    Check {
        /// Path to the model TOML file
        model_file: PathBuf,
    },
    /// Resolve a model into an Assembly (boxes, joints, pilot holes)
    Build {
        /// Path to the model TOML file
        model_file: PathBuf,
        /// Write the resolved Assembly as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { model_file }) => run_check(model_file)?,
        Some(Commands::Build { model_file, output }) => run_build(model_file, output.as_deref())?,
        None => {
            if let Some(ref model_file) = cli.model_file {
                run_build(model_file, None)?;
            } else {
                eprintln!("Usage: nichiyou-daiku <MODEL_FILE> or nichiyou-daiku build <MODEL_FILE>");
                eprintln!("Run 'nichiyou-daiku --help' for more information.");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn load_model(model_file: &PathBuf) -> Result<Model, Box<dyn std::error::Error>> {
    let toml_str = fs::read_to_string(model_file)?;
    Ok(Model::from_toml(&toml_str)?)
}

fn run_check(model_file: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let model = load_model(model_file)?;

    let summary = ResourceSummary::of(&model);
    println!("Pieces: {}", summary.total_pieces);
    for (piece_type, count) in &summary.pieces_by_type {
        let length = summary.total_length_by_type.get(piece_type).copied().unwrap_or(0.0);
        println!("  {piece_type:?}: {count} piece(s), {length:.1} mm total length");
    }
    println!("Total volume: {:.1} mm^3", summary.total_volume);

    let connection_count = model.connections().count();
    println!("Connections: {connection_count}");

    Ok(())
}

fn run_build(model_file: &PathBuf, output: Option<&std::path::Path>) -> Result<(), Box<dyn std::error::Error>> {
    let model = load_model(model_file)?;
    let assembly = Assembly::of(&model)?;

    println!("Boxes: {}", assembly.boxes.len());
    println!("Joints: {}", assembly.joints.len());
    println!("Joint pairs: {}", assembly.joint_conns.len());

    let pilot_hole_count: usize = assembly.pilot_holes.values().map(Vec::len).sum();
    println!("Pilot holes: {pilot_hole_count}");
    for (piece_id, holes) in &assembly.pilot_holes {
        println!("  {piece_id}: {} hole(s)", holes.len());
    }

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&assembly)?;
        fs::write(output_path, &json)?;
        println!("Assembly written to: {}", output_path.display());
    }

    Ok(())
}
