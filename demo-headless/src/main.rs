use std::process::ExitCode;

use clap::Parser;
use rbd_core::{power, ForceVector, MotionVector, SpatialError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Spatial vector demo: pairs a spatial velocity with a spatial force
#[derive(Parser, Debug)]
#[command(name = "rbd-demo")]
#[command(about = "Prints a motion vector, a force vector and the power they deliver", long_about = None)]
struct Args {
    /// Spatial velocity components (ωx,ωy,ωz,vx,vy,vz)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true,
          default_values_t = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])]
    motion: Vec<f64>,

    /// Spatial force components (nx,ny,nz,fx,fy,fz)
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true,
          default_values_t = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])]
    force: Vec<f64>,

    /// Digits after the decimal point when printing vectors
    #[arg(short, long)]
    precision: Option<usize>,
}

fn run(args: &Args) -> Result<(), SpatialError> {
    let velocity = MotionVector::try_from(args.motion.as_slice())?;
    let force = ForceVector::try_from(args.force.as_slice())?;
    info!(?velocity, ?force, "built spatial vectors");

    match args.precision {
        Some(p) => {
            println!("Velocity:\n{velocity:.p$}\n");
            println!("Force:\n{force:.p$}\n");
        }
        None => {
            println!("Velocity:\n{velocity}\n");
            println!("Force:\n{force}\n");
        }
    }

    println!("Power (motion * force): {}", power(&velocity, &force));
    println!("Power (force * motion): {}", power(&force, &velocity));
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("=== Spatial Vector Demo ===\n");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("invalid input: {e}");
            ExitCode::FAILURE
        }
    }
}
