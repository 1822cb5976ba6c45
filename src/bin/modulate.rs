use clap::Parser;
use polmod::prelude::*;
use std::path::PathBuf;
use uom::si::{angle::degree, f64::Angle};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Retardation of the modulator in degrees.
    #[arg(short, long, default_value_t = 90.0)]
    delta: f64,

    /// Incident Stokes vector given as I,Q,U,V.
    #[arg(short, long, default_value = "1,0.5,0.2,0.1", value_delimiter = ',')]
    stokes: Vec<f64>,

    #[arg(short, long)]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    let stokes = StokesVec::try_from(args.stokes.as_slice()).unwrap();
    let modulator = Modulator::new(Angle::new::<degree>(args.delta));

    // Sweep the fast axis across a half rotation in 0.5 degree steps.
    let thetas: Vec<Angle> = (0..360)
        .map(|k| Angle::new::<degree>(k as f64 * 0.5))
        .collect();
    let signal = modulator.par_signal_sweep(&stokes, &thetas);

    println!(
        "dop={:.3}, writing signal plot to {}",
        stokes.dop(),
        args.output.display()
    );

    SignalPlot::new().render(&thetas, &signal, &args.output).unwrap();
}
