use approx::assert_relative_eq;
use polmod::prelude::*;
use rstest::rstest;
use uom::si::{angle::degree, f64::Angle};

fn a(angle: f64) -> Angle {
    Angle::new::<degree>(angle)
}

#[test]
fn polarizer_prepares_fully_polarized_beam() {
    let beam = MuellerMat::linear_polarizer(a(0.0)) * StokesVec::unpolarized();

    assert_relative_eq!(beam.i(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(beam.dop(), 1.0, epsilon = 1e-12);
    assert!(Dop::new(beam.dop()).is_ok());
}

#[test]
fn crossed_polarizers_extinguish() {
    let chain = MuellerMat::linear_polarizer(a(90.0)) * MuellerMat::linear_polarizer(a(0.0));
    let beam = chain * StokesVec::unpolarized();

    assert_relative_eq!(beam.i(), 0.0, epsilon = 1e-12);
}

#[test]
fn rotators_compose_by_angle_sum() {
    let composed = MuellerMat::rotator(a(60.0)) * MuellerMat::rotator(a(30.0));

    assert_relative_eq!(
        composed.into_inner(),
        MuellerMat::rotator(a(90.0)).into_inner(),
        epsilon = 1e-12
    );
}

#[test]
fn mirror_reflection_roundtrips() {
    let stokes = StokesVec::new(1., 0.3, -0.4, 0.2);
    let mirror = MuellerMat::ideal_mirror();
    let reflected = mirror * (mirror * stokes);

    assert_relative_eq!(reflected.i(), stokes.i(), epsilon = 1e-12);
    assert_relative_eq!(reflected.q(), stokes.q(), epsilon = 1e-12);
    assert_relative_eq!(reflected.u(), stokes.u(), epsilon = 1e-12);
    assert_relative_eq!(reflected.v(), stokes.v(), epsilon = 1e-12);
}

/// Averaging the modulated signal over a full modulation period removes
/// every harmonic, leaving `0.5 * (I + 0.5 * Q * (1 + cos delta))`.
#[rstest]
#[case(a(90.0), StokesVec::new(1., 0.5, 0.2, 0.1))]
#[case(a(180.0), StokesVec::new(1., -0.3, 0.4, 0.0))]
#[case(a(132.0), StokesVec::new(2., 0.9, -0.1, 0.3))]
fn sweep_mean_isolates_dc_term(#[case] delta: Angle, #[case] stokes: StokesVec) {
    let modulator = Modulator::new(delta);
    let thetas: Vec<Angle> = (0..360).map(|k| a(k as f64 * 0.5)).collect();

    let sweep = modulator.par_signal_sweep(&stokes, &thetas);
    let mean = sweep.iter().sum::<f64>() / sweep.len() as f64;

    let cd = delta.get::<degree>().to_radians().cos();
    assert_relative_eq!(
        mean,
        0.5 * (stokes.i() + 0.5 * stokes.q() * (1. + cd)),
        epsilon = 1e-9
    );
}

#[test]
fn retarder_sweep_feeds_signal_chain() {
    let delta = a(90.0);
    let stokes = StokesVec::new(1., 0.4, 0.3, -0.2);
    let thetas: Vec<Angle> = (0..8).map(|k| a(k as f64 * 22.5)).collect();

    let modulator = Modulator::new(delta);
    let analyzer = MuellerMat::linear_polarizer(a(0.0));

    for (matrix, &theta) in retarder_sweep(delta, &thetas).iter().zip(thetas.iter()) {
        let through_chain = (analyzer * *matrix) * stokes;
        assert_relative_eq!(
            modulator.signal(&stokes, theta),
            through_chain.i(),
            epsilon = 1e-9
        );
    }
}
