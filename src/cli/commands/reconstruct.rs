//! Reconstruct command implementation

use crate::cli::logging::{log, LogObserver};
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, ReconstructArgs};
use crate::inversion::Reconstruction;
use crate::io::{save_summary, ImageSummary, RunSummary};
use crate::report::{render_curves, render_triptych};

use super::session::{self, Session};

const CURVE_WIDTH: usize = 60;

pub fn run_reconstruct(args: ReconstructArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Loading config: {}", args.config.display()),
    );

    let mut spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);

    let session = session::open(&spec).map_err(|e| format!("Setup error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Generator:\n{}\nRun:\n{}",
            session::format_generator(session.inverter.generator()),
            session::format_run(&spec)
        ),
    );

    let mut observer = LogObserver::new(level);
    let reconstructions = session
        .inverter
        .reconstruct_all(&session.observations.noisy_images(), &mut observer)
        .map_err(|e| format!("Reconstruction failed: {e}"))?;

    if level != LogLevel::Quiet {
        print_report(&session, &reconstructions)?;
    }

    if let Some(output) = &args.output {
        let summary = summarize(&session, spec.observed, &reconstructions);
        save_summary(&summary, output).map_err(|e| format!("Failed to write summary: {e}"))?;
        log(
            level,
            LogLevel::Normal,
            &format!("Summary written to {}", output.display()),
        );
    }

    Ok(())
}

fn print_report(session: &Session, reconstructions: &[Reconstruction]) -> Result<(), String> {
    let trajectories: Vec<&[f64]> = reconstructions.iter().map(Reconstruction::costs).collect();
    println!("\nLearning curves (best restart):");
    println!("{}", render_curves(&trajectories, CURVE_WIDTH));

    for (i, rec) in reconstructions.iter().enumerate() {
        let Some(noisy) = session.observations.noisy(i) else {
            continue;
        };
        let ideal = session.observations.ideal(i);
        let panels = render_triptych(session.inverter.operator(), &noisy, ideal.as_ref(), rec)
            .map_err(|e| format!("Report failed: {e}"))?;
        if let Some(panels) = panels {
            println!("\nImage {}:", session.images[i] + 1);
            print!("{panels}");
        }
    }
    Ok(())
}

fn summarize(session: &Session, observed: usize, reconstructions: &[Reconstruction]) -> RunSummary {
    let config = session.inverter.config();
    RunSummary {
        step_size: config.step_size,
        iterations: config.iterations,
        restarts: config.restarts,
        observed,
        seed: config.seed,
        images: reconstructions
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                ImageSummary::new(
                    session.images[i],
                    rec,
                    session.observations.ideal(i).as_ref(),
                )
            })
            .collect(),
    }
}
