//! Multi-restart inversion driver.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::reconstruction::{select_best, Reconstruction};
use crate::inversion::config::InversionConfig;
use crate::inversion::descent::{gradient_descent, Descent};
use crate::inversion::generator::Generator;
use crate::inversion::latent::LatentCode;
use crate::inversion::measurement::MeasurementOperator;
use crate::inversion::observer::{InversionObserver, RestartContext};
use crate::{Error, Result};

/// Reconstructs images by inverting a fixed generator
///
/// Each restart samples its own latent code from a per-restart seed drawn
/// from one master RNG, so sequential and parallel runs with the same seed
/// produce identical results.
#[derive(Debug, Clone)]
pub struct Inverter {
    generator: Generator,
    operator: MeasurementOperator,
    config: InversionConfig,
}

impl Inverter {
    /// Create an inverter; the operator must apply to the generator output.
    pub fn new(
        generator: Generator,
        operator: MeasurementOperator,
        config: InversionConfig,
    ) -> Result<Self> {
        if operator.output_dim() != generator.output_dim() {
            return Err(Error::shape(
                "T",
                &[operator.observed(), generator.output_dim()],
                &[operator.observed(), operator.output_dim()],
            ));
        }
        config.check()?;
        Ok(Self {
            generator,
            operator,
            config,
        })
    }

    /// Generator being inverted
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Measurement operator
    pub fn operator(&self) -> &MeasurementOperator {
        &self.operator
    }

    /// Run parameters
    pub fn config(&self) -> &InversionConfig {
        &self.config
    }

    /// Observed pixels of a full-length image: T·x
    pub fn observe(&self, image: &Array1<f64>) -> Result<Array1<f64>> {
        self.operator.project(image)
    }

    /// One descent run from `z` with the configured step size and budget.
    pub fn gradient_descent(&self, z: LatentCode, target: &Array1<f64>) -> Result<Descent> {
        gradient_descent(
            &self.generator,
            &self.operator,
            z,
            target,
            self.config.step_size,
            self.config.iterations,
        )
    }

    /// Master RNG for a run: seeded from the config or from the OS.
    pub fn master_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Reconstruct from observed pixels `target` (length N).
    pub fn reconstruct(&self, target: &Array1<f64>) -> Result<Reconstruction> {
        let mut rng = self.master_rng();
        self.reconstruct_with(target, &mut rng, 0, &mut crate::inversion::NoopObserver)
    }

    /// Reconstruct every full-length image, each independently.
    ///
    /// Errors are attributed to the image that raised them.
    pub fn reconstruct_all(
        &self,
        images: &[Array1<f64>],
        observer: &mut dyn InversionObserver,
    ) -> Result<Vec<Reconstruction>> {
        let mut rng = self.master_rng();
        images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                observer.on_image_begin(i, images.len());
                let target = self.observe(image).map_err(|e| e.for_image(i))?;
                let rec = self
                    .reconstruct_with(&target, &mut rng, i, observer)
                    .map_err(|e| e.for_image(i))?;
                observer.on_image_end(i, rec.final_cost());
                Ok(rec)
            })
            .collect()
    }

    /// Reconstruct from observed pixels, drawing restart seeds from `rng`.
    pub fn reconstruct_with<R: Rng>(
        &self,
        target: &Array1<f64>,
        rng: &mut R,
        image: usize,
        observer: &mut dyn InversionObserver,
    ) -> Result<Reconstruction> {
        if target.len() != self.operator.observed() {
            return Err(Error::shape(
                "observation",
                &[self.operator.observed()],
                &[target.len()],
            ));
        }

        let seeds: Vec<u64> = (0..self.config.restarts).map(|_| rng.random()).collect();
        let mut notifier = Notifier::new(image, seeds.len(), observer);

        let runs = if self.config.parallel {
            let runs = seeds
                .par_iter()
                .map(|&seed| self.restart(seed, target))
                .collect::<Result<Vec<_>>>()?;
            runs.iter().for_each(|run| notifier.notify(run));
            runs
        } else {
            let mut runs = Vec::with_capacity(seeds.len());
            for &seed in &seeds {
                let run = self.restart(seed, target)?;
                notifier.notify(&run);
                runs.push(run);
            }
            runs
        };

        let best = select_best(&runs).ok_or(Error::NonFiniteCost {
            restarts: runs.len(),
        })?;
        let output = self.generator.forward(&runs[best].latent)?.output;
        Ok(Reconstruction { best, runs, output })
    }

    fn restart(&self, seed: u64, target: &Array1<f64>) -> Result<Descent> {
        let mut rng = StdRng::seed_from_u64(seed);
        let z = LatentCode::sample(&mut rng, self.generator.latent_dim());
        self.gradient_descent(z, target)
    }
}

/// Tracks the running best and forwards restart events.
struct Notifier<'a> {
    image: usize,
    restarts: usize,
    next: usize,
    best_cost: f64,
    observer: &'a mut dyn InversionObserver,
}

impl<'a> Notifier<'a> {
    fn new(image: usize, restarts: usize, observer: &'a mut dyn InversionObserver) -> Self {
        Self {
            image,
            restarts,
            next: 0,
            best_cost: f64::INFINITY,
            observer,
        }
    }

    fn notify(&mut self, run: &Descent) {
        let final_cost = run.final_cost();
        if final_cost < self.best_cost {
            self.best_cost = final_cost;
        }
        self.observer.on_restart_end(&RestartContext {
            image: self.image,
            restart: self.next,
            restarts: self.restarts,
            final_cost,
            best_cost: self.best_cost,
        });
        self.next += 1;
    }
}
