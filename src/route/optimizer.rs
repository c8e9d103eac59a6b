//! Route optimizer entry points.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::problem::RouteProblem;
use super::result::OptimizedRoute;
use crate::error::{Error, Result};
use crate::fuel::{FuelConfig, FuelModel};
use crate::sa::{anneal, AnnealConfig, AnnealResult};
use crate::waypoint::Waypoint;

/// Finds a low-fuel ordering of waypoints by simulated annealing.
///
/// Both configurations are validated once, here; a constructed optimizer
/// can only fail on empty input.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use tug_route::{AnnealConfig, FuelConfig, RouteOptimizer, Waypoint};
///
/// let optimizer = RouteOptimizer::new(FuelConfig::default(), AnnealConfig::default()).unwrap();
/// let waypoints = vec![
///     Waypoint::new(51.9, 4.1).with_engine_power(900.0).with_wind_speed(6.0),
///     Waypoint::new(53.5, 9.9).with_engine_power(900.0).with_wave_height(2.0),
///     Waypoint::new(57.7, 11.9).with_engine_power(1100.0),
/// ];
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = optimizer.optimize(&waypoints, &mut rng).unwrap();
/// assert_eq!(result.optimal_route.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer {
    model: FuelModel,
    config: AnnealConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer, rejecting invalid fuel or schedule parameters.
    pub fn new(fuel: FuelConfig, config: AnnealConfig) -> Result<Self> {
        let model = FuelModel::new(fuel)?;
        config.validate()?;
        Ok(Self { model, config })
    }

    pub fn model(&self) -> &FuelModel {
        &self.model
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Optimizes with the caller's random source.
    pub fn optimize<R: Rng>(&self, waypoints: &[Waypoint], rng: &mut R) -> Result<OptimizedRoute> {
        self.optimize_with_cancel(waypoints, rng, None)
    }

    /// Optimizes with the caller's random source and an optional
    /// cancellation flag, checked once per iteration. A cancelled run
    /// returns the best route found so far.
    pub fn optimize_with_cancel<R: Rng>(
        &self,
        waypoints: &[Waypoint],
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<OptimizedRoute> {
        if waypoints.is_empty() {
            return Err(Error::EmptyRoute);
        }
        debug!("optimizing route over {} waypoints", waypoints.len());

        let problem = RouteProblem::new(waypoints, &self.model);
        let result = anneal(&problem, &self.config, rng, cancel.as_deref());
        Ok(finish(&problem, result))
    }

    /// Optimizes with a generator seeded from [`AnnealConfig::seed`], or a
    /// fresh random seed when none is set.
    pub fn optimize_seeded(&self, waypoints: &[Waypoint]) -> Result<OptimizedRoute> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        self.optimize(waypoints, &mut StdRng::seed_from_u64(seed))
    }

    /// Runs one independent optimization per seed and keeps the cheapest.
    ///
    /// Ties go to the earliest seed. With the `parallel` feature the runs
    /// execute on the rayon thread pool; the result is the same either way.
    pub fn optimize_restarts(&self, waypoints: &[Waypoint], seeds: &[u64]) -> Result<OptimizedRoute> {
        if waypoints.is_empty() {
            return Err(Error::EmptyRoute);
        }
        if seeds.is_empty() {
            return Err(Error::invalid_config("at least one restart seed is required"));
        }
        debug!(
            "optimizing route over {} waypoints with {} restarts",
            waypoints.len(),
            seeds.len()
        );

        let run = |&seed: &u64| self.optimize(waypoints, &mut StdRng::seed_from_u64(seed));

        #[cfg(feature = "parallel")]
        let runs: Vec<Result<OptimizedRoute>> = seeds.par_iter().map(run).collect();
        #[cfg(not(feature = "parallel"))]
        let runs: Vec<Result<OptimizedRoute>> = seeds.iter().map(run).collect();

        let mut best: Option<OptimizedRoute> = None;
        for candidate in runs {
            let candidate = candidate?;
            if best
                .as_ref()
                .is_none_or(|b| candidate.optimal_cost < b.optimal_cost)
            {
                best = Some(candidate);
            }
        }
        best.ok_or_else(|| Error::invalid_config("at least one restart seed is required"))
    }
}

fn finish(problem: &RouteProblem<'_>, result: AnnealResult<Vec<usize>>) -> OptimizedRoute {
    OptimizedRoute {
        optimal_route: problem.route(&result.best),
        optimal_cost: result.best_cost,
        order: result.best,
        iterations: result.iterations,
        accepted_moves: result.accepted_moves,
        improving_moves: result.improving_moves,
        final_temperature: result.final_temperature,
        cancelled: result.cancelled,
        cost_history: result.cost_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::AnnealProblem;

    fn zero_fleet() -> Vec<Waypoint> {
        vec![
            Waypoint::new(0.0, 0.0).with_engine_power(100.0),
            Waypoint::new(0.0, 1.0).with_engine_power(100.0),
            Waypoint::new(0.0, 2.0).with_engine_power(100.0),
        ]
    }

    fn mixed_fleet() -> Vec<Waypoint> {
        vec![
            Waypoint::new(51.9, 4.1)
                .with_engine_power(900.0)
                .with_tow_size(400.0)
                .with_wind_speed(6.0),
            Waypoint::new(53.5, 9.9)
                .with_engine_power(1500.0)
                .with_wave_height(2.5)
                .with_towing_speed(4.0),
            Waypoint::new(57.7, 11.9).with_engine_power(300.0),
            Waypoint::new(59.3, 18.1)
                .with_engine_power(2000.0)
                .with_tow_size(1200.0)
                .with_wind_speed(12.0),
            Waypoint::new(60.2, 24.9)
                .with_engine_power(700.0)
                .with_towing_speed(6.0),
            Waypoint::new(54.4, 18.6)
                .with_engine_power(1100.0)
                .with_wave_height(1.0),
        ]
    }

    fn optimizer() -> RouteOptimizer {
        RouteOptimizer::new(FuelConfig::default(), AnnealConfig::default()).unwrap()
    }

    fn sorted_bits(route: &[Waypoint]) -> Vec<[u64; 7]> {
        let mut keys: Vec<[u64; 7]> = route
            .iter()
            .map(|w| {
                [
                    w.latitude.to_bits(),
                    w.longitude.to_bits(),
                    w.tow_size.to_bits(),
                    w.engine_power.to_bits(),
                    w.towing_speed.to_bits(),
                    w.wind_speed.to_bits(),
                    w.wave_height.to_bits(),
                ]
            })
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_new_rejects_bad_fuel_config() {
        let err = RouteOptimizer::new(FuelConfig::default().with_sfc(-1.0), AnnealConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_new_rejects_bad_schedule() {
        let config = AnnealConfig::default()
            .with_initial_temperature(1.0)
            .with_stopping_temperature(1.0);
        let err = RouteOptimizer::new(FuelConfig::default(), config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_new_rejects_infinite_parameters() {
        let config = AnnealConfig::default().with_initial_temperature(f64::INFINITY);
        let err = RouteOptimizer::new(FuelConfig::default(), config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = RouteOptimizer::new(FuelConfig::default().with_sfc(f64::INFINITY), AnnealConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_accessors_expose_validated_configs() {
        let schedule = AnnealConfig::default().with_seed(3);
        let opt = RouteOptimizer::new(FuelConfig::default(), schedule.clone()).unwrap();
        assert_eq!(opt.config(), &schedule);
        assert_eq!(opt.model().config(), &FuelConfig::default());
    }

    #[test]
    fn test_degenerate_schedule_keeps_initial_route() {
        let waypoints = mixed_fleet();
        let opt = optimizer();
        let problem = RouteProblem::new(&waypoints, opt.model());
        assert_eq!(problem.waypoints(), waypoints.as_slice());

        // Rejected by validation, but the loop itself must run zero times.
        let schedule = opt
            .config()
            .clone()
            .with_initial_temperature(1.0)
            .with_stopping_temperature(1.0);
        let result = anneal(&problem, &schedule, &mut StdRng::seed_from_u64(21), None);

        let initial = problem.initial_solution(&mut StdRng::seed_from_u64(21));
        let initial_route = problem.route(&initial);

        assert_eq!(result.iterations, 0);
        assert!(!result.cancelled);
        assert_eq!(result.best, initial);
        assert_eq!(result.best_cost, opt.model().route_cost(&initial_route));
    }

    #[test]
    fn test_empty_input_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = optimizer().optimize(&[], &mut rng).unwrap_err();
        assert_eq!(err, Error::EmptyRoute);
        assert_eq!(optimizer().optimize_seeded(&[]).unwrap_err(), Error::EmptyRoute);
        assert_eq!(
            optimizer().optimize_restarts(&[], &[1, 2]).unwrap_err(),
            Error::EmptyRoute
        );
    }

    #[test]
    fn test_single_waypoint() {
        let wp = Waypoint::new(10.0, 10.0).with_engine_power(500.0);
        let mut rng = StdRng::seed_from_u64(0);
        let result = optimizer().optimize(&[wp], &mut rng).unwrap();

        assert_eq!(result.optimal_route, vec![wp]);
        assert_eq!(result.optimal_cost, 0.0);
        assert_eq!(result.iterations, AnnealConfig::default().planned_iterations());
    }

    #[test]
    fn test_cost_equal_orderings() {
        let waypoints = zero_fleet();
        let mut rng = StdRng::seed_from_u64(42);
        let result = optimizer().optimize(&waypoints, &mut rng).unwrap();

        assert_eq!(result.optimal_cost, 2.0 * 100.0 / (0.2 * 0.85));
        assert_eq!(sorted_bits(&result.optimal_route), sorted_bits(&waypoints));
    }

    #[test]
    fn test_result_is_permutation_with_exact_cost() {
        let waypoints = mixed_fleet();
        let opt = optimizer();
        let mut rng = StdRng::seed_from_u64(7);
        let result = opt.optimize(&waypoints, &mut rng).unwrap();

        assert_eq!(result.len(), waypoints.len());
        assert_eq!(sorted_bits(&result.optimal_route), sorted_bits(&waypoints));
        assert_eq!(result.optimal_cost, opt.model().route_cost(&result.optimal_route));
        for (k, &i) in result.order.iter().enumerate() {
            assert_eq!(result.optimal_route[k], waypoints[i]);
        }
    }

    #[test]
    fn test_finds_cheapest_ordering() {
        // The cheapest route ends on the most expensive departure, since the
        // last waypoint departs no leg.
        let waypoints = mixed_fleet();
        let opt = optimizer();
        let mut rng = StdRng::seed_from_u64(11);
        let result = opt.optimize(&waypoints, &mut rng).unwrap();

        let most_expensive = waypoints
            .iter()
            .map(|w| opt.model().leg_fuel(w))
            .fold(f64::MIN, f64::max);
        let total: f64 = waypoints.iter().map(|w| opt.model().leg_fuel(w)).sum();
        assert!(
            (result.optimal_cost - (total - most_expensive)).abs() < 1e-6,
            "got {}, expected {}",
            result.optimal_cost,
            total - most_expensive
        );
    }

    #[test]
    fn test_same_seed_same_result() {
        let waypoints = mixed_fleet();
        let opt = optimizer();

        let a = opt.optimize(&waypoints, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = opt.optimize(&waypoints, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_optimize_seeded_uses_config_seed() {
        let waypoints = mixed_fleet();
        let opt = RouteOptimizer::new(FuelConfig::default(), AnnealConfig::default().with_seed(5))
            .unwrap();

        let seeded = opt.optimize_seeded(&waypoints).unwrap();
        let manual = opt.optimize(&waypoints, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(seeded, manual);
    }

    #[test]
    fn test_cancelled_run_returns_initial_best() {
        let waypoints = mixed_fleet();
        let opt = optimizer();
        let cancel = Arc::new(AtomicBool::new(true));
        let mut rng = StdRng::seed_from_u64(3);

        let result = opt
            .optimize_with_cancel(&waypoints, &mut rng, Some(cancel))
            .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.optimal_cost, opt.model().route_cost(&result.optimal_route));
    }

    #[test]
    fn test_restarts_keep_cheapest() {
        let waypoints = mixed_fleet();
        let opt = RouteOptimizer::new(
            FuelConfig::default(),
            AnnealConfig::default()
                .with_initial_temperature(10.0)
                .with_cooling_rate(0.5)
                .with_stopping_temperature(1.0),
        )
        .unwrap();
        let seeds = [1, 2, 3, 4, 5, 6, 7, 8];

        let best = opt.optimize_restarts(&waypoints, &seeds).unwrap();
        for &seed in &seeds {
            let single = opt
                .optimize(&waypoints, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            assert!(best.optimal_cost <= single.optimal_cost);
        }

        let first_winner = seeds
            .iter()
            .map(|&s| opt.optimize(&waypoints, &mut StdRng::seed_from_u64(s)).unwrap())
            .reduce(|a, b| if b.optimal_cost < a.optimal_cost { b } else { a })
            .unwrap();
        assert_eq!(best, first_winner);
    }

    #[test]
    fn test_restarts_require_seeds() {
        let err = optimizer()
            .optimize_restarts(&mixed_fleet(), &[])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
