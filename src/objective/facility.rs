//! Uncapacitated facility-location objective

use super::Objective;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uncapacitated facility location recast as profit maximization
///
/// Facilities and clients are placed uniformly in the unit square. The cost
/// minimization is turned into a maximization with the Hansen-Thisse trick:
/// serving client `j` from facility `i` is worth the largest pairwise
/// distance in the instance minus the Euclidean distance between `i` and
/// `j`. Each client is served by its best open facility (or goes unserved
/// when nothing is open), and every open facility pays a fixed cost of
/// `sqrt(num_clients) * 0.1`.
///
/// Because each client takes a maximum over the open set, the objective is
/// submodular: opening a facility helps less the more facilities are
/// already open.
///
/// The service-value matrix is precomputed at construction from the given
/// seed. Evaluation keeps no state between calls; the best-supplier scan is
/// a per-call local.
#[derive(Debug, Clone)]
pub struct FacilityLocationObjective {
    /// Service value of facility `i` for client `j`, row-major
    /// `num_facilities * num_clients`
    service: Vec<f64>,
    /// Per-facility opening cost
    fixed_costs: Vec<f64>,
    num_facilities: usize,
    num_clients: usize,
}

impl FacilityLocationObjective {
    /// Create a square instance: one client per facility
    pub fn new(num_facilities: usize, seed: u64) -> Self {
        Self::with_clients(num_facilities, num_facilities, seed)
    }

    /// Create an instance with independent facility and client counts
    pub fn with_clients(num_facilities: usize, num_clients: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let facility_xy: Vec<(f64, f64)> = (0..num_facilities)
            .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
            .collect();
        let client_xy: Vec<(f64, f64)> = (0..num_clients)
            .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
            .collect();

        let mut distances = vec![0.0; num_facilities * num_clients];
        let mut max_distance: f64 = 0.0;
        for (i, &(fx, fy)) in facility_xy.iter().enumerate() {
            for (j, &(cx, cy)) in client_xy.iter().enumerate() {
                let distance = ((fx - cx).powi(2) + (fy - cy).powi(2)).sqrt();
                distances[i * num_clients + j] = distance;
                max_distance = max_distance.max(distance);
            }
        }

        // Hansen-Thisse: minimization becomes maximization
        let service = distances
            .into_iter()
            .map(|distance| max_distance - distance)
            .collect();

        let fixed_costs = vec![(num_clients as f64).sqrt() * 0.1; num_facilities];

        FacilityLocationObjective {
            service,
            fixed_costs,
            num_facilities,
            num_clients,
        }
    }

    /// Number of facilities in this instance
    pub fn num_facilities(&self) -> usize {
        self.num_facilities
    }

    /// Number of clients in this instance
    pub fn num_clients(&self) -> usize {
        self.num_clients
    }
}

impl Objective for FacilityLocationObjective {
    fn evaluate(&self, decisions: &[bool]) -> f64 {
        debug_assert_eq!(decisions.len(), self.num_facilities);

        let mut profit = 0.0;
        for client in 0..self.num_clients {
            let mut best_service = 0.0;
            let mut served = false;
            for facility in 0..self.num_facilities {
                let service = self.service[facility * self.num_clients + client];
                if decisions[facility] && service >= best_service {
                    best_service = service;
                    served = true;
                }
            }
            if served {
                profit += best_service;
            }
        }

        for (facility, &open) in decisions.iter().enumerate() {
            if open {
                profit -= self.fixed_costs[facility];
            }
        }

        profit
    }
}
