/// ACO parameters in the form the trees consume them: `q0` and `rho` arrive
/// pre-flipped since every formula uses the complement.
#[derive(Clone, Copy, Debug)]
pub struct Params {
    pub alpha: f64,
    pub beta: f64,
    pub one_minus_q0: f64,
    pub one_minus_rho: f64,
    pub trail_min: f64,
    pub trail_max: f64,
    pub trail_restart: f64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            alpha: 1.0,
            beta: 2.0,
            one_minus_q0: 1.0,
            one_minus_rho: 0.9,
            trail_min: 0.003,
            trail_max: 1.0,
            trail_restart: 0.5,
        }
    }
}
