use num::clamp;
use serde::Deserialize;
use std::fs;
use crate::cluster::{ClusterEnum, KMeans, MaxSpread};
use crate::component::Params;
use crate::utils::error::Error;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub name: String,
    pub clustering: String,
    pub seed: u64,
    pub parameters: Parameters,
}

/// ACO parameters as written in config files; `q0` and `rho` are stored in
/// their natural form and flipped when compiled into `Params`.
#[derive(Deserialize, Clone, Debug)]
pub struct Parameters {
    pub alpha: f64,
    pub beta: f64,
    pub q0: f64,
    pub rho: f64,
    pub trail_min: f64,
    pub trail_max: f64,
    pub trail_restart: f64,
}

impl Config {
    pub fn load_file(file_name: &str) -> Result<Config, Error> {
        let txt = fs::read_to_string(file_name)
            .map_err(|err| Error::ConfigRead(file_name.to_owned(), err))?;
        serde_yaml::from_str(&txt)
            .map_err(|err| Error::ConfigParse(file_name.to_owned(), err))
    }
    pub fn params(&self) -> Params {
        let q0 = clamp(self.parameters.q0, 0.0, 1.0);
        let rho = clamp(self.parameters.rho, 0.0, 1.0);
        Params {
            alpha: self.parameters.alpha,
            beta: self.parameters.beta,
            one_minus_q0: 1.0 - q0,
            one_minus_rho: 1.0 - rho,
            trail_min: self.parameters.trail_min,
            trail_max: self.parameters.trail_max,
            trail_restart: self.parameters.trail_restart,
        }
    }
    pub fn splitter(&self) -> ClusterEnum {
        match self.clustering.as_str() {
            "kmeans" => KMeans.into(),
            "spread" => MaxSpread.into(),
            _ => panic!("Failed specify an unknown clustering primitive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = "
name: default
clustering: kmeans
seed: 42
parameters:
  alpha: 1.0
  beta: 2.0
  q0: 0.9
  rho: 1.2
  trail_min: 0.003
  trail_max: 1.0
  trail_restart: 0.5
";

    #[test]
    fn it_compiles_flipped_parameters() {
        let config: Config = serde_yaml::from_str(YAML).unwrap();
        let params = config.params();
        assert!((params.one_minus_q0 - 0.1).abs() < 1e-12);
        assert_eq!(params.one_minus_rho, 0.0); // rho clamped into [0, 1]
        assert_eq!(params.trail_restart, 0.5);
    }

    #[test]
    fn it_selects_the_clustering_primitive() {
        let config: Config = serde_yaml::from_str(YAML).unwrap();
        match config.splitter() {
            ClusterEnum::KMeans(_) => {}
            ClusterEnum::MaxSpread(_) => panic!("expected kmeans"),
        }
    }
}
