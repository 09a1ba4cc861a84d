use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read config file {0}: {1}")]
    ConfigRead(String, std::io::Error),
    #[error("failed to parse config file {0}: {1}")]
    ConfigParse(String, serde_yaml::Error),
}
