mod cities;
mod clock;
mod params;

pub use cities::distance;
pub use cities::Cities;
pub use cities::Point;
pub use clock::Clock;
pub use params::Params;
