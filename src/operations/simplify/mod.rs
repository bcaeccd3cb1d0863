mod douglas_peucker;
mod visvalingam;

pub use douglas_peucker::DouglasPeucker;
pub use visvalingam::Visvalingam;
