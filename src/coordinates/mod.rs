pub mod sphere;

pub use sphere::SphereVector;
