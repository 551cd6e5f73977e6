use anyhow::Result;

pub mod params;
pub mod scenario;

pub use params::*;
pub use scenario::*;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}
