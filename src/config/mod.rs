pub mod conf;
pub mod loader;
pub mod roots;

pub use conf::{ConfSource, EnvOverride, Getconf};
pub use loader::{ConfigRequest, ResolvedConfig, Settings, resolve};
pub use roots::{RootMap, resolve_roots};
