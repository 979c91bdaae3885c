mod fake_fs;
mod node;
mod options;
mod scope;
mod stats;

pub use fake_fs::FakeFs;
pub use node::{NodeKind, Times};
pub use options::{Content, DirOptions, FileContent, FileOptions};
pub use scope::Scope;
pub use stats::Stats;
