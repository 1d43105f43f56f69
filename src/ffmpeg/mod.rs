//! External FFmpeg tooling: discovery, probing, filter graph and encoding.

mod encode;
mod filter;
mod probe;
mod tools;

pub use encode::EncodeJob;
pub use filter::{OUTPUT_LABEL, UpmixParams, build_filter_graph};
pub use probe::{StreamInfo, parse_probe_json, probe_audio};
pub use tools::{Toolchain, find_in_path, install_hint, resolve_tool};
