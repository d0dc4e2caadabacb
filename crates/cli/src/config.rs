// crates/cli/src/config.rs
use crate::args::Args;
pub use wordcount_engine::{Config, ConfigBuilder};

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        ConfigBuilder::default()
            .lines(args.lines)
            .words(args.words)
            .chars(args.chars)
            .bytes(args.bytes)
            .spaces(args.spaces)
            .lowercase(args.lowercase)
            .uppercase(args.uppercase)
            .log_file(args.log_file)
            .build()
            .expect("Failed to build config")
    }
}
