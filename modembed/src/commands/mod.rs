mod embed;

use clap::Parser;
use embed::EmbedCommand;
use eyre::Result;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for modembed_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "modembed")]
#[command(version)]
#[command(about = "Embed library sources into a generated C++ lookup table")]
pub(crate) struct Cli {
    #[command(flatten)]
    embed: EmbedCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.embed.run()
    }
}
