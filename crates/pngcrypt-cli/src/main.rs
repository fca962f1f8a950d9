use clap::Parser;

mod cli;
mod commands;
mod secret;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = pngcrypt_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Encode(encode) => encode.run(),
        Commands::Decode(decode) => decode.run(),
    }
}
