use anyhow::Result;
use clap::Parser;

mod rom;

#[derive(Parser, Debug)]
struct Args {
    /// Path to the built bootloader image
    #[arg(default_value = "obj/bootldr")]
    input: String,

    /// Where to write the nibble-expanded image
    #[arg(short, long, default_value = "obj/bootnibbles")]
    output: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    rom::expand_file(&args.input, &args.output)
}
