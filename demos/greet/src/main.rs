use bytestring::ByteString;
use clap::Parser;
use embedded_io_adapters::std::FromStd;
use greet::{greeting, read_name, write_greetings, GreetError, DEFAULT_NAME};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "greet")]
#[command(about = "Build a greeting with growable byte strings and print it", long_about = None)]
struct Args {
    /// Greet the first line of stdin instead of "world"
    #[arg(short, long, default_value_t = false)]
    read: bool,

    /// Print the greeting this many times
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: usize,
}

fn run(args: &Args) -> Result<(), GreetError> {
    let name = if args.read {
        let mut input_reader = FromStd::new(io::stdin());
        read_name(&mut input_reader)?
    } else {
        ByteString::from_bytes(DEFAULT_NAME)?
    };

    let message = greeting(&name)?;
    let mut output_writer = FromStd::new(io::stdout());
    write_greetings(&message, args.repeat, &mut output_writer)?;

    message.release();
    name.release();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Greeting error: {e}");

        match &e {
            GreetError::ByteString(inner) => {
                eprintln!("  Error type: byte string");
                eprintln!("  Details: {inner:?}");
            }
            GreetError::DynArray(inner) => {
                eprintln!("  Error type: handle array");
                eprintln!("  Details: {inner:?}");
            }
            GreetError::FlushError { kind } => {
                eprintln!("  Error type: output");
                eprintln!("  Details: {kind:?}");
            }
        }

        std::process::exit(1);
    }
}
