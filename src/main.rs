mod cli;

use std::env;
use std::process;

use lessify::Pager;
use shardlock::commands;

fn main() {
    let args = match cli::Args::build_from_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("fatal: {err}.");
            println!("Try '{bin} -h' for help.", bin = env!("CARGO_BIN_NAME"));
            process::exit(2);
        }
    };

    if args.long_help {
        long_help();
    } else if args.short_help {
        short_help();
    } else if args.version {
        version();
    } else if let Some(command) = args.command {
        let result = match command {
            cli::Command::Encrypt(path) => commands::encrypt(&path),
            cli::Command::Decrypt(path) => commands::decrypt(&path),
        };
        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    } else {
        short_help();
    }
}

fn short_help() {
    println!("{}", short_help_message());
    println!(
        "For full help, see `{bin} --help`.",
        bin = env!("CARGO_BIN_NAME")
    );
}

fn short_help_message() -> String {
    format!(
        "\
{description}

Usage: {bin} [<options>] <command> <path>

Commands:
  encrypt <path>         Encrypt <path>, writing <path>.enc
  decrypt <path>         Decrypt <path>.enc, writing <path> with .enc stripped

Options:
  -h, --help             Show this message and exit
  -V, --version          Show the version and exit
",
        description = env!("CARGO_PKG_DESCRIPTION"),
        bin = env!("CARGO_BIN_NAME"),
    )
}

fn long_help() {
    Pager::page_or_print(&format!(
        "\
{help}
What does {package} do?
  {package} splits a file into 1 MiB chunks, compresses and pads each one,
  encrypts it through two independently keyed AEAD ciphers, then spreads
  the ciphertext across Reed-Solomon shards before writing it out. All
  the chunk work runs across a pool of worker threads, with output
  reassembled back into strict chunk order.

  A password you type is run through Argon2id to derive both cipher
  keys; nothing is ever stored except the resulting container file.
",
        help = short_help_message(),
        package = env!("CARGO_PKG_NAME"),
    ));
}

fn version() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
