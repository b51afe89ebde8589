//! Simple command that prints UUID strings
//!
//! ```text
//! uuidgen [-n count] [--hex]
//! uuidgen (--v3 | --v5) NAMESPACE NAME [--hex]
//! ```
//!
//! `NAMESPACE` is one of `dns`, `url`, `oid` and `x500`, or any UUID string.

use std::{env, io, io::Write, process::ExitCode};
use uuid35::{FormatMode, HashAlgorithm, Uuid};

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {0} [-n count] [--hex]\n       {0} (--v3 | --v5) NAMESPACE NAME [--hex]",
                    program.as_deref().unwrap_or("uuidgen")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match opts.name_based {
        Some((algorithm, namespace, name)) => {
            let uuid = Uuid::from_namespace_name(algorithm, namespace, name);
            writeln!(buf, "{}", uuid.format(opts.mode))?;
        }
        None => {
            for _ in 0..opts.count.unwrap_or(1) {
                writeln!(buf, "{}", Uuid::v4().format(opts.mode))?;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Debug, Default)]
struct Options {
    count: Option<usize>,
    name_based: Option<(HashAlgorithm, Uuid, String)>,
    mode: FormatMode,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                opts.count.replace(c);
            }
            "--v3" | "--v5" => {
                if opts.name_based.is_some() {
                    return Err("name-based option given more than once".to_owned());
                }
                let algorithm = if arg == "--v3" {
                    HashAlgorithm::Md5
                } else {
                    HashAlgorithm::Sha1
                };
                let (Some(ns_arg), Some(name)) = (args.next(), args.next()) else {
                    return Err(format!("arguments to option '{}' missing", arg));
                };
                let namespace = parse_namespace(&ns_arg)?;
                opts.name_based.replace((algorithm, namespace, name));
            }
            "--hex" => opts.mode = FormatMode::Hex,
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }

    if opts.count.is_some() && opts.name_based.is_some() {
        return Err("option 'n' cannot be combined with name-based options".to_owned());
    }
    Ok(opts)
}

fn parse_namespace(src: &str) -> Result<Uuid, String> {
    match src {
        "dns" => Ok(Uuid::NAMESPACE_DNS),
        "url" => Ok(Uuid::NAMESPACE_URL),
        "oid" => Ok(Uuid::NAMESPACE_OID),
        "x500" => Ok(Uuid::NAMESPACE_X500),
        _ => src
            .parse()
            .map_err(|e| format!("invalid namespace '{}': {}", src, e)),
    }
}
