//! SHA-256 length-extension toolkit.
//!
//! Usage:
//!   lenext digest [FILE]
//!   lenext pad --len 24
//!   lenext extend --tag <HEX> --original-len 24 --suffix ';amount:999999'
//!   lenext demo --max-secret-len 64

use std::{fs::File, io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result, bail};
use bank::{Bank, Tag, scan_secret_len};
use clap::{Args, Parser, Subcommand};
use hashes::crypto::{
  Sha256,
  sha256::{extension::continue_digest, glue_padding, padded_bit_len},
};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "SHA-256 from scratch and the secret-prefix length-extension forgery")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print the SHA-256 of FILE, or of stdin when FILE is omitted.
  Digest { file: Option<PathBuf> },
  /// Print the glue padding a message of LEN bytes receives.
  Pad {
    #[arg(long)]
    len: u64,
  },
  /// Continue a foreign digest over a suffix.
  Extend(ExtendArgs),
  /// Authenticate a transfer at a bank, forge an extension, and submit it.
  Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct ExtendArgs {
  /// Foreign digest, 64 hex characters.
  #[arg(long)]
  tag: String,
  /// Length in bytes of the message behind TAG (secret included); its glue
  /// padding is accounted for.
  #[arg(long, conflicts_with = "original_bits", required_unless_present = "original_bits")]
  original_len: Option<u64>,
  /// Raw bit-length already absorbed into TAG, padding included.
  #[arg(long)]
  original_bits: Option<u64>,
  /// Suffix to append; read from stdin when omitted.
  #[arg(long)]
  suffix: Option<String>,
}

#[derive(Args, Debug)]
struct DemoArgs {
  /// The bank's secret key.
  #[arg(long, env = "LENEXT_BANK_KEY", default_value = "5a95b9feba8efda0b6c3c6a96ad05a87", hide_env_values = true)]
  key: String,
  /// Transaction the bank authenticates.
  #[arg(
    long,
    default_value = "from:20-60-40.23311492;to:35-01-17.11911597;stoken:7a2afc675906eb180ba2e18b;amount:1000"
  )]
  message: String,
  /// Fields the attacker appends.
  #[arg(long, default_value = ";amount:100000")]
  suffix: String,
  /// Largest key length to try.
  #[arg(long, default_value_t = 64)]
  max_secret_len: usize,
}

fn parse_tag(hex_tag: &str) -> Result<Tag> {
  let bytes = hex::decode(hex_tag.trim()).context("tag is not valid hex")?;
  let Ok(tag) = Tag::try_from(bytes.as_slice()) else {
    bail!("tag must be 32 bytes, got {}", bytes.len());
  };
  Ok(tag)
}

fn run_digest(file: Option<PathBuf>) -> Result<()> {
  let digest = match file {
    Some(path) => {
      let f = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
      Sha256::digest_reader(f).with_context(|| format!("hashing {}", path.display()))?
    }
    None => Sha256::digest_reader(io::stdin().lock()).context("hashing stdin")?,
  };
  println!("{}", hex::encode(digest));
  Ok(())
}

fn run_pad(len: u64) {
  let glue = glue_padding(len);
  println!("{}", hex::encode(&glue[..]));
  println!("padded_bits {}", padded_bit_len(len));
}

fn run_extend(args: ExtendArgs) -> Result<()> {
  let tag = parse_tag(&args.tag)?;
  let bits = match (args.original_len, args.original_bits) {
    (_, Some(bits)) => bits,
    (Some(len), None) => padded_bit_len(len),
    (None, None) => bail!("one of --original-len or --original-bits is required"),
  };

  let forged = match args.suffix {
    Some(suffix) => continue_digest(suffix.as_bytes(), &tag, bits),
    None => continue_digest(io::stdin().lock(), &tag, bits),
  }
  .context("continuing digest")?;

  info!(prefix_bits = bits, "extended foreign digest");
  println!("{}", hex::encode(forged));
  Ok(())
}

fn run_demo(args: DemoArgs) -> Result<bool> {
  let issuer = Bank::new(args.key.as_bytes());
  let message = args.message.as_bytes();
  let tag = issuer.authenticate(message)?;
  info!(tag = %hex::encode(tag), "bank A authenticated transaction");

  // A second branch sharing the key verifies whatever arrives.
  let verifier = issuer.clone();
  let suffix = args.suffix.as_bytes();
  let found = scan_secret_len(message, &tag, suffix, 0..=args.max_secret_len, |forgery| {
    verifier.verify(&forgery.message, &forgery.tag).is_ok()
  });

  let Some((secret_len, forgery)) = found else {
    warn!(max_secret_len = args.max_secret_len, "no key length produced an accepted forgery");
    println!("Authentication failed");
    return Ok(false);
  };

  let tx = verifier.verify(&forgery.message, &forgery.tag)?;
  println!("Authentication succeeded (key length {secret_len})");
  println!("forged tag {}", hex::encode(forgery.tag));
  println!("From: {}, To: {}", tx.from_account(), tx.to_account());
  println!("Amount: {}", tx.amount());
  Ok(true)
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();

  // RUST_LOG wins; `info` only applies when it is unset.
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

  match cli.command {
    Command::Digest { file } => run_digest(file)?,
    Command::Pad { len } => run_pad(len),
    Command::Extend(args) => run_extend(args)?,
    Command::Demo(args) => {
      if !run_demo(args)? {
        return Ok(ExitCode::FAILURE);
      }
    }
  }
  Ok(ExitCode::SUCCESS)
}
