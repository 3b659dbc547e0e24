//! Print the external viewer actions available for an NFT.
//!
//! Reads the NFT metadata links (either the bare links object or a metadata
//! response carrying a `links` field) from a file or stdin and prints the
//! action list for the given network as JSON.

use anyhow::{Context, Result, bail};
use livecatalog::Network;
use livecatalog::logging::init_tracing;
use livecatalog::nft::{NftLinks, NftMetadataStatus, viewer_actions};
use serde_json::Value;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_tracing(&livecatalog::AppConfig::from_env().log_filter);
    let args = CliArgs::parse()?;
    let raw = args.source.read()?;
    let value: Value = serde_json::from_slice(&raw).context("failed to parse JSON input")?;
    // A metadata response may carry `"links": null`; that means no links.
    let links = match value.get("links") {
        Some(Value::Null) => NftLinks::default(),
        Some(links) => serde_json::from_value(links.clone())
            .context("input does not hold NFT links")?,
        None => serde_json::from_value(value).context("input does not hold NFT links")?,
    };

    let actions = viewer_actions(&args.network, args.status, &links);
    println!("{}", serde_json::to_string_pretty(&actions)?);
    Ok(())
}

struct CliArgs {
    network: Network,
    status: NftMetadataStatus,
    source: InputSource,
}

enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn read(&self) -> Result<Vec<u8>> {
        match self {
            InputSource::File(path) => {
                if !path.is_file() {
                    bail!("input file not found: {}", path.display());
                }
                fs::read(path).with_context(|| format!("reading {}", path.display()))
            }
            InputSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut network: Option<Network> = None;
        let mut status = NftMetadataStatus::Loaded;
        let mut source: Option<InputSource> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--network" => {
                    network = Some(Network::from_id(&next_value(&mut args, "--network")?));
                }
                "--status" => {
                    status = NftMetadataStatus::parse(&next_value(&mut args, "--status")?)?;
                }
                "--links-file" => {
                    let path = next_value(&mut args, "--links-file")?;
                    if source.is_some() {
                        bail!("--links-file/--stdin may only be provided once");
                    }
                    source = Some(InputSource::File(PathBuf::from(path)));
                }
                "--stdin" => {
                    if source.is_some() {
                        bail!("--links-file/--stdin may only be provided once");
                    }
                    source = Some(InputSource::Stdin);
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        let Some(network) = network else {
            bail!("--network is required\n{}", usage());
        };

        Ok(CliArgs {
            network,
            status,
            source: source.unwrap_or(InputSource::Stdin),
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: nft-viewers --network ID [--status queued|loading|loaded|error] [--links-file PATH|--stdin]\n\
Prints the 'open in external viewer' actions for an NFT as JSON.\n"
}
