use std::error::Error;

use clap::Parser;
use telewire_packet::{Packet, RoutingPath};

#[derive(Parser, Debug)]
#[command(name = "twx", about = "Telewire packet and routing path inspector")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Routing path utilities.
    Route {
        #[command(subcommand)]
        command: RouteCommand,
    },
    /// Decode a hex-encoded packet and print its contents.
    Inspect {
        /// Wire image as hex, e.g. 0102020068690301
        hex: String,
    },
}

#[derive(clap::Subcommand, Debug)]
enum RouteCommand {
    /// Parse a path string like /3/1/ into hop bytes.
    Parse { path: String },
    /// Build the canonical path string from hop byte values.
    Format { hops: Vec<u8> },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("twx error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Route { command } => match command {
            RouteCommand::Parse { path } => route_parse(&path),
            RouteCommand::Format { hops } => route_format(&hops),
        },
        Command::Inspect { hex } => inspect(&hex),
    }
}

fn route_parse(path: &str) -> Result<(), Box<dyn Error>> {
    let parsed = RoutingPath::parse(path)?;
    log::debug!("parsed {} hops from {:?}", parsed.len(), path);
    println!("hops: {:?}", parsed.hops());
    println!("hex:  {}", hex::encode(parsed.hops()));
    println!("path: {}", parsed);
    Ok(())
}

fn route_format(hops: &[u8]) -> Result<(), Box<dyn Error>> {
    let path = RoutingPath::from_hops(hops)?;
    println!("{}", path);
    Ok(())
}

fn inspect(input: &str) -> Result<(), Box<dyn Error>> {
    let data = hex::decode(input.trim())?;
    log::debug!("inspecting {} raw bytes", data.len());
    let packet = Packet::from_bytes(&data)?;

    println!("type:    {}", packet.packet_type());
    if let Some(stream) = packet.stream_id() {
        println!("stream:  {}", stream);
    }
    println!("total:   {} bytes", packet.total_size());
    println!("payload: {} bytes", packet.payload_size());
    if !packet.payload().is_empty() {
        println!("         {}", hex::encode(packet.payload()));
    }
    let route = RoutingPath::from_hops(packet.routing())?;
    println!("routing: {} ({} hops)", route, route.len());
    Ok(())
}
