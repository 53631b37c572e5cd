// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Asset tooling for the Terrace workspace
// Run with: cargo xtask <command>

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use helpers::print_error;
use std::path::PathBuf;
use std::process::ExitCode;
use terrace_core::asset::AssetType;

#[derive(Parser)]
#[command(name = "xtask", version, about = "Asset pipeline tasks")]
struct Cli {
    /// Path to the assets manifest.
    #[arg(long, global = true, default_value = "Assets.toml")]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pack the configured source directories into an archive.
    Pack {
        /// Output directory, overriding the manifest.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the assets visible through the configured sources.
    List {
        /// Only list assets of this type (e.g. `texture`).
        #[arg(long = "type", value_parser = parse_asset_type)]
        asset_type: Option<AssetType>,

        /// Print a JSON array instead of a table.
        #[arg(long)]
        json: bool,
    },
}

fn parse_asset_type(value: &str) -> Result<AssetType, String> {
    AssetType::from_id(value).ok_or_else(|| {
        let known: Vec<&str> = AssetType::all().map(AssetType::id).collect();
        format!("unknown asset type '{value}' (expected one of: {})", known.join(", "))
    })
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Pack { out } => commands::assets::pack(&cli.manifest, out),
        Command::List { asset_type, json } => {
            commands::assets::list(&cli.manifest, asset_type, json)
        }
    }
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
