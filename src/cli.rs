// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
    )
    .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue))
}

pub fn build_cli() -> Command {
    Command::new("billed")
        .about("Employee expense reports: list bills, send new ones with their receipt")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("login")
                .about("Record the connected user")
                .arg(Arg::new("email").long("email").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .default_value("employee")
                        .value_parser(["employee", "admin"]),
                )
                .arg(Arg::new("token").long("token").help("Bearer token for the API")),
        )
        .subcommand(Command::new("logout").about("Forget the connected user"))
        .subcommand(Command::new("whoami").about("Show the connected user"))
        .subcommand(
            Command::new("config")
                .about("Backend settings")
                .subcommand(
                    Command::new("set-api")
                        .about("Use the Billed REST API at URL instead of the local store")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(Command::new("clear-api").about("Go back to the local store"))
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("bills")
                .about("Bills page")
                .subcommand(json_flags(Command::new("list").about("List bills, latest first")))
                .subcommand(
                    Command::new("show")
                        .about("Preview the receipt of the Nth bill of the list")
                        .arg(
                            Arg::new("index")
                                .required(true)
                                .value_parser(value_parser!(usize)),
                        ),
                )
                .subcommand(Command::new("new").about("Open the new bill form"))
                .subcommand(
                    Command::new("add")
                        .about("Fill and send a new bill")
                        .arg(Arg::new("file").long("file").required(true))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("name").long("name").default_value(""))
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("vat").long("vat").default_value(""))
                        .arg(Arg::new("pct").long("pct").default_value(""))
                        .arg(Arg::new("commentary").long("commentary").default_value("")),
                ),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("bills")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .value_parser(["csv", "json"]),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored bills for problems"))
}
