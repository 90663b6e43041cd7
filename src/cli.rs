// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .value_name("PERIOD")
        .help("today|week|month|quarter|year (default month)")
}

pub fn build_cli() -> Command {
    Command::new("idream")
        .about("iDream snack-business ledger: transactions, products, and period financial summaries")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the data directory"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a revenue or expense")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("expense|revenue"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive amount; the sign follows the kind"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category name"),
                        )
                        .arg(
                            Arg::new("product")
                                .long("product")
                                .help("Product name this entry relates to"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, most recent first")
                        .arg(Arg::new("kind").long("kind").help("expense|revenue"))
                        .arg(Arg::new("category").long("category").help("Category name"))
                        .arg(Arg::new("date").long("date").help("Exact date YYYY-MM-DD"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage transaction categories")
                .subcommand(Command::new("list").about("List categories"))
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("expense|revenue"),
                        )
                        .arg(
                            Arg::new("color")
                                .long("color")
                                .default_value("#666666")
                                .help("Display color, hex"),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("product")
                .about("Manage the product catalog")
                .subcommand(
                    Command::new("add")
                        .about("Add a product")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("price").long("price").required(true))
                        .arg(Arg::new("cost").long("cost").required(true))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("allow-loss")
                                .long("allow-loss")
                                .action(ArgAction::SetTrue)
                                .help("Accept a cost above the selling price"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List products with refreshed sales stats"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a product")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Dashboard figures for a period")
                .arg(period_arg()),
        ))
        .subcommand(
            Command::new("report")
                .about("Full financial report for a period")
                .arg(period_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to a file")
                .subcommand(
                    Command::new("transactions")
                        .about("Export the transaction log")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("share")
                .about("Print a WhatsApp link prefilled with the period summary")
                .arg(period_arg())
                .arg(
                    Arg::new("phone")
                        .long("phone")
                        .help("Destination phone, international digits only"),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Show or change configuration")
                .subcommand(Command::new("show").about("Show current settings"))
                .subcommand(
                    Command::new("set-split")
                        .about("Set the profit split ratios (must sum to 1)")
                        .arg(
                            Arg::new("collaborators")
                                .long("collaborators")
                                .required(true),
                        )
                        .arg(Arg::new("treasury").long("treasury").required(true)),
                )
                .subcommand(
                    Command::new("set-baseline")
                        .about("Set the static baseline used for trend figures")
                        .arg(Arg::new("revenue").long("revenue").required(true))
                        .arg(Arg::new("expenses").long("expenses").required(true)),
                )
                .subcommand(
                    Command::new("set-phone")
                        .about("Set the WhatsApp destination phone")
                        .arg(Arg::new("phone").long("phone").required(true)),
                )
                .subcommand(
                    Command::new("set-currency")
                        .about("Set the display currency label")
                        .arg(Arg::new("currency").long("currency").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the data set for integrity issues"))
}
