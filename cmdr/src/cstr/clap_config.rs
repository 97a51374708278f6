// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand};
use r3bl_color_string::RgbaColor;

#[derive(Debug, Parser)]
#[command(bin_name = "cstr")]
#[command(about = "🎨 Strings with color runs, in your terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  cstr [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🎬 Run the replace, split, recolor and markup demos")]
    Demo,

    #[clap(about = "🖍️ Parse each argument as `>[#RRGGBB]text` markup and print it")]
    Render {
        /// Markup strings, each printed on its own line.
        #[arg(required = true)]
        markup: Vec<String>,

        /// Color of any text before the first color change, eg `#00FF00` or
        /// `255,0,0,128`.
        #[arg(long, short = 'c', value_parser = RgbaColor::try_from_pattern)]
        start_color: Option<RgbaColor>,
    },

    #[clap(about = "🔁 Echo lines from stdin in color until end of input")]
    Echo {
        /// Treat each line as markup instead of plain text.
        #[arg(long, short = 'm')]
        markup: bool,
    },

    #[clap(about = "📝 Parse markup and print it back in its canonical form")]
    Encode {
        /// The markup string to canonicalize.
        markup: String,
    },
}
