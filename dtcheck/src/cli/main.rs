use std::{error::Error, path::PathBuf};

use foundation::{float, is_empty, version};
use libdt::{logging, profile::Profile, utils::{parse_channel, yes_no}, Operator};
use log::{debug, error};
use structopt::{clap::AppSettings, StructOpt};
use ui::{is_retina, is_retina_legacy, Rgba};

#[derive(StructOpt, Debug)]
#[structopt(name = "dtcheck", about = "Checks app helper behavior against a device profile")]
pub struct Cli {
  #[structopt(short, long)]
  pub profile: Option<PathBuf>,
  #[structopt(long)]
  pub system_version: Option<String>,
  #[structopt(long)]
  pub scale: Option<f64>,
  #[structopt(long, default_value = "warn")]
  pub log_level: String,
  #[structopt(long)]
  pub log_to_file: bool,
  #[structopt(subcommand)]
  pub command: Command,
}

#[derive(StructOpt, Debug)]
pub enum Command {
  /// Is the item list empty, then is each item empty
  Empty { items: Vec<String> },
  /// Are two numbers equal within single precision epsilon
  #[structopt(setting = AppSettings::AllowNegativeNumbers)]
  Feq { a: f64, b: f64 },
  /// Is a number zero within single precision epsilon
  #[structopt(setting = AppSettings::AllowNegativeNumbers)]
  Fzero { a: f64 },
  /// Compare the system version: eq, gt, gte, lt or lte
  Version { op: Operator, v: String },
  /// Compare two version strings
  Compare { a: String, b: String },
  /// Normalize a packed hex color or a profile color name
  Color { color: String },
  /// Normalize separate 8 bit channels
  Rgb {
    #[structopt(parse(try_from_str = parse_channel))]
    red: u8,
    #[structopt(parse(try_from_str = parse_channel))]
    green: u8,
    #[structopt(parse(try_from_str = parse_channel))]
    blue: u8,
    #[structopt(parse(try_from_str = parse_channel))]
    alpha: Option<u8>,
  },
  /// Is the screen a 2x display
  Retina {
    /// Also require display link support
    #[structopt(long)]
    legacy: bool,
  },
}

fn run(command: &Command, profile: &Profile) -> Result<Vec<String>, Box<dyn Error>> {
  let lines = match command {
    Command::Empty { items } => {
      let mut lines = vec![yes_no(is_empty(items)).to_string()];
      lines.extend(items.iter().map(|item| yes_no(is_empty(item)).to_string()));
      lines
    }
    Command::Feq { a, b } => vec![yes_no(float::nearly_equal(*a, *b)).into()],
    Command::Fzero { a } => vec![yes_no(float::nearly_zero(*a)).into()],
    Command::Version { op, v } => vec![yes_no(op.evaluate(profile, v)).into()],
    Command::Compare { a, b } => {
      let ord = match version::compare(a, b) {
        std::cmp::Ordering::Less => "less",
        std::cmp::Ordering::Equal => "equal",
        std::cmp::Ordering::Greater => "greater",
      };
      vec![ord.into()]
    }
    Command::Color { color } => vec![profile.color(color)?.to_string()],
    Command::Rgb { red, green, blue, alpha } => {
      let color = match alpha {
        Some(alpha) => Rgba::from_red_green_blue_alpha(*red, *green, *blue, *alpha),
        None => Rgba::from((*red, *green, *blue)),
      };
      vec![color.to_string()]
    }
    Command::Retina { legacy } => {
      let retina = if *legacy { is_retina_legacy(profile) } else { is_retina(profile) };
      vec![yes_no(retina).into()]
    }
  };

  Ok(lines)
}

fn check(args: Cli) -> Result<(), Box<dyn Error>> {
  let mut profile = match &args.profile {
    Some(path) => Profile::load(path)?,
    None => Profile::default(),
  };

  if let Some(v) = args.system_version {
    profile = profile.with_system_version(v);
  }

  if let Some(scale) = args.scale {
    profile = profile.with_scale(scale);
  }

  for line in run(&args.command, &profile)? {
    println!("{}", line);
  }
  debug!("{:?} done", args.command);

  Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
  let args: Cli = Cli::from_args();
  let logger = logging::init(&args.log_level, args.log_to_file)?;

  let res = check(args);
  if let Err(e) = &res {
    error!("{}", e);
  }
  logger.flush();

  res
}
