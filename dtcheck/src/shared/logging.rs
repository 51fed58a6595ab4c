use std::error::Error;

use flexi_logger::{DeferredNow, Record, style, TS_DASHES_BLANK_COLONS_DOT_BLANK, Logger, LoggerHandle, Duplicate, FileSpec, WriteMode};

// One-shot runs on a terminal: no timestamp, colored level
fn stderr_format(
  w: &mut dyn std::io::Write,
  _now: &mut DeferredNow,
  record: &Record,
) -> Result<(), std::io::Error> {
  let level = record.level();
  write!(
      w,
      "dtcheck: {} {} ({}:{})",
      style(level).paint(format!("{:<5}", level)),
      record.args(),
      record.file().unwrap_or("<unnamed>"),
      record.line().unwrap_or(0),
  )
}

// Appended across runs, so every line carries its time
fn file_format(
  w: &mut dyn std::io::Write,
  now: &mut DeferredNow,
  record: &Record,
) -> Result<(), std::io::Error> {
  write!(
      w,
      "[{}] {:<5} [{}] {}",
      now.format(TS_DASHES_BLANK_COLONS_DOT_BLANK),
      record.level(),
      record.module_path().unwrap_or("<unnamed>"),
      record.args()
  )
}

/// Logs to stderr, stdout belongs to command output. With `file`, lines are
/// also appended to a log file in the working directory.
/// Flush the handle before exit or buffered file output is lost.
pub fn init(level: &str, file: bool) -> Result<LoggerHandle, Box<dyn Error>> {
  let logger = Logger::try_with_str(level)?
    .format_for_stderr(stderr_format)
    .format_for_files(file_format);

  let handle = if file {
    logger.log_to_file(FileSpec::default())
      .append()
      .duplicate_to_stderr(Duplicate::All)
      .write_mode(WriteMode::BufferAndFlush)
      .start()?
  } else {
    logger.start()?
  };

  Ok(handle)
}
