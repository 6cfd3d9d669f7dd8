use crate::common::*;

#[doc = "Log line format: `[2026-10-16 09:00:00] [INFO] [module] message`"]
pub fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        &record.args()
    )
}

#[doc = r#"
    Installs the global logger.

    Logs go to `logs/` (rotated daily, 10 files kept) and are duplicated to stderr at
    info level. The returned handle must stay alive for the whole run.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("[set_global_logger] invalid log spec: {:?}", e))
        .log_to_file(FileSpec::default().directory(log_directory).discriminant("decade_frequency"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stderr(Duplicate::Info)
        .format_for_files(custom_format)
        .format_for_stderr(custom_format)
        .start()
        .unwrap_or_else(|e| panic!("[set_global_logger] failed to start logger: {:?}", e))
}
