use chrono::{DateTime, TimeZone, Utc};
use common::types::items::{
    CsvProcessor, DatarootTarget, FtpSource, PassthroughProcessor, SftpTarget,
};
use common::types::{EtlTask, ProcessorConfig, Recurrence, Schedule, SourceConfig, TargetConfig};
use once_cell::sync::Lazy;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the process working directory.
pub static TEST_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// The instant tests treat as "now": 2026-10-16 12:00:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

pub fn ftp_source(host: &str) -> SourceConfig {
    SourceConfig::Ftp(FtpSource {
        host: host.to_string(),
        port: 21,
        username: "etl".to_string(),
        password: "not-for-display".to_string(),
        directory: None,
        file_regex: None,
        delete_loaded: false,
    })
}

pub fn dataroot_target(path: &str) -> TargetConfig {
    TargetConfig::Dataroot(DatarootTarget {
        path: path.to_string(),
        filename: None,
        overwrite: false,
        add_timestamp: false,
    })
}

pub fn sftp_target() -> TargetConfig {
    TargetConfig::Sftp(SftpTarget {
        host: "b.example".to_string(),
        port: 22,
        username: "loader".to_string(),
        password: Some("not-for-display".to_string()),
        private_key: None,
        directory: "/incoming".to_string(),
    })
}

pub fn csv_processor() -> ProcessorConfig {
    ProcessorConfig::Csv(CsvProcessor {
        delimiter: ",".to_string(),
        skip_header: true,
        columns: vec![],
    })
}

/// An FTP -> dataroot passthrough task running daily at 02:00 with no next
/// run computed.
pub fn sample_task(id: u64, enabled: bool) -> EtlTask {
    EtlTask {
        id,
        enabled,
        source: ftp_source("a.example"),
        target: dataroot_target("/var/data/etl"),
        processor: ProcessorConfig::Passthrough(PassthroughProcessor {}),
        schedule: Schedule {
            recurrence: Recurrence::Daily { hour: 2, min: 0 },
            next_run: None,
        },
    }
}

pub fn with_next_run(mut task: EtlTask, next_run: DateTime<Utc>) -> EtlTask {
    task.schedule.next_run = Some(next_run);
    task
}

pub const SAMPLE_PROJECT: &str = r#"
tasks: tasks.yml
table:
  class: generaltable admintable
site:
  wwwroot: https://lms.example.com
  theme: boost
  theme_revision: 1700000000
"#;

pub const SAMPLE_TASKS: &str = r#"
tasks:
  - id: 7
    enabled: true
    source: {type: ftp, host: a.example, username: etl, password: hunter2}
    target: {type: dataroot, path: /var/data/etl}
    processor: {type: passthrough}
    schedule:
      recurrence: {type: daily, hour: 2, min: 0}
      next_run: 2026-10-17T02:00:00Z
  - id: 8
    enabled: false
    source: {type: folder, path: /srv/exports}
    target: {type: database, connection: warehouse, table: raw_users}
    processor: {type: csv, skip_header: true}
    schedule:
      recurrence: {type: interval, minutes: 15}
"#;

/// Writes `foundry-tasks.yml` and `tasks.yml` into a fresh temp dir.
///
/// Keep the returned `TempDir` alive until assertions are done.
pub fn sample_project() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp project dir");
    let root = dir.path().to_path_buf();
    fs::write(root.join("foundry-tasks.yml"), SAMPLE_PROJECT).expect("write project file");
    fs::write(root.join("tasks.yml"), SAMPLE_TASKS).expect("write tasks file");
    (dir, root)
}

/// Temporarily change the current working directory for the duration of the closure.
/// Guards against concurrent `chdir` calls by taking the global `TEST_MUTEX` lock.
/// Always restores the original directory, even if the closure panics.
pub fn with_chdir<F, T>(target: impl AsRef<Path>, f: F) -> std::io::Result<T>
where
    F: FnOnce() -> T,
{
    let _lock = TEST_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let original = env::current_dir()?;
    env::set_current_dir(target.as_ref())?;

    struct Reset(PathBuf);
    impl Drop for Reset {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.0);
        }
    }
    let _guard = Reset(original);

    Ok(f())
}
