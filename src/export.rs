use crate::util::time;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Output dimensions quoted in the export summary (Amazon Merch print size).
pub const EXPORT_PIXEL_SIZE: (u32, u32) = (4500, 5400);

/// Simulated duration of an export, in seconds.
pub const EXPORT_DELAY_SECS: f64 = 2.0;
/// Simulated duration of a save, in seconds.
pub const SAVE_DELAY_SECS: f64 = 1.5;

/// Time source for the mock services, so tests drive a fake clock
/// instead of sleeping.
pub trait Clock: Send + Sync {
    /// Seconds since the UNIX epoch (or an arbitrary fixed origin).
    fn now(&self) -> f64;
}

/// Wall-clock time, the production implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        time::current_time_secs()
    }
}

/// Manually advanced clock for tests.
#[derive(Debug, Default, Clone)]
pub struct FakeClock {
    now: Arc<Mutex<f64>>,
}

impl FakeClock {
    pub fn advance(&self, secs: f64) {
        *self.now.lock() += secs;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> f64 {
        *self.now.lock()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Pdf,
    Svg,
    Jpeg,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Png,
        ExportFormat::Pdf,
        ExportFormat::Svg,
        ExportFormat::Jpeg,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Svg => "svg",
            ExportFormat::Jpeg => "jpg",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG (recommended for Amazon Merch)",
            ExportFormat::Pdf => "PDF (professional print)",
            ExportFormat::Svg => "SVG (vector)",
            ExportFormat::Jpeg => "JPEG (compressed)",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dpi {
    Web150,
    Print300,
    High600,
}

impl Dpi {
    pub const ALL: [Dpi; 3] = [Dpi::Web150, Dpi::Print300, Dpi::High600];

    pub fn value(&self) -> u32 {
        match self {
            Dpi::Web150 => 150,
            Dpi::Print300 => 300,
            Dpi::High600 => 600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub format: ExportFormat,
    pub dpi: Dpi,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            dpi: Dpi::Print300,
        }
    }
}

impl ExportSettings {
    pub fn file_name(&self) -> String {
        format!("my-tshirt-design.{}", self.format.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Idle,
    InProgress,
    Completed,
}

#[derive(Debug, Clone)]
struct Job {
    started_at: f64,
    duration: f64,
    done: bool,
}

/// Mock export/save backend. Jobs complete unconditionally once the
/// injected clock has advanced past their fixed delay; there is no retry
/// or cancellation, matching the flows this stands in for.
pub struct ExportService {
    clock: Arc<dyn Clock>,
    export_job: Option<Job>,
    save_job: Option<Job>,
    last_export: Option<ExportSettings>,
}

impl ExportService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            export_job: None,
            save_job: None,
            last_export: None,
        }
    }

    pub fn start_export(&mut self, settings: ExportSettings) {
        log::info!(
            "Starting mock export: {} at {} DPI",
            settings.file_name(),
            settings.dpi.value()
        );
        self.last_export = Some(settings);
        self.export_job = Some(Job {
            started_at: self.clock.now(),
            duration: EXPORT_DELAY_SECS,
            done: false,
        });
    }

    pub fn start_save(&mut self) {
        log::info!("Starting mock save");
        self.save_job = Some(Job {
            started_at: self.clock.now(),
            duration: SAVE_DELAY_SECS,
            done: false,
        });
    }

    /// Settings of the most recently started export, if any.
    pub fn last_export(&self) -> Option<ExportSettings> {
        self.last_export
    }

    pub fn export_status(&mut self) -> JobStatus {
        Self::poll(&*self.clock, &mut self.export_job)
    }

    pub fn save_status(&mut self) -> JobStatus {
        Self::poll(&*self.clock, &mut self.save_job)
    }

    fn poll(clock: &dyn Clock, slot: &mut Option<Job>) -> JobStatus {
        let Some(job) = slot else {
            return JobStatus::Idle;
        };
        if !job.done && clock.now() - job.started_at >= job.duration {
            job.done = true;
        }
        if job.done {
            JobStatus::Completed
        } else {
            JobStatus::InProgress
        }
    }

    /// Forget a finished export so the UI returns to its idle state.
    pub fn acknowledge_export(&mut self) {
        self.export_job = None;
    }

    pub fn acknowledge_save(&mut self) {
        self.save_job = None;
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl fmt::Debug for ExportService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportService")
            .field("export_job", &self.export_job)
            .field("save_job", &self.save_job)
            .field("last_export", &self.last_export)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_completes_after_fixed_delay() {
        let clock = FakeClock::default();
        let mut service = ExportService::new(Arc::new(clock.clone()));
        assert_eq!(service.export_status(), JobStatus::Idle);

        service.start_export(ExportSettings::default());
        assert_eq!(service.export_status(), JobStatus::InProgress);

        clock.advance(EXPORT_DELAY_SECS - 0.1);
        assert_eq!(service.export_status(), JobStatus::InProgress);

        clock.advance(0.1);
        assert_eq!(service.export_status(), JobStatus::Completed);

        service.acknowledge_export();
        assert_eq!(service.export_status(), JobStatus::Idle);
    }

    #[test]
    fn save_uses_its_own_delay() {
        let clock = FakeClock::default();
        let mut service = ExportService::new(Arc::new(clock.clone()));

        service.start_save();
        clock.advance(SAVE_DELAY_SECS);
        assert_eq!(service.save_status(), JobStatus::Completed);
    }

    #[test]
    fn file_name_follows_format() {
        let settings = ExportSettings {
            format: ExportFormat::Jpeg,
            dpi: Dpi::Web150,
        };
        assert_eq!(settings.file_name(), "my-tshirt-design.jpg");
    }
}
