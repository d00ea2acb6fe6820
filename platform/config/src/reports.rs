use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::paths::PathsSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ExportFormat {
    #[serde(rename = "PDF")]
    Pdf,
    Excel,
    Word,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Excel, ExportFormat::Word];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Excel => "Excel",
            ExportFormat::Word => "Word",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Word => "docx",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportSettings {
    pub export_formats: Vec<ExportFormat>,
    pub pdf_page_size: String,
    pub pdf_orientation: Orientation,
    pub pdf_font: String,
    pub excel_sheet_name: String,
    pub word_font: String,
    pub word_font_size: u8,
    pub company_logo: PathBuf,
    pub export_dir: PathBuf,
}

impl ReportSettings {
    pub fn new(paths: &PathsSettings) -> Self {
        Self {
            export_formats: ExportFormat::ALL.to_vec(),
            pdf_page_size: "A4".into(),
            pdf_orientation: Orientation::Portrait,
            pdf_font: "Arial".into(),
            excel_sheet_name: "التقرير".into(),
            word_font: "Arial".into(),
            word_font_size: 11,
            company_logo: paths.images_dir.join("logo.png"),
            export_dir: paths.export_dir.clone(),
        }
    }

    pub fn supports(&self, format: ExportFormat) -> bool {
        self.export_formats.contains(&format)
    }

    /// Where an export named `stem` in `format` is written.
    pub fn export_path(&self, stem: &str, format: ExportFormat) -> PathBuf {
        self.export_dir.join(format!("{stem}.{}", format.extension()))
    }
}

/// Declared data for the auto-debit simulator. The simulator itself lives
/// elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AutoDebitSettings {
    pub default_success_rate: u8,
    pub error_codes: &'static [(&'static str, &'static str)],
}

impl Default for AutoDebitSettings {
    fn default() -> Self {
        Self {
            default_success_rate: 70,
            error_codes: &[
                ("05", "رصيد غير كافٍ"),
                ("12", "بطاقة منتهية الصلاحية"),
                ("51", "خطأ في البطاقة"),
                ("91", "مشكلة تقنية مؤقتة"),
                ("99", "خطأ غير محدد"),
            ],
        }
    }
}

impl AutoDebitSettings {
    pub fn describe(&self, code: &str) -> Option<&'static str> {
        self.error_codes
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, message)| *message)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BackupSettings {
    pub enabled: bool,
    pub interval_hours: u32,
    pub dir: PathBuf,
    pub retention_days: u32,
}

impl BackupSettings {
    pub fn new(paths: &PathsSettings) -> Self {
        Self {
            enabled: true,
            interval_hours: 24,
            dir: paths.backup_dir.clone(),
            retention_days: 30,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.interval_hours) * 3600)
    }

    pub fn retention(&self) -> Duration {
        Duration::from_secs(u64::from(self.retention_days) * 86_400)
    }
}
