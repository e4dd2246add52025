use std::collections::HashSet;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use rehnuma_app::ports::{SeedData, SeedSource};
use rehnuma_domain::error::RehnumaError;

use crate::error::SeedError;
use crate::row::{ServiceRow, StepRow};

pub const SERVICES_FILE: &str = "services.csv";
pub const STEPS_FILE: &str = "steps.csv";

/// Reads `services.csv` and `steps.csv` from one directory.
#[derive(Debug, Clone)]
pub struct CsvSeedSource {
    dir: PathBuf,
}

impl CsvSeedSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Read a whole file, or `None` when it does not exist.
async fn read_optional(path: PathBuf) -> Result<Option<Vec<u8>>, SeedError> {
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "seed file missing");
            Ok(None)
        }
        Err(source) => Err(SeedError::Io { path, source }),
    }
}

/// Deserialize every data row, numbering rows from 1 after the header.
fn parse_rows<R, T>(
    file: &'static str,
    bytes: &[u8],
    convert: impl Fn(R, usize) -> Result<T, SeedError>,
) -> Result<Vec<T>, SeedError>
where
    R: DeserializeOwned,
{
    csv::Reader::from_reader(bytes)
        .deserialize::<R>()
        .enumerate()
        .map(|(index, result)| {
            let row = index + 1;
            let raw = result.map_err(|source| SeedError::Csv { file, row, source })?;
            convert(raw, row)
        })
        .collect()
}

/// Reject rows that would collide once inserted.
fn check_unique(data: &SeedData) -> Result<(), SeedError> {
    let mut service_ids = HashSet::new();
    for (index, record) in data.services.iter().enumerate() {
        if !service_ids.insert(record.source_id.as_str()) {
            return Err(SeedError::DuplicateServiceId {
                file: SERVICES_FILE,
                row: index + 1,
                value: record.source_id.clone(),
            });
        }
    }

    let mut steps = HashSet::new();
    for (index, record) in data.steps.iter().enumerate() {
        if !steps.insert((record.source_service_id.as_str(), record.step.step_number)) {
            return Err(SeedError::DuplicateStep {
                file: STEPS_FILE,
                row: index + 1,
                service_id: record.source_service_id.clone(),
                step_number: record.step.step_number,
            });
        }
    }
    Ok(())
}

impl SeedSource for CsvSeedSource {
    fn load(&self) -> impl Future<Output = Result<Option<SeedData>, RehnumaError>> + Send {
        let services_path = self.dir.join(SERVICES_FILE);
        let steps_path = self.dir.join(STEPS_FILE);
        async move {
            let Some(services) = read_optional(services_path).await? else {
                return Ok(None);
            };
            let Some(steps) = read_optional(steps_path).await? else {
                return Ok(None);
            };

            let data = SeedData {
                services: parse_rows(SERVICES_FILE, &services, ServiceRow::into_record)?,
                steps: parse_rows(STEPS_FILE, &steps, StepRow::into_record)?,
            };
            check_unique(&data)?;
            tracing::debug!(
                services = data.services.len(),
                steps = data.steps.len(),
                "seed files parsed"
            );
            Ok(Some(data))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICES: &str = "\
title_en,title_ur,type,icon,description_en,description_ur,checklist_en,checklist_ur,jurisdiction,office_locations,estimated_days,fee_structure,id
General OPD,جنرل او پی ڈی,hospital,Activity,Hospital guide,ہسپتال رہنمائی,\"[\"\"Original CNIC\"\"]\",\"[\"\"اصل شناختی کارڈ\"\"]\",,[],Same Day,Rs. 10,1
\"Domicile & PRC (Karachi)\",ڈومیسائل,government,FileText,\"DC Office, Karachi\",,,,Sindh Government,\"[\"\"DC South\"\",\"\"DC East\"\"]\",15-21 Days,,2
";

    const STEPS: &str = "\
service_id,step_number,title_en,title_ur,description_en,description_ur,image_path
1,2,Registration,رجسٹریشن,Get a slip,پرچی لیں,
1,1,Token,ٹوکن,Take a token,ٹوکن لیں,/images/token.png
2,1,Form P/D,فارم,Collect forms,,
";

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let path =
                std::env::temp_dir().join(format!("rehnuma-seed-{}-{name}", std::process::id()));
            let _ = std::fs::remove_dir_all(&path);
            std::fs::create_dir_all(&path).unwrap();
            Self(path)
        }

        fn write(&self, file: &str, content: &str) {
            std::fs::write(self.0.join(file), content).unwrap();
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[tokio::test]
    async fn should_parse_services_and_steps_when_both_files_exist() {
        let dir = TempDir::new("both");
        dir.write(SERVICES_FILE, SERVICES);
        dir.write(STEPS_FILE, STEPS);

        let data = CsvSeedSource::new(&dir.0).load().await.unwrap().unwrap();

        assert_eq!(data.services.len(), 2);
        let opd = &data.services[0];
        assert_eq!(opd.source_id, "1");
        assert_eq!(opd.service.checklist_en, vec!["Original CNIC"]);
        assert_eq!(opd.service.checklist_ur, vec!["اصل شناختی کارڈ"]);
        assert_eq!(opd.service.jurisdiction, None);

        let domicile = &data.services[1];
        assert_eq!(domicile.service.title_en, "Domicile & PRC (Karachi)");
        assert_eq!(domicile.service.description_en, "DC Office, Karachi");
        assert_eq!(domicile.service.office_locations, vec!["DC South", "DC East"]);
        assert!(domicile.service.checklist_en.is_empty());

        assert_eq!(data.steps.len(), 3);
        assert_eq!(data.steps[1].source_service_id, "1");
        assert_eq!(data.steps[1].step.step_number, 1);
        assert_eq!(
            data.steps[1].step.image_path.as_deref(),
            Some("/images/token.png")
        );
        assert_eq!(data.steps[0].step.image_path, None);
    }

    #[tokio::test]
    async fn should_return_none_when_steps_file_missing() {
        let dir = TempDir::new("no-steps");
        dir.write(SERVICES_FILE, SERVICES);

        let result = CsvSeedSource::new(&dir.0).load().await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_directory_missing() {
        let source = CsvSeedSource::new("/nonexistent/rehnuma/seed");
        assert!(source.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_fail_when_step_number_is_not_integer() {
        let dir = TempDir::new("bad-step");
        dir.write(SERVICES_FILE, SERVICES);
        dir.write(
            STEPS_FILE,
            "service_id,step_number,title_en,title_ur,description_en,description_ur,image_path\n1,first,Token,,Take a token,,\n",
        );

        let result = CsvSeedSource::new(&dir.0).load().await;
        assert!(matches!(result, Err(RehnumaError::Seed(_))));
    }

    #[tokio::test]
    async fn should_report_row_of_malformed_line() {
        let dir = TempDir::new("bad-row");
        dir.write(
            SERVICES_FILE,
            "title_en,title_ur,type,icon,description_en,description_ur,checklist_en,checklist_ur,jurisdiction,office_locations,estimated_days,fee_structure,id\nOPD,,hospital,Activity,guide,,[],[],,[],,,1\nonly,three,cells\n",
        );
        dir.write(STEPS_FILE, STEPS);

        let Err(RehnumaError::Seed(err)) = CsvSeedSource::new(&dir.0).load().await else {
            panic!("expected a seed error");
        };
        let err = err.downcast::<SeedError>().unwrap();
        assert!(matches!(
            *err,
            SeedError::Csv {
                file: SERVICES_FILE,
                row: 2,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn should_reject_duplicate_step_number_for_one_service() {
        let dir = TempDir::new("dup-step");
        dir.write(SERVICES_FILE, SERVICES);
        dir.write(
            STEPS_FILE,
            "service_id,step_number,title_en,title_ur,description_en,description_ur,image_path\n1,1,Token,,Take a token,,\n2,1,Form P/D,,Collect forms,,\n1,1,Token again,,Take another token,,\n",
        );

        let Err(RehnumaError::Seed(err)) = CsvSeedSource::new(&dir.0).load().await else {
            panic!("expected a seed error");
        };
        let err = err.downcast::<SeedError>().unwrap();
        assert!(matches!(
            *err,
            SeedError::DuplicateStep {
                file: STEPS_FILE,
                row: 3,
                step_number: 1,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn should_reject_duplicate_service_id() {
        let dir = TempDir::new("dup-service");
        dir.write(
            SERVICES_FILE,
            "title_en,title_ur,type,icon,description_en,description_ur,checklist_en,checklist_ur,jurisdiction,office_locations,estimated_days,fee_structure,id\nOPD,,hospital,Activity,guide,,[],[],,[],,,1\nNADRA,,government,Card,guide,,[],[],,[],,,1\n",
        );
        dir.write(STEPS_FILE, STEPS);

        let Err(RehnumaError::Seed(err)) = CsvSeedSource::new(&dir.0).load().await else {
            panic!("expected a seed error");
        };
        let err = err.downcast::<SeedError>().unwrap();
        assert!(matches!(
            *err,
            SeedError::DuplicateServiceId {
                file: SERVICES_FILE,
                row: 2,
                ..
            }
        ));
    }
}
