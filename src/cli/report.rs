use crate::api::ProfileStore;
use crate::directory::Directory;
use crate::report::{Report, ReportFormat};

pub async fn generate_report(
    store: &dyn ProfileStore,
    format: &str,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let mut directory = Directory::new();
    directory.refresh(store).await?;

    let report = Report::build(directory.records());

    let fmt = match format {
        "json" => ReportFormat::Json,
        "html" => ReportFormat::Html,
        _ => ReportFormat::Terminal,
    };

    let rendered = report.render(fmt)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Report written to {path}");
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}
