use clap::Args;
use ninebox::error::AppError;
use ninebox::talent::{ClassificationService, EmployeeRecord};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Education code for the demo record
    #[arg(long, default_value = "S1")]
    pub(crate) education: String,
    /// Years of work experience for the demo record
    #[arg(long, default_value_t = 5)]
    pub(crate) work_experience: i64,
    /// Civil-service grade for the demo record
    #[arg(long, default_value = "III/c")]
    pub(crate) grade: String,
    /// Comma-separated skill list for the demo record
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "Python,Data Analysis,SQL,Machine Learning"
    )]
    pub(crate) skills: Vec<String>,
}

/// Manual smoke-test path: classify one record and print the assessment.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let record = EmployeeRecord {
        education: Some(args.education),
        work_experience: Some(args.work_experience),
        grade: Some(args.grade),
        skills: Some(args.skills),
    };

    let assessment = ClassificationService::new().classify(&record);

    let rendered = serde_json::to_string_pretty(&assessment)
        .map_err(|err| AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err)))?;
    println!("{rendered}");
    Ok(())
}
