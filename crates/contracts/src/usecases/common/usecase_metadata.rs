/// Identification and display metadata of a UseCase
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u508")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "finance_screening")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u508_finance_screening"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
