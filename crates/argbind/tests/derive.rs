use argbind::core::{ConfigurationError, ConversionError, LifecycleKind, registered_rules};
use argbind::prelude::*;

const NO_ARGS: [&str; 0] = [];

// =============================================================================
// Targets
// =============================================================================

#[derive(Debug, Default, Arguments)]
#[arguments(lifecycle)]
struct HelpArgs {
    #[arg(switch = "/?", switch = "--help")]
    help: bool,
    usage_shown: usize,
    bound: usize,
}

#[lifecycle]
impl HelpArgs {
    #[on_omitted]
    fn usage(&mut self) {
        self.usage_shown += 1;
    }

    #[on_bound]
    fn done(&mut self) -> bool {
        self.bound += 1;
        self.help
    }
}

/// A boolean that counts how often it was assigned.
#[derive(Debug, Default)]
struct TrackedFlag {
    value: bool,
    sets: usize,
}

impl FromArgument for TrackedFlag {
    fn from_argument(value: ArgValue) -> Result<Self, ConversionError> {
        Ok(Self {
            value: bool::from_argument(value)?,
            sets: 1,
        })
    }

    fn assign(slot: &mut Self, value: ArgValue) -> Result<(), ConversionError> {
        slot.value = bool::from_argument(value)?;
        slot.sets += 1;
        Ok(())
    }
}

#[derive(Debug, Default, Arguments)]
struct TrackedHelp {
    #[arg(switch = "/?")]
    help: TrackedFlag,
}

#[derive(Debug, Default, Arguments)]
struct CopyArgs {
    /// Source file.
    #[arg(position = 0, required)]
    source: String,
    #[arg(position = 1, key = "--out", key = "-o", help = "Destination")]
    dest: Option<String>,
    #[arg(switch = "-f", switch = "--force")]
    force: bool,
    #[arg(key = "--retries")]
    retries: u8,
    #[arg(key = "--exclude")]
    exclude: Vec<String>,
}

#[derive(Debug, Default, Arguments)]
struct RunArgs {
    #[arg(position = 0, required)]
    program: String,
    #[arg(position = 1, trailing)]
    rest: Vec<String>,
    #[arg(switch = "-v")]
    verbose: bool,
}

#[derive(Debug, Default, Arguments)]
#[arguments(lifecycle)]
struct Noisy {
    #[arg(switch = "-q")]
    quiet: bool,
}

#[lifecycle]
impl Noisy {
    #[on_omitted]
    fn first(&self) {}

    #[on_omitted]
    fn second(&self) {}
}

#[derive(Debug, Default, Arguments)]
#[allow(dead_code)]
struct Unmarked {
    value: u32,
}

// =============================================================================
// Registered rule
// =============================================================================

/// Binds `+all` to a property named `all`.
struct PlusAll;

impl MatchRule for PlusAll {
    fn name(&self) -> &'static str {
        "plus_all"
    }

    fn apply(
        &self,
        slot: &mut dyn PropertySlot,
        args: &ArgumentContext<'_>,
    ) -> Result<bool, BindError> {
        if slot.name() != "all" || !args.tokens().iter().any(|t| t == "+all") {
            return Ok(false);
        }
        slot.bind(ArgValue::Switch)?;
        Ok(true)
    }
}

#[register_rule(priority = 5)]
fn plus_all() -> PlusAll {
    PlusAll
}

#[derive(Debug, Default, Arguments)]
struct Listing {
    #[arg(switch = "-a")]
    all: bool,
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_help_switch() {
    let args: HelpArgs = argbind::analyze(["/?"]).unwrap();

    assert!(args.help);
    assert_eq!(args.bound, 1);
    assert_eq!(args.usage_shown, 0);
}

#[test]
fn test_unrelated_token() {
    let args: HelpArgs = argbind::analyze(["someArgument"]).unwrap();

    assert!(!args.help);
    assert_eq!(args.bound, 1);
}

#[test]
fn test_setter_runs_only_for_present_switch() {
    let untouched: TrackedHelp = argbind::analyze(["someArgument"]).unwrap();
    assert_eq!(untouched.help.sets, 0);
    assert!(!untouched.help.value);

    let set: TrackedHelp = argbind::analyze(["/?"]).unwrap();
    assert_eq!(set.help.sets, 1);
    assert!(set.help.value);
}

#[test]
fn test_omitted_dispatches_handler() {
    let args: HelpArgs = argbind::analyze(NO_ARGS).unwrap();

    assert_eq!(args.usage_shown, 1);
    assert_eq!(args.bound, 0);
    assert!(!args.help);
}

#[test]
fn test_omitted_without_handlers() {
    let args: CopyArgs = argbind::analyze(NO_ARGS).unwrap();

    assert!(args.source.is_empty());
    assert!(<CopyArgs as LifecycleHandlers>::handlers(LifecycleKind::ArgumentsOmitted).is_none());
}

#[test]
fn test_schema_order_and_markers() {
    let properties = CopyArgs::properties();
    let names: Vec<_> = properties.iter().map(|p| p.name()).collect();

    assert_eq!(names, vec!["source", "dest", "force", "retries", "exclude"]);
    assert_eq!(properties[0].marker().description, Some("Source file."));
    assert!(properties[0].marker().required);
    assert_eq!(properties[1].marker().description, Some("Destination"));
    assert_eq!(properties[1].marker().keys, &["--out", "-o"]);
    assert_eq!(properties[1].marker().position, Some(1));
    assert_eq!(properties[2].marker().switches, &["-f", "--force"]);
}

#[test]
fn test_all_value_forms() {
    let args: CopyArgs = argbind::analyze([
        "a.txt",
        "-f",
        "--exclude",
        "*.tmp",
        "b.txt",
        "--exclude=*.bak",
        "--retries:3",
    ])
    .unwrap();

    assert_eq!(args.source, "a.txt");
    assert_eq!(args.dest.as_deref(), Some("b.txt"));
    assert!(args.force);
    assert_eq!(args.retries, 3);
    assert_eq!(args.exclude, vec!["*.tmp", "*.bak"]);
}

#[test]
fn test_key_beats_position() {
    let args: CopyArgs = argbind::analyze(["a.txt", "-o", "c.txt", "b.txt"]).unwrap();

    assert_eq!(args.source, "a.txt");
    assert_eq!(args.dest.as_deref(), Some("c.txt"));
}

#[test]
fn test_trailing_positionals() {
    let args: RunArgs = argbind::analyze(["-v", "cargo", "build", "--", "-v"]).unwrap();

    assert_eq!(args.program, "cargo");
    assert_eq!(args.rest, vec!["build", "-v"]);
    assert!(args.verbose);
}

#[test]
fn test_switch_after_end_of_options_is_positional() {
    let args: RunArgs = argbind::analyze(["cargo", "--", "-v"]).unwrap();

    assert_eq!(args.program, "cargo");
    assert_eq!(args.rest, vec!["-v"]);
    assert!(!args.verbose);
}

#[test]
fn test_key_after_end_of_options_is_positional() {
    let args: CopyArgs = argbind::analyze(["a.txt", "--", "-o"]).unwrap();

    assert_eq!(args.source, "a.txt");
    assert_eq!(args.dest.as_deref(), Some("-o"));
}

#[test]
fn test_conversion_failure_is_silent_by_default() {
    let mut args = CopyArgs::default();
    let outcome = ArgumentAnalyzer::<CopyArgs>::new()
        .analyze_into(&mut args, ["a.txt", "--retries", "lots"])
        .unwrap();

    let report = outcome.report().unwrap();
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].property, "retries");
    assert_eq!(args.source, "a.txt");
    assert_eq!(args.retries, 0);
}

#[test]
fn test_fail_policy_reports_missing_required() {
    let err = ArgumentAnalyzer::<CopyArgs>::new()
        .with_options(AnalyzerOptions::default().on_failure(FailurePolicy::Fail))
        .analyze(["-f"])
        .unwrap_err();

    match err {
        AnalyzeError::Rejected(report) => assert_eq!(report.missing, vec!["source"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_multiple_handlers_is_configuration_error() {
    let err = argbind::analyze::<Noisy, _, _>(NO_ARGS).unwrap_err();

    assert!(err.is_configuration());
    assert!(matches!(
        err,
        AnalyzeError::Configuration(ConfigurationError::MultipleHandlers { count: 2, .. })
    ));
    assert!(err.to_string().contains('2'));
}

#[test]
fn test_non_omitted_path_ignores_duplicate_omitted_handlers() {
    let args: Noisy = argbind::analyze(["-q"]).unwrap();
    assert!(args.quiet);
}

#[test]
fn test_no_marked_properties() {
    let err = argbind::analyze::<Unmarked, _, _>(["x"]).unwrap_err();
    assert!(matches!(
        err,
        AnalyzeError::Configuration(ConfigurationError::NoMarkedProperties { .. })
    ));

    // Nothing is discovered on the omitted path.
    assert!(argbind::analyze::<Unmarked, _, _>(NO_ARGS).is_ok());
}

#[test]
fn test_registered_rule() {
    let registered = registered_rules();
    let entry = registered
        .iter()
        .find(|r| r.name == "plus_all")
        .expect("plus_all is registered");
    assert_eq!(entry.priority, 5);

    let builtin: Listing = argbind::analyze(["+all"]).unwrap();
    assert!(!builtin.all);

    let extended = ArgumentAnalyzer::<Listing>::new()
        .with_rules(RegisteredRules::new())
        .analyze(["+all"])
        .unwrap();
    assert!(extended.all);
}

#[test]
fn test_config_driven_analyzer() {
    let mut config = ArgbindConfig::default();
    config.matching.ignore_case = true;

    let mut args = CopyArgs::default();
    config
        .analyzer::<CopyArgs>()
        .analyze_line(&mut args, "a.txt --OUT 'my file.txt' --FORCE")
        .unwrap();

    assert_eq!(args.dest.as_deref(), Some("my file.txt"));
    assert!(args.force);
}
