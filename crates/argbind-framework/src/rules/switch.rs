use argbind_core::{ArgValue, ArgumentContext, BindError, MatchRule, PropertySlot};

/// Binds [`ArgValue::Switch`] when any of the property's switches is present.
///
/// A switch repeated on the command line binds once. Tokens after `--` are
/// never switches.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwitchRule;

impl MatchRule for SwitchRule {
    fn name(&self) -> &'static str {
        "switch"
    }

    fn apply(
        &self,
        slot: &mut dyn PropertySlot,
        args: &ArgumentContext<'_>,
    ) -> Result<bool, BindError> {
        let switches = slot.marker().switches;
        if switches.is_empty() {
            return Ok(false);
        }

        let present = args
            .option_tokens()
            .iter()
            .any(|token| switches.iter().any(|switch| args.token_eq(token, switch)));
        if !present {
            return Ok(false);
        }

        slot.bind(ArgValue::Switch)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{RecordingSlot, tokens};
    use argbind_core::ArgMarker;

    const HELP: ArgMarker = ArgMarker::new().with_switches(&["/?", "--help"]);

    #[test]
    fn test_switch_present() {
        let raw = tokens(&["/?"]);
        let ctx = ArgumentContext::new(&raw, [&HELP], false);
        let mut slot = RecordingSlot::new(HELP);

        assert_eq!(SwitchRule.apply(&mut slot, &ctx), Ok(true));
        assert_eq!(slot.values, vec![ArgValue::Switch]);
    }

    #[test]
    fn test_other_token_does_not_bind() {
        let raw = tokens(&["someArgument"]);
        let ctx = ArgumentContext::new(&raw, [&HELP], false);
        let mut slot = RecordingSlot::new(HELP);

        assert_eq!(SwitchRule.apply(&mut slot, &ctx), Ok(false));
        assert!(slot.values.is_empty());
    }

    #[test]
    fn test_repeated_switch_binds_once() {
        let raw = tokens(&["--help", "/?"]);
        let ctx = ArgumentContext::new(&raw, [&HELP], false);
        let mut slot = RecordingSlot::new(HELP);

        assert_eq!(SwitchRule.apply(&mut slot, &ctx), Ok(true));
        assert_eq!(slot.values.len(), 1);
    }

    #[test]
    fn test_case_insensitive_context() {
        let raw = tokens(&["--HELP"]);
        let mut slot = RecordingSlot::new(HELP);

        let strict = ArgumentContext::new(&raw, [&HELP], false);
        assert_eq!(SwitchRule.apply(&mut slot, &strict), Ok(false));

        let relaxed = ArgumentContext::new(&raw, [&HELP], true);
        assert_eq!(SwitchRule.apply(&mut slot, &relaxed), Ok(true));
    }

    #[test]
    fn test_switch_after_end_of_options_is_positional() {
        let raw = tokens(&["cargo", "--", "--help"]);
        let ctx = ArgumentContext::new(&raw, [&HELP], false);
        let mut slot = RecordingSlot::new(HELP);

        assert_eq!(SwitchRule.apply(&mut slot, &ctx), Ok(false));
        assert!(slot.values.is_empty());
        assert_eq!(ctx.positionals(), vec!["cargo", "--help"]);
    }

    #[test]
    fn test_ignores_property_without_switches() {
        let marker = ArgMarker::new().with_position(0);
        let raw = tokens(&["/?"]);
        let ctx = ArgumentContext::new(&raw, [&marker], false);
        let mut slot = RecordingSlot::new(marker);

        assert_eq!(SwitchRule.apply(&mut slot, &ctx), Ok(false));
    }
}
