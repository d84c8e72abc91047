use argbind_core::{ArgValue, ArgumentContext, BindError, MatchRule, PropertySlot};

/// Binds the positional token at the property's `position`.
///
/// When the marker is `trailing`, every positional token from that index on
/// is bound in order. A property that also declares keys is skipped when one
/// of its keys appears before `--`, so `--out x` wins over a stray positional.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalRule;

impl MatchRule for PositionalRule {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn apply(
        &self,
        slot: &mut dyn PropertySlot,
        args: &ArgumentContext<'_>,
    ) -> Result<bool, BindError> {
        let marker = *slot.marker();
        let Some(index) = marker.position else {
            return Ok(false);
        };

        if !marker.keys.is_empty()
            && args
                .option_tokens()
                .iter()
                .any(|token| args.split_key(token, marker.keys).is_some())
        {
            return Ok(false);
        }

        let positionals = args.positionals();
        let Some(selected) = positionals.get(index..).filter(|rest| !rest.is_empty()) else {
            return Ok(false);
        };

        let take = if marker.trailing { selected.len() } else { 1 };
        for token in &selected[..take] {
            slot.bind(ArgValue::from(*token))?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{RecordingSlot, tokens};
    use argbind_core::ArgMarker;

    const SOURCE: ArgMarker = ArgMarker::new().with_position(0);
    const DEST: ArgMarker = ArgMarker::new().with_position(1).with_keys(&["--out"]);
    const REST: ArgMarker = ArgMarker::new().with_position(1).trailing();
    const FORCE: ArgMarker = ArgMarker::new().with_switches(&["-f"]);

    #[test]
    fn test_selects_by_index() {
        let raw = tokens(&["a.txt", "-f", "b.txt"]);
        let ctx = ArgumentContext::new(&raw, [&SOURCE, &DEST, &FORCE], false);

        let mut source = RecordingSlot::new(SOURCE);
        assert_eq!(PositionalRule.apply(&mut source, &ctx), Ok(true));
        assert_eq!(source.texts(), vec!["a.txt"]);

        let mut dest = RecordingSlot::new(DEST);
        assert_eq!(PositionalRule.apply(&mut dest, &ctx), Ok(true));
        assert_eq!(dest.texts(), vec!["b.txt"]);
    }

    #[test]
    fn test_out_of_range() {
        let raw = tokens(&["a.txt"]);
        let ctx = ArgumentContext::new(&raw, [&SOURCE, &DEST], false);
        let mut dest = RecordingSlot::new(DEST);

        assert_eq!(PositionalRule.apply(&mut dest, &ctx), Ok(false));
        assert!(dest.values.is_empty());
    }

    #[test]
    fn test_key_present_skips_positional() {
        let raw = tokens(&["a.txt", "--out", "c.txt", "b.txt"]);
        let ctx = ArgumentContext::new(&raw, [&SOURCE, &DEST], false);
        let mut dest = RecordingSlot::new(DEST);

        assert_eq!(PositionalRule.apply(&mut dest, &ctx), Ok(false));
    }

    #[test]
    fn test_key_after_end_of_options_is_positional() {
        let raw = tokens(&["a.txt", "--", "--out"]);
        let ctx = ArgumentContext::new(&raw, [&SOURCE, &DEST], false);
        let mut dest = RecordingSlot::new(DEST);

        assert_eq!(PositionalRule.apply(&mut dest, &ctx), Ok(true));
        assert_eq!(dest.texts(), vec!["--out"]);
    }

    #[test]
    fn test_trailing_takes_rest() {
        let raw = tokens(&["cmd", "x", "-f", "y", "z"]);
        let ctx = ArgumentContext::new(&raw, [&SOURCE, &REST, &FORCE], false);
        let mut rest = RecordingSlot::new(REST);

        assert_eq!(PositionalRule.apply(&mut rest, &ctx), Ok(true));
        assert_eq!(rest.texts(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_ignores_property_without_position() {
        let raw = tokens(&["a"]);
        let ctx = ArgumentContext::new(&raw, [&FORCE], false);
        let mut slot = RecordingSlot::new(FORCE);

        assert_eq!(PositionalRule.apply(&mut slot, &ctx), Ok(false));
    }
}
