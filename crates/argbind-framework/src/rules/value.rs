use argbind_core::{ArgValue, ArgumentContext, BindError, MatchRule, PropertySlot};

/// Binds the value following any of the property's keys.
///
/// Accepts `key value`, `key=value` and `key:value`. Every occurrence is
/// bound in order, so scalar properties keep the last value and `Vec`
/// properties collect all of them. A key with no usable value (end of input,
/// or followed by another declared option) is a [`BindError::MissingValue`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueRule;

impl MatchRule for ValueRule {
    fn name(&self) -> &'static str {
        "value"
    }

    fn apply(
        &self,
        slot: &mut dyn PropertySlot,
        args: &ArgumentContext<'_>,
    ) -> Result<bool, BindError> {
        let keys = slot.marker().keys;
        if keys.is_empty() {
            return Ok(false);
        }

        let tokens = args.option_tokens();
        let mut matched = false;
        let mut index = 0;

        while index < tokens.len() {
            if let Some(key) = args.split_key(&tokens[index], keys) {
                let value = match key.inline {
                    Some(inline) => inline,
                    None => match tokens.get(index + 1) {
                        Some(next) if !args.is_option(next) => {
                            index += 1;
                            next.as_str()
                        }
                        _ => {
                            return Err(BindError::MissingValue {
                                property: slot.name(),
                                key: tokens[index].clone(),
                            });
                        }
                    },
                };
                slot.bind(ArgValue::from(value))?;
                matched = true;
            }
            index += 1;
        }

        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{RecordingSlot, tokens};
    use argbind_core::ArgMarker;

    const NAME: ArgMarker = ArgMarker::new().with_keys(&["--name", "-n"]);
    const VERBOSE: ArgMarker = ArgMarker::new().with_switches(&["-v"]);

    #[test]
    fn test_all_value_forms() {
        let raw = tokens(&["--name", "a", "-n=b", "--name:c"]);
        let ctx = ArgumentContext::new(&raw, [&NAME], false);
        let mut slot = RecordingSlot::new(NAME);

        assert_eq!(ValueRule.apply(&mut slot, &ctx), Ok(true));
        assert_eq!(slot.texts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_absent_key() {
        let raw = tokens(&["a", "b"]);
        let ctx = ArgumentContext::new(&raw, [&NAME], false);
        let mut slot = RecordingSlot::new(NAME);

        assert_eq!(ValueRule.apply(&mut slot, &ctx), Ok(false));
        assert!(slot.values.is_empty());
    }

    #[test]
    fn test_missing_value_at_end() {
        let raw = tokens(&["--name"]);
        let ctx = ArgumentContext::new(&raw, [&NAME], false);
        let mut slot = RecordingSlot::new(NAME);

        assert_eq!(
            ValueRule.apply(&mut slot, &ctx),
            Err(BindError::MissingValue {
                property: "recorded",
                key: "--name".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_value_before_option() {
        let raw = tokens(&["-n", "-v"]);
        let ctx = ArgumentContext::new(&raw, [&NAME, &VERBOSE], false);
        let mut slot = RecordingSlot::new(NAME);

        assert!(matches!(
            ValueRule.apply(&mut slot, &ctx),
            Err(BindError::MissingValue { .. })
        ));
    }

    #[test]
    fn test_empty_inline_value_is_bound() {
        let raw = tokens(&["--name="]);
        let ctx = ArgumentContext::new(&raw, [&NAME], false);
        let mut slot = RecordingSlot::new(NAME);

        assert_eq!(ValueRule.apply(&mut slot, &ctx), Ok(true));
        assert_eq!(slot.texts(), vec![""]);
    }

    #[test]
    fn test_stops_at_end_of_options() {
        let raw = tokens(&["--", "--name", "x"]);
        let ctx = ArgumentContext::new(&raw, [&NAME], false);
        let mut slot = RecordingSlot::new(NAME);

        assert_eq!(ValueRule.apply(&mut slot, &ctx), Ok(false));
    }

    #[test]
    fn test_conversion_failure_propagates() {
        let raw = tokens(&["--name", "x"]);
        let ctx = ArgumentContext::new(&raw, [&NAME], false);
        let mut slot = RecordingSlot::new(NAME);
        slot.reject = true;

        assert!(matches!(
            ValueRule.apply(&mut slot, &ctx),
            Err(BindError::Conversion { .. })
        ));
    }
}
