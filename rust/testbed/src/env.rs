use crate::TestbedError;
use serde_yaml::Value;
use std::env;

const ENV_OPEN: &str = "%ENV{";

/// Replace every `%ENV{NAME}` marker found in string scalars of `doc` with the value of the
/// environment variable `NAME`. Keys are left alone.
pub fn expand_document(doc: &mut Value) -> Result<(), TestbedError> {
    expand_with(doc, &|name: &str| env::var(name).ok())
}

/// Same as [expand_document], but resolving names through `lookup`.
pub fn expand_with(
    doc: &mut Value,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<(), TestbedError> {
    match doc {
        Value::String(s) => {
            if s.contains(ENV_OPEN) {
                *s = expand_str(s, lookup)?;
            }
        }
        Value::Sequence(items) => {
            for item in items.iter_mut() {
                expand_with(item, lookup)?;
            }
        }
        Value::Mapping(map) => {
            for (_, value) in map.iter_mut() {
                expand_with(value, lookup)?;
            }
        }
        Value::Tagged(tagged) => expand_with(&mut tagged.value, lookup)?,
        _ => {}
    }
    Ok(())
}

/// Expand all markers in a single string. An unterminated marker is kept verbatim.
pub fn expand_str(
    input: &str,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<String, TestbedError> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(ENV_OPEN) {
        let after = &rest[start + ENV_OPEN.len()..];
        let Some(end) = after.find('}') else {
            break;
        };
        let name = &after[..end];
        let value = lookup(name).ok_or_else(|| TestbedError::MissingEnv(name.to_string()))?;

        out.push_str(&rest[..start]);
        out.push_str(&value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
