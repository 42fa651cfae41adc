//! Deep JSON merging for configuration layers.

use serde_json::Value;

/// How arrays combine during a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayHandling {
    /// Source arrays replace destination arrays wholesale. This is the
    /// policy for configuration data, where a caller-supplied list is
    /// a complete statement of intent rather than an addition.
    #[default]
    Replace,
    /// Source arrays append to destination arrays.
    Concat,
}

/// Options controlling [`deep_merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    pub array_handling: ArrayHandling,
}

/// Recursively merges `src` into `dest`.
///
/// Objects merge key by key with `src` winning conflicts at the
/// leaves. Arrays follow [`MergeOptions::array_handling`]. Everything
/// else, including explicit nulls, overwrites the destination.
pub fn deep_merge(dest: &mut Value, src: &Value, options: MergeOptions) {
    match (dest, src) {
        (Value::Object(dest_map), Value::Object(src_map)) => {
            for (key, src_value) in src_map {
                match dest_map.get_mut(key) {
                    Some(dest_value) => deep_merge(dest_value, src_value, options),
                    None => {
                        dest_map.insert(key.clone(), src_value.clone());
                    }
                }
            }
        }
        (Value::Array(dest_items), Value::Array(src_items))
            if options.array_handling == ArrayHandling::Concat =>
        {
            dest_items.extend(src_items.iter().cloned());
        }
        (dest_slot, src_value) => *dest_slot = src_value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn merged(mut dest: Value, src: Value, options: MergeOptions) -> Value {
        deep_merge(&mut dest, &src, options);
        dest
    }

    #[test]
    fn objects_merge_key_by_key() {
        let result = merged(
            json!({"a": 1, "nested": {"x": 1, "y": 2}}),
            json!({"b": 2, "nested": {"y": 9}}),
            MergeOptions::default(),
        );
        assert_eq!(result, json!({"a": 1, "nested": {"x": 1, "y": 9}, "b": 2}));
    }

    #[test]
    fn arrays_replace_by_default() {
        let result = merged(
            json!({"list": [1, 2, 3]}),
            json!({"list": [9]}),
            MergeOptions::default(),
        );
        assert_eq!(result, json!({"list": [9]}));
    }

    #[test]
    fn arrays_concat_when_asked() {
        let result = merged(
            json!({"list": [1, 2]}),
            json!({"list": [3]}),
            MergeOptions {
                array_handling: ArrayHandling::Concat,
            },
        );
        assert_eq!(result, json!({"list": [1, 2, 3]}));
    }

    #[test]
    fn scalars_replace_objects_and_vice_versa() {
        let result = merged(
            json!({"slot": {"grid": 1}}),
            json!({"slot": 0.5}),
            MergeOptions::default(),
        );
        assert_eq!(result, json!({"slot": 0.5}));

        let result = merged(
            json!({"slot": 0.5}),
            json!({"slot": {"grid": 1}}),
            MergeOptions::default(),
        );
        assert_eq!(result, json!({"slot": {"grid": 1}}));
    }

    #[test]
    fn explicit_null_overwrites() {
        let result = merged(
            json!({"a": 1}),
            json!({"a": null}),
            MergeOptions::default(),
        );
        assert_eq!(result, json!({"a": null}));
    }

    #[test]
    fn empty_source_changes_nothing() {
        let dest = json!({"a": {"b": [1]}});
        assert_eq!(
            merged(dest.clone(), json!({}), MergeOptions::default()),
            dest
        );
    }
}
